use crate::layer::{Feature, Layer};

/// A layer holding its features in memory.
///
/// The features are rendered in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct MemoryLayer {
    features: Vec<Feature>,
}

impl MemoryLayer {
    /// Creates an empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a feature to the end of the layer.
    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    /// Adds all the given features to the end of the layer.
    pub fn extend(&mut self, features: impl IntoIterator<Item = Feature>) {
        self.features.extend(features);
    }
}

impl From<Vec<Feature>> for MemoryLayer {
    fn from(features: Vec<Feature>) -> Self {
        Self { features }
    }
}

impl Layer for MemoryLayer {
    fn features(&self) -> &[Feature] {
        &self.features
    }
}
