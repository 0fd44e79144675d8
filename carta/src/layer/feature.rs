use carta_types::cartesian::Point2;
use carta_types::Geom;

use crate::style::Style;

/// A geographic object with a geometry and the styles that define how it is drawn.
///
/// All attached styles are rendered, in the order they are stored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feature {
    geometry: Geom<Point2>,
    styles: Vec<Style>,
}

impl Feature {
    /// Creates a new feature with no styles.
    pub fn new(geometry: impl Into<Geom<Point2>>) -> Self {
        Self {
            geometry: geometry.into(),
            styles: vec![],
        }
    }

    /// Adds a style to the feature.
    pub fn with_style(mut self, style: impl Into<Style>) -> Self {
        self.styles.push(style.into());
        self
    }

    /// Adds a style to the feature.
    pub fn push_style(&mut self, style: impl Into<Style>) {
        self.styles.push(style.into());
    }

    /// Geometry of the feature.
    pub fn geometry(&self) -> &Geom<Point2> {
        &self.geometry
    }

    /// Styles of the feature, in draw order.
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }
}
