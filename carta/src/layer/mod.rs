//! Layers group features and define the order in which they are rendered.

mod feature;
mod memory;

pub use feature::Feature;
pub use memory::MemoryLayer;

/// An ordered sequence of features.
///
/// During a render call layers are read-only: the renderer iterates the features in their stored
/// order and never mutates them. Callers must not modify a layer while a render over it is in
/// flight.
pub trait Layer {
    /// Features of the layer, in draw order.
    fn features(&self) -> &[Feature];
}

impl<T: Layer + ?Sized> Layer for Box<T> {
    fn features(&self) -> &[Feature] {
        (**self).features()
    }
}

impl<T: Layer + ?Sized> Layer for &T {
    fn features(&self) -> &[Feature] {
        (**self).features()
    }
}
