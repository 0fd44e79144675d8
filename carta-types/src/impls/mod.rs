//! Concrete implementations of geometry types.

mod contour;
mod polygon;

pub use contour::{ClosedContour, Contour};
pub use polygon::Polygon;
