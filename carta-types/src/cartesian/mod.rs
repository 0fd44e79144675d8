//! Types and functions on geometries in cartesian coordinates.

mod point;
mod rect;
mod size;
mod traits;

pub use point::Point2;
pub use rect::Rect;
pub use size::Size;
pub use traits::CartesianPoint2d;
