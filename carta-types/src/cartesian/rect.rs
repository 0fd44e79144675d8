use nalgebra::Scalar;
use num_traits::{FromPrimitive, Num};
use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, Point2};

/// Axis-aligned rectangle in cartesian coordinate space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    x_min: N,
    y_min: N,
    x_max: N,
    y_max: N,
}

impl<N: Num + Copy + PartialOrd + Scalar + FromPrimitive + num_traits::Bounded> Rect<N> {
    /// Creates a new rectangle.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Returns the bounding rectangle of the given set of points, or `None` if the iterator is
    /// empty.
    pub fn from_points<'a, P>(points: impl IntoIterator<Item = &'a P>) -> Option<Self>
    where
        P: CartesianPoint2d<Num = N> + 'a,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut rect = Self::new(first.x(), first.y(), first.x(), first.y());
        for p in iter {
            if p.x() < rect.x_min {
                rect.x_min = p.x();
            }
            if p.x() > rect.x_max {
                rect.x_max = p.x();
            }
            if p.y() < rect.y_min {
                rect.y_min = p.y();
            }
            if p.y() > rect.y_max {
                rect.y_max = p.y();
            }
        }

        Some(rect)
    }

    /// Minimum X coordinate.
    pub fn x_min(&self) -> N {
        self.x_min
    }

    /// Maximum X coordinate.
    pub fn x_max(&self) -> N {
        self.x_max
    }

    /// Minimum Y coordinate.
    pub fn y_min(&self) -> N {
        self.y_min
    }

    /// Maximum Y coordinate.
    pub fn y_max(&self) -> N {
        self.y_max
    }

    /// Width of the rectangle.
    pub fn width(&self) -> N {
        self.x_max - self.x_min
    }

    /// Height of the rectangle.
    pub fn height(&self) -> N {
        self.y_max - self.y_min
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Point2<N> {
        let two = N::from_f64(2.0).expect("const conversion failed");
        Point2::new(
            (self.x_min + self.x_max) / two,
            (self.y_min + self.y_max) / two,
        )
    }

    /// Returns the smallest rectangle containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: if self.x_min < other.x_min {
                self.x_min
            } else {
                other.x_min
            },
            y_min: if self.y_min < other.y_min {
                self.y_min
            } else {
                other.y_min
            },
            x_max: if self.x_max > other.x_max {
                self.x_max
            } else {
                other.x_max
            },
            y_max: if self.y_max > other.y_max {
                self.y_max
            } else {
                other.y_max
            },
        }
    }
}
