use approx::AbsDiffEq;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::cartesian::traits::CartesianPoint2d;

/// A point in 2-dimensional cartesian coordinate space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point2<Num = f64> {
    x: Num,
    y: Num,
}

impl<Num> Point2<Num> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }

    /// Returns coordinates of the point as an array of `Num`.
    pub fn coords(&self) -> [Num; 2]
    where
        Num: Copy,
    {
        [self.x, self.y]
    }
}

impl<Num> CartesianPoint2d for Point2<Num>
where
    Num: num_traits::Num
        + Copy
        + PartialOrd
        + num_traits::Bounded
        + nalgebra::Scalar
        + num_traits::FromPrimitive,
{
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }

    fn y(&self) -> Num {
        self.y
    }
}

impl<Num> std::ops::Sub<Point2<Num>> for Point2<Num>
where
    Num: std::ops::Sub<Num, Output = Num> + Copy + PartialEq + std::fmt::Debug + 'static,
{
    type Output = Vector2<Num>;

    fn sub(self, rhs: Point2<Num>) -> Self::Output {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<Num> std::ops::Add<Vector2<Num>> for Point2<Num>
where
    Num: std::ops::Add<Num, Output = Num> + Copy + PartialEq + std::fmt::Debug + 'static,
{
    type Output = Point2<Num>;

    fn add(self, rhs: Vector2<Num>) -> Self::Output {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<Num: AbsDiffEq<Epsilon = Num> + Copy> AbsDiffEq for Point2<Num> {
    type Epsilon = Num;

    fn default_epsilon() -> Self::Epsilon {
        Num::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetics() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(4.0, 6.0);

        let v = b - a;
        assert_eq!(v, Vector2::new(3.0, 4.0));
        assert_eq!(a + v, b);
    }
}
