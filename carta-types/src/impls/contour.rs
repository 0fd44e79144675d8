use serde::{Deserialize, Serialize};

/// Sequence of points, open or closed.
///
/// A closed contour has an implicit segment connecting the last and the first points. The first
/// point is not duplicated at the end of the sequence; use [`Contour::iter_points_closing`] when
/// the closing point is needed.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contour<Point> {
    points: Vec<Point>,
    is_closed: bool,
}

impl<Point> Contour<Point> {
    /// Creates a new contour.
    pub fn new(points: Vec<Point>, is_closed: bool) -> Self {
        Self { points, is_closed }
    }

    /// Creates a new open contour.
    pub fn open(points: Vec<Point>) -> Self {
        Self {
            points,
            is_closed: false,
        }
    }

    /// Creates a new closed contour.
    pub fn closed(points: Vec<Point>) -> Self {
        Self {
            points,
            is_closed: true,
        }
    }

    /// Whether the contour is closed.
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Points of the contour.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the points of the contour.
    pub fn iter_points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Same as [`Contour::iter_points`], but for closed contours the first point is repeated at
    /// the end of the iterator.
    pub fn iter_points_closing(&self) -> impl Iterator<Item = &Point> {
        let closing = if self.is_closed {
            self.points.first()
        } else {
            None
        };
        self.points.iter().chain(closing)
    }

    /// Converts self into a [`ClosedContour`], or returns `None` if the contour is open.
    pub fn into_closed(self) -> Option<ClosedContour<Point>> {
        if self.is_closed {
            Some(ClosedContour {
                points: self.points,
            })
        } else {
            None
        }
    }
}

/// Closed contour implementation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClosedContour<Point> {
    /// Points of the contour.
    pub points: Vec<Point>,
}

impl<Point> ClosedContour<Point> {
    /// Creates a new closed contour.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Iterates over the points of the contour.
    pub fn iter_points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Iterates over the points of the contour, repeating the first point at the end.
    pub fn iter_points_closing(&self) -> impl Iterator<Item = &Point> {
        self.points.iter().chain(self.points.first())
    }
}

impl<Point> From<ClosedContour<Point>> for Contour<Point> {
    fn from(value: ClosedContour<Point>) -> Self {
        Self {
            points: value.points,
            is_closed: true,
        }
    }
}
