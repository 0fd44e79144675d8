use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, Point2, Rect};
use crate::impls::{Contour, Polygon};

/// Geometry value that can be one of the supported geometry types.
///
/// The enum is closed on purpose: rendering code dispatches over it exhaustively, so adding a
/// variant forces every consumer to handle it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geom<P> {
    /// Point.
    Point(P),
    /// Contour (line string).
    Contour(Contour<P>),
    /// Polygon.
    Polygon(Polygon<P>),
    /// Multiple polygons treated as a single geometry.
    MultiPolygon(Vec<Polygon<P>>),
}

impl<P: CartesianPoint2d> Geom<P> {
    /// Bounding rectangle of the geometry, or `None` for a geometry without points.
    pub fn bounding_rect(&self) -> Option<Rect<P::Num>> {
        match self {
            Geom::Point(p) => Some(Rect::new(p.x(), p.y(), p.x(), p.y())),
            Geom::Contour(contour) => Rect::from_points(contour.iter_points()),
            Geom::Polygon(polygon) => Rect::from_points(polygon.outer_contour.iter_points()),
            Geom::MultiPolygon(polygons) => polygons
                .iter()
                .filter_map(|p| Rect::from_points(p.outer_contour.iter_points()))
                .reduce(|a, b| a.merge(b)),
        }
    }

    /// The anchor point of the geometry.
    ///
    /// A point anchors at itself, any other geometry at the center of its bounding rectangle.
    pub fn representative_point(&self) -> Option<Point2<P::Num>> {
        match self {
            Geom::Point(p) => Some(Point2::new(p.x(), p.y())),
            other => Some(other.bounding_rect()?.center()),
        }
    }
}

impl<P> From<P> for Geom<P> {
    fn from(value: P) -> Self {
        Geom::Point(value)
    }
}

impl<P> From<Contour<P>> for Geom<P> {
    fn from(value: Contour<P>) -> Self {
        Geom::Contour(value)
    }
}

impl<P> From<Polygon<P>> for Geom<P> {
    fn from(value: Polygon<P>) -> Self {
        Geom::Polygon(value)
    }
}
