//! Resolution of world-space styles into device-space draw operations.

use carta_types::cartesian::{CartesianPoint2d, Point2};
use carta_types::impls::{ClosedContour, Contour, Polygon};
use carta_types::Geom;

use crate::decoded_image::{DecodedImage, ImageRegistry};
use crate::error::CartaError;
use crate::layer::Feature;
use crate::render::symbol::default_marker;
use crate::style::{Pen, Style, SymbolStyle, UnitType, VectorStyle};
use crate::{Color, MapView};

/// A draw operation with all quantities resolved into screen space.
///
/// This is the boundary between the world-space style model and the rasterizers: a `DrawOp`
/// carries no world coordinates and no unit types, only pixels.
#[derive(Debug)]
pub(crate) enum DrawOp<'a> {
    /// Draw a bitmap at the given screen position.
    Symbol {
        image: &'a DecodedImage,
        /// Screen position of the bitmap center.
        position: Point2,
        /// Rotation in degrees, clockwise.
        rotation: f64,
        /// Size multiplier applied to the bitmap.
        scale: f64,
    },
    /// Fill and/or stroke a shape given by screen-space contours.
    Shape {
        contours: Vec<Contour<Point2>>,
        fill: Option<Color>,
        outline: Option<Pen>,
    },
}

/// Resolves one style of a feature into draw operations.
///
/// Neither the feature nor the style is modified. An unstyled or empty input resolves into an
/// empty vector.
pub(crate) fn resolve<'a>(
    feature: &Feature,
    style: &Style,
    view: &MapView,
    images: &'a ImageRegistry,
) -> Result<Vec<DrawOp<'a>>, CartaError> {
    match style {
        Style::Symbol(symbol) => Ok(resolve_symbol(feature, symbol, view, images)),
        Style::Vector(vector) => resolve_vector(feature, vector, view),
    }
}

fn resolve_symbol<'a>(
    feature: &Feature,
    style: &SymbolStyle,
    view: &MapView,
    images: &'a ImageRegistry,
) -> Vec<DrawOp<'a>> {
    let Some(anchor) = feature.geometry().representative_point() else {
        return vec![];
    };

    // WorldUnit quantities are given in world units and shrink with resolution; Pixel quantities
    // are device pixels already.
    let (divisor, scale) = match style.unit_type {
        UnitType::Pixel => (1.0, 1.0),
        UnitType::WorldUnit => (view.resolution(), 1.0 / view.resolution()),
    };

    let anchor = view.map_to_screen(&anchor);
    // Positive dy offsets move the symbol up, so the screen Y component is subtracted.
    let position = Point2::new(
        anchor.x() + style.offset.dx / divisor,
        anchor.y() - style.offset.dy / divisor,
    );

    let image = match style.image {
        Some(id) => match images.get(id) {
            Some(image) => image,
            None => {
                log::warn!(
                    "{}, falling back to the default marker",
                    CartaError::MissingBitmap(id)
                );
                default_marker()
            }
        },
        None => default_marker(),
    };

    vec![DrawOp::Symbol {
        image,
        position,
        rotation: style.rotation,
        scale,
    }]
}

fn resolve_vector<'a>(
    feature: &Feature,
    style: &VectorStyle,
    view: &MapView,
) -> Result<Vec<DrawOp<'a>>, CartaError> {
    if style.is_empty() {
        return Ok(vec![]);
    }

    let fill = style.fill.map(|brush| brush.color);
    let outline = style.outline;

    match feature.geometry() {
        Geom::Point(_) => Err(CartaError::UnsupportedGeometry {
            style: "vector",
            geometry: "point",
        }),
        Geom::Contour(contour) => {
            let screen = Contour::new(
                contour.iter_points().map(|p| view.map_to_screen(p)).collect(),
                contour.is_closed(),
            );
            // An open contour has no interior to fill.
            let fill = if contour.is_closed() { fill } else { None };
            Ok(vec![DrawOp::Shape {
                contours: vec![screen],
                fill,
                outline,
            }])
        }
        Geom::Polygon(polygon) => Ok(vec![polygon_shape(polygon, view, fill, outline)]),
        Geom::MultiPolygon(polygons) => Ok(polygons
            .iter()
            .map(|polygon| polygon_shape(polygon, view, fill, outline))
            .collect()),
    }
}

fn polygon_shape<'a>(
    polygon: &Polygon<Point2>,
    view: &MapView,
    fill: Option<Color>,
    outline: Option<Pen>,
) -> DrawOp<'a> {
    let project = |contour: &ClosedContour<Point2>| {
        Contour::closed(contour.iter_points().map(|p| view.map_to_screen(p)).collect())
    };

    DrawOp::Shape {
        contours: polygon.iter_contours().map(project).collect(),
        fill,
        outline,
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use carta_types::cartesian::Size;

    use super::*;
    use crate::style::Brush;

    fn test_view() -> MapView {
        MapView::new(Point2::new(0.0, 0.0), 1.0).with_size(Size::new(100, 100))
    }

    #[test]
    fn vector_style_on_point_is_rejected() {
        let feature = Feature::new(Point2::new(0.0, 0.0));
        let style = Style::Vector(VectorStyle::new().with_fill(Brush::new(Color::RED)));

        let images = ImageRegistry::new();
        let result = resolve(&feature, &style, &test_view(), &images);
        assert_matches!(
            result,
            Err(CartaError::UnsupportedGeometry {
                style: "vector",
                geometry: "point"
            })
        );
    }

    #[test]
    fn empty_vector_style_is_noop() {
        let feature = Feature::new(Point2::new(0.0, 0.0));
        let style = Style::Vector(VectorStyle::new());

        let images = ImageRegistry::new();
        let ops =
            resolve(&feature, &style, &test_view(), &images).expect("no-op style failed");
        assert!(ops.is_empty());
    }

    #[test]
    fn world_unit_offset_scales_with_resolution() {
        let feature = Feature::new(Point2::new(0.0, 0.0));
        let style = Style::Symbol(
            SymbolStyle::new()
                .with_unit_type(UnitType::WorldUnit)
                .with_offset(10.0, 0.0),
        );

        let view = test_view().with_resolution(0.5);
        let images = ImageRegistry::new();
        let ops = resolve(&feature, &style, &view, &images).expect("resolution failed");
        assert_matches!(&ops[..], [DrawOp::Symbol { position, scale, .. }] => {
            // 10 world units at resolution 0.5 is 20 pixels right of the canvas center.
            assert_eq!(position.x(), 70.0);
            assert_eq!(*scale, 2.0);
        });
    }

    #[test]
    fn pixel_offset_ignores_resolution() {
        let feature = Feature::new(Point2::new(0.0, 0.0));
        let style = Style::Symbol(SymbolStyle::new().with_offset(10.0, 4.0));

        let view = test_view().with_resolution(0.5);
        let images = ImageRegistry::new();
        let ops = resolve(&feature, &style, &view, &images).expect("resolution failed");
        assert_matches!(&ops[..], [DrawOp::Symbol { position, scale, .. }] => {
            assert_eq!(position.x(), 60.0);
            // dy is world-oriented: positive moves the symbol up on the screen.
            assert_eq!(position.y(), 46.0);
            assert_eq!(*scale, 1.0);
        });
    }
}
