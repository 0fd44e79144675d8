use assert_matches::assert_matches;
use carta::layer::{Feature, MemoryLayer};
use carta::style::{Brush, Pen, SymbolStyle, UnitType, VectorStyle};
use carta::{CartaError, Color, DecodedImage, ImageRegistry, MapRenderer, MapView, RenderedFrame};
use carta_types::cartesian::{CartesianPoint2d, Point2, Size};
use carta_types::impls::Polygon;

const NO_LAYERS: [MemoryLayer; 0] = [];

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn decode(frame: &RenderedFrame) -> image::RgbaImage {
    image::load_from_memory(frame.bytes()).expect("invalid PNG output").to_rgba8()
}

fn color_at(image: &image::RgbaImage, x: u32, y: u32) -> Color {
    let p = image.get_pixel(x, y).0;
    Color::rgba(p[0], p[1], p[2], p[3])
}

fn square_around(center: Point2, half_size: f64) -> Polygon<Point2> {
    Polygon::from(vec![
        Point2::new(center.x() - half_size, center.y() - half_size),
        Point2::new(center.x() + half_size, center.y() - half_size),
        Point2::new(center.x() + half_size, center.y() + half_size),
        Point2::new(center.x() - half_size, center.y() + half_size),
    ])
}

/// A 8x8 bitmap with four differently colored quadrants, useful for rotation tests.
fn quadrant_bitmap() -> DecodedImage {
    let colors = [Color::RED, Color::GREEN, Color::BLUE, Color::YELLOW];
    let mut bytes = Vec::with_capacity(8 * 8 * 4);
    for y in 0..8 {
        for x in 0..8 {
            let quadrant = (y / 4) * 2 + x / 4;
            bytes.extend_from_slice(&colors[quadrant as usize].to_u8_array());
        }
    }

    DecodedImage::from_raw(bytes, 8, 8).expect("invalid test bitmap")
}

#[test]
fn empty_render_is_fully_transparent() {
    init_logging();
    let view = MapView::new(Point2::new(0.0, 0.0), 1.0).with_size(Size::new(64, 32));
    let frame = MapRenderer::new().render(&view, &NO_LAYERS).expect("render failed");

    let image = decode(&frame);
    assert_eq!(image.dimensions(), (64, 32));
    assert!(image.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    assert!(frame.errors().is_empty());
}

#[test]
fn invalid_viewport_fails_fast() {
    init_logging();
    let view = MapView::new(Point2::new(0.0, 0.0), 0.0).with_size(Size::new(64, 64));
    assert_matches!(
        MapRenderer::new().render(&view, &NO_LAYERS),
        Err(CartaError::InvalidViewport(_))
    );

    let view = MapView::new(Point2::new(0.0, 0.0), 1.0).with_size(Size::new(0, 64));
    assert_matches!(
        MapRenderer::new().render(&view, &NO_LAYERS),
        Err(CartaError::InvalidViewport(_))
    );
}

#[test]
fn rendering_is_deterministic() {
    init_logging();
    let mut registry = ImageRegistry::new();
    let bitmap = registry.register(quadrant_bitmap());

    let mut layer = MemoryLayer::new();
    layer.push(
        Feature::new(square_around(Point2::new(10.0, 10.0), 20.0)).with_style(
            VectorStyle::new()
                .with_fill(Brush::new(Color::rgba(0, 120, 250, 180)))
                .with_outline(Pen::new(Color::BLACK, 2.0)),
        ),
    );
    layer.push(
        Feature::new(Point2::new(-15.0, 20.0))
            .with_style(SymbolStyle::new().with_image(bitmap).with_rotation(45.0)),
    );

    let view = MapView::new(Point2::new(0.0, 0.0), 0.5).with_size(Size::new(128, 128));

    let first = MapRenderer::with_images(registry.clone())
        .render(&view, std::slice::from_ref(&layer))
        .expect("render failed");
    let second = MapRenderer::with_images(registry)
        .render(&view, std::slice::from_ref(&layer))
        .expect("render failed");

    assert_eq!(first.bytes(), second.bytes());
}

#[test]
fn render_vector_shapes() {
    init_logging();
    // The same scene as the reference renderer's vector symbol test: four small shapes around
    // the view center.
    let view = MapView::new(Point2::new(100.0, 100.0), 1.0).with_size(Size::new(200, 200));

    let mut layer = MemoryLayer::new();
    layer.push(
        Feature::new(square_around(Point2::new(50.0, 50.0), 5.0))
            .with_style(VectorStyle::new().with_fill(Brush::new(Color::RED))),
    );
    layer.push(
        Feature::new(square_around(Point2::new(50.0, 100.0), 5.0)).with_style(
            VectorStyle::new()
                .with_fill(Brush::new(Color::YELLOW))
                .with_outline(Pen::new(Color::BLACK, 2.0)),
        ),
    );
    layer.push(
        Feature::new(square_around(Point2::new(100.0, 100.0), 5.0))
            .with_style(VectorStyle::new().with_fill(Brush::new(Color::GREEN))),
    );

    let frame = MapRenderer::new()
        .render(&view, &[layer])
        .expect("render failed");
    assert!(frame.errors().is_empty());

    let image = decode(&frame);
    // World (50, 50) maps to screen (50, 150): x = (50-100)/1 + 100, y = 100 - (50-100)/1.
    assert_eq!(color_at(&image, 50, 150), Color::RED);
    // The yellow square at world (50, 100) maps to screen (50, 100); its outline is black.
    assert_eq!(color_at(&image, 50, 100), Color::YELLOW);
    assert_eq!(color_at(&image, 45, 100), Color::BLACK);
    // The green square at the view center.
    assert_eq!(color_at(&image, 100, 100), Color::GREEN);
    // Far away from all shapes the canvas stays transparent.
    assert_eq!(color_at(&image, 10, 10), Color::TRANSPARENT);
    assert_eq!(color_at(&image, 199, 199), Color::TRANSPARENT);
}

#[test]
fn draw_order_is_stable() {
    init_logging();
    let view = MapView::new(Point2::new(0.0, 0.0), 1.0).with_size(Size::new(100, 100));

    let mut layer = MemoryLayer::new();
    layer.push(
        Feature::new(square_around(Point2::new(0.0, 0.0), 10.0))
            .with_style(VectorStyle::new().with_fill(Brush::new(Color::RED))),
    );
    layer.push(
        Feature::new(square_around(Point2::new(0.0, 0.0), 10.0))
            .with_style(VectorStyle::new().with_fill(Brush::new(Color::BLUE))),
    );

    let frame = MapRenderer::new()
        .render(&view, &[layer])
        .expect("render failed");
    let image = decode(&frame);

    // The feature added later is drawn over the earlier one.
    assert_eq!(color_at(&image, 50, 50), Color::BLUE);
}

#[test]
fn symbol_unit_types() {
    init_logging();
    // Mirrors the reference renderer's unit type test: one pixel-sized and one world-sized
    // symbol at resolution 0.5. The world-sized one must come out twice as large.
    let view = MapView::new(Point2::new(0.0, 0.0), 0.5).with_size(Size::new(200, 100));

    let mut layer = MemoryLayer::new();
    layer.push(
        Feature::new(Point2::new(-20.0, 0.0))
            .with_style(SymbolStyle::new().with_unit_type(UnitType::Pixel)),
    );
    layer.push(
        Feature::new(Point2::new(20.0, 0.0))
            .with_style(SymbolStyle::new().with_unit_type(UnitType::WorldUnit)),
    );

    let frame = MapRenderer::new()
        .render(&view, &[layer])
        .expect("render failed");
    let image = decode(&frame);

    // Anchors: world (-20, 0) -> screen (60, 50), world (20, 0) -> screen (140, 50).
    let row = 50;
    let pixel_extent = (30..90).filter(|x| color_at(&image, *x, row).a() > 0).count();
    let world_extent = (110..170).filter(|x| color_at(&image, *x, row).a() > 0).count();

    assert!(pixel_extent > 0);
    assert_eq!(world_extent, pixel_extent * 2);
}

#[test]
fn rotated_symbols_are_symmetric() {
    init_logging();
    // Four copies of an asymmetric bitmap at the quadrant midpoints, each rotated by the angle
    // that the quadrant is turned from the first one. The resulting frame must be invariant
    // under a 90 degree rotation about the canvas center.
    let mut registry = ImageRegistry::new();
    let bitmap = registry.register(quadrant_bitmap());

    let view = MapView::new(Point2::new(100.0, 100.0), 1.0).with_size(Size::new(200, 200));

    let mut layer = MemoryLayer::new();
    for (world, rotation) in [
        (Point2::new(50.0, 150.0), 0.0),
        (Point2::new(150.0, 150.0), 90.0),
        (Point2::new(150.0, 50.0), 180.0),
        (Point2::new(50.0, 50.0), 270.0),
    ] {
        layer.push(
            Feature::new(world)
                .with_style(SymbolStyle::new().with_image(bitmap).with_rotation(rotation)),
        );
    }

    let frame = MapRenderer::with_images(registry)
        .render(&view, &[layer])
        .expect("render failed");
    let image = decode(&frame);

    for y in 0..200 {
        for x in 0..200 {
            // Rotating the frame 90 degrees clockwise maps pixel (y, 199 - x) onto (x, y).
            assert_eq!(
                color_at(&image, x, y),
                color_at(&image, y, 199 - x),
                "asymmetry at ({x}, {y})"
            );
        }
    }
}

#[test]
fn unsupported_geometry_does_not_abort_render() {
    init_logging();
    let view = MapView::new(Point2::new(0.0, 0.0), 1.0).with_size(Size::new(100, 100));

    let mut layer = MemoryLayer::new();
    // Vector styles cannot be applied to bare points.
    layer.push(
        Feature::new(Point2::new(0.0, 0.0))
            .with_style(VectorStyle::new().with_fill(Brush::new(Color::RED))),
    );
    layer.push(
        Feature::new(square_around(Point2::new(0.0, 0.0), 10.0))
            .with_style(VectorStyle::new().with_fill(Brush::new(Color::GREEN))),
    );

    let frame = MapRenderer::new()
        .render(&view, &[layer])
        .expect("render failed");

    assert_matches!(frame.errors(), [CartaError::UnsupportedGeometry { .. }]);

    // The valid feature is still drawn.
    let image = decode(&frame);
    assert_eq!(color_at(&image, 50, 50), Color::GREEN);
}

#[test]
fn missing_bitmap_falls_back_to_default_marker() {
    init_logging();
    // Register the bitmap in a registry the renderer does not know about.
    let mut other_registry = ImageRegistry::new();
    let dangling = other_registry.register(quadrant_bitmap());

    let view = MapView::new(Point2::new(0.0, 0.0), 1.0).with_size(Size::new(100, 100));

    let mut layer = MemoryLayer::new();
    layer.push(Feature::new(Point2::new(0.0, 0.0)).with_style(SymbolStyle::new().with_image(dangling)));

    let frame = MapRenderer::new()
        .render(&view, &[layer])
        .expect("render failed");

    // A missing bitmap degrades to the default marker instead of failing the feature.
    assert!(frame.errors().is_empty());
    let image = decode(&frame);
    assert!(color_at(&image, 50, 50).a() > 0);
}

#[test]
fn multiple_styles_per_feature_render_in_order() {
    init_logging();
    let view = MapView::new(Point2::new(0.0, 0.0), 1.0).with_size(Size::new(100, 100));

    let mut layer = MemoryLayer::new();
    layer.push(
        Feature::new(square_around(Point2::new(0.0, 0.0), 20.0))
            .with_style(VectorStyle::new().with_fill(Brush::new(Color::RED)))
            .with_style(VectorStyle::new().with_outline(Pen::new(Color::BLACK, 2.0))),
    );

    let frame = MapRenderer::new()
        .render(&view, &[layer])
        .expect("render failed");
    let image = decode(&frame);

    assert_eq!(color_at(&image, 50, 50), Color::RED);
    assert_eq!(color_at(&image, 30, 50), Color::BLACK);
}
