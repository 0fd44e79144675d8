//! The rendering pipeline: resolving styles into draw operations and rasterizing them onto the
//! output canvas.

mod canvas;
mod resolve;
mod symbol;
mod vector;

use bytes::Bytes;

use crate::decoded_image::ImageRegistry;
use crate::error::CartaError;
use crate::layer::Layer;
use crate::render::canvas::Canvas;
use crate::render::resolve::DrawOp;
use crate::view::MapView;

/// Renders layers of features onto a raster image.
///
/// The renderer itself is stateless between calls: every render allocates a fresh transparent
/// canvas, so independent calls can run in parallel as long as the layers are not mutated while a
/// render over them is in flight.
#[derive(Debug, Clone, Default)]
pub struct MapRenderer {
    images: ImageRegistry,
}

impl MapRenderer {
    /// Creates a renderer with an empty image registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer that resolves symbol images from the given registry.
    pub fn with_images(images: ImageRegistry) -> Self {
        Self { images }
    }

    /// Renders the layers with the given view into a PNG byte stream.
    ///
    /// Layers are drawn in the order given, features within a layer in their stored order, and
    /// styles of a feature in their stored order. Later draws composite over earlier ones, so the
    /// draw order is part of the output contract and is never changed.
    ///
    /// The output is deterministic: the same view and layer contents always produce byte-identical
    /// results.
    ///
    /// Per-feature problems (e.g. a style incompatible with a feature's geometry) do not abort
    /// rendering; the affected style is skipped and the error is returned in
    /// [`RenderedFrame::errors`]. An invalid view or a failure to encode the output raster fails
    /// the whole call.
    pub fn render<L: Layer>(
        &self,
        view: &MapView,
        layers: &[L],
    ) -> Result<RenderedFrame, CartaError> {
        view.validate()?;

        let size = view.size();
        log::debug!(
            "rendering a {}x{} frame at resolution {}",
            size.width(),
            size.height(),
            view.resolution()
        );

        let mut canvas = Canvas::new(size);
        let mut errors = Vec::new();

        for layer in layers {
            for feature in layer.features() {
                for style in feature.styles() {
                    match resolve::resolve(feature, style, view, &self.images) {
                        Ok(ops) => {
                            for op in ops {
                                draw(&mut canvas, op);
                            }
                        }
                        Err(error) => {
                            log::warn!("skipping style: {error}");
                            errors.push(error);
                        }
                    }
                }
            }
        }

        let bytes = Bytes::from(canvas.encode_png()?);
        log::debug!(
            "finished rendering, {} bytes, {} skipped styles",
            bytes.len(),
            errors.len()
        );

        Ok(RenderedFrame { bytes, errors })
    }
}

fn draw(canvas: &mut Canvas, op: DrawOp) {
    match op {
        DrawOp::Symbol {
            image,
            position,
            rotation,
            scale,
        } => symbol::draw_symbol(canvas, image, position, rotation, scale),
        DrawOp::Shape {
            contours,
            fill,
            outline,
        } => vector::draw_shape(canvas, &contours, fill, outline),
    }
}

/// Result of a render call: the encoded image and the non-fatal errors collected while drawing.
#[derive(Debug)]
pub struct RenderedFrame {
    bytes: Bytes,
    errors: Vec<CartaError>,
}

impl RenderedFrame {
    /// PNG-encoded image bytes.
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Consumes the frame and returns the image bytes.
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    /// Features that could not be drawn. An empty slice means the frame rendered completely.
    pub fn errors(&self) -> &[CartaError] {
        &self.errors
    }
}
