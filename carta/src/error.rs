//! Error types used by the crate.

use image::ImageError;
use thiserror::Error;

use crate::decoded_image::ImageId;

/// Carta error type.
#[derive(Debug, Error)]
pub enum CartaError {
    /// The viewport cannot be rendered to: non-positive resolution or zero output size. Reported
    /// before any drawing is done.
    #[error("invalid viewport: {0}")]
    InvalidViewport(String),
    /// A style is attached to a feature with a geometry it cannot draw (e.g. a vector style on a
    /// bare point). The feature is skipped, the rest of the frame is still rendered, and the
    /// error is returned in [`RenderedFrame::errors`](crate::RenderedFrame::errors).
    #[error("{style} style is not supported for {geometry} geometry")]
    UnsupportedGeometry {
        /// Kind of the style that could not be applied.
        style: &'static str,
        /// Kind of the geometry the style was applied to.
        geometry: &'static str,
    },
    /// A symbol style references an image that is not present in the renderer's
    /// [`ImageRegistry`](crate::ImageRegistry). The symbol is drawn with the default marker
    /// instead.
    #[error("image {0:?} is not registered")]
    MissingBitmap(ImageId),
    /// Image decoding error.
    #[error("image decode error: {0}")]
    ImageDecode(#[from] ImageError),
    /// The rendered raster could not be encoded into the output format. Fatal for the render
    /// call; no partial output is returned.
    #[error("failed to encode rendered image: {0}")]
    Encoding(#[source] ImageError),
}
