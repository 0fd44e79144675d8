//! Bitmap images used for symbol rendering and the registry that shares them between renders.

use std::sync::Arc;

use crate::error::CartaError;
use crate::Color;

/// An image that has been decoded into an RGBA pixel buffer.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Raw bytes of the image, in RGBA order.
    bytes: Vec<u8>,
    /// Width and height of the image.
    dimensions: (u32, u32),
}

impl DecodedImage {
    /// Decode an image from a byte slice.
    ///
    /// Attempts to guess the format of the image from the data. Non-RGBA images will be converted
    /// to RGBA.
    pub fn new(bytes: &[u8]) -> Result<Self, CartaError> {
        use image::GenericImageView;
        let decoded = image::load_from_memory(bytes)?;
        let bytes = decoded.to_rgba8();
        let dimensions = decoded.dimensions();

        Ok(Self {
            bytes: bytes.into_vec(),
            dimensions,
        })
    }

    /// Creates an image from a pre-decoded RGBA buffer.
    ///
    /// Fails if the buffer length does not match the given dimensions.
    pub fn from_raw(bytes: Vec<u8>, width: u32, height: u32) -> Result<Self, CartaError> {
        if bytes.len() != (width as usize) * (height as usize) * 4 {
            return Err(CartaError::ImageDecode(image::ImageError::Parameter(
                image::error::ParameterError::from_kind(
                    image::error::ParameterErrorKind::DimensionMismatch,
                ),
            )));
        }

        Ok(Self {
            bytes,
            dimensions: (width, height),
        })
    }

    /// Width of the image in pixels.
    pub fn width(&self) -> u32 {
        self.dimensions.0
    }

    /// Height of the image in pixels.
    pub fn height(&self) -> u32 {
        self.dimensions.1
    }

    /// Color of the pixel at the given position.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside of the image.
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Color {
        let offset = ((y * self.dimensions.0 + x) * 4) as usize;
        Color::rgba(
            self.bytes[offset],
            self.bytes[offset + 1],
            self.bytes[offset + 2],
            self.bytes[offset + 3],
        )
    }
}

/// Identifier of an image in an [`ImageRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageId(u32);

/// Stores decoded images so they can be referenced by symbol styles.
///
/// Images are reference counted and never copied during rendering, so a single registry can be
/// shared by any number of concurrent render calls.
#[derive(Debug, Clone, Default)]
pub struct ImageRegistry {
    images: Vec<Arc<DecodedImage>>,
}

impl ImageRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an image to the registry and returns its id.
    pub fn register(&mut self, image: DecodedImage) -> ImageId {
        let id = ImageId(self.images.len() as u32);
        self.images.push(Arc::new(image));
        id
    }

    /// Returns the image with the given id, or `None` if the id is not known to this registry.
    pub fn get(&self, id: ImageId) -> Option<&DecodedImage> {
        self.images.get(id.0 as usize).map(|v| v.as_ref())
    }
}
