use carta_types::cartesian::Size;
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};

use crate::error::CartaError;
use crate::Color;

/// Output raster of a single render call.
///
/// The buffer is allocated fully transparent and owned exclusively by one render invocation, so
/// draw operations can be applied in order without any synchronization.
pub(crate) struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    pub(crate) fn new(size: Size<u32>) -> Self {
        Self {
            width: size.width(),
            height: size.height(),
            pixels: vec![0; size.width() as usize * size.height() as usize * 4],
        }
    }

    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    pub(crate) fn height(&self) -> u32 {
        self.height
    }

    /// Composites the given color over the pixel. Out-of-bounds positions are ignored.
    pub(crate) fn blend_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }

        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let dst = Color::rgba(
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
            self.pixels[offset + 3],
        );
        self.pixels[offset..offset + 4].copy_from_slice(&dst.blend(color).to_u8_array());
    }

    pub(crate) fn pixel(&self, x: u32, y: u32) -> Color {
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        Color::rgba(
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
            self.pixels[offset + 3],
        )
    }

    /// Encodes the raster into a PNG byte stream.
    ///
    /// The encoder writes no timestamps or other varying metadata, so identical raster content
    /// produces identical bytes.
    pub(crate) fn encode_png(&self) -> Result<Vec<u8>, CartaError> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(&self.pixels, self.width, self.height, ColorType::Rgba8)
            .map_err(CartaError::Encoding)?;

        Ok(out)
    }
}
