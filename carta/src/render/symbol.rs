//! Rasterization of bitmap symbols.

use carta_types::cartesian::{CartesianPoint2d, Point2};
use lazy_static::lazy_static;

use crate::decoded_image::DecodedImage;
use crate::render::canvas::Canvas;
use crate::Color;

const DEFAULT_MARKER_SIZE: u32 = 16;

lazy_static! {
    static ref DEFAULT_MARKER: DecodedImage = build_default_marker();
}

/// The built-in marker drawn for symbol styles without a usable bitmap.
pub(crate) fn default_marker() -> &'static DecodedImage {
    &DEFAULT_MARKER
}

fn build_default_marker() -> DecodedImage {
    let size = DEFAULT_MARKER_SIZE;
    let center = size as f64 / 2.0;
    let fill = Color::rgba(90, 110, 150, 255);
    let rim = Color::rgba(30, 30, 30, 255);

    let mut bytes = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let dx = x as f64 + 0.5 - center;
            let dy = y as f64 + 0.5 - center;
            let d_sq = dx * dx + dy * dy;

            let color = if d_sq <= 5.5 * 5.5 {
                fill
            } else if d_sq <= 7.5 * 7.5 {
                rim
            } else {
                Color::TRANSPARENT
            };
            bytes.extend_from_slice(&color.to_u8_array());
        }
    }

    DecodedImage::from_raw(bytes, size, size).expect("invalid default marker")
}

/// Draws a bitmap centered at the given screen position, scaled by `scale` and rotated clockwise
/// by `rotation` degrees around its center.
///
/// The bitmap is sampled by inverse mapping with nearest-neighbor lookup: every covered output
/// pixel is mapped back into bitmap space and takes the color of the pixel it lands in. Samples
/// outside of the bitmap are skipped.
pub(crate) fn draw_symbol(
    canvas: &mut Canvas,
    image: &DecodedImage,
    position: Point2,
    rotation: f64,
    scale: f64,
) {
    if scale <= 0.0 || image.width() == 0 || image.height() == 0 {
        return;
    }

    let width = image.width() as f64;
    let height = image.height() as f64;
    let half_width = width * scale / 2.0;
    let half_height = height * scale / 2.0;

    let rad = rotation.to_radians();
    let (sin, cos) = (snap(rad.sin()), snap(rad.cos()));

    // Screen-space bounding box of the rotated bitmap.
    let ext_x = half_width * cos.abs() + half_height * sin.abs();
    let ext_y = half_width * sin.abs() + half_height * cos.abs();
    let x_from = ((position.x() - ext_x).floor() as i64).max(0);
    let x_to = ((position.x() + ext_x).ceil() as i64).min(canvas.width() as i64);
    let y_from = ((position.y() - ext_y).floor() as i64).max(0);
    let y_to = ((position.y() + ext_y).ceil() as i64).min(canvas.height() as i64);

    for py in y_from..y_to {
        for px in x_from..x_to {
            let vx = px as f64 + 0.5 - position.x();
            let vy = py as f64 + 0.5 - position.y();

            // Inverse of the clockwise rotation maps the pixel center back into bitmap space.
            let ux = vx * cos + vy * sin;
            let uy = -vx * sin + vy * cos;

            let bx = ux / scale + width / 2.0;
            let by = uy / scale + height / 2.0;
            if bx < 0.0 || bx >= width || by < 0.0 || by >= height {
                continue;
            }

            let color = image.pixel(bx as u32, by as u32);
            if !color.is_transparent() {
                canvas.blend_pixel(px, py, color);
            }
        }
    }
}

/// Snaps near-axis trigonometric values to their exact counterparts, so that rotations by
/// multiples of 90 degrees produce pixel-exact results.
fn snap(value: f64) -> f64 {
    const TOLERANCE: f64 = 1e-9;
    for exact in [-1.0, 0.0, 1.0] {
        if (value - exact).abs() < TOLERANCE {
            return exact;
        }
    }

    value
}
