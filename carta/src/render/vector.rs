//! Rasterization of vector shapes.

use carta_types::cartesian::{CartesianPoint2d, Point2};
use carta_types::impls::Contour;

use crate::render::canvas::Canvas;
use crate::style::Pen;
use crate::Color;

/// Draws a shape given by screen-space contours: fill first, then outline, so the outline is
/// never occluded by the fill.
pub(crate) fn draw_shape(
    canvas: &mut Canvas,
    contours: &[Contour<Point2>],
    fill: Option<Color>,
    outline: Option<Pen>,
) {
    if let Some(color) = fill {
        if !color.is_transparent() {
            fill_shape(canvas, contours, color);
        }
    }

    if let Some(pen) = outline {
        if !pen.color.is_transparent() && pen.width > 0.0 {
            stroke_shape(canvas, contours, pen);
        }
    }
}

/// Scanline fill with the even-odd rule, sampled at pixel centers.
///
/// All closed contours of the shape contribute to the same parity count, so inner contours cut
/// holes into the filled area.
fn fill_shape(canvas: &mut Canvas, contours: &[Contour<Point2>], color: Color) {
    let closed: Vec<&Contour<Point2>> = contours
        .iter()
        .filter(|c| c.is_closed() && c.points().len() >= 3)
        .collect();
    if closed.is_empty() {
        return;
    }

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for contour in &closed {
        for point in contour.iter_points() {
            y_min = y_min.min(point.y());
            y_max = y_max.max(point.y());
        }
    }

    let y_from = (y_min.floor() as i64).max(0);
    let y_to = (y_max.ceil() as i64).min(canvas.height() as i64);

    let mut crossings: Vec<f64> = Vec::new();
    for py in y_from..y_to {
        let sample_y = py as f64 + 0.5;

        crossings.clear();
        for contour in &closed {
            let points = contour.points();
            for i in 0..points.len() {
                let a = points[i];
                let b = points[(i + 1) % points.len()];
                // The half-open comparison counts a vertex lying exactly on the scanline for
                // one of its two segments only.
                if (a.y() <= sample_y) != (b.y() <= sample_y) {
                    let t = (sample_y - a.y()) / (b.y() - a.y());
                    crossings.push(a.x() + t * (b.x() - a.x()));
                }
            }
        }

        crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        for span in crossings.chunks_exact(2) {
            // Pixels whose center lies in [span_start, span_end).
            let x_from = ((span[0] - 0.5).ceil() as i64).max(0);
            let x_to = ((span[1] - 0.5).ceil() as i64).min(canvas.width() as i64);
            for px in x_from..x_to {
                canvas.blend_pixel(px, py, color);
            }
        }
    }
}

/// Strokes every segment of the contours with the pen width.
///
/// Coverage is accumulated into a mask first and blended once per pixel, so overlapping segment
/// joints do not double-composite a translucent pen.
fn stroke_shape(canvas: &mut Canvas, contours: &[Contour<Point2>], pen: Pen) {
    let width = canvas.width() as i64;
    let height = canvas.height() as i64;
    let radius = pen.width / 2.0;
    let radius_sq = radius * radius;

    let mut mask = vec![false; (width * height) as usize];

    for contour in contours {
        let points: Vec<&Point2> = contour.iter_points_closing().collect();
        for segment in points.windows(2) {
            let (a, b) = (segment[0], segment[1]);

            let x_from = (((a.x().min(b.x())) - radius).floor() as i64).max(0);
            let x_to = (((a.x().max(b.x())) + radius).ceil() as i64).min(width);
            let y_from = (((a.y().min(b.y())) - radius).floor() as i64).max(0);
            let y_to = (((a.y().max(b.y())) + radius).ceil() as i64).min(height);

            for py in y_from..y_to {
                for px in x_from..x_to {
                    let center = Point2::new(px as f64 + 0.5, py as f64 + 0.5);
                    if distance_sq_to_segment(center, *a, *b) <= radius_sq {
                        mask[(py * width + px) as usize] = true;
                    }
                }
            }
        }
    }

    for py in 0..height {
        for px in 0..width {
            if mask[(py * width + px) as usize] {
                canvas.blend_pixel(px, py, pen.color);
            }
        }
    }
}

fn distance_sq_to_segment(point: Point2, a: Point2, b: Point2) -> f64 {
    let segment = b - a;
    let length_sq = segment.magnitude_squared();
    if length_sq == 0.0 {
        return point.distance_sq(&a);
    }

    let t = ((point - a).dot(&segment) / length_sq).clamp(0.0, 1.0);
    let dx = point.x() - (a.x() + segment.x * t);
    let dy = point.y() - (a.y() + segment.y * t);
    dx * dx + dy * dy
}
