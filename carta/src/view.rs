use carta_types::cartesian::{CartesianPoint2d, Point2, Size};
use nalgebra::{Rotation2, Vector2};

use crate::error::CartaError;

/// Viewport of the map: the size of the output raster and the part of the world that is projected
/// onto it.
///
/// The view is immutable for the duration of one render call. The `with_*` methods return a
/// modified copy.
///
/// The projection is defined by the view center `C`, resolution `R` (world units per output
/// pixel), output size `W x H` and rotation. Screen origin is in the top left corner, with the Y
/// axis pointing down, so for a zero rotation:
///
/// ```text
/// px = (x - C.x) / R + W / 2
/// py = H / 2 - (y - C.y) / R
/// ```
///
/// A non-zero rotation first rotates the world around the view center, so the same formula
/// applies to the rotated coordinates.
#[derive(Debug, Clone, Copy)]
pub struct MapView {
    center: Point2,
    resolution: f64,
    rotation: f64,
    size: Size<u32>,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: Point2::default(),
            resolution: 1.0,
            rotation: 0.0,
            size: Size::new(0, 0),
        }
    }
}

impl MapView {
    /// Creates a new view with the given center and resolution.
    pub fn new(center: impl CartesianPoint2d<Num = f64>, resolution: f64) -> Self {
        Self {
            center: Point2::new(center.x(), center.y()),
            resolution,
            ..Default::default()
        }
    }

    /// Center of the view in world coordinates.
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Resolution of the view: world units per output pixel.
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Returns a copy of the view with the given resolution.
    pub fn with_resolution(&self, resolution: f64) -> Self {
        Self {
            resolution,
            ..*self
        }
    }

    /// Size of the output raster in pixels.
    pub fn size(&self) -> Size<u32> {
        self.size
    }

    /// Returns a copy of the view with the given output size.
    pub fn with_size(&self, size: Size<u32>) -> Self {
        Self { size, ..*self }
    }

    /// Rotation of the view in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Returns a copy of the view with the given rotation in degrees.
    pub fn with_rotation(&self, rotation: f64) -> Self {
        Self { rotation, ..*self }
    }

    /// Checks that the view can be rendered to.
    pub fn validate(&self) -> Result<(), CartaError> {
        if !self.resolution.is_finite() || self.resolution <= 0.0 {
            return Err(CartaError::InvalidViewport(format!(
                "resolution must be positive, got {}",
                self.resolution
            )));
        }
        if self.size.is_zero() {
            return Err(CartaError::InvalidViewport(format!(
                "output size must not be zero, got {}x{}",
                self.size.width(),
                self.size.height()
            )));
        }

        Ok(())
    }

    /// Projects a point in world coordinates into screen coordinates.
    pub fn map_to_screen(&self, point: &impl CartesianPoint2d<Num = f64>) -> Point2 {
        let size = self.size.cast::<f64>();
        let mut delta = Vector2::new(point.x() - self.center.x(), point.y() - self.center.y());
        if self.rotation != 0.0 {
            delta = Rotation2::new(-self.rotation.to_radians()) * delta;
        }

        Point2::new(
            delta.x / self.resolution + size.half_width(),
            size.half_height() - delta.y / self.resolution,
        )
    }

    /// Projects a point in screen coordinates back into world coordinates.
    ///
    /// This is the exact inverse of [`MapView::map_to_screen`].
    pub fn screen_to_map(&self, pixel: Point2) -> Point2 {
        let size = self.size.cast::<f64>();
        let mut delta = Vector2::new(
            (pixel.x() - size.half_width()) * self.resolution,
            (size.half_height() - pixel.y()) * self.resolution,
        );
        if self.rotation != 0.0 {
            delta = Rotation2::new(self.rotation.to_radians()) * delta;
        }

        Point2::new(self.center.x() + delta.x, self.center.y() + delta.y)
    }
}
