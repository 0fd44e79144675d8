//! Styles describe how a feature is drawn on the map.
//!
//! A feature can carry any number of styles; every one of them is rendered, in the order they are
//! stored. The [`Style`] enum is closed: the rendering pipeline matches on it exhaustively, so a
//! new style kind cannot be added without teaching the renderer how to draw it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::decoded_image::ImageId;
use crate::Color;

/// Unit in which style quantities (symbol size, offset) are expressed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitType {
    /// Quantities are in screen pixels and do not depend on the view resolution.
    #[default]
    Pixel,
    /// Quantities are in world units and are scaled by the view resolution, so they shrink and
    /// grow with zoom.
    WorldUnit,
}

/// Offset of a symbol from its anchor point.
///
/// Positive `dy` moves the symbol up on the screen (world orientation, not raster orientation).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Offset {
    /// Horizontal offset.
    pub dx: f64,
    /// Vertical offset.
    pub dy: f64,
}

impl Offset {
    /// Creates a new offset.
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// Solid color fill of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Brush {
    /// Fill color.
    pub color: Color,
}

impl Brush {
    /// Creates a new brush.
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

/// Stroke of a shape outline.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pen {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f64,
}

impl Pen {
    /// Creates a new pen.
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// Style that draws a bitmap symbol at the feature's anchor point.
///
/// When no image is attached (or the referenced image cannot be resolved), a built-in default
/// marker is drawn instead.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SymbolStyle {
    /// Image to draw, registered in the renderer's [`ImageRegistry`](crate::ImageRegistry).
    pub image: Option<ImageId>,
    /// Unit of the symbol size and offset.
    pub unit_type: UnitType,
    /// Offset of the symbol from the anchor point.
    pub offset: Offset,
    /// Rotation of the symbol in degrees, clockwise positive.
    pub rotation: f64,
}

impl SymbolStyle {
    /// Creates a new style that draws the default marker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the style with the given image.
    pub fn with_image(self, image: ImageId) -> Self {
        Self {
            image: Some(image),
            ..self
        }
    }

    /// Returns a copy of the style with the given unit type.
    pub fn with_unit_type(self, unit_type: UnitType) -> Self {
        Self { unit_type, ..self }
    }

    /// Returns a copy of the style with the given offset.
    pub fn with_offset(self, dx: f64, dy: f64) -> Self {
        Self {
            offset: Offset::new(dx, dy),
            ..self
        }
    }

    /// Returns a copy of the style with the given rotation in degrees.
    pub fn with_rotation(self, rotation: f64) -> Self {
        Self { rotation, ..self }
    }
}

/// Style that draws the feature's geometry as a vector shape.
///
/// A style with neither fill nor outline draws nothing. This is a valid no-op style, not an
/// error.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VectorStyle {
    /// Fill of the shape interior.
    pub fill: Option<Brush>,
    /// Stroke of the shape boundary. Always drawn over the fill.
    pub outline: Option<Pen>,
}

impl VectorStyle {
    /// Creates a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the style with the given fill.
    pub fn with_fill(self, fill: Brush) -> Self {
        Self {
            fill: Some(fill),
            ..self
        }
    }

    /// Returns a copy of the style with the given outline.
    pub fn with_outline(self, outline: Pen) -> Self {
        Self {
            outline: Some(outline),
            ..self
        }
    }

    /// Returns true if the style draws nothing.
    pub fn is_empty(&self) -> bool {
        self.fill.is_none() && self.outline.is_none()
    }
}

/// Visual representation of a feature.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Style {
    /// Bitmap symbol placed at the feature's anchor point.
    Symbol(SymbolStyle),
    /// Vector shape built from the feature's geometry.
    Vector(VectorStyle),
}

impl From<SymbolStyle> for Style {
    fn from(value: SymbolStyle) -> Self {
        Style::Symbol(value)
    }
}

impl From<VectorStyle> for Style {
    fn from(value: VectorStyle) -> Self {
        Style::Vector(value)
    }
}
