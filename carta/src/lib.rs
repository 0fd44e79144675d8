//! Carta is a deterministic 2D map rendering engine. It takes a set of geographic features with
//! attached styles, a viewport describing the visible part of the world, and produces a PNG-encoded
//! raster image of the requested size.
//!
//! The pipeline is intentionally simple and fully reproducible: identical input always produces a
//! byte-identical output image, which makes the renderer suitable for generating map tiles, test
//! golden images and server-side map frames.
//!
//! # Quick start
//!
//! ```no_run
//! use carta::layer::{Feature, MemoryLayer};
//! use carta::style::VectorStyle;
//! use carta::{Brush, Color, MapRenderer, MapView};
//! use carta_types::cartesian::{Point2, Size};
//! use carta_types::impls::Polygon;
//!
//! let mut layer = MemoryLayer::new();
//! layer.push(
//!     Feature::new(Polygon::from(vec![
//!         Point2::new(40.0, 40.0),
//!         Point2::new(60.0, 40.0),
//!         Point2::new(60.0, 60.0),
//!         Point2::new(40.0, 60.0),
//!     ]))
//!     .with_style(VectorStyle::new().with_fill(Brush::new(Color::RED))),
//! );
//!
//! let view = MapView::new(Point2::new(50.0, 50.0), 1.0).with_size(Size::new(256, 256));
//! let frame = MapRenderer::new().render(&view, &[layer]).expect("render failed");
//! std::fs::write("map.png", frame.bytes()).expect("write failed");
//! ```
//!
//! # Main components
//!
//! * [`MapView`] - the viewport: center, size, resolution and rotation. It also provides the
//!   world-to-screen coordinate transform.
//! * [`layer::Layer`] - an ordered read-only sequence of [`layer::Feature`]s. Layers are rendered
//!   in the order they are given, features in the order they are stored.
//! * [`style::Style`] - describes how a feature is drawn: either a bitmap symbol placed at the
//!   feature's anchor point, or a vector shape with fill and outline.
//! * [`MapRenderer`] - rasterizes the layers onto a fresh RGBA canvas and encodes it to PNG.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

mod color;
pub mod decoded_image;
pub mod error;
pub mod layer;
pub mod render;
pub mod style;
mod view;

pub use color::Color;
pub use decoded_image::{DecodedImage, ImageId, ImageRegistry};
pub use error::CartaError;
pub use render::{MapRenderer, RenderedFrame};
pub use style::{Brush, Offset, Pen, Style, SymbolStyle, UnitType, VectorStyle};
pub use view::MapView;

// Reexport carta_types
pub use carta_types;
