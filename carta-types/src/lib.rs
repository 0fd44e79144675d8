//! Cartesian geometry types used by the [`carta`](https://docs.rs/carta) map renderer.
//!
//! The crate provides concrete geometry implementations (points, contours,
//! polygons) together with the [`Geom`] enum that combines them into a single
//! geometry value a renderer can dispatch over. All types are plain data and
//! have no rendering knowledge of their own.

pub mod cartesian;
mod geometry;
pub mod impls;

pub use geometry::Geom;
