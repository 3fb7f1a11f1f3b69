//! Grisaille Core - Basic containers for grayscale conversion
//!
//! This crate provides the fundamental data structures used throughout
//! the grisaille library:
//!
//! - [`Surface`] / [`SurfaceMut`] - RGB raster container (immutable / mutable)
//! - [`IntensityField`] - 2D grid of gray intensity values
//!
//! Both containers are flat row-major buffers: a surface row is
//! `width * 3` packed RGB bytes, a field row is `width` intensity
//! values. Rows run top-to-bottom, pixels left-to-right.

pub mod error;
pub mod field;
pub mod surface;

pub use error::{Error, Result};
pub use field::IntensityField;
pub use surface::{BYTES_PER_PIXEL, Surface, SurfaceMut};
