//! Grisaille - grayscale image conversion for Rust
//!
//! Converts a color raster into a grayscale intensity field using one
//! of four selectable per-pixel reduction algorithms, and reconstructs
//! a viewable true-gray image from that field.
//!
//! # Overview
//!
//! - [`Surface`] holds the decoded color image
//! - [`gray::encode`] reduces it to an [`IntensityField`] under a
//!   chosen [`gray::GrayMethod`]
//! - [`gray::decode`] expands a field back into a true-gray surface
//! - [`io`] decodes and persists PNG and binary PNM files
//!
//! # Example
//!
//! ```
//! use grisaille::{Surface, gray};
//!
//! let mut sm = Surface::new(2, 1).unwrap().try_into_mut().unwrap();
//! sm.set_rgb(0, 0, 30, 60, 90).unwrap();
//! sm.set_rgb(1, 0, 200, 10, 10).unwrap();
//! let surface: Surface = sm.into();
//!
//! let field = gray::encode(&surface, gray::GrayMethod::Average).unwrap();
//! assert_eq!(field.row(0), &[60, 73]);
//!
//! let viewable = gray::decode(&field).unwrap();
//! assert_eq!(viewable.get_rgb(1, 0), Some((73, 73, 73)));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use grisaille_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use grisaille_gray as gray;
pub use grisaille_io as io;
