//! Grisaille Gray - selectable-algorithm gray conversion
//!
//! This crate is the conversion engine of the grisaille library:
//!
//! - **Per-pixel reduction** ([`reduce_rgb`]): one RGB sample plus a
//!   [`GrayMethod`] gives one intensity value
//! - **Full-image scans** ([`encode`] / [`decode`]): color surface to
//!   intensity field and back to a true-gray surface
//!
//! Four reduction methods are supported: `average`, `highest`,
//! `upper_average`, and `middle_average`. All averaging truncates
//! (floor division), and `highest` resolves ties to the red channel;
//! both are deliberate compatibility behaviors, documented on
//! [`reduce_rgb`].

pub mod convert;
pub mod error;
pub mod method;
pub mod reduce;

// Re-export core types
pub use grisaille_core;

pub use convert::{decode, decode_rows, encode, encode_with};
pub use error::{GrayError, GrayResult};
pub use method::GrayMethod;
pub use reduce::reduce_rgb;
