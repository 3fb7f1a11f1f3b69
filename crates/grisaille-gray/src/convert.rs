//! Full-image encode and decode scans
//!
//! `encode` walks a color surface in row-major order and reduces each
//! sample through [`reduce_rgb`]; `decode` materializes an intensity
//! field back into a true-gray surface. Both directions derive their
//! dimensions from the input of each call and hold no state between
//! calls.

use crate::error::GrayResult;
use crate::method::GrayMethod;
use crate::reduce::reduce_rgb;
use grisaille_core::{IntensityField, Surface};

/// Encode a color surface into an intensity field.
///
/// Scans width x height samples top-to-bottom, left-to-right, reducing
/// each through [`reduce_rgb`]. Read-only over the surface; the output
/// dimensions always equal the input dimensions.
///
/// # Examples
///
/// ```
/// use grisaille_core::Surface;
/// use grisaille_gray::{GrayMethod, encode};
///
/// let mut sm = Surface::new(1, 2).unwrap().try_into_mut().unwrap();
/// sm.set_rgb(0, 0, 200, 10, 10).unwrap();
/// sm.set_rgb(0, 1, 10, 10, 10).unwrap();
/// let field = encode(&sm.into(), GrayMethod::Average).unwrap();
/// assert_eq!(field.row(0), &[73]);
/// assert_eq!(field.row(1), &[10]);
/// ```
pub fn encode(surface: &Surface, method: GrayMethod) -> GrayResult<IntensityField> {
    let width = surface.width();
    let height = surface.height();

    let mut data = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let (r, g, b) = surface.get_rgb_unchecked(x, y);
            data.push(reduce_rgb(r, g, b, method));
        }
    }

    Ok(IntensityField::from_flat(width, height, data)?)
}

/// Encode with a string method selector.
///
/// This is the configuration-surface entry point: the selector is
/// parsed before the scan begins, so an unrecognized name fails with
/// [`crate::GrayError::UnknownMethod`] without reading a single pixel.
pub fn encode_with(surface: &Surface, method: &str) -> GrayResult<IntensityField> {
    let method: GrayMethod = method.parse()?;
    encode(surface, method)
}

/// Decode an intensity field into a true-gray surface.
///
/// Allocates a black surface of the field's dimensions and writes a
/// pixel `(v, v, v)` for every value `v` in the field.
pub fn decode(field: &IntensityField) -> GrayResult<Surface> {
    let width = field.width();
    let height = field.height();

    let surface = Surface::new(width, height)?;
    // try_into_mut won't fail: the surface was just allocated
    let mut sm = surface.try_into_mut().unwrap();
    for y in 0..height {
        for x in 0..width {
            let v = field.get_unchecked(x, y);
            sm.set_rgb_unchecked(x, y, v, v, v);
        }
    }
    Ok(sm.into())
}

/// Decode nested intensity rows into a true-gray surface.
///
/// Validates that the rows form a rectangle before any surface is
/// allocated: a ragged input fails with
/// [`grisaille_core::Error::RaggedField`] and produces nothing.
pub fn decode_rows(rows: &[Vec<u8>]) -> GrayResult<Surface> {
    let field = IntensityField::from_rows(rows)?;
    decode(&field)
}
