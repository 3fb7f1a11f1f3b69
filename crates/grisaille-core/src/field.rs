//! IntensityField - a 2D grid of gray intensity values
//!
//! The field produced by encoding a color surface: one `u8` intensity
//! per source pixel, stored as a flat row-major buffer indexed by
//! `y * width + x`. Rows run top-to-bottom, values left-to-right.
//!
//! Nested-row representations (one `Vec<u8>` per row) exist only at
//! the boundary: [`IntensityField::from_rows`] validates that all rows
//! have equal length before building the flat buffer, and
//! [`IntensityField::into_rows`] reproduces the nested form for
//! callers that persist the field that way.

use crate::error::{Error, Result};

/// 2D grid of gray intensity values
///
/// # Examples
///
/// ```
/// use grisaille_core::IntensityField;
///
/// let field = IntensityField::from_rows(&[vec![73], vec![10]]).unwrap();
/// assert_eq!(field.width(), 1);
/// assert_eq!(field.height(), 2);
/// assert_eq!(field.get(0, 1), Some(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityField {
    /// Width in values per row
    width: u32,
    /// Height in rows
    height: u32,
    /// Flat row-major intensity values
    data: Vec<u8>,
}

impl IntensityField {
    /// Create a new field with every value set to 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(IntensityField {
            width,
            height,
            data: vec![0u8; width as usize * height as usize],
        })
    }

    /// Build a field from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions, or
    /// [`Error::BufferLengthMismatch`] if `data.len()` is not
    /// `width * height`.
    pub fn from_flat(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if data.len() != width as usize * height as usize {
            return Err(Error::BufferLengthMismatch {
                width,
                height,
                actual: data.len(),
            });
        }
        Ok(IntensityField {
            width,
            height,
            data,
        })
    }

    /// Build a field from nested rows.
    ///
    /// Every row must have the same length as the first. Validation
    /// happens before the flat buffer is allocated, so a ragged input
    /// never produces a partially built field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedField`] if any row length differs from
    /// the first row's, or [`Error::InvalidDimension`] if there are
    /// no rows or the first row is empty.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension {
                width: width as u32,
                height: height as u32,
            });
        }
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::RaggedField {
                    row: y,
                    expected: width,
                    actual: row.len(),
                });
            }
        }

        let mut data = Vec::with_capacity(width * height);
        for row in rows {
            data.extend_from_slice(row);
        }
        Ok(IntensityField {
            width: width as u32,
            height: height as u32,
            data,
        })
    }

    /// Get the field width in values per row.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the field height in rows.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get raw access to the flat row-major buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the intensity at (x, y).
    ///
    /// Returns `None` if the coordinate is out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.get_unchecked(x, y))
    }

    /// Get the intensity at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Set the intensity at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside
    /// the field.
    pub fn set(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.data[y as usize * self.width as usize + x as usize] = value;
        Ok(())
    }

    /// Get one row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width as usize)
    }

    /// Convert into nested rows (one `Vec<u8>` per row).
    pub fn into_rows(self) -> Vec<Vec<u8>> {
        self.data
            .chunks_exact(self.width as usize)
            .map(<[u8]>::to_vec)
            .collect()
    }
}
