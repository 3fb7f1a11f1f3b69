//! Surface - the in-memory RGB raster container
//!
//! A [`Surface`] holds a decoded color image as a flat row-major
//! buffer of 8-bit RGB samples, rows top-to-bottom and pixels
//! left-to-right within each row. There is no row padding: the byte
//! stride of a row is always `width * 3`.
//!
//! # Ownership model
//!
//! `Surface` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to [`SurfaceMut`] via
//! [`Surface::try_into_mut`] or [`Surface::to_mut`], then convert
//! back with `Into<Surface>`. This enforces exclusive access for
//! writers at compile time.

use crate::error::{Error, Result};
use std::sync::Arc;

/// Bytes per pixel: packed R, G, B with no alpha.
pub const BYTES_PER_PIXEL: usize = 3;

/// Internal surface data
#[derive(Debug)]
struct SurfaceData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Bytes per row (`width * BYTES_PER_PIXEL`)
    stride: usize,
    /// Packed RGB samples, row-major
    data: Vec<u8>,
}

impl SurfaceData {
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride + x as usize * BYTES_PER_PIXEL
    }
}

/// RGB raster image
///
/// The fundamental image type in grisaille. Uses reference counting
/// via `Arc` for cheap cloning; see the module docs for the mutation
/// model.
///
/// # Examples
///
/// ```
/// use grisaille_core::Surface;
///
/// let surface = Surface::new(640, 480).unwrap();
/// assert_eq!(surface.width(), 640);
/// assert_eq!(surface.height(), 480);
/// assert_eq!(surface.get_rgb(0, 0), Some((0, 0, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct Surface {
    inner: Arc<SurfaceData>,
}

impl Surface {
    /// Create a new surface with every pixel initialized to black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let stride = width as usize * BYTES_PER_PIXEL;
        let data = vec![0u8; stride * height as usize];

        Ok(Surface {
            inner: Arc::new(SurfaceData {
                width,
                height,
                stride,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the byte stride of one row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.inner.stride
    }

    /// Get raw access to the packed RGB data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the RGB sample at (x, y).
    ///
    /// Returns `None` if the coordinate is out of bounds.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.get_rgb_unchecked(x, y))
    }

    /// Get the RGB sample at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_rgb_unchecked(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let i = self.inner.offset(x, y);
        let d = &self.inner.data;
        (d[i], d[i + 1], d[i + 2])
    }

    /// Get the packed bytes of a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_bytes(&self, y: u32) -> &[u8] {
        let start = y as usize * self.inner.stride;
        &self.inner.data[start..start + self.inner.stride]
    }

    /// Check if two surfaces have the same width and height.
    pub fn sizes_equal(&self, other: &Surface) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Get the number of strong references to this surface.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Write surface metadata to a writer (for debugging).
    pub fn print_info(&self, writer: &mut impl std::io::Write, label: Option<&str>) -> Result<()> {
        if let Some(text) = label {
            writeln!(writer, "  Surface info for {text}:")?;
        }
        writeln!(
            writer,
            "    width = {}, height = {}, stride = {}",
            self.inner.width, self.inner.height, self.inner.stride
        )?;
        Ok(())
    }

    /// Create a deep copy of this surface.
    ///
    /// Unlike `clone()` which shares data via `Arc`, this creates a
    /// completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Surface {
            inner: Arc::new(SurfaceData {
                width: self.inner.width,
                height: self.inner.height,
                stride: self.inner.stride,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`SurfaceMut`] that allows
    /// modification.
    pub fn try_into_mut(self) -> std::result::Result<SurfaceMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(SurfaceMut { inner: data }),
            Err(arc) => Err(Surface { inner: arc }),
        }
    }

    /// Create a mutable copy of this surface.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> SurfaceMut {
        SurfaceMut {
            inner: SurfaceData {
                width: self.inner.width,
                height: self.inner.height,
                stride: self.inner.stride,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable surface
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`Surface`] using `Into<Surface>`.
#[derive(Debug)]
pub struct SurfaceMut {
    inner: SurfaceData,
}

impl SurfaceMut {
    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the RGB sample at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        let i = self.inner.offset(x, y);
        let d = &self.inner.data;
        Some((d[i], d[i + 1], d[i + 2]))
    }

    /// Set the RGB sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside
    /// the surface.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        self.set_rgb_unchecked(x, y, r, g, b);
        Ok(())
    }

    /// Set the RGB sample at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_rgb_unchecked(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        let i = self.inner.offset(x, y);
        let d = &mut self.inner.data;
        d[i] = r;
        d[i + 1] = g;
        d[i + 2] = b;
    }

    /// Get mutable access to the packed bytes of a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_bytes_mut(&mut self, y: u32) -> &mut [u8] {
        let start = y as usize * self.inner.stride;
        let stride = self.inner.stride;
        &mut self.inner.data[start..start + stride]
    }

    /// Fill the entire surface with one color.
    pub fn fill_rgb(&mut self, r: u8, g: u8, b: u8) {
        for px in self.inner.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            px[0] = r;
            px[1] = g;
            px[2] = b;
        }
    }
}

impl From<SurfaceMut> for Surface {
    fn from(value: SurfaceMut) -> Self {
        Surface {
            inner: Arc::new(value.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_initialized_to_black() {
        let surface = Surface::new(4, 3).unwrap();
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(surface.get_rgb(x, y), Some((0, 0, 0)));
            }
        }
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            Surface::new(0, 10),
            Err(Error::InvalidDimension { width: 0, height: 10 })
        ));
        assert!(Surface::new(10, 0).is_err());
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut sm = Surface::new(3, 2).unwrap().try_into_mut().unwrap();
        sm.set_rgb(2, 1, 10, 20, 30).unwrap();
        let surface: Surface = sm.into();
        assert_eq!(surface.get_rgb(2, 1), Some((10, 20, 30)));
        assert_eq!(surface.get_rgb(3, 1), None);
    }

    #[test]
    fn test_try_into_mut_requires_unique_reference() {
        let surface = Surface::new(2, 2).unwrap();
        let shared = surface.clone();
        assert!(surface.try_into_mut().is_err());
        assert_eq!(shared.ref_count(), 1);
        assert!(shared.try_into_mut().is_ok());
    }

    #[test]
    fn test_set_rgb_out_of_bounds() {
        let mut sm = Surface::new(2, 2).unwrap().try_into_mut().unwrap();
        assert!(matches!(
            sm.set_rgb(2, 0, 1, 2, 3),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_to_mut_copies_independently() {
        let surface = Surface::new(2, 1).unwrap();
        let mut sm = surface.to_mut();
        sm.set_rgb_unchecked(0, 0, 9, 9, 9);
        let copy: Surface = sm.into();
        // The original is untouched
        assert_eq!(surface.get_rgb(0, 0), Some((0, 0, 0)));
        assert_eq!(copy.get_rgb(0, 0), Some((9, 9, 9)));
    }

    #[test]
    fn test_deep_clone_does_not_share_data() {
        let surface = Surface::new(2, 1).unwrap();
        let copy = surface.deep_clone();
        assert_eq!(surface.ref_count(), 1);
        assert_eq!(copy.ref_count(), 1);
        assert!(copy.sizes_equal(&surface));
        assert_eq!(copy.data(), surface.data());
    }

    #[test]
    fn test_fill_rgb() {
        let mut sm = Surface::new(2, 2).unwrap().try_into_mut().unwrap();
        sm.fill_rgb(1, 2, 3);
        let surface: Surface = sm.into();
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(surface.get_rgb(x, y), Some((1, 2, 3)));
            }
        }
    }

    #[test]
    fn test_print_info_reports_dimensions() {
        let surface = Surface::new(4, 3).unwrap();
        let mut out = Vec::new();
        surface.print_info(&mut out, Some("ramp")).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("ramp"));
        assert!(text.contains("width = 4, height = 3, stride = 12"));
    }

    #[test]
    fn test_row_bytes_layout() {
        let mut sm = Surface::new(2, 2).unwrap().try_into_mut().unwrap();
        sm.set_rgb_unchecked(0, 1, 1, 2, 3);
        sm.set_rgb_unchecked(1, 1, 4, 5, 6);
        let surface: Surface = sm.into();
        assert_eq!(surface.row_bytes(1), &[1, 2, 3, 4, 5, 6]);
    }
}
