//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file
//! header, never by file extension.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// Binary PGM (grayscale PNM)
    pub const PGM_BINARY: &[u8] = b"P5";

    /// Binary PPM (RGB PNM)
    pub const PPM_BINARY: &[u8] = b"P6";
}

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// PNG format
    Png,
    /// PNM format (binary PGM/PPM)
    Pnm,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Png => "png",
            Self::Pnm => "pnm",
        }
    }
}

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path).map_err(IoError::Io)?;
    let mut header = [0u8; 8];
    let bytes_read = file.read(&mut header).map_err(IoError::Io)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect image format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    if data.len() >= 8 && data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }

    if data.starts_with(magic::PGM_BINARY) || data.starts_with(magic::PPM_BINARY) {
        return Ok(ImageFormat::Pnm);
    }

    Ok(ImageFormat::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png_magic() {
        let header = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
        assert_eq!(detect_format_from_bytes(&header).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_detect_pnm_magic() {
        assert_eq!(
            detect_format_from_bytes(b"P5 2 2 255 ").unwrap(),
            ImageFormat::Pnm
        );
        assert_eq!(
            detect_format_from_bytes(b"P6 2 2 255 ").unwrap(),
            ImageFormat::Pnm
        );
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(
            detect_format_from_bytes(b"GIF89a").unwrap(),
            ImageFormat::Unknown
        );
    }

    #[test]
    fn test_extension() {
        assert_eq!(ImageFormat::Png.extension(), "png");
        assert_eq!(ImageFormat::Pnm.extension(), "pnm");
        assert_eq!(ImageFormat::Unknown.extension(), "dat");
    }

    #[test]
    fn test_detect_too_short() {
        assert!(detect_format_from_bytes(b"P").is_err());
    }
}
