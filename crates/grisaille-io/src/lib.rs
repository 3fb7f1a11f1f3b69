//! Grisaille IO - image decode/encode collaborator
//!
//! The conversion engine works on in-memory [`Surface`]s; this crate
//! owns everything on the far side of that boundary: opening and
//! decoding source files, sniffing formats by magic number, and
//! persisting output surfaces and intensity fields.
//!
//! Formats are feature-gated per module:
//!
//! - `png-format` (default): PNG via the `png` crate
//! - `pnm` (default): binary PGM (P5) and PPM (P6), hand-rolled

pub mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use grisaille_core::Surface;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read an image from a file path.
///
/// The format is detected from the file's magic number, never from
/// the extension.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Surface> {
    let format = detect_format(&path)?;
    let reader = BufReader::new(File::open(&path)?);
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        other => {
            let _ = reader;
            Err(IoError::UnsupportedFormat(format!(
                "no reader available for {other:?}"
            )))
        }
    }
}

/// Write an image to a file path in the given format.
pub fn write_image<P: AsRef<Path>>(
    surface: &Surface,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let writer = BufWriter::new(File::create(&path)?);
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(surface, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(surface, writer),
        other => {
            let _ = writer;
            Err(IoError::UnsupportedFormat(format!(
                "no writer available for {other:?}"
            )))
        }
    }
}
