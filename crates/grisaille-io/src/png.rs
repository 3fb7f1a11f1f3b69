//! PNG image format support
//!
//! Decodes 8-bit grayscale, grayscale+alpha, RGB, and RGBA PNGs into
//! the RGB [`Surface`]; alpha channels are discarded. Encoding always
//! writes 8-bit RGB.

use crate::{IoError, IoResult};
use grisaille_core::Surface;
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Surface> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    // Samples per pixel of the decoded stream
    let samples = match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::Eight) => 1,
        (ColorType::GrayscaleAlpha, BitDepth::Eight) => 2,
        (ColorType::Rgb, BitDepth::Eight) => 3,
        (ColorType::Rgba, BitDepth::Eight) => 4,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    // Read image data
    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let surface = Surface::new(width, height)?;
    // try_into_mut won't fail: the surface was just allocated
    let mut sm = surface.try_into_mut().unwrap();

    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        for x in 0..width {
            let i = row_start + x as usize * samples;
            let (r, g, b) = match samples {
                // Gray and gray+alpha: replicate the luma byte
                1 | 2 => (data[i], data[i], data[i]),
                _ => (data[i], data[i + 1], data[i + 2]),
            };
            sm.set_rgb_unchecked(x, y, r, g, b);
        }
    }

    Ok(sm.into())
}

/// Write a surface as an 8-bit RGB PNG
pub fn write_png<W: Write>(surface: &Surface, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, surface.width(), surface.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    // Surface rows are packed with no padding, so the whole buffer
    // is already in PNG scanline order
    writer
        .write_image_data(surface.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
