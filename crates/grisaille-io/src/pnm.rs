//! PNM (Portable Any Map) format support
//!
//! Reads and writes binary PGM (P5) and PPM (P6). ASCII variants
//! (P1/P2/P3) and PAM (P7) are not supported. PGM maps naturally onto
//! the intensity field, PPM onto the RGB surface; [`read_pnm`] accepts
//! either and always yields a surface.

use crate::{IoError, IoResult};
use grisaille_core::{IntensityField, Surface};
use std::io::{BufRead, Write};

fn read_byte<R: BufRead>(reader: &mut R) -> IoResult<u8> {
    let mut b = [0u8; 1];
    reader.read_exact(&mut b)?;
    Ok(b[0])
}

/// Read one whitespace-delimited decimal header token, skipping `#`
/// comments. Consumes the single delimiter byte after the digits.
fn read_decimal<R: BufRead>(reader: &mut R) -> IoResult<u32> {
    let mut b = read_byte(reader)?;
    loop {
        if b == b'#' {
            while b != b'\n' {
                b = read_byte(reader)?;
            }
        } else if b.is_ascii_whitespace() {
            b = read_byte(reader)?;
        } else {
            break;
        }
    }

    if !b.is_ascii_digit() {
        return Err(IoError::InvalidData(
            "expected decimal digit in PNM header".to_string(),
        ));
    }
    let mut value: u32 = 0;
    while b.is_ascii_digit() {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u32::from(b - b'0')))
            .ok_or_else(|| IoError::InvalidData("PNM header value too large".to_string()))?;
        b = read_byte(reader)?;
    }
    if !b.is_ascii_whitespace() {
        return Err(IoError::InvalidData(
            "malformed PNM header delimiter".to_string(),
        ));
    }
    Ok(value)
}

/// Parse width, height, and maxval after the magic. Only maxval 255
/// is supported.
fn read_header<R: BufRead>(reader: &mut R) -> IoResult<(u32, u32)> {
    let width = read_decimal(reader)?;
    let height = read_decimal(reader)?;
    let maxval = read_decimal(reader)?;
    if maxval != 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNM maxval: {maxval}"
        )));
    }
    Ok((width, height))
}

/// Read a PNM image (P5 or P6) from a reader.
///
/// P5 grayscale values are expanded to true-gray RGB pixels; P6 data
/// maps directly onto the surface.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Surface> {
    let mut magic = [0u8; 2];
    reader.read_exact(&mut magic)?;
    match &magic {
        b"P5" => {
            let (width, height) = read_header(&mut reader)?;
            let surface = Surface::new(width, height)?;
            let mut row = vec![0u8; width as usize];
            let mut sm = surface.try_into_mut().unwrap();
            for y in 0..height {
                reader.read_exact(&mut row)?;
                for (x, &v) in row.iter().enumerate() {
                    sm.set_rgb_unchecked(x as u32, y, v, v, v);
                }
            }
            Ok(sm.into())
        }
        b"P6" => {
            let (width, height) = read_header(&mut reader)?;
            let surface = Surface::new(width, height)?;
            let mut sm = surface.try_into_mut().unwrap();
            for y in 0..height {
                reader.read_exact(sm.row_bytes_mut(y))?;
            }
            Ok(sm.into())
        }
        _ => Err(IoError::UnsupportedFormat(format!(
            "unsupported PNM magic: {:?}",
            magic
        ))),
    }
}

/// Read a binary PGM (P5) into an intensity field.
pub fn read_pgm<R: BufRead>(mut reader: R) -> IoResult<IntensityField> {
    let mut magic = [0u8; 2];
    reader.read_exact(&mut magic)?;
    if &magic != b"P5" {
        return Err(IoError::UnsupportedFormat(format!(
            "expected P5 magic, got {:?}",
            magic
        )));
    }
    let (width, height) = read_header(&mut reader)?;
    let mut data = vec![0u8; width as usize * height as usize];
    reader.read_exact(&mut data)?;
    Ok(IntensityField::from_flat(width, height, data)?)
}

/// Write a surface as binary PPM (P6).
pub fn write_pnm<W: Write>(surface: &Surface, mut writer: W) -> IoResult<()> {
    write!(writer, "P6\n{} {}\n255\n", surface.width(), surface.height())?;
    writer.write_all(surface.data())?;
    Ok(())
}

/// Write an intensity field as binary PGM (P5).
///
/// This is the natural persisted form of an encoded field: one byte
/// per intensity value, viewable by any PGM reader.
pub fn write_pgm<W: Write>(field: &IntensityField, mut writer: W) -> IoResult<()> {
    write!(writer, "P5\n{} {}\n255\n", field.width(), field.height())?;
    writer.write_all(field.data())?;
    Ok(())
}
