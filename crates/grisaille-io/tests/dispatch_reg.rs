//! Test path-level read/write dispatch: format is sniffed from the
//! file's magic number, never from its extension

use grisaille_core::Surface;
use grisaille_io::{ImageFormat, IoError, read_image, write_image};
use std::fs;

fn sample_surface() -> Surface {
    let mut sm = Surface::new(3, 2).unwrap().try_into_mut().unwrap();
    for y in 0..2 {
        for x in 0..3 {
            sm.set_rgb_unchecked(x, y, (x * 80) as u8, (y * 120) as u8, 200);
        }
    }
    sm.into()
}

#[test]
fn test_read_image_sniffs_magic_not_extension() {
    let dir = tempfile::tempdir().unwrap();
    let surface = sample_surface();

    // PNG bytes behind a misleading .pnm name
    let path = dir.path().join("mislabeled.pnm");
    write_image(&surface, &path, ImageFormat::Png).unwrap();

    let restored = read_image(&path).unwrap();
    assert!(restored.sizes_equal(&surface));
    assert_eq!(restored.data(), surface.data());
}

#[test]
fn test_write_read_roundtrip_both_formats() {
    let dir = tempfile::tempdir().unwrap();
    let surface = sample_surface();

    for (format, name) in [(ImageFormat::Png, "out.png"), (ImageFormat::Pnm, "out.pnm")] {
        let path = dir.path().join(name);
        write_image(&surface, &path, format).unwrap();
        let restored = read_image(&path).unwrap();
        assert!(restored.sizes_equal(&surface));
        assert_eq!(restored.data(), surface.data());
    }
}

#[test]
fn test_read_image_unknown_format_rejected() {
    let dir = tempfile::tempdir().unwrap();

    // A GIF header: recognizable garbage, extension says PNG
    let path = dir.path().join("garbage.png");
    fs::write(&path, b"GIF89a such pixels").unwrap();

    assert!(matches!(
        read_image(&path),
        Err(IoError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_read_image_truncated_header_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let path = dir.path().join("tiny.png");
    fs::write(&path, b"P").unwrap();

    assert!(matches!(read_image(&path), Err(IoError::InvalidData(_))));
}

#[test]
fn test_read_image_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.png");
    assert!(matches!(read_image(&path), Err(IoError::Io(_))));
}

#[test]
fn test_write_image_unknown_format_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let surface = sample_surface();
    let path = dir.path().join("out.dat");

    assert!(matches!(
        write_image(&surface, &path, ImageFormat::Unknown),
        Err(IoError::UnsupportedFormat(_))
    ));
}
