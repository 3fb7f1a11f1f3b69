//! Error types for grisaille-core
//!
//! Provides a unified error type for all operations on the core
//! containers. Each variant captures enough context for diagnostics
//! without exposing internal implementation details.

use thiserror::Error;

/// Grisaille core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Coordinate outside the raster bounds
    #[error("coordinate out of bounds: ({x}, {y}) in {width}x{height}")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// A nested-row intensity field with rows of unequal length
    #[error("ragged intensity field: row {row} has length {actual}, expected {expected}")]
    RaggedField {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Flat buffer length does not match the stated dimensions
    #[error("buffer length mismatch: got {actual} values for {width}x{height}")]
    BufferLengthMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
