//! Render input validation errors.

use thiserror::Error;

/// Rejected render input, reported before any pixel is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("vram length mismatch: expected {expected} bytes, got {actual}")]
    VramLength { expected: usize, actual: usize },

    #[error("output bitmap too small: need {required} bytes, got {actual}")]
    BitmapTooSmall { required: usize, actual: usize },

    #[error("character rom too short: need {required} bytes, got {actual}")]
    RomTooShort { required: usize, actual: usize },

    #[error("unsupported cell size {width}x{height}, glyphs are 8x8")]
    UnsupportedCellSize { width: usize, height: usize },

    #[error("frame dimensions overflow")]
    DimensionsOverflow,
}
