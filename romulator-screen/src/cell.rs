//! VRAM cell decoding.

/// High bit of a VRAM byte: render the cell in inverse video.
pub const INVERSE_BIT: u8 = 0x80;

/// Low seven bits of a VRAM byte: the glyph index.
pub const GLYPH_MASK: u8 = 0x7F;

/// A decoded VRAM byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    /// Glyph index into the character ROM (0-127).
    pub glyph: u8,
    /// Swap foreground and background intensities.
    pub inverse: bool,
}

impl Cell {
    /// Decode a raw VRAM byte.
    #[inline]
    pub fn decode(byte: u8) -> Self {
        Self {
            glyph: byte & GLYPH_MASK,
            inverse: byte & INVERSE_BIT != 0,
        }
    }
}
