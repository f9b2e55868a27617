//! Character ROM layout.
//!
//! The ROM is a flat table of 8-byte glyph records. Byte `glyph * 8 + row`
//! holds scanline `row`, MSB = leftmost pixel.

use crate::error::RenderError;

/// Pixels per scanline.
pub const GLYPH_WIDTH: usize = 8;

/// Scanlines per glyph.
pub const GLYPH_HEIGHT: usize = 8;

/// Glyphs addressable by a 7-bit VRAM index.
pub const GLYPH_COUNT: usize = 128;

/// Smallest ROM covering the whole 7-bit glyph space.
pub const MIN_ROM_LEN: usize = GLYPH_COUNT * GLYPH_HEIGHT;

/// A borrowed, length-checked view of a character ROM image.
#[derive(Debug, Clone, Copy)]
pub struct CharacterRom<'a> {
    bytes: &'a [u8],
}

impl<'a> CharacterRom<'a> {
    /// Wrap a ROM image, rejecting images too short for 128 glyphs.
    ///
    /// Longer images are accepted; glyphs past index 127 are unreachable
    /// from VRAM and simply ignored.
    pub fn new(bytes: &'a [u8]) -> Result<Self, RenderError> {
        if bytes.len() < MIN_ROM_LEN {
            return Err(RenderError::RomTooShort {
                required: MIN_ROM_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    /// Number of whole glyph records in the image.
    pub fn glyph_count(&self) -> usize {
        self.bytes.len() / GLYPH_HEIGHT
    }

}

/// The 8 scanlines of `glyph` in a raw ROM image.
#[inline]
pub(crate) fn glyph_record(rom: &[u8], glyph: u8) -> &[u8] {
    let start = glyph as usize * GLYPH_HEIGHT;
    &rom[start..start + GLYPH_HEIGHT]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_rom() {
        let bytes = vec![0u8; MIN_ROM_LEN - 1];
        assert_eq!(
            CharacterRom::new(&bytes).unwrap_err(),
            RenderError::RomTooShort { required: 1024, actual: 1023 }
        );
    }

    #[test]
    fn test_glyph_record_addressing() {
        let mut bytes = vec![0u8; MIN_ROM_LEN];
        bytes[65 * 8 + 3] = 0x7E;
        bytes[66 * 8] = 0xFF;
        let record = glyph_record(&bytes, 65);
        assert_eq!(record, &[0, 0, 0, 0x7E, 0, 0, 0, 0]);
        assert_eq!(glyph_record(&bytes, 127).len(), 8);
        assert_eq!(CharacterRom::new(&bytes).unwrap().glyph_count(), 128);
    }

    #[test]
    fn test_accepts_full_8bit_rom() {
        let bytes = vec![0u8; 256 * 8];
        let rom = CharacterRom::new(&bytes).unwrap();
        assert_eq!(rom.glyph_count(), 256);
    }
}
