//! Glyph rasterizer: one ROM glyph into an 8x8 block of the output bitmap.

use crate::rom::{glyph_record, GLYPH_WIDTH};

/// Intensity of a set bit in normal video.
pub const FOREGROUND: u8 = 255;

/// Intensity of a clear bit in normal video.
pub const BACKGROUND: u8 = 0;

/// Expand `glyph` from `rom` into the 8x8 block at (`origin_x`, `origin_y`).
///
/// `image_width` is the row stride of `bitmap` in pixels. Bit 7 of each
/// scanline maps to column 0. With `inverse` set, foreground and background
/// intensities are swapped.
///
/// The caller guarantees the glyph record and the target block are in
/// bounds; nothing is checked here beyond slice indexing.
#[inline]
pub fn draw_glyph(
    glyph: u8,
    origin_x: usize,
    origin_y: usize,
    bitmap: &mut [u8],
    rom: &[u8],
    image_width: usize,
    inverse: bool,
) {
    let (fg, bg) = if inverse {
        (BACKGROUND, FOREGROUND)
    } else {
        (FOREGROUND, BACKGROUND)
    };
    for (row, &bits) in glyph_record(rom, glyph).iter().enumerate() {
        let start = (origin_y + row) * image_width + origin_x;
        let line = &mut bitmap[start..start + GLYPH_WIDTH];
        for (col, pixel) in line.iter_mut().enumerate() {
            *pixel = if (bits >> (7 - col)) & 1 != 0 { fg } else { bg };
        }
    }
}
