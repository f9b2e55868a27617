//! Frame compositor: tiles every VRAM cell into the output bitmap.

use crate::cell::Cell;
use crate::error::RenderError;
use crate::glyph::draw_glyph;
use crate::rom::{CharacterRom, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Text grid dimensions and per-cell pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Cell rows.
    pub rows: usize,
    /// Cell columns.
    pub columns: usize,
    /// Pixels per cell, horizontally.
    pub char_width: usize,
    /// Pixels per cell, vertically.
    pub char_height: usize,
}

impl Geometry {
    /// Grid of 8x8 cells.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            char_width: GLYPH_WIDTH,
            char_height: GLYPH_HEIGHT,
        }
    }

    /// Bitmap row stride in pixels.
    pub fn image_width(&self) -> usize {
        self.columns * self.char_width
    }

    pub fn image_height(&self) -> usize {
        self.rows * self.char_height
    }

    /// Pixels in the rendered region.
    pub fn pixel_len(&self) -> usize {
        self.image_width() * self.image_height()
    }

    /// VRAM bytes expected for this grid.
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// [`pixel_len`](Self::pixel_len), failing instead of overflowing on
    /// either image dimension or their product.
    pub fn checked_pixel_len(&self) -> Result<usize, RenderError> {
        let width = self.columns.checked_mul(self.char_width);
        let height = self.rows.checked_mul(self.char_height);
        width
            .zip(height)
            .and_then(|(width, height)| width.checked_mul(height))
            .ok_or(RenderError::DimensionsOverflow)
    }

    /// Check every render precondition once, up front.
    pub fn validate(&self, vram: &[u8], rom: &[u8], bitmap: &[u8]) -> Result<(), RenderError> {
        if self.char_width != GLYPH_WIDTH || self.char_height != GLYPH_HEIGHT {
            return Err(RenderError::UnsupportedCellSize {
                width: self.char_width,
                height: self.char_height,
            });
        }

        let pixels = self.checked_pixel_len()?;
        let cells = self
            .rows
            .checked_mul(self.columns)
            .ok_or(RenderError::DimensionsOverflow)?;

        if vram.len() != cells {
            return Err(RenderError::VramLength {
                expected: cells,
                actual: vram.len(),
            });
        }
        if bitmap.len() < pixels {
            return Err(RenderError::BitmapTooSmall {
                required: pixels,
                actual: bitmap.len(),
            });
        }
        CharacterRom::new(rom)?;
        Ok(())
    }
}

/// Render every VRAM cell into `bitmap`, row-major.
///
/// Preconditions are the caller's: `vram.len() == rows * columns`, the
/// bitmap holds at least `image_width * image_height` pixels and the ROM
/// covers 128 glyphs. Use [`try_render_frame`] for input that has not been
/// validated.
pub fn render_frame(vram: &[u8], rom: &[u8], geometry: &Geometry, bitmap: &mut [u8]) {
    let image_width = geometry.image_width();

    let mut char_index = 0;
    for row in 0..geometry.rows {
        for col in 0..geometry.columns {
            let x = col * geometry.char_width;
            let y = row * geometry.char_height;
            let cell = Cell::decode(vram[char_index]);
            char_index += 1;

            draw_glyph(cell.glyph, x, y, bitmap, rom, image_width, cell.inverse);
        }
    }
}

/// Validate the inputs, then [`render_frame`].
///
/// On error nothing has been written to `bitmap`.
pub fn try_render_frame(
    vram: &[u8],
    rom: &[u8],
    geometry: &Geometry,
    bitmap: &mut [u8],
) -> Result<(), RenderError> {
    if let Err(err) = geometry.validate(vram, rom, bitmap) {
        tracing::debug!(?geometry, %err, "rejected render input");
        return Err(err);
    }

    tracing::trace!(
        rows = geometry.rows,
        columns = geometry.columns,
        cells = geometry.cell_count(),
        "rendering frame"
    );
    render_frame(vram, rom, geometry, bitmap);
    Ok(())
}
