//! Caller-owned output buffer.

use crate::error::RenderError;
use crate::frame::{try_render_frame, Geometry};
use crate::glyph::FOREGROUND;

/// A grayscale frame sized for one [`Geometry`].
///
/// Allocated once and reused across frames; rendering overwrites every
/// pixel, so no clearing is needed between frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Pixels, stored row-major.
    pixels: Vec<u8>,
    geometry: Geometry,
}

impl Bitmap {
    /// Allocate a zeroed bitmap for `geometry`.
    pub fn new(geometry: Geometry) -> Result<Self, RenderError> {
        let len = geometry.checked_pixel_len()?;
        Ok(Self {
            pixels: vec![0; len],
            geometry,
        })
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Pixel dimensions (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.geometry.image_width(), self.geometry.image_height())
    }

    pub fn width(&self) -> usize {
        self.geometry.image_width()
    }

    pub fn height(&self) -> usize {
        self.geometry.image_height()
    }

    /// Render `vram` into this bitmap, replacing the previous frame.
    pub fn render(&mut self, vram: &[u8], rom: &[u8]) -> Result<(), RenderError> {
        try_render_frame(vram, rom, &self.geometry, &mut self.pixels)
    }

    /// Intensity at (x, y), or `None` outside the frame.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.width() && y < self.height() {
            self.pixels.get(y * self.width() + x).copied()
        } else {
            None
        }
    }

    /// Iterate over pixel rows.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[u8]> {
        // chunks() rejects 0; an empty frame yields no rows either way.
        self.pixels.chunks(self.width().max(1))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.pixels
    }

    /// One text line per pixel row: `#` for foreground, `.` for background.
    pub fn to_ascii(&self) -> String {
        let mut result = String::with_capacity((self.width() + 1) * self.height());
        for row in self.rows_iter() {
            for &pixel in row {
                result.push(if pixel == FOREGROUND { '#' } else { '.' });
            }
            result.push('\n');
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rom::MIN_ROM_LEN;

    #[test]
    fn test_new_is_sized_for_geometry() {
        let bitmap = Bitmap::new(Geometry::new(3, 4)).unwrap();
        assert_eq!(bitmap.size(), (32, 24));
        assert_eq!(bitmap.as_slice().len(), 32 * 24);
    }

    #[test]
    fn test_pixel_out_of_range() {
        let bitmap = Bitmap::new(Geometry::new(1, 1)).unwrap();
        assert_eq!(bitmap.pixel(7, 7), Some(0));
        assert_eq!(bitmap.pixel(8, 0), None);
        assert_eq!(bitmap.pixel(0, 8), None);
    }

    #[test]
    fn test_reuse_overwrites_previous_frame() {
        let mut rom = vec![0u8; MIN_ROM_LEN];
        rom[8..16].fill(0xFF);
        let mut bitmap = Bitmap::new(Geometry::new(1, 1)).unwrap();

        bitmap.render(&[1], &rom).unwrap();
        assert!(bitmap.as_slice().iter().all(|&p| p == FOREGROUND));

        bitmap.render(&[0], &rom).unwrap();
        assert!(bitmap.as_slice().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_to_ascii() {
        let mut rom = vec![0u8; MIN_ROM_LEN];
        rom[8] = 0x81;
        let mut bitmap = Bitmap::new(Geometry::new(1, 1)).unwrap();
        bitmap.render(&[1], &rom).unwrap();

        let ascii = bitmap.to_ascii();
        let first = ascii.lines().next().unwrap();
        assert_eq!(first, "#......#");
        assert_eq!(ascii.lines().count(), 8);
    }

    #[test]
    fn test_new_rejects_overflowing_geometry() {
        assert_eq!(
            Bitmap::new(Geometry::new(1 << 40, 1 << 40)),
            Err(RenderError::DimensionsOverflow)
        );
        assert_eq!(
            Bitmap::new(Geometry::new(0, usize::MAX / 4)),
            Err(RenderError::DimensionsOverflow)
        );
    }

    #[test]
    fn test_empty_geometry() {
        let bitmap = Bitmap::new(Geometry::new(0, 80)).unwrap();
        assert_eq!(bitmap.as_slice().len(), 0);
        assert_eq!(bitmap.rows_iter().count(), 0);
        assert_eq!(bitmap.to_ascii(), "");
    }
}
