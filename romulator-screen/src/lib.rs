//! Romulator Screen - text-mode VRAM to grayscale bitmap rendering.
//!
//! Each VRAM byte selects a glyph from an 8x8 character ROM, with the high
//! bit reused as an inverse-video flag. The frame is composed into a
//! caller-owned, single-channel pixel buffer (0 or 255 per pixel).

mod bitmap;
mod cell;
mod error;
mod frame;
mod glyph;
mod rom;

pub use bitmap::Bitmap;
pub use cell::{Cell, GLYPH_MASK, INVERSE_BIT};
pub use error::RenderError;
pub use frame::{render_frame, try_render_frame, Geometry};
pub use glyph::{draw_glyph, BACKGROUND, FOREGROUND};
pub use rom::{CharacterRom, GLYPH_COUNT, GLYPH_HEIGHT, GLYPH_WIDTH, MIN_ROM_LEN};
