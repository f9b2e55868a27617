//! Romulator - render text-mode VRAM dumps to images.

mod cli;
mod config;
mod encode;
mod logging;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use romulator_screen::{Bitmap, CharacterRom, Geometry};

use crate::cli::{Args, Command, InputArgs};
use crate::config::ScreenConfig;
use crate::logging::setup_logging;

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    match args.command {
        Command::Render {
            input,
            output,
            format,
        } => {
            let bitmap = render_input(&input)?;
            let format = encode::resolve_format(format, &output)?;
            encode::save(&bitmap, &output, format)?;
            tracing::info!(
                output = %output.display(),
                width = bitmap.width(),
                height = bitmap.height(),
                "wrote frame"
            );
        }
        Command::Ascii { input } => {
            let bitmap = render_input(&input)?;
            print!("{}", bitmap.to_ascii());
        }
    }
    Ok(())
}

fn render_input(input: &InputArgs) -> Result<Bitmap> {
    let config = ScreenConfig::resolve(input.config.as_deref(), &input.overrides)?;
    let geometry = Geometry::from(config);
    let mut bitmap = Bitmap::new(geometry)
        .with_context(|| format!("Invalid screen geometry {}x{}", geometry.columns, geometry.rows))?;

    let rom = read_file(&input.rom, "character rom")?;
    let glyphs = CharacterRom::new(&rom)
        .with_context(|| format!("Invalid character rom '{}'", input.rom.display()))?
        .glyph_count();
    let vram = read_file(&input.vram, "vram")?;
    tracing::debug!(glyphs, vram_bytes = vram.len(), ?geometry, "loaded inputs");

    bitmap
        .render(&vram, &rom)
        .with_context(|| format!("Failed to render {}", input.vram.display()))?;
    Ok(bitmap)
}

fn read_file(path: &Path, what: &str) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {} '{}'", what, path.display()))
}
