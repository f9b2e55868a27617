use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "romulator", about = "Render text-mode VRAM through a character ROM")]
pub struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a VRAM dump to an image file
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Output image path
        #[arg(short, long)]
        output: PathBuf,

        /// Image format (inferred from the output extension if omitted)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Print a VRAM dump as text, one character per pixel
    Ascii {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(ClapArgs, Debug)]
pub struct InputArgs {
    /// Character ROM image (8 bytes per glyph)
    #[arg(long)]
    pub rom: PathBuf,

    /// VRAM dump, one byte per cell, row-major
    #[arg(long)]
    pub vram: PathBuf,

    /// JSON screen configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: GeometryArgs,
}

/// Geometry flags; each one overrides the config file.
#[derive(ClapArgs, Debug, Default, Clone)]
pub struct GeometryArgs {
    /// Cell rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Cell columns
    #[arg(long)]
    pub columns: Option<usize>,

    /// Pixels per cell, horizontally
    #[arg(long)]
    pub char_width: Option<usize>,

    /// Pixels per cell, vertically
    #[arg(long)]
    pub char_height: Option<usize>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Bmp,
}
