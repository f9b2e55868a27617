//! Grayscale bitmap to image file.

use std::path::Path;

use anyhow::{Context, Result};
use image::{GrayImage, ImageFormat};
use romulator_screen::Bitmap;

use crate::cli::OutputFormat;

impl From<OutputFormat> for ImageFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Bmp => ImageFormat::Bmp,
        }
    }
}

/// Explicit format, else the output extension, else PNG.
pub fn resolve_format(format: Option<OutputFormat>, output: &Path) -> Result<OutputFormat> {
    if let Some(format) = format {
        return Ok(format);
    }
    let Some(ext) = output.extension().and_then(|e| e.to_str()) else {
        return Ok(OutputFormat::Png);
    };
    match ext.to_ascii_lowercase().as_str() {
        "png" => Ok(OutputFormat::Png),
        "bmp" => Ok(OutputFormat::Bmp),
        other => anyhow::bail!("Unsupported output extension '.{}' (use png or bmp)", other),
    }
}

/// Wrap the bitmap as an 8-bit luma image.
pub fn to_image(bitmap: &Bitmap) -> Result<GrayImage> {
    let (width, height) = bitmap.size();
    if width == 0 || height == 0 {
        anyhow::bail!("Cannot encode an empty {}x{} frame", width, height);
    }
    let width = u32::try_from(width).context("Frame too wide")?;
    let height = u32::try_from(height).context("Frame too tall")?;
    GrayImage::from_raw(width, height, bitmap.as_slice().to_vec())
        .context("Bitmap does not match its geometry")
}

pub fn save(bitmap: &Bitmap, output: &Path, format: OutputFormat) -> Result<()> {
    let image = to_image(bitmap)?;
    image
        .save_with_format(output, format.into())
        .with_context(|| format!("Failed to write '{}'", output.display()))
}
