//! PNG export functionality for canvases.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::field::Canvas;

/// Errors that can occur during PNG export.
#[derive(Error, Debug)]
pub enum PngExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Options for PNG export.
#[derive(Debug, Clone)]
pub struct PngExportOptions {
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for PngExportOptions {
    fn default() -> Self {
        Self {
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

/// Exports a canvas as an 8-bit grayscale PNG.
///
/// The canvas is already quantized to [0, 255], so its pixel buffer is
/// encoded directly as L8 with no further mapping.
///
/// # Arguments
/// * `canvas` - The canvas to export
/// * `path` - Output file path
/// * `options` - Compression settings
///
/// # Returns
/// `Ok(())` on success, or an error if export fails
pub fn export_canvas_png(
    canvas: &Canvas,
    path: &Path,
    options: &PngExportOptions,
) -> Result<(), PngExportError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);

    encoder.write_image(
        &canvas.pixels,
        canvas.width,
        canvas.height,
        ExtendedColorType::L8,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_export_canvas_png() {
        let mut canvas = Canvas::new(64, 64);
        // Gradient for testing
        for y in 0..64u32 {
            for x in 0..64u32 {
                canvas.pixels[(y * 64 + x) as usize] = ((x + y) * 2) as u8;
            }
        }

        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        export_canvas_png(&canvas, &path, &PngExportOptions::default()).unwrap();

        assert!(path.exists());
        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_exported_png_round_trips() {
        let mut canvas = Canvas::new(8, 8);
        canvas.pixels[0] = 255;
        canvas.pixels[63] = 17;

        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");
        export_canvas_png(&canvas, &path, &PngExportOptions::default()).unwrap();

        let decoded = image::open(&path).unwrap().to_luma8();
        assert_eq!(decoded.dimensions(), (8, 8));
        assert_eq!(decoded.as_raw().as_slice(), canvas.pixels.as_slice());
    }
}
