//! Plain-text PPM (P3) export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use crate::field::Canvas;

/// Errors that can occur during PPM export.
#[derive(Error, Debug)]
pub enum PpmExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("pixel data length {0} != expected {1}")]
    DataLengthMismatch(usize, usize),
}

/// Exports a canvas as a grayscale P3 PPM file.
///
/// Header is `P3`, dimensions, and the maximum value 255, followed by
/// one text line of `r g b` triples per canvas row, with R = G = B.
///
/// # Arguments
/// * `canvas` - The quantized canvas to write
/// * `path` - Output file path
///
/// # Returns
/// `Ok(())` on success, or an error if the write fails
pub fn export_canvas_ppm(canvas: &Canvas, path: &Path) -> Result<(), PpmExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", canvas.width, canvas.height)?;
    writeln!(writer, "255")?;

    for y in 0..canvas.height {
        for x in 0..canvas.width {
            let value = canvas.get(x, y);
            write!(writer, "{} {} {} ", value, value, value)?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

/// Exports interleaved RGB pixel data as a P3 PPM file.
///
/// `pixels` must hold `width * height * 3` bytes in row-major order.
/// Used by the texture prep path, which carries real color.
pub fn export_rgb_ppm(
    width: u32,
    height: u32,
    pixels: &[u8],
    path: &Path,
) -> Result<(), PpmExportError> {
    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(PpmExportError::DataLengthMismatch(pixels.len(), expected));
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "255")?;

    for row in pixels.chunks_exact((width as usize) * 3) {
        for rgb in row.chunks_exact(3) {
            write!(writer, "{} {} {} ", rgb[0], rgb[1], rgb[2])?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}
