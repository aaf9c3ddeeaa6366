//! Reference texture preprocessing.
//!
//! Loads an arbitrary raster image, resizes it to a fixed target, and
//! emits it as P3 PPM so the renderer's texture loader can consume it
//! alongside the generated noise maps.

use std::path::Path;

use image::imageops::FilterType;
use thiserror::Error;

use crate::export::{export_rgb_ppm, PpmExportError};

/// Errors that can occur during texture preprocessing.
#[derive(Error, Debug)]
pub enum PrepError {
    #[error("Image decoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("PPM export error: {0}")]
    Ppm(#[from] PpmExportError),
}

/// Converts an image file to a resized RGB P3 PPM.
///
/// # Arguments
/// * `input` - Source image in any format the `image` crate decodes
/// * `output` - Destination PPM path
/// * `width`, `height` - Target dimensions; the image is resized to
///   exactly this size, ignoring aspect ratio
///
/// # Returns
/// `Ok(())` on success, or an error if decoding or writing fails
pub fn convert_to_ppm(
    input: &Path,
    output: &Path,
    width: u32,
    height: u32,
) -> Result<(), PrepError> {
    let img = image::open(input)?;
    let resized = img.resize_exact(width, height, FilterType::Triangle);
    let rgb = resized.to_rgb8();

    export_rgb_ppm(width, height, rgb.as_raw(), output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    #[test]
    fn test_convert_resizes_and_writes_ppm() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.png");
        let output = dir.path().join("output.ppm");

        let mut img = RgbImage::new(8, 8);
        for pixel in img.pixels_mut() {
            *pixel = Rgb([10, 20, 30]);
        }
        img.save(&input).unwrap();

        convert_to_ppm(&input, &output, 4, 4).unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        assert!(contents.starts_with("P3\n4 4\n255\n"));
        // Uniform input stays uniform through resampling.
        assert!(contents.contains("10 20 30"));
    }

    #[test]
    fn test_missing_input_fails() {
        let dir = tempdir().unwrap();
        let result = convert_to_ppm(
            &dir.path().join("does_not_exist.jpg"),
            &dir.path().join("out.ppm"),
            16,
            16,
        );
        assert!(matches!(result, Err(PrepError::Image(_))));
    }
}
