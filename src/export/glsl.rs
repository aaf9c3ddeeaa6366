//! GLSL constant-array emission for wave-spectrum tables.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glam::Vec2;
use thiserror::Error;

use crate::spectrum::WaveSpectrum;

// Elements emitted per source line.
const ELEMENTS_PER_LINE: usize = 4;

/// Errors that can occur during GLSL export.
#[derive(Error, Debug)]
pub enum GlslExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot emit an empty spectrum: GLSL arrays need at least one element")]
    EmptySpectrum,
}

/// Writes a spectrum as GLSL constant arrays.
///
/// Emits `freqCount` and the four parallel arrays `freqDir` (vec2),
/// `freqOmega`, `freqAmp`, and `freqPhaseOffset` (float), four elements
/// per line, six decimal places. The output pastes directly into a
/// water shader.
///
/// # Arguments
/// * `spectrum` - The table to emit; must hold at least one bin
/// * `writer` - Destination for the GLSL text
pub fn write_spectrum_glsl<W: Write>(
    spectrum: &WaveSpectrum,
    writer: &mut W,
) -> Result<(), GlslExportError> {
    if spectrum.is_empty() {
        return Err(GlslExportError::EmptySpectrum);
    }

    writeln!(writer, "const int freqCount = {};", spectrum.len())?;
    writeln!(writer)?;

    write_vec2_array(writer, "freqDir", &spectrum.directions)?;
    write_float_array(writer, "freqOmega", &spectrum.omegas)?;
    write_float_array(writer, "freqAmp", &spectrum.amplitudes)?;
    write_float_array(writer, "freqPhaseOffset", &spectrum.phases)?;

    Ok(())
}

/// Writes a spectrum as GLSL constant arrays to a file.
pub fn export_spectrum_glsl(spectrum: &WaveSpectrum, path: &Path) -> Result<(), GlslExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_spectrum_glsl(spectrum, &mut writer)?;
    writer.flush()?;
    Ok(())
}

fn write_vec2_array<W: Write>(
    writer: &mut W,
    name: &str,
    data: &[Vec2],
) -> Result<(), GlslExportError> {
    writeln!(writer, "const vec2 {}[{}] = vec2[](", name, data.len())?;
    for (i, chunk) in data.chunks(ELEMENTS_PER_LINE).enumerate() {
        let line = chunk
            .iter()
            .map(|v| format!("vec2({:.6}, {:.6})", v.x, v.y))
            .collect::<Vec<_>>()
            .join(", ");
        let last = (i + 1) * ELEMENTS_PER_LINE >= data.len();
        writeln!(writer, "    {}{}", line, if last { "" } else { "," })?;
    }
    writeln!(writer, ");")?;
    writeln!(writer)?;
    Ok(())
}

fn write_float_array<W: Write>(
    writer: &mut W,
    name: &str,
    data: &[f32],
) -> Result<(), GlslExportError> {
    writeln!(writer, "const float {}[{}] = float[](", name, data.len())?;
    for (i, chunk) in data.chunks(ELEMENTS_PER_LINE).enumerate() {
        let line = chunk
            .iter()
            .map(|v| format!("{:.6}", v))
            .collect::<Vec<_>>()
            .join(", ");
        let last = (i + 1) * ELEMENTS_PER_LINE >= data.len();
        writeln!(writer, "    {}{}", line, if last { "" } else { "," })?;
    }
    writeln!(writer, ");")?;
    writeln!(writer)?;
    Ok(())
}
