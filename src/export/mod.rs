//! Export module for saving generated data to its output formats.
//!
//! Supports plain-text P3 PPM and 8-bit grayscale PNG for canvases,
//! and GLSL constant arrays for wave-spectrum tables.

mod glsl;
mod png;
mod ppm;

pub use glsl::{export_spectrum_glsl, write_spectrum_glsl, GlslExportError};
pub use png::{export_canvas_png, PngExportError, PngExportOptions};
pub use ppm::{export_canvas_ppm, export_rgb_ppm, PpmExportError};
