//! Texgen CLI - offline procedural content generator.
//!
//! Generate tileable Worley noise textures and ocean wave-spectrum
//! tables for consumption by a real-time renderer.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use texgen::export::{
    export_canvas_png, export_canvas_ppm, export_spectrum_glsl, write_spectrum_glsl,
    PngExportOptions,
};
use texgen::noise::{generate_tiled, TiledConfig, WorleyConfig};
use texgen::prep::convert_to_ppm;
use texgen::spectrum::{
    generate_phillips, generate_random, PhillipsConfig, RandomSpectrumConfig, WaveSpectrum,
};

/// Offline procedural texture and wave-spectrum generator.
#[derive(Parser)]
#[command(name = "texgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a tiled Worley noise texture.
    Worley {
        /// Canvas width in pixels; must be a multiple of the tile size.
        #[arg(long, default_value = "1024")]
        width: u32,

        /// Canvas height in pixels; must be a multiple of the tile size.
        #[arg(long, default_value = "1024")]
        height: u32,

        /// Edge length of each square tile in pixels.
        #[arg(long, default_value = "128")]
        tile_size: u32,

        /// Grid cell spacing (distance between feature points).
        #[arg(long, default_value = "32")]
        scale: u32,

        /// Number of noise layers summed per tile.
        #[arg(long, default_value = "4")]
        layers: u32,

        /// Random seed for reproducible generation.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Standard deviation of the seam-masking jitter.
        #[arg(long, default_value = "0.1")]
        jitter_sigma: f32,

        /// Output file path.
        #[arg(short, long, default_value = "tiled_worley_noise.ppm")]
        output: PathBuf,

        /// Output format.
        #[arg(short, long, default_value = "ppm")]
        format: TextureFormat,
    },

    /// Generate an ocean wave-spectrum table as GLSL constant arrays.
    Spectrum {
        /// Sampling model.
        #[arg(short, long, default_value = "random")]
        model: SpectrumModel,

        /// Random seed for reproducible generation.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output file; prints to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of frequency bins (random model).
        #[arg(long, default_value = "64")]
        count: usize,

        /// Wave-vector grid resolution (phillips model).
        #[arg(long, default_value = "64")]
        resolution: u32,

        /// Physical patch size (phillips model).
        #[arg(long, default_value = "64.0")]
        domain_size: f32,

        /// Wind speed (phillips model).
        #[arg(long, default_value = "32.0")]
        wind_speed: f32,

        /// Wind direction x component (phillips model).
        #[arg(long, default_value = "1.0")]
        wind_x: f32,

        /// Wind direction y component (phillips model).
        #[arg(long, default_value = "0.0")]
        wind_y: f32,

        /// Energy scaling factor (phillips model).
        #[arg(long, default_value = "0.0002")]
        amplitude: f32,

        /// Gravitational acceleration (phillips model).
        #[arg(long, default_value = "9.81")]
        gravity: f32,

        /// Damping coefficient (phillips model).
        #[arg(long, default_value = "0.001")]
        damping: f32,
    },

    /// Convert a reference image to a resized P3 PPM texture.
    Convert {
        /// Input image path.
        #[arg(short, long)]
        input: PathBuf,

        /// Output PPM path.
        #[arg(short, long)]
        output: PathBuf,

        /// Target width in pixels.
        #[arg(long, default_value = "640")]
        width: u32,

        /// Target height in pixels.
        #[arg(long, default_value = "640")]
        height: u32,
    },

    /// Display tile partition and size information for a configuration.
    Info {
        /// Canvas width in pixels.
        #[arg(long, default_value = "1024")]
        width: u32,

        /// Canvas height in pixels.
        #[arg(long, default_value = "1024")]
        height: u32,

        /// Edge length of each square tile in pixels.
        #[arg(long, default_value = "128")]
        tile_size: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TextureFormat {
    /// Plain-text P3 PPM (the renderer's native texture format).
    Ppm,
    /// 8-bit grayscale PNG.
    Png,
}

#[derive(Clone, Copy, ValueEnum)]
enum SpectrumModel {
    /// Independent uniform draws per frequency bin.
    Random,
    /// Phillips ocean spectrum driven by wind parameters.
    Phillips,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Worley {
            width,
            height,
            tile_size,
            scale,
            layers,
            seed,
            jitter_sigma,
            output,
            format,
        } => {
            run_worley(
                width,
                height,
                tile_size,
                scale,
                layers,
                seed,
                jitter_sigma,
                output,
                format,
            );
        }
        Commands::Spectrum {
            model,
            seed,
            output,
            count,
            resolution,
            domain_size,
            wind_speed,
            wind_x,
            wind_y,
            amplitude,
            gravity,
            damping,
        } => {
            run_spectrum(
                model,
                seed,
                output,
                count,
                resolution,
                domain_size,
                wind_speed,
                wind_x,
                wind_y,
                amplitude,
                gravity,
                damping,
            );
        }
        Commands::Convert {
            input,
            output,
            width,
            height,
        } => {
            run_convert(input, output, width, height);
        }
        Commands::Info {
            width,
            height,
            tile_size,
        } => {
            run_info(width, height, tile_size);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run_worley(
    width: u32,
    height: u32,
    tile_size: u32,
    scale: u32,
    layers: u32,
    seed: Option<u64>,
    jitter_sigma: f32,
    output: PathBuf,
    format: TextureFormat,
) {
    let seed = seed.unwrap_or_else(seed_from_time);

    println!("Texgen - Tiled Worley Noise");
    println!("===========================");
    println!("Canvas: {}x{}", width, height);
    println!("Tiles: {}x{} pixels", tile_size, tile_size);
    println!("Scale: {}, layers: {}", scale, layers);
    println!("Seed: {}", seed);

    let config = TiledConfig {
        tile_size,
        jitter_sigma,
        worley: WorleyConfig {
            scale,
            layers,
            seed,
        },
    };

    let start = Instant::now();
    let canvas = generate_tiled(width, height, &config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    println!("Generation completed in {:.2?}", start.elapsed());

    match format {
        TextureFormat::Ppm => {
            export_canvas_ppm(&canvas, &output).unwrap_or_else(|e| {
                eprintln!("Error exporting PPM: {}", e);
                std::process::exit(1);
            });
        }
        TextureFormat::Png => {
            export_canvas_png(&canvas, &output, &PngExportOptions::default()).unwrap_or_else(|e| {
                eprintln!("Error exporting PNG: {}", e);
                std::process::exit(1);
            });
        }
    }

    println!("Noise saved to {}", output.display());
}

#[allow(clippy::too_many_arguments)]
fn run_spectrum(
    model: SpectrumModel,
    seed: Option<u64>,
    output: Option<PathBuf>,
    count: usize,
    resolution: u32,
    domain_size: f32,
    wind_speed: f32,
    wind_x: f32,
    wind_y: f32,
    amplitude: f32,
    gravity: f32,
    damping: f32,
) {
    let seed = seed.unwrap_or_else(seed_from_time);

    let spectrum: WaveSpectrum = match model {
        SpectrumModel::Random => {
            let config = RandomSpectrumConfig {
                count,
                seed,
                ..Default::default()
            };
            generate_random(&config)
        }
        SpectrumModel::Phillips => {
            let config = PhillipsConfig {
                resolution,
                domain_size,
                wind_speed,
                wind_direction: glam::Vec2::new(wind_x, wind_y),
                amplitude,
                gravity,
                damping,
                seed,
            };
            generate_phillips(&config)
        }
    }
    .unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    eprintln!("Generated {} frequency bins (seed {})", spectrum.len(), seed);

    match output {
        Some(path) => {
            export_spectrum_glsl(&spectrum, &path).unwrap_or_else(|e| {
                eprintln!("Error exporting GLSL: {}", e);
                std::process::exit(1);
            });
            eprintln!("Spectrum saved to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            write_spectrum_glsl(&spectrum, &mut lock).unwrap_or_else(|e| {
                eprintln!("Error writing GLSL: {}", e);
                std::process::exit(1);
            });
            lock.flush().unwrap_or_else(|e| {
                eprintln!("Error writing GLSL: {}", e);
                std::process::exit(1);
            });
        }
    }
}

fn run_convert(input: PathBuf, output: PathBuf, width: u32, height: u32) {
    convert_to_ppm(&input, &output, width, height).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    println!(
        "Converted {} to P3 PPM ({}x{}), saved as {}",
        input.display(),
        width,
        height,
        output.display()
    );
}

fn run_info(width: u32, height: u32, tile_size: u32) {
    println!("Texgen - Configuration Info");
    println!("===========================");
    println!();
    println!("Canvas: {}x{}", width, height);
    println!("Tile size: {}x{}", tile_size, tile_size);
    println!();

    if tile_size == 0 || width % tile_size != 0 || height % tile_size != 0 {
        println!("Partition: INVALID - canvas dimensions must be multiples of the tile size");
        return;
    }

    let tiles_x = width / tile_size;
    let tiles_y = height / tile_size;
    let pixels_per_tile = (tile_size as u64) * (tile_size as u64);
    let total_pixels = (width as u64) * (height as u64);

    let bytes_tile_field = pixels_per_tile * 4; // f32 accumulator
    let bytes_canvas = total_pixels; // u8
    // "255 255 255 " per pixel plus row newlines, worst case.
    let bytes_ppm = total_pixels * 12 + height as u64;

    println!("Tile partition:");
    println!("  Grid:      {:>6} x {} tiles", tiles_x, tiles_y);
    println!("  Per tile:  {:>12} pixels", pixels_per_tile);
    println!("  Total:     {:>12} pixels", total_pixels);
    println!();
    println!("Memory usage (in-memory):");
    println!(
        "  Tile field:  {:>12} bytes ({:.2} MB)",
        bytes_tile_field,
        bytes_tile_field as f64 / 1024.0 / 1024.0
    );
    println!(
        "  Canvas:      {:>12} bytes ({:.2} MB)",
        bytes_canvas,
        bytes_canvas as f64 / 1024.0 / 1024.0
    );
    println!();
    println!("Export file sizes:");
    println!(
        "  PPM (worst case): {:>12} bytes ({:.2} MB)",
        bytes_ppm,
        bytes_ppm as f64 / 1024.0 / 1024.0
    );
}

fn seed_from_time() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
