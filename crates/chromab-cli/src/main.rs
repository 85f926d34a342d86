//! chromab - chromatic aberration command-line filter
//!
//! Loads an image, displaces the red and blue channels against the
//! green channel per the configured displacement law, and saves the
//! result.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use chromab_core::ImageDims;
use chromab_ops::{apply_filter, FilterConfig, DEFAULT_WORKERS};

#[derive(Parser)]
#[command(name = "chromab")]
#[command(author, version, about = "Chromatic aberration image filter")]
#[command(long_about = "
Simulates lens dispersion by displacing the red and blue channels of an
image in opposite directions relative to the green channel.

Examples:
  chromab photo.png out.png                        # Radial, defaults
  chromab photo.png out.png -s 40 --deadzone 10    # Stronger, wider calm center
  chromab photo.png out.png --falloff linear
  chromab photo.png out.png --shape linear --direction 45 -s 8
  chromab photo.png out.png --interpolate -j 8     # Smooth sampling, 8 workers
")]
struct Cli {
    /// Input image (PNG, JPEG, ...)
    input: PathBuf,

    /// Output image path
    output: PathBuf,

    /// Displacement shape
    #[arg(long, value_enum, default_value_t = Shape::Radial)]
    shape: Shape,

    /// Maximum displacement in pixels
    #[arg(short, long, default_value_t = 20)]
    strength: u32,

    /// Radial deadzone as a percent of the center distance (0-99)
    #[arg(long, default_value_t = 5)]
    deadzone: u32,

    /// Radial falloff law
    #[arg(long, value_enum, default_value_t = Falloff::Exponential)]
    falloff: Falloff,

    /// Linear displacement direction in degrees (0-359)
    #[arg(long, default_value_t = 100)]
    direction: u32,

    /// Bilinear interpolation (slower, smoother colors)
    #[arg(short, long)]
    interpolate: bool,

    /// Number of worker threads
    #[arg(short = 'j', long, default_value_t = DEFAULT_WORKERS)]
    threads: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Displacement shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Shape {
    /// Displacement grows outward from the image center
    Radial,
    /// Uniform displacement along a fixed direction
    Linear,
}

/// Radial falloff law.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Falloff {
    /// Quadratic growth from the deadzone edge
    Exponential,
    /// Linear growth from the deadzone edge
    Linear,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match cli.shape {
        Shape::Radial => FilterConfig::radial(
            cli.strength,
            cli.deadzone,
            cli.falloff == Falloff::Exponential,
            cli.interpolate,
        )?,
        Shape::Linear => FilterConfig::linear(cli.strength, cli.direction, cli.interpolate)?,
    };

    if cli.verbose {
        println!("Loading: {}", cli.input.display());
    }
    let img = image::open(&cli.input)
        .with_context(|| format!("Failed to load: {}", cli.input.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    let dims = ImageDims::new(width, height)?;

    if cli.verbose {
        println!("Size: {width}x{height}");
        println!("Filter: {config:?} ({} threads)", cli.threads);
    }

    let start = Instant::now();
    let out = apply_filter(img.as_raw(), dims, &config, cli.threads)?;
    tracing::debug!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        "filter complete"
    );

    let Some(result) = image::RgbaImage::from_raw(width, height, out) else {
        bail!("output buffer does not match {width}x{height}");
    };
    result
        .save(&cli.output)
        .with_context(|| format!("Failed to save: {}", cli.output.display()))?;

    if cli.verbose {
        println!("Saved: {}", cli.output.display());
    }
    Ok(())
}
