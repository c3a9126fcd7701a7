//! Command-line interface for luminol

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{
    APP_ABOUT, APP_AUTHOR, APP_NAME, APP_VERSION, DOWNSCALE_BALANCED, DOWNSCALE_FAST,
    DOWNSCALE_HIGH, KMEANS_ITER_BALANCED, KMEANS_ITER_FAST, KMEANS_ITER_HIGH,
};
use crate::error::{LuminolError, Result};
use crate::theme::ThemeMode;

/// Quality level, trading palette fidelity for speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Quality {
    /// 400px downscale, 10 k-means iterations
    Fast,
    /// 800px downscale, 20 k-means iterations
    #[default]
    Balanced,
    /// 1200px downscale, 40 k-means iterations
    High,
}

impl Quality {
    /// Longest-edge target for the image downscale
    #[must_use]
    pub const fn downscale_target(&self) -> u32 {
        match self {
            Quality::Fast => DOWNSCALE_FAST,
            Quality::Balanced => DOWNSCALE_BALANCED,
            Quality::High => DOWNSCALE_HIGH,
        }
    }

    /// Iteration cap for k-means
    #[must_use]
    pub const fn kmeans_iterations(&self) -> usize {
        match self {
            Quality::Fast => KMEANS_ITER_FAST,
            Quality::Balanced => KMEANS_ITER_BALANCED,
            Quality::High => KMEANS_ITER_HIGH,
        }
    }
}

/// Main CLI structure
#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(about = APP_ABOUT)]
#[command(author = APP_AUTHOR)]
#[command(version = APP_VERSION)]
pub struct Cli {
    /// Wallpaper image (PNG, JPG, or WebP)
    #[arg(short, long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Wallpaper image as a positional argument
    #[arg(value_name = "IMAGE_PATH")]
    pub image_path: Option<PathBuf>,

    /// Force the theme instead of detecting it from the image
    #[arg(short, long, value_enum)]
    pub theme: Option<ThemeMode>,

    /// Palette extraction quality
    #[arg(short, long, value_enum, default_value = "balanced")]
    pub quality: Quality,

    /// Verbose output (debug logging plus the palette preview table)
    #[arg(short, long)]
    pub verbose: bool,

    /// Run the full pipeline without writing files or spawning commands
    #[arg(long)]
    pub dry_run: bool,

    /// Config file to use instead of the XDG default
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The effective wallpaper path from `--image` or the positional
    /// argument
    ///
    /// # Errors
    /// Fails when neither or both are given.
    pub fn wallpaper(&self) -> Result<PathBuf> {
        match (&self.image, &self.image_path) {
            (Some(_), Some(_)) => Err(LuminolError::InvalidArguments(
                "pass the wallpaper either with --image or positionally, not both".to_string(),
            )),
            (Some(path), None) | (None, Some(path)) => Ok(path.clone()),
            (None, None) => Err(LuminolError::InvalidArguments(
                "no wallpaper image given; pass one with --image or positionally".to_string(),
            )),
        }
    }
}
