//! Configuration constants and default values for luminol

/// Application metadata
pub const APP_NAME: &str = "luminol";
pub const APP_ABOUT: &str =
    "Desktop theming engine: extracts a perceptual palette from a wallpaper and renders per-application color files";
pub const APP_AUTHOR: &str = "dheemansa";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest accepted wallpaper file, in bytes
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// Downscale targets (longest edge, pixels) per quality level
pub const DOWNSCALE_FAST: u32 = 400;
pub const DOWNSCALE_BALANCED: u32 = 800;
pub const DOWNSCALE_HIGH: u32 = 1200;

/// K-means iteration caps per quality level
pub const KMEANS_ITER_FAST: usize = 10;
pub const KMEANS_ITER_BALANCED: usize = 20;
pub const KMEANS_ITER_HIGH: usize = 40;

/// Gaussian blur sigma applied before sampling
pub const BLUR_SIGMA: f32 = 1.0;

/// Target number of sampled pixels
pub const SAMPLE_TARGET: u32 = 40_000;

/// Pixels with alpha below this are skipped during sampling
pub const ALPHA_CUTOFF: u8 = 128;

/// Number of clusters requested from k-means
pub const KMEANS_K: usize = 8;

/// Convergence threshold: largest centroid shift in LAB units
pub const KMEANS_CONVERGENCE: f32 = 0.5;

/// Clusters closer than this (ΔE76) are merged after convergence
pub const CLUSTER_MERGE_DELTA_E: f32 = 12.0;

/// How many ranked colors survive quality scoring
pub const RANKED_KEEP: usize = 12;

/// Combined score weights: coverage, uniqueness, chroma, lightness balance
pub const SCORE_W_COVERAGE: f64 = 0.35;
pub const SCORE_W_UNIQUENESS: f64 = 0.25;
pub const SCORE_W_CHROMA: f64 = 0.25;
pub const SCORE_W_LIGHTNESS: f64 = 0.15;

/// WCAG contrast floors for the text roles
pub const CONTRAST_TEXT_PRIMARY: f64 = 4.5;
pub const CONTRAST_TEXT_SECONDARY: f64 = 3.0;
pub const CONTRAST_TEXT_TERTIARY: f64 = 2.0;

/// Accent candidates must clear this contrast against bg-primary
pub const CONTRAST_ACCENT: f64 = 3.0;

/// Minimum ΔE between the two accents
pub const ACCENT_SEPARATION: f32 = 15.0;

/// Hue rotation used to synthesize a second accent
pub const ACCENT_SYNTH_ROTATION: f64 = 150.0;

/// Minimum pairwise ΔE among key roles enforced by harmony validation
pub const HARMONY_MIN_DELTA_E: f32 = 10.0;

/// Harmony validation gives up after this many adjustment passes
pub const HARMONY_MAX_PASSES: usize = 3;

/// ANSI slot assignment accepts a cluster within this ΔE of the slot target
pub const ANSI_MATCH_DELTA_E: f32 = 25.0;

/// Saturation used when synthesizing chromatic ANSI or status colors
pub const SYNTH_SATURATION: f64 = 0.7;

/// Theme auto-detection thresholds on weighted mean L
pub const THEME_LIGHT_MEAN_L: f64 = 60.0;
pub const THEME_DARK_MEAN_L: f64 = 40.0;

/// Log session directories older than this many days are swept at startup
pub const LOG_RETENTION_DAYS: i64 = 7;

/// Session directory timestamp format
pub const LOG_DIR_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
