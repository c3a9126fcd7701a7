//! Luminol: desktop theming engine
//!
//! Extracts a perceptually grounded palette from a wallpaper image,
//! assigns each color a semantic role, and renders per-application color
//! files. The pipeline is deterministic: identical image bytes and
//! configuration produce byte-identical outputs.

pub mod assignment;
pub mod cli;
pub mod color;
pub mod color_ops;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod formats;
pub mod hooks;
pub mod kmeans;
pub mod logger;
pub mod output;
pub mod paths;
pub mod preview;
pub mod render;
pub mod sampler;
pub mod scoring;
pub mod semantic;
pub mod settings;
pub mod theme;
pub mod transform;

// Re-export main types for convenience
pub use cli::{Cli, Quality};
pub use color::Color;
pub use diagnostics::{Diagnostic, DiagnosticSink, Severity};
pub use engine::{RunOptions, run};
pub use error::{LuminolError, Result};
pub use formats::ColorFormat;
pub use kmeans::Cluster;
pub use render::{Mode, render_app, resolve_mode};
pub use sampler::{SampleSet, sample_image};
pub use scoring::RankedColor;
pub use semantic::{Role, SemanticPalette};
pub use settings::{AppConfig, ColorBinding, GlobalConfig, Settings};
pub use theme::{ThemeMode, ThemePreference};
pub use transform::{Transform, TransformKind};
