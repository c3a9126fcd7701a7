//! Configuration: types, loading, and validation
//!
//! `config.toml` holds a `[global]` section plus one `[<app>]` section per
//! application. Records are built once at load and stay immutable for the
//! rest of the run.

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{default_config_path, load, parse};
pub use types::{AppConfig, ColorBinding, GlobalConfig, Settings};
