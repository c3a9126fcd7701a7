//! Configuration loading
//!
//! Finds and parses `config.toml`, producing an immutable [`Settings`]
//! value. The `[global]` section deserializes through serde; every other
//! top-level table is an application section validated by hand so the
//! diagnostics can carry key paths.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use toml::Value;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{LuminolError, Result};
use crate::paths;
use crate::settings::types::{GlobalConfig, Settings};
use crate::settings::validation;

/// Default config location: `$XDG_CONFIG_HOME/luminol/config.toml`,
/// falling back to `$HOME/.config/luminol/config.toml`
#[must_use]
pub fn default_config_path() -> PathBuf {
    paths::config_dir().join("config.toml")
}

/// Load settings from `path`, or from the default location
pub fn load(path: Option<&Path>, sink: &mut DiagnosticSink) -> Result<Settings> {
    let path = path.map_or_else(default_config_path, Path::to_path_buf);
    let raw = std::fs::read_to_string(&path).map_err(|e| {
        LuminolError::Config {
            app: None,
            key: None,
            message: format!("cannot read {}: {e}", path.display()),
            suggestion: Some(format!(
                "create {} with a [global] section and one section per application",
                path.display()
            )),
        }
    })?;
    parse(&raw, sink)
}

/// Parse settings from TOML text
pub fn parse(raw: &str, sink: &mut DiagnosticSink) -> Result<Settings> {
    let table: toml::Table = raw.parse()?;

    let global = match table.get("global") {
        None => GlobalConfig::default(),
        Some(value) => value
            .clone()
            .try_into::<GlobalConfig>()
            .map_err(|e| LuminolError::config(format!("invalid [global] section: {e}")))?,
    };

    let mut apps = Vec::new();
    for (name, value) in &table {
        if name == "global" {
            continue;
        }
        let Value::Table(app_table) = value else {
            return Err(LuminolError::config_for(
                name.clone(),
                name.clone(),
                "top-level keys must be [section] tables",
                format!("wrap the value in a [{name}] section"),
            ));
        };
        let app = validation::app_from_table(name, app_table, sink)?;
        if app.enabled {
            apps.push(app);
        }
    }

    warn_on_duplicate_outputs(&apps, sink);

    Ok(Settings { global, apps })
}

/// Two apps writing the same path is undefined behavior; flag it
fn warn_on_duplicate_outputs(apps: &[crate::settings::types::AppConfig], sink: &mut DiagnosticSink) {
    let mut seen: HashSet<&str> = HashSet::new();
    for app in apps {
        if !seen.insert(app.output_file.as_str()) {
            sink.push(
                Diagnostic::warning(format!(
                    "output-file '{}' is written by more than one application; the last writer wins",
                    app.output_file
                ))
                .for_app(app.name.clone())
                .at_key(format!("{}.output-file", app.name)),
            );
        }
    }
}
