//! Per-application config validation
//!
//! Builds typed [`AppConfig`] records out of raw TOML tables. Structural
//! problems are fatal with app/key context; malformed transform entries are
//! skipped with a warning so the rest of the binding still applies.

use toml::Value;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{LuminolError, Result};
use crate::formats::ColorFormat;
use crate::semantic::Role;
use crate::settings::types::{AppConfig, ColorBinding};
use crate::transform::{Transform, TransformKind};

/// Build and validate an app record from its `[<app>]` table
pub fn app_from_table(
    name: &str,
    table: &toml::Table,
    sink: &mut DiagnosticSink,
) -> Result<AppConfig> {
    let output_file = require_str(name, table, "output-file")?;
    let syntax = require_str(name, table, "syntax")?;

    let color_format = match table.get("color-format") {
        None => ColorFormat::default(),
        Some(value) => {
            let text = value.as_str().ok_or_else(|| {
                LuminolError::config_for(
                    name,
                    format!("{name}.color-format"),
                    "color-format must be a string",
                    format!("use one of: {}", ColorFormat::VALID_NAMES.join(", ")),
                )
            })?;
            text.parse::<ColorFormat>().map_err(|_| {
                LuminolError::config_for(
                    name,
                    format!("{name}.color-format"),
                    format!("'{text}' is not a valid color format"),
                    format!("use one of: {}", ColorFormat::VALID_NAMES.join(", ")),
                )
            })?
        }
    };

    let template = table
        .get("template")
        .and_then(Value::as_str)
        .map(str::to_string);
    let remap_colors = table
        .get("remap-colors")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let enabled = table
        .get("enabled")
        .and_then(Value::as_bool)
        .unwrap_or(true);

    // template mode requires the placeholder token in the pattern
    if template.is_some() && !syntax.contains("placeholder") {
        return Err(LuminolError::config_for(
            name,
            format!("{name}.syntax"),
            "template is set but syntax does not contain the 'placeholder' token",
            "use a pattern such as \"{placeholder}\" or \"@placeholder\"",
        ));
    }

    let bindings = match table.get("colors") {
        None => Vec::new(),
        Some(Value::Table(colors)) => bindings_from_table(name, colors, sink)?,
        Some(_) => {
            return Err(LuminolError::config_for(
                name,
                format!("{name}.colors"),
                "colors must be a table",
                "declare entries as `name = \"role\"` or `name = { source = \"role\", ... }`",
            ));
        }
    };

    if remap_colors && bindings.is_empty() {
        return Err(LuminolError::config_for(
            name,
            format!("{name}.colors"),
            "remap-colors is enabled but no [colors] table is present",
            format!("add a [{name}.colors] table or set remap-colors = false"),
        ));
    }

    Ok(AppConfig {
        name: name.to_string(),
        output_file,
        color_format,
        syntax,
        template,
        remap_colors,
        enabled,
        bindings,
    })
}

fn require_str(app: &str, table: &toml::Table, key: &str) -> Result<String> {
    table
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            LuminolError::config_for(
                app,
                format!("{app}.{key}"),
                format!("required key '{key}' is missing or not a string"),
                format!("add `{key} = \"...\"` to the [{app}] section"),
            )
        })
}

/// Parse `[<app>.colors]` entries in declaration order
fn bindings_from_table(
    app: &str,
    colors: &toml::Table,
    sink: &mut DiagnosticSink,
) -> Result<Vec<ColorBinding>> {
    let mut bindings = Vec::with_capacity(colors.len());
    for (binding_name, value) in colors {
        let binding = match value {
            Value::String(source) => ColorBinding {
                name: binding_name.clone(),
                source: validated_source(app, binding_name, source)?,
                transforms: Vec::new(),
            },
            Value::Table(entry) => {
                let source = entry.get("source").and_then(Value::as_str).ok_or_else(|| {
                    LuminolError::config_for(
                        app,
                        format!("{app}.colors.{binding_name}"),
                        "binding table is missing the required 'source' key",
                        "set source to one of the 29 semantic role names",
                    )
                })?;
                ColorBinding {
                    name: binding_name.clone(),
                    source: validated_source(app, binding_name, source)?,
                    transforms: transforms_from_entry(app, binding_name, entry, sink),
                }
            }
            _ => {
                return Err(LuminolError::config_for(
                    app,
                    format!("{app}.colors.{binding_name}"),
                    "binding must be a role-name string or an inline table",
                    "use `name = \"accent-primary\"` or `name = { source = \"accent-primary\", opacity = 0.8 }`",
                ));
            }
        };
        bindings.push(binding);
    }
    Ok(bindings)
}

fn validated_source(app: &str, binding: &str, source: &str) -> Result<String> {
    if Role::from_name(source).is_none() {
        return Err(LuminolError::config_for(
            app,
            format!("{app}.colors.{binding}"),
            format!("'{source}' is not a semantic role"),
            "valid roles are bg-primary ... border-inactive and ansi-0 ... ansi-15",
        ));
    }
    Ok(source.to_string())
}

/// Collect transforms, skipping malformed entries with a warning
fn transforms_from_entry(
    app: &str,
    binding: &str,
    entry: &toml::Table,
    sink: &mut DiagnosticSink,
) -> Vec<Transform> {
    let mut transforms = Vec::new();
    for (key, value) in entry {
        if key == "source" {
            continue;
        }
        let Some(kind) = TransformKind::from_key(key) else {
            sink.push(
                Diagnostic::warning(format!("unknown transform '{key}', skipped"))
                    .for_app(app)
                    .at_key(format!("{app}.colors.{binding}.{key}"))
                    .suggest("valid transforms: hue, saturation, brightness, contrast, temperature, opacity"),
            );
            continue;
        };
        let number = match value {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        };
        match number {
            Some(number) => transforms.push(Transform::new(kind, number)),
            None => sink.push(
                Diagnostic::warning(format!("transform '{key}' has a non-numeric value, skipped"))
                    .for_app(app)
                    .at_key(format!("{app}.colors.{binding}.{key}")),
            ),
        }
    }
    transforms
}
