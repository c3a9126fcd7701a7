//! Rendering engine
//!
//! Produces the output text for one application from the frozen semantic
//! palette. Three modes, resolved by strict precedence:
//!
//! 1. `template` set        -> Template mode
//! 2. `remap-colors = true` -> Custom Mapping mode
//! 3. otherwise             -> Default mode
//!
//! Transformed colors are derived lazily here and never touch the palette.

mod custom;
mod default_mode;
mod template;

use std::path::PathBuf;

use crate::diagnostics::DiagnosticSink;
use crate::error::{LuminolError, Result};
use crate::paths;
use crate::semantic::SemanticPalette;
use crate::settings::AppConfig;

pub use template::derive_pattern;

/// The renderer's mode, a plain tagged choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Default,
    Custom,
    Template,
}

/// Resolve the mode for an app config
#[must_use]
pub fn resolve_mode(app: &AppConfig) -> Mode {
    if app.template.is_some() {
        Mode::Template
    } else if app.remap_colors {
        Mode::Custom
    } else {
        Mode::Default
    }
}

/// Render the complete output text for one application
///
/// # Errors
/// Fatal on unresolvable template files and on bindings that reference a
/// role missing from the palette.
pub fn render_app(
    app: &AppConfig,
    palette: &SemanticPalette,
    sink: &mut DiagnosticSink,
) -> Result<String> {
    match resolve_mode(app) {
        Mode::Default => Ok(default_mode::render(app, palette)),
        Mode::Custom => custom::render(app, palette, sink),
        Mode::Template => {
            let text = load_template(app)?;
            template::render(app, &text, palette, sink)
        }
    }
}

/// Resolve and read the app's template file
fn load_template(app: &AppConfig) -> Result<String> {
    let reference = app.template.as_deref().unwrap_or_default();
    let path = resolve_template_path(reference);
    std::fs::read_to_string(&path).map_err(|e| {
        LuminolError::config_for(
            app.name.clone(),
            format!("{}.template", app.name),
            format!("cannot read template {}: {e}", path.display()),
            format!(
                "place the file under {} or use an absolute path",
                paths::config_dir().join("templates").display()
            ),
        )
    })
}

/// Bare filenames live under the config templates directory; anything with
/// a separator or `~` is a path of its own
fn resolve_template_path(reference: &str) -> PathBuf {
    if reference.contains(std::path::MAIN_SEPARATOR) || reference.starts_with('~') {
        paths::expand(reference)
    } else {
        paths::config_dir().join("templates").join(reference)
    }
}

/// Substitute `{name}` and `{color}` in a syntax pattern
///
/// Single pass: only the two reserved tokens are interpreted, any other
/// braced sequence is literal text.
#[must_use]
pub(crate) fn substitute(pattern: &str, name: &str, color: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + name.len() + color.len());
    let mut rest = pattern;
    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix("{name}") {
            out.push_str(name);
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("{color}") {
            out.push_str(color);
            rest = tail;
        } else {
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                out.push(c);
            }
            rest = chars.as_str();
        }
    }
    out
}
