//! Default mode
//!
//! One line per UI role in canonical order; ANSI slots are not emitted.
//! A `[<app>.colors]` table, if present, is ignored without complaint.

use crate::semantic::{Role, SemanticPalette};
use crate::settings::AppConfig;

use super::substitute;

/// Render the 13 UI roles through the app's syntax pattern
#[must_use]
pub fn render(app: &AppConfig, palette: &SemanticPalette) -> String {
    let mut out = String::new();
    for role in Role::UI_ROLES {
        let Some(color) = palette.get(role) else {
            continue;
        };
        let formatted = app.color_format.format(&color);
        out.push_str(&substitute(&app.syntax, &role.name(), &formatted));
        out.push('\n');
    }
    out
}
