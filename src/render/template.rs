//! Template mode
//!
//! The syntax pattern holds the literal token `placeholder`; the text
//! around it becomes a fixed prefix/suffix pair. Every occurrence of
//! `prefix + name + suffix` in the template file is replaced with the
//! formatted color for that name. Placeholders matching no candidate name
//! stay verbatim; that is the contract, not an error.

use crate::color::Color;
use crate::diagnostics::DiagnosticSink;
use crate::error::{LuminolError, Result};
use crate::semantic::{Role, SemanticPalette};
use crate::settings::AppConfig;
use crate::transform;

/// The reserved token inside a template-mode syntax pattern
const TOKEN: &str = "placeholder";

/// Split a syntax pattern into the literal prefix/suffix around the token
///
/// The longest literal substrings surrounding the first `placeholder`
/// occurrence are used; nested braces are not interpreted.
pub fn derive_pattern(syntax: &str) -> Option<(&str, &str)> {
    let start = syntax.find(TOKEN)?;
    Some((&syntax[..start], &syntax[start + TOKEN.len()..]))
}

pub fn render(
    app: &AppConfig,
    template_text: &str,
    palette: &SemanticPalette,
    sink: &mut DiagnosticSink,
) -> Result<String> {
    let Some((prefix, suffix)) = derive_pattern(&app.syntax) else {
        return Err(LuminolError::config_for(
            app.name.clone(),
            format!("{}.syntax", app.name),
            "template mode requires the 'placeholder' token in syntax",
            "use a pattern such as \"{placeholder}\" or \"@placeholder\"",
        ));
    };

    let mut candidates = candidate_colors(app, palette, sink)?;
    // longer names first so e.g. ansi-10 is never eaten by ansi-1 when the
    // suffix is empty
    candidates.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut output = template_text.to_string();
    for (name, color) in candidates {
        let needle = format!("{prefix}{name}{suffix}");
        let replacement = app.color_format.format(&color);
        output = output.replace(&needle, &replacement);
    }
    Ok(output)
}

/// The candidate (name, color) pairs for this app
///
/// Without remapping the 29 role names are matched directly, untransformed.
/// With remapping the binding names are matched, each resolved through its
/// source role and transform chain.
fn candidate_colors(
    app: &AppConfig,
    palette: &SemanticPalette,
    sink: &mut DiagnosticSink,
) -> Result<Vec<(String, Color)>> {
    if !app.remap_colors {
        let pairs = Role::all()
            .into_iter()
            .filter_map(|role| palette.get(role).map(|color| (role.name(), color)))
            .collect();
        return Ok(pairs);
    }

    let mut pairs = Vec::with_capacity(app.bindings.len());
    for binding in &app.bindings {
        let Some(source) = palette.get_by_name(&binding.source) else {
            return Err(LuminolError::config_for(
                app.name.clone(),
                format!("{}.colors.{}", app.name, binding.name),
                format!("'{}' is not a role in the semantic palette", binding.source),
                "valid roles are bg-primary ... border-inactive and ansi-0 ... ansi-15",
            ));
        };
        let key_path = format!("{}.colors.{}", app.name, binding.name);
        let color = transform::apply_all(source, &binding.transforms, sink, &key_path);
        pairs.push((binding.name.clone(), color));
    }
    Ok(pairs)
}
