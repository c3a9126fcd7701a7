//! Custom Mapping mode
//!
//! Renders the app's `[colors]` bindings in declaration order: resolve the
//! source role, run the transform pipeline, format, substitute.

use crate::diagnostics::DiagnosticSink;
use crate::error::{LuminolError, Result};
use crate::semantic::SemanticPalette;
use crate::settings::AppConfig;
use crate::transform;

use super::substitute;

pub fn render(
    app: &AppConfig,
    palette: &SemanticPalette,
    sink: &mut DiagnosticSink,
) -> Result<String> {
    if app.bindings.is_empty() {
        return Err(LuminolError::config_for(
            app.name.clone(),
            format!("{}.colors", app.name),
            "remap-colors is enabled but no [colors] table is present",
            format!("add a [{}.colors] table or set remap-colors = false", app.name),
        ));
    }

    let mut out = String::new();
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
        let transformed = transform::apply_all(source, &binding.transforms, sink, &key_path);
        let formatted = app.color_format.format(&transformed);
        out.push_str(&substitute(&app.syntax, &binding.name, &formatted));
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::formats::ColorFormat;
    use crate::semantic::Role;
    use crate::settings::ColorBinding;
    use crate::transform::{Transform, TransformKind};

    fn palette() -> SemanticPalette {
        let mut palette = SemanticPalette::empty();
        for role in Role::all() {
            palette.set(role, Color::from_rgb(50, 100, 150));
        }
        palette.set(Role::AccentPrimary, Color::from_hsl(180.0, 0.5, 0.6));
        palette
    }

    fn app(bindings: Vec<ColorBinding>) -> AppConfig {
        AppConfig {
            name: "hyprland".into(),
            output_file: "colors.conf".into(),
            color_format: ColorFormat::Rgba,
            syntax: "${name} = {color}".into(),
            template: None,
            remap_colors: true,
            enabled: true,
            bindings,
        }
    }

    #[test]
    fn bindings_render_in_declaration_order() {
        let app = app(vec![
            ColorBinding {
                name: "active-border".into(),
                source: "accent-primary".into(),
                transforms: vec![Transform::new(TransformKind::Brightness, 1.2)],
            },
            ColorBinding {
                name: "inactive-border".into(),
                source: "bg-secondary".into(),
                transforms: Vec::new(),
            },
        ]);
        let mut sink = DiagnosticSink::new();
        let output = render(&app, &palette(), &mut sink).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("$active-border = rgba("));
        assert!(lines[0].ends_with(", 1.00)"));
        assert!(lines[1].starts_with("$inactive-border = rgba(50, 100, 150"));
    }

    #[test]
    fn brightness_lifts_lightness() {
        let app = app(vec![ColorBinding {
            name: "active-border".into(),
            source: "accent-primary".into(),
            transforms: vec![Transform::new(TransformKind::Brightness, 1.2)],
        }]);
        let mut sink = DiagnosticSink::new();
        let output = render(&app, &palette(), &mut sink).unwrap();
        // HSL (180, 0.5, 0.6) lifted to l=0.72
        let inner = output
            .trim_end()
            .strip_prefix("$active-border = rgba(")
            .and_then(|s| s.strip_suffix(")"))
            .unwrap();
        let parts: Vec<f64> = inner.split(", ").map(|p| p.parse().unwrap()).collect();
        assert!((parts[0] - 148.0).abs() <= 2.0, "red was {}", parts[0]);
        assert!((parts[1] - 219.0).abs() <= 2.0, "green was {}", parts[1]);
        assert!((parts[2] - 219.0).abs() <= 2.0, "blue was {}", parts[2]);
        assert_eq!(parts[3], 1.0);
    }

    #[test]
    fn missing_bindings_are_fatal() {
        let app = app(Vec::new());
        let mut sink = DiagnosticSink::new();
        let err = render(&app, &palette(), &mut sink).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("hyprland"));
    }

    #[test]
    fn unknown_source_role_is_fatal() {
        let app = app(vec![ColorBinding {
            name: "x".into(),
            source: "not-a-role".into(),
            transforms: Vec::new(),
        }]);
        let mut sink = DiagnosticSink::new();
        assert!(render(&app, &palette(), &mut sink).is_err());
    }
}
