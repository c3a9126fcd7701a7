//! End-to-end rendering scenarios across the three modes

use luminol::color::Color;
use luminol::diagnostics::DiagnosticSink;
use luminol::render;
use luminol::semantic::{Role, SemanticPalette};
use luminol::settings;

/// A fully populated palette with distinctive key roles
fn fixture_palette() -> SemanticPalette {
    let mut palette = SemanticPalette::empty();
    for role in Role::all() {
        palette.set(role, Color::from_rgb(60, 60, 60));
    }
    palette.set(Role::BgPrimary, Color::from_hex("#1e1e2e").unwrap());
    palette.set(Role::AccentPrimary, Color::from_hex("#8af4da").unwrap());
    palette
}

#[test]
fn default_mode_rofi_scenario() {
    let mut sink = DiagnosticSink::new();
    let loaded = settings::parse(
        r#"
        [rofi]
        output-file = "colors.rasi"
        syntax = "*{{name}: {color};}"
        color-format = "hex8"
        "#,
        &mut sink,
    )
    .unwrap();

    let output = render::render_app(&loaded.apps[0], &fixture_palette(), &mut sink).unwrap();
    let first = output.lines().next().unwrap();
    assert_eq!(first, "*{bg-primary: #1e1e2eff;}");
    assert_eq!(output.lines().count(), 13);
}

#[test]
fn custom_mapping_hyprland_scenario() {
    let mut sink = DiagnosticSink::new();
    let loaded = settings::parse(
        r#"
        [hyprland]
        output-file = "colors.conf"
        syntax = "${name} = {color}"
        color-format = "rgba"
        remap-colors = true

        [hyprland.colors]
        active-border = { source = "accent-primary", brightness = 1.2 }
        "#,
        &mut sink,
    )
    .unwrap();

    let mut palette = fixture_palette();
    palette.set(Role::AccentPrimary, Color::from_hsl(180.0, 0.5, 0.6));

    let output = render::render_app(&loaded.apps[0], &palette, &mut sink).unwrap();
    let line = output.lines().next().unwrap();
    assert!(line.starts_with("$active-border = rgba("), "line: {line}");
    assert!(line.ends_with(", 1.00)"), "line: {line}");

    // brightness 1.2 lifts HSL lightness 0.6 -> 0.72
    let inner = line
        .strip_prefix("$active-border = rgba(")
        .and_then(|s| s.strip_suffix(")"))
        .unwrap();
    let channels: Vec<f64> = inner.split(", ").map(|c| c.parse().unwrap()).collect();
    assert!((channels[0] - 148.0).abs() <= 2.0, "red {}", channels[0]);
    assert!((channels[1] - 219.0).abs() <= 2.0, "green {}", channels[1]);
    assert!((channels[2] - 219.0).abs() <= 2.0, "blue {}", channels[2]);
}

#[test]
fn template_mode_semantic_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = dir.path().join("style.tmpl");
    std::fs::write(
        &template_path,
        "frame = \"{accent-primary}\"\nicon = \"{unknown}\"\n",
    )
    .unwrap();

    let mut sink = DiagnosticSink::new();
    let loaded = settings::parse(&format!(
        r#"
        [quickshell]
        output-file = "style.qml"
        syntax = "{{placeholder}}"
        color-format = "hex6"
        template = "{}"
        "#,
        template_path.display()
    ), &mut sink)
    .unwrap();

    let output = render::render_app(&loaded.apps[0], &fixture_palette(), &mut sink).unwrap();
    assert!(output.contains("frame = \"#8af4da\""));
    assert!(output.contains("icon = \"{unknown}\""));
}

#[test]
fn template_mode_custom_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = dir.path().join("dunstrc.tmpl");
    std::fs::write(&template_path, "frame_color = @frame\n").unwrap();

    let mut sink = DiagnosticSink::new();
    let loaded = settings::parse(&format!(
        r#"
        [dunst]
        output-file = "dunstrc"
        syntax = "@placeholder"
        color-format = "hex8"
        remap-colors = true
        template = "{}"

        [dunst.colors]
        frame = {{ source = "accent-primary", opacity = 0.8 }}
        "#,
        template_path.display()
    ), &mut sink)
    .unwrap();

    let output = render::render_app(&loaded.apps[0], &fixture_palette(), &mut sink).unwrap();
    assert_eq!(output, "frame_color = #8af4dacc\n");
}

#[test]
fn transform_clamp_scenario() {
    let mut sink = DiagnosticSink::new();
    let loaded = settings::parse(
        r#"
        [kitty]
        output-file = "colors.conf"
        syntax = "{name} {color}"
        remap-colors = true

        [kitty.colors]
        blinding = { source = "bg-primary", brightness = 5.0 }
        "#,
        &mut sink,
    )
    .unwrap();

    let output = render::render_app(&loaded.apps[0], &fixture_palette(), &mut sink).unwrap();
    // effective brightness 3.0 saturates lightness: white
    assert_eq!(output.trim_end(), "blinding #ffffff");
    assert!(sink.has_warnings());
}

#[test]
fn missing_colors_table_under_remap_is_config_error() {
    let mut sink = DiagnosticSink::new();
    let err = settings::parse(
        r#"
        [waybar]
        output-file = "colors.css"
        syntax = "@define-color {name} {color};"
        remap-colors = true
        "#,
        &mut sink,
    )
    .unwrap_err();
    assert_eq!(err.exit_code(), 3);
    assert!(err.to_string().contains("waybar"));
}

#[test]
fn missing_template_file_is_fatal() {
    let mut sink = DiagnosticSink::new();
    let loaded = settings::parse(
        r#"
        [dunst]
        output-file = "dunstrc"
        syntax = "@placeholder"
        template = "/nonexistent/luminol-template.tmpl"
        "#,
        &mut sink,
    )
    .unwrap();
    let err = render::render_app(&loaded.apps[0], &fixture_palette(), &mut sink).unwrap_err();
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn opacity_on_hex6_is_a_noop() {
    let mut sink = DiagnosticSink::new();
    let loaded = settings::parse(
        r#"
        [zathura]
        output-file = "zathurarc"
        syntax = "set {name} {color}"
        color-format = "hex6"
        remap-colors = true

        [zathura.colors]
        default-bg = { source = "bg-primary", opacity = 0.5 }
        "#,
        &mut sink,
    )
    .unwrap();

    let output = render::render_app(&loaded.apps[0], &fixture_palette(), &mut sink).unwrap();
    assert_eq!(output.trim_end(), "set default-bg #1e1e2e");
    assert!(!sink.has_warnings());
}
