//! Configuration data types
//!
//! Value types built once at load and immutable thereafter. The pipeline
//! receives these explicitly; there is no configuration singleton.

use serde::Deserialize;

use crate::formats::ColorFormat;
use crate::theme::ThemePreference;
use crate::transform::Transform;

/// The `[global]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GlobalConfig {
    /// Command template for setting the wallpaper; may contain
    /// `{wallpaper_path}`
    pub wallpaper_command: Option<String>,
    pub theme_type: ThemePreference,
    /// Commands spawned sequentially after all outputs are written
    pub reload_commands: Vec<String>,
    /// Run commands through `sh -c` instead of splitting into argv
    pub use_shell: bool,
    /// Capture subprocess output into the session log directory
    pub log_output: bool,
}

/// One `[<app>]` section
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub name: String,
    /// Absolute, `~`-prefixed, or cache-relative output location
    pub output_file: String,
    pub color_format: ColorFormat,
    /// Line pattern (Default/Custom modes) or placeholder pattern
    /// (Template mode)
    pub syntax: String,
    /// Template filename (resolved under the config templates dir) or
    /// absolute path; presence selects Template mode
    pub template: Option<String>,
    pub remap_colors: bool,
    pub enabled: bool,
    /// `[<app>.colors]` entries in declaration order
    pub bindings: Vec<ColorBinding>,
}

/// One entry of `[<app>.colors]`
#[derive(Debug, Clone)]
pub struct ColorBinding {
    /// The custom name substituted for `{name}` / matched in templates
    pub name: String,
    /// Semantic role the color is drawn from
    pub source: String,
    pub transforms: Vec<Transform>,
}

/// The fully loaded configuration
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub global: GlobalConfig,
    /// Enabled apps in declaration order
    pub apps: Vec<AppConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_defaults_are_permissive() {
        let global = GlobalConfig::default();
        assert!(global.wallpaper_command.is_none());
        assert!(global.reload_commands.is_empty());
        assert!(!global.use_shell);
        assert!(!global.log_output);
    }

    #[test]
    fn global_deserializes_kebab_keys() {
        let global: GlobalConfig = toml::from_str(
            r#"
            wallpaper-command = "swww img {wallpaper_path}"
            theme-type = "dark"
            reload-commands = ["pkill -SIGUSR2 waybar"]
            use-shell = true
            log-output = true
            "#,
        )
        .unwrap();
        assert_eq!(
            global.wallpaper_command.as_deref(),
            Some("swww img {wallpaper_path}")
        );
        assert_eq!(global.reload_commands.len(), 1);
        assert!(global.use_shell);
        assert!(global.log_output);
    }
}
