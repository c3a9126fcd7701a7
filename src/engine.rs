//! Pipeline driver
//!
//! Orchestrates one invocation: sample, cluster, rank, classify theme,
//! assign roles, then render each enabled application and run the post-run
//! hooks. The palette is built once and frozen before rendering; per-app
//! rendering shares nothing mutable.

use std::path::PathBuf;

use crate::assignment;
use crate::cli::Quality;
use crate::diagnostics::DiagnosticSink;
use crate::error::{LuminolError, Result};
use crate::hooks;
use crate::kmeans;
use crate::logger::Logger;
use crate::output;
use crate::preview;
use crate::render;
use crate::sampler;
use crate::scoring;
use crate::settings::Settings;
use crate::theme::{self, ThemeMode};

/// Everything the driver needs beyond the loaded settings
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub wallpaper: PathBuf,
    pub theme_override: Option<ThemeMode>,
    pub quality: Quality,
    pub dry_run: bool,
    pub verbose: bool,
    /// Session log directory for subprocess capture
    pub session_dir: PathBuf,
}

/// Execute the full pipeline
pub fn run(
    options: &RunOptions,
    settings: &Settings,
    logger: &dyn Logger,
    sink: &mut DiagnosticSink,
) -> Result<()> {
    logger.debug(&format!("sampling {}", options.wallpaper.display()));
    let samples = sampler::sample_image(&options.wallpaper, options.quality.downscale_target())?;
    logger.debug(&format!(
        "{} samples, total weight {}",
        samples.points.len(),
        samples.total_weight
    ));

    let clusters = kmeans::cluster(&samples, options.quality.kmeans_iterations())?;
    logger.debug(&format!("{} clusters after merge", clusters.len()));

    let ranked = scoring::rank(&clusters);
    let resolved_theme = theme::resolve(options.theme_override, settings.global.theme_type, &clusters);
    let palette = assignment::assign_roles(&ranked, resolved_theme, sink);
    if !palette.is_complete() {
        return Err(LuminolError::General(format!(
            "role assignment left roles unfilled: {:?}",
            palette.missing()
        )));
    }

    if options.verbose || options.dry_run {
        println!("{}", preview::palette_table(&palette, resolved_theme));
    }

    for app in &settings.apps {
        let content = render::render_app(app, &palette, sink)?;
        let path = output::resolve_output_path(&app.name, &app.output_file);
        if options.dry_run {
            logger.info(&format!(
                "dry-run: would write {} ({} bytes)",
                path.display(),
                content.len()
            ));
        } else {
            output::write_atomic(&path, &content)?;
            logger.info(&format!("wrote {}", path.display()));
        }
    }

    if options.dry_run {
        logger.info("dry-run: skipping wallpaper and reload commands");
    } else {
        hooks::run_all(
            &settings.global,
            &options.wallpaper,
            &options.session_dir,
            logger,
            sink,
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::NoOpLogger;
    use crate::settings;
    use image::{Rgba, RgbaImage};

    /// Two-tone synthetic wallpaper: dark blue field with a warm block
    fn write_wallpaper(dir: &std::path::Path) -> PathBuf {
        let mut img = RgbaImage::from_pixel(160, 100, Rgba([24, 26, 48, 255]));
        for y in 30..70 {
            for x in 50..110 {
                img.put_pixel(x, y, Rgba([214, 140, 80, 255]));
            }
        }
        let path = dir.join("wall.png");
        img.save(&path).unwrap();
        path
    }

    fn options(dir: &std::path::Path, wallpaper: PathBuf, dry_run: bool) -> RunOptions {
        RunOptions {
            wallpaper,
            theme_override: Some(ThemeMode::Dark),
            quality: Quality::Fast,
            dry_run,
            verbose: false,
            session_dir: dir.join("logs"),
        }
    }

    fn sample_settings(dir: &std::path::Path, sink: &mut DiagnosticSink) -> Settings {
        let config = format!(
            r#"
            [rofi]
            output-file = "{}/colors.rasi"
            syntax = "*{{{{name}}: {{color}};}}"
            color-format = "hex8"
            "#,
            dir.display()
        );
        settings::parse(&config, sink).unwrap()
    }

    #[test]
    fn end_to_end_writes_default_mode_output() {
        let dir = tempfile::tempdir().unwrap();
        let wallpaper = write_wallpaper(dir.path());
        let mut sink = DiagnosticSink::new();
        let loaded = sample_settings(dir.path(), &mut sink);
        run(
            &options(dir.path(), wallpaper, false),
            &loaded,
            &NoOpLogger,
            &mut sink,
        )
        .unwrap();
        let text = std::fs::read_to_string(dir.path().join("colors.rasi")).unwrap();
        assert_eq!(text.lines().count(), 13);
        assert!(text.starts_with("*{bg-primary: #"));
    }

    #[test]
    fn runs_are_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let wallpaper = write_wallpaper(dir.path());
        let mut sink = DiagnosticSink::new();
        let loaded = sample_settings(dir.path(), &mut sink);

        run(
            &options(dir.path(), wallpaper.clone(), false),
            &loaded,
            &NoOpLogger,
            &mut sink,
        )
        .unwrap();
        let first = std::fs::read(dir.path().join("colors.rasi")).unwrap();

        run(
            &options(dir.path(), wallpaper, false),
            &loaded,
            &NoOpLogger,
            &mut sink,
        )
        .unwrap();
        let second = std::fs::read(dir.path().join("colors.rasi")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let wallpaper = write_wallpaper(dir.path());
        let mut sink = DiagnosticSink::new();
        let loaded = sample_settings(dir.path(), &mut sink);
        run(
            &options(dir.path(), wallpaper, true),
            &loaded,
            &NoOpLogger,
            &mut sink,
        )
        .unwrap();
        assert!(!dir.path().join("colors.rasi").exists());
    }

    #[test]
    fn missing_image_is_fatal_with_image_code() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DiagnosticSink::new();
        let loaded = sample_settings(dir.path(), &mut sink);
        let err = run(
            &options(dir.path(), dir.path().join("nope.png"), false),
            &loaded,
            &NoOpLogger,
            &mut sink,
        )
        .unwrap_err();
        // unreadable path surfaces as I/O
        assert!(matches!(err.exit_code(), 4 | 5));
    }
}
