//! Light/dark theme classification
//!
//! Decides the theme from the weighted luminance distribution of the
//! clustered palette. Precedence: CLI `--theme`, then the config
//! `theme-type`, then auto-detection.

use clap::ValueEnum;
use serde::Deserialize;

use crate::config::{THEME_DARK_MEAN_L, THEME_LIGHT_MEAN_L};
use crate::kmeans::Cluster;

/// The resolved theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Config-file theme preference (`theme-type`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Detect from the wallpaper's luminance distribution
    #[default]
    Auto,
    Light,
    Dark,
}

/// Weighted mean and standard deviation of cluster L values
#[must_use]
pub fn luminance_stats(clusters: &[Cluster]) -> (f64, f64) {
    let total: f64 = clusters.iter().map(|c| c.weight).sum();
    if total <= 0.0 {
        return (50.0, 0.0);
    }
    let mean = clusters
        .iter()
        .map(|c| f64::from(c.centroid.l) * c.weight)
        .sum::<f64>()
        / total;
    let variance = clusters
        .iter()
        .map(|c| {
            let d = f64::from(c.centroid.l) - mean;
            d * d * c.weight
        })
        .sum::<f64>()
        / total;
    (mean, variance.sqrt())
}

/// Resolve the theme for this run
///
/// `cli` wins outright; otherwise a non-auto config preference wins;
/// otherwise the luminance distribution decides, with the dominant cluster
/// breaking the mid-range tie.
#[must_use]
pub fn resolve(
    cli: Option<ThemeMode>,
    preference: ThemePreference,
    clusters: &[Cluster],
) -> ThemeMode {
    if let Some(mode) = cli {
        return mode;
    }
    match preference {
        ThemePreference::Light => ThemeMode::Light,
        ThemePreference::Dark => ThemeMode::Dark,
        ThemePreference::Auto => classify(clusters),
    }
}

fn classify(clusters: &[Cluster]) -> ThemeMode {
    let (mean_l, _stddev) = luminance_stats(clusters);
    if mean_l > THEME_LIGHT_MEAN_L {
        ThemeMode::Light
    } else if mean_l < THEME_DARK_MEAN_L {
        ThemeMode::Dark
    } else {
        // mid-range: the dominant cluster decides
        let dominant = clusters
            .iter()
            .max_by(|a, b| a.weight.total_cmp(&b.weight));
        match dominant {
            Some(cluster) if cluster.centroid.l > 50.0 => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }
}
