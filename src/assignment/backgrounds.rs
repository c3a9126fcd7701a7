//! Background role selection
//!
//! Scores candidates on coverage, neutrality, and contrast potential, with
//! a theme-dependent lightness gate. Missing slots are synthesized by
//! stepping the primary's lightness toward mid-gray.

use crate::color::Color;
use crate::color_ops::contrast::{contrast_vs_black, contrast_vs_white};
use crate::scoring::RankedColor;
use crate::theme::ThemeMode;

use super::shift_lightness;

/// Dark backgrounds must stay at or below this L
const DARK_MAX_L: f32 = 45.0;
/// Light backgrounds must stay at or above this L
const LIGHT_MIN_L: f32 = 55.0;

/// Pick `[bg-primary, bg-secondary, bg-tertiary]`
pub fn pick(ranked: &[RankedColor], theme: ThemeMode) -> [Color; 3] {
    let mut qualified: Vec<(f64, Color)> = ranked
        .iter()
        .filter(|candidate| {
            let l = candidate.color.lab().l;
            match theme {
                ThemeMode::Dark => l <= DARK_MAX_L,
                ThemeMode::Light => l >= LIGHT_MIN_L,
            }
        })
        .map(|candidate| (bg_score(candidate), candidate.color))
        .collect();
    qualified.sort_by(|a, b| b.0.total_cmp(&a.0));

    let primary = match qualified.first() {
        Some((_, color)) => *color,
        None => fallback_primary(ranked, theme),
    };

    // toward mid-gray: lighten a dark primary, darken a light one
    let direction = if primary.lab().l < 50.0 { 10.0 } else { -10.0 };
    let mut picks = [primary; 3];
    for slot in 1..3 {
        picks[slot] = match qualified.get(slot) {
            Some((_, color)) => *color,
            None => shift_lightness(&primary, direction * slot as f32),
        };
    }
    picks
}

fn bg_score(candidate: &RankedColor) -> f64 {
    let (_, s, _) = candidate.color.hsl();
    let neutrality = 1.0 - s;
    let contrast_potential = contrast_vs_white(&candidate.color)
        .max(contrast_vs_black(&candidate.color))
        / 21.0;
    0.4 * candidate.coverage + 0.3 * neutrality + 0.3 * contrast_potential
}

/// No candidate passed the lightness gate: force the best-scoring cluster
/// into the theme's range
fn fallback_primary(ranked: &[RankedColor], theme: ThemeMode) -> Color {
    let best = ranked
        .iter()
        .map(|candidate| (bg_score(candidate), candidate.color))
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map_or_else(|| Color::from_lab(20.0, 0.0, 0.0), |(_, color)| color);
    let lab = best.lab();
    let forced_l = match theme {
        ThemeMode::Dark => 20.0,
        ThemeMode::Light => 90.0,
    };
    best.with_lab(forced_l, lab.a, lab.b)
}
