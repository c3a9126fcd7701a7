//! Accent and status role selection
//!
//! Accents want saturated, contrasting, distinct colors; the second accent
//! is hue-rotated from the first when the image offers no separated pair.
//! Status colors snap to red/yellow/green hue windows, synthesized from
//! accent-primary when the image has no candidate in a window.

use crate::color::Color;
use crate::color_ops::contrast::wcag_ratio;
use crate::color_ops::distance::{delta_e, hue_distance};
use crate::config::{
    ACCENT_SEPARATION, ACCENT_SYNTH_ROTATION, CONTRAST_ACCENT, SYNTH_SATURATION,
};
use crate::scoring::RankedColor;

/// Minimum HSL saturation for an accent candidate
const ACCENT_MIN_SATURATION: f64 = 0.4;

/// Hue windows for the status roles: (center, half-width)
const ERROR_HUE: (f64, f64) = (0.0, 20.0);
const WARNING_HUE: (f64, f64) = (45.0, 10.0);
const SUCCESS_HUE: (f64, f64) = (120.0, 20.0);

/// Pick `[accent-primary, accent-secondary]`
pub fn pick_accents(ranked: &[RankedColor], bg_primary: &Color) -> [Color; 2] {
    let mut candidates: Vec<(f64, Color)> = ranked
        .iter()
        .filter(|candidate| {
            let (_, s, _) = candidate.color.hsl();
            s >= ACCENT_MIN_SATURATION
                && wcag_ratio(&candidate.color, bg_primary) >= CONTRAST_ACCENT
        })
        .map(|candidate| (accent_score(candidate, bg_primary), candidate.color))
        .collect();
    candidates.sort_by(|a, b| b.0.total_cmp(&a.0));

    let primary = match candidates.first() {
        Some((_, color)) => *color,
        None => fallback_accent(ranked, bg_primary),
    };
    let secondary = candidates
        .iter()
        .skip(1)
        .map(|(_, color)| *color)
        .find(|color| delta_e(color, &primary) >= ACCENT_SEPARATION)
        .unwrap_or_else(|| rotate_hue(&primary, ACCENT_SYNTH_ROTATION));
    [primary, secondary]
}

fn accent_score(candidate: &RankedColor, bg_primary: &Color) -> f64 {
    let (_, s, _) = candidate.color.hsl();
    let contrast = wcag_ratio(&candidate.color, bg_primary) / 21.0;
    0.35 * s + 0.25 * contrast + 0.25 * candidate.uniqueness + 0.15 * candidate.coverage
}

/// No saturated contrasting candidate: boost the most chromatic cluster
fn fallback_accent(ranked: &[RankedColor], bg_primary: &Color) -> Color {
    let seed = ranked
        .iter()
        .max_by(|a, b| a.chroma.total_cmp(&b.chroma))
        .map_or_else(|| Color::from_hsl(210.0, SYNTH_SATURATION, 0.6), |c| c.color);
    let (h, _, l) = seed.hsl();
    let mut color = Color::from_hsl(h, SYNTH_SATURATION, l);
    // push lightness away from the background until the accent reads
    let step: f32 = if bg_primary.lab().l < 50.0 { 10.0 } else { -10.0 };
    for _ in 0..5 {
        if wcag_ratio(&color, bg_primary) >= CONTRAST_ACCENT {
            break;
        }
        color = super::shift_lightness(&color, step);
    }
    color
}

fn rotate_hue(color: &Color, degrees: f64) -> Color {
    let alpha = color.alpha();
    let (h, s, l) = color.hsl();
    Color::from_hsl(h + degrees, s, l).with_alpha(alpha)
}

/// Pick `[error-color, warning-color, success-color]`
pub fn pick_status(ranked: &[RankedColor], accent_primary: &Color) -> [Color; 3] {
    [
        pick_hue_window(ranked, accent_primary, ERROR_HUE),
        pick_hue_window(ranked, accent_primary, WARNING_HUE),
        pick_hue_window(ranked, accent_primary, SUCCESS_HUE),
    ]
}

fn pick_hue_window(
    ranked: &[RankedColor],
    accent_primary: &Color,
    (center, half_width): (f64, f64),
) -> Color {
    let in_window = ranked
        .iter()
        .map(|candidate| {
            let (h, _, _) = candidate.color.hsl();
            (hue_distance(h, center), candidate.color)
        })
        .filter(|(distance, _)| *distance <= half_width)
        .min_by(|a, b| a.0.total_cmp(&b.0));
    match in_window {
        Some((_, color)) => color,
        None => {
            let (_, _, l) = accent_primary.hsl();
            Color::from_hsl(center, SYNTH_SATURATION, l)
        }
    }
}
