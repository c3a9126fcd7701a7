//! Text role selection
//!
//! Each text tier has a WCAG contrast floor against bg-primary. Candidates
//! are drawn from the ranked pool in contrast order; when nothing clears a
//! floor the nearest-to-extreme candidate is lightness-shifted until it
//! does. A gentle temperature match ties the text tint to a strongly warm
//! or cool background.

use crate::color::Color;
use crate::color_ops::contrast::wcag_ratio;
use crate::config::{CONTRAST_TEXT_PRIMARY, CONTRAST_TEXT_SECONDARY, CONTRAST_TEXT_TERTIARY};
use crate::scoring::RankedColor;
use crate::theme::ThemeMode;

/// Pick `[text-primary, text-secondary, text-tertiary]`
pub fn pick(ranked: &[RankedColor], theme: ThemeMode, bg_primary: &Color) -> [Color; 3] {
    // strongest contrast first
    let mut pool: Vec<Color> = ranked.iter().map(|candidate| candidate.color).collect();
    pool.sort_by(|a, b| {
        wcag_ratio(b, bg_primary).total_cmp(&wcag_ratio(a, bg_primary))
    });

    let floors = [
        CONTRAST_TEXT_PRIMARY,
        CONTRAST_TEXT_SECONDARY,
        CONTRAST_TEXT_TERTIARY,
    ];
    let mut used: Vec<usize> = Vec::new();
    let mut picks = [*bg_primary; 3];
    for (slot, floor) in floors.into_iter().enumerate() {
        let found = pool
            .iter()
            .enumerate()
            .find(|(index, color)| {
                !used.contains(index) && wcag_ratio(color, bg_primary) >= floor
            })
            .map(|(index, color)| (index, *color));
        picks[slot] = match found {
            Some((index, color)) => {
                used.push(index);
                color
            }
            None => synthesize(&pool, theme, bg_primary, floor),
        };
        picks[slot] = temperature_match(&picks[slot], bg_primary);
    }
    picks
}

/// Shift the nearest-to-extreme candidate's L until the floor is met
fn synthesize(pool: &[Color], theme: ThemeMode, bg_primary: &Color, floor: f64) -> Color {
    let seed = match theme {
        // dark theme wants near-white text, light theme near-black
        ThemeMode::Dark => pool.iter().max_by(|a, b| a.lab().l.total_cmp(&b.lab().l)),
        ThemeMode::Light => pool.iter().min_by(|a, b| a.lab().l.total_cmp(&b.lab().l)),
    };
    let mut color = seed.copied().unwrap_or_else(|| match theme {
        ThemeMode::Dark => Color::from_lab(95.0, 0.0, 0.0),
        ThemeMode::Light => Color::from_lab(8.0, 0.0, 0.0),
    });

    let step: f32 = match theme {
        ThemeMode::Dark => 5.0,
        ThemeMode::Light => -5.0,
    };
    for _ in 0..20 {
        if wcag_ratio(&color, bg_primary) >= floor {
            break;
        }
        let lab = color.lab();
        let next_l = (lab.l + step).clamp(0.0, 100.0);
        if next_l == lab.l {
            break;
        }
        color = color.with_lab(next_l, lab.a, lab.b);
    }
    color
}

/// Strongly tinted backgrounds pull the text tint along
fn temperature_match(text: &Color, bg_primary: &Color) -> Color {
    let bg_b = bg_primary.lab().b;
    let lab = text.lab();
    if bg_b > 8.0 {
        text.with_lab((lab.l - 2.0).clamp(0.0, 100.0), lab.a, lab.b + 5.0)
    } else if bg_b < -8.0 {
        text.with_lab((lab.l + 2.0).clamp(0.0, 100.0), lab.a, lab.b - 5.0)
    } else {
        *text
    }
}
