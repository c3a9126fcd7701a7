//! ANSI terminal slot assignment
//!
//! Each chromatic slot pair has a hue target and lightness targets for the
//! normal and bright variants; a hue-matched cluster is used when it sits
//! within ΔE 25 of the slot target, otherwise the target is synthesized.
//! The black and white pairs are always synthesized, tinted faintly toward
//! the primary background. Light themes swap each pair's lightness targets.

use crate::color::Color;
use crate::color_ops::distance::{delta_e, hue_distance};
use crate::config::{ANSI_MATCH_DELTA_E, SYNTH_SATURATION};
use crate::scoring::RankedColor;
use crate::semantic::{Role, SemanticPalette};
use crate::theme::ThemeMode;

/// Saturation of the synthesized black/white slots
const NEUTRAL_SATURATION: f64 = 0.05;

/// Chromatic slot table: (normal slot, bright slot, hue, normal L, bright L)
/// with lightness targets for the dark theme
const CHROMATIC_SLOTS: [(u8, u8, f64, f64, f64); 6] = [
    (1, 9, 0.0, 45.0, 60.0),
    (2, 10, 120.0, 45.0, 60.0),
    (3, 11, 50.0, 55.0, 70.0),
    (4, 12, 230.0, 45.0, 60.0),
    (5, 13, 300.0, 45.0, 60.0),
    (6, 14, 190.0, 50.0, 65.0),
];

/// Neutral slot table: (normal slot, bright slot, normal L, bright L)
const NEUTRAL_SLOTS: [(u8, u8, f64, f64); 2] = [(0, 8, 8.0, 40.0), (7, 15, 80.0, 95.0)];

/// Fill ansi-0 through ansi-15
pub fn assign(
    ranked: &[RankedColor],
    theme: ThemeMode,
    bg_primary: &Color,
    palette: &mut SemanticPalette,
) {
    let (bg_hue, _, _) = bg_primary.hsl();

    for (normal, bright, hue, normal_l, bright_l) in CHROMATIC_SLOTS {
        let (normal_l, bright_l) = oriented(theme, normal_l, bright_l);
        palette.set(Role::Ansi(normal), chromatic(ranked, hue, normal_l));
        palette.set(Role::Ansi(bright), chromatic(ranked, hue, bright_l));
    }

    for (normal, bright, normal_l, bright_l) in NEUTRAL_SLOTS {
        let (normal_l, bright_l) = oriented(theme, normal_l, bright_l);
        palette.set(Role::Ansi(normal), neutral(bg_hue, normal_l));
        palette.set(Role::Ansi(bright), neutral(bg_hue, bright_l));
    }
}

/// Light themes invert the pair: "bright" variants go low
fn oriented(theme: ThemeMode, normal_l: f64, bright_l: f64) -> (f64, f64) {
    match theme {
        ThemeMode::Dark => (normal_l, bright_l),
        ThemeMode::Light => (bright_l, normal_l),
    }
}

fn chromatic(ranked: &[RankedColor], hue: f64, target_l: f64) -> Color {
    let target = Color::from_hsl(hue, SYNTH_SATURATION, target_l / 100.0);
    let nearest = ranked
        .iter()
        .map(|candidate| {
            let (h, _, _) = candidate.color.hsl();
            (hue_distance(h, hue), candidate.color)
        })
        .min_by(|a, b| a.0.total_cmp(&b.0));
    match nearest {
        Some((_, color)) if delta_e(&color, &target) <= ANSI_MATCH_DELTA_E => color,
        _ => target,
    }
}

fn neutral(bg_hue: f64, target_l: f64) -> Color {
    Color::from_hsl(bg_hue, NEUTRAL_SATURATION, target_l / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kmeans::Cluster;
    use crate::scoring;
    use palette::Lab;

    fn assign_fixture(theme: ThemeMode) -> SemanticPalette {
        let ranked = scoring::rank(&[
            Cluster { centroid: Lab::new(50.0, 60.0, 40.0), weight: 200.0 },
            Cluster { centroid: Lab::new(20.0, 0.0, 0.0), weight: 500.0 },
        ]);
        let bg = Color::from_lab(15.0, 2.0, -4.0);
        let mut palette = SemanticPalette::empty();
        assign(&ranked, theme, &bg, &mut palette);
        palette
    }

    #[test]
    fn all_16_slots_filled() {
        let palette = assign_fixture(ThemeMode::Dark);
        for n in 0..16 {
            assert!(palette.get(Role::Ansi(n)).is_some(), "ansi-{n} missing");
        }
    }

    #[test]
    fn bright_black_is_brighter_than_black_on_dark() {
        let palette = assign_fixture(ThemeMode::Dark);
        let black = palette.get(Role::Ansi(0)).unwrap().lab().l;
        let bright = palette.get(Role::Ansi(8)).unwrap().lab().l;
        assert!(bright > black);
    }

    #[test]
    fn light_theme_inverts_pairs() {
        let palette = assign_fixture(ThemeMode::Light);
        let black = palette.get(Role::Ansi(0)).unwrap().lab().l;
        let bright = palette.get(Role::Ansi(8)).unwrap().lab().l;
        assert!(bright < black);
    }

    #[test]
    fn unmatched_hues_synthesize_near_target() {
        // the fixture has a red-ish cluster only; blue must be synthetic
        let palette = assign_fixture(ThemeMode::Dark);
        let blue = palette.get(Role::Ansi(4)).unwrap();
        let (h, s, _) = blue.hsl();
        assert!(hue_distance(h, 230.0) < 15.0);
        assert!(s > 0.3);
    }
}
