//! Harmony validation
//!
//! Post-assignment pass enforcing the palette's contrast and separation
//! contracts: bg/text contrast, accent/bg contrast, and pairwise ΔE among
//! the key roles. Violations are repaired by nudging the offending role's
//! lightness; whatever survives the pass cap becomes a warning.

use crate::color::Color;
use crate::color_ops::contrast::wcag_ratio;
use crate::color_ops::distance::delta_e;
use crate::config::{
    CONTRAST_ACCENT, CONTRAST_TEXT_PRIMARY, HARMONY_MAX_PASSES, HARMONY_MIN_DELTA_E,
};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::semantic::{Role, SemanticPalette};

use super::shift_lightness;

/// Roles that must stay pairwise separated by ΔE
const KEY_ROLES: [Role; 5] = [
    Role::BgPrimary,
    Role::AccentPrimary,
    Role::ErrorColor,
    Role::WarningColor,
    Role::SuccessColor,
];

/// Run up to [`HARMONY_MAX_PASSES`] repair passes, then warn on residue
pub fn validate(palette: &mut SemanticPalette, sink: &mut DiagnosticSink) {
    for _ in 0..HARMONY_MAX_PASSES {
        if !repair_pass(palette) {
            break;
        }
    }
    for violation in violations(palette) {
        sink.push(Diagnostic::warning(violation).suggest(
            "palette harmony could not be fully repaired; consider a different wallpaper or explicit theme-type",
        ));
    }
}

/// One repair pass; returns true when something was adjusted
fn repair_pass(palette: &mut SemanticPalette) -> bool {
    let mut adjusted = false;

    if let (Some(bg), Some(text)) = (palette.get(Role::BgPrimary), palette.get(Role::TextPrimary))
        && wcag_ratio(&bg, &text) < CONTRAST_TEXT_PRIMARY
    {
        palette.set(Role::TextPrimary, nudge_apart(&text, &bg));
        adjusted = true;
    }

    if let (Some(bg), Some(accent)) =
        (palette.get(Role::BgPrimary), palette.get(Role::AccentPrimary))
        && wcag_ratio(&accent, &bg) < CONTRAST_ACCENT
    {
        palette.set(Role::AccentPrimary, nudge_apart(&accent, &bg));
        adjusted = true;
    }

    for i in 0..KEY_ROLES.len() {
        for j in (i + 1)..KEY_ROLES.len() {
            if let (Some(a), Some(b)) = (palette.get(KEY_ROLES[i]), palette.get(KEY_ROLES[j]))
                && delta_e(&a, &b) < HARMONY_MIN_DELTA_E
            {
                // the later role moves
                palette.set(KEY_ROLES[j], nudge_apart(&b, &a));
                adjusted = true;
            }
        }
    }
    adjusted
}

/// Move `color` 10 L-units away from `anchor`
fn nudge_apart(color: &Color, anchor: &Color) -> Color {
    let delta = if color.lab().l >= anchor.lab().l {
        10.0
    } else {
        -10.0
    };
    shift_lightness(color, delta)
}

fn violations(palette: &SemanticPalette) -> Vec<String> {
    let mut found = Vec::new();

    if let (Some(bg), Some(text)) = (palette.get(Role::BgPrimary), palette.get(Role::TextPrimary)) {
        let ratio = wcag_ratio(&bg, &text);
        if ratio < CONTRAST_TEXT_PRIMARY {
            found.push(format!(
                "bg-primary/text-primary contrast {ratio:.2} below {CONTRAST_TEXT_PRIMARY}"
            ));
        }
    }
    if let (Some(bg), Some(accent)) =
        (palette.get(Role::BgPrimary), palette.get(Role::AccentPrimary))
    {
        let ratio = wcag_ratio(&accent, &bg);
        if ratio < CONTRAST_ACCENT {
            found.push(format!(
                "accent-primary/bg-primary contrast {ratio:.2} below {CONTRAST_ACCENT}"
            ));
        }
    }
    for i in 0..KEY_ROLES.len() {
        for j in (i + 1)..KEY_ROLES.len() {
            if let (Some(a), Some(b)) = (palette.get(KEY_ROLES[i]), palette.get(KEY_ROLES[j])) {
                let distance = delta_e(&a, &b);
                if distance < HARMONY_MIN_DELTA_E {
                    found.push(format!(
                        "{} and {} are ΔE {distance:.1} apart (minimum {HARMONY_MIN_DELTA_E})",
                        KEY_ROLES[i],
                        KEY_ROLES[j]
                    ));
                }
            }
        }
    }
    found
}
