//! Role assignment
//!
//! Classifies the ranked image colors into the 29-role semantic palette:
//! backgrounds, texts, accents, status colors, borders, and the 16 ANSI
//! slots, followed by harmony validation. Selection is score-driven;
//! whenever the image offers no suitable candidate a color is synthesized,
//! so the palette is always complete.

mod accents;
mod ansi;
mod backgrounds;
mod harmony;
mod texts;

use crate::color::Color;
use crate::diagnostics::DiagnosticSink;
use crate::scoring::RankedColor;
use crate::semantic::{Role, SemanticPalette};
use crate::theme::ThemeMode;

/// Build the complete semantic palette from ranked colors
///
/// Harmony violations that survive the adjustment passes are reported into
/// `sink`; they never fail the run.
#[must_use]
pub fn assign_roles(
    ranked: &[RankedColor],
    theme: ThemeMode,
    sink: &mut DiagnosticSink,
) -> SemanticPalette {
    let mut palette = SemanticPalette::empty();

    let bgs = backgrounds::pick(ranked, theme);
    palette.set(Role::BgPrimary, bgs[0]);
    palette.set(Role::BgSecondary, bgs[1]);
    palette.set(Role::BgTertiary, bgs[2]);

    let texts = texts::pick(ranked, theme, &bgs[0]);
    palette.set(Role::TextPrimary, texts[0]);
    palette.set(Role::TextSecondary, texts[1]);
    palette.set(Role::TextTertiary, texts[2]);

    let accent_pair = accents::pick_accents(ranked, &bgs[0]);
    palette.set(Role::AccentPrimary, accent_pair[0]);
    palette.set(Role::AccentSecondary, accent_pair[1]);

    let status = accents::pick_status(ranked, &accent_pair[0]);
    palette.set(Role::ErrorColor, status[0]);
    palette.set(Role::WarningColor, status[1]);
    palette.set(Role::SuccessColor, status[2]);

    ansi::assign(ranked, theme, &bgs[0], &mut palette);

    harmony::validate(&mut palette, sink);

    // borders alias their sources after harmony so they track adjustments
    if let Some(text_primary) = palette.get(Role::TextPrimary) {
        palette.set(Role::BorderActive, text_primary);
    }
    if let Some(bg_secondary) = palette.get(Role::BgSecondary) {
        palette.set(Role::BorderInactive, bg_secondary);
    }

    palette
}

/// Shift a color's LAB lightness, clamping into [0, 100]
pub(crate) fn shift_lightness(color: &Color, delta: f32) -> Color {
    let lab = color.lab();
    color.with_lab((lab.l + delta).clamp(0.0, 100.0), lab.a, lab.b)
}
