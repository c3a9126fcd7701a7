//! Color transform pipeline
//!
//! User transforms attached to a color binding. Application order is fixed
//! regardless of declaration order: hue, saturation, brightness, contrast,
//! temperature, opacity. HSL-based stages project to HSL, mutate, and
//! reconstruct; contrast operates on RGB channels; temperature on LAB.
//! Every stage re-canonicalizes into LAB.

use palette::Srgb;

use crate::color::Color;
use crate::diagnostics::{Diagnostic, DiagnosticSink};

/// Transform kinds in canonical application order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TransformKind {
    Hue,
    Saturation,
    Brightness,
    Contrast,
    Temperature,
    Opacity,
}

impl TransformKind {
    /// Resolve a config key (`hue`, `saturation`, ...) to a kind
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "hue" => Some(TransformKind::Hue),
            "saturation" => Some(TransformKind::Saturation),
            "brightness" => Some(TransformKind::Brightness),
            "contrast" => Some(TransformKind::Contrast),
            "temperature" => Some(TransformKind::Temperature),
            "opacity" => Some(TransformKind::Opacity),
            _ => None,
        }
    }

    /// Valid value range for this kind, `None` for the wrapping hue domain
    const fn range(&self) -> Option<(f64, f64)> {
        match self {
            TransformKind::Hue => None,
            TransformKind::Saturation | TransformKind::Brightness | TransformKind::Contrast => {
                Some((0.0, 3.0))
            }
            TransformKind::Temperature => Some((-100.0, 100.0)),
            TransformKind::Opacity => Some((0.0, 1.0)),
        }
    }
}

/// A single `(kind, value)` transform entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub kind: TransformKind,
    pub value: f64,
}

impl Transform {
    #[must_use]
    pub const fn new(kind: TransformKind, value: f64) -> Self {
        Self { kind, value }
    }
}

/// Apply a set of transforms to a color in canonical order
///
/// Out-of-range values are clamped and reported as warnings into `sink`,
/// keyed by `key_path` (the config location of the binding). Declaration
/// order of `transforms` never affects the result.
#[must_use]
pub fn apply_all(
    color: Color,
    transforms: &[Transform],
    sink: &mut DiagnosticSink,
    key_path: &str,
) -> Color {
    let mut ordered: Vec<Transform> = transforms.to_vec();
    ordered.sort_by_key(|t| t.kind);

    let mut current = color;
    for transform in ordered {
        let value = clamped_value(transform, sink, key_path);
        current = apply_one(current, transform.kind, value);
    }
    current
}

fn clamped_value(transform: Transform, sink: &mut DiagnosticSink, key_path: &str) -> f64 {
    let Some((lo, hi)) = transform.kind.range() else {
        // hue wraps; wrapping is its domain, not a clamp
        return transform.value.rem_euclid(360.0);
    };
    if transform.value < lo || transform.value > hi {
        let clamped = transform.value.clamp(lo, hi);
        sink.push(
            Diagnostic::warning(format!(
                "{:?} value {} out of range [{lo}, {hi}], clamped to {clamped}",
                transform.kind, transform.value
            ))
            .at_key(key_path.to_string()),
        );
        clamped
    } else {
        transform.value
    }
}

fn apply_one(color: Color, kind: TransformKind, value: f64) -> Color {
    let alpha = color.alpha();
    match kind {
        TransformKind::Hue => {
            let (h, s, l) = color.hsl();
            Color::from_hsl(h + value, s, l).with_alpha(alpha)
        }
        TransformKind::Saturation => {
            let (h, s, l) = color.hsl();
            Color::from_hsl(h, (s * value).clamp(0.0, 1.0), l).with_alpha(alpha)
        }
        TransformKind::Brightness => {
            let (h, s, l) = color.hsl();
            Color::from_hsl(h, s, (l * value).clamp(0.0, 1.0)).with_alpha(alpha)
        }
        TransformKind::Contrast => {
            let srgb = color.srgb_clamped();
            let expand = |c: f32| ((f64::from(c) - 0.5) * value + 0.5).clamp(0.0, 1.0) as f32;
            Color::from_srgb(Srgb::new(
                expand(srgb.red),
                expand(srgb.green),
                expand(srgb.blue),
            ))
            .with_alpha(alpha)
        }
        TransformKind::Temperature => {
            let lab = color.lab();
            let a = lab.a + (value * 0.6) as f32;
            // negative values cool: pull b* toward blue as well
            let b = if value < 0.0 {
                lab.b + (value * 0.3) as f32
            } else {
                lab.b
            };
            color.with_lab(lab.l, a, b)
        }
        TransformKind::Opacity => color.with_alpha(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_ops::distance::delta_e;

    fn apply_silent(color: Color, transforms: &[Transform]) -> Color {
        let mut sink = DiagnosticSink::new();
        apply_all(color, transforms, &mut sink, "test")
    }

    #[test]
    fn declaration_order_is_irrelevant() {
        let color = Color::from_rgb(180, 90, 40);
        let forward = [
            Transform::new(TransformKind::Hue, 40.0),
            Transform::new(TransformKind::Brightness, 1.2),
            Transform::new(TransformKind::Opacity, 0.5),
        ];
        let reversed = [
            Transform::new(TransformKind::Opacity, 0.5),
            Transform::new(TransformKind::Brightness, 1.2),
            Transform::new(TransformKind::Hue, 40.0),
        ];
        let a = apply_silent(color, &forward);
        let b = apply_silent(color, &reversed);
        assert_eq!(a.rgb(), b.rgb());
        assert_eq!(a.alpha(), b.alpha());
    }

    #[test]
    fn brightness_zero_is_black() {
        let color = Color::from_rgb(200, 150, 100);
        let result = apply_silent(color, &[Transform::new(TransformKind::Brightness, 0.0)]);
        assert_eq!(result.rgb(), (0, 0, 0));
    }

    #[test]
    fn hue_360_is_identity() {
        let color = Color::from_rgb(20, 180, 220);
        let shifted = apply_silent(color, &[Transform::new(TransformKind::Hue, 360.0)]);
        assert!(delta_e(&color, &shifted) < 1.0);
    }

    #[test]
    fn out_of_range_clamps_and_warns() {
        let color = Color::from_rgb(100, 100, 100);
        let mut sink = DiagnosticSink::new();
        let boosted = apply_all(
            color,
            &[Transform::new(TransformKind::Brightness, 5.0)],
            &mut sink,
            "hyprland.colors.active-border.brightness",
        );
        assert!(sink.has_warnings());
        // effective factor 3.0 saturates mid-gray lightness to 1.0
        assert_eq!(boosted.rgb(), (255, 255, 255));
    }

    #[test]
    fn opacity_sets_alpha_only() {
        let color = Color::from_rgb(10, 20, 30);
        let faded = apply_silent(color, &[Transform::new(TransformKind::Opacity, 0.5)]);
        assert_eq!(faded.rgb(), color.rgb());
        assert_eq!(faded.alpha(), 0.5);
    }

    #[test]
    fn contrast_expands_around_midpoint() {
        let color = Color::from_rgb(64, 64, 64);
        let pushed = apply_silent(color, &[Transform::new(TransformKind::Contrast, 2.0)]);
        let (r, _, _) = pushed.rgb();
        // (64/255 - 0.5) * 2 + 0.5 ≈ 0.002
        assert!(r < 10);
    }

    #[test]
    fn negative_temperature_cools_both_axes() {
        let color = Color::from_rgb(150, 140, 120);
        let cooled = apply_silent(color, &[Transform::new(TransformKind::Temperature, -50.0)]);
        let warm = color.lab();
        let cool = cooled.lab();
        assert!(cool.a < warm.a);
        assert!(cool.b < warm.b);
    }

    #[test]
    fn positive_temperature_only_shifts_a() {
        let color = Color::from_rgb(150, 140, 120);
        let warmed = apply_silent(color, &[Transform::new(TransformKind::Temperature, 50.0)]);
        assert!(warmed.lab().a > color.lab().a);
        assert!((warmed.lab().b - color.lab().b).abs() < 1e-4);
    }

    #[test]
    fn brightness_clamp_at_three_whitens_midtones() {
        let color = Color::from_hsl(200.0, 0.5, 0.4);
        let mut sink = DiagnosticSink::new();
        let result = apply_all(
            color,
            &[Transform::new(TransformKind::Brightness, 3.0)],
            &mut sink,
            "test",
        );
        // 0.4 * 3 clamps lightness to 1.0 -> white
        assert_eq!(result.rgb(), (255, 255, 255));
        assert!(!sink.has_warnings());
    }
}
