//! Canonical color value for the theming pipeline
//!
//! A [`Color`] is authoritative in CIE Lab (D65) plus an alpha channel.
//! RGB and HSL are projections computed on demand: LAB drives distance and
//! scoring, HSL drives hue/saturation/lightness edits, RGB drives output.
//! Every constructor funnels back into Lab so a color always has exactly one
//! canonical form.

use palette::{FromColor, Hsl, IntoColor, Lab, Srgb};

use crate::error::{LuminolError, Result};

/// A single color: CIE Lab coordinates plus alpha in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    lab: Lab,
    alpha: f64,
}

impl Color {
    /// Construct from LAB coordinates (L in [0,100], a/b in [-128,127])
    #[must_use]
    pub fn from_lab(l: f32, a: f32, b: f32) -> Self {
        Self {
            lab: Lab::new(l, a, b),
            alpha: 1.0,
        }
    }

    /// Construct from a palette LAB value
    #[must_use]
    pub const fn from_lab_value(lab: Lab) -> Self {
        Self { lab, alpha: 1.0 }
    }

    /// Construct from 8-bit RGB channels
    #[must_use]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let srgb = Srgb::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        );
        Self {
            lab: Lab::from_color(srgb),
            alpha: 1.0,
        }
    }

    /// Construct from HSL (h in degrees, s/l in [0,1]); enters canonical
    /// form via HSL -> RGB -> LAB
    #[must_use]
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let hsl = Hsl::new(h as f32, (s as f32).clamp(0.0, 1.0), (l as f32).clamp(0.0, 1.0));
        let srgb = Srgb::from_color(hsl);
        Self {
            lab: Lab::from_color(srgb),
            alpha: 1.0,
        }
    }

    /// Construct from an sRGB value with unit-range components
    #[must_use]
    pub fn from_srgb(srgb: Srgb) -> Self {
        Self {
            lab: Lab::from_color(srgb),
            alpha: 1.0,
        }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 && hex.len() != 8 {
            return Err(LuminolError::General(format!(
                "invalid hex color '{hex}': expected #rrggbb or #rrggbbaa"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| LuminolError::General(format!("invalid hex color '{hex}': {e}")))
        };
        let r = channel(0..2)?;
        let g = channel(2..4)?;
        let b = channel(4..6)?;
        let mut color = Self::from_rgb(r, g, b);
        if hex.len() == 8 {
            color.alpha = f64::from(channel(6..8)?) / 255.0;
        }
        Ok(color)
    }

    /// The canonical LAB value
    #[must_use]
    pub const fn lab(&self) -> Lab {
        self.lab
    }

    /// Alpha channel in [0, 1]
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Copy with a different alpha (clamped to [0, 1])
    #[must_use]
    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self {
            lab: self.lab,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Copy with different LAB coordinates, keeping alpha
    #[must_use]
    pub fn with_lab(&self, l: f32, a: f32, b: f32) -> Self {
        Self {
            lab: Lab::new(l, a, b),
            alpha: self.alpha,
        }
    }

    /// sRGB projection clamped into gamut (components in [0, 1])
    #[must_use]
    pub fn srgb_clamped(&self) -> Srgb {
        let srgb: Srgb = self.lab.into_color();
        Srgb::new(
            srgb.red.clamp(0.0, 1.0),
            srgb.green.clamp(0.0, 1.0),
            srgb.blue.clamp(0.0, 1.0),
        )
    }

    /// 8-bit RGB projection; out-of-gamut channels clamp, ties round to even
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        let srgb = self.srgb_clamped();
        let quantize = |c: f32| (c * 255.0).round_ties_even() as u8;
        (
            quantize(srgb.red),
            quantize(srgb.green),
            quantize(srgb.blue),
        )
    }

    /// HSL projection (h in [0, 360), s/l in [0, 1])
    #[must_use]
    pub fn hsl(&self) -> (f64, f64, f64) {
        let hsl = Hsl::from_color(self.srgb_clamped());
        (
            f64::from(hsl.hue.into_positive_degrees()),
            f64::from(hsl.saturation),
            f64::from(hsl.lightness),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_round_trip_is_close() {
        // RGB -> LAB -> HSL -> RGB within 1 unit per channel
        for &(r, g, b) in &[(30u8, 30u8, 46u8), (138, 244, 218), (255, 0, 0), (12, 200, 99)] {
            let color = Color::from_rgb(r, g, b);
            let (h, s, l) = color.hsl();
            let back = Color::from_hsl(h, s, l);
            let (r2, g2, b2) = back.rgb();
            assert!(i16::from(r).abs_diff(i16::from(r2)) <= 1, "red {r} vs {r2}");
            assert!(i16::from(g).abs_diff(i16::from(g2)) <= 1, "green {g} vs {g2}");
            assert!(i16::from(b).abs_diff(i16::from(b2)) <= 1, "blue {b} vs {b2}");
        }
    }

    #[test]
    fn hex_parse_with_alpha() {
        let color = Color::from_hex("#8af4dacc").unwrap();
        assert_eq!(color.rgb(), (138, 244, 218));
        assert!((color.alpha() - 204.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn hex_parse_rejects_garbage() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("zzzzzz").is_err());
    }

    #[test]
    fn out_of_gamut_lab_clamps() {
        // Extremely chromatic LAB points fall outside sRGB
        let color = Color::from_lab(50.0, 120.0, -120.0);
        let (r, g, b) = color.rgb();
        assert!(r <= 255 && g <= 255 && b <= 255);
    }

    #[test]
    fn with_alpha_clamps() {
        let color = Color::from_rgb(10, 20, 30);
        assert_eq!(color.with_alpha(1.5).alpha(), 1.0);
        assert_eq!(color.with_alpha(-0.5).alpha(), 0.0);
    }
}
