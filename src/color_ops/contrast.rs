//! Color contrast calculation functions
//!
//! Pure functions for WCAG 2.1 relative luminance and contrast ratios.
//! Role assignment and harmony validation gate every text and accent
//! choice on these ratios.

use crate::color::Color;

/// Calculate WCAG relative luminance for a color
///
/// Implements the WCAG 2.1 relative luminance formula over linear sRGB.
///
/// # Returns
/// * Relative luminance value (0.0 = black, 1.0 = white)
#[must_use]
pub fn wcag_relative(color: &Color) -> f64 {
    let linear = color.srgb_clamped().into_linear();
    0.2126 * f64::from(linear.red) + 0.7152 * f64::from(linear.green) + 0.0722 * f64::from(linear.blue)
}

/// Calculate WCAG contrast ratio between two colors
///
/// # Returns
/// * Contrast ratio (1.0 = no contrast, 21.0 = maximum contrast)
#[must_use]
pub fn wcag_ratio(color1: &Color, color2: &Color) -> f64 {
    from_luminance(wcag_relative(color1), wcag_relative(color2))
}

/// Contrast ratio from pre-computed luminance values
#[must_use]
pub fn from_luminance(lum1: f64, lum2: f64) -> f64 {
    let lighter = lum1.max(lum2);
    let darker = lum1.min(lum2);
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio against pure white
#[must_use]
pub fn contrast_vs_white(color: &Color) -> f64 {
    from_luminance(wcag_relative(color), 1.0)
}

/// Contrast ratio against pure black
#[must_use]
pub fn contrast_vs_black(color: &Color) -> f64 {
    from_luminance(wcag_relative(color), 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_on_black_is_maximal() {
        let white = Color::from_rgb(255, 255, 255);
        let black = Color::from_rgb(0, 0, 0);
        let ratio = wcag_ratio(&white, &black);
        assert!((ratio - 21.0).abs() < 0.1);
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = Color::from_rgb(30, 150, 230);
        let b = Color::from_rgb(210, 40, 20);
        assert!((wcag_ratio(&a, &b) - wcag_ratio(&b, &a)).abs() < 1e-10);
    }

    #[test]
    fn from_luminance_matches_manual() {
        // (0.8 + 0.05) / (0.2 + 0.05) = 3.4
        assert!((from_luminance(0.8, 0.2) - 3.4).abs() < 1e-9);
    }

    #[test]
    fn white_black_helpers_agree() {
        let gray = Color::from_rgb(128, 128, 128);
        let white = Color::from_rgb(255, 255, 255);
        let black = Color::from_rgb(0, 0, 0);
        assert!((contrast_vs_white(&gray) - wcag_ratio(&gray, &white)).abs() < 1e-6);
        assert!((contrast_vs_black(&gray) - wcag_ratio(&gray, &black)).abs() < 1e-6);
    }
}
