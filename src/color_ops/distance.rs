//! Color distance calculation functions
//!
//! Perceptual distance (ΔE76) between LAB colors, plus circular hue
//! distance for the status and ANSI hue buckets.

use palette::Lab;
use palette::color_difference::DeltaE;

use crate::color::Color;

/// Calculate ΔE76 distance between two LAB values
///
/// ΔE76 is Euclidean distance in LAB. Values under 2 are generally
/// indistinguishable; above 12 the colors read as clearly distinct.
#[must_use]
pub fn delta_e_lab(lab1: Lab, lab2: Lab) -> f32 {
    lab1.delta_e(lab2)
}

/// ΔE76 between two pipeline colors
#[must_use]
pub fn delta_e(color1: &Color, color2: &Color) -> f32 {
    delta_e_lab(color1.lab(), color2.lab())
}

/// Shortest angular distance between two hues in degrees, in [0, 180]
#[must_use]
pub fn hue_distance(h1: f64, h2: f64) -> f64 {
    let diff = (h1 - h2).rem_euclid(360.0);
    diff.min(360.0 - diff)
}
