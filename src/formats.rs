//! Output color formats
//!
//! The six codecs an application config can select via `color-format`.
//! Formats without an alpha component discard it, which makes the `opacity`
//! transform a no-op for them; that is part of the format contract.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::{LuminolError, Result};

/// Supported output formats for rendered colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorFormat {
    /// `#rrggbb`
    #[default]
    Hex6,
    /// `#rrggbbaa`
    Hex8,
    /// `rgb(R, G, B)`
    Rgb,
    /// `rgba(R, G, B, A)` with two-decimal alpha
    Rgba,
    /// `R,G,B`
    RgbDecimal,
    /// `R,G,B,A`
    RgbaDecimal,
}

impl ColorFormat {
    /// All accepted `color-format` config values
    pub const VALID_NAMES: &'static [&'static str] =
        &["hex6", "hex8", "rgb", "rgba", "rgb_decimal", "rgba_decimal"];

    /// Whether this format carries the alpha channel
    #[must_use]
    pub const fn has_alpha(&self) -> bool {
        matches!(
            self,
            ColorFormat::Hex8 | ColorFormat::Rgba | ColorFormat::RgbaDecimal
        )
    }

    /// Render a color in this format
    #[must_use]
    pub fn format(&self, color: &Color) -> String {
        let (r, g, b) = color.rgb();
        let alpha = color.alpha();
        match self {
            ColorFormat::Hex6 => format!("#{r:02x}{g:02x}{b:02x}"),
            ColorFormat::Hex8 => {
                let a = (alpha * 255.0).round() as u8;
                format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
            }
            ColorFormat::Rgb => format!("rgb({r}, {g}, {b})"),
            ColorFormat::Rgba => format!("rgba({r}, {g}, {b}, {alpha:.2})"),
            ColorFormat::RgbDecimal => format!("{r},{g},{b}"),
            ColorFormat::RgbaDecimal => format!("{r},{g},{b},{alpha}"),
        }
    }

    /// Parse a string previously emitted by [`format`](Self::format)
    ///
    /// # Errors
    /// Returns an error when the string does not match this format's shape.
    pub fn parse(&self, input: &str) -> Result<Color> {
        let bad = || {
            LuminolError::General(format!(
                "'{input}' is not a valid {self} color string"
            ))
        };
        match self {
            ColorFormat::Hex6 | ColorFormat::Hex8 => Color::from_hex(input),
            ColorFormat::Rgb | ColorFormat::Rgba => {
                let (prefix, want_alpha) = if *self == ColorFormat::Rgb {
                    ("rgb(", false)
                } else {
                    ("rgba(", true)
                };
                let inner = input
                    .strip_prefix(prefix)
                    .and_then(|rest| rest.strip_suffix(')'))
                    .ok_or_else(bad)?;
                parse_channel_list(inner, want_alpha).ok_or_else(bad)
            }
            ColorFormat::RgbDecimal => parse_channel_list(input, false).ok_or_else(bad),
            ColorFormat::RgbaDecimal => parse_channel_list(input, true).ok_or_else(bad),
        }
    }
}

/// Parse `R, G, B[, A]` with optional spaces after commas
fn parse_channel_list(inner: &str, want_alpha: bool) -> Option<Color> {
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    let expected = if want_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }
    let r = parts[0].parse::<u8>().ok()?;
    let g = parts[1].parse::<u8>().ok()?;
    let b = parts[2].parse::<u8>().ok()?;
    let color = Color::from_rgb(r, g, b);
    if want_alpha {
        let alpha = parts[3].parse::<f64>().ok()?;
        if !(0.0..=1.0).contains(&alpha) {
            return None;
        }
        Some(color.with_alpha(alpha))
    } else {
        Some(color)
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorFormat::Hex6 => "hex6",
            ColorFormat::Hex8 => "hex8",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Rgba => "rgba",
            ColorFormat::RgbDecimal => "rgb_decimal",
            ColorFormat::RgbaDecimal => "rgba_decimal",
        };
        f.write_str(name)
    }
}

impl FromStr for ColorFormat {
    type Err = LuminolError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hex6" => Ok(ColorFormat::Hex6),
            "hex8" => Ok(ColorFormat::Hex8),
            "rgb" => Ok(ColorFormat::Rgb),
            "rgba" => Ok(ColorFormat::Rgba),
            "rgb_decimal" => Ok(ColorFormat::RgbDecimal),
            "rgba_decimal" => Ok(ColorFormat::RgbaDecimal),
            other => Err(LuminolError::config(format!(
                "invalid color-format '{}', expected one of: {}",
                other,
                ColorFormat::VALID_NAMES.join(", ")
            ))),
        }
    }
}
