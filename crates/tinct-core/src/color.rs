//! RGBA colors and the operations themes apply to them.
//!
//! This is the color transform provider for the rest of the crate: it parses
//! hex literals, formats them back, and applies a closed set of [`ColorOp`]s
//! (lighten, darken, alpha, mix, ...). It knows nothing about themes, paths
//! or editors.
//!
//! Lightness and saturation operations work in HSL, with the same relative
//! semantics designers are used to from CSS preprocessors: `lighten(0.2)`
//! raises lightness by 20% *of its current value*, not by 20 points.
//!
//! # Example
//!
//! ```rust
//! use tinct_core::color::{Color, ColorOp};
//!
//! let cyan = Color::parse("#33b3cc").unwrap();
//! let faded = ColorOp::Alpha(0.5).apply(cyan);
//! assert_eq!(faded.to_string(), "#33b3cc80");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── Color type ─────────────────────────────────────────────────────────────

/// An sRGB color with an alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Creates a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with an explicit alpha byte.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a hex color: `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    ///
    /// The leading `#` is required.
    pub fn parse(s: &str) -> Result<Self, String> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| format!("Invalid color: {} (expected #rrggbb)", s))?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex: {}", s));
        }

        let short = |i: usize| -> Result<u8, String> {
            u8::from_str_radix(&hex[i..i + 1], 16)
                .map(|v| v * 17)
                .map_err(|_| format!("Invalid hex: {}", s))
        };
        let long = |i: usize| -> Result<u8, String> {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| format!("Invalid hex: {}", s))
        };

        match hex.len() {
            // #rgb -> #rrggbb
            3 => Ok(Self::rgb(short(0)?, short(1)?, short(2)?)),
            4 => Ok(Self::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Ok(Self::rgb(long(0)?, long(2)?, long(4)?)),
            8 => Ok(Self::rgba(long(0)?, long(2)?, long(4)?, long(6)?)),
            _ => Err(format!(
                "Invalid hex color: {} (must be 3, 4, 6 or 8 digits)",
                s
            )),
        }
    }

    /// Alpha as a fraction in `0.0..=1.0`.
    pub fn alpha(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// Returns the same color with alpha replaced by `alpha` (`0.0..=1.0`).
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: unit_to_byte(alpha),
            ..self
        }
    }

    /// Relative luminance (WCAG definition), `0.0` for black to `1.0` for white.
    pub fn luminosity(&self) -> f64 {
        0.2126 * srgb_to_linear(self.r)
            + 0.7152 * srgb_to_linear(self.g)
            + 0.0722 * srgb_to_linear(self.b)
    }

    /// Converts to HSL, keeping alpha aside.
    pub fn to_hsl(&self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return Hsl { h: 0.0, s: 0.0, l: l * 100.0 };
        }

        let s = if l <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };
        let h = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Hsl {
            h: h * 60.0,
            s: s * 100.0,
            l: l * 100.0,
        }
    }

    /// Builds a color from HSL components, with the given alpha byte.
    pub fn from_hsl(hsl: Hsl, a: u8) -> Self {
        let h = hsl.h.rem_euclid(360.0) / 360.0;
        let s = (hsl.s / 100.0).clamp(0.0, 1.0);
        let l = (hsl.l / 100.0).clamp(0.0, 1.0);

        if s == 0.0 {
            let v = unit_to_byte(l);
            return Self::rgba(v, v, v, a);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Self::rgba(
            unit_to_byte(hue_to_channel(p, q, h + 1.0 / 3.0)),
            unit_to_byte(hue_to_channel(p, q, h)),
            unit_to_byte(hue_to_channel(p, q, h - 1.0 / 3.0)),
            a,
        )
    }

    /// Maps the HSL representation through `f`, preserving alpha.
    pub fn map_hsl(self, f: impl FnOnce(Hsl) -> Hsl) -> Self {
        Self::from_hsl(f(self.to_hsl()), self.a)
    }

    /// Blends `other` into `self`; `weight` is the share of `other` (`0.0..=1.0`).
    ///
    /// Alpha participates in the weighting, so mixing with a translucent
    /// color pulls less of its hue in.
    pub fn mix(self, other: Color, weight: f64) -> Self {
        let p = weight.clamp(0.0, 1.0);
        let w = 2.0 * p - 1.0;
        let a = other.alpha() - self.alpha();
        let w1 = (if w * a == -1.0 { w } else { (w + a) / (1.0 + w * a) } + 1.0) / 2.0;
        let w2 = 1.0 - w1;
        let channel = |x: u8, y: u8| (w1 * x as f64 + w2 * y as f64).round().clamp(0.0, 255.0) as u8;

        Self {
            r: channel(other.r, self.r),
            g: channel(other.g, self.g),
            b: channel(other.b, self.b),
            a: unit_to_byte(other.alpha() * p + self.alpha() * (1.0 - p)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ─── HSL ────────────────────────────────────────────────────────────────────

/// HSL triple: hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn unit_to_byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert an sRGB component (0–255) to linear light (0.0–1.0).
fn srgb_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Operations ─────────────────────────────────────────────────────────────

/// A fully bound color operation.
///
/// Every variant carries concrete values only; anything path-dependent is
/// resolved before a `ColorOp` is built (see `cascade::Transform::bind`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorOp {
    /// Raise HSL lightness by a ratio of its current value.
    Lighten(f64),
    /// Lower HSL lightness by a ratio of its current value.
    Darken(f64),
    /// Set alpha to an absolute value.
    Alpha(f64),
    /// Reduce alpha by a ratio of its current value.
    Transparentize(f64),
    /// Scale saturation by `1 + ratio` (negative values desaturate).
    Saturate(f64),
    /// Rotate hue by degrees.
    Rotate(f64),
    /// Blend in another color; `amount` is its share.
    Mix { with: Color, amount: f64 },
}

impl ColorOp {
    pub fn apply(&self, color: Color) -> Color {
        match *self {
            ColorOp::Lighten(ratio) => color.map_hsl(|hsl| Hsl {
                l: hsl.l + hsl.l * ratio,
                ..hsl
            }),
            ColorOp::Darken(ratio) => color.map_hsl(|hsl| Hsl {
                l: hsl.l - hsl.l * ratio,
                ..hsl
            }),
            ColorOp::Alpha(alpha) => color.with_alpha(alpha),
            ColorOp::Transparentize(ratio) => color.with_alpha(color.alpha() * (1.0 - ratio)),
            ColorOp::Saturate(ratio) => color.map_hsl(|hsl| Hsl {
                s: hsl.s + hsl.s * ratio,
                ..hsl
            }),
            ColorOp::Rotate(degrees) => color.map_hsl(|hsl| Hsl {
                h: (hsl.h + degrees).rem_euclid(360.0),
                ..hsl
            }),
            ColorOp::Mix { with, amount } => color.mix(with, amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =====================================================================
    // Parsing and formatting
    // =====================================================================

    #[test]
    fn parse_six_digit_hex() {
        assert_eq!(Color::parse("#33b3cc").unwrap(), Color::rgb(0x33, 0xb3, 0xcc));
    }

    #[test]
    fn parse_three_digit_hex_expands() {
        assert_eq!(Color::parse("#fa0").unwrap(), Color::rgb(255, 170, 0));
    }

    #[test]
    fn parse_with_alpha() {
        assert_eq!(
            Color::parse("#00000080").unwrap(),
            Color::rgba(0, 0, 0, 0x80)
        );
        assert_eq!(Color::parse("#0008").unwrap(), Color::rgba(0, 0, 0, 0x88));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Color::parse("33b3cc").is_err());
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#gggggg").is_err());
        assert!(Color::parse("#ééé").is_err());
    }

    #[test]
    fn display_is_lowercase_and_omits_opaque_alpha() {
        assert_eq!(Color::parse("#33B3CC").unwrap().to_string(), "#33b3cc");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "#01020304");
    }

    #[test]
    fn serde_uses_hex_strings() {
        let c: Color = serde_json::from_str("\"#ff0000\"").unwrap();
        assert_eq!(c, Color::rgb(255, 0, 0));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#ff0000\"");
    }

    // =====================================================================
    // HSL
    // =====================================================================

    #[test]
    fn hsl_round_trip_is_stable() {
        for hex in ["#33b3cc", "#e61f44", "#a7a4af", "#000000", "#ffffff", "#1d1b22"] {
            let c = Color::parse(hex).unwrap();
            assert_eq!(Color::from_hsl(c.to_hsl(), c.a), c, "round-trip of {}", hex);
        }
    }

    #[test]
    fn hsl_of_pure_red() {
        let hsl = Color::rgb(255, 0, 0).to_hsl();
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 100.0);
        assert_eq!(hsl.l, 50.0);
    }

    #[test]
    fn luminosity_extremes() {
        assert_eq!(Color::rgb(0, 0, 0).luminosity(), 0.0);
        assert!((Color::rgb(255, 255, 255).luminosity() - 1.0).abs() < 1e-9);
    }

    // =====================================================================
    // Operations
    // =====================================================================

    #[test]
    fn lighten_and_darken_are_relative() {
        let grey = Color::rgb(100, 100, 100);
        let lighter = ColorOp::Lighten(0.5).apply(grey);
        let darker = ColorOp::Darken(0.5).apply(grey);
        assert_eq!(lighter, Color::rgb(150, 150, 150));
        assert_eq!(darker, Color::rgb(50, 50, 50));
    }

    #[test]
    fn lighten_clamps_at_white() {
        assert_eq!(
            ColorOp::Lighten(5.0).apply(Color::rgb(200, 200, 200)),
            Color::rgb(255, 255, 255)
        );
    }

    #[test]
    fn alpha_sets_and_transparentize_scales() {
        let c = Color::rgb(10, 20, 30);
        assert_eq!(ColorOp::Alpha(0.25).apply(c).a, 64);
        assert_eq!(ColorOp::Transparentize(0.5).apply(c).a, 128);
    }

    #[test]
    fn mix_halfway() {
        let mixed = Color::rgb(0, 0, 0).mix(Color::rgb(255, 255, 255), 0.5);
        assert_eq!(mixed, Color::rgb(128, 128, 128));
    }

    #[test]
    fn mix_weight_is_share_of_other() {
        let base = Color::rgb(0, 0, 0);
        assert_eq!(base.mix(Color::rgb(200, 0, 0), 0.0), base);
        assert_eq!(base.mix(Color::rgb(200, 0, 0), 1.0), Color::rgb(200, 0, 0));
        assert_eq!(base.mix(Color::rgb(200, 0, 0), 0.1), Color::rgb(20, 0, 0));
    }

    #[test]
    fn rotate_wraps_hue() {
        let red = Color::rgb(255, 0, 0);
        assert_eq!(ColorOp::Rotate(120.0).apply(red), Color::rgb(0, 255, 0));
        assert_eq!(ColorOp::Rotate(-120.0).apply(red), Color::rgb(0, 0, 255));
    }

    #[test]
    fn ops_preserve_alpha() {
        let c = Color::rgba(100, 50, 25, 0x80);
        assert_eq!(ColorOp::Lighten(0.1).apply(c).a, 0x80);
        assert_eq!(ColorOp::Saturate(-0.5).apply(c).a, 0x80);
    }
}
