//! Global color adjustments applied after the cascade.
//!
//! A [`FilterConfig`] is a set of optional adjustments. Every present option
//! is applied to each resolved color independently; absent options do
//! nothing. Configs come from three layers (theme file, build config, command
//! line) and are combined with [`FilterConfig::merged_over`], later layers
//! winning option by option.
//!
//! ```rust
//! use tinct_core::filter::FilterConfig;
//!
//! let theme = FilterConfig { contrast: Some(0.1), ..Default::default() };
//! let cli = FilterConfig { contrast: Some(0.5), ..Default::default() };
//! assert_eq!(cli.merged_over(&theme).contrast, Some(0.5));
//! ```

use serde::{Deserialize, Serialize};

use crate::cascade::ResolvedTokens;
use crate::color::Color;

/// Adjustments to apply to every generated color.
///
/// All values are fractions unless noted: `contrast: 0.2` pushes lightness
/// 20% further away from the midpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturation: Option<f64>,
    /// Degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hue_shift: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground_lightness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_lightness: Option<f64>,
}

/// Named filter sets selectable with `--preset`.
pub const PRESETS: &[(&str, FilterConfig)] = &[
    ("highContrast", FilterConfig { contrast: Some(0.2), ..FilterConfig::NONE }),
    ("lowContrast", FilterConfig { contrast: Some(-0.15), ..FilterConfig::NONE }),
    ("muted", FilterConfig { saturation: Some(-0.3), ..FilterConfig::NONE }),
    ("vivid", FilterConfig { saturation: Some(0.25), ..FilterConfig::NONE }),
    (
        "warm",
        FilterConfig {
            hue_shift: Some(-10.0),
            saturation: Some(0.05),
            ..FilterConfig::NONE
        },
    ),
    (
        "cool",
        FilterConfig {
            hue_shift: Some(10.0),
            saturation: Some(0.05),
            ..FilterConfig::NONE
        },
    ),
    ("dim", FilterConfig { brightness: Some(-0.1), ..FilterConfig::NONE }),
    ("bright", FilterConfig { brightness: Some(0.1), ..FilterConfig::NONE }),
];

impl FilterConfig {
    /// A config with every option absent.
    pub const NONE: FilterConfig = FilterConfig {
        contrast: None,
        brightness: None,
        saturation: None,
        hue_shift: None,
        foreground_lightness: None,
        background_lightness: None,
    };

    /// Looks up a preset by name.
    pub fn preset(name: &str) -> Option<FilterConfig> {
        PRESETS
            .iter()
            .find(|(preset, _)| *preset == name)
            .map(|(_, config)| *config)
    }

    pub fn preset_names() -> impl Iterator<Item = &'static str> {
        PRESETS.iter().map(|(name, _)| *name)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Shallow merge: options present in `self` win over `lower`.
    pub fn merged_over(&self, lower: &FilterConfig) -> FilterConfig {
        FilterConfig {
            contrast: self.contrast.or(lower.contrast),
            brightness: self.brightness.or(lower.brightness),
            saturation: self.saturation.or(lower.saturation),
            hue_shift: self.hue_shift.or(lower.hue_shift),
            foreground_lightness: self.foreground_lightness.or(lower.foreground_lightness),
            background_lightness: self.background_lightness.or(lower.background_lightness),
        }
    }

    /// Combines layers from lowest to highest precedence.
    pub fn layered<'a>(layers: impl IntoIterator<Item = Option<&'a FilterConfig>>) -> FilterConfig {
        layers
            .into_iter()
            .flatten()
            .fold(FilterConfig::NONE, |acc, layer| layer.merged_over(&acc))
    }

    /// Applies every present option to one color. Alpha is preserved.
    pub fn apply(&self, color: Color) -> Color {
        if self.is_empty() {
            return color;
        }

        // Foreground/background classification uses the unfiltered color,
        // and the lightness delta lands before every other adjustment.
        let is_foreground = color.luminosity() > 0.5;
        let mut hsl = color.to_hsl();

        let lightness = if is_foreground {
            self.foreground_lightness
        } else {
            self.background_lightness
        };
        if let Some(delta) = lightness {
            hsl.l = clamp_percent(hsl.l + delta * 50.0);
        }
        if let Some(contrast) = self.contrast {
            hsl.l = clamp_percent(50.0 + (hsl.l - 50.0) * (1.0 + contrast));
        }
        if let Some(brightness) = self.brightness {
            hsl.l = clamp_percent(hsl.l + brightness * 50.0);
        }
        if let Some(saturation) = self.saturation {
            hsl.s = if saturation > 0.0 {
                clamp_percent(hsl.s + (100.0 - hsl.s) * saturation)
            } else {
                clamp_percent(hsl.s * (1.0 + saturation))
            };
        }
        if let Some(shift) = self.hue_shift {
            hsl.h = (hsl.h + shift).rem_euclid(360.0);
        }
        Color::from_hsl(hsl, color.a)
    }

    /// Applies the filters to every resolved color.
    pub fn apply_all(&self, resolved: ResolvedTokens) -> ResolvedTokens {
        if self.is_empty() {
            return resolved;
        }
        resolved.map_colors(|c| self.apply(c))
    }
}

fn clamp_percent(v: f64) -> f64 {
    v.clamp(0.0, 100.0)
}
