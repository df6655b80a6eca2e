use std::path::PathBuf;

use clap::{Args, Parser};
use tinct_core::FilterConfig;

#[derive(Debug, Parser)]
#[command(name = "tinct")]
#[command(about = "Generate VS Code and Zed color themes from cascading theme definitions")]
#[command(version)]
pub struct Cli {
    /// Build config (defaults to every built-in theme)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Build only this theme (repeatable)
    #[arg(long = "theme", value_name = "NAME")]
    pub themes: Vec<String>,

    /// List the filter presets and exit
    #[arg(long)]
    pub list_presets: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Filter options, applied to every theme over any theme or config filters.
#[derive(Debug, Default, Clone, Args)]
pub struct FilterArgs {
    /// Adjust contrast, -1 to 1
    #[arg(long, allow_negative_numbers = true)]
    pub contrast: Option<f64>,

    /// Adjust brightness, -1 to 1
    #[arg(long, allow_negative_numbers = true)]
    pub brightness: Option<f64>,

    /// Adjust saturation, -1 to 1
    #[arg(long, allow_negative_numbers = true)]
    pub saturation: Option<f64>,

    /// Shift hue in degrees
    #[arg(long, allow_negative_numbers = true, value_name = "DEGREES")]
    pub hue_shift: Option<f64>,

    /// Adjust foreground lightness, -1 to 1
    #[arg(long, allow_negative_numbers = true)]
    pub fg_lightness: Option<f64>,

    /// Adjust background lightness, -1 to 1
    #[arg(long, allow_negative_numbers = true)]
    pub bg_lightness: Option<f64>,

    /// Start from a named filter preset (see --list-presets)
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,
}

impl FilterArgs {
    /// The command-line filter layer, or `None` when nothing was given.
    ///
    /// The preset is expanded first and explicit flags override it. An
    /// unknown preset is reported and ignored.
    pub fn to_filters(&self) -> Option<FilterConfig> {
        let preset = match self.preset.as_deref() {
            Some(name) => FilterConfig::preset(name).or_else(|| {
                let available: Vec<_> = FilterConfig::preset_names().collect();
                tracing::warn!("Unknown preset: {}. Available: {}", name, available.join(", "));
                None
            }),
            None => None,
        };

        let explicit = FilterConfig {
            contrast: self.contrast,
            brightness: self.brightness,
            saturation: self.saturation,
            hue_shift: self.hue_shift,
            foreground_lightness: self.fg_lightness,
            background_lightness: self.bg_lightness,
        };
        let filters = FilterConfig::layered([preset.as_ref(), Some(&explicit)]);
        (!filters.is_empty()).then_some(filters)
    }
}
