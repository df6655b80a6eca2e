//! Build configuration: which themes to build and where to write them.
//!
//! ```yaml
//! author: Jane Doe
//! themes:
//!   - theme: slate                 # built-in slug or path to a theme YAML
//!     output: dist/slate.json
//!     base: themes/legacy.jsonc    # optional, migrated into the output
//!     zed_output: zed/themes/slate.json
//!     filters: { contrast: 0.1 }
//! ```
//!
//! Relative paths are resolved against the directory holding the config
//! file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tinct_core::FilterConfig;

use crate::themes::{BuiltinTheme, BUILTIN};

pub const DEFAULT_AUTHOR: &str = "tinct";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("config {} lists no themes", path.display())]
    Empty { path: PathBuf },
}

/// One theme to build.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Built-in slug, or a path to a theme YAML file.
    pub theme: String,
    /// Where the VS Code theme is written.
    pub output: PathBuf,
    /// Existing VS Code theme to migrate into the output.
    #[serde(default)]
    pub base: Option<PathBuf>,
    #[serde(default)]
    pub zed_output: Option<PathBuf>,
    /// Filters layered over the theme's own and under the command line's.
    #[serde(default)]
    pub filters: Option<FilterConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    #[serde(default = "default_author")]
    pub author: String,
    pub themes: Vec<ThemeConfig>,
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

impl BuildConfig {
    /// Every built-in theme, written under `dist/` and `zed/themes/`.
    pub fn builtin() -> Self {
        BuildConfig {
            author: default_author(),
            themes: BUILTIN
                .iter()
                .map(|theme| ThemeConfig {
                    theme: theme.slug.to_string(),
                    output: PathBuf::from(format!("dist/{}.json", theme.slug)),
                    base: None,
                    zed_output: Some(PathBuf::from(format!("zed/themes/{}.json", theme.slug))),
                    filters: None,
                })
                .collect(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: BuildConfig = serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if config.themes.is_empty() {
            return Err(ConfigError::Empty {
                path: path.to_path_buf(),
            });
        }
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(dir))
    }

    /// Resolves every relative path against `dir`.
    ///
    /// Theme references that name a built-in are left alone.
    pub fn relative_to(mut self, dir: &Path) -> Self {
        for entry in &mut self.themes {
            if BuiltinTheme::find(&entry.theme).is_none() {
                entry.theme = dir.join(&entry.theme).to_string_lossy().into_owned();
            }
            entry.output = dir.join(&entry.output);
            entry.base = entry.base.as_ref().map(|base| dir.join(base));
            entry.zed_output = entry.zed_output.as_ref().map(|zed| dir.join(zed));
        }
        self
    }

    /// Keeps only the themes whose reference is in `names`. An empty list
    /// keeps everything.
    pub fn select(mut self, names: &[String]) -> Self {
        if !names.is_empty() {
            self.themes.retain(|entry| {
                let slug = Path::new(&entry.theme)
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .unwrap_or(&entry.theme);
                names.iter().any(|name| name == &entry.theme || name == slug)
            });
        }
        self
    }
}
