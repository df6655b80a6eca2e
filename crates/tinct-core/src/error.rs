//! Error types for theme resolution and loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that make a theme impossible to build.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// No value, category default or ancestor default covers the path.
    #[error("no value or default resolves '{path}'")]
    Unresolved { path: String },

    /// A derived value has no explicit input and nothing to inherit.
    #[error("derived value at '{path}' has no input to derive from")]
    MissingInput { path: String },

    /// Aliases or derived inputs refer back to themselves.
    #[error("cycle while resolving: {}", chain.join(" -> "))]
    Cycle { chain: Vec<String> },

    /// A `palette.<name>` reference names no palette entry.
    #[error("unknown palette color '{name}'")]
    UnknownPaletteColor { name: String },

    /// The theme definition is structurally wrong.
    #[error("invalid theme definition at '{path}': {message}")]
    Invalid { path: String, message: String },

    /// The theme source is not valid YAML.
    #[error("failed to parse theme{}: {source}", .file.as_ref().map(|p| format!(" {}", p.display())).unwrap_or_default())]
    Parse {
        file: Option<PathBuf>,
        #[source]
        source: serde_yaml::Error,
    },

    /// The theme file could not be read.
    #[error("failed to read theme {}: {source}", .file.display())]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ThemeError {
    pub(crate) fn invalid(path: impl Into<String>, message: impl Into<String>) -> Self {
        ThemeError::Invalid {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;

/// Why a base theme could not be used.
///
/// These never abort a build: the merge engine logs them and falls back to
/// emitting the generated theme as-is.
#[derive(Debug, Error)]
pub enum BaseThemeError {
    #[error("cannot read base theme {}: {source}", .file.display())]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("base theme is not valid JSON after stripping comments: {0}")]
    Json(#[from] serde_json::Error),
}
