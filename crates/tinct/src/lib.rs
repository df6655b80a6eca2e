//! # Tinct - Editor Theme Builder
//!
//! The command-line front end for [`tinct_core`]: built-in themes, the
//! shared palette, build configs, and the parallel build that writes VS
//! Code and Zed theme files.
//!
//! ```rust,no_run
//! use tinct::config::BuildConfig;
//!
//! let built = tinct::build::build_all(&BuildConfig::builtin(), None).unwrap();
//! for theme in built {
//!     println!("{} -> {}", theme.name, theme.output.display());
//! }
//! ```

pub mod build;
pub mod cli;
pub mod config;
pub mod palette;
pub mod themes;

pub use build::{build_all, build_theme, Built};
pub use cli::{Cli, FilterArgs};
pub use config::{BuildConfig, ConfigError, ThemeConfig};
