//! # Tinct Core - Cascading Editor Theme Engine
//!
//! `tinct-core` turns a declarative theme (a palette plus a tree of token
//! colors with defaults) into editor theme files, and merges generated
//! output into an existing hand-written theme.
//!
//! This crate is the engine behind the `tinct` command-line tool, but it has
//! no filesystem opinions beyond loading inputs and can be embedded directly.
//!
//! ## Core Concepts
//!
//! - [`ThemeDefinition`]: name, variant, palette, cascade tree, modifiers and filters
//! - [`Cascade`]: resolves dotted paths with CSS-like specificity
//! - [`FilterConfig`]: global color adjustments (contrast, brightness, ...)
//! - [`VsCodeTheme`] and [`zed::generate`]: editor targets
//! - [`merge`]: migrates a base VS Code theme onto generated output
//!
//! ## Quick Start
//!
//! ```rust
//! use tinct_core::{FilterConfig, ThemeDefinition, VsCodeTheme};
//!
//! let theme = ThemeDefinition::from_yaml(r##"
//! name: Quick
//! type: dark
//! default: "#c0c0c0"
//! tokens:
//!   comments: "#707070"
//! "##).unwrap();
//!
//! let vscode = VsCodeTheme::generate(&theme, &FilterConfig::NONE).unwrap();
//! assert_eq!(vscode.semantic_token_colors["comment"], "#707070");
//!
//! let json = tinct_core::integrations::to_pretty_json(&vscode).unwrap();
//! assert!(json.ends_with("}\n"));
//! ```
//!
//! ## Resolution
//!
//! A path such as `tokens.literals.string` resolves to the value defined
//! there, or else to the `default` of the nearest category on the way down.
//! Values may be literals, aliases (`@tokens.strings`) or derived colors
//! (`{ lighten: 0.1 }`). See [`cascade`] for the full rules.

pub mod cascade;
pub mod color;
mod error;
pub mod filter;
pub mod integrations;
pub mod merge;
pub mod modifier;
pub mod palette;
pub mod scope;
pub mod theme;

// Error types
pub use error::{BaseThemeError, Result, ThemeError};

// Model exports
pub use cascade::{Cascade, ColorSpec, TokenCategory, TokenPath, Transform};
pub use color::{Color, ColorOp};
pub use modifier::{ModifierRule, SemanticModifier, TokenStyle};
pub use palette::Palette;
pub use theme::{ThemeDefinition, Variant};

// Pipeline exports
pub use filter::FilterConfig;
pub use integrations::vscode::VsCodeTheme;
pub use integrations::zed;
pub use merge::{merge, BaseTheme};
