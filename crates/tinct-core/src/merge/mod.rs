//! Migrating an existing VS Code theme onto generated output.
//!
//! A base theme is a hand-maintained (often JSONC) theme file. [`merge`]
//! keeps everything in it that the generator does not produce, and lets
//! generated values win wherever both define the same thing:
//!
//! - `colors` and `semanticTokenColors` are deep-merged key by key.
//! - `tokenColors` keeps every base rule that shares no scope with a
//!   generated rule; generated rules come first.
//!
//! Base colors are never filtered: they are carried through exactly as
//! written.

pub mod jsonc;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::BaseThemeError;
use crate::integrations::vscode::{TokenColorRule, VsCodeTheme};

/// The parts of a base theme the merge engine reads.
///
/// Any other top-level fields in the file are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseTheme {
    #[serde(default)]
    pub colors: Map<String, Value>,
    #[serde(default, rename = "tokenColors")]
    pub token_colors: Vec<TokenColorRule>,
    #[serde(default, rename = "semanticTokenColors")]
    pub semantic_token_colors: Map<String, Value>,
}

impl BaseTheme {
    /// Parses JSONC text.
    pub fn parse(text: &str) -> Result<Self, BaseThemeError> {
        Ok(serde_json::from_str(&jsonc::strip(text))?)
    }

    /// Reads and parses a base theme file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BaseThemeError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| BaseThemeError::Io {
            file: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }
}

/// Loads a base theme, logging and discarding any failure.
///
/// A missing or unreadable base must never stop a build; the caller then
/// writes the generated theme unmerged.
pub fn load_base(path: &Path) -> Option<BaseTheme> {
    match BaseTheme::load(path) {
        Ok(base) => Some(base),
        Err(err) => {
            tracing::warn!(path = %path.display(), "ignoring base theme: {}", err);
            None
        }
    }
}

/// Recursively merges `overlay` into `base`.
///
/// Nested objects merge key by key. For any other value the overlay wins,
/// except that a `null` overlay never replaces anything. Keys keep their
/// position in `base`; new keys are appended in overlay order.
pub fn deep_merge(mut base: Map<String, Value>, overlay: Map<String, Value>) -> Map<String, Value> {
    for (key, value) in overlay {
        match value {
            Value::Null => {}
            Value::Object(incoming) => match base.get_mut(&key) {
                Some(Value::Object(existing)) => {
                    let merged = deep_merge(std::mem::take(existing), incoming);
                    *existing = merged;
                }
                _ => {
                    base.insert(key, Value::Object(incoming));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
    base
}

/// Combines base and generated `tokenColors`.
///
/// A base rule is dropped when any of its scope identifiers is also targeted
/// by a generated rule. Rules without a scope (global settings) always
/// survive.
pub fn merge_token_colors(base: Vec<TokenColorRule>, generated: Vec<TokenColorRule>) -> Vec<TokenColorRule> {
    let claimed: HashSet<String> = generated
        .iter()
        .flat_map(TokenColorRule::scope_identifiers)
        .collect();

    let survivors: Vec<TokenColorRule> = base
        .into_iter()
        .filter(|rule| {
            let superseded = rule
                .scope_identifiers()
                .iter()
                .any(|scope| claimed.contains(scope));
            if superseded {
                tracing::debug!(
                    rule = rule.name.as_deref().unwrap_or("<unnamed>"),
                    scopes = ?rule.scope_identifiers(),
                    "base token rule superseded"
                );
            }
            !superseded
        })
        .collect();

    let mut merged = generated;
    merged.extend(survivors);
    merged
}

/// Merges `generated` onto `base`, or returns it untouched without a base.
///
/// Name, type and the semantic highlighting flag always come from the
/// generated theme.
pub fn merge(base: Option<BaseTheme>, generated: VsCodeTheme) -> VsCodeTheme {
    let Some(base) = base else {
        return generated;
    };
    VsCodeTheme {
        colors: deep_merge(base.colors, generated.colors),
        token_colors: merge_token_colors(base.token_colors, generated.token_colors),
        semantic_token_colors: deep_merge(base.semantic_token_colors, generated.semantic_token_colors),
        ..generated
    }
}
