//! Semantic token modifiers and the rules that style them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cascade::Transform;
use crate::color::Color;

/// Modifiers an editor may attach to a semantic token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticModifier {
    Declaration,
    Documentation,
    Readonly,
    Static,
    Abstract,
    Deprecated,
    Modification,
    Async,
}

impl SemanticModifier {
    pub const ALL: [SemanticModifier; 8] = [
        SemanticModifier::Declaration,
        SemanticModifier::Documentation,
        SemanticModifier::Readonly,
        SemanticModifier::Static,
        SemanticModifier::Abstract,
        SemanticModifier::Deprecated,
        SemanticModifier::Modification,
        SemanticModifier::Async,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticModifier::Declaration => "declaration",
            SemanticModifier::Documentation => "documentation",
            SemanticModifier::Readonly => "readonly",
            SemanticModifier::Static => "static",
            SemanticModifier::Abstract => "abstract",
            SemanticModifier::Deprecated => "deprecated",
            SemanticModifier::Modification => "modification",
            SemanticModifier::Async => "async",
        }
    }
}

impl fmt::Display for SemanticModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemanticModifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SemanticModifier::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<_> = SemanticModifier::ALL.iter().map(|m| m.as_str()).collect();
                format!("unknown modifier '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// Foreground and font style for a token.
///
/// An empty `font_style` is meaningful: it clears styling inherited from a
/// broader rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenStyle {
    pub foreground: Option<Color>,
    pub font_style: Option<String>,
}

impl TokenStyle {
    pub fn foreground(color: Color) -> Self {
        TokenStyle {
            foreground: Some(color),
            font_style: None,
        }
    }

    pub fn font_style(style: impl Into<String>) -> Self {
        TokenStyle {
            foreground: None,
            font_style: Some(style.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.foreground.is_none() && self.font_style.is_none()
    }
}

/// How tokens carrying a modifier are styled.
///
/// `global` produces one wildcard entry (`*.deprecated`); `transform`
/// derives a per-token-type color from each type's base color. Either, both
/// or neither may be set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModifierRule {
    pub global: Option<TokenStyle>,
    pub transform: Option<Transform>,
}

impl ModifierRule {
    pub fn global(style: TokenStyle) -> Self {
        ModifierRule {
            global: Some(style),
            transform: None,
        }
    }

    pub fn transform(transform: Transform) -> Self {
        ModifierRule {
            global: None,
            transform: Some(transform),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for modifier in SemanticModifier::ALL {
            assert_eq!(modifier.as_str().parse::<SemanticModifier>(), Ok(modifier));
        }
    }

    #[test]
    fn unknown_name_lists_choices() {
        let err = "bold".parse::<SemanticModifier>().unwrap_err();
        assert!(err.contains("deprecated"));
    }
}
