//! Turning resolved colors into editor-addressable fragments.
//!
//! Each editor target describes itself with a static [`ScopeMapping`]: which
//! editor color keys, syntax scopes and semantic token types exist, and
//! where in the theme tree each one reads its color from. A [`Lookup`]
//! lists exact candidates first and an optional cascading path last, so
//! `ui.overrides.editor.background` can win over `ui.backgrounds.surface`
//! only when the theme actually sets it.
//!
//! [`generate`] is pure: it never resolves anything itself, it only reads
//! the [`ResolvedTokens`] produced for [`ScopeMapping::sources`].

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::cascade::{ColorSource, ResolvedTokens};
use crate::color::{Color, ColorOp};
use crate::error::Result;
use crate::filter::FilterConfig;
use crate::modifier::{SemanticModifier, TokenStyle};
use crate::theme::ThemeDefinition;

// ─── Mapping tables ─────────────────────────────────────────────────────────

/// Where an editor entry reads its color from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup {
    /// Paths that only match explicitly defined values, tried in order.
    pub exact: &'static [&'static str],
    /// Cascading path tried last. Must resolve.
    pub cascade: Option<&'static str>,
}

impl Lookup {
    /// Cascade from `path`.
    pub const fn at(path: &'static str) -> Self {
        Lookup {
            exact: &[],
            cascade: Some(path),
        }
    }

    /// Try `exact` paths, then cascade from `path`.
    pub const fn first(exact: &'static [&'static str], path: &'static str) -> Self {
        Lookup {
            exact,
            cascade: Some(path),
        }
    }

    /// Only explicitly defined values; the entry is dropped otherwise.
    pub const fn only(exact: &'static [&'static str]) -> Self {
        Lookup {
            exact,
            cascade: None,
        }
    }

    pub fn sources(&self) -> impl Iterator<Item = ColorSource> + '_ {
        self.exact
            .iter()
            .map(|p| ColorSource::Exact(p.to_string()))
            .chain(self.cascade.map(|p| ColorSource::Cascade(p.to_string())))
    }

    /// The first candidate present in `resolved`.
    pub fn find(&self, resolved: &ResolvedTokens) -> Option<Color> {
        self.exact
            .iter()
            .find_map(|p| resolved.exact(p))
            .or_else(|| self.cascade.and_then(|p| resolved.cascaded(p)))
    }
}

/// An editor UI color key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorEntry {
    pub key: &'static str,
    pub lookup: Lookup,
    /// Applied to the looked-up color, e.g. a translucent variant.
    pub op: Option<ColorOp>,
}

impl ColorEntry {
    pub const fn new(key: &'static str, lookup: Lookup) -> Self {
        ColorEntry {
            key,
            lookup,
            op: None,
        }
    }

    pub const fn alpha(key: &'static str, lookup: Lookup, alpha: f64) -> Self {
        ColorEntry {
            key,
            lookup,
            op: Some(ColorOp::Alpha(alpha)),
        }
    }

    pub fn color(&self, resolved: &ResolvedTokens) -> Option<Color> {
        let color = self.lookup.find(resolved)?;
        Some(match &self.op {
            Some(op) => op.apply(color),
            None => color,
        })
    }
}

/// A syntax (TextMate) scope rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxRule {
    pub scope: &'static str,
    pub lookup: Lookup,
    pub font_style: Option<&'static str>,
}

impl SyntaxRule {
    pub const fn new(scope: &'static str, path: &'static str) -> Self {
        SyntaxRule {
            scope,
            lookup: Lookup::at(path),
            font_style: None,
        }
    }

    pub const fn styled(scope: &'static str, path: &'static str, font_style: &'static str) -> Self {
        SyntaxRule {
            scope,
            lookup: Lookup::at(path),
            font_style: Some(font_style),
        }
    }
}

/// A semantic token type and where its base color comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticEntry {
    pub token_type: &'static str,
    pub lookup: Lookup,
}

/// Everything a target needs resolved.
#[derive(Debug, Clone, Copy)]
pub struct ScopeMapping {
    pub colors: &'static [ColorEntry],
    pub syntax: &'static [SyntaxRule],
    pub semantic: &'static [SemanticEntry],
}

impl ScopeMapping {
    /// Every source the generator may read, including the
    /// `semantic.<type>.<modifier>` override paths.
    pub fn sources(&self) -> Vec<ColorSource> {
        let mut sources: Vec<ColorSource> = self
            .colors
            .iter()
            .flat_map(|e| e.lookup.sources())
            .chain(self.syntax.iter().flat_map(|r| r.lookup.sources()))
            .chain(self.semantic.iter().flat_map(|s| s.lookup.sources()))
            .collect();
        for entry in self.semantic {
            for modifier in SemanticModifier::ALL {
                sources.push(ColorSource::Exact(override_path(entry.token_type, modifier)));
            }
        }
        sources
    }
}

fn override_path(token_type: &str, modifier: SemanticModifier) -> String {
    format!("semantic.{}.{}", token_type, modifier)
}

// ─── Resolution ─────────────────────────────────────────────────────────────

/// Resolves `sources` against `theme` and runs the filters over the result.
pub fn resolve_filtered(
    theme: &ThemeDefinition,
    sources: Vec<ColorSource>,
    filters: &FilterConfig,
) -> Result<ResolvedTokens> {
    let resolved = theme.cascade().resolve_sources(sources)?;
    Ok(filters.apply_all(resolved))
}

/// A modifier rule with every color it needs already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundModifier {
    pub modifier: SemanticModifier,
    pub global: Option<TokenStyle>,
    pub op: Option<ColorOp>,
}

/// Binds the theme's modifier rules, filtering every concrete color they
/// carry so they agree with the filtered token colors.
pub fn bind_modifiers(theme: &ThemeDefinition, filters: &FilterConfig) -> Result<Vec<BoundModifier>> {
    let cascade = theme.cascade();
    theme
        .modifiers
        .iter()
        .map(|(modifier, rule)| -> Result<BoundModifier> {
            let global = rule.global.as_ref().map(|style| TokenStyle {
                foreground: style.foreground.map(|c| filters.apply(c)),
                font_style: style.font_style.clone(),
            });
            let op = match &rule.transform {
                Some(transform) => Some(match cascade.bind(transform)? {
                    ColorOp::Mix { with, amount } => ColorOp::Mix {
                        with: filters.apply(with),
                        amount,
                    },
                    op => op,
                }),
                None => None,
            };
            Ok(BoundModifier {
                modifier: *modifier,
                global,
                op,
            })
        })
        .collect()
}

// ─── Generation ─────────────────────────────────────────────────────────────

/// A syntax scope and its style.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopedStyle {
    pub scope: String,
    pub style: TokenStyle,
}

/// Target-neutral output of [`generate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragments {
    pub colors: IndexMap<String, Color>,
    pub syntax: Vec<ScopedStyle>,
    pub semantic: IndexMap<String, TokenStyle>,
}

/// Produces editor fragments from resolved colors.
///
/// Entries whose lookup finds nothing are left out, never emitted empty.
/// Modifier rules run in order: a global style adds `*.modifier`, a
/// transform adds `type.modifier` for every semantic type that resolved.
/// Explicit `semantic.<type>.<modifier>` values are applied last and win.
pub fn generate(resolved: &ResolvedTokens, mapping: &ScopeMapping, modifiers: &[BoundModifier]) -> Fragments {
    let mut fragments = Fragments::default();

    for entry in mapping.colors {
        if let Some(color) = entry.color(resolved) {
            fragments.colors.insert(entry.key.to_string(), color);
        }
    }

    for rule in mapping.syntax {
        if let Some(color) = rule.lookup.find(resolved) {
            fragments.syntax.push(ScopedStyle {
                scope: rule.scope.to_string(),
                style: TokenStyle {
                    foreground: Some(color),
                    font_style: rule.font_style.map(str::to_string),
                },
            });
        }
    }

    let bases: Vec<(&str, Color)> = mapping
        .semantic
        .iter()
        .filter_map(|entry| entry.lookup.find(resolved).map(|c| (entry.token_type, c)))
        .collect();
    for (token_type, color) in &bases {
        fragments
            .semantic
            .insert(token_type.to_string(), TokenStyle::foreground(*color));
    }

    for rule in modifiers {
        if let Some(global) = &rule.global {
            fragments
                .semantic
                .insert(format!("*.{}", rule.modifier), global.clone());
        }
        if let Some(op) = &rule.op {
            for (token_type, base) in &bases {
                fragments.semantic.insert(
                    format!("{}.{}", token_type, rule.modifier),
                    TokenStyle::foreground(op.apply(*base)),
                );
            }
        }
    }

    for (token_type, _) in &bases {
        for modifier in SemanticModifier::ALL {
            if let Some(color) = resolved.exact(&override_path(token_type, modifier)) {
                fragments.semantic.insert(
                    format!("{}.{}", token_type, modifier),
                    TokenStyle::foreground(color),
                );
            }
        }
    }

    fragments
}

/// Serializes a style in its reduced form: a bare color string when only a
/// foreground is set, otherwise an object with the fields that are present.
pub fn style_value(style: &TokenStyle) -> Value {
    match style {
        TokenStyle {
            foreground: Some(color),
            font_style: None,
        } => Value::String(color.to_string()),
        TokenStyle {
            foreground,
            font_style,
        } => {
            let mut map = Map::new();
            if let Some(color) = foreground {
                map.insert("foreground".into(), Value::String(color.to_string()));
            }
            if let Some(font_style) = font_style {
                map.insert("fontStyle".into(), Value::String(font_style.clone()));
            }
            Value::Object(map)
        }
    }
}
