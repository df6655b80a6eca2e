//! Laws of the base-theme merge engine and the generation pipeline around it.

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use tinct_core::cascade::{TokenCategory, Transform};
use tinct_core::integrations::to_pretty_json;
use tinct_core::integrations::vscode::{ScopeSelector, TokenColorRule};
use tinct_core::{
    merge, BaseTheme, Color, FilterConfig, ModifierRule, SemanticModifier, ThemeDefinition, Variant,
    VsCodeTheme,
};

// ============================================================================
// Strategies
// ============================================================================

const KEYS: &[&str] = &[
    "editor.background",
    "editor.foreground",
    "tab.border",
    "panel.border",
    "badge.background",
];
const SCOPES: &[&str] = &["comment", "string", "keyword", "constant.numeric", "variable"];

fn hex() -> impl Strategy<Value = Value> {
    any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Value::String(Color::rgb(r, g, b).to_string()))
}

fn color_map() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::vec((prop::sample::select(KEYS), hex()), 0..6)
        .prop_map(|entries| entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
}

fn rule() -> impl Strategy<Value = TokenColorRule> {
    (prop::collection::vec(prop::sample::select(SCOPES), 1..3), hex()).prop_map(|(scopes, color)| {
        let mut settings = Map::new();
        settings.insert("foreground".into(), color);
        TokenColorRule {
            name: None,
            scope: Some(ScopeSelector::One(scopes.join(", "))),
            settings,
            extra: Map::new(),
        }
    })
}

fn rules() -> impl Strategy<Value = Vec<TokenColorRule>> {
    prop::collection::vec(rule(), 0..6)
}

fn base() -> impl Strategy<Value = BaseTheme> {
    (color_map(), rules(), color_map()).prop_map(|(colors, token_colors, semantic_token_colors)| {
        BaseTheme {
            colors,
            token_colors,
            semantic_token_colors,
        }
    })
}

fn generated() -> impl Strategy<Value = VsCodeTheme> {
    (color_map(), rules(), color_map()).prop_map(|(colors, token_colors, semantic_token_colors)| {
        VsCodeTheme {
            name: "Generated".into(),
            variant: Variant::Dark,
            colors,
            token_colors,
            semantic_highlighting: true,
            semantic_token_colors,
        }
    })
}

fn as_base(theme: &VsCodeTheme) -> BaseTheme {
    BaseTheme {
        colors: theme.colors.clone(),
        token_colors: theme.token_colors.clone(),
        semantic_token_colors: theme.semantic_token_colors.clone(),
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Identical inputs give byte-identical output, and re-merging the
    /// output with the same generated theme changes nothing.
    #[test]
    fn merge_is_idempotent(base in base(), generated in generated()) {
        let once = merge(Some(base.clone()), generated.clone());
        let again = merge(Some(base), generated.clone());
        prop_assert_eq!(to_pretty_json(&once).unwrap(), to_pretty_json(&again).unwrap());

        let remerged = merge(Some(as_base(&once)), generated);
        prop_assert_eq!(remerged, once);
    }

    /// Generated values win every overlap; base-only keys survive.
    #[test]
    fn generated_colors_win_overlaps(base in base(), generated in generated()) {
        let merged = merge(Some(base.clone()), generated.clone());
        for (key, value) in &generated.colors {
            prop_assert_eq!(&merged.colors[key.as_str()], value);
        }
        for (key, value) in &base.colors {
            if !generated.colors.contains_key(key) {
                prop_assert_eq!(&merged.colors[key.as_str()], value);
            }
        }
    }

    /// No surviving base rule shares a scope with a generated rule, and
    /// generated rules come first in their original order.
    #[test]
    fn token_rules_merge_by_scope(base in base(), generated in generated()) {
        let merged = merge(Some(base.clone()), generated.clone());
        let count = generated.token_colors.len();
        prop_assert_eq!(&merged.token_colors[..count], &generated.token_colors[..]);

        let claimed: Vec<String> = generated
            .token_colors
            .iter()
            .flat_map(TokenColorRule::scope_identifiers)
            .collect();
        for survivor in &merged.token_colors[count..] {
            prop_assert!(base.token_colors.contains(survivor));
            for scope in survivor.scope_identifiers() {
                prop_assert!(!claimed.contains(&scope));
            }
        }
    }

    /// Merging nothing over a base keeps the base; merging over an empty
    /// base gives the generated colors.
    #[test]
    fn deep_merge_identities(base in base(), generated in generated()) {
        let empty = VsCodeTheme {
            colors: Map::new(),
            token_colors: Vec::new(),
            semantic_token_colors: Map::new(),
            ..generated.clone()
        };
        let kept = merge(Some(base.clone()), empty);
        prop_assert_eq!(kept.colors, base.colors);
        prop_assert_eq!(kept.token_colors, base.token_colors);

        let fresh = merge(Some(BaseTheme::default()), generated.clone());
        prop_assert_eq!(fresh.colors, generated.colors);
    }
}

// ============================================================================
// Scenarios
// ============================================================================

fn color(s: &str) -> Color {
    Color::parse(s).unwrap()
}

fn sample_theme() -> ThemeDefinition {
    let root = TokenCategory::with_default(color("#a7a4af")).category(
        "tokens",
        TokenCategory::new()
            .value("comments", color("#5c5866"))
            .value("variables", color("#e0def4")),
    );
    ThemeDefinition::new("Sample", Variant::Dark, root)
}

#[test]
fn generated_comment_rule_supersedes_base() {
    let base = BaseTheme::parse(
        r##"{
            "tokenColors": [
                { "scope": "comment", "settings": { "foreground": "#ff0000" } },
                { "scope": "markup.other.custom", "settings": { "foreground": "#00ff00" } }
            ]
        }"##,
    )
    .unwrap();
    let generated = VsCodeTheme::generate(&sample_theme(), &FilterConfig::NONE).unwrap();
    let merged = merge(Some(base), generated);

    let comments: Vec<_> = merged
        .token_colors
        .iter()
        .filter(|r| r.scope_identifiers().contains(&"comment".to_string()))
        .collect();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].settings["foreground"], "#5c5866");
    assert_eq!(
        merged.token_colors.last().unwrap().scope_identifiers(),
        ["markup.other.custom"]
    );
}

#[test]
fn base_colors_are_not_filtered() {
    let base = BaseTheme {
        colors: json!({ "tab.border": "#808080" }).as_object().cloned().unwrap(),
        ..BaseTheme::default()
    };
    let filters = FilterConfig {
        brightness: Some(1.0),
        ..FilterConfig::NONE
    };
    let generated = VsCodeTheme::generate(&sample_theme(), &filters).unwrap();
    let merged = merge(Some(base), generated);
    assert_eq!(merged.colors["tab.border"], "#808080");
    assert_eq!(merged.colors["foreground"], "#ffffff");
}

#[test]
fn empty_modifier_rule_adds_nothing() {
    let plain = VsCodeTheme::generate(&sample_theme(), &FilterConfig::NONE).unwrap();
    let with_rule = sample_theme().with_modifier(SemanticModifier::Static, ModifierRule::default());
    let generated = VsCodeTheme::generate(&with_rule, &FilterConfig::NONE).unwrap();

    assert_eq!(generated.semantic_token_colors, plain.semantic_token_colors);
    assert!(generated.semantic_token_colors.keys().all(|k| !k.ends_with(".static")));
}

#[test]
fn transform_modifier_adds_one_entry_per_semantic_type() {
    let theme = sample_theme().with_modifier(
        SemanticModifier::Readonly,
        ModifierRule::transform(Transform::Alpha(0.5)),
    );
    let generated = VsCodeTheme::generate(&theme, &FilterConfig::NONE).unwrap();
    let readonly = generated
        .semantic_token_colors
        .keys()
        .filter(|k| k.ends_with(".readonly"))
        .count();
    let bases = generated
        .semantic_token_colors
        .keys()
        .filter(|k| !k.contains('.'))
        .count();
    assert_eq!(readonly, bases);
    assert_eq!(generated.semantic_token_colors["variable.readonly"], "#e0def480");
}

#[test]
fn cli_filters_override_theme_filters() {
    let theme = FilterConfig {
        contrast: Some(0.1),
        ..FilterConfig::NONE
    };
    let cli = FilterConfig {
        contrast: Some(0.5),
        ..FilterConfig::NONE
    };
    let effective = FilterConfig::layered([Some(&theme), None, Some(&cli)]);
    assert_eq!(effective.contrast, Some(0.5));

    let without_cli = FilterConfig::layered([Some(&theme), None, None]);
    assert_eq!(without_cli.contrast, Some(0.1));
}
