//! Property-based tests for cascade resolution.

use proptest::prelude::*;
use tinct_core::cascade::{Cascade, ColorSource, Node, TokenCategory};
use tinct_core::{Color, Palette, ThemeDefinition};

// ============================================================================
// Strategies
// ============================================================================

const SEGMENTS: &[&str] = &["tokens", "ui", "literals", "string", "default", "a"];

fn color() -> impl Strategy<Value = Color> {
    any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Color::rgb(r, g, b))
}

fn segment() -> impl Strategy<Value = String> {
    prop::sample::select(SEGMENTS).prop_map(String::from)
}

fn path() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 0..5).prop_map(|segments| segments.join("."))
}

/// Arbitrary trees of literal values, with or without defaults at any level.
fn tree() -> impl Strategy<Value = TokenCategory> {
    let leaf = prop::option::of(color()).prop_map(|default| match default {
        Some(color) => TokenCategory::with_default(color),
        None => TokenCategory::new(),
    });
    leaf.prop_recursive(4, 32, 4, |inner| {
        let child = prop_oneof![color().prop_map(Node::from), inner.prop_map(Node::from)];
        (
            prop::option::of(color()),
            prop::collection::vec((segment(), child), 0..4),
        )
            .prop_map(|(default, children)| {
                let mut category = match default {
                    Some(color) => TokenCategory::with_default(color),
                    None => TokenCategory::new(),
                };
                for (key, node) in children {
                    // `default` is a reserved key, not a child.
                    if key != "default" {
                        category.insert(key, node);
                    }
                }
                category
            })
    })
}

fn rooted_tree() -> impl Strategy<Value = TokenCategory> {
    (tree(), color()).prop_map(|(mut root, default)| {
        if root.default_value().is_none() {
            root.set_default(default);
        }
        root
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// With a root default every path resolves.
    #[test]
    fn resolve_never_fails_with_root_default(root in rooted_tree(), path in path()) {
        let palette = Palette::new();
        let cascade = Cascade::new(&root, &palette);
        prop_assert!(cascade.resolve(&path).is_ok(), "failed to resolve '{}'", path);
    }

    /// An unknown child of any path inherits exactly what the path resolves to.
    #[test]
    fn unknown_child_inherits_parent(root in rooted_tree(), path in path()) {
        let palette = Palette::new();
        let cascade = Cascade::new(&root, &palette);
        let child = if path.is_empty() { "zzz".to_string() } else { format!("{}.zzz", path) };
        prop_assert_eq!(cascade.resolve(&child).unwrap(), cascade.resolve(&path).unwrap());
    }

    /// Results do not depend on the order in which paths are resolved.
    #[test]
    fn resolution_is_order_independent(
        root in rooted_tree(),
        paths in prop::collection::vec(path(), 1..8),
    ) {
        let palette = Palette::new();
        let cascade = Cascade::new(&root, &palette);
        let forward = cascade
            .resolve_sources(paths.iter().cloned().map(ColorSource::Cascade))
            .unwrap();
        let backward = cascade
            .resolve_sources(paths.iter().rev().cloned().map(ColorSource::Cascade))
            .unwrap();
        for path in &paths {
            prop_assert_eq!(forward.cascaded(path), backward.cascaded(path));
            prop_assert_eq!(forward.cascaded(path), Some(cascade.resolve(path).unwrap()));
        }
    }

    /// Exact lookups never invent values the tree does not define.
    #[test]
    fn exact_lookup_without_definitions_is_empty(path in path()) {
        let root = TokenCategory::new();
        let palette = Palette::new();
        let cascade = Cascade::new(&root, &palette);
        prop_assert_eq!(cascade.lookup_exact(&path).unwrap(), None);
    }
}

// ============================================================================
// Scenarios
// ============================================================================

fn hex(s: &str) -> Color {
    Color::parse(s).unwrap()
}

#[test]
fn literals_scenario_from_yaml() {
    let theme = ThemeDefinition::from_yaml(
        r##"
name: Scenario
default: "#111"
literals:
  default: "#222"
  string: "#333"
"##,
    )
    .unwrap();
    let cascade = theme.cascade();

    assert_eq!(cascade.resolve("literals.string").unwrap(), hex("#333"));
    assert_eq!(cascade.resolve("literals.number").unwrap(), hex("#222"));
    assert_eq!(cascade.resolve("operators").unwrap(), hex("#111"));
}

#[test]
fn derived_default_follows_parent_value() {
    let theme = ThemeDefinition::from_yaml(
        r##"
name: Derived
palette: { base: "#646464" }
tokens:
  default: base
  keywords:
    default: { lighten: 0.5 }
    control: { darken: 0.5, from: "@tokens" }
"##,
    )
    .unwrap();
    let cascade = theme.cascade();

    assert_eq!(cascade.resolve("tokens.keywords").unwrap(), hex("#969696"));
    assert_eq!(cascade.resolve("tokens.keywords.import").unwrap(), hex("#969696"));
    assert_eq!(cascade.resolve("tokens.keywords.control").unwrap(), hex("#323232"));
}

#[test]
fn alias_cycle_is_reported() {
    let theme = ThemeDefinition::from_yaml(
        r##"
name: Cycle
default: "#000"
a: "@b"
b: "@a"
"##,
    )
    .unwrap();
    let err = theme.cascade().resolve("a").unwrap_err();
    assert!(matches!(err, tinct_core::ThemeError::Cycle { .. }), "{}", err);
}
