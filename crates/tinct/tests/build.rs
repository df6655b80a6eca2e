//! End-to-end builds into temporary directories.

use std::fs;
use std::path::Path;

use serde_json::Value;
use serial_test::serial;
use tempfile::TempDir;
use tinct::config::{BuildConfig, ThemeConfig};
use tinct::themes::BUILTIN;
use tinct::{build_all, build_theme};
use tinct_core::{zed, FilterConfig, VsCodeTheme};

// ============================================================================
// Test helpers
// ============================================================================

fn entry(theme: &str, dir: &Path) -> ThemeConfig {
    ThemeConfig {
        theme: theme.to_string(),
        output: dir.join(format!("dist/{}.json", theme)),
        base: None,
        zed_output: None,
        filters: None,
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn comment_rules(theme: &Value) -> Vec<&Value> {
    theme["tokenColors"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|rule| match &rule["scope"] {
            Value::String(s) => s.split(',').any(|s| s.trim() == "comment"),
            Value::Array(scopes) => scopes.iter().any(|s| s == "comment"),
            _ => false,
        })
        .collect()
}

// ============================================================================
// Built-in themes
// ============================================================================

#[test]
fn builtin_themes_resolve_every_mapping_entry() {
    let slugs: Vec<_> = BUILTIN.iter().map(|builtin| builtin.slug).collect();
    assert_eq!(
        slugs,
        ["minted", "slate", "apathy", "apathetic-ocean", "apathy-experimental"]
    );

    for builtin in BUILTIN {
        let theme = builtin.load().unwrap();
        let vscode = VsCodeTheme::generate(&theme, &FilterConfig::NONE)
            .unwrap_or_else(|e| panic!("{} (VS Code): {}", builtin.slug, e));
        assert!(vscode.colors.contains_key("editor.background"));
        assert!(!vscode.token_colors.is_empty());
        assert!(vscode.semantic_token_colors.contains_key("variable"));

        let family = zed::generate(&theme, &FilterConfig::NONE, "tinct")
            .unwrap_or_else(|e| panic!("{} (Zed): {}", builtin.slug, e));
        assert_eq!(family.themes.len(), 1);
    }
}

#[test]
fn builtin_theme_filters_apply() {
    let theme = BUILTIN[0].load().unwrap();
    let white = FilterConfig {
        brightness: Some(2.0),
        ..FilterConfig::NONE
    };
    let vscode = VsCodeTheme::generate(&theme, &white).unwrap();
    assert_eq!(vscode.colors["editor.background"], "#ffffff");
}

// ============================================================================
// Builds
// ============================================================================

#[test]
fn fresh_build_writes_both_editors() {
    let dir = TempDir::new().unwrap();
    let mut slate = entry("slate", dir.path());
    slate.zed_output = Some(dir.path().join("zed/slate.json"));

    let built = build_theme(&slate, "Someone", None).unwrap();
    assert_eq!(built.name, "Slate");
    assert!(!built.merged);

    let text = fs::read_to_string(&slate.output).unwrap();
    assert!(text.starts_with("{\n\t\"name\": \"Slate\""));
    assert!(text.ends_with("}\n"));

    let vscode = read_json(&slate.output);
    assert_eq!(vscode["type"], "dark");
    assert_eq!(vscode["semanticHighlighting"], true);

    let zed = read_json(&dir.path().join("zed/slate.json"));
    assert_eq!(zed["name"], "Slate Theme Family");
    assert_eq!(zed["author"], "Someone");
    assert_eq!(zed["themes"][0]["appearance"], "dark");
}

#[test]
fn rebuilding_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let minted = entry("minted", dir.path());

    build_theme(&minted, "tinct", None).unwrap();
    let first = fs::read(&minted.output).unwrap();
    build_theme(&minted, "tinct", None).unwrap();
    assert_eq!(fs::read(&minted.output).unwrap(), first);
}

#[test]
fn migration_keeps_base_only_content() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("legacy.jsonc");
    fs::write(
        &base,
        r##"{
    // hand-tuned before the generator existed
    "name": "Legacy",
    "colors": {
        "tab.border": "#123456",
        "editor.background": "#000000",
    },
    "tokenColors": [
        { "scope": "comment", "settings": { "foreground": "#ff0000" } },
        { "name": "custom", "scope": "markup.other.custom", "settings": { "foreground": "#00ff00" } },
    ],
    "semanticTokenColors": { "label": "#abcdef" }
}"##,
    )
    .unwrap();

    let mut slate = entry("slate", dir.path());
    slate.base = Some(base);
    let built = build_theme(&slate, "tinct", None).unwrap();
    assert!(built.merged);

    let merged = read_json(&slate.output);
    assert_eq!(merged["name"], "Slate");
    assert_eq!(merged["colors"]["tab.border"], "#123456");
    assert_ne!(merged["colors"]["editor.background"], "#000000");
    assert_eq!(merged["semanticTokenColors"]["label"], "#abcdef");

    let comments = comment_rules(&merged);
    assert_eq!(comments.len(), 1);
    assert_ne!(comments[0]["settings"]["foreground"], "#ff0000");
    let last = merged["tokenColors"].as_array().unwrap().last().unwrap();
    assert_eq!(last["name"], "custom");
}

#[test]
fn missing_base_falls_back_to_a_fresh_build() {
    let dir = TempDir::new().unwrap();
    let mut slate = entry("slate", dir.path());
    slate.base = Some(dir.path().join("nowhere.jsonc"));

    let built = build_theme(&slate, "tinct", None).unwrap();
    assert!(!built.merged);
    assert!(slate.output.exists());
}

#[test]
fn filter_layers_stack_in_order() {
    let dir = TempDir::new().unwrap();
    let mut slate = entry("slate", dir.path());
    slate.filters = Some(FilterConfig {
        brightness: Some(-2.0),
        ..FilterConfig::NONE
    });

    build_theme(&slate, "tinct", None).unwrap();
    assert_eq!(read_json(&slate.output)["colors"]["editor.foreground"], "#000000");

    let cli = FilterConfig {
        brightness: Some(2.0),
        ..FilterConfig::NONE
    };
    build_theme(&slate, "tinct", Some(&cli)).unwrap();
    assert_eq!(read_json(&slate.output)["colors"]["editor.foreground"], "#ffffff");
}

#[test]
fn write_failure_fails_the_build_after_trying_everything() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let mut broken = entry("minted", dir.path());
    broken.output = blocker.join("minted.json");
    let good = entry("slate", dir.path());

    let config = BuildConfig {
        author: "tinct".into(),
        themes: vec![broken, good.clone()],
    };
    let err = build_all(&config, None).unwrap_err();
    assert!(err.to_string().contains("1 of 2 themes failed"));
    assert!(good.output.exists());
}

#[test]
fn user_theme_file_builds_from_a_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("mine.yaml"),
        "name: Mine\ntype: light\ndefault: \"#404040\"\ntokens:\n  comments: lavender\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("tinct.yaml"),
        "author: Someone\nthemes:\n  - theme: mine.yaml\n    output: out/mine.json\n",
    )
    .unwrap();

    let config = BuildConfig::load(&dir.path().join("tinct.yaml")).unwrap();
    let built = build_all(&config, None).unwrap();
    assert_eq!(built[0].name, "Mine");

    let theme = read_json(&dir.path().join("out/mine.json"));
    assert_eq!(theme["type"], "light");
    assert_eq!(theme["semanticTokenColors"]["comment"], "#c792ea");
}

#[test]
#[serial]
fn default_config_writes_relative_to_the_working_directory() {
    let dir = TempDir::new().unwrap();
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let result = build_all(&BuildConfig::builtin(), None);
    std::env::set_current_dir(previous).unwrap();

    assert_eq!(result.unwrap().len(), BUILTIN.len());
    for builtin in BUILTIN {
        assert!(dir.path().join(format!("dist/{}.json", builtin.slug)).exists());
        assert!(dir.path().join(format!("zed/themes/{}.json", builtin.slug)).exists());
    }
}
