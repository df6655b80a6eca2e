//! Theme definitions: a palette, a cascade tree and the knobs around them.
//!
//! A [`ThemeDefinition`] is the input to every generator. It is plain data:
//! building one (in code or from YAML) never evaluates a color, so defects
//! in the tree only surface when a path that needs them is resolved.
//!
//! # YAML format
//!
//! ```yaml
//! name: Slate
//! type: dark
//! palette:
//!   cyan: "#33b3cc"
//! filters:
//!   contrast: 0.1
//! modifiers:
//!   deprecated: { global: { fontStyle: strikethrough } }
//!   async: { transform: { lighten: 0.1 } }
//! extra_colors:
//!   "editorCursor.foreground": "#ffffff"
//!
//! default: "#a7a4af"
//! tokens:
//!   literals:
//!     default: cyan
//!     boolean: { lighten: 0.1 }
//! ```
//!
//! Everything other than the reserved keys (`name`, `type`, `palette`,
//! `filters`, `modifiers`, `semantic_highlighting`, `extra_colors`) is the
//! root of the cascade tree. See [`crate::cascade`] for how values resolve.

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::cascade::yaml::{describe, parse_category, parse_color, parse_transform};
use crate::cascade::{Cascade, TokenCategory, TokenPath};
use crate::color::Color;
use crate::error::{Result, ThemeError};
use crate::filter::FilterConfig;
use crate::modifier::{ModifierRule, SemanticModifier, TokenStyle};
use crate::palette::Palette;

const RESERVED_KEYS: &[&str] = &[
    "name",
    "type",
    "palette",
    "filters",
    "modifiers",
    "semantic_highlighting",
    "extra_colors",
];

/// Whether a theme is meant for a dark or a light background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Dark,
    Light,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Dark => "dark",
            Variant::Light => "light",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to generate a theme for any target.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeDefinition {
    pub name: String,
    pub variant: Variant,
    pub palette: Palette,
    pub root: TokenCategory,
    /// Modifier rules, applied in this order.
    pub modifiers: IndexMap<SemanticModifier, ModifierRule>,
    /// Filters declared by the theme itself (lowest precedence layer).
    pub filters: Option<FilterConfig>,
    pub semantic_highlighting: bool,
    /// Raw editor color keys emitted after, and over, the mapped ones.
    pub extra_colors: IndexMap<String, Color>,
}

impl ThemeDefinition {
    /// Creates a theme with an empty palette and no modifiers.
    pub fn new(name: impl Into<String>, variant: Variant, root: TokenCategory) -> Self {
        ThemeDefinition {
            name: name.into(),
            variant,
            palette: Palette::new(),
            root,
            modifiers: IndexMap::new(),
            filters: None,
            semantic_highlighting: true,
            extra_colors: IndexMap::new(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_modifier(mut self, modifier: SemanticModifier, rule: ModifierRule) -> Self {
        self.modifiers.insert(modifier, rule);
        self
    }

    pub fn with_filters(mut self, filters: FilterConfig) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn with_extra_color(mut self, key: impl Into<String>, color: Color) -> Self {
        self.extra_colors.insert(key.into(), color);
        self
    }

    /// A resolver over this theme's tree and palette.
    pub fn cascade(&self) -> Cascade<'_> {
        Cascade::new(&self.root, &self.palette)
    }

    /// Loads a theme from YAML with an empty base palette.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinct_core::ThemeDefinition;
    ///
    /// let theme = ThemeDefinition::from_yaml(r##"
    /// name: Tiny
    /// type: light
    /// palette: { ink: "#222222" }
    /// default: ink
    /// "##).unwrap();
    ///
    /// assert_eq!(theme.cascade().resolve("tokens.anything").unwrap().to_string(), "#222222");
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::from_yaml_with_palette(yaml, &Palette::new())
    }

    /// Loads a theme from YAML, layering its `palette` section over `shared`.
    ///
    /// Palette names used anywhere in the theme may come from either layer.
    pub fn from_yaml_with_palette(yaml: &str, shared: &Palette) -> Result<Self> {
        let value: Value =
            serde_yaml::from_str(yaml).map_err(|source| ThemeError::Parse { file: None, source })?;
        Self::from_value(&value, shared)
    }

    /// Loads a theme from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Io`] if the file cannot be read, and
    /// [`ThemeError::Parse`] (carrying the path) if it is not valid YAML.
    pub fn from_file(path: impl AsRef<Path>, shared: &Palette) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            file: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_yaml::from_str(&content).map_err(|source| ThemeError::Parse {
            file: Some(path.to_path_buf()),
            source,
        })?;
        Self::from_value(&value, shared)
    }

    fn from_value(value: &Value, shared: &Palette) -> Result<Self> {
        let map = value
            .as_mapping()
            .ok_or_else(|| ThemeError::invalid("<root>", "a theme must be a mapping"))?;

        let name = match map.get("name") {
            Some(Value::String(name)) => name.clone(),
            Some(other) => {
                return Err(ThemeError::invalid(
                    "name",
                    format!("expected a string, got {}", describe(other)),
                ))
            }
            None => return Err(ThemeError::invalid("name", "a theme needs a name")),
        };
        let variant = match map.get("type") {
            Some(v) => serde_yaml::from_value(v.clone())
                .map_err(|_| ThemeError::invalid("type", "expected 'dark' or 'light'"))?,
            None => Variant::default(),
        };

        let palette = match map.get("palette") {
            Some(v) => shared.layered(&parse_palette(v, shared)?),
            None => shared.clone(),
        };
        let root = parse_category(map, &TokenPath::default(), &palette, RESERVED_KEYS)?;

        let filters = match map.get("filters") {
            Some(v) => Some(
                serde_yaml::from_value::<FilterConfig>(v.clone())
                    .map_err(|e| ThemeError::invalid("filters", e.to_string()))?,
            ),
            None => None,
        };
        let modifiers = match map.get("modifiers") {
            Some(v) => parse_modifiers(v, &palette)?,
            None => IndexMap::new(),
        };
        let semantic_highlighting = match map.get("semantic_highlighting") {
            Some(Value::Bool(b)) => *b,
            Some(_) => {
                return Err(ThemeError::invalid(
                    "semantic_highlighting",
                    "expected true or false",
                ))
            }
            None => true,
        };
        let extra_colors = match map.get("extra_colors") {
            Some(v) => parse_color_table(v, "extra_colors", &palette)?,
            None => IndexMap::new(),
        };

        Ok(ThemeDefinition {
            name,
            variant,
            palette,
            root,
            modifiers,
            filters,
            semantic_highlighting,
            extra_colors,
        })
    }
}

fn string_map<'v>(value: &'v Value, at: &str) -> Result<Vec<(&'v str, &'v Value)>> {
    let map: &Mapping = value
        .as_mapping()
        .ok_or_else(|| ThemeError::invalid(at, format!("expected a mapping, got {}", describe(value))))?;
    map.iter()
        .map(|(k, v)| {
            k.as_str()
                .map(|k| (k, v))
                .ok_or_else(|| ThemeError::invalid(at, "keys must be strings"))
        })
        .collect()
}

/// Palette entries may be hex or refer to an entry of the shared palette.
fn parse_palette(value: &Value, shared: &Palette) -> Result<Palette> {
    let mut palette = Palette::new();
    for (name, color) in string_map(value, "palette")? {
        let at = TokenPath::parse("palette").child(name);
        let color = color
            .as_str()
            .ok_or_else(|| ThemeError::invalid(at.to_string(), "expected a color string"))?;
        // Earlier entries of this layer are visible to later ones.
        let visible = shared.layered(&palette);
        palette.insert(name, parse_color(color, &at, &visible)?);
    }
    Ok(palette)
}

fn parse_color_table(value: &Value, at: &str, palette: &Palette) -> Result<IndexMap<String, Color>> {
    let mut table = IndexMap::new();
    for (key, color) in string_map(value, at)? {
        let path = TokenPath::parse(at).child(key);
        let color = color
            .as_str()
            .ok_or_else(|| ThemeError::invalid(path.to_string(), "expected a color string"))?;
        table.insert(key.to_string(), parse_color(color, &path, palette)?);
    }
    Ok(table)
}

fn parse_modifiers(value: &Value, palette: &Palette) -> Result<IndexMap<SemanticModifier, ModifierRule>> {
    let mut rules = IndexMap::new();
    for (name, rule) in string_map(value, "modifiers")? {
        let at = TokenPath::parse("modifiers").child(name);
        let modifier: SemanticModifier = name
            .parse()
            .map_err(|message: String| ThemeError::invalid(at.to_string(), message))?;

        let mut parsed = ModifierRule::default();
        for (key, v) in string_map(rule, &at.to_string())? {
            match key {
                "global" => parsed.global = Some(parse_token_style(v, &at.child("global"), palette)?),
                "transform" => {
                    let map = v.as_mapping().ok_or_else(|| {
                        ThemeError::invalid(at.child("transform").to_string(), "expected a mapping")
                    })?;
                    parsed.transform = Some(parse_transform(map, &at.child("transform"), palette)?);
                }
                other => {
                    return Err(ThemeError::invalid(
                        at.to_string(),
                        format!("unknown key '{}' (expected 'global' or 'transform')", other),
                    ))
                }
            }
        }
        rules.insert(modifier, parsed);
    }
    Ok(rules)
}

fn parse_token_style(value: &Value, at: &TokenPath, palette: &Palette) -> Result<TokenStyle> {
    let mut style = TokenStyle::default();
    for (key, v) in string_map(value, &at.to_string())? {
        let text = v.as_str().ok_or_else(|| {
            ThemeError::invalid(at.child(key).to_string(), "expected a string")
        })?;
        match key {
            "foreground" => style.foreground = Some(parse_color(text, &at.child(key), palette)?),
            "fontStyle" | "font_style" => style.font_style = Some(text.to_string()),
            other => {
                return Err(ThemeError::invalid(
                    at.to_string(),
                    format!("unknown key '{}' (expected 'foreground' or 'fontStyle')", other),
                ))
            }
        }
    }
    Ok(style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade::Transform;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const THEME: &str = r##"
name: Sample
type: light
palette:
  ink: "#222222"
  accent: cyan
filters:
  contrast: 0.1
semantic_highlighting: false
modifiers:
  deprecated: { global: { fontStyle: strikethrough } }
  readonly: { global: { foreground: ink, fontStyle: "" } }
  async: { transform: { mix: { with: accent, amount: 0.1 } } }
extra_colors:
  "editorCursor.foreground": accent

default: ink
tokens:
  literals:
    default: accent
"##;

    fn shared() -> Palette {
        Palette::new()
            .add("cyan", Color::rgb(0, 255, 255))
            .add("ink", Color::rgb(0, 0, 0))
    }

    #[test]
    fn loads_every_section() {
        let theme = ThemeDefinition::from_yaml_with_palette(THEME, &shared()).unwrap();

        assert_eq!(theme.name, "Sample");
        assert_eq!(theme.variant, Variant::Light);
        assert!(!theme.semantic_highlighting);
        assert_eq!(theme.filters.unwrap().contrast, Some(0.1));
        assert_eq!(
            theme.extra_colors.get("editorCursor.foreground"),
            Some(&Color::rgb(0, 255, 255))
        );
        assert_eq!(
            theme.modifiers.keys().copied().collect::<Vec<_>>(),
            [
                SemanticModifier::Deprecated,
                SemanticModifier::Readonly,
                SemanticModifier::Async
            ]
        );
        assert_eq!(
            theme.modifiers[&SemanticModifier::Readonly].global,
            Some(TokenStyle {
                foreground: Some(Color::rgb(0x22, 0x22, 0x22)),
                font_style: Some(String::new()),
            })
        );
        assert!(matches!(
            theme.modifiers[&SemanticModifier::Async].transform,
            Some(Transform::Mix { .. })
        ));
    }

    #[test]
    fn theme_palette_layers_over_shared() {
        let theme = ThemeDefinition::from_yaml_with_palette(THEME, &shared()).unwrap();
        assert_eq!(theme.palette.get("ink"), Some(Color::rgb(0x22, 0x22, 0x22)));
        assert_eq!(theme.palette.get("accent"), Some(Color::rgb(0, 255, 255)));
        assert_eq!(theme.palette.get("cyan"), Some(Color::rgb(0, 255, 255)));
    }

    #[test]
    fn reserved_keys_stay_out_of_the_tree() {
        let theme = ThemeDefinition::from_yaml_with_palette(THEME, &shared()).unwrap();
        for key in RESERVED_KEYS {
            assert!(theme.root.get(key).is_none(), "{} leaked into tree", key);
        }
        let cascade = theme.cascade();
        assert_eq!(cascade.resolve("tokens.literals.string").unwrap(), Color::rgb(0, 255, 255));
        assert_eq!(cascade.resolve("ui.anything").unwrap(), Color::rgb(0x22, 0x22, 0x22));
    }

    #[test]
    fn name_is_required() {
        let err = ThemeDefinition::from_yaml("type: dark\ndefault: '#000'").unwrap_err();
        assert!(matches!(err, ThemeError::Invalid { ref path, .. } if path == "name"));
    }

    #[test]
    fn variant_defaults_to_dark() {
        let theme = ThemeDefinition::from_yaml("name: x").unwrap();
        assert_eq!(theme.variant, Variant::Dark);
        assert!(theme.semantic_highlighting);
    }

    #[test]
    fn bad_variant_and_unknown_modifier_are_rejected() {
        assert!(ThemeDefinition::from_yaml("name: x\ntype: sepia").is_err());
        let err = ThemeDefinition::from_yaml("name: x\nmodifiers: { bold: { global: {} } }").unwrap_err();
        assert!(matches!(err, ThemeError::Invalid { ref path, .. } if path == "modifiers.bold"));
    }

    #[test]
    fn invalid_yaml_reports_parse_error() {
        let err = ThemeDefinition::from_yaml("name: [unclosed").unwrap_err();
        assert!(matches!(err, ThemeError::Parse { file: None, .. }));
    }

    #[test]
    fn from_file_reads_and_reports_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "name: Disk\ndefault: '#010203'\n").unwrap();
        let theme = ThemeDefinition::from_file(file.path(), &Palette::new()).unwrap();
        assert_eq!(theme.name, "Disk");

        let missing = ThemeDefinition::from_file("/nonexistent/theme.yaml", &Palette::new());
        assert!(matches!(missing, Err(ThemeError::Io { .. })));
    }

    #[test]
    fn builder_matches_yaml() {
        let built = ThemeDefinition::new(
            "x",
            Variant::Dark,
            TokenCategory::with_default(Color::rgb(1, 2, 3)),
        );
        let loaded = ThemeDefinition::from_yaml("name: x\ndefault: '#010203'").unwrap();
        assert_eq!(built, loaded);
    }
}
