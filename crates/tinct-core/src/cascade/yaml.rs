//! Reading cascade trees from YAML values.
//!
//! Value strings use a small grammar:
//!
//! | Form        | Meaning                         |
//! |-------------|---------------------------------|
//! | `"#33b3cc"` | literal color                   |
//! | `"@a.b.c"`  | alias to another path           |
//! | `cyan`      | palette entry, resolved on load |
//!
//! A mapping whose only keys are one transform (`lighten`, `darken`,
//! `alpha`, `transparentize`, `saturate`, `rotate`, `mix`) and an optional
//! `from` is a derived value; any other mapping is a nested category.

use serde_yaml::{Mapping, Value};

use super::{ColorRef, ColorSpec, Node, TokenCategory, TokenPath, Transform};
use crate::color::Color;
use crate::error::{Result, ThemeError};
use crate::palette::Palette;

const TRANSFORM_KEYS: &[&str] = &[
    "lighten",
    "darken",
    "alpha",
    "transparentize",
    "saturate",
    "rotate",
    "mix",
];

/// Parses a category mapping. Keys listed in `skip` are left for the caller.
pub(crate) fn parse_category(
    map: &Mapping,
    at: &TokenPath,
    palette: &Palette,
    skip: &[&str],
) -> Result<TokenCategory> {
    let mut category = TokenCategory::new();

    for (key, value) in map {
        let key = key
            .as_str()
            .ok_or_else(|| ThemeError::invalid(at.to_string(), "keys must be strings"))?;
        if skip.contains(&key) {
            continue;
        }
        let child_at = at.child(key);

        if key == "default" {
            match parse_node(value, &child_at, palette)? {
                Node::Value(spec) => category.set_default(spec),
                Node::Category(_) => {
                    return Err(ThemeError::invalid(
                        child_at.to_string(),
                        "a default must be a color, not a category",
                    ))
                }
            }
            continue;
        }

        category.insert(key, parse_node(value, &child_at, palette)?);
    }

    Ok(category)
}

fn parse_node(value: &Value, at: &TokenPath, palette: &Palette) -> Result<Node> {
    match value {
        Value::String(s) => Ok(Node::Value(parse_color_spec(s, at, palette)?)),
        Value::Mapping(map) if is_derived(map) => Ok(Node::Value(parse_derived(map, at, palette)?)),
        Value::Mapping(map) => Ok(Node::Category(parse_category(map, at, palette, &[])?)),
        other => Err(ThemeError::invalid(
            at.to_string(),
            format!("expected a color or a mapping, got {}", describe(other)),
        )),
    }
}

fn is_derived(map: &Mapping) -> bool {
    let keys: Vec<&str> = map.keys().filter_map(Value::as_str).collect();
    keys.len() == map.len()
        && keys.iter().any(|k| TRANSFORM_KEYS.contains(k))
        && keys.iter().all(|k| *k == "from" || TRANSFORM_KEYS.contains(k))
}

fn parse_derived(map: &Mapping, at: &TokenPath, palette: &Palette) -> Result<ColorSpec> {
    let transform = parse_transform(map, at, palette)?;
    let input = match map.get("from") {
        Some(Value::String(s)) => Some(parse_color_ref(s, at, palette)?),
        Some(other) => {
            return Err(ThemeError::invalid(
                at.to_string(),
                format!("'from' must be a color string, got {}", describe(other)),
            ))
        }
        None => None,
    };
    Ok(ColorSpec::Derived { transform, input })
}

/// Parses a single-transform mapping such as `{ lighten: 0.2 }` or
/// `{ mix: { with: lavender, amount: 0.1 } }`. A `from` key is ignored.
pub(crate) fn parse_transform(map: &Mapping, at: &TokenPath, palette: &Palette) -> Result<Transform> {
    let mut found = map
        .iter()
        .filter_map(|(k, v)| k.as_str().filter(|k| TRANSFORM_KEYS.contains(k)).map(|k| (k, v)));

    let (name, value) = found.next().ok_or_else(|| {
        ThemeError::invalid(
            at.to_string(),
            format!("expected one of: {}", TRANSFORM_KEYS.join(", ")),
        )
    })?;
    if let Some((extra, _)) = found.next() {
        return Err(ThemeError::invalid(
            at.to_string(),
            format!("only one transform allowed, found '{}' and '{}'", name, extra),
        ));
    }

    let amount = |v: &Value| -> Result<f64> {
        v.as_f64().ok_or_else(|| {
            ThemeError::invalid(
                at.to_string(),
                format!("'{}' needs a number, got {}", name, describe(v)),
            )
        })
    };

    Ok(match name {
        "lighten" => Transform::Lighten(amount(value)?),
        "darken" => Transform::Darken(amount(value)?),
        "alpha" => Transform::Alpha(amount(value)?),
        "transparentize" => Transform::Transparentize(amount(value)?),
        "saturate" => Transform::Saturate(amount(value)?),
        "rotate" => Transform::Rotate(amount(value)?),
        _ => {
            let with = value
                .get("with")
                .and_then(Value::as_str)
                .ok_or_else(|| ThemeError::invalid(at.to_string(), "'mix' needs a 'with' color"))?;
            let weight = match value.get("amount") {
                Some(v) => amount(v)?,
                None => 0.5,
            };
            Transform::Mix {
                with: parse_color_ref(with, at, palette)?,
                amount: weight,
            }
        }
    })
}

pub(crate) fn parse_color_spec(s: &str, at: &TokenPath, palette: &Palette) -> Result<ColorSpec> {
    Ok(match parse_color_ref(s, at, palette)? {
        ColorRef::Color(color) => ColorSpec::Literal(color),
        ColorRef::Path(path) => ColorSpec::Alias(path),
    })
}

pub(crate) fn parse_color_ref(s: &str, at: &TokenPath, palette: &Palette) -> Result<ColorRef> {
    let s = s.trim();
    if let Some(path) = s.strip_prefix('@') {
        let path = TokenPath::parse(path);
        if path.is_empty() {
            return Err(ThemeError::invalid(at.to_string(), "empty alias"));
        }
        return Ok(ColorRef::Path(path));
    }
    parse_color(s, at, palette).map(ColorRef::Color)
}

/// A hex literal or palette name, resolved immediately.
pub(crate) fn parse_color(s: &str, at: &TokenPath, palette: &Palette) -> Result<Color> {
    let s = s.trim();
    if s.starts_with('#') {
        return Color::parse(s).map_err(|message| ThemeError::invalid(at.to_string(), message));
    }
    palette.get(s).ok_or_else(|| ThemeError::UnknownPaletteColor {
        name: s.to_string(),
    })
}

pub(crate) fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str, palette: &Palette) -> Result<TokenCategory> {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        parse_category(value.as_mapping().unwrap(), &TokenPath::default(), palette, &[])
    }

    fn palette() -> Palette {
        Palette::new()
            .add("cyan", Color::rgb(0x33, 0xb3, 0xcc))
            .add("lavender", Color::rgb(0x9d, 0x8c, 0xd9))
    }

    #[test]
    fn strings_become_literals_aliases_or_palette_colors() {
        let tree = parse(
            r##"
hex: "#ff0000"
named: cyan
alias: "@tokens.source"
"##,
            &palette(),
        )
        .unwrap();

        assert_eq!(
            tree.get("hex"),
            Some(&Node::Value(ColorSpec::Literal(Color::rgb(255, 0, 0))))
        );
        assert_eq!(
            tree.get("named"),
            Some(&Node::Value(ColorSpec::Literal(Color::rgb(0x33, 0xb3, 0xcc))))
        );
        assert_eq!(
            tree.get("alias"),
            Some(&Node::Value(ColorSpec::alias("tokens.source")))
        );
    }

    #[test]
    fn nested_mappings_become_categories_with_defaults() {
        let tree = parse(
            r##"
literals:
  default: cyan
  string: "#333333"
"##,
            &palette(),
        )
        .unwrap();

        let Some(Node::Category(literals)) = tree.get("literals") else {
            panic!("literals should be a category");
        };
        assert_eq!(
            literals.default_value(),
            Some(&ColorSpec::Literal(Color::rgb(0x33, 0xb3, 0xcc)))
        );
        assert!(literals.get("string").is_some());
    }

    #[test]
    fn transform_mappings_become_derived_values() {
        let tree = parse(
            r##"
boolean: { lighten: 0.1 }
faded: { alpha: 0.5, from: "@ui.accent" }
tinted: { mix: { with: lavender, amount: 0.25 }, from: cyan }
"##,
            &palette(),
        )
        .unwrap();

        assert_eq!(
            tree.get("boolean"),
            Some(&Node::Value(ColorSpec::derive(Transform::Lighten(0.1))))
        );
        assert_eq!(
            tree.get("faded"),
            Some(&Node::Value(ColorSpec::derive_from(
                Transform::Alpha(0.5),
                TokenPath::parse("ui.accent")
            )))
        );
        assert_eq!(
            tree.get("tinted"),
            Some(&Node::Value(ColorSpec::derive_from(
                Transform::Mix {
                    with: ColorRef::Color(Color::rgb(0x9d, 0x8c, 0xd9)),
                    amount: 0.25
                },
                Color::rgb(0x33, 0xb3, 0xcc)
            )))
        );
    }

    #[test]
    fn mapping_with_other_keys_is_a_category() {
        let tree = parse("group: { lighten: '#ffffff', other: '#000000' }", &palette()).unwrap();
        assert!(matches!(tree.get("group"), Some(Node::Category(_))));
    }

    #[test]
    fn unknown_palette_name_is_an_error() {
        let err = parse("x: teal", &palette()).unwrap_err();
        assert!(matches!(err, ThemeError::UnknownPaletteColor { ref name } if name == "teal"));
    }

    #[test]
    fn two_transforms_are_rejected() {
        let err = parse("x: { lighten: 0.1, darken: 0.1 }", &palette()).unwrap_err();
        assert!(matches!(err, ThemeError::Invalid { .. }));
    }

    #[test]
    fn category_default_must_be_a_color() {
        let err = parse("x: { default: { a: '#fff' } }", &palette()).unwrap_err();
        assert!(matches!(err, ThemeError::Invalid { ref path, .. } if path == "x.default"));
    }

    #[test]
    fn non_color_values_are_rejected() {
        assert!(parse("x: 12", &palette()).is_err());
        assert!(parse("x: '#12'", &palette()).is_err());
    }
}
