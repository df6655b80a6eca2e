//! The theme value cascade.
//!
//! A theme is a tree of [`TokenCategory`] nodes. Each category may declare a
//! `default` color, and every child either holds a value or is itself a
//! category. Looking up a path returns the most specific value defined along
//! it:
//!
//! ```text
//! default: "#111"
//! literals:
//!   default: "#222"
//!   string: "#333"
//! ```
//!
//! | Path              | Result | Why                                |
//! |-------------------|--------|------------------------------------|
//! | `literals.string` | `#333` | explicit value                     |
//! | `literals.number` | `#222` | nearest enclosing default          |
//! | `operators`       | `#111` | no `operators` key, root default   |
//!
//! # Values
//!
//! Values are data, not code. A [`ColorSpec`] is one of:
//!
//! - [`ColorSpec::Literal`]: a concrete color.
//! - [`ColorSpec::Alias`]: "whatever this other path resolves to".
//! - [`ColorSpec::Derived`]: a [`Transform`] applied to an input. Without an
//!   explicit input, the input is the value this position would inherit,
//!   so `boolean: { lighten: 0.1 }` inside `literals` means "the literals
//!   color, 10% lighter".
//!
//! Aliases and derived inputs are followed with cycle detection; a cycle is
//! reported as [`ThemeError::Cycle`](crate::ThemeError::Cycle).
//!
//! # Example
//!
//! ```rust
//! use tinct_core::cascade::{Cascade, TokenCategory};
//! use tinct_core::{Color, Palette};
//!
//! let root = TokenCategory::with_default(Color::rgb(0x11, 0x11, 0x11)).category(
//!     "literals",
//!     TokenCategory::with_default(Color::rgb(0x22, 0x22, 0x22))
//!         .value("string", Color::rgb(0x33, 0x33, 0x33)),
//! );
//! let palette = Palette::new();
//! let cascade = Cascade::new(&root, &palette);
//!
//! assert_eq!(cascade.resolve("literals.number").unwrap().to_string(), "#222222");
//! assert_eq!(cascade.resolve("operators").unwrap().to_string(), "#111111");
//! ```

mod path;
mod resolve;
pub(crate) mod yaml;

pub use path::TokenPath;
pub use resolve::{Cascade, ColorSource, ResolvedTokens};

use indexmap::IndexMap;

use crate::color::Color;

/// Where a color comes from when it is not a literal.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorRef {
    Color(Color),
    Path(TokenPath),
}

impl From<Color> for ColorRef {
    fn from(color: Color) -> Self {
        ColorRef::Color(color)
    }
}

impl From<TokenPath> for ColorRef {
    fn from(path: TokenPath) -> Self {
        ColorRef::Path(path)
    }
}

/// A color operation that may still refer to other theme values.
///
/// Bind it against a [`Cascade`] to get a concrete
/// [`ColorOp`](crate::color::ColorOp).
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    Lighten(f64),
    Darken(f64),
    Alpha(f64),
    Transparentize(f64),
    Saturate(f64),
    Rotate(f64),
    Mix { with: ColorRef, amount: f64 },
}

impl Transform {
    /// The key used for this transform in theme files.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Lighten(_) => "lighten",
            Transform::Darken(_) => "darken",
            Transform::Alpha(_) => "alpha",
            Transform::Transparentize(_) => "transparentize",
            Transform::Saturate(_) => "saturate",
            Transform::Rotate(_) => "rotate",
            Transform::Mix { .. } => "mix",
        }
    }
}

/// A value in the cascade tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    Literal(Color),
    Alias(TokenPath),
    Derived {
        transform: Transform,
        input: Option<ColorRef>,
    },
}

impl ColorSpec {
    /// A derived value with no explicit input: it transforms whatever this
    /// position would otherwise inherit.
    pub fn derive(transform: Transform) -> Self {
        ColorSpec::Derived {
            transform,
            input: None,
        }
    }

    pub fn derive_from(transform: Transform, input: impl Into<ColorRef>) -> Self {
        ColorSpec::Derived {
            transform,
            input: Some(input.into()),
        }
    }

    pub fn alias(path: &str) -> Self {
        ColorSpec::Alias(TokenPath::parse(path))
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Literal(color)
    }
}

/// A child of a [`TokenCategory`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Value(ColorSpec),
    Category(TokenCategory),
}

impl From<ColorSpec> for Node {
    fn from(spec: ColorSpec) -> Self {
        Node::Value(spec)
    }
}

impl From<Color> for Node {
    fn from(color: Color) -> Self {
        Node::Value(ColorSpec::Literal(color))
    }
}

impl From<TokenCategory> for Node {
    fn from(category: TokenCategory) -> Self {
        Node::Category(category)
    }
}

/// A named group of values with an optional default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenCategory {
    default: Option<ColorSpec>,
    children: IndexMap<String, Node>,
}

impl TokenCategory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(spec: impl Into<ColorSpec>) -> Self {
        Self {
            default: Some(spec.into()),
            children: IndexMap::new(),
        }
    }

    /// Adds a value child (builder style).
    pub fn value(mut self, key: impl Into<String>, spec: impl Into<ColorSpec>) -> Self {
        self.children.insert(key.into(), Node::Value(spec.into()));
        self
    }

    /// Adds a nested category (builder style).
    pub fn category(mut self, key: impl Into<String>, category: TokenCategory) -> Self {
        self.children.insert(key.into(), Node::Category(category));
        self
    }

    pub fn set_default(&mut self, spec: impl Into<ColorSpec>) {
        self.default = Some(spec.into());
    }

    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<Node>) {
        self.children.insert(key.into(), node.into());
    }

    pub fn default_value(&self) -> Option<&ColorSpec> {
        self.default.as_ref()
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.children.get(key)
    }

    pub fn children(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.children.is_empty()
    }
}
