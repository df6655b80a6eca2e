use indexmap::IndexMap;

use super::{ColorRef, ColorSpec, Node, TokenCategory, TokenPath, Transform};
use crate::color::{Color, ColorOp};
use crate::error::{Result, ThemeError};
use crate::palette::Palette;

/// How a color is looked up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorSource {
    /// Only an explicitly defined value at exactly this path. A category
    /// matches through its own `default` only. Absence is not an error.
    Exact(String),
    /// The most specific value along this path. Absence is an error.
    Cascade(String),
}

/// Flat result of resolving a set of [`ColorSource`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedTokens {
    exact: IndexMap<String, Color>,
    cascaded: IndexMap<String, Color>,
}

impl ResolvedTokens {
    pub fn get(&self, source: &ColorSource) -> Option<Color> {
        match source {
            ColorSource::Exact(path) => self.exact(path),
            ColorSource::Cascade(path) => self.cascaded(path),
        }
    }

    pub fn exact(&self, path: &str) -> Option<Color> {
        self.exact.get(path).copied()
    }

    pub fn cascaded(&self, path: &str) -> Option<Color> {
        self.cascaded.get(path).copied()
    }

    pub fn insert(&mut self, source: ColorSource, color: Color) {
        match source {
            ColorSource::Exact(path) => self.exact.insert(path, color),
            ColorSource::Cascade(path) => self.cascaded.insert(path, color),
        };
    }

    pub fn len(&self) -> usize {
        self.exact.len() + self.cascaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Applies `f` to every color, keeping keys and order.
    pub fn map_colors(self, f: impl Fn(Color) -> Color) -> Self {
        ResolvedTokens {
            exact: self.exact.into_iter().map(|(k, c)| (k, f(c))).collect(),
            cascaded: self.cascaded.into_iter().map(|(k, c)| (k, f(c))).collect(),
        }
    }
}

/// A default collected while walking down a path, kept unevaluated until
/// something actually needs it.
struct Fallback<'a> {
    spec: &'a ColorSpec,
    at: String,
}

/// Resolves paths against a token tree and its palette.
///
/// A `Cascade` only borrows; every call computes its result from scratch,
/// so the order in which paths are resolved never changes their values.
#[derive(Debug, Clone, Copy)]
pub struct Cascade<'a> {
    root: &'a TokenCategory,
    palette: &'a Palette,
}

impl<'a> Cascade<'a> {
    pub fn new(root: &'a TokenCategory, palette: &'a Palette) -> Self {
        Self { root, palette }
    }

    pub fn palette(&self) -> &'a Palette {
        self.palette
    }

    /// Resolves `path` to its most specific defined color.
    ///
    /// Fails with [`ThemeError::Unresolved`] when neither the path nor any of
    /// its ancestors (including the root) defines a value.
    pub fn resolve(&self, path: &str) -> Result<Color> {
        self.resolve_path(&TokenPath::parse(path), &mut Vec::new())
    }

    /// Returns the value defined at exactly `path`, if any.
    ///
    /// A category only counts when it has its own `default`. Values found
    /// are still evaluated, so a broken alias at the path is an error.
    pub fn lookup_exact(&self, path: &str) -> Result<Option<Color>> {
        let path = TokenPath::parse(path);
        if let Some(name) = path.palette_name() {
            return Ok(self.palette.get(name));
        }

        let mut stack = Vec::new();
        let mut fallbacks = Vec::new();
        let mut current = self.root;
        let mut at = TokenPath::default();
        let last = path.segments().len().saturating_sub(1);

        for (i, segment) in path.segments().iter().enumerate() {
            push_default(&mut fallbacks, current, &at);
            at = at.child(segment);
            match current.get(segment) {
                Some(Node::Category(category)) if i == last => {
                    return match category.default_value() {
                        Some(spec) => {
                            let label = format!("{}.default", at);
                            self.evaluate(spec, &label, &fallbacks, &mut stack).map(Some)
                        }
                        None => Ok(None),
                    };
                }
                Some(Node::Category(category)) => current = category,
                Some(Node::Value(spec)) if i == last => {
                    return self
                        .evaluate(spec, &at.to_string(), &fallbacks, &mut stack)
                        .map(Some);
                }
                Some(Node::Value(_)) | None => return Ok(None),
            }
        }

        // The empty path addresses the root itself.
        match self.root.default_value() {
            Some(spec) => self.evaluate(spec, "default", &[], &mut stack).map(Some),
            None => Ok(None),
        }
    }

    /// Resolves every source, skipping exact lookups that find nothing.
    pub fn resolve_sources(
        &self,
        sources: impl IntoIterator<Item = ColorSource>,
    ) -> Result<ResolvedTokens> {
        let mut resolved = ResolvedTokens::default();
        for source in sources {
            if resolved.get(&source).is_some() {
                continue;
            }
            let color = match &source {
                ColorSource::Exact(path) => self.lookup_exact(path)?,
                ColorSource::Cascade(path) => Some(self.resolve(path)?),
            };
            if let Some(color) = color {
                resolved.insert(source, color);
            }
        }
        Ok(resolved)
    }

    /// Turns a [`Transform`] into a concrete operation, resolving any path
    /// it refers to.
    pub fn bind(&self, transform: &Transform) -> Result<ColorOp> {
        self.bind_in(transform, &mut Vec::new())
    }

    // ─── internals ──────────────────────────────────────────────────────────

    fn resolve_path(&self, path: &TokenPath, stack: &mut Vec<String>) -> Result<Color> {
        if let Some(name) = path.palette_name() {
            return self
                .palette
                .get(name)
                .ok_or_else(|| ThemeError::UnknownPaletteColor {
                    name: name.to_string(),
                });
        }

        let key = path.to_string();
        if stack.contains(&key) {
            let mut chain = stack.clone();
            chain.push(key);
            return Err(ThemeError::Cycle { chain });
        }

        stack.push(key);
        let result = self.walk(path, stack);
        stack.pop();
        result
    }

    fn walk(&self, path: &TokenPath, stack: &mut Vec<String>) -> Result<Color> {
        let mut fallbacks: Vec<Fallback<'a>> = Vec::new();
        let mut current = self.root;
        let mut at = TokenPath::default();

        for segment in path.segments() {
            push_default(&mut fallbacks, current, &at);
            at = at.child(segment);
            match current.get(segment) {
                Some(Node::Category(category)) => current = category,
                // A value is the deepest definition on this path, even when
                // the path continues below it.
                Some(Node::Value(spec)) => {
                    return self.evaluate(spec, &at.to_string(), &fallbacks, stack)
                }
                None => {
                    return self
                        .inherited(&fallbacks, stack)?
                        .ok_or_else(|| ThemeError::Unresolved {
                            path: path.to_string(),
                        })
                }
            }
        }

        push_default(&mut fallbacks, current, &at);
        self.inherited(&fallbacks, stack)?
            .ok_or_else(|| ThemeError::Unresolved {
                path: path.to_string(),
            })
    }

    /// Evaluates the deepest collected default, deriving from the ones above
    /// it only if needed.
    fn inherited(&self, fallbacks: &[Fallback<'a>], stack: &mut Vec<String>) -> Result<Option<Color>> {
        match fallbacks.split_last() {
            Some((last, rest)) => self.evaluate(last.spec, &last.at, rest, stack).map(Some),
            None => Ok(None),
        }
    }

    fn evaluate(
        &self,
        spec: &ColorSpec,
        at: &str,
        fallbacks: &[Fallback<'a>],
        stack: &mut Vec<String>,
    ) -> Result<Color> {
        match spec {
            ColorSpec::Literal(color) => Ok(*color),
            ColorSpec::Alias(target) => self.resolve_path(target, stack),
            ColorSpec::Derived { transform, input } => {
                let base = match input {
                    Some(input) => self.color_ref(input, stack)?,
                    None => self
                        .inherited(fallbacks, stack)?
                        .ok_or_else(|| ThemeError::MissingInput {
                            path: at.to_string(),
                        })?,
                };
                Ok(self.bind_in(transform, stack)?.apply(base))
            }
        }
    }

    fn color_ref(&self, color: &ColorRef, stack: &mut Vec<String>) -> Result<Color> {
        match color {
            ColorRef::Color(color) => Ok(*color),
            ColorRef::Path(path) => self.resolve_path(path, stack),
        }
    }

    fn bind_in(&self, transform: &Transform, stack: &mut Vec<String>) -> Result<ColorOp> {
        Ok(match transform {
            Transform::Lighten(v) => ColorOp::Lighten(*v),
            Transform::Darken(v) => ColorOp::Darken(*v),
            Transform::Alpha(v) => ColorOp::Alpha(*v),
            Transform::Transparentize(v) => ColorOp::Transparentize(*v),
            Transform::Saturate(v) => ColorOp::Saturate(*v),
            Transform::Rotate(v) => ColorOp::Rotate(*v),
            Transform::Mix { with, amount } => ColorOp::Mix {
                with: self.color_ref(with, stack)?,
                amount: *amount,
            },
        })
    }
}

fn push_default<'a>(fallbacks: &mut Vec<Fallback<'a>>, category: &'a TokenCategory, at: &TokenPath) {
    if let Some(spec) = category.default_value() {
        let at = if at.is_empty() {
            "default".to_string()
        } else {
            format!("{}.default", at)
        };
        fallbacks.push(Fallback { spec, at });
    }
}
