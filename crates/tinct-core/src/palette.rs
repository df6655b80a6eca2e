//! Named colors shared between themes.

use indexmap::IndexMap;

use crate::color::Color;

/// An ordered set of named colors.
///
/// Palettes layer: a theme usually starts from a shared palette and
/// overrides or adds a handful of entries on top with [`Palette::layered`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    colors: IndexMap<String, Color>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a color, replacing any previous entry with the same name.
    pub fn add(mut self, name: impl Into<String>, color: Color) -> Self {
        self.colors.insert(name.into(), color);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, color: Color) {
        self.colors.insert(name.into(), color);
    }

    pub fn get(&self, name: &str) -> Option<Color> {
        self.colors.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// Returns a palette with `overrides` applied on top of `self`.
    ///
    /// Entries from `overrides` win; `self` is left untouched.
    pub fn layered(&self, overrides: &Palette) -> Palette {
        let mut colors = self.colors.clone();
        colors.extend(overrides.colors.iter().map(|(k, v)| (k.clone(), *v)));
        Palette { colors }
    }
}

impl<S: Into<String>> FromIterator<(S, Color)> for Palette {
    fn from_iter<I: IntoIterator<Item = (S, Color)>>(iter: I) -> Self {
        Palette {
            colors: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layered_overrides_win_and_base_is_kept() {
        let shared = Palette::new()
            .add("cyan", Color::rgb(0, 255, 255))
            .add("red", Color::rgb(255, 0, 0));
        let overrides = Palette::new().add("cyan", Color::rgb(1, 2, 3));

        let layered = shared.layered(&overrides);
        assert_eq!(layered.get("cyan"), Some(Color::rgb(1, 2, 3)));
        assert_eq!(layered.get("red"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(shared.get("cyan"), Some(Color::rgb(0, 255, 255)));
    }

    #[test]
    fn collect_from_pairs() {
        let palette: Palette = [("a", Color::rgb(1, 1, 1))].into_iter().collect();
        assert_eq!(palette.len(), 1);
        assert!(palette.contains("a"));
    }
}
