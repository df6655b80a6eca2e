//! Built-in theme definitions.

use std::path::Path;

use tinct_core::{ThemeDefinition, ThemeError};

use crate::palette;

/// A theme shipped inside the binary.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinTheme {
    /// File-name friendly identifier, also used on the command line.
    pub slug: &'static str,
    source: &'static str,
}

pub const BUILTIN: &[BuiltinTheme] = &[
    BuiltinTheme {
        slug: "minted",
        source: include_str!("../themes/minted.yaml"),
    },
    BuiltinTheme {
        slug: "slate",
        source: include_str!("../themes/slate.yaml"),
    },
    BuiltinTheme {
        slug: "apathy",
        source: include_str!("../themes/apathy.yaml"),
    },
    BuiltinTheme {
        slug: "apathetic-ocean",
        source: include_str!("../themes/apathetic-ocean.yaml"),
    },
    BuiltinTheme {
        slug: "apathy-experimental",
        source: include_str!("../themes/apathy-experimental.yaml"),
    },
];

impl BuiltinTheme {
    pub fn find(slug: &str) -> Option<&'static BuiltinTheme> {
        BUILTIN.iter().find(|theme| theme.slug == slug)
    }

    pub fn load(&self) -> Result<ThemeDefinition, ThemeError> {
        ThemeDefinition::from_yaml_with_palette(self.source, &palette::shared())
    }
}

/// Loads a theme by built-in slug, or else from a YAML file at `reference`.
pub fn load(reference: &str) -> Result<ThemeDefinition, ThemeError> {
    match BuiltinTheme::find(reference) {
        Some(builtin) => builtin.load(),
        None => ThemeDefinition::from_file(Path::new(reference), &palette::shared()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn builtins_load() {
        for builtin in BUILTIN {
            let theme = builtin.load().unwrap_or_else(|e| panic!("{}: {}", builtin.slug, e));
            assert_eq!(theme.name.to_lowercase().replace(' ', "-"), builtin.slug);
        }
    }

    #[test]
    fn user_theme_files_see_the_shared_palette() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "name: Mine\ndefault: lavender\n").unwrap();
        let theme = load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(
            theme.cascade().resolve("tokens").unwrap().to_string(),
            "#c792ea"
        );
    }

    #[test]
    fn unknown_reference_is_an_io_error() {
        let err = load("no-such-theme").unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }), "{}", err);
    }
}
