use std::fmt;

/// A dotted address into a theme tree, such as `tokens.literals.string`.
///
/// Paths whose first segment is `palette` address the theme palette rather
/// than the token tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenPath(Vec<String>);

impl TokenPath {
    /// Splits `s` on `.`. Empty segments are ignored, so `"a..b"` and
    /// `"a.b"` are the same path.
    pub fn parse(s: &str) -> Self {
        TokenPath(
            s.split('.')
                .map(str::trim)
                .filter(|seg| !seg.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a new path with `segment` appended.
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.to_string());
        TokenPath(segments)
    }

    /// The palette entry name when this is a `palette.<name>` path.
    pub fn palette_name(&self) -> Option<&str> {
        match self.0.as_slice() {
            [head, name] if head == "palette" => Some(name.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        f.write_str(&self.0.join("."))
    }
}

impl From<&str> for TokenPath {
    fn from(s: &str) -> Self {
        TokenPath::parse(s)
    }
}
