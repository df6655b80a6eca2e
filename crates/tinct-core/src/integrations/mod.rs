//! Editor targets.
//!
//! Each target owns its file format and the static tables that map theme
//! paths onto it. Both targets read the same [`ThemeDefinition`] paths, so a
//! theme written once styles every editor.
//!
//! [`ThemeDefinition`]: crate::theme::ThemeDefinition

pub mod vscode;
pub mod zed;

use serde::Serialize;

/// Pretty-prints `value` as tab-indented JSON with a trailing newline.
///
/// Map order is insertion order, so the same input always produces the
/// same bytes.
pub fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    let mut text = String::from_utf8_lossy(&out).into_owned();
    text.push('\n');
    Ok(text)
}
