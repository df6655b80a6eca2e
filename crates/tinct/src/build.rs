//! Running the generation pipeline over a build config.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use rayon::prelude::*;
use serde::Serialize;
use tempfile::NamedTempFile;
use tinct_core::integrations::to_pretty_json;
use tinct_core::merge::load_base;
use tinct_core::{merge, zed, FilterConfig, VsCodeTheme};

use crate::config::{BuildConfig, ThemeConfig};
use crate::themes;

/// What was written for one theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Built {
    pub name: String,
    pub output: PathBuf,
    /// True when a base theme was found and merged in.
    pub merged: bool,
    pub zed_output: Option<PathBuf>,
}

/// Builds every theme in `config`, in parallel.
///
/// Every theme is attempted even when others fail; the error then reports
/// how many did.
pub fn build_all(config: &BuildConfig, cli_filters: Option<&FilterConfig>) -> anyhow::Result<Vec<Built>> {
    let results: Vec<anyhow::Result<Built>> = config
        .themes
        .par_iter()
        .map(|entry| {
            build_theme(entry, &config.author, cli_filters)
                .with_context(|| format!("failed to build theme '{}'", entry.theme))
        })
        .collect();

    let mut built = Vec::with_capacity(results.len());
    let mut failed = 0;
    for result in results {
        match result {
            Ok(theme) => built.push(theme),
            Err(err) => {
                tracing::error!("{:#}", err);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        bail!("{} of {} themes failed to build", failed, config.themes.len());
    }
    Ok(built)
}

/// Loads, generates, merges and writes a single theme.
pub fn build_theme(
    entry: &ThemeConfig,
    author: &str,
    cli_filters: Option<&FilterConfig>,
) -> anyhow::Result<Built> {
    let theme = themes::load(&entry.theme)?;
    let filters = FilterConfig::layered([theme.filters.as_ref(), entry.filters.as_ref(), cli_filters]);

    let generated = VsCodeTheme::generate(&theme, &filters)?;
    let base = entry.base.as_deref().and_then(load_base);
    let merged = base.is_some();
    let vscode = merge(base, generated);

    write_json(&entry.output, &vscode)?;
    tracing::info!("Built: {} -> {}", theme.name, entry.output.display());
    if merged {
        if let Some(base) = &entry.base {
            tracing::info!("  (merged with {})", base.display());
        }
    }

    if let Some(zed_output) = &entry.zed_output {
        let family = zed::generate(&theme, &filters, author)?;
        write_json(zed_output, &family)?;
        tracing::info!("Built: {} (Zed) -> {}", theme.name, zed_output.display());
    }

    Ok(Built {
        name: theme.name,
        output: entry.output.clone(),
        merged,
        zed_output: entry.zed_output.clone(),
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let json = to_pretty_json(value).context("failed to serialize theme")?;
    write_atomic(path, json.as_bytes())
}

/// Writes `contents` to a temporary file next to `path`, then renames it
/// into place. Missing parent directories are created.
pub fn write_atomic(path: &Path, contents: &[u8]) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create a temporary file in {}", dir.display()))?;
    file.write_all(contents)
        .with_context(|| format!("failed to write {}", path.display()))?;
    file.persist(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
