use anyhow::Result;
use clap::Parser;
use tinct::config::BuildConfig;
use tinct::Cli;
use tinct_core::FilterConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .without_time()
        .init();

    if cli.list_presets {
        for (name, filters) in tinct_core::filter::PRESETS {
            println!("{:<14} {}", name, serde_json::to_string(filters)?);
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => BuildConfig::load(path)?,
        None => BuildConfig::builtin(),
    };
    let config = config.select(&cli.themes);
    if config.themes.is_empty() {
        anyhow::bail!("no theme matches {}", cli.themes.join(", "));
    }

    let cli_filters: Option<FilterConfig> = cli.filters.to_filters();
    if let Some(filters) = &cli_filters {
        tracing::info!("Applying filters: {}", serde_json::to_string(filters)?);
    }

    tinct::build_all(&config, cli_filters.as_ref())?;
    Ok(())
}
