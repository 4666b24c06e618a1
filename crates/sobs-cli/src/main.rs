mod generate;
mod listing;
mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sobs_core::{AppConfig, ConfigError, Granularity, Location, Network, YearMonth};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "sobs")]
#[command(about = "Share of brand search: compare brand search demand over time")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch keyword volumes and print a share-of-search report
    Generate(GenerateArgs),
    /// List configured brands grouped as own brands and competitors
    Brands {
        /// Brand configuration file (defaults to `SOBS_BRANDS_PATH`)
        #[arg(long)]
        brands: Option<PathBuf>,
    },
    /// List the built-in locations and their geo target IDs
    Locations {
        /// Only show locations whose name contains this text
        #[arg(long)]
        search: Option<String>,
    },
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Brand configuration file (defaults to `SOBS_BRANDS_PATH`)
    #[arg(long)]
    brands: Option<PathBuf>,

    /// First month, inclusive (default: twelve months before `--to`)
    #[arg(long, value_name = "YYYY-MM")]
    from: Option<YearMonth>,

    /// Last month, inclusive (default: previous calendar month)
    #[arg(long, value_name = "YYYY-MM")]
    to: Option<YearMonth>,

    /// monthly, quarterly or yearly
    #[arg(long, short, default_value = "monthly")]
    granularity: Granularity,

    /// Country name, geo target ID or "all" (default: `SOBS_DEFAULT_LOCATION`)
    #[arg(long)]
    location: Option<Location>,

    /// GOOGLE_SEARCH or GOOGLE_SEARCH_AND_PARTNERS (default: `SOBS_DEFAULT_NETWORK`)
    #[arg(long)]
    network: Option<Network>,

    #[arg(long, short, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write the report to this file, or into this directory with a dated name
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(std::env::var("SOBS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()))
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    run(cli, sobs_core::load_app_config).await
}

/// Dispatch a parsed command. Configuration is loaded only by commands that read it.
async fn run<F>(cli: Cli, load_config: F) -> anyhow::Result<()>
where
    F: FnOnce() -> Result<AppConfig, ConfigError>,
{
    match cli.command {
        Commands::Generate(args) => {
            let config = load_config()?;
            generate::run_generate(&config, &args).await
        }
        Commands::Brands { brands } => {
            let path = match brands {
                Some(path) => path,
                None => load_config()?.brands_path,
            };
            listing::run_brands(&path)
        }
        Commands::Locations { search } => {
            listing::run_locations(search.as_deref());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;
