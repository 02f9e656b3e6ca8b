use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::{Confirm, CustomType, Select};
use weather_insights_core::{
    Config, Dashboard, ProviderId, WeatherProvider, city_name,
    provider::{default_provider_from_config, roster::ROSTER},
};

use crate::render;

const NO_DEFAULT_LOCATION: &str = "(no default, use New York)";

/// Shorter queries are not sent to the provider.
const MIN_QUERY_CHARS: usize = 3;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-insights", version, about = "Simulated weather dashboard with insights")]
pub struct Cli {
    /// Show debug logs on stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current conditions, forecasts and insights.
    Show {
        /// Location name; falls back to the configured default.
        location: Option<String>,

        /// Refresh cycles to run before rendering; each adds one reading to
        /// the trend history. Defaults to the configured history window.
        #[arg(long)]
        samples: Option<usize>,

        /// Print the dashboard state as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Search the known locations by name.
    Search {
        /// Case-insensitive part of a city name, e.g. "lon".
        query: String,
    },

    /// Interactively edit the configuration file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Show { location, samples, json } => show(location, samples, json).await,
            Command::Search { query } => search(&query).await,
            Command::Configure => configure(),
        }
    }
}

async fn show(location: Option<String>, samples: Option<usize>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let provider = default_provider_from_config(&config)?;

    let location = location.or_else(|| config.default_location.clone());
    let mut dashboard =
        Dashboard::new(provider, location).with_history_window(config.history_window);

    let cycles = samples.unwrap_or(config.history_window).max(1);
    tracing::debug!(cycles, location = %dashboard.state().selected_location, "loading dashboard");
    let mut outcome = Ok(());
    for _ in 0..cycles {
        if let Err(err) = dashboard.refresh().await {
            outcome = Err(err);
            break;
        }
    }

    let state = dashboard.state();
    if json {
        let out = serde_json::to_string_pretty(state).context("Failed to serialize dashboard state")?;
        println!("{out}");
    } else {
        print!("{}", render::render_dashboard(state));
    }

    outcome.context("Failed to load weather data")
}

async fn search(query: &str) -> Result<()> {
    if !is_searchable(query) {
        println!("Type at least {MIN_QUERY_CHARS} characters to search.");
        return Ok(());
    }

    let config = Config::load()?;
    let provider = default_provider_from_config(&config)?;

    let results = provider
        .search_locations(query)
        .await
        .with_context(|| format!("Location search for '{query}' failed"))?;

    print!("{}", render::render_search(query, &results));
    Ok(())
}

fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_CHARS
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    if config.default_provider.is_none() {
        config.set_default_provider(ProviderId::Mock);
    }

    let mut options = vec![NO_DEFAULT_LOCATION];
    options.extend_from_slice(ROSTER);
    let cursor = config
        .default_location
        .as_deref()
        .and_then(|current| options.iter().position(|o| city_name(o) == current))
        .unwrap_or(0);

    let location = Select::new("Default location:", options)
        .with_starting_cursor(cursor)
        .prompt()
        .context("Location selection cancelled")?;
    if location == NO_DEFAULT_LOCATION {
        config.default_location = None;
    } else {
        config.set_default_location(location);
    }

    config.simulate_latency = Confirm::new("Simulate network latency?")
        .with_default(config.simulate_latency)
        .prompt()
        .context("Latency prompt cancelled")?;

    config.history_window = CustomType::<usize>::new("Readings kept for trend analysis:")
        .with_default(config.history_window)
        .with_error_message("Please enter a whole number")
        .with_validator(|n: &usize| {
            if *n >= 1 {
                Ok(inquire::validator::Validation::Valid)
            } else {
                Ok(inquire::validator::Validation::Invalid("Must be at least 1".into()))
            }
        })
        .prompt()
        .context("History window prompt cancelled")?;

    config.save()?;

    let path = Config::config_file_path()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}
