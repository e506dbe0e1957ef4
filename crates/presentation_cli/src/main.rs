//! Rider CLI
//!
//! Command-line interface for searching rides, viewing a ride with its
//! map framing, and publishing rides.

#![allow(clippy::print_stdout)]

mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use application::{
    ApplicationError, ResolutionState, RideDetailResolver, RideService, SearchError,
};
use clap::{Parser, Subcommand};
use infrastructure::{AppConfig, GeocodingAdapter, RideServiceAdapter, init_logging};
use tracing::debug;

/// Rider CLI
#[derive(Parser)]
#[command(name = "rider-cli")]
#[command(author, version, about = "Find and share rides", long_about = None)]
struct Cli {
    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search rides between a pickup and a dropoff location
    ///
    /// Example: rider-cli search "Central Station" "Airport"
    Search {
        /// Pickup location
        pickup: String,

        /// Dropoff location
        dropoff: String,
    },

    /// Show one ride with its map framing
    Info {
        /// Ride identifier as returned by `search`
        ride_id: String,
    },

    /// Publish a new ride
    Create {
        /// Driver name
        name: String,

        /// Pickup location
        source: String,

        /// Dropoff location
        destination: String,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // -v overrides the configured level; RUST_LOG overrides both
    let filter = match cli.verbose {
        0 => config.log_level.as_str(),
        n => log_filter_from_verbosity(n),
    };
    init_logging(filter, config.log_format)?;
    debug!(rides = %config.rides.base_url, geocoder = %config.geocoding.base_url, "Configuration loaded");

    let rides = Arc::new(RideServiceAdapter::with_config(&config.rides)?);

    match cli.command {
        Commands::Search { pickup, dropoff } => {
            let service = RideService::new(rides.clone(), rides);

            match service.search(&pickup, &dropoff).await {
                Ok(found) if cli.json => println!("{}", serde_json::to_string_pretty(&found)?),
                Ok(found) => println!("{}", render::search_results(&found)),
                Err(ApplicationError::Search(SearchError::BackendRejected(message))) => {
                    println!("{message}");
                    std::process::exit(1);
                },
                Err(e) => return Err(e.into()),
            }
        },

        Commands::Info { ride_id } => {
            let geocoder = Arc::new(GeocodingAdapter::with_config(&config.geocoding)?);
            let resolver =
                RideDetailResolver::new(rides, geocoder).with_viewport_config(config.viewport);

            let Some(state) = resolver.resolve(&ride_id).await else {
                bail!("Request for ride {ride_id} was superseded");
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else {
                println!("{}", render::resolution_state(&state));
            }

            if matches!(state, ResolutionState::DetailFailed { .. }) {
                std::process::exit(1);
            }
        },

        Commands::Create {
            name,
            source,
            destination,
        } => {
            let service = RideService::new(rides.clone(), rides);
            let ride = service.create(&name, &source, &destination).await?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&ride)?);
            } else {
                println!("{}", render::created_ride(&ride));
            }
        },
    }

    Ok(())
}
