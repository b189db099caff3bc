//! routefinder CLI - fastest routes over a travel-time file.
//!
//! Usage:
//!   routefinder route --data times.csv R11 CP2     # Fastest route
//!   routefinder route --data times.csv R11 CP2 --json
//!   routefinder load times.csv                     # Validate a file
//!   routefinder stats --data times.csv             # Dataset statistics

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use routefinder::cli::{format_route, load_file, Cli, Commands};
use routefinder::{calculate_optimal_route, DatasetStore, RouteResponse, RouterConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = RouterConfig::load(&cli.config);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    match run(cli, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &RouterConfig) -> Result<ExitCode> {
    let parser = config.format.parser()?;
    let mut store = DatasetStore::new();

    match cli.command {
        Commands::Route {
            data,
            from,
            to,
            json,
        } => {
            load_file(&mut store, &parser, &data)
                .with_context(|| format!("failed to load {}", data.display()))?;
            let result = calculate_optimal_route(&store, &from, &to)?;

            if json {
                if let Some(response) = RouteResponse::from_path(&result) {
                    println!("{}", serde_json::to_string_pretty(&response)?);
                    return Ok(ExitCode::SUCCESS);
                }
            }

            println!("{}", format_route(&result, &from, &to));
            if !result.is_path_found() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Load { file } => {
            let count = load_file(&mut store, &parser, &file)
                .with_context(|| format!("failed to load {}", file.display()))?;
            println!("Data loaded successfully: {} records", count);
        }

        Commands::Stats { data } => {
            load_file(&mut store, &parser, &data)
                .with_context(|| format!("failed to load {}", data.display()))?;
            let stats = store.stats();
            println!("Edges:     {}", stats.edge_count);
            println!("Locations: {}", stats.location_count);
        }
    }

    Ok(ExitCode::SUCCESS)
}
