//! CLI module for routefinder.
//!
//! Commands:
//! - route: fastest path between two locations of a data file
//! - load: validate a data file and count its records
//! - stats: edge and location counts of a data file

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_CONFIG_FILE;
use crate::error::Result;
use crate::graph::{no_route_message, PathResult, RouteResponse};
use crate::parser::EdgeParser;
use crate::route::load_data;
use crate::store::DatasetStore;

#[derive(Parser)]
#[command(name = "routefinder")]
#[command(about = "Fastest routes over a travel-time dataset", long_about = None)]
pub struct Cli {
    /// Config file (defaults apply when it does not exist)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the fastest route between two locations
    Route {
        /// Travel-time file (`from;to;time` per line)
        #[arg(short, long)]
        data: PathBuf,

        /// Starting location
        from: String,

        /// Destination location
        to: String,

        /// Print the route as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a travel-time file and report how many records it holds
    Load {
        /// Travel-time file
        file: PathBuf,
    },

    /// Show dataset statistics
    Stats {
        /// Travel-time file
        #[arg(short, long)]
        data: PathBuf,
    },
}

/// Read `path` and load it into `store`. Returns the record count.
pub fn load_file(store: &mut DatasetStore, parser: &EdgeParser, path: &Path) -> Result<usize> {
    let content = fs::read_to_string(path)?;
    load_data(store, parser, &content)
}

/// Human-readable rendering of a route result.
pub fn format_route(result: &PathResult, from: &str, to: &str) -> String {
    match RouteResponse::from_path(result) {
        Some(response) => response.to_string(),
        None => no_route_message(from, to),
    }
}
