//! routefinder MCP server — route queries for AI agents.
//!
//! Runs a JSON-RPC 2.0 server over STDIO that exposes dataset loading and
//! route queries through the Model Context Protocol (MCP).
//!
//! Usage:
//!   routefinder-mcp [data_file]
//!
//! If a data file is given it is loaded before the first request. Config is
//! read from `routefinder.toml` in the working directory when present.

use std::path::{Path, PathBuf};

use routefinder::cli::load_file;
use routefinder::config::DEFAULT_CONFIG_FILE;
use routefinder::{DatasetStore, RouterConfig};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let config = RouterConfig::load(Path::new(DEFAULT_CONFIG_FILE));

    // Initialize tracing to stderr (MCP uses stdout for protocol)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let parser = config.format.parser()?;
    let store = DatasetStore::shared();

    if let Some(data_file) = std::env::args().nth(1).map(PathBuf::from) {
        info!(data = %data_file.display(), "preloading dataset");
        match store.write() {
            Ok(mut guard) => {
                if let Err(e) = load_file(&mut guard, &parser, &data_file) {
                    warn!(error = %e, "preload failed — starting with an empty dataset");
                }
            }
            Err(e) => warn!(error = %e, "dataset lock poisoned"),
        }
    }

    info!("MCP server ready — waiting for JSON-RPC requests on stdin");
    routefinder::mcp::server::run(store, parser);

    Ok(())
}
