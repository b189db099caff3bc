//! Route API — the load and query boundaries of routefinder.
//!
//! `load_data` parses text and swaps the dataset snapshot, `calculate_optimal_route`
//! rebuilds the graph from the snapshot and runs the shortest-path search.

use tracing::{debug, info};

use crate::error::{Result, RouteError};
use crate::graph::{build_graph, PathResult};
use crate::parser::EdgeParser;
use crate::store::DatasetStore;

/// Parse `content` and replace the stored snapshot. Returns the record count.
///
/// The snapshot is left untouched when parsing fails.
pub fn load_data(store: &mut DatasetStore, parser: &EdgeParser, content: &str) -> Result<usize> {
    if content.is_empty() {
        return Err(RouteError::EmptyInput);
    }

    let travel_times = parser.parse(content)?;
    let count = travel_times.len();
    store.store(travel_times);

    info!(records = count, "travel times loaded");
    Ok(count)
}

/// Shortest route from `from` to `to` over the current snapshot.
///
/// The graph is rebuilt on every call so it always reflects the latest load.
pub fn calculate_optimal_route(store: &DatasetStore, from: &str, to: &str) -> Result<PathResult> {
    if from.is_empty() {
        return Err(RouteError::EmptyParameter("From"));
    }
    if to.is_empty() {
        return Err(RouteError::EmptyParameter("To"));
    }

    let graph = build_graph(&store.get_all());
    let result = graph.shortest_path(from, to);

    debug!(
        from,
        to,
        found = result.is_path_found(),
        total_time = result.total_time(),
        "route calculated"
    );
    Ok(result)
}
