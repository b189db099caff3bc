//! # routefinder
//!
//! Fastest routes over a travel-time dataset.
//!
//! routefinder loads directed travel times between locations from a
//! delimited text file, keeps them as the current dataset, and answers
//! shortest-path queries with Dijkstra's algorithm.
//!
//! ## Key Features
//!
//! - **Simple input**: one `from;to;time` record per line, optional header
//! - **Fresh graph per query**: routes always reflect the latest load
//! - **Not-found is a value**: missing routes are results, not errors
//! - **Agent-ready**: MCP server exposing `load_data`, `route` and `stats`
//!
//! ## Quick Start
//!
//! ```rust
//! use routefinder::{calculate_optimal_route, load_data, DatasetStore, EdgeParser};
//!
//! let mut store = DatasetStore::new();
//! load_data(&mut store, &EdgeParser::default(), "R11;R12;20\nR12;R13;9").unwrap();
//!
//! let route = calculate_optimal_route(&store, "R11", "R13").unwrap();
//! assert_eq!(route.path(), ["R11", "R12", "R13"]);
//! assert_eq!(route.total_time(), 29);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod mcp;
pub mod parser;
pub mod route;
pub mod store;

// Re-exports for convenience
pub use config::RouterConfig;
pub use error::{Result, RouteError};

pub use graph::{build_graph, Edge, PathResult, RouteGraph, RouteResponse, TravelTime};
pub use parser::{parse_travel_times, EdgeParser};
pub use route::{calculate_optimal_route, load_data};
pub use store::{DatasetStats, DatasetStore, SharedStore};


#[cfg(test)]
mod benchmarks {
    use super::*;
    use std::time::{Duration, Instant};

    const QUERY_BUDGET: Duration = Duration::from_millis(300);
    const RUNS: u32 = 10;

    /// `size` x `size` grid with right and down arcs, corner to corner.
    fn grid_store(size: usize) -> DatasetStore {
        let mut lines = Vec::new();
        for row in 0..size {
            for col in 0..size {
                if col + 1 < size {
                    lines.push(format!("n{}_{};n{}_{};{}", row, col, row, col + 1, 1 + (row % 3)));
                }
                if row + 1 < size {
                    lines.push(format!("n{}_{};n{}_{};{}", row, col, row + 1, col, 1 + (col % 2)));
                }
            }
        }
        let mut store = DatasetStore::new();
        load_data(&mut store, &EdgeParser::default(), &lines.join("\n")).unwrap();
        store
    }

    fn corner_route(store: &DatasetStore, size: usize) -> (PathResult, Duration) {
        let target = format!("n{}_{}", size - 1, size - 1);
        let start = Instant::now();
        let route = calculate_optimal_route(store, "n0_0", &target).unwrap();
        (route, start.elapsed())
    }

    #[test]
    fn benchmark_grid_route_average() {
        let size = 60;
        let store = grid_store(size);

        let mut total = Duration::ZERO;
        for _ in 0..RUNS {
            let (route, elapsed) = corner_route(&store, size);
            assert!(route.is_path_found());
            assert_eq!(route.path().len(), 2 * size - 1);
            total += elapsed;
        }
        let average = total / RUNS;

        println!("Grid route benchmark: {}ms average over {} runs", average.as_millis(), RUNS);
        assert!(average < QUERY_BUDGET);
    }

    #[test]
    fn benchmark_grid_route_scaling() {
        for size in [10, 20, 40, 60] {
            let store = grid_store(size);
            let (route, elapsed) = corner_route(&store, size);

            println!("Grid {}x{}: {}ms", size, size, elapsed.as_millis());
            assert_eq!(route.path().len(), 2 * size - 1);
            assert!(elapsed < QUERY_BUDGET, "{}x{} grid took {:?}", size, size, elapsed);
        }
    }
}
