//! Route graph module — the structural backbone of routefinder.
//!
//! Provides the record and result types, the petgraph-backed route graph,
//! the snapshot-to-graph builder and the shortest-path search.

pub mod builder;
pub mod dijkstra;
pub mod engine;
pub mod types;

pub use builder::build_graph;
pub use engine::RouteGraph;
pub use types::{no_route_message, Edge, PathResult, RouteResponse, TravelTime};
