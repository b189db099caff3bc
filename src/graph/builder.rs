//! Graph builder — turns a flat list of travel times into a route graph.

use super::engine::RouteGraph;
use super::types::TravelTime;

/// Build a fresh route graph from a dataset snapshot.
pub fn build_graph(travel_times: &[TravelTime]) -> RouteGraph {
    let mut graph = RouteGraph::new();
    graph.build(travel_times);
    graph
}
