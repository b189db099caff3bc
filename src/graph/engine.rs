//! The route graph.
//!
//! Uses petgraph to store directed travel-time arcs between locations and
//! keeps a name index for lookups by location identifier.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;
use tracing::debug;

use super::types::{Edge, TravelTime};
use crate::error::{Result, RouteError};

/// Directed weighted graph of locations, rebuilt from the dataset on demand.
pub struct RouteGraph {
    /// Node weights are location ids, edge weights are travel times.
    graph: DiGraph<String, u32>,
    /// Index: location id -> node index.
    location_index: HashMap<String, NodeIndex>,
}

impl RouteGraph {
    /// Create a new empty route graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            location_index: HashMap::new(),
        }
    }

    pub(crate) fn inner_graph(&self) -> &DiGraph<String, u32> {
        &self.graph
    }

    pub(crate) fn node_index(&self, location: &str) -> Option<NodeIndex> {
        self.location_index.get(location).copied()
    }

    // ─── Building ───────────────────────────────────────────────

    /// Discard the current contents and insert every record as a directed arc.
    pub fn build(&mut self, travel_times: &[TravelTime]) {
        self.graph.clear();
        self.location_index.clear();

        for tt in travel_times {
            self.insert_arc(tt.from(), tt.to(), tt.time());
        }

        debug!(
            locations = self.graph.node_count(),
            arcs = self.graph.edge_count(),
            "route graph built"
        );
    }

    /// Add an arc `from -> to`, registering both locations.
    ///
    /// Parallel arcs are kept side by side; nothing is merged or replaced.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: i64) -> Result<()> {
        if from.is_empty() {
            return Err(RouteError::InvalidRecord(
                "Source cannot be null or empty".to_string(),
            ));
        }
        let edge = Edge::new(to, weight)?;
        self.insert_arc(from, edge.destination(), edge.weight());
        Ok(())
    }

    fn insert_arc(&mut self, from: &str, to: &str, weight: u32) {
        let from_idx = self.ensure_location(from);
        let to_idx = self.ensure_location(to);
        self.graph.add_edge(from_idx, to_idx, weight);
    }

    fn ensure_location(&mut self, location: &str) -> NodeIndex {
        if let Some(&idx) = self.location_index.get(location) {
            return idx;
        }
        let idx = self.graph.add_node(location.to_string());
        self.location_index.insert(location.to_string(), idx);
        idx
    }

    // ─── Queries ────────────────────────────────────────────────

    /// Outgoing arcs of `location` in insertion order. Empty for unknown locations.
    pub fn neighbors(&self, location: &str) -> Vec<Edge> {
        let Some(idx) = self.node_index(location) else {
            return Vec::new();
        };
        // petgraph walks a node's adjacency list newest-first.
        let mut edges: Vec<Edge> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| Edge::arc(self.graph[e.target()].clone(), *e.weight()))
            .collect();
        edges.reverse();
        edges
    }

    pub fn has_node(&self, location: &str) -> bool {
        self.location_index.contains_key(location)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for RouteGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tt(from: &str, to: &str, time: i64) -> TravelTime {
        TravelTime::new(from, to, time).unwrap()
    }

    #[test]
    fn test_empty_graph() {
        let graph = RouteGraph::new();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.has_node("R11"));
    }

    #[test]
    fn test_add_edge_registers_both_endpoints() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 5).unwrap();

        assert!(graph.has_node("A"));
        assert!(graph.has_node("B"));
        assert_eq!(graph.neighbors("A"), vec![Edge::new("B", 5).unwrap()]);
        // Destination-only location exists with no outgoing arcs
        assert!(graph.neighbors("B").is_empty());
    }

    #[test]
    fn test_add_edge_rejects_invalid_arcs() {
        let mut graph = RouteGraph::new();
        assert!(graph.add_edge("A", "B", 0).is_err());
        assert!(graph.add_edge("A", "", 3).is_err());
        assert!(graph.add_edge("", "B", 3).is_err());
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_parallel_arcs_coexist() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 5).unwrap();
        graph.add_edge("A", "B", 3).unwrap();

        let weights: Vec<u32> = graph.neighbors("A").iter().map(|e| e.weight()).collect();
        assert_eq!(weights, vec![5, 3]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_neighbors_unknown_location() {
        let graph = RouteGraph::new();
        assert!(graph.neighbors("nowhere").is_empty());
    }

    #[test]
    fn test_build_from_travel_times() {
        let mut graph = RouteGraph::new();
        graph.build(&[tt("R11", "R12", 20), tt("R12", "R13", 9)]);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors("R12")[0].destination(), "R13");
    }

    #[test]
    fn test_rebuild_discards_previous_data() {
        let mut graph = RouteGraph::new();
        graph.build(&[tt("OLD1", "OLD2", 4)]);
        assert!(graph.has_node("OLD1"));

        graph.build(&[tt("NEW1", "NEW2", 4)]);
        assert!(!graph.has_node("OLD1"));
        assert!(!graph.has_node("OLD2"));
        assert!(graph.has_node("NEW1"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_build_empty_clears_graph() {
        let mut graph = RouteGraph::new();
        graph.build(&[tt("A", "B", 1)]);
        graph.build(&[]);
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_self_loop() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "A", 2).unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.neighbors("A")[0].destination(), "A");
    }
}
