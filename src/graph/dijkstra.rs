//! Shortest travel-time search over a [`RouteGraph`].
//!
//! Dijkstra with a binary heap and lazy deletion: a location may sit in the
//! frontier several times, stale entries are dropped once it is settled.

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use tracing::debug;

use super::engine::RouteGraph;
use super::types::PathResult;

impl RouteGraph {
    /// Minimum total travel time path from `source` to `destination`.
    ///
    /// Unknown endpoints and unreachable destinations yield
    /// [`PathResult::not_found`]. Among several equally short paths any one
    /// may be returned.
    pub fn shortest_path(&self, source: &str, destination: &str) -> PathResult {
        let (Some(start), Some(goal)) = (self.node_index(source), self.node_index(destination))
        else {
            return PathResult::not_found();
        };

        if start == goal {
            return PathResult::found(vec![source.to_string()], 0);
        }

        let graph = self.inner_graph();
        let node_count = graph.node_count();

        let mut distances: Vec<u64> = vec![u64::MAX; node_count];
        let mut previous: Vec<Option<NodeIndex>> = vec![None; node_count];
        let mut settled: HashSet<NodeIndex> = HashSet::with_capacity(node_count);
        let mut frontier: BinaryHeap<Reverse<(u64, NodeIndex)>> = BinaryHeap::new();

        distances[start.index()] = 0;
        frontier.push(Reverse((0, start)));

        while let Some(Reverse((distance, current))) = frontier.pop() {
            if !settled.insert(current) {
                continue;
            }
            if current == goal {
                break;
            }

            for edge in graph.edges_directed(current, Direction::Outgoing) {
                let next = edge.target();
                let candidate = distance + u64::from(*edge.weight());
                if candidate < distances[next.index()] {
                    distances[next.index()] = candidate;
                    previous[next.index()] = Some(current);
                    frontier.push(Reverse((candidate, next)));
                }
            }
        }

        debug!(
            source,
            destination,
            settled = settled.len(),
            "shortest path search finished"
        );

        if previous[goal.index()].is_none() {
            return PathResult::not_found();
        }

        let mut path = vec![graph[goal].clone()];
        let mut cursor = goal;
        while let Some(prev) = previous[cursor.index()] {
            path.push(graph[prev].clone());
            cursor = prev;
        }
        path.reverse();

        PathResult::found(path, distances[goal.index()])
    }
}
