use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use ahash::{AHashMap, AHashSet};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::graph::{Graph, NodeId};

/// Outcome of a shortest-path query.
///
/// An unreachable target (or an endpoint missing from the graph) yields an
/// empty path and an infinite cost; callers check [`PathResult::is_reachable`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResult {
    /// Node ids from start to end, inclusive. Empty when unreachable.
    pub path: Vec<NodeId>,
    pub total_cost: f64,
    pub elapsed: Duration,
    /// Number of nodes settled before the search terminated.
    pub nodes_explored: usize,
}

impl PathResult {
    #[inline]
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.total_cost.is_finite()
    }

    fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            total_cost: f64::INFINITY,
            elapsed: Duration::ZERO,
            nodes_explored: 0,
        }
    }
}

/// Priority-queue Dijkstra over non-negative edge weights.
///
/// The heap may hold stale duplicate entries for a node; a popped node that
/// is already settled is skipped. The search stops as soon as the target is
/// settled, so querying a node against itself settles exactly that node.
/// Ties between equal-distance candidates are broken by heap order.
#[must_use]
pub fn shortest_path(graph: &Graph, start: NodeId, end: NodeId) -> PathResult {
    if !graph.contains_node(start) || !graph.contains_node(end) {
        return PathResult::unreachable();
    }

    let started = Instant::now();

    let mut distances: AHashMap<NodeId, f64> =
        graph.nodes().keys().map(|&id| (id, f64::INFINITY)).collect();
    let mut predecessors: AHashMap<NodeId, NodeId> = AHashMap::new();
    let mut settled: AHashSet<NodeId> = AHashSet::new();
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, NodeId)>> = BinaryHeap::new();
    let mut nodes_explored = 0usize;

    distances.insert(start, 0.0);
    heap.push(Reverse((OrderedFloat(0.0), start)));

    while let Some(Reverse((OrderedFloat(dist), current))) = heap.pop() {
        if !settled.insert(current) {
            continue;
        }
        nodes_explored += 1;
        if current == end {
            break;
        }

        let Some(neighbors) = graph.neighbors(current) else {
            continue;
        };
        for (&neighbor, edge) in neighbors.iter() {
            if settled.contains(&neighbor) {
                continue;
            }
            let candidate = dist + edge.weight;
            if candidate < distances.get(&neighbor).copied().unwrap_or(f64::INFINITY) {
                distances.insert(neighbor, candidate);
                predecessors.insert(neighbor, current);
                heap.push(Reverse((OrderedFloat(candidate), neighbor)));
            }
        }
    }

    let elapsed = started.elapsed();
    let total_cost = distances.get(&end).copied().unwrap_or(f64::INFINITY);

    let mut path = Vec::new();
    if total_cost.is_finite() {
        let mut current = end;
        path.push(current);
        while let Some(&previous) = predecessors.get(&current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();
    }

    tracing::debug!(
        start,
        end,
        cost = total_cost,
        explored = nodes_explored,
        "shortest-path search finished"
    );

    PathResult {
        path,
        total_cost,
        elapsed,
        nodes_explored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Node;

    fn line_graph(n: u32) -> Graph {
        let mut graph = Graph::new();
        for id in 0..n {
            graph.add_node(Node::new(id, id as f64, 0.0));
        }
        for id in 0..n.saturating_sub(1) {
            graph.add_edge(id, id + 1, 1.0, false);
        }
        graph
    }

    #[test]
    fn test_path_to_self() {
        let graph = line_graph(3);
        let result = shortest_path(&graph, 1, 1);
        assert_eq!(result.path, vec![1]);
        assert_eq!(result.total_cost, 0.0);
        assert!(result.nodes_explored >= 1);
    }

    #[test]
    fn test_unreachable_target_returns_empty_path() {
        let mut graph = line_graph(2);
        graph.add_node(Node::new(9, 100.0, 100.0));
        let result = shortest_path(&graph, 0, 9);
        assert!(result.path.is_empty());
        assert_eq!(result.total_cost, f64::INFINITY);
        assert!(!result.is_reachable());
    }

    #[test]
    fn test_missing_endpoints_fail_gracefully() {
        let graph = line_graph(2);
        assert!(!shortest_path(&graph, 0, 42).is_reachable());
        assert!(!shortest_path(&graph, 42, 0).is_reachable());
        assert!(!shortest_path(&Graph::new(), 0, 0).is_reachable());
    }

    #[test]
    fn test_straight_line_path() {
        let graph = line_graph(5);
        let result = shortest_path(&graph, 0, 4);
        assert_eq!(result.path, vec![0, 1, 2, 3, 4]);
        assert_eq!(result.total_cost, 4.0);
        assert_eq!(result.nodes_explored, 5);
    }

    #[test]
    fn test_prefers_cheaper_detour() {
        // 0 -> 2 direct costs 10; 0 -> 1 -> 2 costs 3.
        let mut graph = Graph::new();
        for id in 0..3 {
            graph.add_node(Node::new(id, 0.0, 0.0));
        }
        graph.add_edge(0, 2, 10.0, false);
        graph.add_edge(0, 1, 1.0, false);
        graph.add_edge(1, 2, 2.0, false);

        let result = shortest_path(&graph, 0, 2);
        assert_eq!(result.path, vec![0, 1, 2]);
        assert_eq!(result.total_cost, 3.0);
    }

    #[test]
    fn test_respects_edge_direction() {
        let mut graph = Graph::new();
        for id in 0..2 {
            graph.add_node(Node::new(id, 0.0, 0.0));
        }
        graph.add_edge(0, 1, 1.0, true);

        assert_eq!(shortest_path(&graph, 0, 1).total_cost, 1.0);
        assert!(!shortest_path(&graph, 1, 0).is_reachable());
    }

    #[test]
    fn test_stale_heap_entries_are_skipped() {
        // Relaxing 1 through 2 pushes a second, cheaper entry for 1; the
        // stale one must not corrupt the explored count or the cost.
        let mut graph = Graph::new();
        for id in 0..4 {
            graph.add_node(Node::new(id, 0.0, 0.0));
        }
        graph.add_edge(0, 1, 10.0, false);
        graph.add_edge(0, 2, 1.0, false);
        graph.add_edge(2, 1, 1.0, false);
        graph.add_edge(1, 3, 1.0, false);

        let result = shortest_path(&graph, 0, 3);
        assert_eq!(result.path, vec![0, 2, 1, 3]);
        assert_eq!(result.total_cost, 3.0);
        assert_eq!(result.nodes_explored, 4);
    }
}
