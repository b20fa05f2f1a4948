use ahash::AHashSet;
use tracing::debug;

use crate::graph::{Graph, Node, NodeId};

/// An edge as parsed from a source file, before weights exist. Endpoints are
/// internal node ids; the weight is computed later, at insertion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEdge {
    pub u: NodeId,
    pub v: NodeId,
    pub directed: bool,
}

impl RawEdge {
    #[inline]
    #[must_use]
    pub fn new(u: NodeId, v: NodeId, directed: bool) -> Self {
        Self { u, v, directed }
    }
}

/// Prunes a raw network to its well-connected core.
///
/// Builds a throwaway unit-weight graph (only topology matters), takes each
/// node's degree as the size of its adjacency map, and keeps the nodes with
/// degree >= `min_degree`. If no node qualifies, falls back to the top tenth
/// of nodes by degree (rounded up, ties broken by id) so that a non-empty
/// input always yields a non-empty subset.
///
/// The returned nodes preserve their discovery order.
#[must_use]
pub fn filter_by_degree(nodes: &[Node], edges: &[RawEdge], min_degree: usize) -> Vec<Node> {
    if nodes.is_empty() {
        return Vec::new();
    }

    let mut topology = Graph::new();
    for node in nodes {
        topology.add_node(node.clone());
    }
    for edge in edges {
        topology.add_edge(edge.u, edge.v, 1.0, edge.directed);
    }

    let mut degrees: Vec<(NodeId, usize)> = nodes
        .iter()
        .map(|node| {
            let degree = topology.neighbors(node.id).map_or(0, |m| m.len());
            (node.id, degree)
        })
        .collect();

    let mut selected: AHashSet<NodeId> = degrees
        .iter()
        .filter(|&&(_, degree)| degree >= min_degree)
        .map(|&(id, _)| id)
        .collect();

    if selected.is_empty() {
        let keep = nodes.len().div_ceil(10);
        degrees.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        selected = degrees.iter().take(keep).map(|&(id, _)| id).collect();
        debug!(
            min_degree,
            kept = selected.len(),
            "no node met the degree threshold, keeping the top tenth by degree"
        );
    } else {
        debug!(min_degree, kept = selected.len(), "degree filter applied");
    }

    nodes
        .iter()
        .filter(|node| selected.contains(&node.id))
        .cloned()
        .collect()
}
