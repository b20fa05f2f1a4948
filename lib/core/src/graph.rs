use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Internal node identifier - dense, zero-based, assigned at ingestion time.
pub type NodeId = u32;
/// External identifier carried over from the source format (e.g. an OSM node id).
pub type OsmId = u64;

/// Replacement weight for degenerate zero-length edges.
pub const MIN_EDGE_WEIGHT: f64 = 1e-3;

/// A graph vertex with a 2D position used for weight computation and rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    pub label: String,
    /// Original identifier from the source file, when one exists.
    pub external_id: Option<OsmId>,
}

impl Node {
    #[inline]
    #[must_use]
    pub fn new(id: NodeId, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            label: id.to_string(),
            external_id: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_external_id(mut self, external_id: OsmId) -> Self {
        self.external_id = Some(external_id);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// A directed adjacency record. An undirected connection is stored as two
/// mirrored records sharing the same weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub u: NodeId,
    pub v: NodeId,
    pub weight: f64,
    pub directed: bool,
    pub label: String,
}

impl Edge {
    /// A weight of exactly zero is replaced by [`MIN_EDGE_WEIGHT`] so that
    /// path search never sees a zero-cost edge.
    #[inline]
    #[must_use]
    pub fn new(u: NodeId, v: NodeId, weight: f64, directed: bool) -> Self {
        let weight = if weight == 0.0 { MIN_EDGE_WEIGHT } else { weight };
        Self {
            u,
            v,
            weight,
            directed,
            label: format!("{:.1}", weight),
        }
    }
}

/// Euclidean distance between two node positions. This is the edge weight
/// used throughout ingestion and editing; it is not a geodesic distance.
#[inline]
#[must_use]
pub fn euclidean(a: &Node, b: &Node) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// In-memory weighted graph: a node registry plus one adjacency map per node.
///
/// Vertex and edge counts are maintained eagerly. The edge count tracks
/// *conceptual* edges: an undirected edge increments it once even though it
/// is stored as two mirrored records.
///
/// Not safe for concurrent mutation; callers serialize access.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: AHashMap<NodeId, Node>,
    adj: AHashMap<NodeId, AHashMap<NodeId, Edge>>,
    num_vertices: usize,
    num_edges: usize,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node. Returns `false` (no-op) if the id is already taken.
    pub fn add_node(&mut self, node: Node) -> bool {
        if self.nodes.contains_key(&node.id) {
            return false;
        }
        self.adj.entry(node.id).or_default();
        self.nodes.insert(node.id, node);
        self.num_vertices += 1;
        true
    }

    /// Registers an edge from `u` to `v`, mirrored when undirected.
    ///
    /// Returns `false` (no-op) if either endpoint is unregistered or a
    /// forward entry already exists - first insertion wins.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: f64, directed: bool) -> bool {
        if !self.nodes.contains_key(&u) || !self.nodes.contains_key(&v) {
            return false;
        }
        if self.adj.get(&u).is_some_and(|m| m.contains_key(&v)) {
            return false;
        }

        self.adj.entry(u).or_default().insert(v, Edge::new(u, v, weight, directed));
        if !directed {
            self.adj.entry(v).or_default().insert(u, Edge::new(v, u, weight, false));
        }
        self.num_edges += 1;
        true
    }

    /// Removes the edge from `u` to `v` and, when it is undirected, its
    /// mirror. Returns whether an edge existed.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) -> bool {
        let Some(edge) = self.adj.get_mut(&u).and_then(|m| m.remove(&v)) else {
            return false;
        };
        if !edge.directed {
            if let Some(back) = self.adj.get_mut(&v) {
                back.remove(&u);
            }
        }
        self.num_edges -= 1;
        true
    }

    /// Removes a node and every edge incident to it, in either direction.
    /// Returns `false` (no-op) if the id is absent.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        if !self.nodes.contains_key(&id) {
            return false;
        }

        // Edges arriving at `id` first; removing an undirected record also
        // drops its mirror, so the second pass only sees leftover directed
        // edges leaving `id`.
        let incoming: Vec<NodeId> = self
            .adj
            .iter()
            .filter(|(_, neighbors)| neighbors.contains_key(&id))
            .map(|(&u, _)| u)
            .collect();
        for u in incoming {
            self.remove_edge(u, id);
        }

        let outgoing: Vec<NodeId> = self
            .adj
            .get(&id)
            .map(|neighbors| neighbors.keys().copied().collect())
            .unwrap_or_default();
        for v in outgoing {
            self.remove_edge(id, v);
        }

        self.adj.remove(&id);
        self.nodes.remove(&id);
        self.num_vertices -= 1;
        true
    }

    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    #[inline]
    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &AHashMap<NodeId, Node> {
        &self.nodes
    }

    #[inline]
    #[must_use]
    pub fn adjacency(&self) -> &AHashMap<NodeId, AHashMap<NodeId, Edge>> {
        &self.adj
    }

    /// The outgoing edge map of one node, keyed by neighbor id.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, id: NodeId) -> Option<&AHashMap<NodeId, Edge>> {
        self.adj.get(&id)
    }

    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.num_vertices
    }

    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.num_edges
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_vertices == 0
    }
}
