use serde::{Deserialize, Serialize};
use waynet_core::{euclidean, Graph, Node, NodeId};

/// A graph mutation requested by the presentation layer.
///
/// Commands are device-agnostic: a mouse click, a keyboard shortcut, or a
/// scripted caller all funnel through the same interface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EditCommand {
    /// Create a node at the given position. The id is allocated by the
    /// graph (one past the highest id in use).
    AddNode { x: f64, y: f64 },
    /// Connect two existing nodes; the weight is the Euclidean distance
    /// between them.
    AddEdge { u: NodeId, v: NodeId, directed: bool },
    RemoveNode { id: NodeId },
    RemoveEdge { u: NodeId, v: NodeId },
}

/// What a command did. Invalid requests are reported, never raised, so the
/// caller can surface a message and carry on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditOutcome {
    NodeAdded(NodeId),
    EdgeAdded { u: NodeId, v: NodeId },
    NodeRemoved(NodeId),
    EdgeRemoved { u: NodeId, v: NodeId },
    Ignored(String),
}

impl EditOutcome {
    #[inline]
    #[must_use]
    pub fn is_applied(&self) -> bool {
        !matches!(self, EditOutcome::Ignored(_))
    }
}

/// Applies one editing command to the graph.
pub fn apply(graph: &mut Graph, command: EditCommand) -> EditOutcome {
    match command {
        EditCommand::AddNode { x, y } => {
            let id = next_node_id(graph);
            graph.add_node(Node::new(id, x, y));
            EditOutcome::NodeAdded(id)
        }
        EditCommand::AddEdge { u, v, directed } => {
            let (Some(a), Some(b)) = (graph.node(u), graph.node(v)) else {
                return EditOutcome::Ignored(format!(
                    "cannot add an edge between {u} and {v}: both nodes must exist"
                ));
            };
            let weight = euclidean(a, b);
            if graph.add_edge(u, v, weight, directed) {
                EditOutcome::EdgeAdded { u, v }
            } else {
                EditOutcome::Ignored(format!("an edge from {u} to {v} already exists"))
            }
        }
        EditCommand::RemoveNode { id } => {
            if graph.remove_node(id) {
                EditOutcome::NodeRemoved(id)
            } else {
                EditOutcome::Ignored(format!("no node with id {id}"))
            }
        }
        EditCommand::RemoveEdge { u, v } => {
            if graph.remove_edge(u, v) {
                EditOutcome::EdgeRemoved { u, v }
            } else {
                EditOutcome::Ignored(format!("no edge from {u} to {v}"))
            }
        }
    }
}

fn next_node_id(graph: &Graph) -> NodeId {
    graph.nodes().keys().max().map_or(0, |&id| id + 1)
}
