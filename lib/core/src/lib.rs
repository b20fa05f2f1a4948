//! # waynet Core
//!
//! Core library for the waynet road network engine.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`Graph`] - Weighted adjacency-map graph with mirrored undirected edges
//! - [`Node`] / [`Edge`] - The vertex and adjacency-record data model
//! - [`shortest_path`] - Instrumented priority-queue Dijkstra search
//! - [`filter_by_degree`] - Degree-threshold pruning to a well-connected core
//! - [`normalize`] - Bounding-box rescale into a top-left-origin space
//!
//! ## Example
//!
//! ```rust
//! use waynet_core::{euclidean, shortest_path, Graph, Node};
//!
//! let mut graph = Graph::new();
//! graph.add_node(Node::new(0, 0.0, 0.0));
//! graph.add_node(Node::new(1, 3.0, 4.0));
//!
//! let weight = euclidean(graph.node(0).unwrap(), graph.node(1).unwrap());
//! graph.add_edge(0, 1, weight, false);
//!
//! let result = shortest_path(&graph, 0, 1);
//! assert_eq!(result.path, vec![0, 1]);
//! assert_eq!(result.total_cost, 5.0);
//! ```

pub mod dijkstra;
pub mod error;
pub mod filter;
pub mod graph;
pub mod normalize;

pub use dijkstra::{shortest_path, PathResult};
pub use error::{Error, Result};
pub use filter::{filter_by_degree, RawEdge};
pub use graph::{euclidean, Edge, Graph, Node, NodeId, OsmId, MIN_EDGE_WEIGHT};
pub use normalize::{normalize, REDUCER};
