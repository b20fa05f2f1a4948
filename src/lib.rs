//! # waynet
//!
//! In-memory road network graphs with shortest-path routing.
//!
//! waynet ingests two source formats - a line-oriented vertex/edge text
//! layout (".poly") and a subset of OSM XML - into one weighted graph,
//! optionally prunes the network to its well-connected core, and answers
//! single-pair shortest-path queries with instrumentation.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! waynet convert map.osm
//! waynet route map.poly --from 0 --to 42
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use waynet::prelude::*;
//!
//! // Load a graph with the text pipeline's default profile.
//! let graph = load_poly("map.poly").unwrap();
//!
//! // Query a route.
//! let result = shortest_path(&graph, 0, 42);
//! if result.is_reachable() {
//!     println!("{} hops, cost {}", result.path.len(), result.total_cost);
//! }
//!
//! // Apply an edit requested by a presentation layer.
//! let mut graph = graph;
//! let outcome = apply(&mut graph, EditCommand::AddNode { x: 10.0, y: 4.0 });
//! assert!(outcome.is_applied());
//! ```
//!
//! ## Crate Structure
//!
//! waynet is composed of several crates:
//!
//! - `waynet-core` - Graph store, Dijkstra search, connectivity filter,
//!   coordinate normalizer
//! - `waynet-formats` - Poly and OSM readers, poly writer, ingestion
//!   pipeline
//! - `waynet-api` - Editing command interface for external callers

// Re-export core types
pub use waynet_core::{
    euclidean, filter_by_degree, normalize, shortest_path,
    Edge, Error, Graph, Node, NodeId, OsmId, PathResult, RawEdge, Result,
    MIN_EDGE_WEIGHT, REDUCER,
};

// Re-export the format layer
pub use waynet_formats::{
    build_graph, convert_osm_to_poly, load_osm, load_osm_with, load_poly, load_poly_with,
    parse_osm, parse_poly, read_osm_file, read_poly_file, write_poly, IngestOptions,
    RawNetwork, OSM_MIN_DEGREE, POLY_MIN_DEGREE,
};

// Re-export the editing interface
pub use waynet_api::{apply, EditCommand, EditOutcome};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        apply, build_graph, euclidean, load_osm, load_poly, parse_osm, parse_poly,
        shortest_path, Edge, EditCommand, EditOutcome, Error, Graph, IngestOptions, Node,
        NodeId, PathResult, RawEdge, RawNetwork, Result,
    };
}
