//! # waynet Formats
//!
//! Format layer for the waynet road network engine.
//!
//! Two readers produce the same intermediate shape, a [`RawNetwork`] of
//! pre-normalization nodes and unweighted edges:
//!
//! - [`parse_poly`] / [`read_poly_file`] - the line-oriented vertex/edge
//!   text format
//! - [`parse_osm`] / [`read_osm_file`] - the consumed OSM XML subset
//!
//! The ingestion pipeline ([`build_graph`], [`load_poly`], [`load_osm`])
//! turns a raw network into a `waynet_core::Graph` by running the
//! connectivity filter and coordinate normalizer per [`IngestOptions`],
//! then inserting weighted edges. [`write_poly`] and [`convert_osm_to_poly`]
//! cover the reverse direction for the standalone converter.

pub mod convert;
pub mod ingest;
pub mod osm;
pub mod poly;

use waynet_core::{Node, RawEdge};

pub use convert::{convert_osm_to_poly, write_poly};
pub use ingest::{
    build_graph, load_osm, load_osm_with, load_poly, load_poly_with, IngestOptions,
    OSM_MIN_DEGREE, POLY_MIN_DEGREE,
};
pub use osm::{parse_osm, read_osm_file};
pub use poly::{parse_poly, read_poly_file};

/// The common output of both format readers: raw nodes (pre-normalization
/// coordinates, internal ids in discovery order) and raw edges (internal
/// endpoint ids, weight not yet computed).
#[derive(Debug, Clone, Default)]
pub struct RawNetwork {
    pub nodes: Vec<Node>,
    pub edges: Vec<RawEdge>,
}

impl RawNetwork {
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
