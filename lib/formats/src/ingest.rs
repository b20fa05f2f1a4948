use std::path::Path;

use tracing::debug;
use waynet_core::{euclidean, filter_by_degree, normalize, Graph, Result};

use crate::{read_osm_file, read_poly_file, RawNetwork};

/// Degree threshold of the OSM pipeline.
pub const OSM_MIN_DEGREE: usize = 3;
/// Historical degree threshold of the text pipeline. Not applied by default;
/// pass it through [`IngestOptions::min_degree`] to restore that behavior.
pub const POLY_MIN_DEGREE: usize = 2;

/// Controls the filter and normalizer stages of the ingestion pipeline.
#[derive(Debug, Clone, Default)]
pub struct IngestOptions {
    /// When set, prune the raw network to nodes of at least this degree
    /// before building the graph.
    pub min_degree: Option<usize>,
    /// When set, rescale the kept nodes into a top-left-origin rendering
    /// space before edge weights are computed.
    pub normalize: bool,
}

impl IngestOptions {
    /// Profile of the text pipeline: full graph, raw coordinates.
    #[must_use]
    pub fn poly() -> Self {
        Self::default()
    }

    /// Profile of the OSM pipeline: degree-3 core, normalized coordinates.
    #[must_use]
    pub fn osm() -> Self {
        Self {
            min_degree: Some(OSM_MIN_DEGREE),
            normalize: true,
        }
    }
}

/// Builds the final graph from a raw network: filter, normalize, then
/// populate. Nodes are registered first; every raw edge whose endpoints both
/// survived is inserted with its Euclidean weight computed from the
/// coordinates in effect at insertion time.
#[must_use]
pub fn build_graph(raw: RawNetwork, options: &IngestOptions) -> Graph {
    let RawNetwork { nodes, edges } = raw;

    let mut kept = match options.min_degree {
        Some(threshold) => filter_by_degree(&nodes, &edges, threshold),
        None => nodes,
    };
    if options.normalize {
        normalize(&mut kept);
    }

    let mut graph = Graph::new();
    for node in kept {
        graph.add_node(node);
    }
    for edge in &edges {
        let (Some(u), Some(v)) = (graph.node(edge.u), graph.node(edge.v)) else {
            continue;
        };
        let weight = euclidean(u, v);
        graph.add_edge(edge.u, edge.v, weight, edge.directed);
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph assembled"
    );
    graph
}

/// Loads a poly file with the text pipeline's default profile.
pub fn load_poly(path: impl AsRef<Path>) -> Result<Graph> {
    load_poly_with(path, &IngestOptions::poly())
}

pub fn load_poly_with(path: impl AsRef<Path>, options: &IngestOptions) -> Result<Graph> {
    Ok(build_graph(read_poly_file(path)?, options))
}

/// Loads an OSM XML file with the OSM pipeline's default profile.
pub fn load_osm(path: impl AsRef<Path>) -> Result<Graph> {
    load_osm_with(path, &IngestOptions::osm())
}

pub fn load_osm_with(path: impl AsRef<Path>, options: &IngestOptions) -> Result<Graph> {
    Ok(build_graph(read_osm_file(path)?, options))
}
