// Integration tests for waynet
use std::fs;

use waynet_api::{apply, EditCommand, EditOutcome};
use waynet_core::{shortest_path, Error};
use waynet_formats::{
    convert_osm_to_poly, load_osm, load_osm_with, load_poly, IngestOptions,
};

/// Unit square: three undirected sides plus one directed edge 2 -> 3.
const SQUARE_POLY: &str = "4 2 0 1\n\
                           0 0 0\n\
                           1 1 0\n\
                           2 1 1\n\
                           3 0 1\n\
                           3 1\n\
                           0 0 1 0\n\
                           1 1 2 0\n\
                           2 2 3 1\n\
                           0\n";

#[test]
fn test_poly_pipeline_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("square.poly");
    fs::write(&path, SQUARE_POLY).unwrap();

    let graph = load_poly(&path).unwrap();
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 3);

    // (2,3) is one-way; the others are mirrored.
    assert!(graph.neighbors(2).unwrap().get(&3).unwrap().directed);
    assert!(!graph.neighbors(3).unwrap().contains_key(&2));
    assert!(!graph.neighbors(0).unwrap().get(&1).unwrap().directed);
    assert!(graph.neighbors(1).unwrap().contains_key(&0));
    assert!(!graph.neighbors(1).unwrap().get(&2).unwrap().directed);

    // 0 -> 3 must walk the three unit sides.
    let result = shortest_path(&graph, 0, 3);
    assert_eq!(result.path, vec![0, 1, 2, 3]);
    assert!((result.total_cost - 3.0).abs() < 1e-12);
    assert!(result.nodes_explored >= 1);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = load_poly("/nonexistent/road.poly").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_truncated_file_is_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.poly");
    fs::write(&path, "5 2 0 1\n0 0 0\n").unwrap();

    let err = load_poly(&path).unwrap_err();
    assert!(matches!(err, Error::Format(_)));
}

#[test]
fn test_osm_pipeline_prunes_to_the_connected_core() {
    // Crossing of two ways through node 50: the center reaches degree 4,
    // every arm stays at 1, and the default threshold of 3 keeps only the
    // center (and therefore no edges).
    let xml = r#"<osm>
  <node id="10" lat="0.0" lon="-1.0"/>
  <node id="20" lat="0.0" lon="1.0"/>
  <node id="30" lat="-1.0" lon="0.0"/>
  <node id="40" lat="1.0" lon="0.0"/>
  <node id="50" lat="0.0" lon="0.0"/>
  <way id="1">
    <nd ref="10"/>
    <nd ref="50"/>
    <nd ref="20"/>
    <tag k="highway" v="residential"/>
  </way>
  <way id="2">
    <nd ref="30"/>
    <nd ref="50"/>
    <nd ref="40"/>
    <tag k="highway" v="residential"/>
  </way>
</osm>"#;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cross.osm");
    fs::write(&path, xml).unwrap();

    let graph = load_osm(&path).unwrap();
    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.nodes().values().next().unwrap().external_id, Some(50));
}

#[test]
fn test_osm_route_over_normalized_coordinates() {
    let xml = r#"<osm>
  <node id="1" lat="0.0" lon="0.0"/>
  <node id="2" lat="0.0" lon="1.0"/>
  <node id="3" lat="0.0" lon="2.0"/>
  <way id="1">
    <nd ref="1"/>
    <nd ref="2"/>
    <nd ref="3"/>
    <tag k="highway" v="residential"/>
  </way>
</osm>"#;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("line.osm");
    fs::write(&path, xml).unwrap();

    let options = IngestOptions { min_degree: None, normalize: true };
    let graph = load_osm_with(&path, &options).unwrap();
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 2);

    // Longitude gaps of 1.0 halve under the reducer, so the two hops cost
    // 0.5 each.
    let result = shortest_path(&graph, 0, 2);
    assert_eq!(result.path, vec![0, 1, 2]);
    assert!((result.total_cost - 1.0).abs() < 1e-12);
}

#[test]
fn test_converted_osm_feeds_the_poly_pipeline() {
    let xml = r#"<osm>
  <node id="1" lat="10.0" lon="20.0"/>
  <node id="2" lat="10.0" lon="21.0"/>
  <node id="3" lat="11.0" lon="21.0"/>
  <way id="1">
    <nd ref="1"/>
    <nd ref="2"/>
    <nd ref="3"/>
    <tag k="highway" v="tertiary"/>
    <tag k="oneway" v="yes"/>
  </way>
</osm>"#;
    let dir = tempfile::tempdir().unwrap();
    let osm_path = dir.path().join("town.osm");
    let poly_path = dir.path().join("town.poly");
    fs::write(&osm_path, xml).unwrap();

    convert_osm_to_poly(&osm_path, &poly_path).unwrap();
    let graph = load_poly(&poly_path).unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 2);

    // The oneway flag survives conversion: forward routing works, the
    // reverse direction is unreachable.
    assert!((shortest_path(&graph, 0, 2).total_cost - 2.0).abs() < 1e-9);
    assert!(!shortest_path(&graph, 2, 0).is_reachable());
}

#[test]
fn test_editing_commands_after_ingestion() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("square.poly");
    fs::write(&path, SQUARE_POLY).unwrap();
    let mut graph = load_poly(&path).unwrap();

    // Drop the directed shortcut into 3, then bridge 0 -> 3 directly.
    assert_eq!(
        apply(&mut graph, EditCommand::RemoveEdge { u: 2, v: 3 }),
        EditOutcome::EdgeRemoved { u: 2, v: 3 }
    );
    assert!(!shortest_path(&graph, 0, 3).is_reachable());

    let outcome = apply(&mut graph, EditCommand::AddEdge { u: 0, v: 3, directed: false });
    assert_eq!(outcome, EditOutcome::EdgeAdded { u: 0, v: 3 });

    let result = shortest_path(&graph, 0, 3);
    assert_eq!(result.path, vec![0, 3]);
    assert!((result.total_cost - 1.0).abs() < 1e-12);

    // A rejected removal reports a reason instead of failing.
    let outcome = apply(&mut graph, EditCommand::RemoveEdge { u: 2, v: 3 });
    assert!(!outcome.is_applied());
}
