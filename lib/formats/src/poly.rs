use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use tracing::warn;
use waynet_core::{Error, Node, NodeId, RawEdge, Result};

use crate::RawNetwork;

/// Reads and parses a poly file. The file is fully buffered before parsing.
pub fn read_poly_file(path: impl AsRef<Path>) -> Result<RawNetwork> {
    let text = std::fs::read_to_string(path)?;
    parse_poly(&text)
}

/// Parses the four-section vertex/edge text layout:
///
/// 1. `<vertex_count> <dimension> <attribute_count> <boundary_marker_flag>`
/// 2. exactly `vertex_count` lines `<id> <x> <y> [ignored...]`
/// 3. `<edge_count> <boundary_marker_flag>`
/// 4. exactly `edge_count` lines `<edge_id> <from> <to> <directed_flag>`
///
/// followed by a terminal `0` line, which is not validated. Data lines with
/// too few columns are skipped with a warning; truncated sections and
/// unparsable numbers in required positions abort the parse.
pub fn parse_poly(input: &str) -> Result<RawNetwork> {
    let mut lines = input.lines().enumerate();

    let (line_no, header) = lines
        .next()
        .ok_or_else(|| Error::Format("empty poly input".into()))?;
    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(malformed(line_no, "vertex header", header));
    }
    let vertex_count: usize = parse_field(fields[0], line_no, "vertex count")?;

    let mut nodes = Vec::with_capacity(vertex_count);
    for read in 0..vertex_count {
        let (line_no, line) = lines.next().ok_or_else(|| {
            truncated("vertex", vertex_count, read)
        })?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            warn!(line = line_no + 1, "skipping malformed vertex line");
            continue;
        }
        let id: NodeId = parse_field(fields[0], line_no, "vertex id")?;
        let x: f64 = parse_field(fields[1], line_no, "vertex x coordinate")?;
        let y: f64 = parse_field(fields[2], line_no, "vertex y coordinate")?;
        nodes.push(Node::new(id, x, y));
    }

    let (line_no, header) = lines
        .next()
        .ok_or_else(|| Error::Format("missing edge section".into()))?;
    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() < 2 {
        return Err(malformed(line_no, "edge header", header));
    }
    let edge_count: usize = parse_field(fields[0], line_no, "edge count")?;

    let mut edges = Vec::with_capacity(edge_count);
    for read in 0..edge_count {
        let (line_no, line) = lines.next().ok_or_else(|| {
            truncated("edge", edge_count, read)
        })?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            warn!(line = line_no + 1, "skipping malformed edge line");
            continue;
        }
        // fields[0] is the edge id, unused beyond the column check.
        let u: NodeId = parse_field(fields[1], line_no, "edge source")?;
        let v: NodeId = parse_field(fields[2], line_no, "edge target")?;
        let flag: i64 = parse_field(fields[3], line_no, "edge direction flag")?;
        edges.push(RawEdge::new(u, v, flag != 0));
    }

    Ok(RawNetwork { nodes, edges })
}

fn parse_field<T>(raw: &str, line_no: usize, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse().map_err(|err| {
        Error::Format(format!("invalid {} at line {}: {}", what, line_no + 1, err))
    })
}

fn malformed(line_no: usize, what: &str, line: &str) -> Error {
    Error::Format(format!(
        "malformed {} at line {}: {:?}",
        what,
        line_no + 1,
        line
    ))
}

fn truncated(section: &str, expected: usize, read: usize) -> Error {
    Error::Format(format!(
        "truncated {section} section: expected {expected} lines, found {read}"
    ))
}
