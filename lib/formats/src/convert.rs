use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;
use waynet_core::{Error, Result};

use crate::{read_osm_file, RawNetwork};

/// Writes a raw network in the poly text layout: tab-separated, vertex
/// coordinates to six decimal places in `(x, y)` order, one edge line per
/// raw edge with its directed flag, and the terminal `0` line.
pub fn write_poly(raw: &RawNetwork, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "{}\t{}\t{}\t{}", raw.nodes.len(), 2, 0, 1)?;
    for node in &raw.nodes {
        writeln!(writer, "{}\t{:.6}\t{:.6}", node.id, node.x, node.y)?;
    }

    writeln!(writer, "{}\t{}", raw.edges.len(), 1)?;
    for (edge_id, edge) in raw.edges.iter().enumerate() {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            edge_id,
            edge.u,
            edge.v,
            u8::from(edge.directed)
        )?;
    }

    writeln!(writer, "0")?;
    Ok(())
}

/// Converter core: reads an OSM XML extract and writes the equivalent poly
/// file. Coordinates are written raw, so the output feeds the text pipeline
/// unchanged.
pub fn convert_osm_to_poly(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    let raw = read_osm_file(&input)?;
    if raw.nodes.is_empty() {
        return Err(Error::Format(format!(
            "no nodes found in {}",
            input.as_ref().display()
        )));
    }

    let file = File::create(&output)?;
    let mut writer = BufWriter::new(file);
    write_poly(&raw, &mut writer)?;
    writer.flush()?;

    info!(
        nodes = raw.nodes.len(),
        edges = raw.edges.len(),
        output = %output.as_ref().display(),
        "conversion finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_poly;
    use waynet_core::{Node, RawEdge};

    fn render(raw: &RawNetwork) -> String {
        let mut buffer = Vec::new();
        write_poly(raw, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_poly_layout() {
        let raw = RawNetwork {
            nodes: vec![Node::new(0, -49.25, -16.5), Node::new(1, -49.26, -16.75)],
            edges: vec![RawEdge::new(0, 1, false)],
        };
        let text = render(&raw);
        assert_eq!(
            text,
            "2\t2\t0\t1\n\
             0\t-49.250000\t-16.500000\n\
             1\t-49.260000\t-16.750000\n\
             1\t1\n\
             0\t0\t1\t0\n\
             0\n"
        );
    }

    #[test]
    fn test_directed_flag_survives_writing() {
        let raw = RawNetwork {
            nodes: vec![Node::new(0, 0.0, 0.0), Node::new(1, 1.0, 1.0)],
            edges: vec![RawEdge::new(0, 1, true)],
        };
        assert!(render(&raw).contains("0\t0\t1\t1\n"));
    }

    #[test]
    fn test_round_trips_through_the_poly_parser() {
        let raw = RawNetwork {
            nodes: vec![
                Node::new(0, 0.0, 0.0),
                Node::new(1, 2.5, 0.0),
                Node::new(2, 2.5, 3.125),
            ],
            edges: vec![RawEdge::new(0, 1, false), RawEdge::new(1, 2, true)],
        };
        let reread = parse_poly(&render(&raw)).unwrap();
        assert_eq!(reread.nodes.len(), raw.nodes.len());
        assert_eq!(reread.edges, raw.edges);
        for (a, b) in raw.nodes.iter().zip(&reread.nodes) {
            assert_eq!(a.id, b.id);
            assert!((a.x - b.x).abs() < 1e-6);
            assert!((a.y - b.y).abs() < 1e-6);
        }
    }
}
