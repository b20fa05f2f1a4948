use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use ahash::AHashMap;
use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::warn;
use waynet_core::{Error, Node, NodeId, OsmId, RawEdge, Result};

use crate::RawNetwork;

/// Reads and parses an OSM XML extract. The file is fully buffered before
/// parsing so that ways may reference nodes declared anywhere in the
/// document.
pub fn read_osm_file(path: impl AsRef<Path>) -> Result<RawNetwork> {
    let text = std::fs::read_to_string(path)?;
    parse_osm(&text)
}

/// Parses the consumed OSM subset in two passes.
///
/// Pass 1 collects every `node` element (`id`, `lat`, `lon`) into a lookup
/// table, assigning internal ids in discovery order and storing raw
/// coordinates as `(x, y) = (lon, lat)`. Pass 2 walks each `way` element
/// carrying a `highway` tag and emits one raw edge per consecutive `nd`
/// pair; `oneway=yes` makes the edges directed in declaration order.
///
/// Ways without a `highway` tag, ways with fewer than two references, and
/// reference pairs naming unknown nodes are skipped with a warning.
pub fn parse_osm(input: &str) -> Result<RawNetwork> {
    let (nodes, index) = collect_nodes(input)?;
    let edges = collect_way_edges(input, &index)?;
    Ok(RawNetwork { nodes, edges })
}

fn collect_nodes(input: &str) -> Result<(Vec<Node>, AHashMap<OsmId, NodeId>)> {
    let mut reader = Reader::from_str(input);
    let mut nodes = Vec::new();
    let mut index: AHashMap<OsmId, NodeId> = AHashMap::new();

    loop {
        match read_event(&mut reader)? {
            Event::Start(element) | Event::Empty(element)
                if element.name().as_ref() == b"node" =>
            {
                let id = attr_value(&element, b"id")?;
                let lat = attr_value(&element, b"lat")?;
                let lon = attr_value(&element, b"lon")?;
                let (Some(id), Some(lat), Some(lon)) = (id, lat, lon) else {
                    warn!("skipping node element without id/lat/lon attributes");
                    continue;
                };

                let external: OsmId = parse_attr(&id, "node id")?;
                let lat: f64 = parse_attr(&lat, "node latitude")?;
                let lon: f64 = parse_attr(&lon, "node longitude")?;

                let internal = nodes.len() as NodeId;
                nodes.push(Node::new(internal, lon, lat).with_external_id(external));
                index.insert(external, internal);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok((nodes, index))
}

fn collect_way_edges(input: &str, index: &AHashMap<OsmId, NodeId>) -> Result<Vec<RawEdge>> {
    let mut reader = Reader::from_str(input);
    let mut edges = Vec::new();

    let mut in_way = false;
    let mut refs: Vec<OsmId> = Vec::new();
    let mut is_highway = false;
    let mut is_oneway = false;

    loop {
        match read_event(&mut reader)? {
            Event::Start(element) if element.name().as_ref() == b"way" => {
                in_way = true;
                refs.clear();
                is_highway = false;
                is_oneway = false;
            }
            Event::Start(element) | Event::Empty(element)
                if in_way && element.name().as_ref() == b"nd" =>
            {
                if let Some(raw) = attr_value(&element, b"ref")? {
                    refs.push(parse_attr(&raw, "node reference")?);
                }
            }
            Event::Start(element) | Event::Empty(element)
                if in_way && element.name().as_ref() == b"tag" =>
            {
                let key = attr_value(&element, b"k")?;
                let value = attr_value(&element, b"v")?;
                match key.as_deref() {
                    Some("highway") => is_highway = true,
                    Some("oneway") => is_oneway = value.as_deref() == Some("yes"),
                    _ => {}
                }
            }
            Event::End(element) if element.name().as_ref() == b"way" => {
                in_way = false;
                if !is_highway {
                    continue;
                }
                if refs.len() < 2 {
                    warn!("skipping way with fewer than two node references");
                    continue;
                }
                for pair in refs.windows(2) {
                    let (Some(&u), Some(&v)) = (index.get(&pair[0]), index.get(&pair[1])) else {
                        warn!(
                            from = pair[0],
                            to = pair[1],
                            "way references an unknown node, edge skipped"
                        );
                        continue;
                    };
                    edges.push(RawEdge::new(u, v, is_oneway));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(edges)
}

fn read_event<'a>(reader: &mut Reader<&'a [u8]>) -> Result<Event<'a>> {
    reader.read_event().map_err(|err| {
        Error::Format(format!(
            "XML error at offset {}: {}",
            reader.buffer_position(),
            err
        ))
    })
}

fn attr_value(element: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>> {
    for attr in element.attributes() {
        let attr =
            attr.map_err(|err| Error::Format(format!("malformed XML attribute: {err}")))?;
        if attr.key.as_ref() == name {
            let value = attr
                .unescape_value()
                .map_err(|err| Error::Format(format!("malformed XML attribute value: {err}")))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn parse_attr<T>(raw: &str, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse()
        .map_err(|err| Error::Format(format!("invalid {what} {raw:?}: {err}")))
}
