use crate::{Coord, Placemark};
use roxmltree::{Document, Node};

/// Walk the whole document and collect every `<Placemark>` in order.
///
/// KML nests placemarks under `<Document>` or `<Folder>` elements at
/// arbitrary depth, so this scans descendants rather than direct children.
pub(crate) fn collect_placemarks(doc: &Document) -> Vec<Placemark> {
    doc.root_element()
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "Placemark")
        .filter_map(|n| parse_placemark(&n))
        .collect()
}

/// Parse one placemark. Returns `None` when the coordinates element is
/// absent or malformed; the rest of the document still parses.
fn parse_placemark(node: &Node) -> Option<Placemark> {
    let coord = coordinates_text(node).and_then(parse_coord)?;

    let name = node
        .descendants()
        .find(|n| n.is_element() && n.tag_name().name() == "name")
        .and_then(|n| n.text())
        .unwrap_or("")
        .trim()
        .to_string();

    Some(Placemark {
        name,
        coord,
        fields: collect_extended_data(node),
    })
}

fn coordinates_text<'a>(node: &Node<'a, '_>) -> Option<&'a str> {
    node.descendants()
        .find(|n| n.is_element() && n.tag_name().name() == "coordinates")
        .and_then(|n| n.text())
}

/// Parse a `"lng,lat[,alt]"` coordinate string, longitude first.
fn parse_coord(text: &str) -> Option<Coord> {
    let mut parts = text.trim().split(',');
    let lng = parts.next()?.trim().parse::<f64>().ok()?;
    let lat = parts.next()?.trim().parse::<f64>().ok()?;
    if !lng.is_finite() || !lat.is_finite() {
        return None;
    }
    Some(Coord { lat, lng })
}

/// Collect `<ExtendedData><Data name="..."><value>` pairs in document
/// order. Entries without a name attribute are dropped; a missing value
/// element yields an empty string.
fn collect_extended_data(node: &Node) -> Vec<(String, String)> {
    let mut fields = Vec::new();

    for data in node
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "Data")
    {
        let Some(name) = data.attribute("name") else {
            continue;
        };
        let value = data
            .children()
            .find(|n| n.is_element() && n.tag_name().name() == "value")
            .and_then(|n| n.text())
            .unwrap_or("")
            .trim()
            .to_string();
        fields.push((name.to_string(), value));
    }

    fields
}
