// Pure KML placemark parser modules
mod parse;

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlacemarkError {
    #[error("XML parse error: {0}")]
    XmlParse(#[from] roxmltree::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid KML structure: {0}")]
    InvalidStructure(String),
}

pub type Result<T> = std::result::Result<T, PlacemarkError>;

/// A point coordinate parsed from a KML `"lng,lat[,alt]"` string.
///
/// KML stores longitude first; the parsed struct swaps into the
/// conventional lat/lng order. Altitude, when present, is discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub lat: f64,
    pub lng: f64,
}

/// One labeled point entry from a KML document: display name, coordinate,
/// and the ordered `<ExtendedData>` name/value pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Placemark {
    pub name: String,
    pub coord: Coord,
    pub(crate) fields: Vec<(String, String)>,
}

impl Placemark {
    /// Look up an extended-data field by name. Exact, case-sensitive match;
    /// duplicate names resolve to the first occurrence in document order.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// All extended-data fields in document order.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

/// Parse a KML document into its placemarks, in document order.
///
/// Placemarks without a usable `<coordinates>` element are skipped; only a
/// non-well-formed document is an error. A missing `<name>` yields `""`.
pub fn parse_document(text: &str) -> Result<Vec<Placemark>> {
    let doc = roxmltree::Document::parse(text)?;
    Ok(parse::collect_placemarks(&doc))
}

/// Read and parse a KML file.
pub fn parse_file(path: &Path) -> Result<Vec<Placemark>> {
    let text = std::fs::read_to_string(path)?;
    parse_document(&text)
}
