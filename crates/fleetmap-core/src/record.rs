use serde::{Deserialize, Serialize};

/// A lat/lng pair. Serialises as `{"lat": .., "lng": ..}` to stay
/// field-compatible with the original export format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl From<placemark::Coord> for Position {
    fn from(c: placemark::Coord) -> Self {
        Position { lat: c.lat, lng: c.lng }
    }
}

/// A fixed fleet facility with staffing and operational metadata.
///
/// `terminal_number` is the business key used for all cross-referencing;
/// it is assumed unique among terminals by convention, not construction.
/// `total` is stored as supplied in the source data and is not required to
/// equal `drivers + shop + other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Terminal {
    pub id: String,
    pub name: String,
    pub terminal_number: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub manager: String,
    pub drivers: u32,
    pub shop: u32,
    pub other: u32,
    pub total: u32,
    pub opened: String,
    pub shop_bays: String,
    pub facility_type: String,
    pub primary_shippers: String,
    pub position: Position,
}

/// A shipment destination attributed to one terminal.
///
/// `terminal_source` is a soft back-reference to
/// [`Terminal::terminal_number`]: lookup only, never ownership, and it may
/// reference no existing terminal. Orphaned locations remain visible when
/// no filter is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingLocation {
    pub id: String,
    pub name: String,
    pub terminal_source: String,
    pub city: String,
    pub state: String,
    pub count: u32,
    pub position: Position,
}

/// Which entity kind a layer gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Terminals,
    Shipping,
}

/// A toggleable visibility group for one entity kind. Exactly one layer
/// per kind; toggles mutate it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLayer {
    pub id: String,
    pub name: String,
    pub visible: bool,
    pub color: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: LayerKind,
}

/// One row of the per-terminal top-cities view: a destination city and its
/// shipment volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityVolume {
    pub city: String,
    pub state: String,
    pub count: u32,
}
