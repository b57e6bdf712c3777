//! JSON export of the full canonical state, and re-ingestion of a
//! previously exported document.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::{ShippingLocation, Terminal};
use crate::store::MapStore;

/// Suggested filename for the offered download.
pub const EXPORT_FILENAME: &str = "terminal-shipping-data.json";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The full canonical state plus an ISO-8601 export timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub terminals: Vec<Terminal>,
    pub shipping_locations: Vec<ShippingLocation>,
    pub export_date: String,
}

impl ExportDocument {
    /// Snapshot the store's canonical collections, stamped with the
    /// current UTC time.
    pub fn from_store(store: &MapStore) -> Self {
        ExportDocument {
            terminals: store.terminals().to_vec(),
            shipping_locations: store.shipping_locations().to_vec(),
            export_date: Utc::now().to_rfc3339(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Feed the exported arrays back into a store as already-typed
    /// records, bypassing the document parser.
    pub fn apply_to(self, store: &mut MapStore) {
        store.replace_terminals(self.terminals);
        store.replace_shipping_locations(self.shipping_locations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    fn seeded_store() -> MapStore {
        let mut store = MapStore::new();
        store.replace_terminals(sample::terminals());
        store.replace_shipping_locations(sample::shipping_locations());
        store
    }

    #[test]
    fn export_reingest_round_trips_canonical_state() {
        let store = seeded_store();
        let json = ExportDocument::from_store(&store).to_json_pretty().unwrap();

        let mut restored = MapStore::new();
        ExportDocument::from_json(&json).unwrap().apply_to(&mut restored);

        assert_eq!(store.terminals(), restored.terminals());
        assert_eq!(store.shipping_locations(), restored.shipping_locations());
    }

    #[test]
    fn export_uses_original_field_names() {
        let store = seeded_store();
        let json = ExportDocument::from_store(&store).to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value.get("shippingLocations").is_some());
        assert!(value.get("exportDate").is_some());

        let first = &value["terminals"][0];
        assert_eq!(first["terminalNumber"], "95");
        assert_eq!(first["shopBays"], "6 Bay Full Service Repair Facility");
        assert_eq!(first["facilityType"], "Assembly Plant");
        assert_eq!(first["primaryShippers"], "Nissan");
        assert_eq!(first["position"]["lat"], 36.0086);

        let dest = &value["shippingLocations"][0];
        assert_eq!(dest["terminalSource"], "22 - CAMBRIDGE");
        assert_eq!(dest["count"], 82);
    }

    #[test]
    fn export_date_is_rfc3339() {
        let doc = ExportDocument::from_store(&MapStore::new());
        assert!(chrono::DateTime::parse_from_rfc3339(&doc.export_date).is_ok());
    }
}
