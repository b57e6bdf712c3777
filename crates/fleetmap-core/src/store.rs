//! The single mutable source of truth: canonical terminal and shipping
//! collections, layer visibility, and selection state. Every derived view
//! here is a pure read; marker-cache invalidation on selection changes is
//! the caller's responsibility and is signalled through the mutators'
//! return values (see [`crate::session::MapSession`]).

use std::collections::HashSet;

use crate::record::{CityVolume, LayerKind, MapLayer, ShippingLocation, Terminal};

fn default_layers() -> Vec<MapLayer> {
    vec![
        MapLayer {
            id: "terminals".to_string(),
            name: "Terminal Locations".to_string(),
            visible: true,
            color: "#C2185B".to_string(),
            icon: "business".to_string(),
            kind: LayerKind::Terminals,
        },
        MapLayer {
            id: "shipping".to_string(),
            name: "Daily Shipping Destinations".to_string(),
            visible: true,
            color: "#1A237E".to_string(),
            icon: "local_shipping".to_string(),
            kind: LayerKind::Shipping,
        },
    ]
}

#[derive(Debug)]
pub struct MapStore {
    terminals: Vec<Terminal>,
    shipping_locations: Vec<ShippingLocation>,
    layers: Vec<MapLayer>,
    selected_terminal: Option<String>,
    expanded: HashSet<String>,
}

impl Default for MapStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MapStore {
    pub fn new() -> Self {
        MapStore {
            terminals: Vec::new(),
            shipping_locations: Vec::new(),
            layers: default_layers(),
            selected_terminal: None,
            expanded: HashSet::new(),
        }
    }

    // ---- wholesale replacement -------------------------------------------

    /// Replace the canonical terminal list. An empty incoming list is a
    /// no-op: a parse that yields zero terminals must not clear data loaded
    /// earlier.
    pub fn replace_terminals(&mut self, terminals: Vec<Terminal>) {
        if terminals.is_empty() {
            log::debug!("ignoring empty terminal replacement");
            return;
        }
        self.terminals = terminals;
    }

    /// Replace the canonical shipping list; same empty-list rule as
    /// [`replace_terminals`](Self::replace_terminals).
    pub fn replace_shipping_locations(&mut self, locations: Vec<ShippingLocation>) {
        if locations.is_empty() {
            log::debug!("ignoring empty shipping replacement");
            return;
        }
        self.shipping_locations = locations;
    }

    // ---- layers ----------------------------------------------------------

    /// Flip a layer's visibility. Linear scan; the layer list is two
    /// entries. Returns false when no layer has the given id.
    pub fn toggle_layer(&mut self, layer_id: &str) -> bool {
        match self.layers.iter_mut().find(|l| l.id == layer_id) {
            Some(layer) => {
                layer.visible = !layer.visible;
                true
            }
            None => false,
        }
    }

    pub fn layers(&self) -> &[MapLayer] {
        &self.layers
    }

    pub fn layer_visible(&self, kind: LayerKind) -> bool {
        self.layers
            .iter()
            .find(|l| l.kind == kind)
            .is_some_and(|l| l.visible)
    }

    pub fn layer_color(&self, kind: LayerKind) -> &str {
        self.layers
            .iter()
            .find(|l| l.kind == kind)
            .map(|l| l.color.as_str())
            .unwrap_or("")
    }

    // ---- selection -------------------------------------------------------

    /// Replace the active terminal filter. Returns true when the filter
    /// actually changed, so the owner knows to invalidate marker caches.
    pub fn set_terminal_filter(&mut self, terminal_number: Option<String>) -> bool {
        if self.selected_terminal == terminal_number {
            return false;
        }
        self.selected_terminal = terminal_number;
        true
    }

    /// Click-toggle selection: selecting the already-selected terminal
    /// clears the filter.
    pub fn select_terminal(&mut self, terminal: &Terminal) {
        if self.selected_terminal.as_deref() == Some(terminal.terminal_number.as_str()) {
            self.selected_terminal = None;
        } else {
            self.selected_terminal = Some(terminal.terminal_number.clone());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_terminal = None;
    }

    pub fn selected_terminal(&self) -> Option<&str> {
        self.selected_terminal.as_deref()
    }

    // ---- detail expansion ------------------------------------------------

    pub fn toggle_expanded(&mut self, terminal_number: &str) {
        if !self.expanded.remove(terminal_number) {
            self.expanded.insert(terminal_number.to_string());
        }
    }

    pub fn is_expanded(&self, terminal_number: &str) -> bool {
        self.expanded.contains(terminal_number)
    }

    // ---- derived views ---------------------------------------------------

    /// All terminals when the terminals layer is visible, else empty.
    /// Order preserved.
    pub fn visible_terminals(&self) -> &[Terminal] {
        if self.layer_visible(LayerKind::Terminals) {
            &self.terminals
        } else {
            &[]
        }
    }

    /// Shipping locations gated by the shipping layer and, when a terminal
    /// filter is active, restricted to that terminal's destinations.
    /// Order preserved, no re-sort.
    pub fn visible_shipping_locations(&self) -> Vec<&ShippingLocation> {
        if !self.layer_visible(LayerKind::Shipping) {
            return Vec::new();
        }
        match self.selected_terminal.as_deref() {
            Some(number) => self
                .shipping_locations
                .iter()
                .filter(|loc| loc.terminal_source == number)
                .collect(),
            None => self.shipping_locations.iter().collect(),
        }
    }

    pub fn terminals(&self) -> &[Terminal] {
        &self.terminals
    }

    pub fn shipping_locations(&self) -> &[ShippingLocation] {
        &self.shipping_locations
    }

    pub fn terminal_count(&self) -> usize {
        self.terminals.len()
    }

    pub fn visible_shipping_count(&self) -> usize {
        self.visible_shipping_locations().len()
    }

    pub fn terminal_by_number(&self, terminal_number: &str) -> Option<&Terminal> {
        self.terminals
            .iter()
            .find(|t| t.terminal_number == terminal_number)
    }

    /// Total shipment volume attributed to one terminal, independent of
    /// layer visibility — this backs summary displays even when the
    /// shipping layer is hidden.
    pub fn shipment_total_for_terminal(&self, terminal_number: &str) -> u32 {
        self.shipping_locations
            .iter()
            .filter(|loc| loc.terminal_source == terminal_number)
            .map(|loc| loc.count)
            .sum()
    }

    /// A terminal's destinations projected to (city, state, count), sorted
    /// descending by count. The sort is stable: equal counts keep their
    /// canonical order.
    pub fn top_cities_for_terminal(&self, terminal_number: &str) -> Vec<CityVolume> {
        let mut cities: Vec<CityVolume> = self
            .shipping_locations
            .iter()
            .filter(|loc| loc.terminal_source == terminal_number)
            .map(|loc| CityVolume {
                city: loc.city.clone(),
                state: loc.state.clone(),
                count: loc.count,
            })
            .collect();
        cities.sort_by(|a, b| b.count.cmp(&a.count));
        cities
    }

    /// Sum of the stored `total` staff count over all terminals.
    pub fn aggregate_staff_total(&self) -> u32 {
        self.terminals.iter().map(|t| t.total).sum()
    }

    /// Sum of shipment counts over all shipping locations.
    pub fn aggregate_shipment_total(&self) -> u32 {
        self.shipping_locations.iter().map(|loc| loc.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Position;

    fn terminal(number: &str, total: u32) -> Terminal {
        Terminal {
            id: number.to_string(),
            name: format!("Terminal {number}"),
            terminal_number: number.to_string(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            phone: String::new(),
            manager: String::new(),
            drivers: 0,
            shop: 0,
            other: 0,
            total,
            opened: String::new(),
            shop_bays: String::new(),
            facility_type: String::new(),
            primary_shippers: String::new(),
            position: Position { lat: 0.0, lng: 0.0 },
        }
    }

    fn shipping(id: &str, source: &str, city: &str, count: u32) -> ShippingLocation {
        ShippingLocation {
            id: id.to_string(),
            name: format!("{city} ({count})"),
            terminal_source: source.to_string(),
            city: city.to_string(),
            state: "NY".to_string(),
            count,
            position: Position { lat: 0.0, lng: 0.0 },
        }
    }

    fn seeded_store() -> MapStore {
        let mut store = MapStore::new();
        store.replace_terminals(vec![terminal("22", 21), terminal("23", 17)]);
        store.replace_shipping_locations(vec![
            shipping("1", "22", "Niagara", 82),
            shipping("2", "22", "Woodstock", 3),
            shipping("3", "23", "Niagara", 26),
            shipping("4", "22", "Buffalo", 45),
            shipping("5", "23", "Detroit", 67),
        ]);
        store
    }

    #[test]
    fn empty_replacement_preserves_existing_data() {
        let mut store = seeded_store();
        store.replace_terminals(Vec::new());
        store.replace_shipping_locations(Vec::new());
        assert_eq!(store.terminal_count(), 2);
        assert_eq!(store.shipping_locations().len(), 5);
    }

    #[test]
    fn hidden_terminals_layer_empties_the_view() {
        let mut store = seeded_store();
        assert_eq!(store.visible_terminals().len(), 2);
        assert!(store.toggle_layer("terminals"));
        assert!(store.visible_terminals().is_empty());
        // The canonical list is untouched
        assert_eq!(store.terminal_count(), 2);
    }

    #[test]
    fn toggle_unknown_layer_reports_no_match() {
        let mut store = MapStore::new();
        assert!(!store.toggle_layer("heatmap"));
    }

    #[test]
    fn shipping_view_honors_layer_and_filter() {
        let mut store = seeded_store();
        assert_eq!(store.visible_shipping_count(), 5);

        store.set_terminal_filter(Some("22".to_string()));
        let visible: Vec<_> = store
            .visible_shipping_locations()
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(visible, ["1", "2", "4"]);

        // Hiding the layer empties the view regardless of filter state...
        store.toggle_layer("shipping");
        assert!(store.visible_shipping_locations().is_empty());

        // ...and toggling it back restores the filtered view.
        store.toggle_layer("shipping");
        assert_eq!(store.visible_shipping_count(), 3);
    }

    #[test]
    fn shipment_total_ignores_visibility() {
        let mut store = seeded_store();
        store.toggle_layer("shipping");
        assert_eq!(store.shipment_total_for_terminal("22"), 82 + 3 + 45);
        assert_eq!(store.shipment_total_for_terminal("23"), 26 + 67);
        assert_eq!(store.shipment_total_for_terminal("99"), 0);
    }

    #[test]
    fn top_cities_sorted_descending_and_stable() {
        let mut store = MapStore::new();
        store.replace_shipping_locations(vec![
            shipping("1", "22", "Albany", 10),
            shipping("2", "22", "Buffalo", 40),
            shipping("3", "22", "Rochester", 10),
            shipping("4", "22", "Syracuse", 25),
        ]);
        let cities = store.top_cities_for_terminal("22");
        let names: Vec<_> = cities.iter().map(|c| c.city.as_str()).collect();
        // Albany and Rochester tie at 10 and keep canonical order
        assert_eq!(names, ["Buffalo", "Syracuse", "Albany", "Rochester"]);
    }

    #[test]
    fn select_terminal_toggles() {
        let mut store = seeded_store();
        let t = store.terminal_by_number("22").unwrap().clone();
        store.select_terminal(&t);
        assert_eq!(store.selected_terminal(), Some("22"));
        store.select_terminal(&t);
        assert_eq!(store.selected_terminal(), None);
    }

    #[test]
    fn set_terminal_filter_reports_changes() {
        let mut store = seeded_store();
        assert!(store.set_terminal_filter(Some("22".to_string())));
        assert!(!store.set_terminal_filter(Some("22".to_string())));
        assert!(store.set_terminal_filter(None));
        assert!(!store.set_terminal_filter(None));
    }

    #[test]
    fn aggregates_are_zero_on_empty_collections() {
        let store = MapStore::new();
        assert_eq!(store.aggregate_staff_total(), 0);
        assert_eq!(store.aggregate_shipment_total(), 0);
    }

    #[test]
    fn aggregates_sum_stored_values() {
        let store = seeded_store();
        assert_eq!(store.aggregate_staff_total(), 38);
        assert_eq!(store.aggregate_shipment_total(), 82 + 3 + 26 + 45 + 67);
    }

    #[test]
    fn expansion_set_toggles_membership() {
        let mut store = MapStore::new();
        assert!(!store.is_expanded("22"));
        store.toggle_expanded("22");
        assert!(store.is_expanded("22"));
        store.toggle_expanded("22");
        assert!(!store.is_expanded("22"));
    }
}
