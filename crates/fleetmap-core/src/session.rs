//! Interaction layer: owns the store, the marker cache, and the two
//! collaborators, and routes user events between them. Selection mutators
//! invalidate the marker cache here so the coupling stays visible at one
//! call site instead of hiding inside the store.

use std::rc::Rc;
use std::time::Duration;

use crate::marker::{MarkerCache, MarkerStyle};
use crate::record::{Position, ShippingLocation, Terminal};
use crate::reconcile::{shipping_from_placemark, terminal_from_placemark};
use crate::sample;
use crate::store::MapStore;
use crate::surface::{Dismissal, MapSurface, Notice, Notifier, TerminalDetails};

const DETAILS_ZOOM: u8 = 12;

pub struct MapSession<S: MapSurface, N: Notifier> {
    store: MapStore,
    cache: MarkerCache,
    surface: S,
    notifier: N,
}

impl<S: MapSurface, N: Notifier> MapSession<S, N> {
    pub fn new(surface: S, notifier: N) -> Self {
        MapSession {
            store: MapStore::new(),
            cache: MarkerCache::new(),
            surface,
            notifier,
        }
    }

    pub fn store(&self) -> &MapStore {
        &self.store
    }

    // ---- loading ---------------------------------------------------------

    /// Parse and apply the two source documents. The pair is a unit: when
    /// either fails to parse as a whole, neither is applied and the
    /// built-in sample data is loaded instead. A document that parses but
    /// yields zero records of its kind leaves prior data for that kind
    /// unchanged.
    pub fn load(&mut self, terminals_text: &str, shipping_text: &str) {
        let parsed = placemark::parse_document(terminals_text)
            .and_then(|t| placemark::parse_document(shipping_text).map(|s| (t, s)));

        let (terminal_marks, shipping_marks) = match parsed {
            Ok(pair) => pair,
            Err(err) => {
                log::warn!("failed to load source documents: {err}; using sample data");
                self.load_fallback();
                return;
            }
        };

        let terminals: Vec<Terminal> = terminal_marks
            .iter()
            .enumerate()
            .map(|(i, mark)| terminal_from_placemark(mark, i + 1))
            .collect();
        let shipping: Vec<ShippingLocation> = shipping_marks
            .iter()
            .enumerate()
            .map(|(i, mark)| shipping_from_placemark(mark, i + 1))
            .collect();

        log::info!(
            "loaded {} terminals, {} shipping locations",
            terminals.len(),
            shipping.len()
        );
        self.store.replace_terminals(terminals);
        self.store.replace_shipping_locations(shipping);

        if self.store.terminal_count() > 0 {
            self.center_on_terminals();
        }
    }

    /// Load the built-in sample dataset.
    pub fn load_fallback(&mut self) {
        self.store.replace_terminals(sample::terminals());
        self.store.replace_shipping_locations(sample::shipping_locations());
        self.center_on_terminals();
    }

    // ---- selection and clicks --------------------------------------------

    /// A terminal marker was clicked: toggle the filter onto it (or off,
    /// when it was already active), show its info notice, and drop cached
    /// marker styles.
    pub fn on_terminal_click(&mut self, terminal: &Terminal) {
        self.store.select_terminal(terminal);
        self.show_terminal_info(terminal);
        self.cache.invalidate();
    }

    pub fn on_shipping_click(&mut self, location: &ShippingLocation) {
        self.show_shipping_info(location);
    }

    pub fn set_terminal_filter(&mut self, terminal_number: Option<String>) {
        self.store.set_terminal_filter(terminal_number);
        self.cache.invalidate();
    }

    pub fn clear_selection(&mut self) {
        self.store.clear_selection();
        self.cache.invalidate();
    }

    pub fn toggle_layer(&mut self, layer_id: &str) -> bool {
        self.store.toggle_layer(layer_id)
    }

    pub fn toggle_expanded(&mut self, terminal_number: &str) {
        self.store.toggle_expanded(terminal_number);
    }

    // ---- marker styling --------------------------------------------------

    pub fn terminal_marker(&mut self, terminal: &Terminal) -> Rc<MarkerStyle> {
        let selected = self.store.selected_terminal() == Some(terminal.terminal_number.as_str());
        self.cache.terminal(terminal, selected)
    }

    pub fn shipping_marker(&mut self, location: &ShippingLocation) -> Rc<MarkerStyle> {
        let selected = self.store.selected_terminal() == Some(location.terminal_source.as_str());
        self.cache.shipping(location, selected)
    }

    pub fn terminal_title(terminal: &Terminal) -> String {
        format!("Terminal {} - {}", terminal.terminal_number, terminal.name)
    }

    // ---- notices and details ---------------------------------------------

    fn show_terminal_info(&mut self, terminal: &Terminal) {
        let message = format!(
            "Terminal {} - {}\nManager: {}\nTotal Staff: {} ({} drivers, {} shop, {} other)\nPrimary Shippers: {}",
            terminal.terminal_number,
            terminal.name,
            terminal.manager,
            terminal.total,
            terminal.drivers,
            terminal.shop,
            terminal.other,
            terminal.primary_shippers
        );
        self.notifier.notify(&Notice::new(message, Duration::from_secs(8)));
    }

    fn show_shipping_info(&mut self, location: &ShippingLocation) {
        let message = format!(
            "{}, {}\nFrom: {}\nShipments: {}",
            location.city, location.state, location.terminal_source, location.count
        );
        self.notifier.notify(&Notice::new(message, Duration::from_secs(5)));
    }

    /// Open the details dialog for a terminal; a `Center` dismissal pans
    /// the map to it.
    pub fn show_terminal_details(&mut self, terminal: &Terminal) {
        let details = TerminalDetails {
            terminal: terminal.clone(),
            city_data: self.store.top_cities_for_terminal(&terminal.terminal_number),
        };
        if self.notifier.show_details(&details) == Dismissal::Center {
            self.surface.pan_to(terminal.position, DETAILS_ZOOM);
        }
    }

    /// Surface a renderer-initialization failure once; the data views stay
    /// queryable in this degraded mode.
    pub fn map_unavailable(&mut self) {
        log::warn!("map surface unavailable; running without rendering");
        self.notifier.notify(&Notice::new(
            "Map view is unavailable. Data remains accessible.",
            Duration::from_secs(5),
        ));
    }

    // ---- centering -------------------------------------------------------

    pub fn center_on_terminals(&mut self) {
        let positions: Vec<Position> =
            self.store.terminals().iter().map(|t| t.position).collect();
        if !positions.is_empty() {
            self.surface.fit_bounds(&positions);
        }
    }

    pub fn center_on_shipping(&mut self) {
        let positions: Vec<Position> = self
            .store
            .visible_shipping_locations()
            .iter()
            .map(|loc| loc.position)
            .collect();
        if !positions.is_empty() {
            self.surface.fit_bounds(&positions);
        }
    }
}
