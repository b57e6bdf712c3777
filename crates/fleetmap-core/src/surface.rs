//! Seams to the external collaborators: the map-rendering surface and the
//! transient-notification presenter. The core only ever consumes these
//! narrow interfaces; rendering and dialog lifecycle stay outside.

use std::time::Duration;

use crate::record::{CityVolume, Position, Terminal};

/// Bounds-fit and pan/zoom primitives supplied by the renderer.
pub trait MapSurface {
    /// Fit the viewport around the given positions. Callers never pass an
    /// empty slice.
    fn fit_bounds(&mut self, positions: &[Position]);

    fn pan_to(&mut self, position: Position, zoom: u8);
}

/// A transient text notification request.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub dismiss_label: String,
    pub duration: Duration,
}

impl Notice {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Notice {
            message: message.into(),
            dismiss_label: "Close".to_string(),
            duration,
        }
    }
}

/// How a notice or dialog was dismissed. `Center` is the one result code
/// the core reacts to, by recentering the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    Dismissed,
    Center,
}

pub trait Notifier {
    fn notify(&mut self, notice: &Notice) -> Dismissal;

    /// Present the terminal details dialog. Defaults to rendering the
    /// payload as a plain notice.
    fn show_details(&mut self, details: &TerminalDetails) -> Dismissal {
        self.notify(&Notice::new(details.summary(), Duration::from_secs(8)))
    }
}

/// Explicit payload for the details dialog: the terminal plus its
/// destinations sorted by volume.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalDetails {
    pub terminal: Terminal,
    pub city_data: Vec<CityVolume>,
}

impl TerminalDetails {
    /// Total shipments across the listed cities (the dialog footer line).
    pub fn shipment_total(&self) -> u32 {
        self.city_data.iter().map(|c| c.count).sum()
    }

    pub fn summary(&self) -> String {
        let t = &self.terminal;
        let mut out = format!(
            "Terminal {} - {}\n{}\n{}, {} {}\nPhone: {}\nManager: {}\n",
            t.terminal_number, t.name, t.address, t.city, t.state, t.zip, t.phone, t.manager
        );
        out.push_str(&format!(
            "Staff: {} total ({} drivers, {} shop, {} other)\n",
            t.total, t.drivers, t.shop, t.other
        ));
        for c in &self.city_data {
            out.push_str(&format!("  {}, {}: {}\n", c.city, c.state, c.count));
        }
        out.push_str(&format!("Total shipments: {}", self.shipment_total()));
        out
    }
}
