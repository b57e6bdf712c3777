//! Console-backed implementations of the core's collaborator traits.
//! There is no map to draw into, so surface requests are logged and
//! notices print to stdout.

use colored::Colorize;
use fleetmap_core::{Dismissal, MapSurface, Notice, Notifier, Position, TerminalDetails};

#[derive(Default)]
pub struct ConsoleSurface;

impl MapSurface for ConsoleSurface {
    fn fit_bounds(&mut self, positions: &[Position]) {
        log::debug!("fit bounds around {} positions", positions.len());
    }

    fn pan_to(&mut self, position: Position, zoom: u8) {
        log::debug!("pan to ({}, {}) at zoom {zoom}", position.lat, position.lng);
    }
}

#[derive(Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notice: &Notice) -> Dismissal {
        println!("{}", notice.message);
        Dismissal::Dismissed
    }

    fn show_details(&mut self, details: &TerminalDetails) -> Dismissal {
        let t = &details.terminal;
        println!(
            "{}",
            format!("Terminal {} - {}", t.terminal_number, t.name).bold()
        );
        println!("  {}", t.address);
        println!("  {}, {} {}", t.city, t.state, t.zip);
        println!("  Phone: {}", t.phone);
        println!("  Manager: {}", t.manager);
        println!(
            "  Staff: {} total ({} drivers, {} shop, {} other)",
            t.total, t.drivers, t.shop, t.other
        );
        if !t.shop_bays.is_empty() {
            println!("  Shop Bays: {}", t.shop_bays);
        }
        if !details.city_data.is_empty() {
            println!("  Destinations:");
            for c in &details.city_data {
                println!("    {}, {}: {}", c.city, c.state, c.count);
            }
            println!("  Total shipments: {}", details.shipment_total());
        }
        Dismissal::Dismissed
    }
}
