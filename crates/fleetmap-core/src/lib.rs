//! Data model and derived views for the fleet terminal map.
//!
//! Two related point datasets — fleet terminals and their shipping
//! destinations — are parsed out of placemark KML documents by the
//! [`placemark`] crate, reconciled into typed records here, and served
//! through [`store::MapStore`] as layer-gated, filterable read views.
//! [`session::MapSession`] layers the interaction behavior (selection,
//! notices, marker styling) on top and talks to the rendering and
//! notification collaborators through the traits in [`surface`].

pub mod export;
pub mod marker;
pub mod reconcile;
pub mod record;
pub mod sample;
pub mod session;
pub mod store;
pub mod surface;

pub use export::{ExportDocument, ExportError, EXPORT_FILENAME};
pub use marker::{MarkerCache, MarkerIcon, MarkerStyle};
pub use record::{CityVolume, LayerKind, MapLayer, Position, ShippingLocation, Terminal};
pub use session::MapSession;
pub use store::MapStore;
pub use surface::{Dismissal, MapSurface, Notice, Notifier, TerminalDetails};
