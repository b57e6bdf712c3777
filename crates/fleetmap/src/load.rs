use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use fleetmap_core::{LayerKind, MapSession};

use crate::console::{ConsoleNotifier, ConsoleSurface};

/// Paths to the two source documents, shared by every subcommand.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Terminals KML document
    #[arg(long, value_name = "PATH")]
    pub terminals: Option<PathBuf>,

    /// Shipping destinations KML document
    #[arg(long, value_name = "PATH")]
    pub shipping: Option<PathBuf>,
}

#[derive(Args, Debug)]
#[command(about = "Load the source documents and print a dataset summary")]
pub struct LoadArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub type ConsoleSession = MapSession<ConsoleSurface, ConsoleNotifier>;

/// Build a session from the two documents. The pair is loaded as a unit:
/// if either path is missing or unreadable, the built-in sample data is
/// used instead — a load failure is never a hard error.
pub fn build_session(source: &SourceArgs) -> ConsoleSession {
    let mut session = MapSession::new(ConsoleSurface, ConsoleNotifier);

    let texts = match (&source.terminals, &source.shipping) {
        (Some(terminals), Some(shipping)) => {
            fs::read_to_string(terminals).and_then(|t| {
                fs::read_to_string(shipping).map(|s| (t, s))
            })
        }
        _ => {
            log::info!("no source documents given; using sample data");
            session.load_fallback();
            return session;
        }
    };

    match texts {
        Ok((terminals_text, shipping_text)) => {
            session.load(&terminals_text, &shipping_text);
        }
        Err(err) => {
            log::warn!("failed to read source documents: {err}; using sample data");
            session.load_fallback();
        }
    }
    session
}

pub fn execute(args: LoadArgs) -> Result<()> {
    let session = build_session(&args.source);
    let store = session.store();

    println!("{}", "Dataset summary".bold());
    println!(
        "  Terminals: {} ({})",
        store.terminal_count(),
        store.layer_color(LayerKind::Terminals)
    );
    println!(
        "  Shipping destinations: {} ({})",
        store.shipping_locations().len(),
        store.layer_color(LayerKind::Shipping)
    );
    println!("  Aggregate staff: {}", store.aggregate_staff_total());
    println!("  Aggregate shipments: {}", store.aggregate_shipment_total());

    for terminal in store.terminals() {
        println!(
            "  Terminal {} - {}: {} shipments",
            terminal.terminal_number,
            terminal.name,
            store.shipment_total_for_terminal(&terminal.terminal_number)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_kml(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "{body}").unwrap();
        path
    }

    #[test]
    fn loads_both_documents_as_a_pair() {
        let dir = tempfile::tempdir().unwrap();
        let terminals = write_kml(
            &dir,
            "terminals.kml",
            r#"<kml><Placemark><name>Cambridge</name>
               <ExtendedData><Data name="Term"><value>22</value></Data></ExtendedData>
               <Point><coordinates>-80.3144,43.3616</coordinates></Point>
               </Placemark></kml>"#,
        );
        let shipping = write_kml(
            &dir,
            "shipping.kml",
            r#"<kml><Placemark><name>Buffalo, NY (45)</name>
               <ExtendedData>
                 <Data name="Trm"><value>22 - CAMBRIDGE</value></Data>
                 <Data name="Count"><value>45</value></Data>
               </ExtendedData>
               <Point><coordinates>-78.8784,42.8864</coordinates></Point>
               </Placemark></kml>"#,
        );

        let session = build_session(&SourceArgs {
            terminals: Some(terminals),
            shipping: Some(shipping),
        });
        assert_eq!(session.store().terminal_count(), 1);
        assert_eq!(session.store().shipment_total_for_terminal("22"), 45);
    }

    #[test]
    fn unreadable_document_falls_back_to_sample_data() {
        let dir = tempfile::tempdir().unwrap();
        let terminals = write_kml(&dir, "terminals.kml", "<kml></kml>");

        let session = build_session(&SourceArgs {
            terminals: Some(terminals),
            shipping: Some(dir.path().join("missing.kml")),
        });
        // Sample dataset: three terminals, five destinations
        assert_eq!(session.store().terminal_count(), 3);
        assert_eq!(session.store().shipping_locations().len(), 5);
    }

    #[test]
    fn absent_paths_fall_back_to_sample_data() {
        let session = build_session(&SourceArgs { terminals: None, shipping: None });
        assert_eq!(session.store().terminal_count(), 3);
    }
}
