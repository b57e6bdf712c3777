use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use fleetmap_core::{ExportDocument, EXPORT_FILENAME};

use crate::load::{build_session, SourceArgs};

#[derive(Args, Debug)]
#[command(about = "Export the canonical state as JSON")]
pub struct ExportArgs {
    /// Output path (defaults to terminal-shipping-data.json)
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let session = build_session(&args.source);
    let out = args.out.unwrap_or_else(|| PathBuf::from(EXPORT_FILENAME));

    let json = ExportDocument::from_store(session.store()).to_json_pretty()?;
    fs::write(&out, json).with_context(|| format!("failed to write {}", out.display()))?;

    println!(
        "Exported {} terminals and {} shipping locations to {}",
        session.store().terminal_count(),
        session.store().shipping_locations().len(),
        out.display()
    );
    Ok(())
}
