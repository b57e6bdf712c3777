use anyhow::Result;
use clap::Args;

use crate::load::{build_session, SourceArgs};

#[derive(Args, Debug)]
#[command(about = "Report on one terminal by its business key")]
pub struct TerminalArgs {
    /// Terminal number (business key), e.g. 22
    pub number: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn execute(args: TerminalArgs) -> Result<()> {
    let mut session = build_session(&args.source);

    let Some(terminal) = session.store().terminal_by_number(&args.number).cloned() else {
        anyhow::bail!("no terminal with number {}", args.number);
    };

    session.show_terminal_details(&terminal);
    Ok(())
}
