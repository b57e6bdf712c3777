use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;

mod console;
mod export;
mod load;
mod terminal;

#[derive(Parser)]
#[command(name = "fleetmap")]
#[command(about = "Fleet terminal and shipping-destination map tooling", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true, hide = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the source documents and print a dataset summary
    #[command(alias = "l")]
    Load(load::LoadArgs),

    /// Report on one terminal: details, shipment total, top cities
    #[command(alias = "t")]
    Terminal(terminal::TerminalArgs),

    /// Export the canonical state as JSON
    #[command(alias = "e")]
    Export(export::ExportArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default level depends on --debug; RUST_LOG still overrides
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    match cli.command {
        Commands::Load(args) => load::execute(args),
        Commands::Terminal(args) => terminal::execute(args),
        Commands::Export(args) => export::execute(args),
    }
}
