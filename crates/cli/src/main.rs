use clap::{Parser, Subcommand};
use seeker_cli::commands::{dump, inspect, search, verify};

#[derive(Parser)]
#[command(name = "seeker")]
#[command(about = "Seeker CLI - offline tools for registry snapshots", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the header of a snapshot file and of its previous generation.
    Inspect {
        snapshot_path: String,
    },
    /// Verify the checksum and encoding of a snapshot file
    Verify {
        snapshot_path: String,
    },
    /// Print the entries stored in a snapshot file
    Dump {
        snapshot_path: String,

        /// Emit a JSON array instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Search the built-in corpus
    Search {
        /// Case-insensitive substring; empty lists the whole corpus
        #[arg(default_value = "")]
        term: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { snapshot_path } => inspect::run(&snapshot_path),
        Commands::Verify { snapshot_path } => verify::run(&snapshot_path),
        Commands::Dump { snapshot_path, json } => dump::run(&snapshot_path, json),
        Commands::Search { term } => search::run(&term).map(|_| ()),
    }
}
