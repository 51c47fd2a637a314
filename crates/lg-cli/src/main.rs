//! CLI frontend for browsing legends exports.

mod commands;
mod progress;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use lg_core::Syntax;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "lg",
    about = "Browse the history of a generated world from its legends export",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// The document to load.
#[derive(Args)]
pub struct Source {
    /// Legends export (.xml or .json, already decompressed and UTF-8)
    file: PathBuf,

    /// Document syntax, if the file extension does not tell
    #[arg(long)]
    syntax: Option<Syntax>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every collection as fixed-width columns
    Dump {
        #[command(flatten)]
        source: Source,
    },

    /// Count the records of each collection
    Stats {
        #[command(flatten)]
        source: Source,
    },

    /// Show a historical figure and narrate its events
    Figure {
        #[command(flatten)]
        source: Source,

        /// Figure id
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },

    /// Narrate historical events
    Events {
        #[command(flatten)]
        source: Source,

        /// Only events of this year
        #[arg(short, long, allow_negative_numbers = true)]
        year: Option<i32>,
    },

    /// Export the world, or one collection, as JSON
    Export {
        #[command(flatten)]
        source: Source,

        /// Collection: world, regions, underground_regions, sites, artifacts,
        /// figures, entities, entity_populations, events
        #[arg(short, long, default_value = "world")]
        collection: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lg=info,lg_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Dump { source } => commands::dump::run(&source),
        Commands::Stats { source } => commands::stats::run(&source),
        Commands::Figure { source, id } => commands::figure::run(&source, id),
        Commands::Events { source, year } => commands::events::run(&source, year),
        Commands::Export {
            source,
            collection,
            output,
        } => commands::export::run(&source, &collection, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
