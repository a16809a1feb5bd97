//! VocalRank CLI - karaoke songs ranked by vocal-range difficulty
//!
//! This binary loads a karaoke catalog, ranks its songs by their highest
//! note, and shows per-song range details.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use vocalrank_cli::commands;
use vocalrank_cli::logging;
use vocalrank_core::DEFAULT_CATALOG_FILE;

/// VocalRank - Karaoke Vocal Range Rankings
#[derive(Parser)]
#[command(name = "vocalrank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print songs ranked by their highest note
    Rank {
        /// Path to the catalog JSON (use - for stdin)
        #[arg(short, long, env = "VOCALRANK_DATA", default_value = DEFAULT_CATALOG_FILE)]
        data: PathBuf,

        /// Only show songs whose title or artist contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Also list songs without pitch data
        #[arg(long)]
        missing: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show details and the range bar for one song
    Show {
        /// Song key, or text contained in its title or artist
        query: String,

        /// Path to the catalog JSON (use - for stdin)
        #[arg(short, long, env = "VOCALRANK_DATA", default_value = DEFAULT_CATALOG_FILE)]
        data: PathBuf,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the score of pitch notations (e.g. hiA#, mid2G)
    Score {
        /// Notations to score
        #[arg(required = true)]
        notations: Vec<String>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Rank {
            data,
            search,
            missing,
            json,
        } => commands::rank::run(
            &data,
            &commands::rank::RankOptions {
                search: search.as_deref(),
                show_missing: missing,
                json,
            },
        ),
        Commands::Show { query, data, json } => commands::show::run(&data, &query, json),
        Commands::Score { notations, json } => commands::score::run(&notations, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
