//! Rank command implementation
//!
//! Loads the catalog, ranks songs by their highest note, and prints the
//! ranking table. Songs without usable pitch data can be listed separately.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;
use vocalrank_core::{rank, search, RegisterType, ScoredSong};

use super::json_output::{CommandOutput, JsonError, RankOutput, RankResult};
use crate::input::load_songs;

/// Options for the rank command.
#[derive(Debug, Clone, Default)]
pub struct RankOptions<'a> {
    /// Case-insensitive title/artist filter
    pub search: Option<&'a str>,
    /// Also list songs without pitch data
    pub show_missing: bool,
    /// Emit machine-readable JSON
    pub json: bool,
}

/// Run the rank command
///
/// # Arguments
/// * `data` - Path to the catalog JSON (`-` for stdin)
/// * `options` - Filtering and output options
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(data: &Path, options: &RankOptions<'_>) -> Result<ExitCode> {
    if options.json {
        run_json(data, options)
    } else {
        run_human(data, options)
    }
}

/// Run rank with human-readable (colored) output
fn run_human(data: &Path, options: &RankOptions<'_>) -> Result<ExitCode> {
    let loaded = load_songs(data)
        .with_context(|| format!("Failed to load catalog: {}", data.display()))?;
    let list = rank(&loaded.songs);
    let term = options.search.unwrap_or("");
    let visible = search::filter(&list.ranked, term);
    debug!(visible = visible.len(), "applied search filter");

    println!(
        "{} {}",
        "Vocal range ranking".cyan().bold(),
        format!(
            "({} ranked, {} without data)",
            list.ranked.len(),
            list.missing.len()
        )
        .dimmed()
    );
    if let Some(term) = options.search {
        println!("{} {}", "Search:".dimmed(), term);
    }
    println!();

    if visible.is_empty() {
        println!("  {}", "No matching songs.".yellow());
    }
    for song in &visible {
        println!("{}", format_ranked_row(song));
    }

    if options.show_missing {
        let missing = search::filter(&list.missing, term);
        println!("\n{}", "Missing pitch data:".yellow().bold());
        if missing.is_empty() {
            println!("  {}", "(none)".dimmed());
        }
        for song in missing {
            println!("  - {} / {}", song.record.name, song.record.artist.dimmed());
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Run rank with machine-readable JSON output
fn run_json(data: &Path, options: &RankOptions<'_>) -> Result<ExitCode> {
    let loaded = match load_songs(data) {
        Ok(loaded) => loaded,
        Err(err) => {
            let output = RankOutput::failure(vec![JsonError::from_catalog_error(&err, data)]);
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
    };

    let list = rank(&loaded.songs);
    let term = options.search.unwrap_or("");
    let ranked = search::filter(&list.ranked, term)
        .into_iter()
        .cloned()
        .collect();
    let missing = options
        .show_missing
        .then(|| search::filter(&list.missing, term).into_iter().cloned().collect());

    let output = CommandOutput::success(RankResult {
        source: loaded.source.display().to_string(),
        search: options.search.map(str::to_string),
        total: list.len(),
        ranked,
        missing,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(ExitCode::SUCCESS)
}

/// Format one ranking table row: rank, title, artist, pitch, register.
pub(crate) fn format_ranked_row(song: &ScoredSong) -> String {
    let rank = song
        .display_rank
        .map(|r| format!("{:>3}", r))
        .unwrap_or_else(|| "  -".to_string());
    let register = match song.register_type {
        RegisterType::Chest => song.register_type.as_str().normal(),
        RegisterType::Falsetto => song.register_type.as_str().magenta(),
    };

    format!(
        "{}  {:<32} {:<24} {:>7} {}",
        rank.bold(),
        song.record.name,
        song.record.artist.dimmed(),
        song.pitch_label().green(),
        register
    )
}
