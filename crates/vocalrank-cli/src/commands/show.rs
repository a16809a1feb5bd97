//! Show command implementation
//!
//! Prints the detail view for one song: its pitch data, display rank, and a
//! range bar from its lowest note to its representative high note.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use vocalrank_core::pitch::NO_DATA_PLACEHOLDER;
use vocalrank_core::range_bar::{SCALE_MAX, SCALE_MIN};
use vocalrank_core::{rank, search, RangeBar, RankedList, ScoredSong};

use super::json_output::{error_codes, CommandOutput, JsonError, ShowOutput, SongDetail};
use crate::input::load_songs;

/// Width of the text range bar, in characters.
pub const RANGE_BAR_CELLS: usize = 40;

/// Run the show command
///
/// # Arguments
/// * `data` - Path to the catalog JSON (`-` for stdin)
/// * `query` - Song key, or a title/artist search term
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 if nothing matches or loading fails
pub fn run(data: &Path, query: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(data, query)
    } else {
        run_human(data, query)
    }
}

fn run_human(data: &Path, query: &str) -> Result<ExitCode> {
    let loaded = load_songs(data)
        .with_context(|| format!("Failed to load catalog: {}", data.display()))?;
    let list = rank(&loaded.songs);

    let Some(song) = find_song(&list, query) else {
        eprintln!("{} no song matches {:?}", "error:".red().bold(), query);
        return Ok(ExitCode::from(1));
    };

    print_detail(song, &RangeBar::for_song(song));
    Ok(ExitCode::SUCCESS)
}

fn run_json(data: &Path, query: &str) -> Result<ExitCode> {
    let loaded = match load_songs(data) {
        Ok(loaded) => loaded,
        Err(err) => {
            let output = ShowOutput::failure(vec![JsonError::from_catalog_error(&err, data)]);
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
    };
    let list = rank(&loaded.songs);

    match find_song(&list, query) {
        Some(song) => {
            let output = CommandOutput::success(SongDetail {
                song: song.clone(),
                range_bar: RangeBar::for_song(song),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let error = JsonError::new(
                error_codes::NO_MATCH,
                format!("no song matches {:?}", query),
            )
            .with_file(data.display().to_string());
            let output = ShowOutput::failure(vec![error]);
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(ExitCode::from(1))
        }
    }
}

/// Find the song a query refers to.
///
/// An exact key match wins, then the first ranked song whose title or
/// artist matches, then the first matching song without data.
pub fn find_song<'a>(list: &'a RankedList, query: &str) -> Option<&'a ScoredSong> {
    list.iter()
        .find(|s| s.record.key == query)
        .or_else(|| list.iter().find(|s| search::matches(s, query)))
}

fn print_detail(song: &ScoredSong, bar: &RangeBar) {
    let record = &song.record;
    let label = |text: &str| format!("{:<10}", text).dimmed();
    let or_placeholder = |value: Option<&str>| value.unwrap_or(NO_DATA_PLACEHOLDER).to_string();

    println!("{}", record.name.cyan().bold());
    println!("  {} {}", label("Artist:"), record.artist);
    if let Some(duration) = &record.duration {
        println!("  {} {}", label("Duration:"), duration);
    }
    match song.display_rank {
        Some(rank) => println!("  {} #{}", label("Rank:"), rank),
        None => println!("  {} {}", label("Rank:"), "no pitch data".yellow()),
    }
    println!(
        "  {} {} ({})",
        label("Highest:"),
        song.pitch_label().green().bold(),
        song.register_type
    );
    println!("  {} {}", label("Chest:"), or_placeholder(record.chest.as_deref()));
    println!("  {} {}", label("Falsetto:"), or_placeholder(record.falsetto.as_deref()));
    println!("  {} {}", label("Lowest:"), or_placeholder(record.low.as_deref()));
    println!(
        "  {} {} {}",
        label("Range:"),
        bar.render(RANGE_BAR_CELLS),
        format_bar_extent(bar).dimmed()
    );
}

/// Describe a bar's position, e.g. "12.3% - 67.7% of -5..60".
pub(crate) fn format_bar_extent(bar: &RangeBar) -> String {
    if bar.is_empty() {
        return "(not enough data)".to_string();
    }
    format!(
        "{:.1}% - {:.1}% of {}..{}",
        bar.left_percent,
        bar.right_percent(),
        SCALE_MIN,
        SCALE_MAX
    )
}
