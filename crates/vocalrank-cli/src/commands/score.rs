//! Score command implementation
//!
//! Prints the comparable score of each pitch notation given on the command
//! line. Useful for checking catalog entries by hand.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use vocalrank_core::{score_str, Pitch, NO_SCORE};

use super::json_output::{CommandOutput, NotationScore, ScoreOutput};

/// Score each notation.
pub fn score_notations(notations: &[String]) -> Vec<NotationScore> {
    notations
        .iter()
        .map(|notation| NotationScore {
            notation: notation.clone(),
            score: score_str(notation),
            canonical: Pitch::parse(notation).map(|p| p.to_string()),
        })
        .collect()
}

/// Run the score command
///
/// # Arguments
/// * `notations` - Pitch notations to score
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(notations: &[String], json_output: bool) -> Result<ExitCode> {
    let scores = score_notations(notations);

    if json_output {
        let output: ScoreOutput = CommandOutput::success(scores);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    for entry in &scores {
        if entry.score == NO_SCORE {
            println!(
                "{:<12} {:>3}  {}",
                entry.notation,
                entry.score,
                "(no data)".yellow()
            );
        } else {
            println!("{:<12} {:>3}", entry.notation, entry.score.to_string().green());
        }
    }

    Ok(ExitCode::SUCCESS)
}
