//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on `rank`, `show`, and `score`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use vocalrank_core::{CatalogError, RangeBar, ScoredSong};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// Catalog file could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Catalog is not valid JSON
    pub const JSON_PARSE: &str = "CLI_002";
    /// Catalog top level is not an object or array
    pub const CATALOG_SHAPE: &str = "CLI_003";
    /// A song entry has the wrong shape
    pub const INVALID_SONG: &str = "CLI_004";
    /// No song matched the query
    pub const NO_MATCH: &str = "CLI_005";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Catalog file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Song key (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
            key: None,
        }
    }

    /// Sets the file path.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Sets the song key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Converts a catalog loading error, tagging it with the source path.
    pub fn from_catalog_error(err: &CatalogError, source: &Path) -> Self {
        let code = match err {
            CatalogError::Io { .. } => error_codes::FILE_READ,
            CatalogError::JsonParse(_) => error_codes::JSON_PARSE,
            CatalogError::UnexpectedShape(_) => error_codes::CATALOG_SHAPE,
            CatalogError::InvalidSong { .. } => error_codes::INVALID_SONG,
        };
        let error = JsonError::new(code, err.to_string()).with_file(source.display().to_string());
        match err {
            CatalogError::InvalidSong { key, .. } => error.with_key(key.clone()),
            _ => error,
        }
    }
}

/// Generic success/failure envelope shared by all commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Command result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> CommandOutput<T> {
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Result payload of the `rank` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResult {
    /// Catalog source path
    pub source: String,
    /// Search term applied (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Number of songs in the catalog
    pub total: usize,
    /// Ranked songs (after search filtering)
    pub ranked: Vec<ScoredSong>,
    /// Songs without usable pitch data (only with `--missing`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<Vec<ScoredSong>>,
}

/// Result payload of the `show` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongDetail {
    pub song: ScoredSong,
    pub range_bar: RangeBar,
}

/// One scored notation in the `score` command output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotationScore {
    /// Input notation as given
    pub notation: String,
    /// Score (-1 for no data)
    pub score: i32,
    /// Canonical notation, if the input names one of the 12 notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
}

pub type RankOutput = CommandOutput<RankResult>;
pub type ShowOutput = CommandOutput<SongDetail>;
pub type ScoreOutput = CommandOutput<Vec<NotationScore>>;
