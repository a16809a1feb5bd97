//! Error types for catalog loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a song catalog.
///
/// Scoring and ranking never fail; this is the only error surface.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The top-level JSON value is neither an object nor an array.
    #[error("expected a JSON object or array of songs, found {0}")]
    UnexpectedShape(&'static str),

    /// A song entry has the wrong shape or field types.
    #[error("invalid song entry {key:?}: {source}")]
    InvalidSong {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Short, stable identifier for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::Io { .. } => "io",
            CatalogError::JsonParse(_) => "json_parse",
            CatalogError::UnexpectedShape(_) => "unexpected_shape",
            CatalogError::InvalidSong { .. } => "invalid_song",
        }
    }
}
