//! Catalog loading from the karaoke JSON document.
//!
//! The document is usually an object mapping arbitrary keys to song
//! objects. Arrays of song objects are accepted too. Records come back in
//! document order.
//!
//! Object entries keep their textual order even when keys look like
//! integers: `{"b": .., "10": .., "2": ..}` yields `b, 10, 2`. A JavaScript
//! `Object.values` would yield `2, 10, b` instead. The ranking sort is
//! stable, so this order decides which of two equally scored songs is
//! listed first.

use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::CatalogError;
use crate::song::SongRecord;

/// Default catalog file name.
pub const DEFAULT_CATALOG_FILE: &str = "karaoke_data.json";

/// Load a catalog from a file on disk.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<SongRecord>, CatalogError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let songs = parse_catalog(&text)?;
    debug!(path = %path.display(), songs = songs.len(), "loaded catalog");
    Ok(songs)
}

/// Parse a catalog document.
///
/// # Examples
/// ```
/// use vocalrank_core::catalog::parse_catalog;
///
/// let songs = parse_catalog(r#"{
///     "s1": {"name": "Song", "artist": "Band", "chest": "hiA", "falsetto": "---"}
/// }"#).unwrap();
/// assert_eq!(songs[0].key, "s1");
/// assert_eq!(songs[0].chest.as_deref(), Some("hiA"));
/// ```
pub fn parse_catalog(json: &str) -> Result<Vec<SongRecord>, CatalogError> {
    let document: Value = serde_json::from_str(json)?;

    let entries: Vec<(String, Value)> = match document {
        Value::Object(map) => map.into_iter().collect(),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        other => return Err(CatalogError::UnexpectedShape(value_kind(&other))),
    };

    entries
        .into_iter()
        .map(|(key, value)| parse_entry(key, value))
        .collect()
}

fn parse_entry(key: String, value: Value) -> Result<SongRecord, CatalogError> {
    match serde_json::from_value::<SongRecord>(value) {
        Ok(record) => {
            if record.name.is_empty() {
                warn!(key = %key, "song entry has no name");
            }
            Ok(record.with_key(key))
        }
        Err(source) => Err(CatalogError::InvalidSong { key, source }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
