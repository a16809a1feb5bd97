//! Catalog input for CLI commands.
//!
//! Reads the karaoke JSON document from a file, or from stdin when the path
//! is `-`.

use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;
use vocalrank_core::{catalog, CatalogError, SongRecord};

/// Path value that selects stdin.
pub const STDIN_PATH: &str = "-";

/// Songs loaded from a catalog source.
#[derive(Debug)]
pub struct LoadResult {
    /// Parsed records in document order.
    pub songs: Vec<SongRecord>,
    /// Where the records came from.
    pub source: PathBuf,
}

/// Load songs from `path` (or stdin for `-`).
pub fn load_songs(path: &Path) -> Result<LoadResult, CatalogError> {
    if path.as_os_str() == STDIN_PATH {
        return load_songs_from_reader(std::io::stdin().lock(), path);
    }

    let songs = catalog::load_catalog(path)?;
    info!(source = %path.display(), songs = songs.len(), "catalog loaded");
    Ok(LoadResult {
        songs,
        source: path.to_path_buf(),
    })
}

/// Load songs from an already-open reader, labelling them with `source`.
pub fn load_songs_from_reader(
    mut reader: impl Read,
    source: &Path,
) -> Result<LoadResult, CatalogError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|err| CatalogError::Io {
            path: source.to_path_buf(),
            source: err,
        })?;
    let songs = catalog::parse_catalog(&text)?;

    info!(source = %source.display(), songs = songs.len(), "catalog loaded");
    Ok(LoadResult {
        songs,
        source: source.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_load_songs_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"a": {{"name": "One", "artist": "X", "chest": "hiA"}},
                "b": {{"name": "Two", "artist": "Y", "chest": "---"}}}}"#
        )
        .unwrap();

        let result = load_songs(file.path()).unwrap();
        assert_eq!(result.songs.len(), 2);
        assert_eq!(result.source, file.path());
        assert_eq!(result.songs[1].key, "b");
    }

    #[test]
    fn test_load_songs_missing_file() {
        let err = load_songs(Path::new("/nonexistent/karaoke_data.json")).unwrap_err();
        assert_eq!(err.kind(), "io");
    }

    #[test]
    fn test_load_songs_from_reader() {
        let input = Cursor::new(r#"{"s": {"name": "Piped", "artist": "Z", "falsetto": "hiD"}}"#);
        let result = load_songs_from_reader(input, Path::new(STDIN_PATH)).unwrap();
        assert_eq!(result.source, Path::new("-"));
        assert_eq!(result.songs[0].key, "s");
        assert_eq!(result.songs[0].falsetto.as_deref(), Some("hiD"));
    }

    #[test]
    fn test_load_songs_from_reader_errors() {
        let err = load_songs_from_reader(Cursor::new("[1, 2"), Path::new(STDIN_PATH)).unwrap_err();
        assert_eq!(err.kind(), "json_parse");

        // Invalid UTF-8 surfaces as a read error labelled with the source.
        let err = load_songs_from_reader(Cursor::new(vec![0xff, 0xfe]), Path::new(STDIN_PATH))
            .unwrap_err();
        assert_eq!(err.kind(), "io");
        assert!(err.to_string().contains("failed to read catalog -"));
    }
}
