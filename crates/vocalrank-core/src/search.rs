//! Title/artist search over scored songs.

use crate::song::ScoredSong;

/// Returns true if `song`'s title or artist contains `term`, ignoring case.
///
/// Surrounding whitespace in `term` is ignored, so a blank or
/// whitespace-only term matches every song.
pub fn matches(song: &ScoredSong, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty() || matches_lowercase(song, &term)
}

/// Filter songs by a search term, keeping their order and display ranks.
///
/// The term is trimmed before matching. A query of `" "` therefore keeps
/// every song instead of only titles that contain a space, and `" night "`
/// finds "Night Drive".
///
/// # Examples
/// ```
/// use vocalrank_core::{rank, search, SongRecord};
///
/// let list = rank(&[
///     SongRecord::new("Blue Sky", "Aoi").with_chest("hiA"),
///     SongRecord::new("Red Sun", "Akai").with_chest("mid2A"),
/// ]);
/// let hits = search::filter(&list.ranked, "SUN");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].display_rank, Some(2));
/// ```
pub fn filter<'a>(songs: &'a [ScoredSong], term: &str) -> Vec<&'a ScoredSong> {
    let term = term.trim().to_lowercase();
    songs
        .iter()
        .filter(|song| term.is_empty() || matches_lowercase(song, &term))
        .collect()
}

fn matches_lowercase(song: &ScoredSong, term: &str) -> bool {
    song.record.name.to_lowercase().contains(term)
        || song.record.artist.to_lowercase().contains(term)
}
