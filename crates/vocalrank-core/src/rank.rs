//! Difficulty ranking with competition-style tie sharing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::pitch;
use crate::song::{RegisterType, ScoredSong, SongRecord};

/// Result of a ranking pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedList {
    /// Rankable songs, hardest first, each with a display rank.
    pub ranked: Vec<ScoredSong>,
    /// Songs with no usable high note, in input order.
    pub missing: Vec<ScoredSong>,
}

impl RankedList {
    /// Total number of songs across both listings.
    pub fn len(&self) -> usize {
        self.ranked.len() + self.missing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty() && self.missing.is_empty()
    }

    /// Iterates over ranked songs followed by missing-data songs.
    pub fn iter(&self) -> impl Iterator<Item = &ScoredSong> {
        self.ranked.iter().chain(self.missing.iter())
    }
}

/// Compute a song's representative score without ranking it.
///
/// Falsetto wins only when it scores strictly higher than chest; ties and
/// the all-missing case resolve to chest.
pub fn score_song(record: &SongRecord) -> ScoredSong {
    let chest_score = pitch::score(record.chest.as_deref());
    let falsetto_score = pitch::score(record.falsetto.as_deref());

    let (representative_score, representative_pitch, register_type) =
        if falsetto_score > chest_score {
            (falsetto_score, record.falsetto.clone(), RegisterType::Falsetto)
        } else {
            (chest_score, record.chest.clone(), RegisterType::Chest)
        };

    ScoredSong {
        record: record.clone(),
        representative_score,
        representative_pitch,
        register_type,
        low_score: pitch::score(record.low.as_deref()),
        display_rank: None,
    }
}

/// Rank songs by representative score, hardest first.
///
/// Songs scoring `<= 0` are routed to [`RankedList::missing`] in input
/// order. The rest are stably sorted by descending score and given
/// competition ranks: scores `[50, 50, 40]` rank `[1, 1, 3]`.
///
/// # Examples
/// ```
/// use vocalrank_core::{rank, SongRecord};
///
/// let songs = vec![
///     SongRecord::new("A", "x").with_chest("hiA"),
///     SongRecord::new("B", "y").with_chest("hiA"),
///     SongRecord::new("C", "z").with_chest("mid2A"),
///     SongRecord::new("D", "w").with_chest("---"),
/// ];
/// let list = rank(&songs);
/// let ranks: Vec<_> = list.ranked.iter().map(|s| s.display_rank.unwrap()).collect();
/// assert_eq!(ranks, vec![1, 1, 3]);
/// assert_eq!(list.missing[0].record.name, "D");
/// ```
pub fn rank(songs: &[SongRecord]) -> RankedList {
    let (mut ranked, missing): (Vec<ScoredSong>, Vec<ScoredSong>) =
        songs.iter().map(score_song).partition(ScoredSong::is_rankable);

    // Stable sort: equal scores keep input order.
    ranked.sort_by(|a, b| b.representative_score.cmp(&a.representative_score));
    assign_competition_ranks(&mut ranked);

    debug!(
        ranked = ranked.len(),
        missing = missing.len(),
        "ranked song collection"
    );

    RankedList { ranked, missing }
}

/// Assign 1-based competition ranks to songs already sorted by descending score.
fn assign_competition_ranks(sorted: &mut [ScoredSong]) {
    let mut display_rank: u32 = 1;
    let mut previous_score: Option<i32> = None;

    for (index, song) in sorted.iter_mut().enumerate() {
        let actual_rank = index as u32 + 1;
        if previous_score.is_some_and(|prev| song.representative_score < prev) {
            display_rank = actual_rank;
        }
        song.display_rank = Some(display_rank);
        previous_score = Some(song.representative_score);
    }
}
