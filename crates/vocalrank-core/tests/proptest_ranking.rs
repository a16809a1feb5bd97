//! Property-based tests for pitch scoring and ranking using proptest.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p vocalrank-core --test proptest_ranking
//! ```

use proptest::prelude::*;

use vocalrank_core::pitch::MAX_SCORE;
use vocalrank_core::{rank, score_str, RangeBar, SongRecord, NO_SCORE};

// ============================================================================
// Strategies
// ============================================================================

/// Valid notations, e.g. "mid2F#".
fn valid_notation() -> impl Strategy<Value = String> {
    "(low|mid1|mid2|hi|hihi)(A|A#|B|C|C#|D|D#|E|F|F#|G|G#)"
}

/// Mix of valid notations, placeholders, and noise.
fn any_notation() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => valid_notation(),
        1 => Just("---".to_string()),
        1 => Just(String::new()),
        1 => "[a-zA-Z0-9#\\- ]{0,8}",
    ]
}

fn song_record() -> impl Strategy<Value = SongRecord> {
    ("[A-Za-z ]{1,12}", any_notation(), any_notation()).prop_map(|(name, chest, falsetto)| {
        SongRecord::new(name, "artist")
            .with_chest(chest)
            .with_falsetto(falsetto)
    })
}

// ============================================================================
// Scoring
// ============================================================================

proptest! {
    /// Arbitrary text never panics and always lands on the sentinel or a valid score.
    #[test]
    fn score_is_total(s in ".{0,32}") {
        let score = score_str(&s);
        prop_assert!(score == NO_SCORE || (0..=MAX_SCORE).contains(&score));
    }

    /// Valid notations always score inside the valid range.
    #[test]
    fn valid_notation_scores_in_range(s in valid_notation()) {
        let score = score_str(&s);
        prop_assert!((0..=MAX_SCORE).contains(&score), "{} scored {}", s, score);
    }

    /// Trailing text after a valid notation does not change its score.
    #[test]
    fn trailing_text_ignored(s in valid_notation(), tail in "[ ()a-z0-9]{0,6}") {
        prop_assert_eq!(score_str(&format!("{}{}", s, tail)), score_str(&s));
    }
}

// ============================================================================
// Ranking
// ============================================================================

proptest! {
    /// Ranked scores are descending, positive, and missing scores are <= 0.
    #[test]
    fn ranked_descending_and_partitioned(songs in prop::collection::vec(song_record(), 0..24)) {
        let list = rank(&songs);
        prop_assert_eq!(list.len(), songs.len());
        for pair in list.ranked.windows(2) {
            prop_assert!(pair[0].representative_score >= pair[1].representative_score);
        }
        prop_assert!(list.ranked.iter().all(|s| s.representative_score > 0));
        prop_assert!(list.missing.iter().all(|s| s.representative_score <= 0));
        prop_assert!(list.missing.iter().all(|s| s.display_rank.is_none()));
    }

    /// Display ranks follow competition ranking.
    #[test]
    fn competition_ranks(songs in prop::collection::vec(song_record(), 1..24)) {
        let list = rank(&songs);
        for (i, song) in list.ranked.iter().enumerate() {
            let expected = 1 + list.ranked[..i]
                .iter()
                .filter(|s| s.representative_score > song.representative_score)
                .count() as u32;
            prop_assert_eq!(song.display_rank, Some(expected));
        }
    }

    /// Ranking the same input twice yields the same output.
    #[test]
    fn rank_idempotent(songs in prop::collection::vec(song_record(), 0..16)) {
        prop_assert_eq!(rank(&songs), rank(&songs));
    }

    /// Range bars stay inside the scale.
    #[test]
    fn range_bar_within_scale(low in -1i32..=MAX_SCORE, high in -1i32..=MAX_SCORE) {
        let bar = RangeBar::from_scores(low, high);
        prop_assert!((0.0..=100.0).contains(&bar.left_percent));
        prop_assert!((0.0..=100.0).contains(&bar.width_percent));
        prop_assert!(bar.left_percent + bar.width_percent <= 100.0 + 1e-9);
        if low == NO_SCORE || high == NO_SCORE {
            prop_assert_eq!(bar.width_percent, 0.0);
        }
    }
}
