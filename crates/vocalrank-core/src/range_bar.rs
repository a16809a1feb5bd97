//! Range-bar geometry for the song detail view.
//!
//! The bar is drawn on a fixed scale from [`SCALE_MIN`] to [`SCALE_MAX`]
//! score units. With A-based scoring, valid scores span `0..=59`, so the
//! scale leaves a small margin below `lowA` and above `hihiG#`.

use serde::{Deserialize, Serialize};

use crate::pitch::NO_SCORE;
use crate::song::ScoredSong;

/// Lowest score shown on the range bar.
pub const SCALE_MIN: i32 = -5;

/// Highest score shown on the range bar.
pub const SCALE_MAX: i32 = 60;

/// Width of the scale in score units.
pub const TOTAL_RANGE: i32 = SCALE_MAX - SCALE_MIN;

/// Horizontal placement of a song's range, as percentages of the scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeBar {
    pub left_percent: f64,
    pub width_percent: f64,
}

impl RangeBar {
    /// A zero-width bar, used when either end of the range is unknown.
    pub const EMPTY: RangeBar = RangeBar {
        left_percent: 0.0,
        width_percent: 0.0,
    };

    /// Compute the bar for a low and high score.
    ///
    /// Either score being [`NO_SCORE`] collapses the bar.
    ///
    /// # Examples
    /// ```
    /// use vocalrank_core::range_bar::RangeBar;
    ///
    /// let bar = RangeBar::from_scores(-5, 60);
    /// assert_eq!(bar.left_percent, 0.0);
    /// assert_eq!(bar.width_percent, 100.0);
    /// assert!(RangeBar::from_scores(-1, 40).is_empty());
    /// ```
    pub fn from_scores(low_score: i32, high_score: i32) -> Self {
        if low_score == NO_SCORE || high_score == NO_SCORE {
            return Self::EMPTY;
        }

        let total = f64::from(TOTAL_RANGE);
        let left_percent =
            (f64::from(low_score - SCALE_MIN) / total * 100.0).clamp(0.0, 100.0);
        let width_percent =
            (f64::from(high_score - low_score) / total * 100.0).clamp(0.0, 100.0 - left_percent);

        Self {
            left_percent,
            width_percent,
        }
    }

    /// Bar spanning a song's lowest note to its representative high note.
    pub fn for_song(song: &ScoredSong) -> Self {
        Self::from_scores(song.low_score, song.representative_score)
    }

    pub fn is_empty(&self) -> bool {
        self.width_percent <= 0.0
    }

    /// Right edge of the bar as a percentage of the scale.
    pub fn right_percent(&self) -> f64 {
        self.left_percent + self.width_percent
    }

    /// Draw the bar as a text gauge `cells` characters wide.
    ///
    /// Filled cells are `█`, the rest of the scale is `·`. A non-empty bar
    /// always fills at least one cell.
    pub fn render(&self, cells: usize) -> String {
        if cells == 0 {
            return String::new();
        }

        let to_cell = |percent: f64| ((percent / 100.0) * cells as f64).round() as usize;
        let (start, end) = if self.is_empty() {
            (0, 0)
        } else {
            let start = to_cell(self.left_percent).min(cells - 1);
            let end = to_cell(self.right_percent()).clamp(start + 1, cells);
            (start, end)
        };

        (0..cells)
            .map(|i| if (start..end).contains(&i) { '█' } else { '·' })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::score_str;
    use crate::rank::score_song;
    use crate::song::SongRecord;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_low_c_to_hi_c() {
        let bar = RangeBar::from_scores(score_str("lowC"), score_str("hiC"));
        // lowC = 3, hiC = 39
        assert_close(bar.left_percent, 8.0 / 65.0 * 100.0);
        assert_close(bar.width_percent, 36.0 / 65.0 * 100.0);
        assert!((0.0..=100.0).contains(&bar.left_percent));
        assert!((0.0..=100.0).contains(&bar.width_percent));
        assert!(bar.right_percent() <= 100.0);
    }

    #[test]
    fn test_missing_end_collapses() {
        assert_eq!(RangeBar::from_scores(NO_SCORE, 39), RangeBar::EMPTY);
        assert_eq!(RangeBar::from_scores(3, NO_SCORE), RangeBar::EMPTY);
        assert_eq!(RangeBar::from_scores(NO_SCORE, NO_SCORE).width_percent, 0.0);
    }

    #[test]
    fn test_inverted_range_has_zero_width() {
        let bar = RangeBar::from_scores(40, 20);
        assert_eq!(bar.width_percent, 0.0);
        assert!(bar.is_empty());
    }

    #[test]
    fn test_width_clamped_to_remaining_scale() {
        let bar = RangeBar::from_scores(55, 90);
        assert_close(bar.left_percent, 60.0 / 65.0 * 100.0);
        assert_close(bar.right_percent(), 100.0);
    }

    #[test]
    fn test_for_song_uses_low_and_representative() {
        let scored = score_song(
            &SongRecord::new("s", "a")
                .with_chest("mid2G")
                .with_falsetto("hiC")
                .with_low("lowC"),
        );
        assert_eq!(
            RangeBar::for_song(&scored),
            RangeBar::from_scores(3, 39)
        );

        let no_low = score_song(&SongRecord::new("s", "a").with_chest("hiC"));
        assert!(RangeBar::for_song(&no_low).is_empty());
    }

    #[test]
    fn test_render() {
        assert_eq!(RangeBar::from_scores(-5, 60).render(10), "██████████");
        assert_eq!(RangeBar::EMPTY.render(5), "·····");
        assert_eq!(RangeBar::EMPTY.render(0), "");

        let half = RangeBar {
            left_percent: 50.0,
            width_percent: 50.0,
        };
        assert_eq!(half.render(4), "··██");

        let sliver = RangeBar {
            left_percent: 10.0,
            width_percent: 0.5,
        };
        assert_eq!(sliver.render(10).chars().filter(|c| *c == '█').count(), 1);
    }
}
