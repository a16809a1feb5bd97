//! Notation tokenizer and scoring.

use super::constants::{NO_DATA_PLACEHOLDER, NO_SCORE};
use super::types::{NoteName, Register};

/// Score an optional pitch notation.
///
/// Returns [`NO_SCORE`] for `None`, empty input, the `"---"` placeholder,
/// and anything that does not start with `<prefix><note>`.
///
/// # Examples
/// ```
/// use vocalrank_core::pitch::score;
///
/// assert_eq!(score(Some("lowA")), 0);
/// assert_eq!(score(Some("hiC")), 39);
/// assert_eq!(score(Some("hihiG#")), 59);
/// assert_eq!(score(Some("---")), -1);
/// assert_eq!(score(None), -1);
/// ```
pub fn score(notation: Option<&str>) -> i32 {
    notation.map(score_str).unwrap_or(NO_SCORE)
}

/// Score a pitch notation string.
///
/// Characters after the note are ignored (`"hiA(live)"` scores as `hiA`).
/// A sharp that does not name a semitone (`E#`, `B#`) falls back to note
/// index 0.
pub fn score_str(notation: &str) -> i32 {
    let notation = notation.trim();
    if notation.is_empty() || notation == NO_DATA_PLACEHOLDER {
        return NO_SCORE;
    }

    match split_notation(notation) {
        Some((register, letter, sharp)) => {
            let note_index = NoteName::from_parts(letter, sharp)
                .map(NoteName::index)
                .unwrap_or(0);
            register.offset() + note_index
        }
        None => NO_SCORE,
    }
}

/// Split a notation into register, note letter, and sharp flag.
pub(super) fn split_notation(notation: &str) -> Option<(Register, char, bool)> {
    let (register, rest) = Register::PARSE_ORDER
        .iter()
        .find_map(|r| notation.strip_prefix(r.prefix()).map(|rest| (*r, rest)))?;

    let mut chars = rest.chars();
    let letter = chars.next().filter(|c| matches!(c, 'A'..='G'))?;
    let sharp = chars.next() == Some('#');

    Some((register, letter, sharp))
}
