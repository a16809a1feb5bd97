//! Constants for karaoke pitch notation scoring.

/// Score returned for absent or unparseable notations.
///
/// Strictly below every valid score (valid scores start at 0).
pub const NO_SCORE: i32 = -1;

/// Literal placeholder the catalog uses for "no data".
pub const NO_DATA_PLACEHOLDER: &str = "---";

/// Number of semitones in one register.
pub const SEMITONES_PER_REGISTER: i32 = 12;

/// Highest score a valid notation can produce (`hihiG#`).
pub const MAX_SCORE: i32 = 59;

/// Note names in scoring order. A register starts at A.
pub(super) const NOTE_ORDER: [&str; 12] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];
