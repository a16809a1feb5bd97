//! Karaoke pitch notation scoring.
//!
//! A notation is an octave-register prefix (`low`, `mid1`, `mid2`, `hi`,
//! `hihi`) followed by a note name (`A`..`G#`). Each notation maps to one
//! comparable integer: `register offset + note index`, with registers 12
//! apart and notes ordered from A. Absent or unparseable notations score
//! [`NO_SCORE`].

mod constants;
mod parse;
mod types;


pub use constants::{MAX_SCORE, NO_DATA_PLACEHOLDER, NO_SCORE, SEMITONES_PER_REGISTER};

pub use parse::{score, score_str};

pub use types::{NoteName, ParsePitchError, Pitch, Register};
