//! Register, note name, and pitch value types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::constants::{NOTE_ORDER, SEMITONES_PER_REGISTER};
use super::parse::split_notation;

/// Octave register prefix of a karaoke pitch notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Register {
    /// `low`
    Low,
    /// `mid1`
    Mid1,
    /// `mid2`
    Mid2,
    /// `hi`
    Hi,
    /// `hihi`
    HiHi,
}

impl Register {
    /// Prefix candidates in the order they are tried.
    ///
    /// `hihi` must be tried before `hi`.
    pub const PARSE_ORDER: [Register; 5] = [
        Register::Low,
        Register::Mid1,
        Register::Mid2,
        Register::HiHi,
        Register::Hi,
    ];

    /// Returns the notation prefix (e.g., "mid2").
    pub fn prefix(self) -> &'static str {
        match self {
            Register::Low => "low",
            Register::Mid1 => "mid1",
            Register::Mid2 => "mid2",
            Register::Hi => "hi",
            Register::HiHi => "hihi",
        }
    }

    /// Score offset of the register's lowest note.
    pub fn offset(self) -> i32 {
        let position = match self {
            Register::Low => 0,
            Register::Mid1 => 1,
            Register::Mid2 => 2,
            Register::Hi => 3,
            Register::HiHi => 4,
        };
        position * SEMITONES_PER_REGISTER
    }

    fn from_offset(offset: i32) -> Option<Self> {
        Register::PARSE_ORDER
            .iter()
            .copied()
            .find(|r| r.offset() == offset)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// One of the 12 semitone names, in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NoteName {
    A,
    ASharp,
    B,
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
}

impl NoteName {
    /// All note names, index-aligned with their scores.
    pub const ALL: [NoteName; 12] = [
        NoteName::A,
        NoteName::ASharp,
        NoteName::B,
        NoteName::C,
        NoteName::CSharp,
        NoteName::D,
        NoteName::DSharp,
        NoteName::E,
        NoteName::F,
        NoteName::FSharp,
        NoteName::G,
        NoteName::GSharp,
    ];

    /// 0-based position within the register.
    pub fn index(self) -> i32 {
        self as i32
    }

    /// Notation text (e.g., "C#").
    pub fn as_str(self) -> &'static str {
        NOTE_ORDER[self as usize]
    }

    /// Looks up a note from its letter and sharp flag.
    ///
    /// Returns `None` for combinations outside the 12 names (`E#`, `B#`).
    pub fn from_parts(letter: char, sharp: bool) -> Option<Self> {
        NoteName::ALL.iter().copied().find(|n| {
            let text = n.as_str();
            text.starts_with(letter) && (text.len() == 2) == sharp
        })
    }

    fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| NoteName::ALL.get(i).copied())
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully recognised pitch notation such as `hiA#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pitch {
    pub register: Register,
    pub note: NoteName,
}

impl Pitch {
    pub fn new(register: Register, note: NoteName) -> Self {
        Self { register, note }
    }

    /// Parses a notation strictly.
    ///
    /// Unlike [`score_str`](super::score_str), a note outside the 12 names
    /// is rejected rather than folded to index 0.
    ///
    /// # Examples
    /// ```
    /// use vocalrank_core::pitch::{NoteName, Pitch, Register};
    ///
    /// let pitch = Pitch::parse("mid2G#").unwrap();
    /// assert_eq!(pitch, Pitch::new(Register::Mid2, NoteName::GSharp));
    /// assert!(Pitch::parse("hiE#").is_none());
    /// assert!(Pitch::parse("---").is_none());
    /// ```
    pub fn parse(notation: &str) -> Option<Self> {
        let (register, letter, sharp) = split_notation(notation.trim())?;
        NoteName::from_parts(letter, sharp).map(|note| Pitch::new(register, note))
    }

    /// Comparable integer score in `0..=MAX_SCORE`.
    pub fn score(self) -> i32 {
        self.register.offset() + self.note.index()
    }

    /// Inverse of [`Pitch::score`].
    pub fn from_score(score: i32) -> Option<Self> {
        if score < 0 {
            return None;
        }
        let register = Register::from_offset(score - score % SEMITONES_PER_REGISTER)?;
        let note = NoteName::from_index(score % SEMITONES_PER_REGISTER)?;
        Some(Pitch::new(register, note))
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.register, self.note)
    }
}

/// Error returned when a string is not a recognised pitch notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a pitch notation: {0:?}")]
pub struct ParsePitchError(pub String);

impl FromStr for Pitch {
    type Err = ParsePitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pitch::parse(s).ok_or_else(|| ParsePitchError(s.to_string()))
    }
}
