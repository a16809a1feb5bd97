//! Song records and their scored annotations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A song as it appears in the catalog document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRecord {
    /// Identifier of the record in the source document (object key or array index).
    ///
    /// The catalog loader always overwrites it with the document key.
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Highest chest-voice note.
    #[serde(default)]
    pub chest: Option<String>,
    /// Highest falsetto note.
    #[serde(default)]
    pub falsetto: Option<String>,
    /// Lowest note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<String>,
}

impl SongRecord {
    /// Creates a record with a name and artist and no pitch data.
    pub fn new(name: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            ..Self::default()
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_chest(mut self, notation: impl Into<String>) -> Self {
        self.chest = Some(notation.into());
        self
    }

    pub fn with_falsetto(mut self, notation: impl Into<String>) -> Self {
        self.falsetto = Some(notation.into());
        self
    }

    pub fn with_low(mut self, notation: impl Into<String>) -> Self {
        self.low = Some(notation.into());
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }
}

/// Voice register the representative high note was sung in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegisterType {
    Chest,
    Falsetto,
}

impl RegisterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegisterType::Chest => "Chest",
            RegisterType::Falsetto => "Falsetto",
        }
    }
}

impl fmt::Display for RegisterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A song annotated with its representative score and display rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredSong {
    #[serde(flatten)]
    pub record: SongRecord,
    /// Best of the chest and falsetto scores.
    pub representative_score: i32,
    /// Notation that produced `representative_score`.
    pub representative_pitch: Option<String>,
    pub register_type: RegisterType,
    /// Score of the lowest note; only used for range-bar rendering.
    pub low_score: i32,
    /// 1-based competition rank. `None` for songs without usable data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_rank: Option<u32>,
}

impl ScoredSong {
    /// Returns true if the song has a usable high note and can be ranked.
    pub fn is_rankable(&self) -> bool {
        self.representative_score > 0
    }

    /// The winning notation, or the no-data placeholder.
    pub fn pitch_label(&self) -> &str {
        self.representative_pitch
            .as_deref()
            .unwrap_or(crate::pitch::NO_DATA_PLACEHOLDER)
    }
}
