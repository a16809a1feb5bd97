//! VocalRank Core Library
//!
//! Scores karaoke pitch notations and ranks songs by vocal-range difficulty.
//!
//! # Overview
//!
//! - [`pitch`]: notation tokenizer and scorer (`hiA#` → 37)
//! - [`rank`]: representative-score selection and competition ranking
//! - [`range_bar`]: low-to-high range geometry for detail views
//! - [`search`]: title/artist filtering
//! - [`catalog`]: loading songs from the JSON document
//!
//! Everything except [`catalog`] is pure: the same input always produces
//! the same output and nothing can fail.
//!
//! # Example
//!
//! ```
//! use vocalrank_core::{rank, RangeBar, RegisterType, SongRecord};
//!
//! let songs = vec![
//!     SongRecord::new("Skyline", "Aozora").with_chest("mid2G").with_falsetto("hiC"),
//!     SongRecord::new("Lowlands", "Tsuchi").with_chest("mid2A").with_low("lowC"),
//!     SongRecord::new("Untitled", "Unknown").with_chest("---"),
//! ];
//!
//! let list = rank(&songs);
//! assert_eq!(list.ranked[0].record.name, "Skyline");
//! assert_eq!(list.ranked[0].register_type, RegisterType::Falsetto);
//! assert_eq!(list.missing.len(), 1);
//!
//! let bar = RangeBar::for_song(&list.ranked[1]);
//! assert!(bar.left_percent + bar.width_percent <= 100.0);
//! ```

pub mod catalog;
pub mod error;
pub mod pitch;
pub mod range_bar;
pub mod rank;
pub mod search;
pub mod song;

pub use catalog::{load_catalog, parse_catalog, DEFAULT_CATALOG_FILE};
pub use error::CatalogError;
pub use pitch::{score, score_str, NoteName, Pitch, Register, NO_SCORE};
pub use range_bar::RangeBar;
pub use rank::{rank, score_song, RankedList};
pub use song::{RegisterType, ScoredSong, SongRecord};
