//! VocalRank CLI library.
//!
//! This crate provides the command implementations behind the `vocalrank`
//! binary: catalog input, ranking tables, song detail views, and notation
//! scoring.

pub mod commands;
pub mod input;
pub mod logging;
