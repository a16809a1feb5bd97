//! CLI command implementations

pub mod json_output;
pub mod rank;
pub mod score;
pub mod show;
