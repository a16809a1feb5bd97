#![no_main]

use libfuzzer_sys::fuzz_target;
use vocalrank_core::pitch::{score_str, MAX_SCORE, NO_SCORE};
use vocalrank_core::Pitch;

fuzz_target!(|data: &str| {
    let score = score_str(data);
    assert!(score == NO_SCORE || (0..=MAX_SCORE).contains(&score));

    if let Some(pitch) = Pitch::parse(data) {
        assert_eq!(pitch.score(), score);
    }
});
