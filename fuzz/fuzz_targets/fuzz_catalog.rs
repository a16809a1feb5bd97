#![no_main]

use libfuzzer_sys::fuzz_target;
use vocalrank_core::{parse_catalog, rank, RangeBar};

fuzz_target!(|data: &str| {
    if let Ok(songs) = parse_catalog(data) {
        let list = rank(&songs);
        assert_eq!(list.len(), songs.len());
        for song in list.iter() {
            let bar = RangeBar::for_song(song);
            assert!(bar.left_percent + bar.width_percent <= 100.0 + 1e-9);
        }
    }
});
