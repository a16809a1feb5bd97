//! End-to-end tests: load the fixture catalog, rank it, search it, and
//! compute range bars.

use pretty_assertions::assert_eq;
use std::path::PathBuf;

use vocalrank_core::{load_catalog, rank, search, RangeBar, RegisterType};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("karaoke_data.json")
}

#[test]
fn test_fixture_ranking() {
    let songs = load_catalog(fixture_path()).unwrap();
    assert_eq!(songs.len(), 7);

    let list = rank(&songs);
    let table: Vec<(u32, &str, i32, RegisterType)> = list
        .ranked
        .iter()
        .map(|s| {
            (
                s.display_rank.unwrap(),
                s.record.key.as_str(),
                s.representative_score,
                s.register_type,
            )
        })
        .collect();

    assert_eq!(
        table,
        vec![
            (1, "song_001", 44, RegisterType::Falsetto),
            (1, "song_003", 44, RegisterType::Falsetto),
            (3, "song_006", 39, RegisterType::Chest),
            (4, "song_002", 37, RegisterType::Chest),
            (5, "song_004", 29, RegisterType::Chest),
        ]
    );

    let missing: Vec<&str> = list.missing.iter().map(|s| s.record.key.as_str()).collect();
    assert_eq!(missing, vec!["song_005", "song_007"]);
}

#[test]
fn test_fixture_search_by_artist() {
    let list = rank(&load_catalog(fixture_path()).unwrap());
    let hits: Vec<(Option<u32>, &str)> = search::filter(&list.ranked, "hoshizora")
        .into_iter()
        .map(|s| (s.display_rank, s.record.name.as_str()))
        .collect();
    assert_eq!(
        hits,
        vec![(Some(1), "Starlight Parade"), (Some(1), "Paper Moon")]
    );
}

#[test]
fn test_fixture_range_bars() {
    let list = rank(&load_catalog(fixture_path()).unwrap());

    let starlight = &list.ranked[0];
    let bar = RangeBar::for_song(starlight);
    // mid1A = 12, hiF = 44
    assert!((bar.left_percent - 17.0 / 65.0 * 100.0).abs() < 1e-9);
    assert!((bar.width_percent - 32.0 / 65.0 * 100.0).abs() < 1e-9);

    let quiet_harbor = list
        .ranked
        .iter()
        .find(|s| s.record.key == "song_004")
        .unwrap();
    assert!(RangeBar::for_song(quiet_harbor).is_empty());
}

#[test]
fn test_fixture_serializes_annotations() {
    let list = rank(&load_catalog(fixture_path()).unwrap());
    let json = serde_json::to_value(&list.ranked[0]).unwrap();
    assert_eq!(json["name"], "Starlight Parade");
    assert_eq!(json["representative_pitch"], "hiF");
    assert_eq!(json["register_type"], "Falsetto");
    assert_eq!(json["display_rank"], 1);

    let missing = serde_json::to_value(&list.missing[0]).unwrap();
    assert!(missing.get("display_rank").is_none());
}
