//! Persistence round trips through the SQLite backend

use chrono::{TimeZone, Utc};
use tempfile::tempdir;

use dondeconsigo::store::{state_key, GamificationStore, KeyValueStore, SqliteStorage};
use dondeconsigo::{GamificationState, Rules};

#[test]
fn test_save_load_roundtrip() {
    let dir = tempdir().unwrap();
    let rules = Rules::default();
    let store = GamificationStore::new(
        SqliteStorage::open(&dir.path().join("state.db")).unwrap(),
        rules.levels.clone(),
    );

    let mut state = GamificationState::new(&rules.levels)
        .with_points(450, &rules.levels)
        .with_badges(["firstPhoto", "firstShare"]);
    state.streak = 3;
    state.last_login = Some(Utc.with_ymd_and_hms(2024, 5, 17, 8, 30, 0).unwrap());

    store.save("u1", &state).unwrap();
    assert_eq!(store.load("u1"), state);
}

#[test]
fn test_roundtrip_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.db");
    let rules = Rules::default();
    let state = GamificationState::new(&rules.levels).with_points(1200, &rules.levels);

    {
        let store = GamificationStore::new(SqliteStorage::open(&path).unwrap(), rules.levels.clone());
        store.save("u1", &state).unwrap();
    }

    let store = GamificationStore::new(SqliteStorage::open(&path).unwrap(), rules.levels.clone());
    let loaded = store.load("u1");
    assert_eq!(loaded, state);
    assert_eq!(loaded.level(), 5);
}

#[test]
fn test_corrupt_row_loads_default() {
    let rules = Rules::default();
    let storage = SqliteStorage::open_in_memory().unwrap();
    storage.set(&state_key("u1"), "{not json").unwrap();

    let store = GamificationStore::new(storage, rules.levels.clone());
    assert_eq!(store.load("u1"), GamificationState::new(&rules.levels));
}

#[test]
fn test_stored_level_is_recomputed() {
    let rules = Rules::default();
    let storage = SqliteStorage::open_in_memory().unwrap();
    storage
        .set(&state_key("u1"), r#"{"points": 350, "level": 1, "badges": [], "streak": 0, "lastLogin": null}"#)
        .unwrap();

    let store = GamificationStore::new(storage, rules.levels.clone());
    assert_eq!(store.load("u1").level(), 3);
}
