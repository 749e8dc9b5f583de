//! Award and unlock scenarios against the built-in configuration

use std::time::Instant;

use dondeconsigo::store::MemoryStorage;
use dondeconsigo::{
    AchievementKind, AchievementValue, BadgeUnlockEngine, GamificationError, GamificationState,
    PointsAwardEngine, Rules,
};

use crate::common::memory_manager;

#[test]
fn test_fresh_user_defaults() {
    let (manager, _) = memory_manager("u1");
    let state = manager.state();

    assert_eq!(state.points(), 0);
    assert_eq!(state.level(), 1);
    assert!(state.badges().is_empty());
    assert_eq!(state.streak, 0);
    assert_eq!(state.last_login, None);
}

#[test]
fn test_crossing_level_boundary() {
    let rules = Rules::default();
    let engine = PointsAwardEngine::new(&rules.points, &rules.levels);
    let state = GamificationState::new(&rules.levels).with_points(95, &rules.levels);

    let outcome = engine.award(&state, "bonus", Some(10)).unwrap();

    assert_eq!(outcome.state.points(), 105);
    assert_eq!(outcome.state.level(), 2);
    assert_eq!(outcome.events.len(), 2);
    assert_eq!(outcome.events[0].kind, AchievementKind::Points);
    assert_eq!(outcome.events[0].value, AchievementValue::Number(10));
    assert_eq!(outcome.events[1].kind, AchievementKind::Level);
    assert_eq!(outcome.events[1].value, AchievementValue::Number(2));
}

#[test]
fn test_jump_over_several_levels_reports_final_level() {
    let rules = Rules::default();
    let engine = PointsAwardEngine::new(&rules.points, &rules.levels);
    let state = GamificationState::new(&rules.levels);

    let outcome = engine.award(&state, "bonus", Some(700)).unwrap();
    assert_eq!(outcome.state.level(), 4);
    assert_eq!(outcome.events.len(), 2);
    assert_eq!(outcome.events[1].value, AchievementValue::Number(4));
}

#[test]
fn test_configured_action_points() {
    let (mut manager, _) = memory_manager("u1");
    let now = Instant::now();

    manager.award("completeOnboarding", None, now).unwrap();
    manager.award("favoritePromo", None, now).unwrap();
    manager.award("sharePromo", None, now).unwrap();

    assert_eq!(manager.state().points(), 50 + 5 + 15);
}

#[test]
fn test_unknown_action_leaves_state_alone() {
    let (mut manager, storage) = memory_manager("u1");

    let err = manager.award("spinWheel", None, Instant::now()).unwrap_err();
    assert!(matches!(err, GamificationError::UnknownAction(_)));
    assert_eq!(manager.state().points(), 0);
    assert!(manager.queue().is_empty());
    assert!(storage.is_empty());
}

#[test]
fn test_reunlocking_badge() {
    let rules = Rules::default();
    let state = GamificationState::new(&rules.levels).with_badges(["firstPhoto"]);

    let outcome = BadgeUnlockEngine.unlock(&state, "firstPhoto", "Fotogénico");
    assert_eq!(outcome.state, state);
    assert!(outcome.events.is_empty());
}

#[test]
fn test_unlock_then_persisted() {
    let (mut manager, storage) = memory_manager("u1");
    let outcome = manager.unlock_badge("firstShare", Instant::now()).unwrap();

    assert_eq!(outcome.events.len(), 1);
    assert_eq!(
        outcome.events[0].message,
        "¡Insignia desbloqueada: Embajador!"
    );

    let reopened = dondeconsigo::GamificationManager::new(Rules::default(), storage, "u1");
    assert!(reopened.state().has_badge("firstShare"));
}

#[test]
fn test_identities_do_not_share_state() {
    let (mut manager, _) = memory_manager("ana");
    manager.award("uploadPhoto", None, Instant::now()).unwrap();

    manager.switch_user("beto");
    assert_eq!(manager.state().points(), 0);
    assert_eq!(manager.user_id(), "beto");

    manager.award("sharePromo", None, Instant::now()).unwrap();
    manager.switch_user("ana");
    assert_eq!(manager.state().points(), 25);
}

#[test]
fn test_manager_over_plain_memory_storage() {
    let mut manager = dondeconsigo::GamificationManager::new(
        Rules::default(),
        MemoryStorage::new(),
        "u1",
    );
    manager.award("writeReview", None, Instant::now()).unwrap();
    assert_eq!(manager.store().load("u1").points(), 20);
}
