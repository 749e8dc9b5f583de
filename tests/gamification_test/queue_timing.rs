//! Toast timing through the manager

use std::time::{Duration, Instant};

use dondeconsigo::{AchievementKind, Phase};

use crate::common::memory_manager;

#[test]
fn test_level_up_toasts_play_in_order() {
    let (mut manager, _) = memory_manager("u1");
    let t0 = Instant::now();
    manager.award("bonus", Some(120), t0).unwrap();

    let queue = manager.queue_mut();
    assert_eq!(queue.peek_visible().unwrap().kind, AchievementKind::Points);

    queue.poll(t0 + Duration::from_millis(3000));
    assert_eq!(queue.current().unwrap().1, Phase::Exiting);

    queue.poll(t0 + Duration::from_millis(3300));
    assert_eq!(queue.peek_visible().unwrap().kind, AchievementKind::Level);

    queue.poll(t0 + Duration::from_millis(6600));
    assert!(queue.is_empty());
}

#[test]
fn test_user_dismissal_shortens_display() {
    let (mut manager, _) = memory_manager("u1");
    let t0 = Instant::now();
    manager.award("favoritePromo", None, t0).unwrap();
    manager.unlock_badge("firstFavorite", t0).unwrap();

    let queue = manager.queue_mut();
    assert!(queue.dismiss(t0 + Duration::from_millis(500)));
    queue.poll(t0 + Duration::from_millis(800));
    assert_eq!(queue.peek_visible().unwrap().kind, AchievementKind::Badge);
}

#[test]
fn test_identity_change_mid_display() {
    let (mut manager, _) = memory_manager("u1");
    let t0 = Instant::now();
    manager.award("completeOnboarding", None, t0).unwrap();
    assert!(manager.queue().next_deadline().is_some());

    manager.switch_user("u2");
    assert_eq!(manager.queue().scheduled(), None);

    manager.queue_mut().poll(t0 + Duration::from_secs(4));
    assert!(manager.queue().peek_visible().is_none());
}
