//! Shared test utilities for gamification integration tests

use std::sync::Arc;

use dondeconsigo::store::MemoryStorage;
use dondeconsigo::{GamificationManager, Rules};

/// Manager over the built-in rules with a shared in-memory backend, so tests
/// can inspect or reopen what was persisted
pub fn memory_manager(user: &str) -> (GamificationManager<Arc<MemoryStorage>>, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let manager = GamificationManager::new(Rules::default(), Arc::clone(&storage), user);
    (manager, storage)
}
