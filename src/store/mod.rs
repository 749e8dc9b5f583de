//! Persisted gamification state
//!
//! [`GamificationStore`] reads and writes one JSON snapshot per user through a
//! [`KeyValueStore`] backend. Loading never fails: missing or corrupt data
//! comes back as the zero-value state.
//!
//! # Usage
//!
//! ```ignore
//! let store = GamificationStore::new(SqliteStorage::open_default()?, rules.levels.clone());
//!
//! let state = store.load("u1");
//! store.save("u1", &state)?;
//! ```

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::warn;

use crate::gamification::{GamificationState, LevelTable};

/// Error type for storage backends
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to prepare storage location: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// String key-value persistence scoped to the device
pub trait KeyValueStore {
    /// `Ok(None)` when the key has never been written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Storage key for a user's state
pub fn state_key(user_id: &str) -> String {
    format!("gamification_{}", user_id)
}

pub struct GamificationStore<S> {
    backend: S,
    levels: LevelTable,
}

impl<S: KeyValueStore> GamificationStore<S> {
    pub fn new(backend: S, levels: LevelTable) -> Self {
        Self { backend, levels }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load a user's state, falling back to defaults for anything missing or
    /// malformed
    pub fn load(&self, user_id: &str) -> GamificationState {
        let raw = match self.backend.get(&state_key(user_id)) {
            Ok(Some(raw)) => raw,
            Ok(None) => return GamificationState::new(&self.levels),
            Err(e) => {
                warn!("Failed to read gamification state for {}: {}", user_id, e);
                return GamificationState::new(&self.levels);
            }
        };

        match decode_state(&raw, &self.levels) {
            Some(state) => state,
            None => {
                warn!("Discarding corrupt gamification state for {}", user_id);
                GamificationState::new(&self.levels)
            }
        }
    }

    /// Overwrite the user's persisted snapshot
    pub fn save(&self, user_id: &str, state: &GamificationState) -> Result<(), StorageError> {
        // Re-derive the level so a snapshot never disagrees with its points
        let snapshot = state.clone().with_points(state.points(), &self.levels);
        let json = serde_json::to_string(&snapshot)?;
        self.backend.set(&state_key(user_id), &json)
    }
}

/// Decode a stored snapshot field by field.
///
/// Returns `None` only when the payload is not a JSON object at all. Fields
/// with the wrong type fall back to their defaults, and `level` is always
/// recomputed from `points`.
fn decode_state(raw: &str, levels: &LevelTable) -> Option<GamificationState> {
    let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(raw) else {
        return None;
    };

    let points = count_field(&fields, "points");
    let badges: Vec<String> = match fields.get("badges") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    let mut state = GamificationState::new(levels)
        .with_points(points, levels)
        .with_badges(badges);
    state.streak = count_field(&fields, "streak");
    state.last_login = fields
        .get("lastLogin")
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|at| at.with_timezone(&Utc));

    Some(state)
}

/// Non-negative integer field, accepting numeric strings and truncating floats
fn count_field(fields: &Map<String, Value>, name: &str) -> u32 {
    let value = match fields.get(name) {
        Some(Value::Number(n)) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f as u64)
        }),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    value.map(|v| v.min(u64::from(u32::MAX)) as u32).unwrap_or(0)
}
