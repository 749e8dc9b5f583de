//! Badge catalog and idempotent unlocks

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::achievement::Achievement;
use super::state::GamificationState;
use super::Outcome;

/// Display metadata for a badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Badge id -> display metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeCatalog {
    badges: BTreeMap<String, BadgeDef>,
}

impl BadgeCatalog {
    pub fn new(badges: BTreeMap<String, BadgeDef>) -> Self {
        Self { badges }
    }

    pub fn get(&self, badge_id: &str) -> Option<&BadgeDef> {
        self.badges.get(badge_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BadgeDef)> {
        self.badges.iter().map(|(id, def)| (id.as_str(), def))
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }
}

/// Unlocks badges. Unlocking an owned badge is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct BadgeUnlockEngine;

impl BadgeUnlockEngine {
    pub fn unlock(&self, state: &GamificationState, badge_id: &str, display_name: &str) -> Outcome {
        if state.has_badge(badge_id) {
            return Outcome {
                state: state.clone(),
                events: Vec::new(),
            };
        }

        let mut new_state = state.clone();
        new_state.insert_badge(badge_id);
        info!("Badge unlocked: {} ({})", badge_id, display_name);

        Outcome {
            state: new_state,
            events: vec![Achievement::badge(badge_id, display_name)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamification::achievement::AchievementKind;
    use crate::gamification::levels::sample_table;

    #[test]
    fn test_unlock_new_badge() {
        let levels = sample_table();
        let state = GamificationState::new(&levels);

        let outcome = BadgeUnlockEngine.unlock(&state, "firstShare", "Embajador");
        assert!(outcome.state.has_badge("firstShare"));
        assert_eq!(outcome.events.len(), 1);
        assert_eq!(outcome.events[0].kind, AchievementKind::Badge);
    }

    #[test]
    fn test_unlock_twice_is_noop() {
        let levels = sample_table();
        let state = GamificationState::new(&levels).with_badges(["firstPhoto"]);

        let outcome = BadgeUnlockEngine.unlock(&state, "firstPhoto", "Fotogénico");
        assert_eq!(outcome.state, state);
        assert!(outcome.events.is_empty());
        assert_eq!(outcome.state.badges().len(), 1);
    }
}
