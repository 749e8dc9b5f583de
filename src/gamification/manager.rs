//! Gamification Manager - per-user orchestration
//!
//! Runs the engines against the signed-in user's state, persists the result
//! best-effort and feeds the achievement queue.

use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::actions::ActionKind;
use super::badges::BadgeUnlockEngine;
use super::levels::{LevelInfo, LevelProgress};
use super::points::PointsAwardEngine;
use super::profile::ProfileSnapshot;
use super::queue::AchievementQueue;
use super::state::GamificationState;
use super::streaks::next_streak;
use super::{Achievement, GamificationError, Outcome, Rules};
use crate::store::{GamificationStore, KeyValueStore, StorageError};

/// What happened to the persisted copy after a change
#[derive(Debug)]
pub enum Saved {
    Persisted,
    /// Nothing changed, nothing written
    Skipped,
    /// The write failed. In-memory state is still updated and the next
    /// successful save catches up.
    Failed(StorageError),
}

impl Saved {
    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Persisted)
    }
}

#[derive(Debug)]
pub struct ManagerOutcome {
    pub events: Vec<Achievement>,
    pub saved: Saved,
}

/// Dashboard figures, all derived from the same stored state
#[derive(Debug, Clone)]
pub struct Summary {
    pub points: u32,
    pub level: LevelInfo,
    pub progress: LevelProgress,
    pub badges: usize,
    pub streak: u32,
    pub profile_completion: u8,
}

pub struct GamificationManager<S> {
    rules: Rules,
    store: GamificationStore<S>,
    user_id: String,
    state: GamificationState,
    queue: AchievementQueue,
}

impl<S: KeyValueStore> GamificationManager<S> {
    /// Create a manager and load `user_id`'s state
    pub fn new(rules: Rules, backend: S, user_id: &str) -> Self {
        let store = GamificationStore::new(backend, rules.levels.clone());
        let state = store.load(user_id);
        let queue = AchievementQueue::new(rules.queue);
        Self {
            rules,
            store,
            user_id: user_id.to_string(),
            state,
            queue,
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn state(&self) -> &GamificationState {
        &self.state
    }

    pub fn queue(&self) -> &AchievementQueue {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut AchievementQueue {
        &mut self.queue
    }

    pub fn store(&self) -> &GamificationStore<S> {
        &self.store
    }

    /// Switch to another identity. Pending toasts and timers for the previous
    /// user are cancelled before the new state is loaded.
    pub fn switch_user(&mut self, user_id: &str) {
        debug!("Switching gamification user {} -> {}", self.user_id, user_id);
        self.queue.cancel();
        self.user_id = user_id.to_string();
        self.state = self.store.load(user_id);
    }

    /// Award points for an action (see [`PointsAwardEngine::award`])
    pub fn award(
        &mut self,
        action: &str,
        override_points: Option<u32>,
        now: Instant,
    ) -> Result<ManagerOutcome, GamificationError> {
        let outcome = PointsAwardEngine::new(&self.rules.points, &self.rules.levels).award(
            &self.state,
            action,
            override_points,
        )?;
        Ok(self.commit(outcome, now))
    }

    /// Unlock a catalog badge by id
    pub fn unlock_badge(
        &mut self,
        badge_id: &str,
        now: Instant,
    ) -> Result<ManagerOutcome, GamificationError> {
        let name = self
            .rules
            .badges
            .get(badge_id)
            .map(|def| def.name.clone())
            .ok_or_else(|| GamificationError::UnknownBadge(badge_id.to_string()))?;

        let outcome = BadgeUnlockEngine.unlock(&self.state, badge_id, &name);
        Ok(self.commit(outcome, now))
    }

    /// Count a login at `at`: extends or resets the streak, stamps
    /// `lastLogin` and awards the daily login points when the action is
    /// priced. A second login on the same day changes nothing.
    pub fn record_daily_login(
        &mut self,
        at: DateTime<Utc>,
        now: Instant,
    ) -> Result<ManagerOutcome, GamificationError> {
        let Some(streak) = next_streak(self.state.last_login, self.state.streak, at.date_naive())
        else {
            return Ok(ManagerOutcome {
                events: Vec::new(),
                saved: Saved::Skipped,
            });
        };

        let mut state = self.state.clone();
        state.streak = streak;
        state.last_login = Some(at);

        let outcome = if self.rules.points.get(ActionKind::DailyLogin).is_some() {
            PointsAwardEngine::new(&self.rules.points, &self.rules.levels).award(
                &state,
                ActionKind::DailyLogin.as_str(),
                None,
            )?
        } else {
            debug!("No points configured for daily login, updating streak only");
            Outcome {
                state,
                events: Vec::new(),
            }
        };
        Ok(self.commit(outcome, now))
    }

    /// Dashboard numbers for the current user
    pub fn summary(&self, profile: &ProfileSnapshot) -> Summary {
        let levels = &self.rules.levels;
        Summary {
            points: self.state.points(),
            level: levels.lookup(self.state.points()).clone(),
            progress: levels.progress_to_next(self.state.points(), self.state.level()),
            badges: self.state.badges().len(),
            streak: self.state.streak,
            profile_completion: profile.completion_percent(),
        }
    }

    fn commit(&mut self, outcome: Outcome, now: Instant) -> ManagerOutcome {
        let Outcome { state, events } = outcome;
        if events.is_empty() && state == self.state {
            return ManagerOutcome {
                events,
                saved: Saved::Skipped,
            };
        }

        self.state = state;
        let saved = match self.store.save(&self.user_id, &self.state) {
            Ok(()) => Saved::Persisted,
            Err(e) => {
                warn!(
                    "Failed to persist gamification state for {}: {}",
                    self.user_id, e
                );
                Saved::Failed(e)
            }
        };

        self.queue.enqueue(events.iter().cloned(), now);
        ManagerOutcome { events, saved }
    }
}
