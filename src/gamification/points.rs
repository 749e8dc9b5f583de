//! Points awards and level-up detection

use tracing::{debug, error, info};

use super::achievement::Achievement;
use super::actions::PointsTable;
use super::levels::LevelTable;
use super::state::GamificationState;
use super::{GamificationError, Outcome};

/// Awards points for actions and reports level-ups
pub struct PointsAwardEngine<'a> {
    points: &'a PointsTable,
    levels: &'a LevelTable,
}

impl<'a> PointsAwardEngine<'a> {
    pub fn new(points: &'a PointsTable, levels: &'a LevelTable) -> Self {
        Self { points, levels }
    }

    /// Award points for `action`, or exactly `override_points` when given.
    ///
    /// Always emits a points achievement. A level achievement follows it when
    /// the new total crosses into a higher level.
    pub fn award(
        &self,
        state: &GamificationState,
        action: &str,
        override_points: Option<u32>,
    ) -> Result<Outcome, GamificationError> {
        let delta = match override_points {
            Some(points) => points,
            None => self.points.points_for(action).ok_or_else(|| {
                error!("No points configured for action `{}`", action);
                GamificationError::UnknownAction(action.to_string())
            })?,
        };

        let new_points = state.points().saturating_add(delta);
        let new_state = state.clone().with_points(new_points, self.levels);
        debug!(
            "Awarded {} points for `{}` ({} -> {})",
            delta,
            action,
            state.points(),
            new_points
        );

        let mut events = vec![Achievement::points(delta)];
        if new_state.level() > state.level() {
            let level = self.levels.lookup(new_points);
            info!("Level up: {} -> {} ({})", state.level(), level.level, level.name);
            events.push(Achievement::level(level));
        }

        Ok(Outcome {
            state: new_state,
            events,
        })
    }
}
