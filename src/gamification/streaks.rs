//! Daily login streaks

use chrono::{DateTime, NaiveDate, Utc};

/// Streak value after a login on `today`.
///
/// Returns `None` when the user already logged in today (nothing to count),
/// `current + 1` when the previous login was yesterday, and 1 otherwise.
pub fn next_streak(last_login: Option<DateTime<Utc>>, current: u32, today: NaiveDate) -> Option<u32> {
    let Some(last_day) = last_login.map(|at| at.date_naive()) else {
        return Some(1); // First login
    };

    if last_day >= today {
        return None; // Already counted
    }

    if today.pred_opt() == Some(last_day) {
        Some(current.saturating_add(1))
    } else {
        Some(1) // Reset
    }
}
