//! Login command implementation

use std::time::Instant;

use anyhow::Result;
use chrono::Utc;

use super::{open_manager, print_events, report_save, Paths};

/// Record a login for today
pub fn login_command(paths: &Paths, user: &str) -> Result<()> {
    let mut manager = open_manager(paths, user)?;
    let outcome = manager.record_daily_login(Utc::now(), Instant::now())?;

    if outcome.events.is_empty() {
        println!("Already logged in today. Streak: {} days", manager.state().streak);
        return Ok(());
    }

    print_events(&outcome.events);
    report_save(&outcome.saved);
    println!("Streak: {} days", manager.state().streak);
    Ok(())
}
