//! Award and unlock command implementations

use std::time::Instant;

use anyhow::Result;

use super::{open_manager, print_events, report_save, Paths};

/// Award points for an action
pub fn award_command(paths: &Paths, user: &str, action: &str, points: Option<u32>) -> Result<()> {
    let mut manager = open_manager(paths, user)?;
    let outcome = manager.award(action, points, Instant::now())?;

    print_events(&outcome.events);
    report_save(&outcome.saved);
    println!("Total: {} points", manager.state().points());
    Ok(())
}

/// Unlock a badge
pub fn unlock_command(paths: &Paths, user: &str, badge: &str) -> Result<()> {
    let mut manager = open_manager(paths, user)?;
    let outcome = manager.unlock_badge(badge, Instant::now())?;

    if outcome.events.is_empty() {
        println!("Badge already unlocked: {}", badge);
        return Ok(());
    }

    print_events(&outcome.events);
    report_save(&outcome.saved);
    Ok(())
}
