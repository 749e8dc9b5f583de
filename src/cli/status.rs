//! Status and levels command implementations

use anyhow::Result;

use dondeconsigo::ProfileSnapshot;

use super::{load_rules, open_manager, Paths};

/// Show a user's progress
pub fn status_command(paths: &Paths, user: &str) -> Result<()> {
    let manager = open_manager(paths, user)?;
    let summary = manager.summary(&ProfileSnapshot::default());
    let state = manager.state();

    println!("User: {}\n", user);
    println!(
        "  {} Level {} - {} ({} points)",
        summary.level.emoji, summary.level.level, summary.level.name, summary.points
    );
    if summary.progress.points_needed > 0 {
        println!(
            "  {:.0}% to {} ({} points to go)",
            summary.progress.percent,
            summary.progress.next_level_name,
            summary.progress.points_needed
        );
    } else {
        println!("  Max level reached");
    }
    println!("  Streak: {} days", summary.streak);

    if let Some(last_login) = state.last_login {
        println!("  Last login: {}", last_login.format("%Y-%m-%d %H:%M"));
    }

    if state.badges().is_empty() {
        println!("  Badges: none yet");
    } else {
        println!("  Badges ({}):", summary.badges);
        for badge_id in state.badges() {
            let name = manager
                .rules()
                .badges
                .get(badge_id)
                .map(|def| def.name.as_str())
                .unwrap_or(badge_id.as_str());
            println!("    - {}", name);
        }
    }

    Ok(())
}

/// Print the level table, action prices and badge catalog
pub fn levels_command(paths: &Paths) -> Result<()> {
    let rules = load_rules(paths)?;
    for level in rules.levels.iter() {
        let max = if level.level == rules.levels.highest().level {
            format!("{}+", level.min)
        } else {
            format!("{}-{}", level.min, level.max)
        };
        println!(
            "  {:>2} {} {:<20} {:>11}  {}",
            level.level, level.emoji, level.name, max, level.color
        );
    }

    let mut actions: Vec<_> = rules.points.iter().collect();
    actions.sort_by_key(|(kind, _)| kind.as_str());
    println!("\nPoints per action:");
    for (kind, points) in actions {
        println!("  {:<22} {:>4}", kind.as_str(), points);
    }

    if rules.badges.is_empty() {
        println!("\nNo badges configured");
    } else {
        println!("\nBadges ({}):", rules.badges.len());
        for (id, def) in rules.badges.iter() {
            println!("  {:<20} {} - {}", id, def.name, def.description);
        }
    }
    Ok(())
}
