//! Demo command implementation
//!
//! Drives the achievement queue on tokio timers so the display and exit
//! phases of each toast can be watched in a terminal.

use std::time::Instant;

use anyhow::Result;
use tracing::info;

use dondeconsigo::{ActionKind, Phase};

use super::{open_manager, report_save, Paths};

pub async fn demo_command(paths: &Paths, user: &str) -> Result<()> {
    let mut manager = open_manager(paths, user)?;
    let now = Instant::now();

    let steps = [
        manager.award(ActionKind::CompleteOnboarding.as_str(), None, now)?,
        manager.unlock_badge("onboardingComplete", now)?,
        manager.award(ActionKind::UploadPhoto.as_str(), None, now)?,
        manager.unlock_badge("firstPhoto", now)?,
        manager.award(ActionKind::SharePromo.as_str(), None, now)?,
    ];
    for outcome in &steps {
        report_save(&outcome.saved);
    }
    let timing = manager.queue().timing();
    info!(
        "Queued {} achievements ({}ms on screen, {}ms exit)",
        manager.queue().len() + 1,
        timing.display.as_millis(),
        timing.settle.as_millis()
    );

    let mut shown: Option<(String, Phase)> = None;
    loop {
        let on_screen = manager
            .queue()
            .current()
            .map(|(achievement, phase)| (achievement.id.clone(), achievement.message.clone(), phase));

        if let Some((id, message, phase)) = on_screen {
            if shown.as_ref() != Some(&(id.clone(), phase)) {
                match phase {
                    Phase::Visible => println!("▶ {}", message),
                    Phase::Exiting => println!("  (leaving) {}", message),
                }
                shown = Some((id, phase));
            }
        }

        let Some(deadline) = manager.queue().next_deadline() else {
            break;
        };

        tokio::select! {
            _ = tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)) => {
                manager.queue_mut().poll(Instant::now());
            }
            _ = tokio::signal::ctrl_c() => {
                manager.queue_mut().cancel();
                println!("Cancelled");
                break;
            }
        }
    }

    println!(
        "Done: {} points, level {}",
        manager.state().points(),
        manager.state().level()
    );
    Ok(())
}
