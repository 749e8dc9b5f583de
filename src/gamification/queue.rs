//! Achievement toast queue
//!
//! Shows one achievement at a time. A visible achievement auto-dismisses after
//! `display`, then stays in an exiting phase for `settle` so the UI can animate
//! it out before the next one appears:
//!
//! ```text
//! queued -> visible -> exiting -> removed
//! ```
//!
//! The queue owns its timer as plain data ([`ScheduledTask`]) and is advanced
//! by [`AchievementQueue::poll`]. Drivers sleep until
//! [`AchievementQueue::next_deadline`] and poll again.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::achievement::Achievement;

/// How long a toast is displayed
pub const DEFAULT_DISPLAY: Duration = Duration::from_millis(3000);

/// Exit transition buffer before the next toast
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueTiming {
    pub display: Duration,
    pub settle: Duration,
}

impl Default for QueueTiming {
    fn default() -> Self {
        Self {
            display: DEFAULT_DISPLAY,
            settle: DEFAULT_SETTLE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Move the visible toast to its exit phase
    AutoDismiss,
    /// Drop the exiting toast and show the next one
    Settle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    pub deadline: Instant,
    pub kind: TaskKind,
}

#[derive(Debug, Default)]
pub struct AchievementQueue {
    timing: QueueTiming,
    pending: VecDeque<Achievement>,
    current: Option<(Achievement, Phase)>,
    task: Option<ScheduledTask>,
}

impl AchievementQueue {
    pub fn new(timing: QueueTiming) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    pub fn timing(&self) -> QueueTiming {
        self.timing
    }

    /// Append achievements in order. The first one shows immediately if
    /// nothing else is on screen.
    pub fn enqueue<I>(&mut self, events: I, now: Instant)
    where
        I: IntoIterator<Item = Achievement>,
    {
        self.pending.extend(events);
        self.promote(now);
    }

    /// The achievement to render, if one is fully visible
    pub fn peek_visible(&self) -> Option<&Achievement> {
        match &self.current {
            Some((achievement, Phase::Visible)) => Some(achievement),
            _ => None,
        }
    }

    /// The on-screen achievement including one that is animating out
    pub fn current(&self) -> Option<(&Achievement, Phase)> {
        self.current.as_ref().map(|(a, phase)| (a, *phase))
    }

    /// Dismiss the visible achievement. Returns false if nothing was visible.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        if self.peek_visible().is_none() {
            return false;
        }
        self.begin_exit(now);
        true
    }

    /// Fire every timer due at `now`.
    ///
    /// A late poll still gives the next toast its full display time: its
    /// window starts at `now`, not at the missed settle deadline.
    pub fn poll(&mut self, now: Instant) {
        while let Some(task) = self.task.filter(|t| t.deadline <= now) {
            match task.kind {
                TaskKind::AutoDismiss => self.begin_exit(task.deadline),
                TaskKind::Settle => {
                    self.current = None;
                    self.task = None;
                    self.promote(now);
                }
            }
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.task.map(|t| t.deadline)
    }

    pub fn scheduled(&self) -> Option<ScheduledTask> {
        self.task
    }

    /// Drop every queued and on-screen achievement along with the pending
    /// timer. Used when the user identity changes or the UI tears down.
    pub fn cancel(&mut self) {
        self.pending.clear();
        self.current = None;
        self.task = None;
    }

    /// Achievements waiting behind the on-screen one
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.current.is_none()
    }

    fn promote(&mut self, now: Instant) {
        if self.current.is_some() {
            return;
        }
        if let Some(next) = self.pending.pop_front() {
            self.current = Some((next, Phase::Visible));
            self.task = Some(ScheduledTask {
                deadline: now + self.timing.display,
                kind: TaskKind::AutoDismiss,
            });
        }
    }

    fn begin_exit(&mut self, now: Instant) {
        if let Some((_, phase)) = &mut self.current {
            *phase = Phase::Exiting;
        }
        self.task = Some(ScheduledTask {
            deadline: now + self.timing.settle,
            kind: TaskKind::Settle,
        });
    }
}
