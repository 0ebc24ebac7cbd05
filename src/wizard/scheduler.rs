//! Cancellable delayed tasks for UI transitions
//!
//! Each task is keyed by a [`TimerKind`]; at most one task per kind is
//! pending. Scheduling a kind again replaces the earlier task, which is how a
//! superseding notification cancels the pending removal of the previous one.
//! The host polls [`Scheduler::drain_due`] on every tick.

use std::time::{Duration, Instant};

/// Delayed actions the wizard can schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Slide the current notification into view
    NotificationShow,
    /// Start sliding the current notification out
    NotificationHide,
    /// Remove the current notification
    NotificationRemove,
    /// End the fade-in of the visible step
    StepFade,
    /// Replace the wizard with the completion page
    CompletionTransition,
}

#[derive(Debug, Clone, Copy)]
struct ScheduledTask {
    kind: TimerKind,
    due: Instant,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` to fire `delay` after `now`, replacing any pending task of that kind
    pub fn schedule(&mut self, kind: TimerKind, now: Instant, delay: Duration) {
        self.cancel(kind);
        self.tasks.push(ScheduledTask {
            kind,
            due: now + delay,
        });
    }

    /// Cancel a pending task. Returns true if one was pending.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.kind != kind);
        before != self.tasks.len()
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.tasks.iter().any(|task| task.kind == kind)
    }

    /// Earliest due time among pending tasks
    pub fn next_due(&self) -> Option<Instant> {
        self.tasks.iter().map(|task| task.due).min()
    }

    /// Remove and return every task due at or before `now`, earliest first
    pub fn drain_due(&mut self, now: Instant) -> Vec<TimerKind> {
        let mut due: Vec<ScheduledTask> = Vec::new();
        self.tasks.retain(|task| {
            if task.due <= now {
                due.push(*task);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|task| task.due);
        due.into_iter().map(|task| task.kind).collect()
    }
}
