//! Transient toast notifications
//!
//! At most one notification exists at a time. A new one evicts the current
//! one and cancels its pending show/hide/remove tasks, so a stale removal can
//! never hit the newer toast.

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use super::scheduler::{Scheduler, TimerKind};
use crate::config::Timings;

const TIMERS: [TimerKind; 3] = [
    TimerKind::NotificationShow,
    TimerKind::NotificationHide,
    TimerKind::NotificationRemove,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

/// Where the toast is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Created but still off-screen
    Entering,
    Shown,
    /// Sliding out, removed when the slide finishes
    Leaving,
}

#[derive(Debug)]
struct ActiveToast {
    notification: Notification,
    phase: ToastPhase,
}

#[derive(Debug)]
pub struct NotificationPresenter {
    current: Option<ActiveToast>,
    timings: Timings,
}

impl NotificationPresenter {
    pub fn new(timings: Timings) -> Self {
        Self {
            current: None,
            timings,
        }
    }

    /// Replace any current toast with a new one and schedule its lifecycle
    pub fn notify(
        &mut self,
        scheduler: &mut Scheduler,
        now: Instant,
        message: impl Into<String>,
        severity: Severity,
    ) {
        self.clear(scheduler);

        let notification = Notification {
            message: message.into(),
            severity,
        };
        debug!(severity = severity.as_str(), message = %notification.message, "Notification");
        self.current = Some(ActiveToast {
            notification,
            phase: ToastPhase::Entering,
        });

        scheduler.schedule(TimerKind::NotificationShow, now, self.timings.notification_show());
        scheduler.schedule(TimerKind::NotificationHide, now, self.timings.notification_dismiss());
    }

    /// Advance the lifecycle for a fired timer. Returns false for unrelated timers.
    pub fn on_timer(&mut self, kind: TimerKind, scheduler: &mut Scheduler, now: Instant) -> bool {
        match kind {
            TimerKind::NotificationShow => {
                if let Some(toast) = self.current.as_mut() {
                    if toast.phase == ToastPhase::Entering {
                        toast.phase = ToastPhase::Shown;
                    }
                }
            }
            TimerKind::NotificationHide => {
                if let Some(toast) = self.current.as_mut() {
                    toast.phase = ToastPhase::Leaving;
                    scheduler.schedule(
                        TimerKind::NotificationRemove,
                        now,
                        self.timings.notification_slide(),
                    );
                }
            }
            TimerKind::NotificationRemove => {
                self.current = None;
            }
            _ => return false,
        }
        true
    }

    /// Remove the current toast immediately and cancel its timers
    pub fn clear(&mut self, scheduler: &mut Scheduler) {
        for kind in TIMERS {
            scheduler.cancel(kind);
        }
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|toast| &toast.notification)
    }

    pub fn phase(&self) -> Option<ToastPhase> {
        self.current.as_ref().map(|toast| toast.phase)
    }

    /// Notification visible on screen, i.e. not still off-screen
    pub fn visible(&self) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|toast| toast.phase != ToastPhase::Entering)
            .map(|toast| &toast.notification)
    }
}
