#[cfg(test)]
mod tests {
    use cloudnix_onboard::config::Timings;
    use cloudnix_onboard::wizard::notification::NotificationPresenter;
    use cloudnix_onboard::wizard::scheduler::{Scheduler, TimerKind};
    use cloudnix_onboard::wizard::{Severity, ToastPhase};
    use pretty_assertions::assert_eq;
    use std::time::{Duration, Instant};

    struct Harness {
        presenter: NotificationPresenter,
        scheduler: Scheduler,
        start: Instant,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                presenter: NotificationPresenter::new(Timings::default()),
                scheduler: Scheduler::new(),
                start: Instant::now(),
            }
        }

        fn at(&self, ms: u64) -> Instant {
            self.start + Duration::from_millis(ms)
        }

        fn notify(&mut self, ms: u64, message: &str, severity: Severity) {
            let now = self.at(ms);
            self.presenter.notify(&mut self.scheduler, now, message, severity);
        }

        fn tick(&mut self, ms: u64) {
            let now = self.at(ms);
            for kind in self.scheduler.drain_due(now) {
                self.presenter.on_timer(kind, &mut self.scheduler, now);
            }
        }
    }

    #[test]
    fn test_full_lifecycle() {
        let mut harness = Harness::new();
        harness.notify(0, "Saved", Severity::Success);

        assert_eq!(harness.presenter.phase(), Some(ToastPhase::Entering));
        assert!(harness.presenter.visible().is_none());

        harness.tick(100);
        assert_eq!(harness.presenter.phase(), Some(ToastPhase::Shown));
        assert_eq!(harness.presenter.visible().unwrap().message, "Saved");

        harness.tick(5000);
        assert_eq!(harness.presenter.phase(), Some(ToastPhase::Leaving));
        assert!(harness.presenter.visible().is_some());

        harness.tick(5299);
        assert!(harness.presenter.current().is_some());
        harness.tick(5300);
        assert!(harness.presenter.current().is_none());
        assert!(harness.scheduler.next_due().is_none());
    }

    #[test]
    fn test_new_notification_preempts_current() {
        let mut harness = Harness::new();
        harness.notify(0, "X", Severity::Info);
        harness.tick(100);
        harness.notify(500, "Y", Severity::Warning);

        let current = harness.presenter.current().unwrap();
        assert_eq!(current.message, "Y");
        assert_eq!(current.severity, Severity::Warning);
    }

    #[test]
    fn test_stale_removal_never_hits_newer_toast() {
        let mut harness = Harness::new();
        harness.notify(0, "X", Severity::Info);
        harness.tick(5000);
        assert_eq!(harness.presenter.phase(), Some(ToastPhase::Leaving));

        // "X" is sliding out; its removal would fire at 5300
        harness.notify(5100, "Y", Severity::Error);
        harness.tick(5300);
        assert_eq!(harness.presenter.current().unwrap().message, "Y");
        assert_eq!(harness.presenter.phase(), Some(ToastPhase::Shown));

        // "Y" lives its own full lifetime
        harness.tick(10099);
        assert_eq!(harness.presenter.phase(), Some(ToastPhase::Shown));
        harness.tick(10100);
        assert_eq!(harness.presenter.phase(), Some(ToastPhase::Leaving));
        harness.tick(10400);
        assert!(harness.presenter.current().is_none());
    }

    #[test]
    fn test_clear_cancels_timers() {
        let mut harness = Harness::new();
        harness.notify(0, "X", Severity::Info);
        harness.presenter.clear(&mut harness.scheduler);

        assert!(harness.presenter.current().is_none());
        assert!(!harness.scheduler.is_pending(TimerKind::NotificationShow));
        assert!(!harness.scheduler.is_pending(TimerKind::NotificationHide));
    }

    #[test]
    fn test_unrelated_timers_are_not_consumed() {
        let mut harness = Harness::new();
        let now = harness.at(0);
        assert!(!harness
            .presenter
            .on_timer(TimerKind::StepFade, &mut harness.scheduler, now));
    }

    #[test]
    fn test_default_severity_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn test_timings_are_configurable() {
        let timings = Timings {
            notification_show_ms: 10,
            notification_dismiss_ms: 50,
            notification_slide_ms: 5,
            ..Timings::default()
        };
        let mut scheduler = Scheduler::new();
        let mut presenter = NotificationPresenter::new(timings);
        let start = Instant::now();

        presenter.notify(&mut scheduler, start, "Quick", Severity::Info);
        for kind in scheduler.drain_due(start + Duration::from_millis(50)) {
            presenter.on_timer(kind, &mut scheduler, start + Duration::from_millis(50));
        }
        assert_eq!(presenter.phase(), Some(ToastPhase::Leaving));

        for kind in scheduler.drain_due(start + Duration::from_millis(55)) {
            presenter.on_timer(kind, &mut scheduler, start + Duration::from_millis(55));
        }
        assert!(presenter.current().is_none());
    }
}
