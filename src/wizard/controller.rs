//! Step controller: owns the session state and drives every wizard operation

use chrono::Utc;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::completion::{CompletionRecord, CompletionSink, CompletionView};
use super::fields::{FieldName, Form, FormField};
use super::notification::{NotificationPresenter, Severity};
use super::scheduler::{Scheduler, TimerKind};
use super::state::{ProgressIndicator, Step, StepView, WizardState};
use super::theme_selector::ThemeSelector;
use super::upload::{DragEvent, FileCandidate, UploadBox};
use super::validator::{clear_field_error, FormValidator};
use crate::config::OnboardConfig;
use crate::Result;

pub const SELECT_THEME_MESSAGE: &str = "Please select a theme to continue";
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";
pub const COMPLETED_MESSAGE: &str = "Onboarding completed successfully!";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit onboarding data";

/// What the screen shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Wizard,
    /// Completed, waiting for the transition to the completion page
    Completing,
    Completed(CompletionView),
}

/// Result of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced(Step),
    Retreated(Step),
    /// A gating condition failed; state is unchanged
    Blocked,
    /// Nothing to do (at a boundary, or not in the wizard view)
    Unchanged,
}

/// Keyboard shortcuts understood by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Advance,
    Retreat,
}

pub struct StepController {
    config: OnboardConfig,
    state: WizardState,
    form: Form,
    themes: ThemeSelector,
    validator: FormValidator,
    notifications: NotificationPresenter,
    upload: UploadBox,
    scheduler: Scheduler,
    view: View,
}

impl StepController {
    pub fn new(config: OnboardConfig) -> Self {
        Self {
            state: WizardState::default(),
            form: Form::from_config(&config),
            themes: ThemeSelector::new(config.themes.clone()),
            validator: FormValidator::new(config.validation),
            notifications: NotificationPresenter::new(config.timings),
            upload: UploadBox::new(),
            scheduler: Scheduler::new(),
            view: View::Wizard,
            config,
        }
    }

    /// Start a fresh session with the same configuration
    pub fn restart(&mut self) {
        info!("Restarting onboarding");
        *self = StepController::new(self.config.clone());
    }

    pub fn config(&self) -> &OnboardConfig {
        &self.config
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> Step {
        self.state.current_step
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        self.form.field(name)
    }

    pub fn themes(&self) -> &ThemeSelector {
        &self.themes
    }

    pub fn themes_mut(&mut self) -> &mut ThemeSelector {
        &mut self.themes
    }

    pub fn notifications(&self) -> &NotificationPresenter {
        &self.notifications
    }

    pub fn upload(&self) -> &UploadBox {
        &self.upload
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Move to the next step if the current step's gating condition holds
    pub fn advance(&mut self, now: Instant) -> StepOutcome {
        if self.view != View::Wizard {
            return StepOutcome::Unchanged;
        }

        let step = self.state.current_step;
        let gate_passed = match step {
            Step::Theme => self.state.selected_theme.is_some(),
            Step::Product | Step::Pricing => {
                self.validator
                    .validate_step(step, &mut self.form, &mut self.state.form_data)
            }
        };

        if !gate_passed {
            let message = match step {
                Step::Theme => SELECT_THEME_MESSAGE,
                Step::Product | Step::Pricing => REQUIRED_FIELDS_MESSAGE,
            };
            debug!(step = step.number(), "Advance blocked");
            self.notify(now, message, Severity::Error);
            return StepOutcome::Blocked;
        }

        match step.next() {
            Some(next) => {
                self.state.current_step = next;
                self.show_step(now);
                debug!(from = step.number(), to = next.number(), "Advanced");
                StepOutcome::Advanced(next)
            }
            None => StepOutcome::Unchanged,
        }
    }

    /// Move to the previous step; going back is never gated
    pub fn retreat(&mut self, now: Instant) -> StepOutcome {
        if self.view != View::Wizard {
            return StepOutcome::Unchanged;
        }

        let step = self.state.current_step;
        match step.prev() {
            Some(prev) => {
                self.state.current_step = prev;
                self.show_step(now);
                debug!(from = step.number(), to = prev.number(), "Retreated");
                StepOutcome::Retreated(prev)
            }
            None => StepOutcome::Unchanged,
        }
    }

    pub fn shortcut(&mut self, shortcut: Shortcut, now: Instant) -> StepOutcome {
        match shortcut {
            Shortcut::Advance => self.advance(now),
            Shortcut::Retreat => self.retreat(now),
        }
    }

    /// Current presentation of the wizard
    pub fn render(&self) -> StepView {
        let active = self.state.current_step;
        StepView {
            active,
            progress: ProgressIndicator::for_step(active),
            fading_in: self.scheduler.is_pending(TimerKind::StepFade),
            advance_enabled: match active {
                Step::Theme => self.state.selected_theme.is_some(),
                Step::Product | Step::Pricing => true,
            },
        }
    }

    /// Make `theme_id` the exclusively selected theme
    pub fn select_theme(&mut self, theme_id: &str, now: Instant) -> Result<()> {
        let theme = self.themes.select(theme_id)?;
        let message = format!("Selected {} theme", theme.display_name);
        self.state.selected_theme = Some(theme.id.clone());
        info!(theme = theme_id, "Theme selected");
        self.notify(now, message, Severity::Success);
        Ok(())
    }

    /// Select the theme under the keyboard cursor
    pub fn select_theme_at_cursor(&mut self, now: Instant) -> Result<()> {
        match self.themes.option_at_cursor() {
            Some(option) => {
                let id = option.id.clone();
                self.select_theme(&id, now)
            }
            None => Ok(()),
        }
    }

    /// Input event: replace the raw value and drop the field's annotation
    pub fn field_input(&mut self, name: FieldName, value: impl Into<String>) {
        let field = self.form.field_mut(name);
        field.value = value.into();
        clear_field_error(field);
    }

    /// Step a choice field to its next/previous option (an input event)
    pub fn cycle_choice(&mut self, name: FieldName, forward: bool) {
        let field = self.form.field_mut(name);
        if field.cycle_choice(forward) {
            clear_field_error(field);
        }
    }

    /// Blur event: validate the field
    pub fn field_blur(&mut self, name: FieldName) -> bool {
        self.validator
            .validate_field(self.form.field_mut(name), &mut self.state.form_data)
    }

    /// Finish the wizard. Only possible on the last step once it validates.
    ///
    /// The record is handed to `sink`; a sink failure keeps the wizard open
    /// on the last step.
    pub fn complete(
        &mut self,
        now: Instant,
        sink: &dyn CompletionSink,
    ) -> Result<Option<CompletionRecord>> {
        if self.view != View::Wizard || !self.state.current_step.is_last() {
            return Ok(None);
        }

        if !self
            .validator
            .validate_step(Step::Pricing, &mut self.form, &mut self.state.form_data)
        {
            self.notify(now, REQUIRED_FIELDS_MESSAGE, Severity::Error);
            return Ok(None);
        }

        let record = CompletionRecord::from_state(&self.state, Utc::now());
        if let Err(e) = sink.submit(&record) {
            warn!(error = %e, "Completion record was not accepted");
            self.notify(now, SUBMIT_FAILED_MESSAGE, Severity::Error);
            return Err(e);
        }

        self.notify(now, COMPLETED_MESSAGE, Severity::Success);
        self.view = View::Completing;
        self.scheduler.schedule(
            TimerKind::CompletionTransition,
            now,
            self.config.timings.completion_delay(),
        );
        Ok(Some(record))
    }

    pub fn notify(&mut self, now: Instant, message: impl Into<String>, severity: Severity) {
        self.notifications
            .notify(&mut self.scheduler, now, message, severity);
    }

    /// Drag interaction with the upload box; returns a file to decode
    pub fn drag(&mut self, event: DragEvent) -> Option<FileCandidate> {
        self.upload.on_drag(event)
    }

    /// File chosen through the picker; returns it when it should be decoded
    pub fn pick_file(&mut self, file: FileCandidate) -> Option<FileCandidate> {
        self.upload.accept(file)
    }

    pub fn image_decoded(&mut self, path: &Path, data_url: String, byte_len: usize) -> bool {
        self.upload.finish(path, data_url, byte_len)
    }

    pub fn image_failed(&mut self, path: &Path, error: &str) {
        self.upload.fail(path, error);
    }

    /// Run every scheduled transition due at `now`
    pub fn tick(&mut self, now: Instant) {
        for kind in self.scheduler.drain_due(now) {
            if self.notifications.on_timer(kind, &mut self.scheduler, now) {
                continue;
            }
            // StepFade needs no handling: the fade is over once it is no longer pending.
            if kind == TimerKind::CompletionTransition {
                self.view = View::Completed(CompletionView::for_brand(&self.config.brand));
            }
        }
    }

    fn show_step(&mut self, now: Instant) {
        self.scheduler
            .schedule(TimerKind::StepFade, now, self.config.timings.step_fade());
    }
}
