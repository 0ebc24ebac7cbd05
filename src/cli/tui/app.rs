use std::io::stdout;
use std::time::{Duration, Instant};
use ratatui::{
    crossterm::{
        event::{
            self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent,
            KeyEventKind, KeyModifiers,
        },
        execute,
    },
    DefaultTerminal, Frame,
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time;
use tracing::{debug, error};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use crate::config::OnboardConfig;
use crate::wizard::fields::FieldKind;
use crate::wizard::{CompletionSink, DragEvent, FileCandidate, Step, StepController, View};
use crate::Result;
use super::events::{shortcut_for, AppEvent};
use super::state::{Focus, UiState};
use super::theme::Theme;

/// Main application struct
pub struct App {
    /// Wizard session
    controller: StepController,
    /// Focus and edit buffers
    ui: UiState,
    /// Whether the app should quit
    should_quit: bool,
    /// Theme for styling
    theme: Theme,
    /// Receives the completion record
    sink: Box<dyn CompletionSink + Send>,
    /// Event sender for background tasks
    event_tx: Option<UnboundedSender<AppEvent>>,
    /// Last time Ctrl+C was pressed
    last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new app instance
    pub fn new(config: OnboardConfig, sink: Box<dyn CompletionSink + Send>) -> Self {
        let controller = StepController::new(config);
        let ui = UiState::new(&controller);
        Self {
            controller,
            ui,
            should_quit: false,
            theme: Theme::default(),
            sink,
            event_tx: None,
            last_ctrl_c: None,
        }
    }

    pub fn controller(&self) -> &StepController {
        &self.controller
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the application
    pub async fn run(mut self) -> Result<()> {
        // Initialize terminal
        let mut terminal = ratatui::init();
        terminal.clear()?;
        // Dropping a file onto the terminal arrives as a paste of its path
        execute!(stdout(), EnableBracketedPaste)?;

        // Create event channel
        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
        self.event_tx = Some(event_tx.clone());

        let input_tx = event_tx.clone();
        // Spawn input handler; it stops once the receiver is dropped
        tokio::task::spawn_blocking(move || loop {
            if input_tx.is_closed() {
                break;
            }
            match event::poll(Duration::from_millis(100)) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    error!(error = %e, "Failed to poll terminal events");
                    break;
                }
            }
            let forwarded = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => input_tx.send(AppEvent::Key(key)),
                Ok(Event::Paste(text)) => input_tx.send(AppEvent::Paste(text)),
                Ok(Event::Resize(width, height)) => input_tx.send(AppEvent::Resize(width, height)),
                Ok(_) => Ok(()),
                Err(e) => {
                    error!(error = %e, "Failed to read terminal event");
                    break;
                }
            };
            if forwarded.is_err() {
                break;
            }
        });

        // Main render loop
        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // Cleanup
        let _ = execute!(stdout(), DisableBracketedPaste);
        ratatui::restore();
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            // Draw UI
            terminal.draw(|frame| self.render(frame))?;

            // Handle events with timeout so scheduled transitions fire
            match time::timeout(Duration::from_millis(50), event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event, Instant::now()),
                Ok(None) => break, // Channel closed
                Err(_) => self.handle_event(AppEvent::Tick, Instant::now()),
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Render the current state
    fn render(&self, frame: &mut Frame) {
        super::screens::render(frame, &self.controller, &self.ui, &self.theme);
    }

    /// Handle an event
    pub fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Key(key) => self.handle_key(key, now),
            AppEvent::Paste(text) => self.handle_paste(text),
            AppEvent::ImageDecoded { path, data_url, byte_len } => {
                self.controller.image_decoded(&path, data_url, byte_len);
            }
            AppEvent::ImageFailed { path, error } => {
                self.controller.image_failed(&path, &error);
            }
            AppEvent::Resize(..) | AppEvent::Tick => {}
        }
        self.controller.tick(now);
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Handle Ctrl+C - exit on double press
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if self
                .last_ctrl_c
                .is_some_and(|last| now.duration_since(last) < Duration::from_secs(1))
            {
                self.should_quit = true;
            }
            self.last_ctrl_c = Some(now);
            return;
        }

        match self.controller.view() {
            View::Completed(_) => {
                match key.code {
                    KeyCode::Enter => {
                        self.controller.restart();
                        self.ui = UiState::new(&self.controller);
                    }
                    KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                    _ => {}
                }
                return;
            }
            View::Completing => {
                if key.code == KeyCode::Esc {
                    self.should_quit = true;
                }
                return;
            }
            View::Wizard => {}
        }

        // Handle modal input first if the path prompt is showing
        if self.ui.path_prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        let step = self.controller.current_step();
        if let Some(shortcut) = shortcut_for(&key) {
            // Leaving the step leaves the focused field too
            if let Focus::Field(name) = self.ui.focus {
                self.controller.field_blur(name);
            }
            self.controller.shortcut(shortcut, now);
            self.sync_focus(step);
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => self.move_focus(true),
            KeyCode::BackTab => self.move_focus(false),
            _ => self.handle_focused_key(key, now),
        }
        self.sync_focus(step);
    }

    fn handle_focused_key(&mut self, key: KeyEvent, now: Instant) {
        match self.ui.focus {
            Focus::Themes => match key.code {
                KeyCode::Up => self.controller.themes_mut().move_cursor_up(),
                KeyCode::Down => self.controller.themes_mut().move_cursor_down(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if let Err(e) = self.controller.select_theme_at_cursor(now) {
                        error!(error = %e, "Theme selection failed");
                    }
                }
                _ => {}
            },
            Focus::Field(name) => {
                let is_choice = matches!(self.controller.field(name).spec.kind, FieldKind::Choice(_));
                match key.code {
                    KeyCode::Enter | KeyCode::Down => self.move_focus(true),
                    KeyCode::Up => self.move_focus(false),
                    KeyCode::Left if is_choice => self.controller.cycle_choice(name, false),
                    KeyCode::Right | KeyCode::Char(' ') if is_choice => {
                        self.controller.cycle_choice(name, true)
                    }
                    _ => {
                        if let Some(input) = self.ui.inputs.get_mut(&name) {
                            let changed = input
                                .handle_event(&Event::Key(key))
                                .is_some_and(|change| change.value);
                            if changed {
                                self.controller.field_input(name, input.value());
                            }
                        }
                    }
                }
            }
            Focus::Upload => {
                if key.code == KeyCode::Enter {
                    self.controller.drag(DragEvent::Enter);
                    self.ui.path_prompt = Some(Input::default());
                }
            }
            Focus::Back => {
                if key.code == KeyCode::Enter {
                    self.controller.retreat(now);
                }
            }
            Focus::Continue => {
                if key.code == KeyCode::Enter {
                    self.activate_continue(now);
                }
            }
        }
    }

    fn activate_continue(&mut self, now: Instant) {
        match self.controller.current_step() {
            Step::Theme if !self.controller.render().advance_enabled => {}
            Step::Pricing => {
                match self.controller.complete(now, self.sink.as_ref()) {
                    Ok(Some(record)) => debug!(theme = ?record.theme, "Onboarding complete"),
                    Ok(None) => {}
                    Err(e) => error!(error = %e, "Failed to submit completion record"),
                }
            }
            _ => {
                self.controller.advance(now);
            }
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.ui.path_prompt.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Enter => {
                let path = prompt.value().trim().to_string();
                self.ui.path_prompt = None;
                if path.is_empty() {
                    self.controller.drag(DragEvent::Leave);
                    return;
                }
                let file = FileCandidate::from_path(path);
                if let Some(file) = self.controller.drag(DragEvent::Drop(file)) {
                    self.spawn_decode(file);
                }
            }
            KeyCode::Esc => {
                self.ui.path_prompt = None;
                self.controller.drag(DragEvent::Leave);
            }
            _ => {
                prompt.handle_event(&Event::Key(key));
            }
        }
    }

    fn handle_paste(&mut self, text: String) {
        if let Some(prompt) = self.ui.path_prompt.as_mut() {
            let value = format!("{}{}", prompt.value(), text.trim());
            *prompt = Input::new(value);
            return;
        }

        match self.ui.focus {
            Focus::Upload => {
                let file = FileCandidate::from_path(text.trim());
                if let Some(file) = self.controller.pick_file(file) {
                    self.spawn_decode(file);
                }
            }
            Focus::Field(name) => {
                if let Some(input) = self.ui.inputs.get_mut(&name) {
                    let value = format!("{}{}", input.value(), text);
                    *input = Input::new(value);
                    self.controller.field_input(name, input.value());
                }
            }
            _ => {}
        }
    }

    /// Move focus; a field losing focus is validated (its blur)
    fn move_focus(&mut self, forward: bool) {
        let step = self.controller.current_step();
        if let Some(blurred) = self.ui.move_focus(step, forward) {
            self.controller.field_blur(blurred);
        }
    }

    /// Reset focus when the visible step changed
    fn sync_focus(&mut self, previous: Step) {
        let current = self.controller.current_step();
        if current != previous {
            self.ui.reset_focus(current);
        }
    }

    /// Decode the image off the UI loop and report back through the channel
    fn spawn_decode(&self, file: FileCandidate) {
        let Some(tx) = self.event_tx.clone() else {
            return;
        };
        tokio::spawn(async move {
            let event = match crate::wizard::upload::decode_data_url(&file).await {
                Ok((data_url, byte_len)) => AppEvent::ImageDecoded {
                    path: file.path,
                    data_url,
                    byte_len,
                },
                Err(e) => AppEvent::ImageFailed {
                    path: file.path,
                    error: e.to_string(),
                },
            };
            let _ = tx.send(event);
        });
    }
}
