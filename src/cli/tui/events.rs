use std::path::PathBuf;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::wizard::Shortcut;

/// All possible events in the application
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    /// Bracketed paste; dragging a file onto the terminal pastes its path
    Paste(String),
    Resize(u16, u16),

    // Async task events - image decoding
    ImageDecoded { path: PathBuf, data_url: String, byte_len: usize },
    ImageFailed { path: PathBuf, error: String },

    // UI events
    Tick, // drives scheduled transitions
}

/// Keyboard shortcuts: modifier+Enter advances, Ctrl+Left goes back
pub fn shortcut_for(key: &KeyEvent) -> Option<Shortcut> {
    let modified = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        KeyCode::Enter if modified => Some(Shortcut::Advance),
        KeyCode::Left if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Shortcut::Retreat),
        _ => None,
    }
}
