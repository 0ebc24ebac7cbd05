use ratatui::style::{Color, Modifier, Style};

use crate::wizard::{MarkerState, Severity};

/// Consistent theme for the TUI
pub struct Theme {
    pub accent: Style,
    pub focused: Style,
    pub selected: Style,
    pub error: Style,
    pub success: Style,
    pub muted: Style,
    pub disabled: Style,
    pub hover: Style,
    pub modal_border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD),
            focused: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            selected: Style::default()
                .bg(Color::Rgb(254, 247, 245))
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD),
            error: Style::default()
                .fg(Color::Rgb(239, 68, 68)),
            success: Style::default()
                .fg(Color::Rgb(16, 185, 129))
                .add_modifier(Modifier::BOLD),
            muted: Style::default()
                .fg(Color::DarkGray),
            disabled: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
            hover: Style::default()
                .fg(ACCENT),
            modal_border: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }
}

const ACCENT: Color = Color::Rgb(255, 107, 53);

impl Theme {
    /// Toast background for a severity
    pub fn severity_color(severity: Severity) -> Color {
        match severity {
            Severity::Success => Color::Rgb(16, 185, 129),
            Severity::Error => Color::Rgb(239, 68, 68),
            Severity::Warning => Color::Rgb(245, 158, 11),
            Severity::Info => Color::Rgb(59, 130, 246),
        }
    }

    /// Get icon for a progress marker
    pub fn marker_icon(marker: MarkerState) -> &'static str {
        match marker {
            MarkerState::Completed => "✓",
            MarkerState::Active => "●",
            MarkerState::Neutral => "○",
        }
    }

    /// Get style for a progress marker
    pub fn marker_style(&self, marker: MarkerState) -> Style {
        match marker {
            MarkerState::Completed => self.success,
            MarkerState::Active => self.accent,
            MarkerState::Neutral => self.muted,
        }
    }

    /// Style for a connecting line of the progress indicator
    pub fn line_style(&self, active: bool) -> Style {
        if active {
            self.success
        } else {
            self.muted
        }
    }
}
