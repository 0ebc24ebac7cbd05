//! Step 1: theme selection

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use super::form::render_buttons;
use crate::cli::tui::state::{Focus, UiState};
use crate::cli::tui::theme::Theme;
use crate::wizard::{StepController, StepView};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    controller: &StepController,
    ui: &UiState,
    view: &StepView,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),      // Intro
            Constraint::Min(4),         // Theme list
            Constraint::Length(1),      // Buttons
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new("Pick the look of your storefront. You can change it later."),
        chunks[0],
    );

    let selector = controller.themes();
    let items: Vec<ListItem> = selector
        .options()
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let selected = selector.is_selected(&option.id);
            let under_cursor = ui.focus == Focus::Themes && index == selector.cursor();

            let marker = if selected { "◉" } else { "○" };
            let pointer = if under_cursor { "▶ " } else { "  " };
            let name_style = if selected {
                theme.selected
            } else if under_cursor {
                theme.focused
            } else {
                Style::default()
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::raw(pointer),
                    Span::styled(format!("{} {}", marker, option.display_name), name_style),
                ]),
                Line::from(Span::styled(format!("     {}", option.description), theme.muted)),
            ])
        })
        .collect();
    frame.render_widget(List::new(items), chunks[1]);

    render_buttons(
        frame,
        chunks[2],
        ui.focus,
        false,
        "Continue →",
        view.advance_enabled,
        theme,
    );
}
