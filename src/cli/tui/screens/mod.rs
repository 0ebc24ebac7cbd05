//! Screen modules for the onboarding wizard
pub mod completion;
pub mod form;
pub mod pricing;
pub mod product;
pub mod progress;
pub mod theme_step;
pub mod toast;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::modal;
use super::state::UiState;
use super::theme::Theme;
use crate::wizard::{Step, StepController, View};

/// Render the whole frame for the controller's current view
pub fn render(frame: &mut Frame, controller: &StepController, ui: &UiState, theme: &Theme) {
    match controller.view() {
        View::Completed(view) => completion::render(frame, view, theme),
        View::Wizard | View::Completing => render_wizard(frame, controller, ui, theme),
    }

    toast::render(frame, controller.notifications());

    if let Some(prompt) = &ui.path_prompt {
        modal::render_path_prompt(frame, frame.area(), theme, prompt.value(), prompt.cursor());
    }
}

fn render_wizard(frame: &mut Frame, controller: &StepController, ui: &UiState, theme: &Theme) {
    let view = controller.render();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),      // Header
            Constraint::Length(3),      // Progress indicator
            Constraint::Min(10),        // Step content
            Constraint::Length(1),      // Help bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], &controller.config().brand, theme);
    progress::render(frame, chunks[1], &view.progress, theme);

    let block = Block::default()
        .title(format!(" Step {} of 3 · {} ", view.active.number(), view.active.title()))
        .borders(Borders::ALL)
        .border_style(if view.fading_in { theme.muted } else { Style::default() });
    let body = block.inner(chunks[2]);
    frame.render_widget(block, chunks[2]);

    match view.active {
        Step::Theme => theme_step::render(frame, body, controller, ui, &view, theme),
        Step::Product => product::render(frame, body, controller, ui, theme),
        Step::Pricing => pricing::render(frame, body, controller, ui, theme),
    }

    render_help(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, area: Rect, brand: &str, theme: &Theme) {
    let header = Line::from(vec![
        Span::styled(format!(" {} ", brand.to_uppercase()), theme.accent),
        Span::raw(" Let's set up your store"),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let help_text = Line::from(vec![
        Span::styled("Tab", key),
        Span::raw(" next field  "),
        Span::styled("Enter", key),
        Span::raw(" activate  "),
        Span::styled("Ctrl+Enter", key),
        Span::raw(" continue  "),
        Span::styled("Ctrl+←", key),
        Span::raw(" back  "),
        Span::styled("Esc", key),
        Span::raw(" quit"),
    ]);

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().bg(Color::DarkGray));

    frame.render_widget(help, area);
}
