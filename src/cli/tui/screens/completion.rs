//! Completion page shown once onboarding has finished

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::cli::tui::theme::Theme;
use crate::wizard::CompletionView;

pub fn render(frame: &mut Frame, view: &CompletionView, theme: &Theme) {
    let main_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.success);

    let inner = main_block.inner(frame.area());
    frame.render_widget(main_block, frame.area());

    // Center the content vertically
    let content_height = 9;
    let padding = inner.height.saturating_sub(content_height) / 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(padding),
            Constraint::Length(content_height),
            Constraint::Min(0),
            Constraint::Length(1),      // Help bar
        ])
        .split(inner);

    let lines = vec![
        Line::from(Span::styled("✔", theme.success)),
        Line::from(""),
        Line::from(Span::styled(
            view.headline.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(view.message.as_str(), theme.muted)),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ {} ]", view.restart_label),
            theme.accent.add_modifier(Modifier::REVERSED),
        )),
    ];

    let content = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(content, chunks[1]);

    let help_text = Line::from(vec![
        Span::raw(" Press "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" to start over, "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(" to exit"),
    ]);
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);
}
