//! Modal overlay system for the TUI

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::theme::Theme;

/// Calculate centered modal area
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render the image path prompt (file picker)
pub fn render_path_prompt(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    input_text: &str,
    cursor_position: usize,
) {
    let modal_area = centered_rect(60, 40, area);

    // Clear background for modal
    frame.render_widget(Clear, modal_area);

    let modal_block = Block::default()
        .title(" Upload Product Image ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.modal_border);

    let inner_area = modal_block.inner(modal_area);
    frame.render_widget(modal_block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),      // Instructions
            Constraint::Length(3),      // Path input
            Constraint::Min(0),         // Hint
            Constraint::Length(1),      // Help text
        ])
        .split(inner_area);

    let instructions = Paragraph::new("Path to an image file (or drop one onto the terminal):")
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true });
    frame.render_widget(instructions, chunks[0]);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.hover);
    let input_inner = input_block.inner(chunks[1]);
    frame.render_widget(input_block, chunks[1]);

    let split = input_text
        .char_indices()
        .nth(cursor_position)
        .map(|(index, _)| index)
        .unwrap_or(input_text.len());
    let line = Line::from(vec![
        Span::raw(&input_text[..split]),
        Span::styled("█", Style::default().fg(Color::White)),
        Span::raw(&input_text[split..]),
    ]);
    frame.render_widget(Paragraph::new(line), input_inner);

    let hint = Paragraph::new("PNG, JPG, GIF, WEBP, SVG…  other files are ignored")
        .style(theme.muted);
    frame.render_widget(hint, chunks[2]);

    let help_text = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Cyan)),
        Span::raw(" Upload  "),
        Span::styled("[Esc]", Style::default().fg(Color::Cyan)),
        Span::raw(" Cancel"),
    ]);
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);
}
