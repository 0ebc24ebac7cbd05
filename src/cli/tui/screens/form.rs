//! Shared widgets: form fields and the back/continue button row

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tui_input::Input;

use crate::cli::tui::state::Focus;
use crate::cli::tui::theme::Theme;
use crate::wizard::fields::{FieldKind, FormField};

/// Rows taken by a field: its box plus one line for the error message
pub fn field_height(field: &FormField) -> u16 {
    match field.spec.kind {
        FieldKind::TextArea => 6,
        _ => 4,
    }
}

pub fn render_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    input: Option<&Input>,
    focused: bool,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let required = field.spec.required || field.name().is_always_required();
    let title = if required {
        format!(" {} * ", field.name().label())
    } else {
        format!(" {} ", field.name().label())
    };

    let border_style = if field.has_error() {
        theme.error
    } else if focused {
        theme.focused
    } else {
        Style::default()
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let value = input.map(|input| input.value()).unwrap_or(field.value.as_str());
    let mut spans = Vec::new();
    if let FieldKind::Choice(_) = field.spec.kind {
        spans.push(Span::styled("◀ ", theme.muted));
    }
    if value.is_empty() {
        spans.push(Span::styled(field.spec.placeholder, theme.muted));
    } else {
        spans.push(Span::raw(value));
    }
    if focused && input.is_some() {
        spans.push(Span::styled("█", Style::default().add_modifier(Modifier::SLOW_BLINK)));
    }
    if let FieldKind::Choice(_) = field.spec.kind {
        spans.push(Span::styled(" ▶", theme.muted));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, chunks[0]);

    if let Some(error) = &field.error {
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {}", error), theme.error)),
            chunks[1],
        );
    }
}

pub fn render_buttons(
    frame: &mut Frame,
    area: Rect,
    focus: Focus,
    show_back: bool,
    continue_label: &str,
    continue_enabled: bool,
    theme: &Theme,
) {
    let button = |label: &str, focused: bool, enabled: bool| {
        let style = if !enabled {
            theme.disabled
        } else if focused {
            theme.accent.add_modifier(Modifier::REVERSED)
        } else {
            theme.accent
        };
        Span::styled(format!("[ {} ]", label), style)
    };

    let mut spans = Vec::new();
    if show_back {
        spans.push(button("← Back", focus == Focus::Back, true));
        spans.push(Span::raw("   "));
    }
    spans.push(button(continue_label, focus == Focus::Continue, continue_enabled));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
