//! Step 2: product details and image upload

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::form::{field_height, render_buttons, render_field};
use crate::cli::tui::state::{Focus, UiState};
use crate::cli::tui::theme::Theme;
use crate::wizard::upload::UploadBox;
use crate::wizard::{Step, StepController};

const UPLOAD_HEIGHT: u16 = 4;

pub fn render(frame: &mut Frame, area: Rect, controller: &StepController, ui: &UiState, theme: &Theme) {
    let fields: Vec<_> = controller.form().fields_for_step(Step::Product).collect();

    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|field| Constraint::Length(field_height(field)))
        .collect();
    constraints.push(Constraint::Length(UPLOAD_HEIGHT));
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (index, field) in fields.iter().enumerate() {
        render_field(
            frame,
            chunks[index],
            field,
            ui.input(field.name()),
            ui.focused_field() == Some(field.name()),
            theme,
        );
    }

    render_upload_box(
        frame,
        chunks[fields.len()],
        controller.upload(),
        ui.focus == Focus::Upload,
        theme,
    );

    render_buttons(
        frame,
        chunks[fields.len() + 2],
        ui.focus,
        true,
        "Continue →",
        true,
        theme,
    );
}

fn render_upload_box(frame: &mut Frame, area: Rect, upload: &UploadBox, focused: bool, theme: &Theme) {
    let border_style = if upload.is_hovered() {
        theme.hover
    } else if focused {
        theme.focused
    } else {
        theme.muted
    };

    let block = Block::default()
        .title(" Product Image ")
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(border_style);

    let lines = match (upload.preview(), upload.pending()) {
        (_, Some(pending)) => vec![Line::from(Span::styled(
            format!("Reading {}…", pending.file_name()),
            theme.muted,
        ))],
        (Some(preview), None) => vec![
            Line::from(format!(
                "🖼  {} ({}, {:.1} KB)",
                preview.file_name,
                preview.mime,
                preview.byte_len as f64 / 1024.0
            )),
            Line::from(Span::styled(preview.caption, theme.success)),
        ],
        (None, None) => vec![Line::from(Span::styled(
            "Drop an image onto the terminal, or press Enter to choose a file",
            theme.muted,
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
