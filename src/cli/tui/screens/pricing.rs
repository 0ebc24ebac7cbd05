//! Step 3: pricing and stock

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
};

use super::form::{field_height, render_buttons, render_field};
use crate::cli::tui::state::UiState;
use crate::cli::tui::theme::Theme;
use crate::wizard::{Step, StepController, View};

pub fn render(frame: &mut Frame, area: Rect, controller: &StepController, ui: &UiState, theme: &Theme) {
    let fields: Vec<_> = controller.form().fields_for_step(Step::Pricing).collect();

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(fields.iter().map(|field| Constraint::Length(field_height(field))));
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    frame.render_widget(
        Paragraph::new("Set what you charge and how many units you have on hand.").style(theme.muted),
        chunks[0],
    );

    for (index, field) in fields.iter().enumerate() {
        render_field(
            frame,
            chunks[index + 1],
            field,
            ui.input(field.name()),
            ui.focused_field() == Some(field.name()),
            theme,
        );
    }

    let completing = *controller.view() == View::Completing;
    render_buttons(
        frame,
        chunks[fields.len() + 2],
        ui.focus,
        true,
        if completing { "Finishing…" } else { "Complete Setup ✓" },
        !completing,
        theme,
    );
}
