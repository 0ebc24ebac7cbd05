//! Step progress indicator

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::cli::tui::theme::Theme;
use crate::wizard::{ProgressIndicator, Step};

pub fn render(frame: &mut Frame, area: Rect, progress: &ProgressIndicator, theme: &Theme) {
    let mut spans = Vec::new();

    for (index, (step, marker)) in Step::ALL.iter().zip(&progress.markers).enumerate() {
        let style = theme.marker_style(*marker);
        spans.push(Span::styled(format!("{} ", Theme::marker_icon(*marker)), style));
        spans.push(Span::styled(step.title(), style));

        if let Some(active) = progress.lines.get(index) {
            spans.push(Span::styled(" ──────── ", theme.line_style(*active)));
        }
    }

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(spans)])
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
