//! Notification toast overlay, top-right corner

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Clear, Padding, Paragraph, Wrap},
};

use crate::cli::tui::theme::Theme;
use crate::wizard::notification::NotificationPresenter;
use crate::wizard::ToastPhase;

const TOAST_WIDTH: u16 = 42;
const TOAST_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, presenter: &NotificationPresenter) {
    let (Some(notification), Some(phase)) = (presenter.visible(), presenter.phase()) else {
        return;
    };

    let screen = frame.area();
    let width = TOAST_WIDTH.min(screen.width);
    let area = Rect {
        x: screen.x + screen.width.saturating_sub(width + 1),
        y: screen.y + 1,
        width,
        height: TOAST_HEIGHT.min(screen.height),
    };

    let mut style = Style::default()
        .bg(Theme::severity_color(notification.severity))
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    if phase == ToastPhase::Leaving {
        style = style.add_modifier(Modifier::DIM);
    }

    frame.render_widget(Clear, area);
    let toast = Paragraph::new(notification.message.as_str())
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::new(2, 2, 1, 0)).style(style));
    frame.render_widget(toast, area);
}
