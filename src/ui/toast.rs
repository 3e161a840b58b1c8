use crate::app::{App, ToastKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

/// Stack active toasts in the top-right corner, newest at the top.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if app.toasts.is_empty() || area.width < TOAST_WIDTH + 2 {
        return;
    }

    let x = area.right().saturating_sub(TOAST_WIDTH + 1);
    for (i, toast) in app.toasts.iter().rev().enumerate() {
        let y = area.y + 1 + i as u16 * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }
        let toast_area = Rect::new(x, y, TOAST_WIDTH, TOAST_HEIGHT);

        let color = match toast.kind {
            ToastKind::Success => Color::Green,
            ToastKind::Error => Color::Red,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        frame.render_widget(Clear, toast_area);
        frame.render_widget(
            Paragraph::new(toast.message.as_str())
                .wrap(Wrap { trim: true })
                .block(block),
            toast_area,
        );
    }
}
