pub mod form;
pub mod results;
pub mod summary;
pub mod toast;

use crate::app::{App, Mode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

const FORM_WIDTH: u16 = 36;

pub fn draw(frame: &mut Frame, app: &App) {
    let screen = frame.area();
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(screen);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(FORM_WIDTH), Constraint::Min(0)])
        .split(root[0]);

    form::render(frame, panes[0], app);
    render_right(frame, panes[1], app);
    render_status_line(frame, root[1], app);
    toast::render(frame, screen, app);
}

fn render_right(frame: &mut Frame, area: Rect, app: &App) {
    match &app.summary {
        Some(view) => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(0),
                    Constraint::Length(summary::height(view)),
                ])
                .split(area);
            results::render(frame, rows[0], app);
            summary::render(frame, rows[1], view);
        }
        None => results::render(frame, area, app),
    }
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(status) = &app.status {
        Line::styled(status.clone(), Style::default().fg(Color::Yellow))
    } else {
        let help = match app.mode {
            Mode::Form => "Tab next field | Enter new line | Ctrl+G generate | Esc results/quit",
            Mode::Results => "j/k select | c copy | o open | e edit form | g generate | q quit",
        };
        Line::styled(help, Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(Paragraph::new(line), area);
}
