use crate::app::{App, Mode};
use crate::input::Field;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FIELDS: [Field; 6] = [
    Field::Accounts,
    Field::TweetsToAnalyze,
    Field::TweetsToRewrite,
    Field::MinLikes,
    Field::MinRetweets,
    Field::GenerateImages,
];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let editing = app.mode == Mode::Form;
    let border_style = if editing {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Generate ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for field in FIELDS {
        let focused = editing && app.form.focus == field;
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(field.label(), label_style)));

        match field {
            Field::Accounts => {
                let cursor = if focused { "_" } else { "" };
                let text = format!("{}{}", app.form.accounts, cursor);
                for account_line in text.split('\n') {
                    lines.push(Line::from(format!("  {account_line}")));
                }
            }
            Field::GenerateImages => {
                let mark = if app.form.generate_images { "x" } else { " " };
                lines.push(Line::from(format!("  [{mark}] (space toggles)")));
            }
            _ => {
                let cursor = if focused { "_" } else { "" };
                lines.push(Line::from(format!(
                    "  {}{}",
                    app.form.field_text(field),
                    cursor
                )));
            }
        }
        lines.push(Line::from(""));
    }

    if app.is_submitting() {
        lines.push(Line::from(Span::styled(
            format!("{} Generating...", app.spinner()),
            Style::default().fg(Color::Yellow),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Ctrl+G to generate",
            Style::default().fg(Color::Green),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
