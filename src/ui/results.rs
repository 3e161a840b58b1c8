use crate::app::{App, Mode};
use crate::card::ResultCard;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let browsing = app.mode == Mode::Results;
    let border_style = if browsing {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let title = if app.cards.is_empty() {
        " Results ".to_string()
    } else {
        format!(" Results ({}) ", app.cards.len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    if app.is_submitting() {
        let busy = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{} Generating...", app.spinner()),
                Style::default().fg(Color::Yellow),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(busy, area);
        return;
    }

    if app.cards.is_empty() {
        let placeholder = if app.summary.is_some() {
            "No results"
        } else {
            "Enter accounts on the left and press Ctrl+G"
        };
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                placeholder,
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let text_width = area.width.saturating_sub(6).max(20) as usize;
    let items: Vec<ListItem> = app
        .cards
        .iter()
        .map(|card| card_item(card, app, text_width))
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    state.select(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Wrap to the pane width, keeping the text's own line breaks.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    text.lines()
        .flat_map(|line| {
            let wrapped = textwrap::wrap(line, width);
            if wrapped.is_empty() {
                vec![String::new()]
            } else {
                wrapped.into_iter().map(|cow| cow.into_owned()).collect()
            }
        })
        .collect()
}

fn card_item<'a>(card: &'a ResultCard, app: &App, width: usize) -> ListItem<'a> {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(
            format!("#{} ", card.index + 1),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(card.original_url.as_str(), Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(Line::from(Span::styled(
        format!(
            "♥ {}  ⇄ {}  💬 {}",
            card.likes, card.retweets, card.replies
        ),
        Style::default().fg(Color::Magenta),
    )));

    lines.push(Line::from(Span::styled(
        "Original",
        Style::default().fg(Color::DarkGray),
    )));
    for wrapped in wrap_text(&card.original_text, width) {
        lines.push(Line::from(Span::styled(
            format!("  {wrapped}"),
            Style::default().fg(Color::Gray),
        )));
    }

    lines.push(Line::from(Span::styled(
        "Rewrite",
        Style::default().fg(Color::Green),
    )));
    for wrapped in wrap_text(&card.rewritten_text, width) {
        lines.push(Line::from(format!("  {wrapped}")));
    }

    for (i, entry) in card.thread.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("Thread {}/{}", i + 1, card.thread.len()),
            Style::default().fg(Color::Blue),
        )));
        for wrapped in wrap_text(entry, width) {
            lines.push(Line::from(format!("  {wrapped}")));
        }
    }

    if let Some(cta) = &card.call_to_action {
        lines.push(Line::from(Span::styled(
            "Call to action",
            Style::default().fg(Color::Yellow),
        )));
        for wrapped in wrap_text(cta, width) {
            lines.push(Line::from(format!("  {wrapped}")));
        }
    }

    if let Some(image_url) = &card.image_url {
        lines.push(Line::from(Span::styled(
            format!("Image: {image_url}"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let copy_label = if app.is_copied(card.index) {
        Span::styled("Copied!", Style::default().fg(Color::Green))
    } else {
        Span::styled("[c] copy", Style::default().fg(Color::DarkGray))
    };
    lines.push(Line::from(vec![
        Span::styled(
            format!(
                "Dwell {} · Reply {} · Viral {}   ",
                card.dwell, card.reply, card.virality
            ),
            Style::default().fg(Color::Cyan),
        ),
        copy_label,
    ]));
    lines.push(Line::from(""));

    ListItem::new(lines)
}
