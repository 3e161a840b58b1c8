use crate::app::SummaryView;
use crate::format::{fmt_elapsed, fmt_jpy, fmt_usd};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Pane height including borders; the cost block only exists when the
/// response carried one.
pub fn height(view: &SummaryView) -> u16 {
    if view.summary.cost.is_some() {
        6
    } else {
        3
    }
}

pub fn render(frame: &mut Frame, area: Rect, view: &SummaryView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray))
        .title(format!(" Summary ({}s) ", fmt_elapsed(view.elapsed_secs)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let summary = &view.summary;
    let mut lines = vec![Line::from(vec![
        Span::styled("collected ", Style::default().fg(Color::DarkGray)),
        Span::raw(summary.total_collected.to_string()),
        Span::styled("  filtered ", Style::default().fg(Color::DarkGray)),
        Span::raw(summary.total_filtered.to_string()),
        Span::styled("  analyzed ", Style::default().fg(Color::DarkGray)),
        Span::raw(summary.total_analyzed.to_string()),
        Span::styled("  rewritten ", Style::default().fg(Color::DarkGray)),
        Span::raw(summary.total_rewritten.to_string()),
    ])];

    if let Some(cost) = &summary.cost {
        lines.push(Line::from(format!(
            "X API: {} lookups · {} tweets read · {}",
            cost.x_api_user_lookups,
            cost.x_api_tweets_read,
            fmt_usd(cost.x_api_cost_usd)
        )));
        lines.push(Line::from(format!(
            "Gemini: {} analysis · {} rewrite · {}",
            cost.gemini_analysis_calls,
            cost.gemini_rewrite_calls,
            fmt_usd(cost.gemini_cost_usd)
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "Estimated total: {} ({})",
                fmt_jpy(cost.estimated_cost_jpy),
                fmt_usd(cost.estimated_cost_usd)
            ),
            Style::default().fg(Color::Yellow),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
