//! Metrics strip: four fixed tiles.

use crate::tui::theme::Theme;
use crate::view::MetricsStrip;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the four-tile metrics strip.
pub fn render(frame: &mut Frame, theme: &Theme, metrics: &MetricsStrip, area: Rect) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(area);

    render_tile(
        frame,
        theme,
        tiles[0],
        "Total Transactions",
        &metrics.total_transactions,
        theme.value_style(),
    );
    render_tile(
        frame,
        theme,
        tiles[1],
        "Detected Anomalies",
        &metrics.detected_anomalies,
        theme.danger_style(),
    );
    render_tile(
        frame,
        theme,
        tiles[2],
        "Fraud Rate",
        &metrics.fraud_rate,
        theme.warning_style(),
    );
    render_tile(
        frame,
        theme,
        tiles[3],
        "Model Status",
        metrics.model_status,
        theme.status_style(),
    );
}

fn render_tile(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    caption: &str,
    value: &str,
    value_style: Style,
) {
    let lines = vec![
        Line::styled(caption.to_string(), theme.caption_style()),
        Line::styled(value.to_string(), value_style),
    ];
    let tile = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style()),
    );
    frame.render_widget(tile, area);
}
