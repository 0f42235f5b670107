//! Risk table panel: high-risk transactions in artifact order.

use crate::tui::theme::Theme;
use crate::view::RiskRow;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

/// Render one row per risk entry, in the order given by the artifact.
/// No client-side re-sorting, no pagination; rows beyond the panel height
/// are simply clipped.
pub fn render(frame: &mut Frame, theme: &Theme, risks: &[RiskRow], area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Top High-Risk Transactions (Action Required)")
        .border_style(theme.border_style())
        .title_style(theme.title_style());

    let header = Row::new([
        Cell::from("Risk Score (Raw)"),
        Cell::from("Global Risk Factors"),
        Cell::from("Distance (Home)"),
        Cell::from("Price Ratio"),
        Cell::from("Status"),
    ])
    .style(theme.table_header_style());

    let rows: Vec<Row> = risks
        .iter()
        .map(|risk| {
            Row::new([
                Cell::from(risk.score.clone()).style(theme.value_style()),
                Cell::from(risk.factors.clone()).style(theme.danger_style()),
                Cell::from(risk.distance.clone()),
                Cell::from(risk.ratio.clone()),
                Cell::from(risk.status).style(theme.danger_style()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(16),
        Constraint::Min(24),
        Constraint::Length(16),
        Constraint::Length(12),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(2);

    frame.render_widget(table, area);
}
