//! Scatter panel: sampled transactions, color-coded by class.

use crate::tui::theme::Theme;
use crate::view::{SampleClass, ScatterPoint};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::Frame;

/// Render one point per sample: x = distance from home, y = ratio to median
/// price, fill color by sample class. Points are partitioned into the two
/// category datasets with input order preserved inside each; overlap
/// z-order is whatever the chart widget does.
pub fn render(frame: &mut Frame, theme: &Theme, points: &[ScatterPoint], area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Anomaly Distribution")
        .border_style(theme.border_style())
        .title_style(theme.title_style());

    if points.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    let normal: Vec<(f64, f64)> = coords(points, SampleClass::Normal);
    let fraud: Vec<(f64, f64)> = coords(points, SampleClass::Fraud);

    let x_bounds = bounds(points.iter().map(|p| p.x));
    let y_bounds = bounds(points.iter().map(|p| p.y));

    let datasets = vec![
        Dataset::default()
            .name("Normal")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(theme.sample_color(SampleClass::Normal)))
            .data(&normal),
        Dataset::default()
            .name("Fraud")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(theme.sample_color(SampleClass::Fraud)))
            .data(&fraud),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Dist (km)")
                .style(theme.caption_style())
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title("Price Ratio")
                .style(theme.caption_style())
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        );

    frame.render_widget(chart, area);
}

fn coords(points: &[ScatterPoint], class: SampleClass) -> Vec<(f64, f64)> {
    points
        .iter()
        .filter(|p| p.class == class)
        .map(|p| (p.x, p.y))
        .collect()
}

/// Axis bounds covering the data with a little headroom.
fn bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let span = (max - min).max(1e-9);
    [(min - span * 0.05).min(0.0), max + span * 0.05]
}

fn axis_labels(bounds: [f64; 2]) -> Vec<String> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    vec![
        format!("{:.1}", bounds[0]),
        format!("{mid:.1}"),
        format!("{:.1}", bounds[1]),
    ]
}
