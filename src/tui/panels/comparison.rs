//! Comparison panel: horizontal grouped bar chart of feature means among
//! normal vs. fraudulent transactions.

use crate::tui::theme::Theme;
use crate::view::ComparisonEntry;
use ratatui::layout::{Direction, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::Frame;

/// Bar length used for the largest value; other bars scale proportionally.
const BAR_SCALE: f64 = 100.0;

/// Render one bar pair per comparison entry. Fixed two-color encoding:
/// normal green, fraud red. An absent bucket renders as a zero-length bar,
/// never as an error.
pub fn render(frame: &mut Frame, theme: &Theme, series: &[ComparisonEntry], area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Why are these transactions flagged?")
        .border_style(theme.border_style())
        .title_style(theme.title_style());

    if series.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    let max = series
        .iter()
        .flat_map(|entry| [entry.normal, entry.fraud])
        .flatten()
        .fold(0.0_f64, f64::max);

    let mut chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .group_gap(1);

    for entry in series {
        let bars = [
            bar("Normal", entry.normal, max, theme.normal),
            bar("Fraud", entry.fraud, max, theme.fraud),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::styled(entry.label.clone(), theme.caption_style()))
                .bars(&bars),
        );
    }

    frame.render_widget(chart, area);
}

fn bar(name: &'static str, value: Option<f64>, max: f64, color: Color) -> Bar<'static> {
    let text = match value {
        Some(v) => format!("{v:.2}"),
        None => String::new(),
    };
    Bar::default()
        .value(scaled(value, max))
        .text_value(text)
        .label(Line::from(name))
        .style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color))
}

/// Scale a bucket value onto bar length. Absent buckets and a zero maximum
/// map to zero length.
fn scaled(value: Option<f64>, max: f64) -> u64 {
    match value {
        Some(v) if max > 0.0 && v > 0.0 => (v / max * BAR_SCALE).round() as u64,
        _ => 0,
    }
}
