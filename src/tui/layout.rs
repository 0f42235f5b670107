//! Responsive layout management for different terminal sizes.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout mode based on terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Charts side by side (>=100 cols)
    Full,
    /// Panels stacked vertically (50-100 cols)
    Compact,
    /// Metrics strip only (<50 cols)
    Minimal,
}

impl LayoutMode {
    /// Determine layout mode from terminal width
    pub fn from_terminal_width(width: u16) -> Self {
        match width {
            0..=49 => Self::Minimal,
            50..=99 => Self::Compact,
            _ => Self::Full,
        }
    }

    /// Check if this mode shows the chart and table panels
    pub fn shows_panels(&self) -> bool {
        matches!(self, Self::Full | Self::Compact)
    }
}

/// Panel areas for one dashboard frame.
pub struct DashboardAreas {
    pub metrics: Rect,
    pub comparison: Rect,
    pub scatter: Rect,
    pub risks: Rect,
}

/// Split the frame into the four fixed panel areas.
pub fn dashboard_areas(area: Rect, mode: LayoutMode) -> DashboardAreas {
    match mode {
        LayoutMode::Minimal => {
            // Everything collapses into the metrics strip; the other areas
            // are zero-sized and skipped by the renderer.
            let empty = Rect::new(area.x, area.y, 0, 0);
            DashboardAreas {
                metrics: area,
                comparison: empty,
                scatter: empty,
                risks: empty,
            }
        }
        LayoutMode::Compact => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Length(5),      // Metrics strip
                    Constraint::Percentage(30), // Comparison chart
                    Constraint::Percentage(35), // Scatter plot
                    Constraint::Min(6),         // Risk table
                ])
                .split(area);
            DashboardAreas {
                metrics: chunks[0],
                comparison: chunks[1],
                scatter: chunks[2],
                risks: chunks[3],
            }
        }
        LayoutMode::Full => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Length(5),      // Metrics strip
                    Constraint::Percentage(45), // Charts row
                    Constraint::Min(8),         // Risk table
                ])
                .split(area);
            let charts = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Ratio(2, 3), // Comparison chart
                    Constraint::Ratio(1, 3), // Scatter plot
                ])
                .split(rows[1]);
            DashboardAreas {
                metrics: rows[0],
                comparison: charts[0],
                scatter: charts[1],
                risks: rows[2],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_mode_thresholds() {
        assert_eq!(LayoutMode::from_terminal_width(30), LayoutMode::Minimal);
        assert_eq!(LayoutMode::from_terminal_width(50), LayoutMode::Compact);
        assert_eq!(LayoutMode::from_terminal_width(99), LayoutMode::Compact);
        assert_eq!(LayoutMode::from_terminal_width(160), LayoutMode::Full);
    }

    #[test]
    fn test_minimal_mode_hides_panels() {
        assert!(!LayoutMode::Minimal.shows_panels());
        assert!(LayoutMode::Full.shows_panels());
    }

    #[test]
    fn test_full_layout_covers_all_panels() {
        let areas = dashboard_areas(Rect::new(0, 0, 120, 40), LayoutMode::Full);
        assert!(areas.metrics.height > 0);
        assert!(areas.comparison.width > areas.scatter.width);
        assert!(areas.risks.height > 0);
    }
}
