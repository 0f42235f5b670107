//! Color theme and styling for dashboard panels.

use crate::view::SampleClass;
use ratatui::style::{Color, Modifier, Style};

/// Fixed color scheme for the fraudscope dashboard.
///
/// The two-color category encoding (normal green, fraud red) is part of the
/// dashboard contract and is not user-configurable.
pub struct Theme {
    /// Primary accent color (cyan for titles and borders)
    pub accent: Color,
    /// Category color for normal transactions
    pub normal: Color,
    /// Category color for fraudulent transactions
    pub fraud: Color,
    /// Warning color (fraud-rate tile)
    pub warning: Color,
    /// Muted color (axis labels, secondary text)
    pub muted: Color,
    /// Text color for normal content
    pub text: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            accent: Color::Cyan,
            normal: Color::Green,
            fraud: Color::Red,
            warning: Color::Yellow,
            muted: Color::DarkGray,
            text: Color::White,
        }
    }

    /// Category color for a sample class.
    pub fn sample_color(&self, class: SampleClass) -> Color {
        match class {
            SampleClass::Normal => self.normal,
            SampleClass::Fraud => self.fraud,
        }
    }

    /// Style for panel titles
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for metric values
    pub fn value_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Style for metric captions and axis text
    pub fn caption_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for the anomaly counter and the risk badge
    pub fn danger_style(&self) -> Style {
        Style::default().fg(self.fraud).add_modifier(Modifier::BOLD)
    }

    /// Style for the static model-status tile
    pub fn status_style(&self) -> Style {
        Style::default()
            .fg(self.normal)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the fraud-rate tile
    pub fn warning_style(&self) -> Style {
        Style::default()
            .fg(self.warning)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for table header rows
    pub fn table_header_style(&self) -> Style {
        Style::default()
            .fg(self.muted)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default_theme();
        assert_eq!(theme.accent, Color::Cyan);
        assert_eq!(theme.normal, Color::Green);
        assert_eq!(theme.fraud, Color::Red);
    }

    #[test]
    fn test_category_colors_are_distinct() {
        let theme = Theme::default_theme();
        assert_ne!(
            theme.sample_color(SampleClass::Normal),
            theme.sample_color(SampleClass::Fraud)
        );
    }
}
