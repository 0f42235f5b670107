//! Application state for the dashboard TUI.

use crate::artifact::AnalysisArtifact;
use crate::errors::LoadError;
use crate::tui::layout::{self, LayoutMode};
use crate::tui::panels;
use crate::tui::theme::Theme;
use crate::view::DashboardView;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Alignment;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Session-wide dashboard state machine.
///
/// `Loading` transitions exactly once to `Ready` or `Errored`; both are
/// terminal. There is no refetch within a session, so no further
/// transitions exist.
pub enum DashboardState {
    /// Acquisition in flight (the initial state).
    Loading,
    /// Artifact acquired; the snapshot is immutable for the session.
    Ready(AnalysisArtifact),
    /// Acquisition failed; terminal for the session.
    Errored(String),
}

/// Main application state: the sole owner of the artifact snapshot.
pub struct App {
    state: DashboardState,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: DashboardState::Loading,
        }
    }

    /// Resolve the load outcome. Only the first resolution takes effect;
    /// the state machine has no transitions out of its terminal states.
    pub fn resolve(&mut self, outcome: Result<AnalysisArtifact, LoadError>) {
        if !matches!(self.state, DashboardState::Loading) {
            log::warn!("ignoring artifact resolution after dashboard already resolved");
            return;
        }
        self.state = match outcome {
            Ok(artifact) => DashboardState::Ready(artifact),
            Err(err) => DashboardState::Errored(err.to_string()),
        };
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Handle keyboard input; returns `true` when exit was requested.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    }

    /// Render the current frame.
    ///
    /// In the ready state the view models are derived from the artifact
    /// snapshot anew on every pass; nothing is cached between renders.
    pub fn render(&self, frame: &mut Frame) {
        let theme = Theme::default_theme();
        match &self.state {
            DashboardState::Loading => render_placeholder(frame, &theme, "Loading analysis…"),
            DashboardState::Errored(message) => render_error(frame, &theme, message),
            DashboardState::Ready(artifact) => {
                let view = DashboardView::from_artifact(artifact);
                render_dashboard(frame, &theme, &view);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn render_dashboard(frame: &mut Frame, theme: &Theme, view: &DashboardView) {
    let mode = LayoutMode::from_terminal_width(frame.area().width);
    let areas = layout::dashboard_areas(frame.area(), mode);

    panels::metrics::render(frame, theme, &view.metrics, areas.metrics);
    if mode.shows_panels() {
        panels::comparison::render(frame, theme, &view.comparison, areas.comparison);
        panels::scatter::render(frame, theme, &view.scatter, areas.scatter);
        panels::risks::render(frame, theme, &view.risks, areas.risks);
    }
}

fn render_placeholder(frame: &mut Frame, theme: &Theme, message: &str) {
    let widget = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(theme.caption_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Fraud Detection Insights")
                .border_style(theme.border_style())
                .title_style(theme.title_style()),
        );
    frame.render_widget(widget, frame.area());
}

fn render_error(frame: &mut Frame, theme: &Theme, message: &str) {
    let widget = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(theme.danger_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Failed to load analysis")
                .border_style(theme.border_style())
                .title_style(theme.title_style()),
        );
    frame.render_widget(widget, frame.area());
}
