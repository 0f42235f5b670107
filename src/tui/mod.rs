//! Interactive terminal dashboard for a fraud-analysis artifact.
//!
//! The dashboard is strictly read-only: four fixed panels (metrics strip,
//! feature-comparison bar chart, sample scatter plot, high-risk table)
//! rendered from view models that are re-derived from the immutable
//! artifact snapshot on every frame. The only interaction is quitting.
//!
//! # Usage
//!
//! ```rust,no_run
//! use fraudscope::artifact::loader;
//! use fraudscope::tui::Dashboard;
//! use std::path::Path;
//!
//! let mut dashboard = Dashboard::new()?;
//! dashboard.resolve(loader::load(Path::new("analysis_results.json")));
//! dashboard.run()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod app;
pub mod layout;
pub mod panels;
pub mod theme;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use app::App;
pub use app::DashboardState;

/// Dashboard TUI manager: owns the terminal and the application state.
pub struct Dashboard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
}

impl Dashboard {
    /// Initialize the terminal and enter the loading state.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app: App::new(),
        })
    }

    /// Feed the single load outcome into the state machine.
    pub fn resolve(&mut self, outcome: Result<crate::artifact::AnalysisArtifact, crate::errors::LoadError>) {
        self.app.resolve(outcome);
    }

    /// Run the event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.terminal.draw(|f| self.app.render(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if self.app.handle_key(key) {
                        break;
                    }
                }
            }
        }

        self.cleanup()?;
        Ok(())
    }

    /// Clean up and restore terminal
    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
