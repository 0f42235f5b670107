//! `fraudscope view`: the interactive dashboard.

use crate::artifact::loader;
use crate::tui::Dashboard;
use anyhow::Result;
use log::info;
use std::path::PathBuf;

pub struct ViewConfig {
    pub artifact: Option<PathBuf>,
}

/// Open the dashboard. The artifact is acquired exactly once; a failed
/// load still opens the TUI, in its terminal errored state, so the user
/// sees what went wrong.
pub fn run(config: ViewConfig) -> Result<()> {
    let path = super::resolve_artifact_path(config.artifact);
    info!("opening dashboard for {}", path.display());

    let mut dashboard = Dashboard::new()?;
    dashboard.resolve(loader::load(&path));
    dashboard.run()
}
