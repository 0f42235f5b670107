//! `fraudscope summary`: one-shot report over the derived view.

use crate::artifact::loader;
use crate::cli::OutputFormat;
use crate::output::{JsonWriter, OutputWriter, TerminalWriter};
use crate::view::DashboardView;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

pub struct SummaryConfig {
    pub artifact: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

/// Load the artifact, derive the view, write it with the selected writer.
pub fn run(config: SummaryConfig) -> Result<()> {
    let path = super::resolve_artifact_path(config.artifact);
    let artifact = loader::load(&path)?;
    let view = DashboardView::from_artifact(&artifact);

    match (config.format, config.output) {
        (OutputFormat::Json, Some(out_path)) => {
            let file = File::create(&out_path)
                .with_context(|| format!("Failed to create output file: {}", out_path.display()))?;
            JsonWriter::new(BufWriter::new(file)).write_dashboard(&view)
        }
        (OutputFormat::Json, None) => {
            JsonWriter::new(std::io::stdout().lock()).write_dashboard(&view)
        }
        (OutputFormat::Terminal, Some(_)) => {
            anyhow::bail!("terminal format writes to stdout; use --format json with --output")
        }
        (OutputFormat::Terminal, None) => TerminalWriter::new().write_dashboard(&view),
    }
}
