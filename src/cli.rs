use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fraudscope")]
#[command(about = "Terminal dashboard for fraud-detection analysis artifacts", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive dashboard for an analysis artifact
    View {
        /// Path to the artifact (defaults to the configured well-known path)
        artifact: Option<PathBuf>,
    },

    /// Print a one-shot dashboard report
    Summary {
        /// Path to the artifact (defaults to the configured well-known path)
        artifact: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colors and decorations
        #[arg(long)]
        plain: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal report
    Terminal,
    /// Derived view models as JSON
    Json,
}
