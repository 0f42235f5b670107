use anyhow::Result;
use clap::Parser;
use fraudscope::cli::{Cli, Commands};
use fraudscope::formatting::FormattingConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::View { artifact } => {
            fraudscope::commands::view::run(fraudscope::commands::view::ViewConfig { artifact })
        }
        Commands::Summary {
            artifact,
            format,
            output,
            plain,
        } => {
            let formatting = if plain {
                FormattingConfig::plain()
            } else {
                FormattingConfig::from_env()
            };
            formatting.apply();

            fraudscope::commands::summary::run(fraudscope::commands::summary::SummaryConfig {
                artifact,
                format,
                output,
            })
        }
    }
}

// Map repeated -v flags onto the log filter, unless RUST_LOG overrides.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
