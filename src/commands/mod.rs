//! Command implementations: thin I/O shells over the pure view layer.

pub mod summary;
pub mod view;

use crate::config;
use std::path::PathBuf;

/// Resolve the artifact path: an explicit CLI argument wins, otherwise the
/// configured well-known location.
pub fn resolve_artifact_path(cli_path: Option<PathBuf>) -> PathBuf {
    cli_path.unwrap_or_else(|| config::get_config().artifact.path.clone())
}
