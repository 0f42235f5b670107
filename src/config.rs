//! Optional `fraudscope.toml` configuration.
//!
//! Configuration covers ambient concerns only: where the artifact lives by
//! default. Visual-encoding rules (panel colors, the comparison allow-list)
//! are fixed and deliberately not configurable.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Top-level configuration, discovered from `fraudscope.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FraudscopeConfig {
    #[serde(default)]
    pub artifact: ArtifactConfig,
}

/// Artifact acquisition settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    /// Well-known artifact path used when the CLI omits one.
    #[serde(default = "default_artifact_path")]
    pub path: PathBuf,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            path: default_artifact_path(),
        }
    }
}

fn default_artifact_path() -> PathBuf {
    PathBuf::from("analysis_results.json")
}

/// Walk from `start` upward through at most `max_depth` directories.
pub(crate) fn directory_ancestors(
    start: PathBuf,
    max_depth: usize,
) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

fn try_load_config_from_path(path: &std::path::Path) -> Option<FraudscopeConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("Ignoring malformed config {}: {}", path.display(), e);
            None
        }
    }
}

/// Locate and parse `fraudscope.toml`, searching the current directory and
/// its ancestors. Falls back to defaults when nothing is found.
pub fn load_config() -> FraudscopeConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return FraudscopeConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join("fraudscope.toml"))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_default()
}

static CONFIG: OnceLock<FraudscopeConfig> = OnceLock::new();

/// Session-wide configuration, loaded once.
pub fn get_config() -> &'static FraudscopeConfig {
    CONFIG.get_or_init(load_config)
}
