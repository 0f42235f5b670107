//! Shared error types for artifact acquisition.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the one-shot artifact load.
///
/// Absent optional fields (`top_risks`, `stats`, `correlations`) are not
/// errors; they degrade to empty views at the rendering layer.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Transport failure: the artifact could not be read at all.
    #[error("failed to read artifact {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed artifact: invalid JSON, or an entry missing a required
    /// numeric field. The whole load fails rather than rendering a
    /// partially-typed record.
    #[error("failed to parse artifact {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Structurally valid JSON that violates an artifact invariant.
    #[error("invalid artifact {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

impl LoadError {
    /// The path of the artifact that failed to load.
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::Io { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::Invalid { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_path() {
        let err = LoadError::Invalid {
            path: PathBuf::from("analysis_results.json"),
            reason: "total_anomalies exceeds total_records".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("analysis_results.json"));
        assert!(msg.contains("total_anomalies"));
    }

    #[test]
    fn test_path_accessor_covers_all_variants() {
        let io = LoadError::Io {
            path: PathBuf::from("a.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(io.path(), &PathBuf::from("a.json"));
    }
}
