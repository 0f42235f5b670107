//! One-shot artifact acquisition.
//!
//! The loader performs exactly one attempt against the given path: read,
//! parse, validate. There is no retry, cancellation, or refetch; a failed
//! load is terminal for the session and the caller surfaces it as the
//! dashboard's errored state.

use crate::artifact::AnalysisArtifact;
use crate::errors::LoadError;
use log::debug;
use std::fs;
use std::path::Path;

/// Load and validate an analysis artifact from `path`.
pub fn load(path: &Path) -> Result<AnalysisArtifact, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let artifact: AnalysisArtifact =
        serde_json::from_str(&content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    validate(&artifact).map_err(|reason| LoadError::Invalid {
        path: path.to_path_buf(),
        reason,
    })?;

    debug!(
        "loaded artifact: {} records, {} anomalies, {} samples, {} risk rows, stats present: {}",
        artifact.total_records,
        artifact.total_anomalies,
        artifact.samples.len(),
        artifact.top_risks.len(),
        artifact.has_stats()
    );

    Ok(artifact)
}

/// Check invariants that the serde model cannot express.
fn validate(artifact: &AnalysisArtifact) -> Result<(), String> {
    if artifact.total_anomalies > artifact.total_records {
        return Err(format!(
            "total_anomalies ({}) exceeds total_records ({})",
            artifact.total_anomalies, artifact.total_records
        ));
    }
    Ok(())
}
