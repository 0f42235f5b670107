//! Data model for the fraud-analysis artifact.
//!
//! The artifact is a JSON document produced by an offline detection
//! pipeline. It is consumed read-only: loaded once at startup, held as an
//! immutable snapshot for the session, and never mutated or refetched.
//! Every derived view is recomputed from this snapshot on each render pass.
//!
//! The pipeline emits more columns than the dashboard consumes (PCA
//! coordinates, categorical flags, raw model scores); serde ignores the
//! extras, so the model below names only the fields the views bind to.

pub mod loader;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level analysis artifact.
///
/// `total_anomalies <= total_records` is validated at load time; the other
/// invariants (non-negative counts) hold by type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisArtifact {
    /// Number of transactions analyzed by the pipeline.
    pub total_records: u64,

    /// Number of transactions flagged as fraudulent.
    pub total_anomalies: u64,

    /// Auxiliary summary statistics, passed through opaquely.
    #[serde(default)]
    pub stats: serde_json::Value,

    /// Feature correlation matrix, passed through opaquely.
    #[serde(default)]
    pub correlations: serde_json::Value,

    /// Per-feature value distribution among normal vs. fraudulent
    /// transactions. Keyed by feature identifier; the pipeline emits every
    /// model feature but only a fixed allow-list of three is surfaced in
    /// the comparison panel. Held as a `BTreeMap` so iteration follows the
    /// mapping's natural key order.
    #[serde(default)]
    pub anomaly_comparison: BTreeMap<String, ComparisonBuckets>,

    /// Sampled transactions for the scatter panel, in pipeline order.
    pub samples: Vec<TransactionSample>,

    /// Ranked high-risk transactions. The ranking is caller-determined and
    /// final; the dashboard never re-sorts it. May be absent entirely, in
    /// which case the risk table renders zero rows.
    #[serde(default)]
    pub top_risks: Vec<RiskTransaction>,
}

impl AnalysisArtifact {
    /// Whether the pipeline attached auxiliary summary statistics.
    pub fn has_stats(&self) -> bool {
        !self.stats.is_null()
    }
}

/// Two-bucket breakdown of a feature's mean value: among normal
/// transactions (`"false"`) and among fraudulent ones (`"true"`).
///
/// Either bucket may be absent; downstream rendering treats an absent
/// bucket as zero height, never as an error.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ComparisonBuckets {
    #[serde(rename = "false")]
    pub normal: Option<f64>,
    #[serde(rename = "true")]
    pub fraud: Option<f64>,
}

/// One sampled transaction, used only for scatter-plot visualization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TransactionSample {
    pub distance_from_home: f64,
    pub ratio_to_median_price: f64,
    pub is_anomaly: bool,
}

/// One entry in the high-risk transaction table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskTransaction {
    /// Raw decision-function score from the detection model.
    pub anomaly_score_raw: f64,
    /// Human-readable explanation assembled by the pipeline.
    pub risk_factors: String,
    pub distance_from_home: f64,
    pub ratio_to_median_price: f64,
}
