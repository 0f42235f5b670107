//! Presentation transformer: pure functions deriving render-ready view
//! models from an immutable artifact snapshot.
//!
//! Nothing in this module performs I/O or holds hidden state. The TUI and
//! the report writers call [`DashboardView::from_artifact`] on every render
//! pass; recomputation is deterministic and idempotent, so no derived state
//! is ever cached across renders.

use crate::artifact::{AnalysisArtifact, RiskTransaction, TransactionSample};
use serde::Serialize;

/// The three features surfaced in the comparison panel.
///
/// The pipeline emits a breakdown for every model feature; only these are
/// displayed. A closed enum keeps the allow-list exhaustiveness-checked
/// instead of scattering string matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonFeature {
    DistanceFromHome,
    DistanceFromLastTransaction,
    RatioToMedianPrice,
}

impl ComparisonFeature {
    /// Artifact key for this feature.
    pub fn key(self) -> &'static str {
        match self {
            ComparisonFeature::DistanceFromHome => "distance_from_home",
            ComparisonFeature::DistanceFromLastTransaction => "distance_from_last_transaction",
            ComparisonFeature::RatioToMedianPrice => "ratio_to_median_price",
        }
    }

    /// Map an artifact key onto the allow-list, `None` for everything else.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "distance_from_home" => Some(ComparisonFeature::DistanceFromHome),
            "distance_from_last_transaction" => {
                Some(ComparisonFeature::DistanceFromLastTransaction)
            }
            "ratio_to_median_price" => Some(ComparisonFeature::RatioToMedianPrice),
            _ => None,
        }
    }
}

/// Binary visual category for a sampled transaction.
///
/// Carries no semantics beyond per-point color selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleClass {
    Normal,
    Fraud,
}

/// Classify a sample for visual encoding. Total over all inputs: `true`
/// maps to [`SampleClass::Fraud`], everything else to
/// [`SampleClass::Normal`].
pub fn classify_sample(sample: &TransactionSample) -> SampleClass {
    if sample.is_anomaly {
        SampleClass::Fraud
    } else {
        SampleClass::Normal
    }
}

/// Fraud rate derived from the artifact's counters.
///
/// The zero-denominator case is a distinguished variant rather than the
/// non-numeric percentage a naive division would produce.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "percent")]
pub enum FraudRate {
    /// Percentage of flagged transactions, `total_records > 0`.
    Rate(f64),
    /// No transactions analyzed; rendered as `N/A`.
    Unavailable,
}

impl FraudRate {
    /// Display string: two decimal digits with a `%` suffix, or `N/A`.
    pub fn display(self) -> String {
        match self {
            FraudRate::Rate(pct) => format!("{pct:.2}%"),
            FraudRate::Unavailable => "N/A".to_string(),
        }
    }
}

/// Compute the fraud rate from the artifact counters.
pub fn fraud_rate(artifact: &AnalysisArtifact) -> FraudRate {
    if artifact.total_records == 0 {
        return FraudRate::Unavailable;
    }
    FraudRate::Rate(artifact.total_anomalies as f64 / artifact.total_records as f64 * 100.0)
}

/// One bar pair in the comparison panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonEntry {
    /// Artifact feature key (identity).
    pub feature: String,
    /// Abbreviated axis label derived by [`feature_label`].
    pub label: String,
    /// Mean value among normal transactions; absent renders zero-height.
    pub normal: Option<f64>,
    /// Mean value among fraudulent transactions; absent renders zero-height.
    pub fraud: Option<f64>,
}

/// Build the comparison series: the artifact's `anomaly_comparison` mapping
/// restricted to the fixed allow-list, in the mapping's natural key order.
/// Features absent from the artifact are silently omitted.
pub fn comparison_series(artifact: &AnalysisArtifact) -> Vec<ComparisonEntry> {
    artifact
        .anomaly_comparison
        .iter()
        .filter(|(key, _)| ComparisonFeature::from_key(key).is_some())
        .map(|(key, buckets)| ComparisonEntry {
            feature: key.clone(),
            label: feature_label(key),
            normal: buckets.normal,
            fraud: buckets.fraud,
        })
        .collect()
}

/// Abbreviate a feature key for axis labeling: the segment before the first
/// `_`, first character uppercased, with an ellipsis appended. Lossy; used
/// only for display, never for identity or sorting.
pub fn feature_label(key: &str) -> String {
    let head = key.split('_').next().unwrap_or(key);
    let mut chars = head.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    format!("{capitalized}…")
}

/// One point in the scatter panel, in artifact sample order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    /// `distance_from_home`
    pub x: f64,
    /// `ratio_to_median_price`
    pub y: f64,
    pub class: SampleClass,
}

/// Project samples onto scatter points, preserving input order for point
/// identity. No z-order guarantee is implied for overlapping points.
pub fn scatter_points(artifact: &AnalysisArtifact) -> Vec<ScatterPoint> {
    artifact
        .samples
        .iter()
        .map(|sample| ScatterPoint {
            x: sample.distance_from_home,
            y: sample.ratio_to_median_price,
            class: classify_sample(sample),
        })
        .collect()
}

/// Constant status badge carried by every entry in the risk table. The
/// badge is not computed from the score; membership in `top_risks` is the
/// whole criterion.
pub const HIGH_RISK_BADGE: &str = "High Risk";

/// One formatted row of the high-risk transaction table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskRow {
    /// Raw score to 4 decimal places.
    pub score: String,
    pub factors: String,
    /// Distance to 2 decimals with a unit suffix.
    pub distance: String,
    /// Ratio to 2 decimals with a multiplier suffix.
    pub ratio: String,
    pub status: &'static str,
}

/// Format one high-risk transaction for display.
pub fn risk_row(tx: &RiskTransaction) -> RiskRow {
    RiskRow {
        score: format!("{:.4}", tx.anomaly_score_raw),
        factors: tx.risk_factors.clone(),
        distance: format!("{:.2} km", tx.distance_from_home),
        ratio: format!("{:.2}x", tx.ratio_to_median_price),
        status: HIGH_RISK_BADGE,
    }
}

/// Format a count with thousands separators.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// The four fixed tiles of the metrics strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsStrip {
    pub total_transactions: String,
    pub detected_anomalies: String,
    pub fraud_rate: String,
    /// Static model-status tile.
    pub model_status: &'static str,
}

/// Status shown in the fourth metrics tile. A constant label, not a health
/// probe.
pub const MODEL_STATUS: &str = "Optimized";

/// Complete render-ready view of the dashboard, derived fresh from the
/// artifact snapshot on every render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub metrics: MetricsStrip,
    pub comparison: Vec<ComparisonEntry>,
    pub scatter: Vec<ScatterPoint>,
    pub risks: Vec<RiskRow>,
}

impl DashboardView {
    /// Derive the full dashboard view from an artifact snapshot.
    pub fn from_artifact(artifact: &AnalysisArtifact) -> Self {
        Self {
            metrics: MetricsStrip {
                total_transactions: format_count(artifact.total_records),
                detected_anomalies: format_count(artifact.total_anomalies),
                fraud_rate: fraud_rate(artifact).display(),
                model_status: MODEL_STATUS,
            },
            comparison: comparison_series(artifact),
            scatter: scatter_points(artifact),
            risks: artifact.top_risks.iter().map(risk_row).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ComparisonBuckets;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn base_artifact() -> AnalysisArtifact {
        AnalysisArtifact {
            total_records: 1000,
            total_anomalies: 37,
            stats: serde_json::Value::Null,
            correlations: serde_json::Value::Null,
            anomaly_comparison: BTreeMap::new(),
            samples: vec![],
            top_risks: vec![],
        }
    }

    #[test]
    fn test_fraud_rate_two_decimals() {
        let artifact = base_artifact();
        assert_eq!(fraud_rate(&artifact).display(), "3.70%");
    }

    #[test]
    fn test_fraud_rate_zero_records_is_unavailable() {
        let mut artifact = base_artifact();
        artifact.total_records = 0;
        artifact.total_anomalies = 0;
        assert_eq!(fraud_rate(&artifact), FraudRate::Unavailable);
        assert_eq!(fraud_rate(&artifact).display(), "N/A");
    }

    #[test]
    fn test_comparison_series_filters_to_allow_list() {
        let mut artifact = base_artifact();
        artifact.anomaly_comparison.insert(
            "distance_from_home".to_string(),
            ComparisonBuckets {
                normal: Some(10.0),
                fraud: Some(50.0),
            },
        );
        artifact.anomaly_comparison.insert(
            "used_pin_number".to_string(),
            ComparisonBuckets {
                normal: Some(0.9),
                fraud: Some(0.2),
            },
        );

        let series = comparison_series(&artifact);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].feature, "distance_from_home");
        assert_eq!(series[0].normal, Some(10.0));
        assert_eq!(series[0].fraud, Some(50.0));
    }

    #[test]
    fn test_comparison_series_is_idempotent() {
        let mut artifact = base_artifact();
        artifact.anomaly_comparison.insert(
            "ratio_to_median_price".to_string(),
            ComparisonBuckets {
                normal: Some(1.0),
                fraud: None,
            },
        );
        assert_eq!(comparison_series(&artifact), comparison_series(&artifact));
    }

    #[test]
    fn test_comparison_series_keeps_absent_bucket_as_none() {
        let mut artifact = base_artifact();
        artifact.anomaly_comparison.insert(
            "distance_from_last_transaction".to_string(),
            ComparisonBuckets {
                normal: None,
                fraud: Some(4.2),
            },
        );
        let series = comparison_series(&artifact);
        assert_eq!(series[0].normal, None);
        assert_eq!(series[0].fraud, Some(4.2));
    }

    #[test]
    fn test_comparison_feature_keys_round_trip() {
        for feature in [
            ComparisonFeature::DistanceFromHome,
            ComparisonFeature::DistanceFromLastTransaction,
            ComparisonFeature::RatioToMedianPrice,
        ] {
            assert_eq!(ComparisonFeature::from_key(feature.key()), Some(feature));
        }
    }

    #[test]
    fn test_feature_label_abbreviates_first_segment() {
        assert_eq!(feature_label("distance_from_home"), "Distance…");
        assert_eq!(feature_label("ratio_to_median_price"), "Ratio…");
        assert_eq!(feature_label("plain"), "Plain…");
    }

    #[test]
    fn test_classify_sample_is_total() {
        let fraud = TransactionSample {
            distance_from_home: 0.0,
            ratio_to_median_price: 0.0,
            is_anomaly: true,
        };
        let normal = TransactionSample {
            is_anomaly: false,
            ..fraud
        };
        assert_eq!(classify_sample(&fraud), SampleClass::Fraud);
        assert_eq!(classify_sample(&normal), SampleClass::Normal);
    }

    #[test]
    fn test_risk_row_formatting() {
        let tx = RiskTransaction {
            anomaly_score_raw: 0.9123,
            risk_factors: "high distance".to_string(),
            distance_from_home: 500.5,
            ratio_to_median_price: 10.25,
        };
        let row = risk_row(&tx);
        assert_eq!(row.score, "0.9123");
        assert_eq!(row.distance, "500.50 km");
        assert_eq!(row.ratio, "10.25x");
        assert_eq!(row.status, "High Risk");
    }

    #[test]
    fn test_format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1_000_000), "1,000,000");
        assert_eq!(format_count(12_345_678), "12,345,678");
    }

    #[test]
    fn test_scatter_points_preserve_input_order() {
        let mut artifact = base_artifact();
        artifact.samples = vec![
            TransactionSample {
                distance_from_home: 1.0,
                ratio_to_median_price: 2.0,
                is_anomaly: true,
            },
            TransactionSample {
                distance_from_home: 3.0,
                ratio_to_median_price: 4.0,
                is_anomaly: false,
            },
        ];
        let points = scatter_points(&artifact);
        assert_eq!(points[0].x, 1.0);
        assert_eq!(points[0].class, SampleClass::Fraud);
        assert_eq!(points[1].x, 3.0);
        assert_eq!(points[1].class, SampleClass::Normal);
    }

    #[test]
    fn test_dashboard_view_without_top_risks_has_zero_rows() {
        let artifact = base_artifact();
        let view = DashboardView::from_artifact(&artifact);
        assert!(view.risks.is_empty());
        assert_eq!(view.metrics.total_transactions, "1,000");
        assert_eq!(view.metrics.model_status, "Optimized");
    }
}
