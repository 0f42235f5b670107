// Integration tests for one-shot artifact acquisition: a valid document,
// the failure modes, and the degrade-to-empty optional fields.

use fraudscope::artifact::loader;
use fraudscope::errors::LoadError;
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_artifact(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("analysis_results.json");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_complete_artifact() {
    let dir = TempDir::new().unwrap();
    let path = write_artifact(
        &dir,
        indoc! {r#"
            {
                "total_records": 1000,
                "total_anomalies": 37,
                "stats": {"distance_from_home": {"mean": 25.7}},
                "correlations": {},
                "anomaly_comparison": {
                    "distance_from_home": {"false": 10.0, "true": 50.0},
                    "used_chip": {"false": 0.9, "true": 0.4}
                },
                "samples": [
                    {"distance_from_home": 1.2, "ratio_to_median_price": 3.4, "is_anomaly": false}
                ],
                "top_risks": [
                    {
                        "anomaly_score_raw": 0.9123,
                        "risk_factors": "high distance",
                        "distance_from_home": 500.5,
                        "ratio_to_median_price": 10.25
                    }
                ]
            }
        "#},
    );

    let artifact = loader::load(&path).unwrap();
    assert_eq!(artifact.total_records, 1000);
    assert_eq!(artifact.total_anomalies, 37);
    assert!(artifact.has_stats());
    assert_eq!(artifact.anomaly_comparison.len(), 2);
    assert_eq!(artifact.samples.len(), 1);
    assert_eq!(artifact.top_risks.len(), 1);
    assert_eq!(artifact.top_risks[0].risk_factors, "high distance");
}

#[test]
fn test_load_missing_file_is_transport_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does_not_exist.json");
    match loader::load(&path) {
        Err(LoadError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_load_malformed_json_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_artifact(&dir, "{not json");
    assert!(matches!(loader::load(&path), Err(LoadError::Parse { .. })));
}

#[test]
fn test_load_rejects_sample_missing_required_field() {
    let dir = TempDir::new().unwrap();
    // ratio_to_median_price missing from the sample entry
    let path = write_artifact(
        &dir,
        indoc! {r#"
            {
                "total_records": 10,
                "total_anomalies": 1,
                "samples": [{"distance_from_home": 1.2, "is_anomaly": true}]
            }
        "#},
    );
    assert!(matches!(loader::load(&path), Err(LoadError::Parse { .. })));
}

#[test]
fn test_load_rejects_invariant_violation() {
    let dir = TempDir::new().unwrap();
    let path = write_artifact(
        &dir,
        indoc! {r#"
            {
                "total_records": 5,
                "total_anomalies": 6,
                "samples": []
            }
        "#},
    );
    match loader::load(&path) {
        Err(LoadError::Invalid { reason, .. }) => {
            assert!(reason.contains("total_anomalies"));
        }
        other => panic!("expected Invalid error, got {other:?}"),
    }
}

#[test]
fn test_load_absent_optionals_degrade_to_empty() {
    let dir = TempDir::new().unwrap();
    let path = write_artifact(
        &dir,
        indoc! {r#"
            {
                "total_records": 10,
                "total_anomalies": 0,
                "samples": []
            }
        "#},
    );
    let artifact = loader::load(&path).unwrap();
    assert!(artifact.top_risks.is_empty());
    assert!(artifact.anomaly_comparison.is_empty());
    assert!(!artifact.has_stats());
}
