//! JSON report: the derived view models, for downstream tooling.

use crate::output::OutputWriter;
use crate::view::DashboardView;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_dashboard(&mut self, view: &DashboardView) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(view)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::AnalysisArtifact;

    #[test]
    fn test_json_report_carries_all_panels() {
        let artifact = AnalysisArtifact {
            total_records: 1000,
            total_anomalies: 37,
            stats: serde_json::Value::Null,
            correlations: serde_json::Value::Null,
            anomaly_comparison: Default::default(),
            samples: vec![],
            top_risks: vec![],
        };
        let view = DashboardView::from_artifact(&artifact);

        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_dashboard(&view).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed["metrics"]["fraud_rate"], "3.70%");
        assert_eq!(parsed["metrics"]["model_status"], "Optimized");
        assert!(parsed["comparison"].as_array().unwrap().is_empty());
        assert!(parsed["risks"].as_array().unwrap().is_empty());
    }
}
