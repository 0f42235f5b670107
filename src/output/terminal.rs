//! Colored terminal report mirroring the four dashboard panels.

use crate::output::OutputWriter;
use crate::view::{ComparisonEntry, DashboardView, MetricsStrip, RiskRow};
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_dashboard(&mut self, view: &DashboardView) -> anyhow::Result<()> {
        print_header();
        print_metrics(&view.metrics);
        print_comparison(&view.comparison);
        print_risks(&view.risks);
        Ok(())
    }
}

fn print_header() {
    println!();
    println!("{}", "═══════════════════════════════════════════".cyan());
    println!("{}", "        FRAUD DETECTION INSIGHTS".bold().cyan());
    println!("{}", "═══════════════════════════════════════════".cyan());
    println!();
}

fn print_metrics(metrics: &MetricsStrip) {
    println!("{}", "Summary".bold());
    println!("───────────────────────────────────────────");
    println!("Total Transactions:  {}", metrics.total_transactions.bold());
    println!(
        "Detected Anomalies:  {}",
        metrics.detected_anomalies.red().bold()
    );
    println!("Fraud Rate:          {}", metrics.fraud_rate.yellow());
    println!("Model Status:        {}", metrics.model_status.green());
    println!();
}

fn print_comparison(series: &[ComparisonEntry]) {
    if series.is_empty() {
        return;
    }
    println!("{}", "Why are these transactions flagged?".bold());
    println!("───────────────────────────────────────────");
    for entry in series {
        println!(
            "{:<32} {} {:>10}   {} {:>10}",
            entry.feature,
            "Normal".green(),
            bucket(entry.normal),
            "Fraud".red(),
            bucket(entry.fraud),
        );
    }
    println!();
}

fn bucket(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "-".to_string(),
    }
}

fn print_risks(risks: &[RiskRow]) {
    println!(
        "{}",
        "Top High-Risk Transactions (Action Required)".bold()
    );
    if risks.is_empty() {
        println!("  (none)");
        println!();
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Risk Score (Raw)",
            "Global Risk Factors",
            "Distance (Home)",
            "Price Ratio",
            "Status",
        ]);

    for risk in risks {
        table.add_row(vec![
            Cell::new(&risk.score),
            Cell::new(&risk.factors),
            Cell::new(&risk.distance),
            Cell::new(&risk.ratio),
            Cell::new(risk.status),
        ]);
    }

    println!("{table}");
    println!();
}
