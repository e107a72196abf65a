//! Terminal summary block

use crate::types::DriftReport;

use super::percent;

pub fn render(report: &DriftReport) -> String {
    let mut lines = vec![
        "Drift Detection Results:".to_string(),
        format!("  Drift detected: {}", report.drift_detected),
        format!("  Drift share: {}", percent(report.drift_share)),
        format!("  Threshold: {}", percent(report.threshold)),
        format!("  Exceeds threshold: {}", report.exceeds_threshold),
        format!(
            "  Features compared: {} ({} skipped)",
            report.total_features_compared,
            report.skipped_features().count()
        ),
    ];
    if !report.drifted_features.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "  Drifted features: {}",
            report.drifted_features.join(", ")
        ));
    }
    lines.join("\n")
}
