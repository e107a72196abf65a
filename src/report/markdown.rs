//! Markdown narrative for a drift run

use crate::types::{DriftReport, FeatureOutcome};

use super::{format_p_value, percent};

fn escape_cell(raw: &str) -> String {
    raw.replace('|', "\\|")
}

/// Produces sections: Summary, Drifted Features, Feature Results, Skipped
/// Features (when any) and Interpretation.
pub fn render(report: &DriftReport) -> String {
    let mut sections = vec!["# Data Drift Detection Report".to_string()];

    // 1. Summary
    let verdict = if report.exceeds_threshold {
        "**EXCEEDS THRESHOLD**: action required"
    } else {
        "within threshold"
    };
    sections.push(format!(
        "## Summary\n\n\
         - Drift detected: {}\n\
         - Drift share: {} ({} of {} compared features)\n\
         - Threshold: {} ({})\n\
         - Significance level: {}\n\
         - Rows: {} reference, {} current\n\
         - Timestamp: {}",
        if report.drift_detected { "yes" } else { "no" },
        percent(report.drift_share),
        report.drifted_count(),
        report.total_features_compared,
        percent(report.threshold),
        verdict,
        report.significance_level,
        report.reference_rows,
        report.current_rows,
        report.timestamp.to_rfc3339(),
    ));

    // 2. Drifted features
    if !report.drifted_features.is_empty() {
        let mut lines = vec!["## Drifted Features\n".to_string()];
        for name in &report.drifted_features {
            if let Some(f) = report.feature(name) {
                lines.push(format!(
                    "- **{}**: statistic {:.4}, p-value {}",
                    name,
                    f.test_statistic,
                    format_p_value(f.p_value)
                ));
            }
        }
        sections.push(lines.join("\n"));
    }

    // 3. Full table
    let mut table = vec![
        "## Feature Results\n".to_string(),
        "| Feature | Test | Statistic | P-Value | Status |".to_string(),
        "|---|---|---|---|---|".to_string(),
    ];
    for f in report.per_feature.iter().filter(|f| f.compared) {
        table.push(format!(
            "| {} | {} | {:.4} | {} | {} |",
            escape_cell(&f.feature_name),
            f.stat_test.map_or("-", |t| t.display_name()),
            f.test_statistic,
            format_p_value(f.p_value),
            f.outcome().label(),
        ));
    }
    sections.push(table.join("\n"));

    // 4. Skipped
    let skipped: Vec<String> = report
        .skipped_features()
        .filter_map(|f| match f.outcome() {
            FeatureOutcome::Skipped(reason) => {
                Some(format!("- {}: {}", escape_cell(&f.feature_name), reason))
            }
            FeatureOutcome::Compared { .. } => None,
        })
        .collect();
    if !skipped.is_empty() {
        sections.push(format!(
            "## Skipped Features\n\nNot counted in the drift share.\n\n{}",
            skipped.join("\n")
        ));
    }

    // 5. Interpretation
    sections.push(format!(
        "## Interpretation\n\n\
         Numeric features use the two-sample Kolmogorov-Smirnov test, categorical features \
         the Chi-square test of homogeneity. A p-value below {} marks a feature as drifted. \
         The run is actionable when the drift share is strictly above the threshold.",
        report.significance_level
    ));

    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}
