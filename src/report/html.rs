//! Self-contained HTML drift report

use crate::types::{DriftReport, FeatureOutcome};

use super::{format_p_value, percent};

const STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 20px; }
.summary { background: #f0f0f0; padding: 15px; border-radius: 5px; }
.drift { color: #c62828; }
.no-drift { color: #2e7d32; }
.skipped { color: #757575; }
table { border-collapse: collapse; width: 100%; margin-top: 20px; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
th { background-color: #4CAF50; color: white; }
tr:nth-child(even) { background-color: #f2f2f2; }";

/// Escape text for HTML element content and attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render(report: &DriftReport) -> String {
    let mut html = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Drift Detection Report</title>\n<style>\n{STYLE}\n</style>\n</head>\n<body>\n\
         <h1>Data Drift Detection Report</h1>\n"
    );

    let (status_class, status_text) = if report.exceeds_threshold {
        ("drift", "YES - Action Required")
    } else if report.drift_detected {
        ("no-drift", "Drift below threshold")
    } else {
        ("no-drift", "NO - All Good")
    };

    html.push_str(&format!(
        "<div class=\"summary\">\n<h2>Summary</h2>\n\
         <p><strong>Drift Detected:</strong> {}</p>\n\
         <p><strong>Exceeds Threshold:</strong> <span class=\"{status_class}\">{status_text}</span></p>\n\
         <p><strong>Drift Share:</strong> {} ({} / {} features) vs. threshold {}</p>\n\
         <p><strong>Significance Level:</strong> {}</p>\n\
         <p><strong>Rows:</strong> {} reference, {} current</p>\n\
         <p><strong>Timestamp:</strong> {}</p>\n</div>\n",
        if report.drift_detected { "yes" } else { "no" },
        percent(report.drift_share),
        report.drifted_count(),
        report.total_features_compared,
        percent(report.threshold),
        report.significance_level,
        report.reference_rows,
        report.current_rows,
        report.timestamp.to_rfc3339(),
    ));

    html.push_str(
        "<h2>Feature-Level Results</h2>\n<table>\n\
         <tr><th>Feature</th><th>Test</th><th>Statistic</th><th>P-Value</th><th>Status</th></tr>\n",
    );
    for feature in &report.per_feature {
        let outcome = feature.outcome();
        let class = match outcome {
            FeatureOutcome::Compared { drifted: true } => "drift",
            FeatureOutcome::Compared { drifted: false } => "no-drift",
            FeatureOutcome::Skipped(_) => "skipped",
        };
        let (test, stat, p) = match outcome {
            FeatureOutcome::Skipped(_) => ("-", "-".to_string(), "-".to_string()),
            FeatureOutcome::Compared { .. } => (
                feature.stat_test.map_or("-", |t| t.display_name()),
                format!("{:.4}", feature.test_statistic),
                format_p_value(feature.p_value),
            ),
        };
        html.push_str(&format!(
            "<tr><td>{}</td><td>{test}</td><td>{stat}</td><td>{p}</td>\
             <td class=\"{class}\"><strong>{}</strong></td></tr>\n",
            escape_html(&feature.feature_name),
            escape_html(&outcome.label()),
        ));
    }
    html.push_str("</table>\n");

    html.push_str(&format!(
        "<h2>Interpretation</h2>\n<p>Numeric features are compared with the \
         <strong>Kolmogorov-Smirnov test</strong> and categorical features with the \
         <strong>Chi-square test of homogeneity</strong>, between reference (training) \
         data and current (production) data.</p>\n<ul>\n\
         <li>P-value &lt; {} indicates significant drift</li>\n\
         <li>KS statistic closer to 1 indicates a larger distribution difference</li>\n\
         <li>Skipped features are not counted in the drift share</li>\n\
         <li>The run is actionable when the drift share is strictly above the threshold</li>\n\
         </ul>\n</body>\n</html>\n",
        report.significance_level,
    ));

    html
}
