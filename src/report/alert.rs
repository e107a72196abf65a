//! Alert payload for threshold breaches. Delivery happens elsewhere.

use serde::Serialize;

use crate::types::DriftReport;

use super::percent;

pub const ALERT_SUBJECT: &str = "MLOps: Data Drift Detected";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertMessage {
    pub subject: String,
    pub body: String,
}

pub fn build(report: &DriftReport) -> Option<AlertMessage> {
    if !report.exceeds_threshold {
        return None;
    }

    let mut body = format!(
        "Data Drift Alert - MLOps Pipeline\n\n\
         Drift Share: {}\n\
         Threshold: {}\n\
         Status: EXCEEDS THRESHOLD\n\n\
         Drift detected: {}\n\
         Timestamp: {}\n",
        percent(report.drift_share),
        percent(report.threshold),
        report.drift_detected,
        report.timestamp.to_rfc3339(),
    );
    if !report.drifted_features.is_empty() {
        body.push_str(&format!(
            "Drifted features: {}\n",
            report.drifted_features.join(", ")
        ));
    }
    body.push_str("\nPlease review the drift report and consider retraining the model.\n");

    Some(AlertMessage {
        subject: ALERT_SUBJECT.to_string(),
        body,
    })
}
