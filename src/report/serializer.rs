//! Machine-readable drift artifacts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::DriftReport;

/// Stable summary consumed by automation.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftSummary {
    pub drift_detected: bool,
    pub drift_share: f64,
    pub timestamp: DateTime<Utc>,
    pub drifted_features: Vec<String>,
    pub threshold: f64,
    pub exceeds_threshold: bool,
}

impl From<&DriftReport> for DriftSummary {
    fn from(report: &DriftReport) -> Self {
        Self {
            drift_detected: report.drift_detected,
            drift_share: report.drift_share,
            timestamp: report.timestamp,
            drifted_features: report.drifted_features.clone(),
            threshold: report.threshold,
            exceeds_threshold: report.exceeds_threshold,
        }
    }
}

pub struct ResultSerializer;

impl ResultSerializer {
    pub fn summary(report: &DriftReport) -> DriftSummary {
        DriftSummary::from(report)
    }

    /// Pretty-printed summary JSON.
    pub fn summary_json(report: &DriftReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::summary(report))
    }

    /// Pretty-printed JSON of the whole report, `per_feature` included.
    pub fn report_json(report: &DriftReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }
}
