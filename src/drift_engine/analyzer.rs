//! Drift Analyzer
//!
//! Entry point of the engine:
//! 1. Validates the configuration
//! 2. Aggregates per-feature verdicts (fails fast on empty data or disjoint schemas)
//! 3. Applies the threshold policy
//! 4. Stamps and returns the `DriftReport`

use chrono::{DateTime, Utc};
use tracing::info;

use crate::config::DriftConfig;
use crate::types::{Dataset, DriftReport};

use super::{aggregator::DriftAggregator, threshold::ThresholdEvaluator, DriftError};

pub struct DriftAnalyzer;

impl DriftAnalyzer {
    /// Run a full drift analysis, timestamped now.
    ///
    /// # Errors
    /// `InvalidConfig`, `EmptyDataset` or `SchemaMismatch`; no partial report
    /// is produced in any of those cases.
    pub fn analyze(reference: &Dataset, current: &Dataset, config: &DriftConfig) -> Result<DriftReport, DriftError> {
        Self::analyze_at(reference, current, config, Utc::now())
    }

    /// Same as [`DriftAnalyzer::analyze`] with a caller-supplied timestamp.
    pub fn analyze_at(
        reference: &Dataset,
        current: &Dataset,
        config: &DriftConfig,
        timestamp: DateTime<Utc>,
    ) -> Result<DriftReport, DriftError> {
        let problems = config.range_errors();
        if !problems.is_empty() {
            return Err(DriftError::InvalidConfig(problems));
        }

        let aggregate = DriftAggregator::aggregate(reference, current, config)?;
        let threshold = config.alerting.threshold;
        let exceeds_threshold = ThresholdEvaluator::exceeds(aggregate.drift_share, threshold);

        info!(
            reference = %reference.name(),
            current = %current.name(),
            compared = aggregate.total_features_compared,
            drifted = aggregate.drifted_features.len(),
            drift_share = aggregate.drift_share,
            threshold,
            exceeds_threshold,
            "Drift analysis complete"
        );

        Ok(DriftReport {
            timestamp,
            total_features_compared: aggregate.total_features_compared,
            drifted_features: aggregate.drifted_features,
            drift_share: aggregate.drift_share,
            drift_detected: aggregate.drift_detected,
            threshold,
            exceeds_threshold,
            significance_level: config.detection.significance_level,
            reference_rows: reference.row_count(),
            current_rows: current.row_count(),
            per_feature: aggregate.per_feature,
        })
    }
}
