//! Dataset-level aggregation of per-feature verdicts.
//!
//! Output order is fixed regardless of parallel execution: reference columns
//! in reference order, then columns present only in the current dataset in
//! current order.

use rayon::prelude::*;
use tracing::debug;

use crate::config::DriftConfig;
use crate::types::{Column, Dataset, DatasetRole, FeatureDriftResult, SkipReason};

use super::{comparator::FeatureComparator, DriftError};

/// Folded per-feature results, before threshold evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct DriftAggregate {
    pub per_feature: Vec<FeatureDriftResult>,
    pub drifted_features: Vec<String>,
    pub total_features_compared: usize,
    pub drift_share: f64,
    pub drift_detected: bool,
}

/// One slot of the output, decided before any test runs
enum Slot<'a> {
    Compare(&'a Column, &'a Column),
    Skip(&'a Column, SkipReason),
}

pub struct DriftAggregator;

impl DriftAggregator {
    /// Compare every shared column and fold the verdicts.
    ///
    /// # Errors
    /// - `EmptyDataset` if either dataset has zero rows (checked first)
    /// - `SchemaMismatch` if no column name is shared after exclusions
    pub fn aggregate(
        reference: &Dataset,
        current: &Dataset,
        config: &DriftConfig,
    ) -> Result<DriftAggregate, DriftError> {
        if reference.row_count() == 0 {
            return Err(DriftError::EmptyDataset {
                role: DatasetRole::Reference,
            });
        }
        if current.row_count() == 0 {
            return Err(DriftError::EmptyDataset {
                role: DatasetRole::Current,
            });
        }

        let excluded = &config.columns.excluded;
        let reference = reference.without_columns(excluded);
        let current = current.without_columns(excluded);

        let shared = reference
            .columns()
            .iter()
            .filter(|c| current.column(&c.name).is_some())
            .count();
        if shared == 0 {
            return Err(DriftError::SchemaMismatch {
                reference_columns: reference.column_names().into_iter().map(String::from).collect(),
                current_columns: current.column_names().into_iter().map(String::from).collect(),
            });
        }

        let mut slots: Vec<Slot<'_>> = reference
            .columns()
            .iter()
            .map(|ref_col| match current.column(&ref_col.name) {
                Some(cur_col) => Slot::Compare(ref_col, cur_col),
                None => Slot::Skip(ref_col, SkipReason::MissingInCurrent),
            })
            .collect();
        slots.extend(
            current
                .columns()
                .iter()
                .filter(|c| reference.column(&c.name).is_none())
                .map(|c| Slot::Skip(c, SkipReason::MissingInReference)),
        );

        let detection = &config.detection;
        let per_feature: Vec<FeatureDriftResult> = slots
            .par_iter()
            .map(|slot| match *slot {
                Slot::Compare(r, c) => FeatureComparator::compare(r, c, detection),
                Slot::Skip(col, reason) => {
                    let count = col.values.non_missing_count();
                    let counts = match reason {
                        SkipReason::MissingInReference => (0, count),
                        _ => (count, 0),
                    };
                    FeatureDriftResult::skipped(col.name.as_str(), reason, counts)
                }
            })
            .collect();

        for result in &per_feature {
            debug!(
                feature = %result.feature_name,
                compared = result.compared,
                drifted = result.drifted,
                statistic = result.test_statistic,
                p_value = result.p_value,
                skip_reason = result.skip_reason.map(SkipReason::as_str).unwrap_or("-"),
                "Feature verdict"
            );
        }

        Ok(Self::fold(per_feature))
    }

    /// Fold verdicts into counts and share. Skipped features never count.
    pub fn fold(per_feature: Vec<FeatureDriftResult>) -> DriftAggregate {
        let total_features_compared = per_feature.iter().filter(|f| f.compared).count();
        let drifted_features: Vec<String> = per_feature
            .iter()
            .filter(|f| f.is_drifted())
            .map(|f| f.feature_name.clone())
            .collect();

        let drift_share = if total_features_compared == 0 {
            0.0
        } else {
            drifted_features.len() as f64 / total_features_compared as f64
        };

        DriftAggregate {
            drift_detected: !drifted_features.is_empty(),
            per_feature,
            drifted_features,
            total_features_compared,
            drift_share,
        }
    }
}
