//! Per-feature comparison: one column from each dataset in, one verdict out.

use crate::config::{CategoricalPolicy, DetectionConfig, KsMode};
use crate::types::{Column, ColumnValues, FeatureDriftResult, SkipReason, StatTest};

use super::{chi_square::ChiSquareTest, ks_test::KsTest};

/// Stateless single-feature comparator
pub struct FeatureComparator;

impl FeatureComparator {
    /// Compare one shared column.
    ///
    /// Missing entries are removed first; a side left empty is skipped whatever
    /// its type. Numeric columns use KS, categorical columns use chi-square
    /// (or are skipped, per `categorical_policy`).
    pub fn compare(reference: &Column, current: &Column, detection: &DetectionConfig) -> FeatureDriftResult {
        let name = reference.name.as_str();
        let counts = (
            reference.values.non_missing_count(),
            current.values.non_missing_count(),
        );
        if counts.0 == 0 || counts.1 == 0 {
            return FeatureDriftResult::skipped(name, SkipReason::EmptyAfterMissingRemoval, counts);
        }

        match (&reference.values, &current.values) {
            (ColumnValues::Numeric(_), ColumnValues::Numeric(_)) => {
                let ref_values = reference.numeric_values().unwrap_or_default();
                let cur_values = current.numeric_values().unwrap_or_default();
                Self::compare_numeric(
                    name,
                    &ref_values,
                    &cur_values,
                    detection.significance_level,
                    detection.ks_mode,
                )
            }
            (ColumnValues::Categorical(_), ColumnValues::Categorical(_)) => match detection.categorical_policy {
                CategoricalPolicy::Skip => FeatureDriftResult::skipped(name, SkipReason::NonNumericColumn, counts),
                CategoricalPolicy::ChiSquare => {
                    let ref_values = reference.categorical_values().unwrap_or_default();
                    let cur_values = current.categorical_values().unwrap_or_default();
                    Self::compare_categorical(name, &ref_values, &cur_values, detection.significance_level)
                }
            },
            _ => FeatureDriftResult::skipped(name, SkipReason::TypeMismatch, counts),
        }
    }

    /// KS comparison of the non-missing values of a numeric feature.
    ///
    /// A feature that is the same constant on both sides gets statistic 0
    /// and is never flagged.
    pub fn compare_numeric(
        name: &str,
        reference: &[f64],
        current: &[f64],
        significance_level: f64,
        mode: KsMode,
    ) -> FeatureDriftResult {
        let counts = (reference.len(), current.len());
        if reference.is_empty() || current.is_empty() {
            return FeatureDriftResult::skipped(name, SkipReason::EmptyAfterMissingRemoval, counts);
        }

        if let Some(value) = shared_constant(reference, current) {
            tracing::trace!(feature = %name, value, "Constant feature on both sides");
            return FeatureDriftResult::compared(name, StatTest::Ks, 0.0, 1.0, significance_level, counts);
        }

        let outcome = KsTest::run(reference, current, mode);
        FeatureDriftResult::compared(
            name,
            StatTest::Ks,
            outcome.statistic,
            outcome.p_value,
            significance_level,
            counts,
        )
    }

    /// Chi-square comparison of the non-missing values of a categorical feature
    pub fn compare_categorical(
        name: &str,
        reference: &[&str],
        current: &[&str],
        significance_level: f64,
    ) -> FeatureDriftResult {
        let counts = (reference.len(), current.len());
        if reference.is_empty() || current.is_empty() {
            return FeatureDriftResult::skipped(name, SkipReason::EmptyAfterMissingRemoval, counts);
        }

        let outcome = ChiSquareTest::run(reference, current);
        FeatureDriftResult::compared(
            name,
            StatTest::ChiSquare,
            outcome.statistic,
            outcome.p_value,
            significance_level,
            counts,
        )
    }
}

/// The single value both samples consist of, if any
fn shared_constant(reference: &[f64], current: &[f64]) -> Option<f64> {
    let first = *reference.first()?;
    let all_same = reference.iter().chain(current).all(|&v| v == first);
    all_same.then_some(first)
}
