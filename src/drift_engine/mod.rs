//! Drift Engine: reference vs. current distribution comparison
//!
//! Measures, per feature, whether the current distribution has moved away from
//! the reference distribution, folds the verdicts into a drift share, and
//! applies the operator threshold.
//!
//! ## Architecture
//! - `ks_test`: two-sample Kolmogorov-Smirnov statistic and p-value
//! - `chi_square`: chi-square homogeneity test for categorical features (statrs)
//! - `comparator`: single-feature verdict (missing-value removal, degenerate cases)
//! - `aggregator`: shared-column planning, parallel comparison (rayon), fold
//! - `threshold`: strict `drift_share > threshold` policy
//! - `analyzer`: config validation + aggregation + threshold → `DriftReport`
//!
//! Everything here is pure and synchronous. Loading data, writing artifacts and
//! delivering alerts happen outside the engine.

pub mod ks_test;
pub mod chi_square;
pub mod comparator;
pub mod aggregator;
pub mod threshold;
pub mod analyzer;

pub use aggregator::{DriftAggregate, DriftAggregator};
pub use analyzer::DriftAnalyzer;
pub use comparator::FeatureComparator;
pub use ks_test::KsTest;
pub use chi_square::ChiSquareTest;
pub use threshold::ThresholdEvaluator;

use thiserror::Error;

use crate::types::DatasetRole;

// ============================================================================
// Error Types
// ============================================================================

/// Fatal engine errors. Any of these aborts the analysis with no report.
#[derive(Debug, Error)]
pub enum DriftError {
    #[error("The {role} dataset has zero rows")]
    EmptyDataset { role: DatasetRole },

    #[error(
        "No shared columns between reference {reference_columns:?} and current {current_columns:?}"
    )]
    SchemaMismatch {
        reference_columns: Vec<String>,
        current_columns: Vec<String>,
    },

    #[error("Invalid drift configuration: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),
}
