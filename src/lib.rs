//! drift-monitor: Reference vs. Current Data Drift Detection
//!
//! Compares two tabular snapshots feature by feature, folds the verdicts into a
//! drift share and decides whether that share breaches an operator threshold.
//!
//! ## Architecture
//!
//! - **Acquisition**: CSV files → validated `Dataset` values
//! - **Drift Engine**: per-feature KS / Chi-square tests, aggregation, threshold
//! - **Report**: JSON summary, HTML and Markdown reports, console block, alert body
//! - **Config**: TOML settings with defaults, env override and validation

pub mod acquisition;
pub mod config;
pub mod drift_engine;
pub mod report;
pub mod types;

// Re-export configuration
pub use config::{CategoricalPolicy, ConfigError, DriftConfig, KsMode};

// Re-export commonly used types
pub use types::{
    Column, ColumnValues, Dataset, DatasetError, DatasetRole, DriftReport, FeatureDriftResult,
    FeatureOutcome, SkipReason, StatTest,
};

// Re-export engine components
pub use drift_engine::{
    ChiSquareTest, DriftAggregate, DriftAggregator, DriftAnalyzer, DriftError, FeatureComparator,
    KsTest, ThresholdEvaluator,
};

// Re-export artifacts
pub use report::{AlertMessage, DriftSummary, ReportRenderer, ResultSerializer};

pub use acquisition::{load_csv, parse_csv_str, LoadError};
