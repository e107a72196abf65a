//! Drift engine types: per-feature verdicts and the dataset-level report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which side of the comparison a dataset plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetRole {
    Reference,
    Current,
}

impl DatasetRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Current => "current",
        }
    }
}

impl std::fmt::Display for DatasetRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a feature was recorded without being compared.
///
/// Skips are outcomes, not errors: the analysis always completes around them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// One side had no non-missing values
    EmptyAfterMissingRemoval,
    /// Column exists only in the reference dataset
    MissingInCurrent,
    /// Column exists only in the current dataset
    MissingInReference,
    /// Categorical column while categorical testing is disabled
    NonNumericColumn,
    /// Numeric on one side, categorical on the other
    TypeMismatch,
}

impl SkipReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyAfterMissingRemoval => "empty_after_missing_removal",
            Self::MissingInCurrent => "missing_in_current",
            Self::MissingInReference => "missing_in_reference",
            Self::NonNumericColumn => "non_numeric_column",
            Self::TypeMismatch => "type_mismatch",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statistical test that produced a feature verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatTest {
    /// Two-sample Kolmogorov-Smirnov (numeric columns)
    Ks,
    /// Chi-square test of homogeneity (categorical columns)
    ChiSquare,
}

impl StatTest {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ks => "ks",
            Self::ChiSquare => "chi_square",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Ks => "Kolmogorov-Smirnov",
            Self::ChiSquare => "Chi-square",
        }
    }
}

/// Verdict for a single feature.
///
/// `drifted` is meaningful only when `compared` is true; skipped features carry
/// statistic 0, p-value 1 and `drifted = false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDriftResult {
    pub feature_name: String,
    pub test_statistic: f64,
    /// In [0, 1]
    pub p_value: f64,
    pub drifted: bool,
    pub compared: bool,
    #[serde(default)]
    pub skip_reason: Option<SkipReason>,
    #[serde(default)]
    pub stat_test: Option<StatTest>,
    /// Non-missing reference samples used
    #[serde(default)]
    pub reference_count: usize,
    /// Non-missing current samples used
    #[serde(default)]
    pub current_count: usize,
}

impl FeatureDriftResult {
    pub fn compared(
        feature_name: impl Into<String>,
        stat_test: StatTest,
        test_statistic: f64,
        p_value: f64,
        significance_level: f64,
        counts: (usize, usize),
    ) -> Self {
        let p_value = p_value.clamp(0.0, 1.0);
        Self {
            feature_name: feature_name.into(),
            test_statistic,
            p_value,
            drifted: p_value < significance_level,
            compared: true,
            skip_reason: None,
            stat_test: Some(stat_test),
            reference_count: counts.0,
            current_count: counts.1,
        }
    }

    pub fn skipped(feature_name: impl Into<String>, reason: SkipReason, counts: (usize, usize)) -> Self {
        Self {
            feature_name: feature_name.into(),
            test_statistic: 0.0,
            p_value: 1.0,
            drifted: false,
            compared: false,
            skip_reason: Some(reason),
            stat_test: None,
            reference_count: counts.0,
            current_count: counts.1,
        }
    }

    /// Drifted and actually compared.
    pub const fn is_drifted(&self) -> bool {
        self.compared && self.drifted
    }

    pub fn outcome(&self) -> FeatureOutcome {
        match (self.compared, self.skip_reason) {
            (false, Some(reason)) => FeatureOutcome::Skipped(reason),
            _ => FeatureOutcome::Compared { drifted: self.drifted },
        }
    }
}

/// Tagged view of a feature verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureOutcome {
    Compared { drifted: bool },
    Skipped(SkipReason),
}

impl FeatureOutcome {
    /// Short status label used by the renderers.
    pub fn label(self) -> String {
        match self {
            Self::Compared { drifted: true } => "DRIFTED".to_string(),
            Self::Compared { drifted: false } => "stable".to_string(),
            Self::Skipped(reason) => format!("skipped ({reason})"),
        }
    }
}

/// Dataset-level drift outcome.
///
/// `drift_detected` (any feature drifted) is informational. `exceeds_threshold`
/// (`drift_share > threshold`) is the signal alerting and exit codes act on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftReport {
    pub timestamp: DateTime<Utc>,
    pub total_features_compared: usize,
    /// Reference column order
    pub drifted_features: Vec<String>,
    pub drift_share: f64,
    pub drift_detected: bool,
    pub threshold: f64,
    pub exceeds_threshold: bool,
    pub significance_level: f64,
    pub reference_rows: usize,
    pub current_rows: usize,
    pub per_feature: Vec<FeatureDriftResult>,
}

impl DriftReport {
    pub fn feature(&self, name: &str) -> Option<&FeatureDriftResult> {
        self.per_feature.iter().find(|f| f.feature_name == name)
    }

    pub fn skipped_features(&self) -> impl Iterator<Item = &FeatureDriftResult> {
        self.per_feature.iter().filter(|f| !f.compared)
    }

    pub fn drifted_count(&self) -> usize {
        self.drifted_features.len()
    }
}
