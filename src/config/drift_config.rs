//! Drift Configuration - detection, alerting and column settings as TOML values
//!
//! Each struct implements `Default` with the stock values, so an absent or
//! partial config file behaves exactly like the built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::defaults;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a drift run.
///
/// Passed explicitly into every engine call. Load with `DriftConfig::load()?`
/// which searches:
/// 1. `$DRIFT_CONFIG` env var
/// 2. `./drift_config.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DriftConfig {
    /// Drift-share threshold policy
    #[serde(default)]
    pub alerting: AlertingConfig,

    /// Per-feature statistical testing
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Column selection
    #[serde(default)]
    pub columns: ColumnsConfig,
}

impl DriftConfig {
    /// Load configuration using the standard search order:
    /// 1. `$DRIFT_CONFIG` environment variable
    /// 2. `./drift_config.toml` in the current working directory
    /// 3. Built-in defaults
    ///
    /// Only a missing file falls through to the next step. A file that exists
    /// but fails to read, parse or validate is an error.
    pub fn load() -> Result<Self, ConfigError> {
        // 1. Check env var
        if let Ok(path) = std::env::var(defaults::CONFIG_PATH_ENV) {
            let p = PathBuf::from(&path);
            if p.exists() {
                let config = Self::load_from_file(&p)?;
                info!(path = %p.display(), "Loaded drift config from DRIFT_CONFIG");
                return Ok(config);
            }
            warn!(path = %path, "DRIFT_CONFIG points to non-existent file, falling back");
        }

        // 2. Check ./drift_config.toml
        let local = PathBuf::from(defaults::LOCAL_CONFIG_FILE);
        if local.exists() {
            let config = Self::load_from_file(&local)?;
            info!("Loaded drift config from ./drift_config.toml");
            return Ok(config);
        }

        // 3. Defaults
        info!("No drift_config.toml found, using built-in defaults");
        Ok(Self::default())
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
            other => other,
        })
    }

    /// Parse and validate a TOML document. Unknown keys only warn.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `DRIFT_THRESHOLD` if set. Unparseable values are ignored with a warning.
    pub fn apply_env_overrides(self) -> Self {
        match std::env::var(defaults::THRESHOLD_ENV) {
            Ok(raw) => self.with_threshold_override(&raw),
            Err(_) => self,
        }
    }

    fn with_threshold_override(self, raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(threshold) => {
                info!(threshold, "Threshold overridden by DRIFT_THRESHOLD");
                self.with_threshold(threshold)
            }
            Err(e) => {
                warn!(value = %raw, error = %e, "Ignoring unparseable DRIFT_THRESHOLD");
                self
            }
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.alerting.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_significance_level(mut self, significance_level: f64) -> Self {
        self.detection.significance_level = significance_level;
        self
    }

    #[must_use]
    pub fn with_excluded_columns(mut self, excluded: Vec<String>) -> Self {
        self.columns.excluded = excluded;
        self
    }

    #[must_use]
    pub fn with_categorical_policy(mut self, policy: CategoricalPolicy) -> Self {
        self.detection.categorical_policy = policy;
        self
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Validate value ranges, logging non-fatal warnings.
    ///
    /// Rules:
    /// - `alerting.threshold` in [0, 1]
    /// - `detection.significance_level` in (0, 1)
    /// - all values finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (errors, warnings) = super::validation::validate_ranges(self);
        for w in &warnings {
            warn!("{}", w);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Range errors only, without logging. Empty when the config is usable.
    pub fn range_errors(&self) -> Vec<String> {
        super::validation::validate_ranges(self).0
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Serialize(toml::ser::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "Config I/O error ({}): {}", path.display(), e),
            Self::Parse(path, e) => {
                write!(f, "Config parse error ({}): {}", path.display(), e)
            }
            Self::Serialize(e) => write!(f, "Config serialization error: {}", e),
            Self::Validation(errors) => {
                writeln!(f, "Config validation failed:")?;
                for e in errors {
                    writeln!(f, "  - {}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Alerting
// ============================================================================

/// Threshold applied to the drift share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertingConfig {
    /// Drift share strictly above this value is actionable (0-1).
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 { defaults::DRIFT_THRESHOLD }

impl Default for AlertingConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

// ============================================================================
// Detection
// ============================================================================

/// How the KS p-value is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KsMode {
    /// Exact for small samples, asymptotic otherwise
    #[default]
    Auto,
    /// Always the exact lattice-path distribution
    Exact,
    /// Always the limiting Kolmogorov distribution
    Asymptotic,
}

/// Treatment of categorical (non-numeric) columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoricalPolicy {
    /// Chi-square test of homogeneity
    #[default]
    ChiSquare,
    /// Record as skipped with `non_numeric_column`
    Skip,
}

/// Per-feature statistical test settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// P-value below which a feature counts as drifted, in (0, 1).
    #[serde(default = "default_significance_level")]
    pub significance_level: f64,

    #[serde(default)]
    pub ks_mode: KsMode,

    #[serde(default)]
    pub categorical_policy: CategoricalPolicy,
}

fn default_significance_level() -> f64 { defaults::SIGNIFICANCE_LEVEL }

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            significance_level: default_significance_level(),
            ks_mode: KsMode::default(),
            categorical_policy: CategoricalPolicy::default(),
        }
    }
}

// ============================================================================
// Columns
// ============================================================================

/// Column selection applied before comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnsConfig {
    /// Columns removed from both datasets (labels, identifiers).
    #[serde(default = "default_excluded")]
    pub excluded: Vec<String>,
}

fn default_excluded() -> Vec<String> {
    defaults::EXCLUDED_COLUMNS.iter().map(|s| (*s).to_string()).collect()
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            excluded: default_excluded(),
        }
    }
}
