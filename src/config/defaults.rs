//! System-wide default constants.
//!
//! Grouped by subsystem for easy discovery.

// ============================================================================
// Detection
// ============================================================================

/// Per-feature p-value cutoff below which a feature is flagged as drifted.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

// ============================================================================
// Alerting
// ============================================================================

/// Drift share above which the run is considered actionable.
///
/// 0.3 = more than 30% of compared features drifted.
pub const DRIFT_THRESHOLD: f64 = 0.3;

// ============================================================================
// Columns
// ============================================================================

/// Label columns dropped from both datasets before comparison.
pub const EXCLUDED_COLUMNS: &[&str] = &["Churn", "target"];

// ============================================================================
// Config discovery
// ============================================================================

/// Environment variable holding a path to the TOML config file.
pub const CONFIG_PATH_ENV: &str = "DRIFT_CONFIG";

/// Config file looked up in the working directory when `DRIFT_CONFIG` is unset.
pub const LOCAL_CONFIG_FILE: &str = "drift_config.toml";

/// Environment variable overriding `alerting.threshold`.
pub const THRESHOLD_ENV: &str = "DRIFT_THRESHOLD";

// ============================================================================
// Artifacts
// ============================================================================

/// Default path of the rendered HTML report.
pub const OUTPUT_HTML: &str = "drift_report.html";

/// Default path of the machine-readable summary.
pub const OUTPUT_JSON: &str = "drift_results.json";

// ============================================================================
// Exit codes
// ============================================================================

/// Threshold not exceeded.
pub const EXIT_OK: u8 = 0;

/// Drift share above threshold.
pub const EXIT_THRESHOLD_EXCEEDED: u8 = 1;

/// Fatal error; no artifacts written.
pub const EXIT_FAILURE: u8 = 2;
