//! Drift Configuration Module
//!
//! Operator-tunable detection and alerting settings loaded from TOML files.
//!
//! ## Loading Order
//!
//! 1. `DRIFT_CONFIG` environment variable (path to TOML file)
//! 2. `drift_config.toml` in the current working directory
//! 3. Built-in defaults (threshold 0.3, significance level 0.05)
//!
//! A config file that is found but invalid is an error, never a fallback.
//!
//! `DRIFT_THRESHOLD` then overrides `alerting.threshold`, and CLI flags
//! override both.
//!
//! ## Usage
//!
//! ```ignore
//! let config = DriftConfig::load()?.apply_env_overrides();
//! let report = DriftAnalyzer::analyze(&reference, &current, &config)?;
//! ```
//!
//! The engine never reads configuration from process-wide state; every call
//! receives its `DriftConfig` explicitly.

mod drift_config;
pub mod defaults;
pub mod validation;

pub use drift_config::*;
