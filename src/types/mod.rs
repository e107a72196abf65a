//! Shared data structures for reference vs. current drift detection
//!
//! This module defines the core types for the drift pipeline:
//! - Input: `Dataset` of named `Column`s (numeric or categorical)
//! - Per feature: `FeatureDriftResult` (statistic, p-value, verdict or skip reason)
//! - Per run: `DriftReport` (drift share, threshold verdict, per-feature results)

mod dataset;
mod drift;

pub use dataset::*;
pub use drift::*;
