//! Threshold policy: turns a drift share into the actionable alert signal.

pub struct ThresholdEvaluator;

impl ThresholdEvaluator {
    /// `true` when `drift_share` is strictly above `threshold`.
    ///
    /// Equality does not trigger. This is the value exit codes and alerting
    /// act on; `drift_detected` must not be used in its place.
    pub fn exceeds(drift_share: f64, threshold: f64) -> bool {
        drift_share > threshold
    }
}
