//! Drift report artifacts
//!
//! Everything here is a pure function of a finished `DriftReport`:
//! - `serializer`: stable JSON summary and full-report JSON
//! - `html`: self-contained HTML report (inline CSS)
//! - `markdown`: Markdown narrative
//! - `console`: the "Drift Detection Results" terminal block
//! - `alert`: alert subject and body, only when the threshold is exceeded
//!
//! Writing files and delivering alerts is left to the caller.

pub mod alert;
pub mod console;
pub mod html;
pub mod markdown;
pub mod serializer;

pub use alert::AlertMessage;
pub use serializer::{DriftSummary, ResultSerializer};

use crate::types::DriftReport;

/// Human-readable renderings of a `DriftReport`.
pub struct ReportRenderer;

impl ReportRenderer {
    pub fn html(report: &DriftReport) -> String {
        html::render(report)
    }

    pub fn markdown(report: &DriftReport) -> String {
        markdown::render(report)
    }

    pub fn console_summary(report: &DriftReport) -> String {
        console::render(report)
    }

    /// `None` unless `exceeds_threshold`.
    pub fn alert_message(report: &DriftReport) -> Option<AlertMessage> {
        alert::build(report)
    }
}

/// `0.1` → `"10.0%"`
pub(crate) fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Fixed 4 decimals, scientific below 1e-4 so tiny p-values stay distinguishable.
pub(crate) fn format_p_value(p: f64) -> String {
    if p > 0.0 && p < 1e-4 {
        format!("{:.2e}", p)
    } else {
        format!("{:.4}", p)
    }
}
