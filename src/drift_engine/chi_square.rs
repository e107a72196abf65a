//! Chi-square test of homogeneity for categorical features.
//!
//! Builds a 2 × k contingency table over the union of observed categories
//! (reference row, current row) and tests whether both rows share one
//! category distribution. P-value from the statrs chi-squared distribution
//! with k - 1 degrees of freedom.

use statrs::distribution::{ChiSquared, ContinuousCDF};
use std::collections::BTreeMap;

/// Result of one chi-square comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquareOutcome {
    pub statistic: f64,
    pub p_value: f64,
    pub degrees_of_freedom: usize,
}

pub struct ChiSquareTest;

impl ChiSquareTest {
    /// Compare two categorical samples.
    ///
    /// A single shared category (or an empty side) yields statistic 0, p-value 1.
    pub fn run(reference: &[&str], current: &[&str]) -> ChiSquareOutcome {
        let not_significant = ChiSquareOutcome {
            statistic: 0.0,
            p_value: 1.0,
            degrees_of_freedom: 0,
        };
        if reference.is_empty() || current.is_empty() {
            return not_significant;
        }

        // BTreeMap keeps the summation order independent of input order
        let mut table: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for &v in reference {
            table.entry(v).or_default().0 += 1;
        }
        for &v in current {
            table.entry(v).or_default().1 += 1;
        }

        let k = table.len();
        if k < 2 {
            return not_significant;
        }

        let n_ref = reference.len() as f64;
        let n_cur = current.len() as f64;
        let total = n_ref + n_cur;

        let statistic: f64 = table
            .values()
            .map(|&(r, c)| {
                let col_total = (r + c) as f64;
                let e_ref = n_ref * col_total / total;
                let e_cur = n_cur * col_total / total;
                (r as f64 - e_ref).powi(2) / e_ref + (c as f64 - e_cur).powi(2) / e_cur
            })
            .sum();

        let df = k - 1;
        let p_value = Self::p_value(statistic, df);

        ChiSquareOutcome {
            statistic,
            p_value,
            degrees_of_freedom: df,
        }
    }

    /// Upper-tail probability of the chi-squared distribution
    fn p_value(statistic: f64, df: usize) -> f64 {
        if statistic <= 0.0 || df == 0 {
            return 1.0;
        }
        match ChiSquared::new(df as f64) {
            Ok(dist) => (1.0 - dist.cdf(statistic)).clamp(0.0, 1.0),
            Err(_) => 1.0,
        }
    }
}
