//! Two-sample Kolmogorov-Smirnov Test
//!
//! Statistic: D = max |F_ref(x) - F_cur(x)| over the pooled sample, computed
//! with a single merge walk over both sorted samples so ties are stepped
//! together.
//!
//! ## P-value
//! - **Exact**: lattice-path recursion over the (m, n) grid counting the
//!   fraction of orderings whose ECDF gap stays below the observed D.
//!   O(m·n), used while neither sample exceeds 10 000 values.
//! - **Asymptotic**: survival function of the Kolmogorov distribution at
//!   `sqrt(m·n / (m + n)) · D`.
//!
//! Both the statistic and the p-value are symmetric in the two samples.

use crate::config::KsMode;
use std::f64::consts::PI;

/// Largest sample for which `KsMode::Auto` uses the exact distribution
pub const EXACT_MAX_N: usize = 10_000;

/// Result of one KS comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KsOutcome {
    pub statistic: f64,
    pub p_value: f64,
}

/// Two-sample Kolmogorov-Smirnov test
pub struct KsTest;

impl KsTest {
    /// Run the test on two non-empty samples of finite values.
    ///
    /// Samples need not be sorted. Returns statistic 0 and p-value 1 when
    /// either sample is empty.
    pub fn run(reference: &[f64], current: &[f64], mode: KsMode) -> KsOutcome {
        if reference.is_empty() || current.is_empty() {
            return KsOutcome {
                statistic: 0.0,
                p_value: 1.0,
            };
        }

        let statistic = Self::statistic(reference, current);
        let p_value = Self::p_value(statistic, reference.len(), current.len(), mode);

        KsOutcome { statistic, p_value }
    }

    /// Maximum absolute difference between the two empirical CDFs
    pub fn statistic(reference: &[f64], current: &[f64]) -> f64 {
        let mut a = reference.to_vec();
        let mut b = current.to_vec();
        a.sort_by(f64::total_cmp);
        b.sort_by(f64::total_cmp);

        let n1 = a.len() as f64;
        let n2 = b.len() as f64;
        let (mut i, mut j) = (0usize, 0usize);
        let mut d: f64 = 0.0;

        while i < a.len() && j < b.len() {
            let x = a[i].min(b[j]);
            while i < a.len() && a[i] <= x {
                i += 1;
            }
            while j < b.len() && b[j] <= x {
                j += 1;
            }
            d = d.max((i as f64 / n1 - j as f64 / n2).abs());
        }

        d
    }

    /// Two-sided p-value for statistic `d` with sample sizes `n1`, `n2`
    pub fn p_value(d: f64, n1: usize, n2: usize, mode: KsMode) -> f64 {
        if n1 == 0 || n2 == 0 || d <= 0.0 {
            return 1.0;
        }

        let use_exact = match mode {
            KsMode::Exact => true,
            KsMode::Asymptotic => false,
            KsMode::Auto => n1.max(n2) <= EXACT_MAX_N,
        };

        let p = if use_exact {
            1.0 - Self::exact_cdf(d, n1, n2)
        } else {
            let (m, n) = (n1 as f64, n2 as f64);
            let en = (m * n / (m + n)).sqrt();
            kolmogorov_sf(en * d)
        };

        p.clamp(0.0, 1.0)
    }

    /// P(D < d) under the null, by lattice-path recursion.
    ///
    /// `u[j]` holds the normalised number of monotone paths from (0, 0) to
    /// (i, j) that never leave the band |i/m - j/n| < d.
    fn exact_cdf(d: f64, n1: usize, n2: usize) -> f64 {
        let (m, n) = if n1 <= n2 { (n1, n2) } else { (n2, n1) };
        let md = m as f64;
        let nd = n as f64;

        // Gap values live on the 1/(m·n) lattice; q sits half a step below d.
        let q = (0.5 + (d * md * nd - 1e-7).floor()) / (md * nd);

        let mut u: Vec<f64> = (0..=n)
            .map(|j| if j as f64 / nd > q { 0.0 } else { 1.0 })
            .collect();

        for i in 1..=m {
            let w = i as f64 / (i + n) as f64;
            let fi = i as f64 / md;

            u[0] = if fi > q { 0.0 } else { w * u[0] };
            for j in 1..=n {
                u[j] = if (fi - j as f64 / nd).abs() > q {
                    0.0
                } else {
                    w * u[j] + u[j - 1]
                };
            }
        }

        u[n].clamp(0.0, 1.0)
    }
}

/// Survival function of the Kolmogorov distribution, P(K > x).
///
/// Uses the theta-function series below x = 1.18 and the alternating series
/// above it; both converge in a handful of terms on their side of the split.
pub fn kolmogorov_sf(x: f64) -> f64 {
    if !x.is_finite() {
        return if x > 0.0 { 0.0 } else { 1.0 };
    }
    if x <= 0.0 {
        return 1.0;
    }

    if x < 1.18 {
        let w = -PI * PI / (8.0 * x * x);
        let sum: f64 = (1..=10)
            .map(|k| {
                let odd = f64::from(2 * k - 1);
                (odd * odd * w).exp()
            })
            .sum();
        let cdf = (2.0 * PI).sqrt() / x * sum;
        (1.0 - cdf).clamp(0.0, 1.0)
    } else {
        let mut sum = 0.0;
        for k in 1..=100 {
            let kf = f64::from(k);
            let term = (-2.0 * kf * kf * x * x).exp();
            if k % 2 == 1 {
                sum += term;
            } else {
                sum -= term;
            }
            if term < 1e-16 {
                break;
            }
        }
        (2.0 * sum).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(start: f64, step: f64, n: usize) -> Vec<f64> {
        (0..n).map(|i| start + step * i as f64).collect()
    }

    #[test]
    fn test_statistic_identical_samples_is_zero() {
        let a = seq(1.0, 1.0, 50);
        assert_eq!(KsTest::statistic(&a, &a), 0.0);
    }

    #[test]
    fn test_statistic_disjoint_samples_is_one() {
        let a = seq(1.0, 1.0, 10);
        let b = seq(100.0, 10.0, 10);
        assert!((KsTest::statistic(&a, &b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_statistic_handles_ties_across_samples() {
        // ECDFs: at x=1 ref=2/3 cur=1/3; at x=2 ref=1 cur=2/3
        let a = [1.0, 1.0, 2.0];
        let b = [1.0, 2.0, 3.0];
        assert!((KsTest::statistic(&a, &b) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_exact_p_value_for_disjoint_samples() {
        // Only the two extreme orderings reach D = 1: p = 2 / C(20, 10)
        let a = seq(1.0, 1.0, 10);
        let b = seq(100.0, 10.0, 10);
        let outcome = KsTest::run(&a, &b, KsMode::Exact);
        assert!((outcome.p_value - 2.0 / 184_756.0).abs() < 1e-9, "p={}", outcome.p_value);
    }

    #[test]
    fn test_exact_p_value_small_shift_not_significant() {
        // Interleaved samples, D = 0.1, every ordering has D >= 0.1
        let a = seq(1.0, 1.0, 10);
        let b = seq(1.5, 1.0, 10);
        let outcome = KsTest::run(&a, &b, KsMode::Auto);
        assert!((outcome.statistic - 0.1).abs() < 1e-12);
        assert!((outcome.p_value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_exact_matches_unequal_sizes_extreme() {
        // m=3, n=5, all ref below all cur: p = 2 / C(8, 3) = 2/56
        let a = [1.0, 2.0, 3.0];
        let b = [10.0, 11.0, 12.0, 13.0, 14.0];
        let p = KsTest::run(&a, &b, KsMode::Exact).p_value;
        assert!((p - 2.0 / 56.0).abs() < 1e-12, "p={p}");
    }

    #[test]
    fn test_symmetry_in_both_modes() {
        let a = [0.3, 1.2, 2.2, 2.5, 3.1, 4.8, 5.0];
        let b = [1.0, 1.5, 2.0, 6.5, 7.1];
        for mode in [KsMode::Exact, KsMode::Asymptotic, KsMode::Auto] {
            let ab = KsTest::run(&a, &b, mode);
            let ba = KsTest::run(&b, &a, mode);
            assert_eq!(ab, ba, "mode {mode:?} should be symmetric");
        }
    }

    #[test]
    fn test_kolmogorov_sf_known_critical_value() {
        // 1.3581 is the classic 5% critical value
        let p = kolmogorov_sf(1.3581);
        assert!((p - 0.05).abs() < 1e-3, "sf(1.3581)={p}");
    }

    #[test]
    fn test_kolmogorov_sf_branches_agree_at_split() {
        let below = kolmogorov_sf(1.18 - 1e-9);
        let above = kolmogorov_sf(1.18);
        assert!((below - above).abs() < 1e-6);
    }

    #[test]
    fn test_kolmogorov_sf_limits() {
        assert_eq!(kolmogorov_sf(0.0), 1.0);
        assert!(kolmogorov_sf(0.1) > 0.999_999);
        assert!(kolmogorov_sf(5.0) < 1e-20);
    }

    #[test]
    fn test_auto_is_exact_up_to_max_n() {
        // m·n = 40 000, both samples well under the limit
        let a = seq(0.0, 1.0, 200);
        let b = seq(40.0, 1.0, 200);
        let auto = KsTest::run(&a, &b, KsMode::Auto);
        let exact = KsTest::run(&a, &b, KsMode::Exact);
        assert_eq!(auto, exact);
        assert!(auto.p_value < 0.05);
    }

    #[test]
    fn test_auto_switches_to_asymptotic_above_max_n() {
        let a = seq(0.0, 1.0, EXACT_MAX_N + 1);
        let b = seq(5_000.0, 1.0, 50);
        let auto = KsTest::run(&a, &b, KsMode::Auto);
        let asym = KsTest::run(&a, &b, KsMode::Asymptotic);
        assert_eq!(auto, asym);
    }

    #[test]
    fn test_empty_sample_is_not_significant() {
        let outcome = KsTest::run(&[], &[1.0, 2.0], KsMode::Auto);
        assert_eq!(outcome.statistic, 0.0);
        assert_eq!(outcome.p_value, 1.0);
    }
}
