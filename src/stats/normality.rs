//! Shapiro–Wilk normality test.
//!
//! Royston's AS R94 approximation (Royston, P. (1995), "A Remark on
//! Algorithm AS 181", *Applied Statistics* 44(4), 547-551), the same
//! algorithm behind the statistics library the original pipeline called.
//! Valid for 3 <= n <= ~5000.

use statrs::distribution::{ContinuousCDF, Normal};
use tracing::{info, warn};

use crate::error::Error;
use crate::stats::ALPHA;

/// Outcome of a Shapiro–Wilk test on one group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalityResult {
    /// The W statistic, in (0, 1].
    pub statistic: f64,
    /// Upper-tail p-value.
    pub p_value: f64,
}

impl NormalityResult {
    /// Classification at the pipeline-wide threshold: normal iff p > 0.05.
    pub fn is_normal(&self) -> bool {
        self.p_value > ALPHA
    }
}

/// Checks a group for normality.
///
/// Fewer than 3 samples cannot be tested: logs a warning and returns
/// `Ok(None)` so the caller degrades gracefully instead of failing the
/// pipeline. A zero-variance group is an error.
pub fn check_normality(data: &[f64], label: &str) -> Result<Option<NormalityResult>, Error> {
    if data.len() < 3 {
        warn!(
            group = label,
            samples = data.len(),
            "not enough data points for Shapiro-Wilk test"
        );
        return Ok(None);
    }

    let result = shapiro_wilk(data)?;
    info!(
        group = label,
        statistic = result.statistic,
        p_value = result.p_value,
        normal = result.is_normal(),
        "Shapiro-Wilk test"
    );
    Ok(Some(result))
}

/// Computes the Shapiro–Wilk W statistic and p-value for `data` (n >= 3).
pub fn shapiro_wilk(data: &[f64]) -> Result<NormalityResult, Error> {
    let n = data.len();
    debug_assert!(n >= 3);

    let mut x = data.to_vec();
    x.sort_by(f64::total_cmp);

    let range = x[n - 1] - x[0];
    if range <= 0.0 || !range.is_finite() {
        return Err(Error::DegenerateSample);
    }

    let coeffs = sw_coefficients(n);

    let mu = x.iter().sum::<f64>() / n as f64;
    let ssq: f64 = x.iter().map(|v| (v - mu).powi(2)).sum();
    if ssq <= 0.0 {
        return Err(Error::DegenerateSample);
    }

    let numerator: f64 = coeffs.iter().zip(&x).map(|(a, v)| a * v).sum::<f64>().powi(2);
    let w = (numerator / ssq).min(1.0);

    Ok(NormalityResult {
        statistic: w,
        p_value: sw_p_value(w, n),
    })
}

/// Expected normal order statistics (Blom scores) normalized into the
/// Shapiro–Wilk coefficient vector, per AS R94.
fn sw_coefficients(n: usize) -> Vec<f64> {
    let std_normal = std_normal();
    let nf = n as f64;

    let m: Vec<f64> = (1..=n)
        .map(|i| std_normal.inverse_cdf((i as f64 - 0.375) / (nf + 0.25)))
        .collect();
    let m2: f64 = m.iter().map(|v| v * v).sum();

    let mut a = vec![0.0; n];
    if n == 3 {
        a[2] = std::f64::consts::FRAC_1_SQRT_2;
        a[0] = -a[2];
        return a;
    }

    let u = 1.0 / nf.sqrt();
    let a_n = poly(
        &[-2.706056, 4.434685, -2.071190, -0.147981, 0.221157, 0.0],
        u,
    ) + m[n - 1] / m2.sqrt();

    if n <= 5 {
        let phi = (m2 - 2.0 * m[n - 1].powi(2)) / (1.0 - 2.0 * a_n * a_n);
        a[n - 1] = a_n;
        a[0] = -a_n;
        for i in 1..n - 1 {
            a[i] = m[i] / phi.sqrt();
        }
    } else {
        let a_n1 = poly(
            &[-3.582633, 5.682633, -1.752461, -0.293762, 0.042981, 0.0],
            u,
        ) + m[n - 2] / m2.sqrt();
        let phi = (m2 - 2.0 * m[n - 1].powi(2) - 2.0 * m[n - 2].powi(2))
            / (1.0 - 2.0 * a_n * a_n - 2.0 * a_n1 * a_n1);
        a[n - 1] = a_n;
        a[0] = -a_n;
        a[n - 2] = a_n1;
        a[1] = -a_n1;
        for i in 2..n - 2 {
            a[i] = m[i] / phi.sqrt();
        }
    }
    a
}

fn std_normal() -> Normal {
    Normal::new(0.0, 1.0).expect("valid parameters")
}

/// Evaluates `c[0]*x^5 + c[1]*x^4 + ... + c[5]` (Horner).
fn poly(c: &[f64; 6], x: f64) -> f64 {
    c.iter().fold(0.0, |acc, &coef| acc * x + coef)
}

/// Upper-tail p-value for the W statistic, per AS R94's normalizing
/// transformations.
fn sw_p_value(w: f64, n: usize) -> f64 {
    let nf = n as f64;
    let std_normal = std_normal();

    if w >= 1.0 {
        return 1.0;
    }

    if n == 3 {
        let pi6 = 6.0 / std::f64::consts::PI;
        let stqr = (0.75f64).sqrt().asin();
        return (pi6 * (w.sqrt().asin() - stqr)).clamp(0.0, 1.0);
    }

    let ln1mw = (1.0 - w).ln();
    let z = if n <= 11 {
        let gamma = poly(&[0.0, 0.0, 0.0, 0.0, 0.459, -2.273], nf);
        if gamma - ln1mw <= 0.0 {
            return 0.0;
        }
        let mu = poly(&[0.0, 0.0, -0.0006714, 0.025054, -0.39978, 0.5440], nf);
        let sigma = poly(&[0.0, 0.0, -0.0020322, 0.062767, -0.77857, 1.3822], nf).exp();
        (-(gamma - ln1mw).ln() - mu) / sigma
    } else {
        let ln_n = nf.ln();
        let mu = poly(&[0.0, 0.0, 0.0038915, -0.083751, -0.31082, -1.5861], ln_n);
        let sigma = poly(&[0.0, 0.0, 0.0, 0.0030302, -0.082676, -0.4803], ln_n).exp();
        (ln1mw - mu) / sigma
    };

    (1.0 - std_normal.cdf(z)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal as SampleNormal};

    #[test]
    fn too_few_samples_returns_none() {
        assert_eq!(check_normality(&[], "empty").unwrap(), None);
        assert_eq!(check_normality(&[1.0, 2.0], "pair").unwrap(), None);
    }

    #[test]
    fn three_samples_are_tested() {
        let result = check_normality(&[1.0, 2.0, 4.0], "tiny").unwrap().unwrap();
        assert!(result.statistic > 0.0 && result.statistic <= 1.0);
        assert!((0.0..=1.0).contains(&result.p_value));
    }

    #[test]
    fn constant_group_is_degenerate() {
        let result = check_normality(&[5.0; 10], "flat");
        assert!(matches!(result, Err(Error::DegenerateSample)));
    }

    #[test]
    fn gaussian_sample_looks_normal() {
        let mut rng = StdRng::seed_from_u64(42);
        let dist = SampleNormal::new(100.0, 15.0).unwrap();
        let data: Vec<f64> = (0..50).map(|_| dist.sample(&mut rng)).collect();

        let result = shapiro_wilk(&data).unwrap();
        assert!(result.statistic > 0.9, "W = {}", result.statistic);
        assert!(result.p_value > ALPHA, "p = {}", result.p_value);
    }

    #[test]
    fn extreme_outlier_breaks_normality() {
        let mut data = vec![1.0, 1.1, 0.9, 1.05, 0.95, 1.02, 0.98, 1.03, 0.97, 1.01];
        data.extend_from_slice(&[1.04, 0.96, 1.06, 0.94, 1.07]);
        data.push(1_000.0);

        let result = shapiro_wilk(&data).unwrap();
        assert!(result.p_value < 0.01, "p = {}", result.p_value);
    }

    #[test]
    fn near_uniform_ladder_passes() {
        // scipy.stats.shapiro(range(1, 11)) ~ (W=0.970, p=0.89): an evenly
        // spaced ladder is close enough to normal at n=10.
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        let result = shapiro_wilk(&data).unwrap();
        assert!(result.statistic > 0.93, "W = {}", result.statistic);
        assert!(result.p_value > 0.5, "p = {}", result.p_value);
    }
}
