//! Wilcoxon signed-rank test for paired samples.
//!
//! Matches the defaults of the statistics library the original pipeline
//! called into: zero differences are discarded, the reported statistic is
//! the smaller of the positive and negative rank sums, and the two-sided
//! p-value comes from the exact null distribution for small samples
//! without ties, falling back to a tie-corrected normal approximation
//! (no continuity correction) otherwise.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::Error;

/// Samples at or below this size (after zero removal) use the exact null
/// distribution, provided no absolute differences are tied.
const EXACT_LIMIT: usize = 25;

/// Outcome of a two-sided Wilcoxon signed-rank test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WilcoxonOutcome {
    /// min(T+, T-): the smaller signed-rank sum.
    pub statistic: f64,
    /// Two-sided p-value.
    pub p_value: f64,
    /// Pairs entering the ranking after zero differences were dropped.
    pub n_used: usize,
}

/// Runs the two-sided test on paired sequences of equal length.
///
/// Callers are responsible for aligning and truncating the sequences;
/// this function assumes `a.len() == b.len()`.
pub fn signed_rank_test(a: &[f64], b: &[f64]) -> Result<WilcoxonOutcome, Error> {
    debug_assert_eq!(a.len(), b.len());
    if a.is_empty() {
        return Err(Error::EmptyPairedSample);
    }

    let diffs: Vec<f64> = a
        .iter()
        .zip(b)
        .map(|(x, y)| x - y)
        .filter(|d| *d != 0.0)
        .collect();
    if diffs.is_empty() {
        return Err(Error::AllZeroDifferences);
    }

    let n = diffs.len();
    let (ranks, tie_groups) = rank_abs(&diffs);

    let r_plus: f64 = diffs
        .iter()
        .zip(&ranks)
        .filter(|(d, _)| **d > 0.0)
        .map(|(_, r)| *r)
        .sum();
    let total = (n * (n + 1)) as f64 / 2.0;
    let r_minus = total - r_plus;
    let statistic = r_plus.min(r_minus);

    let has_ties = tie_groups.iter().any(|&t| t > 1);
    let p_value = if n <= EXACT_LIMIT && !has_ties {
        exact_two_sided_p(statistic, n)
    } else {
        normal_two_sided_p(statistic, n, &tie_groups)?
    };

    Ok(WilcoxonOutcome {
        statistic,
        p_value,
        n_used: n,
    })
}

/// Ranks `diffs` by absolute value (mid-ranks for ties). Returns the rank
/// of each element and the sizes of tied groups.
fn rank_abs(diffs: &[f64]) -> (Vec<f64>, Vec<usize>) {
    let n = diffs.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| diffs[i].abs().total_cmp(&diffs[j].abs()));

    let mut ranks = vec![0.0; n];
    let mut tie_groups = Vec::new();

    let mut start = 0;
    while start < n {
        let mut end = start + 1;
        while end < n && diffs[order[end]].abs() == diffs[order[start]].abs() {
            end += 1;
        }
        // positions start..end share the mid-rank
        let mid_rank = (start + 1 + end) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = mid_rank;
        }
        tie_groups.push(end - start);
        start = end;
    }

    (ranks, tie_groups)
}

/// Exact two-sided p-value: enumerates the null distribution of the rank
/// sum over all 2^n sign assignments by dynamic programming. Requires
/// integer ranks (no ties).
fn exact_two_sided_p(statistic: f64, n: usize) -> f64 {
    let max_sum = n * (n + 1) / 2;
    let mut ways = vec![0.0f64; max_sum + 1];
    ways[0] = 1.0;
    for rank in 1..=n {
        for s in (rank..=max_sum).rev() {
            ways[s] += ways[s - rank];
        }
    }

    let t = statistic.round() as usize;
    let below: f64 = ways[..=t.min(max_sum)].iter().sum();
    let cdf = below / (2.0f64).powi(n as i32);
    (2.0 * cdf).min(1.0)
}

/// Normal approximation with tie correction, no continuity correction.
fn normal_two_sided_p(statistic: f64, n: usize, tie_groups: &[usize]) -> Result<f64, Error> {
    let nf = n as f64;
    let mean = nf * (nf + 1.0) / 4.0;
    let tie_term: f64 = tie_groups
        .iter()
        .map(|&t| {
            let tf = t as f64;
            tf * tf * tf - tf
        })
        .sum::<f64>()
        / 48.0;
    let variance = nf * (nf + 1.0) * (2.0 * nf + 1.0) / 24.0 - tie_term;
    if variance <= 0.0 {
        return Err(Error::DegenerateSample);
    }

    let z = (statistic - mean) / variance.sqrt();
    let normal = Normal::new(0.0, 1.0).expect("valid parameters");
    // statistic is min(T+, T-) so z <= 0 and the lower tail doubles.
    Ok((2.0 * normal.cdf(z)).min(1.0))
}
