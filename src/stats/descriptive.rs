//! Descriptive statistics.

/// Arithmetic mean. Returns NaN for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Median (average of the two middle elements for even lengths).
/// Returns NaN for an empty slice.
pub fn median(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Population standard deviation (ddof = 0, matching the source system's
/// summary statistics). Returns NaN for an empty slice.
pub fn std_pop(data: &[f64]) -> f64 {
    let mu = mean(data);
    let var = data.iter().map(|v| (v - mu).powi(2)).sum::<f64>() / data.len() as f64;
    var.sqrt()
}

/// Five-number descriptive summary of a group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// Computes the summary; `None` for an empty group.
    pub fn from_slice(data: &[f64]) -> Option<Self> {
        if data.is_empty() {
            return None;
        }
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            mean: mean(data),
            median: median(data),
            std: std_pop(data),
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn mean_and_median_small() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert!((mean(&data) - 2.5).abs() < 1e-12);
        assert!((median(&data) - 2.5).abs() < 1e-12);
        assert!((median(&[3.0, 1.0, 2.0]) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn std_is_population_flavored() {
        // np.std([1, 2, 3, 4]) == sqrt(1.25)
        let data = [1.0, 2.0, 3.0, 4.0];
        assert!((std_pop(&data) - 1.25f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn summary_of_example_values() {
        let alns = [1_879_752.0, 2_842_474.0, 3_449_276.0, 3_068_446.0, 199_720.0];
        let s = Summary::from_slice(&alns).unwrap();
        assert!((s.mean - 2_287_933.6).abs() < 1e-6);
        assert!((s.median - 2_842_474.0).abs() < 1e-12);
        assert!((s.min - 199_720.0).abs() < 1e-12);
        assert!((s.max - 3_449_276.0).abs() < 1e-12);
    }

    #[test]
    fn empty_summary_is_none() {
        assert!(Summary::from_slice(&[]).is_none());
    }

    proptest! {
        #[test]
        fn summary_ordering_invariants(data in proptest::collection::vec(-1e9f64..1e9, 1..100)) {
            let s = Summary::from_slice(&data).unwrap();
            prop_assert!(s.min <= s.median + 1e-9);
            prop_assert!(s.median <= s.max + 1e-9);
            prop_assert!(s.min <= s.mean + 1e-9);
            prop_assert!(s.mean <= s.max + 1e-9);
            prop_assert!(s.std >= 0.0);
        }
    }
}
