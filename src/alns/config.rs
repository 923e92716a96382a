//! ALNS configuration.

use crate::error::Error;

/// Configuration for the ALNS loop.
///
/// # Scoring
///
/// The destroy/repair operator pair used in an iteration earns a score:
/// `score_new_best` for a new global best, `score_improved` for improving
/// the current solution, `score_accepted` for a worse solution accepted
/// through the annealing criterion. Scores accumulate over a segment of
/// `segment_length` iterations, after which operator weights are updated by
/// exponential smoothing with `reaction_factor` (Ropke & Pisinger 2006).
///
/// # Examples
///
/// ```
/// use heurlab::alns::AlnsConfig;
///
/// let config = AlnsConfig::default()
///     .with_max_iterations(2000)
///     .with_segment_length(100)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 2000);
/// ```
#[derive(Debug, Clone)]
pub struct AlnsConfig {
    /// Total number of iterations.
    pub max_iterations: usize,
    /// Iterations per adaptive-weight segment.
    pub segment_length: usize,
    /// Score for a new global best (sigma_1).
    pub score_new_best: f64,
    /// Score for improving the current solution (sigma_2).
    pub score_improved: f64,
    /// Score for an accepted worse solution (sigma_3).
    pub score_accepted: f64,
    /// Weight-update smoothing factor (rho), in (0, 1].
    pub reaction_factor: f64,
    /// Floor for operator weights so no operator starves.
    pub min_weight: f64,
    /// Minimum fraction of the solution destroyed per iteration.
    pub min_destroy_degree: f64,
    /// Maximum fraction of the solution destroyed per iteration.
    pub max_destroy_degree: f64,
    /// Starting temperature for the annealing acceptance criterion.
    pub initial_temperature: f64,
    /// Geometric cooling factor, in (0, 1).
    pub cooling_rate: f64,
    /// Temperature floor.
    pub min_temperature: f64,
    /// Random seed (`None` for a nondeterministic run).
    pub seed: Option<u64>,
}

impl Default for AlnsConfig {
    fn default() -> Self {
        Self {
            max_iterations: 5000,
            segment_length: 100,
            score_new_best: 33.0,
            score_improved: 9.0,
            score_accepted: 3.0,
            reaction_factor: 0.1,
            min_weight: 0.01,
            min_destroy_degree: 0.1,
            max_destroy_degree: 0.4,
            initial_temperature: 50_000.0,
            cooling_rate: 0.999,
            min_temperature: 1.0,
            seed: None,
        }
    }
}

impl AlnsConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_segment_length(mut self, n: usize) -> Self {
        self.segment_length = n.max(1);
        self
    }

    pub fn with_scores(mut self, new_best: f64, improved: f64, accepted: f64) -> Self {
        self.score_new_best = new_best;
        self.score_improved = improved;
        self.score_accepted = accepted;
        self
    }

    pub fn with_reaction_factor(mut self, rho: f64) -> Self {
        self.reaction_factor = rho;
        self
    }

    pub fn with_destroy_degree(mut self, min: f64, max: f64) -> Self {
        self.min_destroy_degree = min.clamp(0.0, 1.0);
        self.max_destroy_degree = max.clamp(self.min_destroy_degree, 1.0);
        self
    }

    pub fn with_temperature(mut self, initial: f64, cooling_rate: f64, min: f64) -> Self {
        self.initial_temperature = initial;
        self.cooling_rate = cooling_rate;
        self.min_temperature = min;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfig(
                "max_iterations must be positive".into(),
            ));
        }
        if self.reaction_factor <= 0.0 || self.reaction_factor > 1.0 {
            return Err(Error::InvalidConfig(format!(
                "reaction_factor must be in (0, 1], got {}",
                self.reaction_factor
            )));
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(Error::InvalidConfig(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if self.initial_temperature <= 0.0 || self.min_temperature <= 0.0 {
            return Err(Error::InvalidConfig("temperatures must be positive".into()));
        }
        if self.min_destroy_degree >= self.max_destroy_degree {
            return Err(Error::InvalidConfig(
                "min_destroy_degree must be < max_destroy_degree".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AlnsConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_iterations_rejected() {
        let config = AlnsConfig::default().with_max_iterations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn bad_reaction_factor_rejected() {
        assert!(AlnsConfig::default()
            .with_reaction_factor(0.0)
            .validate()
            .is_err());
        assert!(AlnsConfig::default()
            .with_reaction_factor(1.5)
            .validate()
            .is_err());
    }

    #[test]
    fn bad_cooling_rate_rejected() {
        assert!(AlnsConfig::default()
            .with_temperature(100.0, 1.0, 0.01)
            .validate()
            .is_err());
    }

    #[test]
    fn builder_chain() {
        let config = AlnsConfig::default()
            .with_max_iterations(500)
            .with_segment_length(50)
            .with_scores(10.0, 5.0, 1.0)
            .with_destroy_degree(0.2, 0.5)
            .with_seed(42);

        assert_eq!(config.max_iterations, 500);
        assert_eq!(config.segment_length, 50);
        assert!((config.score_new_best - 10.0).abs() < 1e-12);
        assert!((config.max_destroy_degree - 0.5).abs() < 1e-12);
        assert_eq!(config.seed, Some(42));
    }
}
