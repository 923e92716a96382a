//! Tabu Search configuration.

use crate::error::Error;

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use heurlab::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_tenure(7);
/// assert_eq!(config.tabu_tenure, 7);
/// ```
#[derive(Debug, Clone)]
pub struct TabuConfig {
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// How many iterations a move key stays tabu.
    pub tabu_tenure: usize,
    /// Allow a tabu move that produces a new global best.
    pub aspiration: bool,
    /// Stop after this many iterations without improving the global best.
    pub max_no_improve: usize,
    /// Random seed (`None` for a nondeterministic run).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 2000,
            tabu_tenure: 9,
            aspiration: true,
            max_no_improve: 300,
            seed: None,
        }
    }
}

impl TabuConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
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
        if self.tabu_tenure == 0 {
            return Err(Error::InvalidConfig("tabu_tenure must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(TabuConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_tenure_rejected() {
        assert!(TabuConfig::default().with_tabu_tenure(0).validate().is_err());
    }

    #[test]
    fn builder_chain() {
        let config = TabuConfig::default()
            .with_max_iterations(1000)
            .with_tabu_tenure(10)
            .with_aspiration(false)
            .with_max_no_improve(50)
            .with_seed(123);

        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.tabu_tenure, 10);
        assert!(!config.aspiration);
        assert_eq!(config.max_no_improve, 50);
        assert_eq!(config.seed, Some(123));
    }
}
