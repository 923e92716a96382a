//! ALNS execution loop.
//!
//! Strictly synchronous: the loop runs to `max_iterations` and there is no
//! cancellation or timeout path. Callers that need bounded wall-clock time
//! size `max_iterations` accordingly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::AlnsConfig;
use super::types::{AlnsProblem, DestroyOperator, RepairOperator};
use crate::error::Error;

/// Result of an ALNS optimization run.
#[derive(Debug, Clone)]
pub struct AlnsResult<S: Clone> {
    /// Best solution found.
    pub best: S,
    /// Objective of the best solution.
    pub best_objective: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Number of new global bests found.
    pub improvements: usize,
    /// Final destroy operator weights.
    pub destroy_weights: Vec<f64>,
    /// Final repair operator weights.
    pub repair_weights: Vec<f64>,
}

/// Per-operator score accumulator for the adaptive weight scheme.
#[derive(Debug, Clone)]
struct OperatorWeight {
    weight: f64,
    score: f64,
    uses: usize,
}

impl OperatorWeight {
    fn new() -> Self {
        Self {
            weight: 1.0,
            score: 0.0,
            uses: 0,
        }
    }

    fn record(&mut self, score: f64) {
        self.score += score;
        self.uses += 1;
    }

    /// End-of-segment exponential smoothing:
    /// w <- w * (1 - rho) + rho * (pi / theta), floored at `min_weight`.
    fn roll_segment(&mut self, rho: f64, min_weight: f64) {
        if self.uses > 0 {
            let avg = self.score / self.uses as f64;
            self.weight = (self.weight * (1.0 - rho) + avg * rho).max(min_weight);
        }
        self.score = 0.0;
        self.uses = 0;
    }
}

/// Roulette-wheel selection over operator weights.
fn spin<R: Rng>(stats: &[OperatorWeight], rng: &mut R) -> usize {
    let total: f64 = stats.iter().map(|s| s.weight).sum();
    if total <= 0.0 || stats.is_empty() {
        return 0;
    }
    let mut roll = rng.random_range(0.0..total);
    for (i, stat) in stats.iter().enumerate() {
        roll -= stat.weight;
        if roll <= 0.0 {
            return i;
        }
    }
    stats.len() - 1
}

/// Executes the ALNS algorithm.
pub struct AlnsRunner;

impl AlnsRunner {
    /// Runs ALNS on `problem` with the given operator pools.
    ///
    /// Returns an error if the configuration is invalid or either operator
    /// pool is empty; the optimization itself cannot fail.
    pub fn run<P, D, RP>(
        problem: &P,
        destroy_ops: &[D],
        repair_ops: &[RP],
        config: &AlnsConfig,
    ) -> Result<AlnsResult<P::Solution>, Error>
    where
        P: AlnsProblem,
        D: DestroyOperator<P::Solution>,
        RP: RepairOperator<P::Solution>,
    {
        config.validate()?;
        if destroy_ops.is_empty() || repair_ops.is_empty() {
            return Err(Error::InvalidConfig(
                "at least one destroy and one repair operator required".into(),
            ));
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut current = problem.initial_solution(&mut rng);
        let mut current_obj = problem.objective(&current);
        let mut best = current.clone();
        let mut best_obj = current_obj;

        let mut destroy_stats: Vec<OperatorWeight> =
            destroy_ops.iter().map(|_| OperatorWeight::new()).collect();
        let mut repair_stats: Vec<OperatorWeight> =
            repair_ops.iter().map(|_| OperatorWeight::new()).collect();

        let mut temperature = config.initial_temperature;
        let mut improvements = 0usize;

        for iteration in 0..config.max_iterations {
            let d_idx = spin(&destroy_stats, &mut rng);
            let r_idx = spin(&repair_stats, &mut rng);
            let degree =
                rng.random_range(config.min_destroy_degree..config.max_destroy_degree);

            let partial = destroy_ops[d_idx].destroy(&current, degree, &mut rng);
            let candidate = repair_ops[r_idx].repair(&partial, &mut rng);
            let candidate_obj = problem.objective(&candidate);

            let (accepted, score) = if candidate_obj < best_obj {
                best = candidate.clone();
                best_obj = candidate_obj;
                improvements += 1;
                (true, config.score_new_best)
            } else if candidate_obj < current_obj {
                (true, config.score_improved)
            } else {
                let delta = candidate_obj - current_obj;
                let accept_prob = if temperature > 0.0 {
                    (-delta / temperature).exp()
                } else {
                    0.0
                };
                if rng.random_range(0.0..1.0) < accept_prob {
                    (true, config.score_accepted)
                } else {
                    (false, 0.0)
                }
            };

            if accepted {
                current = candidate;
                current_obj = candidate_obj;
            }

            destroy_stats[d_idx].record(score);
            repair_stats[r_idx].record(score);

            temperature = (temperature * config.cooling_rate).max(config.min_temperature);

            if (iteration + 1) % config.segment_length == 0 {
                for stat in destroy_stats.iter_mut().chain(repair_stats.iter_mut()) {
                    stat.roll_segment(config.reaction_factor, config.min_weight);
                }
            }
        }

        Ok(AlnsResult {
            best,
            best_objective: best_obj,
            iterations: config.max_iterations,
            improvements,
            destroy_weights: destroy_stats.iter().map(|s| s.weight).collect(),
            repair_weights: repair_stats.iter().map(|s| s.weight).collect(),
        })
    }
}
