//! Tabu Search execution engine.
//!
//! Each iteration evaluates the neighborhood, takes the best admissible
//! move (non-tabu, or tabu but meeting the aspiration criterion), records
//! its key in a fixed-tenure FIFO list, and tracks the global best. The
//! search stops at `max_iterations` or after `max_no_improve` stagnant
//! iterations. Like the rest of the harness it is synchronous and has no
//! cancellation path.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing*
//! 1(3), 190-206.

use std::collections::{HashSet, VecDeque};

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::TabuConfig;
use super::types::TabuProblem;
use crate::error::Error;

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult<S: Clone> {
    /// Best solution found.
    pub best: S,
    /// Objective of the best solution.
    pub best_objective: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the best solution was found.
    pub best_iteration: usize,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search on the given problem.
    pub fn run<P: TabuProblem>(
        problem: &P,
        config: &TabuConfig,
    ) -> Result<TabuResult<P::Solution>, Error> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut current = problem.initial_solution(&mut rng);
        let mut best = current.clone();
        let mut best_obj = problem.objective(&current);
        let mut best_iteration = 0;

        // FIFO tenure queue with a set for O(1) membership checks.
        let mut tabu_queue: VecDeque<String> = VecDeque::new();
        let mut tabu_set: HashSet<String> = HashSet::new();

        let mut iterations = 0;
        let mut stagnant = 0;

        for iteration in 0..config.max_iterations {
            iterations = iteration + 1;
            let neighbors = problem.neighbors(&current, &mut rng);
            if neighbors.is_empty() {
                break;
            }

            let mut chosen = None;
            let mut chosen_obj = f64::INFINITY;

            for mv in &neighbors {
                if tabu_set.contains(&mv.key) {
                    let aspires = config.aspiration && mv.objective < best_obj;
                    if !aspires {
                        continue;
                    }
                }
                if mv.objective < chosen_obj {
                    chosen_obj = mv.objective;
                    chosen = Some(mv);
                }
            }

            // All moves tabu and none aspires: take the least bad one
            // rather than stalling.
            if chosen.is_none() {
                for mv in &neighbors {
                    if mv.objective < chosen_obj {
                        chosen_obj = mv.objective;
                        chosen = Some(mv);
                    }
                }
            }

            if let Some(mv) = chosen {
                if tabu_queue.len() >= config.tabu_tenure {
                    if let Some(expired) = tabu_queue.pop_front() {
                        tabu_set.remove(&expired);
                    }
                }
                tabu_queue.push_back(mv.key.clone());
                tabu_set.insert(mv.key.clone());

                current = mv.solution.clone();

                if mv.objective < best_obj {
                    best = current.clone();
                    best_obj = mv.objective;
                    best_iteration = iteration;
                    stagnant = 0;
                } else {
                    stagnant += 1;
                }
            } else {
                stagnant += 1;
            }

            if stagnant >= config.max_no_improve {
                break;
            }
        }

        Ok(TabuResult {
            best,
            best_objective: best_obj,
            iterations,
            best_iteration,
        })
    }
}
