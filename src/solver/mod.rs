//! Typed solver boundary.
//!
//! The two algorithms under comparison sit behind the [`Solver`] trait:
//! `solve` runs one full optimization synchronously and reports the final
//! objective value together with elapsed wall-clock time. [`run_once`] is
//! the invoker used by the experiment loop: it catches any solver failure,
//! logs it, and yields `None` so a failed run is excluded from aggregation
//! instead of aborting the experiment.

mod runtime;

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::alns::{AlnsConfig, AlnsRunner};
use crate::data::RunRecord;
use crate::error::Error;
use crate::problem::{FreightDestroy, FreightRepair};
use crate::tabu::{TabuConfig, TabuRunner};

pub use runtime::{RuntimeConfig, SolverRuntime};

/// The algorithms under comparison.
///
/// The serialized names are the exact strings used in the results CSV and
/// the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "ALNS")]
    Alns,
    #[serde(rename = "TabuSearch")]
    TabuSearch,
}

impl Algorithm {
    /// Display label, also the CSV group key.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Alns => "ALNS",
            Algorithm::TabuSearch => "TabuSearch",
        }
    }

    /// Lowercase file-name stem used for per-algorithm plot files.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Algorithm::Alns => "alns",
            Algorithm::TabuSearch => "tabusearch",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alns" | "ALNS" => Ok(Algorithm::Alns),
            "tabu" | "TabuSearch" => Ok(Algorithm::TabuSearch),
            other => Err(Error::InvalidConfig(format!("unknown algorithm: {other}"))),
        }
    }
}

/// Outcome of one solver invocation.
#[derive(Debug, Clone, Copy)]
pub struct Solved {
    /// Final objective value.
    pub objective_value: f64,
    /// Wall-clock time spent solving.
    pub elapsed: Duration,
}

/// A solver that can be invoked against the shared runtime.
pub trait Solver {
    /// Which algorithm this solver implements.
    fn algorithm(&self) -> Algorithm;

    /// Runs one full optimization synchronously. Blocks until done; there
    /// is no timeout or cancellation.
    fn solve(&self, rt: &SolverRuntime) -> Result<Solved, Error>;
}

/// ALNS adapter over [`AlnsRunner`].
pub struct AlnsSolver {
    config: AlnsConfig,
}

impl AlnsSolver {
    pub fn new(config: AlnsConfig) -> Self {
        Self { config }
    }
}

impl Default for AlnsSolver {
    fn default() -> Self {
        Self::new(AlnsConfig::default())
    }
}

impl Solver for AlnsSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Alns
    }

    fn solve(&self, rt: &SolverRuntime) -> Result<Solved, Error> {
        let instance = rt.instance();
        let destroy = [
            FreightDestroy::random(instance),
            FreightDestroy::costliest(instance),
        ];
        let repair = [
            FreightRepair::greedy(instance),
            FreightRepair::scatter(instance),
        ];

        let start = Instant::now();
        let result = AlnsRunner::run(instance, &destroy, &repair, &self.config)?;
        Ok(Solved {
            objective_value: result.best_objective,
            elapsed: start.elapsed(),
        })
    }
}

/// Tabu Search adapter over [`TabuRunner`].
pub struct TabuSolver {
    config: TabuConfig,
}

impl TabuSolver {
    pub fn new(config: TabuConfig) -> Self {
        Self { config }
    }
}

impl Default for TabuSolver {
    fn default() -> Self {
        Self::new(TabuConfig::default())
    }
}

impl Solver for TabuSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::TabuSearch
    }

    fn solve(&self, rt: &SolverRuntime) -> Result<Solved, Error> {
        let start = Instant::now();
        let result = TabuRunner::run(rt.instance(), &self.config)?;
        Ok(Solved {
            objective_value: result.best_objective,
            elapsed: start.elapsed(),
        })
    }
}

/// Default-configured solver for `algorithm`.
pub fn solver_for(algorithm: Algorithm) -> Box<dyn Solver> {
    match algorithm {
        Algorithm::Alns => Box::new(AlnsSolver::default()),
        Algorithm::TabuSearch => Box::new(TabuSolver::default()),
    }
}

/// Invokes one simulation of `algorithm` against the runtime.
///
/// Any failure inside the solver is caught here, logged with its error
/// chain, and surfaced as `None`. Callers must treat `None` as "run
/// failed" and keep it out of aggregation. There is no retry.
pub fn run_once(rt: &SolverRuntime, algorithm: Algorithm, simulation_id: u32) -> Option<RunRecord> {
    let solver = solver_for(algorithm);
    info!(%algorithm, simulation_id, "running simulation");

    match solver.solve(rt) {
        Ok(solved) => {
            let runtime_seconds = solved.elapsed.as_secs_f64();
            info!(
                %algorithm,
                simulation_id,
                objective_value = solved.objective_value,
                runtime_seconds,
                "simulation completed"
            );
            Some(RunRecord {
                algorithm,
                simulation_id,
                objective_value: solved.objective_value,
                runtime_seconds,
            })
        }
        Err(e) => {
            error!(%algorithm, simulation_id, error = %e, "simulation failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_runtime() -> SolverRuntime {
        SolverRuntime::acquire(&RuntimeConfig {
            n_packages: 30,
            n_flights: 4,
            instance_seed: 3,
        })
    }

    fn fast_alns() -> AlnsSolver {
        AlnsSolver::new(AlnsConfig::default().with_max_iterations(200).with_seed(42))
    }

    fn fast_tabu() -> TabuSolver {
        TabuSolver::new(
            TabuConfig::default()
                .with_max_iterations(100)
                .with_max_no_improve(40)
                .with_seed(42),
        )
    }

    #[test]
    fn algorithm_labels_round_trip() {
        assert_eq!(Algorithm::Alns.label(), "ALNS");
        assert_eq!(Algorithm::TabuSearch.label(), "TabuSearch");
        assert_eq!("alns".parse::<Algorithm>().unwrap(), Algorithm::Alns);
        assert_eq!("tabu".parse::<Algorithm>().unwrap(), Algorithm::TabuSearch);
        assert_eq!(
            "TabuSearch".parse::<Algorithm>().unwrap(),
            Algorithm::TabuSearch
        );
        assert!("simplex".parse::<Algorithm>().is_err());
    }

    #[test]
    fn solvers_produce_finite_objectives() {
        let rt = small_runtime();

        let alns = fast_alns().solve(&rt).expect("alns solve");
        assert!(alns.objective_value.is_finite());
        assert!(alns.objective_value >= 0.0);

        let tabu = fast_tabu().solve(&rt).expect("tabu solve");
        assert!(tabu.objective_value.is_finite());
        assert!(tabu.objective_value >= 0.0);
    }

    #[test]
    fn invalid_config_surfaces_as_error() {
        let rt = small_runtime();
        let broken = AlnsSolver::new(AlnsConfig::default().with_max_iterations(0));
        assert!(broken.solve(&rt).is_err());
    }

    #[test]
    fn run_once_yields_a_record() {
        let rt = small_runtime();
        let record = run_once(&rt, Algorithm::TabuSearch, 1);
        let record = record.expect("tabu run should succeed");
        assert_eq!(record.algorithm, Algorithm::TabuSearch);
        assert_eq!(record.simulation_id, 1);
        assert!(record.objective_value >= 0.0);
        assert!(record.runtime_seconds >= 0.0);
    }
}
