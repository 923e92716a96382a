//! Core traits for ALNS.

use rand::Rng;

/// A destroy operator removes part of a solution.
///
/// The `degree` parameter controls how much of the solution is torn down
/// (0.0 = nothing, 1.0 = everything); the repair phase rebuilds the gaps.
pub trait DestroyOperator<S>: Send + Sync {
    /// Human-readable operator name (used in logs).
    fn name(&self) -> &str;

    /// Returns a partially destroyed copy of `solution`.
    fn destroy<R: Rng>(&self, solution: &S, degree: f64, rng: &mut R) -> S;
}

/// A repair operator reconstructs a partially destroyed solution.
pub trait RepairOperator<S>: Send + Sync {
    /// Human-readable operator name (used in logs).
    fn name(&self) -> &str;

    /// Returns a complete solution rebuilt from `solution`.
    fn repair<R: Rng>(&self, solution: &S, rng: &mut R) -> S;
}

/// Defines an ALNS optimization problem.
///
/// The implementor supplies initial-solution construction and objective
/// evaluation; destroy and repair operators are passed to the runner
/// separately.
pub trait AlnsProblem: Send + Sync {
    /// The solution representation.
    type Solution: Clone + Send;

    /// Creates a random initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Evaluates a solution. Lower is better.
    fn objective(&self, solution: &Self::Solution) -> f64;
}
