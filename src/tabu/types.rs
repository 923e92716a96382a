//! Core trait for Tabu Search problems.

use rand::Rng;

/// A candidate move from the current solution to a neighbor.
///
/// The `key` identifies the move in the tabu list; moves that should be
/// considered equivalent must share a key.
#[derive(Debug, Clone)]
pub struct TabuMove<S: Clone> {
    /// The resulting solution after applying this move.
    pub solution: S,
    /// Key identifying this move for tabu tracking.
    pub key: String,
    /// Objective of the resulting solution.
    pub objective: f64,
}

/// Defines a combinatorial optimization problem for Tabu Search.
pub trait TabuProblem: Send + Sync {
    /// The solution representation.
    type Solution: Clone + Send;

    /// Creates an initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Evaluates a solution. Lower is better.
    fn objective(&self, solution: &Self::Solution) -> f64;

    /// Generates candidate moves from `solution`.
    ///
    /// The neighborhood need not be exhaustive; a random representative
    /// sample is acceptable.
    fn neighbors<R: Rng>(
        &self,
        solution: &Self::Solution,
        rng: &mut R,
    ) -> Vec<TabuMove<Self::Solution>>;
}
