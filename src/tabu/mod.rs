//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic using short-term memory
//! (the tabu list) to forbid recently applied moves, preventing cycling
//! and pushing the search out of local optima.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;
mod types;

pub use config::TabuConfig;
pub use runner::{TabuResult, TabuRunner};
pub use types::{TabuMove, TabuProblem};
