//! Experiment harness for comparing metaheuristic solvers.
//!
//! Runs two solver families over the same problem instance and performs a
//! paired statistical comparison of their objective values:
//!
//! - **ALNS**: Adaptive Large Neighborhood Search, destroy/repair operators
//!   with adaptive weight selection.
//! - **Tabu Search (TS)**: Single-solution trajectory optimization using
//!   short-term memory (tabu list) to escape local optima.
//!
//! # Pipeline
//!
//! The `solver` module produces one [`data::RunRecord`] per simulation
//! (or a logged `None` when a solver fails). Records accumulate in a CSV
//! table. The `analyze` module consumes that table: per-group normality
//! checks (Shapiro–Wilk), a paired Wilcoxon signed-rank comparison, plot
//! rendering, and finally a Markdown report with embedded plot links.
//!
//! The `data::sample` generator produces a deterministic synthetic table
//! shaped like real solver output, so the statistical pipeline can be
//! exercised without running the solvers at all.

pub mod alns;
pub mod analyze;
pub mod data;
pub mod error;
pub mod plots;
pub mod problem;
pub mod report;
pub mod solver;
pub mod stats;
pub mod tabu;

pub use error::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
