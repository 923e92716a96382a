//! Error taxonomy for the experiment harness.

use std::path::PathBuf;

/// Errors surfaced by the harness.
///
/// Solver failures are deliberately *not* represented here at the pipeline
/// level: [`crate::solver::run_once`] catches them, logs the chain, and
/// returns `None`. File I/O failures propagate and terminate the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("CSV error")]
    Csv(#[from] csv::Error),

    #[error("invalid solver configuration: {0}")]
    InvalidConfig(String),

    #[error("solver produced no solution: {0}")]
    SolverFailed(String),

    #[error("no rows for algorithm {0} in results table")]
    EmptyGroup(String),

    #[error("sample has no variance, normality test undefined")]
    DegenerateSample,

    #[error("paired test requires at least one non-zero difference")]
    AllZeroDifferences,

    #[error("paired test requires non-empty sequences")]
    EmptyPairedSample,

    #[error("failed to render plot {path}: {message}")]
    Plot { path: PathBuf, message: String },
}
