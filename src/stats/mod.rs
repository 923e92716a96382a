//! Statistical comparison toolkit.
//!
//! Descriptive summaries, a Shapiro–Wilk normality check, the paired
//! Wilcoxon signed-rank test, and the algorithm-vs-algorithm comparison
//! built on top of them.

mod compare;
mod descriptive;
mod normality;
mod wilcoxon;

pub use compare::{compare_algorithms, ComparisonResult, OneTailed, TwoTailed};
pub use descriptive::{mean, median, std_pop, Summary};
pub use normality::{check_normality, NormalityResult};
pub use wilcoxon::{signed_rank_test, WilcoxonOutcome};

/// Significance threshold shared by every test in the pipeline.
pub const ALPHA: f64 = 0.05;
