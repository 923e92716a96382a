//! Adaptive Large Neighborhood Search (ALNS).
//!
//! Destroy/repair metaheuristic with adaptive operator weights and a
//! simulated-annealing acceptance criterion.
//!
//! # References
//!
//! Ropke, S. & Pisinger, D. (2006). "An Adaptive Large Neighborhood Search
//! Heuristic for the Pickup and Delivery Problem with Time Windows",
//! *Transportation Science* 40(4), 455-472.

mod config;
mod runner;
mod types;

pub use config::AlnsConfig;
pub use runner::{AlnsResult, AlnsRunner};
pub use types::{AlnsProblem, DestroyOperator, RepairOperator};
