//! Greedy 1: position-local maximization.
//!
//! From the current cursor, every possible team end is scored and the
//! best one is taken; the cursor then jumps past it. Decisions are never
//! reconsidered, so the heuristic can be arbitrarily far from the
//! optimum on adversarial inputs.

mod runner;

pub use runner::{GreedyLocalRunner, GreedyResult};
