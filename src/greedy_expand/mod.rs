//! Greedy 2: incremental expansion.
//!
//! Grows the current team one employee at a time, accepting an expansion
//! whenever the expanded team scores at least as much as the current
//! team plus the candidate as a standalone singleton, and closing the
//! team at the **first** rejection. The first-rejection stop is a policy
//! choice kept for reproducibility, not a bug; its approximation ratio
//! is unbounded on adversarial inputs.

mod runner;

pub use crate::greedy_local::GreedyResult;
pub use runner::GreedyExpandRunner;
