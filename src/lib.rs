//! Exact and heuristic solvers for contiguous team partitioning.
//!
//! An instance is an ordered sequence of employees, each carrying a
//! productivity when their team works in their favorite language, a
//! productivity otherwise, and the favorite language itself. A partition
//! cuts the sequence into contiguous, non-overlapping teams; a team is
//! scored by majority-language detection with a worst-case tie-break
//! (see [`scoring::team_score`]). The goal is the partition maximizing
//! total productivity.
//!
//! Four strategies are provided:
//!
//! - **Brute force**: exhaustive recursion over all partitions. The
//!   exponential correctness oracle for small instances.
//! - **Dynamic programming**: O(n^3) prefix DP, the reference optimum.
//!   Must agree with brute force on every input where brute force is
//!   feasible.
//! - **Greedy 1 (local max)**: forward scan taking the best-scoring team
//!   starting at the cursor. No backtracking, no optimality guarantee.
//! - **Greedy 2 (expansion)**: grows the current team one employee at a
//!   time, stopping at the first expansion that loses to a split.
//!
//! # Architecture
//!
//! All four solvers share the single pure scorer in [`scoring`] and read
//! the employee sequence by slice; nothing is mutated and nothing is
//! shared across invocations. [`strategy::Strategy`] is the tagged
//! dispatch consumed by the driver binary.

pub mod brute;
pub mod dynamic;
pub mod greedy_expand;
pub mod greedy_local;
pub mod instance;
pub mod scoring;
pub mod strategy;
