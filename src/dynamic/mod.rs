//! Dynamic-programming optimum.
//!
//! Polynomial-time reference solver: `dp[i]` is the best total for the
//! first `i` employees, and the last team of an optimal prefix partition
//! is tried at every possible start. O(n^2) transitions, each paying one
//! O(n) scorer call. Its agreement with the brute-force oracle on every
//! feasible input is the primary correctness property of the crate.

mod runner;

pub use runner::{DpResult, DpRunner};
