//! Brute-force exhaustive search.
//!
//! Enumerates every way to cut the sequence into contiguous teams and
//! keeps the best total. Deliberately unmemoized: this is the
//! exponential-time oracle the dynamic-programming solver is validated
//! against, not a production path. The driver gates it at `n <= 20`.

mod runner;

pub use runner::{BruteForceResult, BruteForceRunner};
