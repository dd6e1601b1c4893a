//! Exhaustive recursion over all partitions.

use crate::instance::Employee;
use crate::scoring::team_score;

/// Result of a brute-force run.
#[derive(Debug, Clone)]
pub struct BruteForceResult {
    /// Maximum total productivity over all partitions.
    pub best: i64,

    /// Number of complete partitions enumerated (2^(n-1) for n >= 1).
    pub partitions_explored: u64,
}

/// Executes the exhaustive search.
pub struct BruteForceRunner;

impl BruteForceRunner {
    /// Enumerates every partition of `employees` and returns the best
    /// total with enumeration statistics. Empty input yields 0.
    ///
    /// Exponential in `n`; recursion depth is bounded by `n`.
    pub fn run(employees: &[Employee]) -> BruteForceResult {
        let mut partitions_explored = 0u64;
        let best = best_from(employees, 0, &mut partitions_explored);
        BruteForceResult {
            best,
            partitions_explored,
        }
    }

    /// Convenience wrapper returning only the achieved value.
    pub fn solve(employees: &[Employee]) -> i64 {
        Self::run(employees).best
    }
}

/// Optimal total productivity for the suffix `employees[start..]`.
///
/// `best(start) = max over end in [start, n) of
///     score(start, end) + best(end + 1)`, with `best(n) = 0`.
fn best_from(employees: &[Employee], start: usize, partitions: &mut u64) -> i64 {
    let n = employees.len();
    if start >= n {
        *partitions += 1;
        return 0;
    }

    let mut best = i64::MIN;
    for end in start..n {
        let team = team_score(employees, start, end);
        let rest = best_from(employees, end + 1, partitions);
        best = best.max(team + rest);
    }
    best
}
