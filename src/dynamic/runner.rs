//! Prefix DP over team start positions.

use crate::instance::Employee;
use crate::scoring::{team_score, TeamSpan};

/// Result of a dynamic-programming run.
#[derive(Debug, Clone)]
pub struct DpResult {
    /// Maximum total productivity over all partitions.
    pub best: i64,

    /// The optimal partition, in increasing order of spans.
    ///
    /// Populated by [`DpRunner::run_with_partition`]; `None` from the
    /// plain [`DpRunner::run`], which skips argmax tracking.
    pub partition: Option<Vec<TeamSpan>>,
}

/// Executes the dynamic program.
pub struct DpRunner;

impl DpRunner {
    /// Computes the optimal total productivity.
    ///
    /// `dp[0] = 0`; `dp[i] = max over j in [0, i) of
    /// dp[j] + score(j, i - 1)`, with prefixes processed in increasing
    /// order. Empty input yields 0.
    pub fn run(employees: &[Employee]) -> DpResult {
        let (best, _) = Self::fill_table(employees, false);
        DpResult {
            best,
            partition: None,
        }
    }

    /// Like [`DpRunner::run`], additionally reconstructing one optimal
    /// partition from a parallel argmax table.
    ///
    /// When several `j` reach the same `dp[i]`, the first maximal `j` in
    /// scan order is kept; any choice yields the same value.
    pub fn run_with_partition(employees: &[Employee]) -> DpResult {
        let (best, argmax) = Self::fill_table(employees, true);

        let mut spans = Vec::new();
        let mut i = employees.len();
        while i > 0 {
            let j = argmax[i];
            spans.push(TeamSpan::new(j, i - 1));
            i = j;
        }
        spans.reverse();

        DpResult {
            best,
            partition: Some(spans),
        }
    }

    /// Convenience wrapper returning only the achieved value.
    pub fn solve(employees: &[Employee]) -> i64 {
        Self::run(employees).best
    }

    fn fill_table(employees: &[Employee], track_argmax: bool) -> (i64, Vec<usize>) {
        let n = employees.len();
        let mut dp = vec![0i64; n + 1];
        let mut argmax = if track_argmax { vec![0usize; n + 1] } else { Vec::new() };

        for i in 1..=n {
            let mut best = i64::MIN;
            let mut best_j = 0;
            for j in 0..i {
                let candidate = dp[j] + team_score(employees, j, i - 1);
                if candidate > best {
                    best = candidate;
                    best_j = j;
                }
            }
            dp[i] = best;
            if track_argmax {
                argmax[i] = best_j;
            }
        }

        (dp[n], argmax)
    }
}
