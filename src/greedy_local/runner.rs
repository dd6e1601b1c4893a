//! Forward scan taking the best local team.

use crate::instance::Employee;
use crate::scoring::team_score;

/// Result of a greedy run (shared by both greedy heuristics).
#[derive(Debug, Clone)]
pub struct GreedyResult {
    /// Total productivity achieved by the heuristic.
    pub best: i64,

    /// Number of teams the heuristic formed.
    pub teams_formed: usize,
}

/// Executes the local-maximization greedy.
pub struct GreedyLocalRunner;

impl GreedyLocalRunner {
    /// At each step scores every team end in `[cursor, n)`, takes the
    /// strictly greatest (first-seen wins ties), and advances past it.
    /// Empty input yields 0.
    pub fn run(employees: &[Employee]) -> GreedyResult {
        let n = employees.len();
        let mut total = 0i64;
        let mut teams_formed = 0usize;
        let mut cursor = 0usize;

        while cursor < n {
            let mut best_score = i64::MIN;
            let mut best_end = cursor;

            for end in cursor..n {
                let score = team_score(employees, cursor, end);
                if score > best_score {
                    best_score = score;
                    best_end = end;
                }
            }

            total += best_score;
            teams_formed += 1;
            cursor = best_end + 1;
        }

        GreedyResult {
            best: total,
            teams_formed,
        }
    }

    /// Convenience wrapper returning only the achieved value.
    pub fn solve(employees: &[Employee]) -> i64 {
        Self::run(employees).best
    }
}
