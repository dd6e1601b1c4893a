//! Expand-while-beneficial team growth.

use crate::greedy_local::GreedyResult;
use crate::instance::Employee;
use crate::scoring::team_score;

/// Executes the incremental-expansion greedy.
pub struct GreedyExpandRunner;

impl GreedyExpandRunner {
    /// Grows a team from the cursor: candidate `next` is absorbed when
    /// `score(cursor, next) >= score(cursor, team_end) + score(next, next)`,
    /// and the team closes at the first rejection. Empty input yields 0.
    pub fn run(employees: &[Employee]) -> GreedyResult {
        let n = employees.len();
        let mut total = 0i64;
        let mut teams_formed = 0usize;
        let mut cursor = 0usize;

        while cursor < n {
            let mut team_end = cursor;

            for next in cursor + 1..n {
                let current = team_score(employees, cursor, team_end);
                let standalone = team_score(employees, next, next);
                let expanded = team_score(employees, cursor, next);

                if expanded >= current + standalone {
                    team_end = next;
                } else {
                    break;
                }
            }

            total += team_score(employees, cursor, team_end);
            teams_formed += 1;
            cursor = team_end + 1;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::DpRunner;
    use crate::instance::{random_instance, Employee};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn e(primary: i64, secondary: i64, language: &str) -> Employee {
        Employee::new(primary, secondary, language)
    }

    #[test]
    fn test_empty_input() {
        let result = GreedyExpandRunner::run(&[]);
        assert_eq!(result.best, 0);
        assert_eq!(result.teams_formed, 0);
    }

    #[test]
    fn test_single_employee() {
        let result = GreedyExpandRunner::run(&[e(10, 3, "rust")]);
        assert_eq!(result.best, 10);
        assert_eq!(result.teams_formed, 1);
    }

    #[test]
    fn test_expands_on_equal_score() {
        // Expansion: score(0,1) = 12 vs 5 + 7 = 12; >= accepts it.
        let employees = vec![e(5, 1, "go"), e(7, 2, "go")];
        let result = GreedyExpandRunner::run(&employees);
        assert_eq!(result.best, 12);
        assert_eq!(result.teams_formed, 1);
    }

    #[test]
    fn test_rejects_harmful_expansion() {
        // score(0,1) = min(20, 2) = 2 < 10 + 1; the candidate is rejected
        // and both employees end up as singletons.
        let employees = vec![e(10, 1, "go"), e(1, 10, "rust")];
        let result = GreedyExpandRunner::run(&employees);
        assert_eq!(result.best, 11);
        assert_eq!(result.teams_formed, 2);
    }

    #[test]
    fn test_stops_at_first_rejection() {
        // Employee 1 is rejected from the first team, so the scan must
        // not look past it even though employee 2 shares employee 0's
        // language. Three teams, not two.
        let employees = vec![e(10, 0, "go"), e(1, 10, "rust"), e(10, 0, "go")];
        let result = GreedyExpandRunner::run(&employees);
        assert_eq!(result.teams_formed, 3);
        // Rejected singleton restarts the team at index 1: [1,2] is
        // considered next. score(1,2) = min(1 + 0, 10 + 10) = 1 < 1 + 10,
        // so it is rejected too.
        assert_eq!(result.best, 21);
    }

    #[test]
    fn test_never_beats_dp() {
        let mut rng = StdRng::seed_from_u64(302);
        for _ in 0..100 {
            let n = rng.random_range(0..=25);
            let employees = random_instance(&mut rng, n, -40, 40);
            assert!(
                GreedyExpandRunner::solve(&employees) <= DpRunner::solve(&employees),
                "heuristic beat the optimum on {employees:?}"
            );
        }
    }
}
