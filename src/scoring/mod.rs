//! The shared team scorer.
//!
//! A team is a contiguous inclusive range `[l, r]` of the employee
//! sequence. Its productivity is decided by majority-language detection:
//! the languages attaining the maximum favorite-language frequency in the
//! range are the candidates, and the team scores the **minimum** total
//! over those candidates (a worst-case tie-break: when several languages
//! are equally dominant, the team is scored by whichever choice is least
//! favorable). Under a candidate language each member contributes
//! `primary` if it is their favorite, `secondary` otherwise.
//!
//! All four solvers call this one pure function; none of them carries a
//! private copy of the rule.

use crate::instance::Employee;
use std::collections::HashMap;

/// A contiguous inclusive range of the employee sequence.
///
/// Derived and transient: teams have no identity beyond their bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamSpan {
    /// First employee index (inclusive).
    pub start: usize,
    /// Last employee index (inclusive).
    pub end: usize,
}

impl TeamSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of employees in the span. Never zero: the range is inclusive.
    pub fn size(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Scores the team `[l, r]`.
///
/// Single pass over the range: accumulates the all-`secondary` base sum
/// and, per language, the favorite-count and the `primary - secondary`
/// delta. A candidate language's total is then `base + delta[lang]`,
/// which equals the rescanning formulation exactly. The result is the
/// minimum total over the max-frequency candidates.
///
/// A single-employee team always scores its `primary` (its own language
/// is trivially the unique majority).
///
/// # Panics
///
/// Panics if `l > r` or `r` is out of bounds. An invalid range here is a
/// solver bug, never a runtime condition.
pub fn team_score(employees: &[Employee], l: usize, r: usize) -> i64 {
    assert!(
        l <= r && r < employees.len(),
        "invalid team range [{l}, {r}] for {} employees",
        employees.len()
    );

    let mut base = 0i64;
    let mut by_language: HashMap<&str, (usize, i64)> = HashMap::new();

    for e in &employees[l..=r] {
        base += e.secondary;
        let entry = by_language.entry(e.language.as_str()).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += e.primary - e.secondary;
    }

    let max_freq = by_language
        .values()
        .map(|&(count, _)| count)
        .max()
        .unwrap_or(0);

    by_language
        .values()
        .filter(|&&(count, _)| count == max_freq)
        .map(|&(_, delta)| base + delta)
        .min()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Employee;

    fn e(primary: i64, secondary: i64, language: &str) -> Employee {
        Employee::new(primary, secondary, language)
    }

    #[test]
    fn test_singleton_scores_primary() {
        let employees = vec![e(10, 3, "rust"), e(-2, 9, "go")];
        assert_eq!(team_score(&employees, 0, 0), 10);
        assert_eq!(team_score(&employees, 1, 1), -2);
    }

    #[test]
    fn test_unique_majority() {
        // "go" has frequency 2, "rust" 1. Majority is unique.
        let employees = vec![e(5, 1, "go"), e(7, 2, "go"), e(9, 4, "rust")];
        // Candidate "go": 5 + 7 + 4 = 16.
        assert_eq!(team_score(&employees, 0, 2), 16);
    }

    #[test]
    fn test_same_language_pair() {
        let employees = vec![e(5, 1, "go"), e(7, 2, "go")];
        assert_eq!(team_score(&employees, 0, 1), 12);
    }

    #[test]
    fn test_tie_takes_worst_candidate() {
        // Both languages have frequency 1.
        // Candidate "go":   10 + 10 = 20.
        // Candidate "rust":  1 +  1 =  2.
        let employees = vec![e(10, 1, "go"), e(1, 10, "rust")];
        assert_eq!(team_score(&employees, 0, 1), 2);
    }

    #[test]
    fn test_three_way_tie() {
        let employees = vec![e(10, 0, "a"), e(10, 0, "b"), e(10, 0, "c")];
        // Every candidate totals 10 (its own member's primary, zeros otherwise).
        assert_eq!(team_score(&employees, 0, 2), 10);
    }

    #[test]
    fn test_sub_range_ignores_outside_employees() {
        let employees = vec![e(100, 100, "cpp"), e(5, 1, "go"), e(7, 2, "go")];
        assert_eq!(team_score(&employees, 1, 2), 12);
    }

    #[test]
    fn test_matches_rescanning_formulation() {
        // Reference implementation: per-candidate rescan of the range.
        fn reference(employees: &[Employee], l: usize, r: usize) -> i64 {
            let mut freq: HashMap<&str, usize> = HashMap::new();
            for e in &employees[l..=r] {
                *freq.entry(e.language.as_str()).or_default() += 1;
            }
            let max_freq = *freq.values().max().unwrap();
            freq.iter()
                .filter(|&(_, &c)| c == max_freq)
                .map(|(&lang, _)| {
                    employees[l..=r]
                        .iter()
                        .map(|e| if e.language == lang { e.primary } else { e.secondary })
                        .sum()
                })
                .min()
                .unwrap()
        }

        use rand::rngs::StdRng;
        use rand::SeedableRng;
        let mut rng = StdRng::seed_from_u64(11);
        let employees = crate::instance::random_instance(&mut rng, 12, -20, 20);

        for l in 0..employees.len() {
            for r in l..employees.len() {
                assert_eq!(
                    team_score(&employees, l, r),
                    reference(&employees, l, r),
                    "mismatch on [{l}, {r}]"
                );
            }
        }
    }

    #[test]
    #[should_panic(expected = "invalid team range")]
    fn test_inverted_range_panics() {
        let employees = vec![e(1, 1, "go"), e(1, 1, "go")];
        team_score(&employees, 1, 0);
    }

    #[test]
    #[should_panic(expected = "invalid team range")]
    fn test_out_of_bounds_panics() {
        let employees = vec![e(1, 1, "go")];
        team_score(&employees, 0, 1);
    }

    #[test]
    fn test_span_size() {
        assert_eq!(TeamSpan::new(2, 2).size(), 1);
        assert_eq!(TeamSpan::new(0, 4).size(), 5);
    }
}
