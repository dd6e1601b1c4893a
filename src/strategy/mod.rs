//! Strategy selection and measured runs.
//!
//! The four solvers are dispatched through one tagged enum so that the
//! driver, tests, and benches all name strategies the same way. A
//! measured run additionally records wall-clock time and the peak-RSS
//! delta around the solver call (read from `/proc/self/status`).

use crate::brute::BruteForceRunner;
use crate::dynamic::DpRunner;
use crate::greedy_expand::GreedyExpandRunner;
use crate::greedy_local::GreedyLocalRunner;
use crate::instance::Employee;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

/// A partitioning strategy, selectable by external name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Exhaustive search; feasible only for small instances.
    BruteForce,
    /// Position-local maximization heuristic.
    Greedy1,
    /// Incremental-expansion heuristic.
    Greedy2,
    /// Polynomial-time optimum.
    DynamicProgramming,
}

impl Strategy {
    /// Every strategy, in the driver's execution order.
    pub fn all() -> [Strategy; 4] {
        [
            Strategy::BruteForce,
            Strategy::Greedy1,
            Strategy::Greedy2,
            Strategy::DynamicProgramming,
        ]
    }

    /// The external name used on the command line and in output files.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BruteForce => "brute-force",
            Strategy::Greedy1 => "greedy1",
            Strategy::Greedy2 => "greedy2",
            Strategy::DynamicProgramming => "dynamic-programming",
        }
    }

    /// Runs the strategy and returns the achieved total productivity.
    pub fn solve(&self, employees: &[Employee]) -> i64 {
        match self {
            Strategy::BruteForce => BruteForceRunner::solve(employees),
            Strategy::Greedy1 => GreedyLocalRunner::solve(employees),
            Strategy::Greedy2 => GreedyExpandRunner::solve(employees),
            Strategy::DynamicProgramming => DpRunner::solve(employees),
        }
    }

    /// Runs the strategy under timing and memory instrumentation.
    pub fn run_measured(&self, employees: &[Employee]) -> StrategyReport {
        let rss_before = peak_rss_kb().unwrap_or(0);
        let started = Instant::now();
        let result = self.solve(employees);
        let elapsed = started.elapsed();
        let rss_after = peak_rss_kb().unwrap_or(0);

        StrategyReport {
            strategy: *self,
            n: employees.len(),
            result,
            time_ms: elapsed.as_secs_f64() * 1_000.0,
            memory_kb: rss_after.saturating_sub(rss_before),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized strategy name.
#[derive(Debug, thiserror::Error)]
#[error("unknown strategy {0:?} (expected brute-force, greedy1, greedy2, or dynamic-programming)")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brute-force" => Ok(Strategy::BruteForce),
            "greedy1" => Ok(Strategy::Greedy1),
            "greedy2" => Ok(Strategy::Greedy2),
            "dynamic-programming" => Ok(Strategy::DynamicProgramming),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

/// One measured solver invocation.
#[derive(Debug, Clone)]
pub struct StrategyReport {
    /// The strategy that ran.
    pub strategy: Strategy,
    /// Instance size.
    pub n: usize,
    /// Achieved total productivity.
    pub result: i64,
    /// Wall-clock time of the solver call.
    pub time_ms: f64,
    /// Peak-RSS growth across the call, in kilobytes. Zero when the run
    /// did not raise the process high-water mark.
    pub memory_kb: u64,
}

/// Reads the process peak RSS (`VmHWM`) in kilobytes.
///
/// Returns `None` off Linux or if the field is missing; measurement is
/// best-effort and never fails a run.
fn peak_rss_kb() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    parse_peak_rss_kb(&status)
}

fn parse_peak_rss_kb(status: &str) -> Option<u64> {
    status
        .lines()
        .find(|line| line.starts_with("VmHWM:"))
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|kb| kb.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Employee;

    fn e(primary: i64, secondary: i64, language: &str) -> Employee {
        Employee::new(primary, secondary, language)
    }

    #[test]
    fn test_round_trip_names() {
        for strategy in Strategy::all() {
            assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "simulated-annealing".parse::<Strategy>().unwrap_err();
        assert!(err.to_string().contains("simulated-annealing"));
    }

    #[test]
    fn test_all_strategies_agree_on_singleton() {
        let employees = vec![e(10, 3, "rust")];
        for strategy in Strategy::all() {
            assert_eq!(strategy.solve(&employees), 10, "{strategy} diverged");
        }
    }

    #[test]
    fn test_all_strategies_return_zero_on_empty_input() {
        for strategy in Strategy::all() {
            assert_eq!(strategy.solve(&[]), 0, "{strategy} diverged");
        }
    }

    #[test]
    fn test_run_measured_reports_result() {
        let employees = vec![e(5, 1, "go"), e(7, 2, "go")];
        let report = Strategy::DynamicProgramming.run_measured(&employees);

        assert_eq!(report.result, 12);
        assert_eq!(report.n, 2);
        assert!(report.time_ms >= 0.0);
    }

    #[test]
    fn test_parse_peak_rss() {
        let status = "Name:\tteamcut\nVmHWM:\t    5248 kB\nVmRSS:\t    5120 kB\n";
        assert_eq!(parse_peak_rss_kb(status), Some(5248));
    }

    #[test]
    fn test_parse_peak_rss_missing_field() {
        assert_eq!(parse_peak_rss_kb("Name:\tteamcut\n"), None);
    }
}
