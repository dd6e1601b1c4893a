//! Driver harness: runs the requested strategies over an instance file,
//! measures each run, and writes result and measurement files.

use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use teamcut::instance::read_instance;
use teamcut::strategy::Strategy;

/// Brute-force is skipped by `all` above this size; it stays available
/// by explicit name for anyone willing to wait.
const BRUTE_FORCE_LIMIT: usize = 20;

#[derive(Debug, Parser)]
#[command(name = "teamcut", about = "Compare team-partitioning strategies on an instance file.")]
struct Args {
    /// Instance file: a count n followed by n `primary secondary language` records.
    input: PathBuf,

    /// Strategy to run: brute-force, greedy1, greedy2, dynamic-programming, or all.
    #[arg(default_value = "all")]
    strategy: String,

    /// Directory for per-strategy result files.
    #[arg(long, default_value = "data/outputs")]
    output_dir: PathBuf,

    /// Directory for per-strategy measurement files.
    #[arg(long, default_value = "data/measurements")]
    measurements_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let employees = read_instance(&args.input)?;
    let strategies = select_strategies(&args.strategy, employees.len())?;

    let base = args
        .input
        .file_stem()
        .context("input path has no file name")?
        .to_string_lossy();

    fs::create_dir_all(&args.output_dir)?;
    fs::create_dir_all(&args.measurements_dir)?;

    for strategy in strategies {
        let report = strategy.run_measured(&employees);

        let output_path = args.output_dir.join(format!("{base}_{strategy}.txt"));
        write_result(&output_path, report.result)?;

        let measurement_path = args
            .measurements_dir
            .join(format!("{base}_{strategy}.txt"));
        write_measurement(&measurement_path, &report)?;

        println!(
            "{strategy}: {} ({:.3} ms)",
            report.result, report.time_ms
        );
    }

    Ok(())
}

/// Expands `all` into the execution list, gating brute force by size.
fn select_strategies(name: &str, n: usize) -> anyhow::Result<Vec<Strategy>> {
    if name == "all" {
        return Ok(Strategy::all()
            .into_iter()
            .filter(|s| *s != Strategy::BruteForce || n <= BRUTE_FORCE_LIMIT)
            .collect());
    }
    Ok(vec![name.parse::<Strategy>()?])
}

fn write_result(path: &Path, result: i64) -> anyhow::Result<()> {
    fs::write(path, format!("{result}\n"))
        .with_context(|| format!("failed to write {}", path.display()))
}

fn write_measurement(
    path: &Path,
    report: &teamcut::strategy::StrategyReport,
) -> anyhow::Result<()> {
    let body = format!(
        "n: {}\ntime_ms: {}\nmemory_kb: {}\nresult: {}\n",
        report.n, report.time_ms, report.memory_kb, report.result
    );
    fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))
}
