use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "nonatomic workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the cell benchmarks and write a markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH: &str = "cells_benchmark";

/// Benchmarks whose name starts with this prefix are the reference column.
const BASELINE_PREFIX: &str = "std_";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!(">>> Running {BENCH}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0")
        .arg("bench")
        .arg("--bench")
        .arg(BENCH);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd
        .status()
        .with_context(|| format!("Failed to launch cargo bench for {BENCH}"))?;
    if !status.success() {
        anyhow::bail!("Benchmark {BENCH} failed");
    }

    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

/// Throughput (ops/s) per group, per benchmark.
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    for group in read_dirs(criterion_dir)? {
        let group_name = file_name(&group);
        if group_name == "report" {
            continue;
        }
        for bench in read_dirs(&group)? {
            let bench_dir = bench.join("new");
            if let Some(ops) = read_throughput(&bench_dir)? {
                results
                    .entry(group_name.clone())
                    .or_default()
                    .insert(file_name(&bench), ops);
            }
        }
    }

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(report_path, render(&results))
        .with_context(|| format!("Failed to write {}", report_path.display()))?;

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn render(results: &Results) -> String {
    use std::fmt::Write;

    let mut out = String::from("# Cell Benchmark Report\n\n");
    for (group, benches) in results {
        let baseline = benches
            .iter()
            .find(|(name, _)| name.starts_with(BASELINE_PREFIX))
            .map(|(_, ops)| *ops);

        let _ = writeln!(out, "## {group}\n");
        let _ = writeln!(out, "| Benchmark | Ops/s | vs std |");
        let _ = writeln!(out, "|---|---|---|");
        for (name, ops) in benches {
            let rel = match baseline {
                Some(base) if base > 0.0 => format!("**{:.2}x**", ops / base),
                _ => "-".to_string(),
            };
            let _ = writeln!(out, "| {name} | {} | {rel} |", format_ops(*ops));
        }
        out.push('\n');
    }
    out
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000_000.0 {
        format!("{:.2}G", ops / 1_000_000_000.0)
    } else if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

/// Reads `estimates.json` (and `benchmark.json` for the element count) from a
/// criterion output directory.
fn read_throughput(dir: &Path) -> Result<Option<f64>> {
    let estimates = dir.join("estimates.json");
    if !estimates.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&estimates)
        .with_context(|| format!("Failed to read {}", estimates.display()))?;
    let json: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Malformed {}", estimates.display()))?;
    let time_ns = json
        .get("mean")
        .and_then(|m| m.get("point_estimate"))
        .and_then(serde_json::Value::as_f64)
        .unwrap_or(0.0);
    if time_ns <= 0.0 {
        return Ok(None);
    }

    let mut elements = 1.0;
    if let Ok(content) = fs::read_to_string(dir.join("benchmark.json")) {
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&content) {
            if let Some(t) = json.get("throughput").and_then(|t| t.get("Elements")) {
                elements = t.as_f64().unwrap_or(1.0);
            }
        }
    }

    Ok(Some(elements * 1e9 / time_ns))
}

fn read_dirs(dir: &Path) -> Result<Vec<std::path::PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
