use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Twain workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the either benchmarks and write a markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH: &str = "either_benchmark";

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

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
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.args(["bench", "--bench", BENCH]);

    if quick {
        // Args for Criterion go after --
        cmd.arg("--");
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd
        .status()
        .with_context(|| format!("Failed to run bench {BENCH}"))?;
    if !status.success() {
        anyhow::bail!("Benchmark {BENCH} failed");
    }

    println!("Finished {BENCH} in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    // group -> function -> mean ns
    let mut results: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    for group in read_dirs(criterion_dir)? {
        let Some(group_name) = file_name(&group) else { continue };
        if group_name == "report" {
            continue;
        }
        for function in read_dirs(&group)? {
            let Some(function_name) = file_name(&function) else { continue };
            let estimates = function.join("new").join("estimates.json");
            let Ok(content) = fs::read_to_string(&estimates) else { continue };
            let parsed: Estimates = serde_json::from_str(&content)
                .with_context(|| format!("Malformed {}", estimates.display()))?;
            results
                .entry(group_name.clone())
                .or_default()
                .insert(function_name, parsed.mean.point_estimate);
        }
    }

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)?;
    writeln!(file, "# Either Benchmark Report")?;

    for (group, functions) in &results {
        let fastest = functions.values().copied().fold(f64::INFINITY, f64::min);

        writeln!(file, "\n## {group}\n")?;
        writeln!(file, "| Benchmark | Mean | vs Fastest |")?;
        writeln!(file, "|---|---|---|")?;
        for (function, ns) in functions {
            let rel = if fastest > 0.0 { ns / fastest } else { 0.0 };
            writeln!(file, "| {function} | {} | **{rel:.2}x** |", format_ns(*ns))?;
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn read_dirs(dir: &Path) -> Result<Vec<std::path::PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().and_then(|s| s.to_str()).map(str::to_string)
}

fn format_ns(ns: f64) -> String {
    if ns > 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns > 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{ns:.2} ns")
    }
}
