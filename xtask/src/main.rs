use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "optval workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the benchmark under each feature configuration
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
    /// Run the test suite under each feature configuration
    Test,
}

const BENCH: &str = "optional_benchmark";

/// (baseline name, cargo features)
const CONFIGURATIONS: &[(&str, &str)] = &[("default", ""), ("tracing", "tracing")];

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
        Commands::Test => run_tests()?,
    }

    Ok(())
}

fn run_tests() -> Result<()> {
    for (name, features) in CONFIGURATIONS.iter().chain(&[("proptest", "proptest")]) {
        println!("\n>>> Testing configuration: {name}");
        let mut cmd = Command::new("cargo");
        cmd.arg("test");
        if !features.is_empty() {
            cmd.arg("--features").arg(features);
        }
        let status = cmd
            .status()
            .with_context(|| format!("Failed to run tests for {name}"))?;
        if !status.success() {
            anyhow::bail!("Tests failed for configuration {name}");
        }
    }
    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running benchmarks...");

    // Build first to avoid measuring build time
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "--bench", BENCH, "--release"])
        .status()?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    for (baseline, features) in CONFIGURATIONS {
        println!("\n>>> Benchmarking configuration: {baseline}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");

        cmd.arg("bench").arg("--bench").arg(BENCH);
        if !features.is_empty() {
            cmd.arg("--features").arg(features);
        }

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        cmd.arg("--save-baseline").arg(baseline);

        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run bench for {baseline}"))?;

        if status.success() {
            println!("Finished {baseline} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: Benchmark failed for {baseline}");
        }
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    // workload -> baseline -> mean time (ns)
    let mut results: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    collect_results(criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;

    writeln!(file, "# OptionalValue Benchmark Report")?;
    writeln!(file)?;

    write!(file, "| Workload |")?;
    for (baseline, _) in CONFIGURATIONS {
        write!(file, " {baseline} (ns) | vs default |")?;
    }
    writeln!(file)?;

    write!(file, "|---|")?;
    for _ in CONFIGURATIONS {
        write!(file, "---|---|")?;
    }
    writeln!(file)?;

    for (workload, by_baseline) in &results {
        write!(file, "| {workload} |")?;

        let default_ns = by_baseline.get("default").copied().unwrap_or(0.0);

        for (baseline, _) in CONFIGURATIONS {
            if let Some(ns) = by_baseline.get(*baseline) {
                let rel = if default_ns > 0.0 { ns / default_ns } else { 0.0 };
                write!(file, " {ns:.2} | **{rel:.2}x** |")?;
            } else {
                write!(file, " N/A | - |")?;
            }
        }
        writeln!(file)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn collect_results(dir: &Path, results: &mut BTreeMap<String, BTreeMap<String, f64>>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results);
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        // Structure: .../<workload>/<baseline>/estimates.json
        let Some(baseline_dir) = path.parent() else {
            continue;
        };
        let Some(workload_dir) = baseline_dir.parent() else {
            continue;
        };
        let (Some(baseline), Some(workload)) = (dir_name(baseline_dir), dir_name(workload_dir))
        else {
            continue;
        };

        if !CONFIGURATIONS.iter().any(|(name, _)| *name == baseline) || workload == "report" {
            continue;
        }

        if let Some(mean_ns) = read_mean_ns(&path) {
            results.entry(workload).or_default().insert(baseline, mean_ns);
        }
    }
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(str::to_string)
}

fn read_mean_ns(estimates: &Path) -> Option<f64> {
    let content = fs::read_to_string(estimates).ok()?;
    let json: serde_json::Value = serde_json::from_str(&content).ok()?;
    json.get("mean")?
        .get("point_estimate")?
        .as_f64()
        .filter(|ns| *ns > 0.0)
}
