//! CLI definition and dispatch.

use chrono::{Duration, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::{CsvSnapshotAdapter, CsvTrialAdapter};
use crate::adapters::csv_report_adapter::CsvReportAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::config_validation::validate_resample_config;
use crate::domain::decision::Assessment;
use crate::domain::error::WfvalError;
use crate::domain::regime::RegimeDetector;
use crate::domain::split::{generate_split, DateRange, ResamplePlan, Split};
use crate::domain::summary::ResampleSummary;
use crate::ports::config_port::ConfigPort;
use crate::ports::report_port::ReportPort;
use crate::ports::snapshot_port::SnapshotPort;
use crate::ports::trial_port::TrialPort;

#[derive(Parser, Debug)]
#[command(name = "wfval", about = "Monte Carlo walk-forward validation toolkit")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate randomized train/test splits
    Split {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        runs: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Summarize Monte Carlo trial results
    Analyze {
        #[arg(short, long)]
        trials: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Classify a regime indicator series
    Regime {
        #[arg(short, long)]
        snapshots: PathBuf,
    },
    /// Validate a resampling configuration
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Split {
            config,
            runs,
            seed,
            output,
        } => run_split(&config, runs, seed, output.as_deref()),
        Command::Analyze { trials, output } => run_analyze(&trials, output.as_deref()),
        Command::Regime { snapshots } => run_regime(&snapshots),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &std::path::Path) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = WfvalError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Build a resampling plan from a validated configuration.
pub fn build_resample_plan(config: &dyn ConfigPort) -> Result<ResamplePlan, WfvalError> {
    validate_resample_config(config)?;

    let start = parse_config_date(config, "start_date")?;
    let end = parse_config_date(config, "end_date")?;
    let range = DateRange::new(start, end)?;

    let seed = match config.get_string("resample", "seed") {
        None => None,
        Some(s) => Some(s.trim().parse::<u64>().map_err(|_| WfvalError::ConfigInvalid {
            section: "resample".to_string(),
            key: "seed".to_string(),
            reason: "seed must be a non-negative integer".to_string(),
        })?),
    };

    Ok(ResamplePlan {
        range,
        train_fraction: config.get_double("resample", "train_fraction", 0.0),
        test_length: Duration::days(config.get_int("resample", "test_days", 0)),
        runs: config.get_int("resample", "runs", 1) as u32,
        seed,
    })
}

fn parse_config_date(config: &dyn ConfigPort, key: &str) -> Result<NaiveDate, WfvalError> {
    let value = config
        .get_string("history", key)
        .ok_or_else(|| WfvalError::ConfigMissing {
            section: "history".to_string(),
            key: key.to_string(),
        })?;
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| WfvalError::ConfigInvalid {
        section: "history".to_string(),
        key: key.to_string(),
        reason: format!("invalid {} format, expected YYYY-MM-DD", key),
    })
}

fn run_split(
    config_path: &std::path::Path,
    runs_override: Option<u32>,
    seed_override: Option<u64>,
    output_path: Option<&std::path::Path>,
) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let mut plan = match build_resample_plan(&adapter) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    if let Some(runs) = runs_override {
        plan.runs = runs;
    }
    if let Some(seed) = seed_override {
        plan.seed = Some(seed);
    }

    eprintln!(
        "Generating {} splits over {} to {}",
        plan.runs, plan.range.start, plan.range.end
    );

    let mut splits: Vec<Split> = Vec::with_capacity(plan.runs as usize);
    for run in 0..plan.runs {
        let request = plan.request_for_run(run);
        match generate_split(&request) {
            Ok(split) => {
                println!(
                    "run {:>3}: train {} to {}  test {} to {}",
                    run, split.train.start, split.train.end, split.test.start, split.test.end
                );
                splits.push(split);
            }
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        }
    }

    if let Some(path) = output_path {
        if let Err(e) = CsvReportAdapter.write_splits(&splits, path) {
            eprintln!("error: {e}");
            return (&e).into();
        }
        eprintln!("Split schedule written to {}", path.display());
    }

    ExitCode::SUCCESS
}

fn run_analyze(trials_path: &std::path::Path, output_path: Option<&std::path::Path>) -> ExitCode {
    eprintln!("Loading trials from {}", trials_path.display());
    let adapter = CsvTrialAdapter::new(trials_path.to_path_buf());

    let trials = match adapter.read_trials() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let summary = match ResampleSummary::compute(&trials) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let assessment = Assessment::from_summary(&summary);

    println!("Runs:              {}", summary.runs);
    println!("Mean train Sharpe: {:.2}", summary.mean_train_sharpe);
    println!("Mean test Sharpe:  {:.2}", summary.mean_test_sharpe);
    println!("Mean degradation:  {:.1}%", summary.mean_degradation * 100.0);
    println!("Std degradation:   {:.1}%", summary.std_degradation * 100.0);
    println!("Overfit rate:      {:.1}%", summary.overfit_rate * 100.0);
    println!();
    println!("Verdict: {}", assessment.verdict);
    println!("Reason: {}", assessment.reason);
    println!("Recommendation: {}", assessment.recommendation);

    if let Some(path) = output_path {
        if let Err(e) = CsvReportAdapter.write_summary(&summary, &assessment, path) {
            eprintln!("error: {e}");
            return (&e).into();
        }
        eprintln!("Summary written to {}", path.display());
    }

    ExitCode::SUCCESS
}

fn run_regime(snapshots_path: &std::path::Path) -> ExitCode {
    eprintln!("Loading snapshots from {}", snapshots_path.display());
    let adapter = CsvSnapshotAdapter::new(snapshots_path.to_path_buf());

    let snapshots = match adapter.read_snapshots() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    if snapshots.is_empty() {
        let err = WfvalError::TrialData {
            file: snapshots_path.display().to_string(),
            reason: "no snapshots found".to_string(),
        };
        eprintln!("error: {err}");
        return (&err).into();
    }

    let mut detector = RegimeDetector::new();
    for (date, snapshot) in &snapshots {
        let score = snapshot.score();
        let regime = detector.update(score);
        println!(
            "{}  score {:5.1}  smoothed {:5.1}  {}",
            date,
            score,
            detector.smoothed_score(),
            regime
        );
    }

    let regime = detector.current();
    println!();
    println!(
        "Current regime: {} (allocation {:.0}%)",
        regime,
        regime.allocation() * 100.0
    );

    ExitCode::SUCCESS
}

fn run_validate(config_path: &std::path::Path) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    match build_resample_plan(&adapter) {
        Ok(plan) => {
            println!(
                "Configuration OK: {} runs, {} to {}, train fraction {}, test {} days",
                plan.runs,
                plan.range.start,
                plan.range.end,
                plan.train_fraction,
                plan.test_length.num_days()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
