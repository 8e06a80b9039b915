//! Drills runner
//!
//! Checks every case in the given TOML files and exits non-zero if any fail.
//! Logs go to stderr; the summary goes to stdout.

use std::{io, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use drills_runner::{CaseFile, EXERCISES, Outcome, Summary};

mod args;

use args::{Args, Command};

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.default_filter());

    match args.command {
        Command::Run { files } => run(&files),
        Command::List => {
            for name in EXERCISES {
                println!("{name}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run(files: &[PathBuf]) -> Result<ExitCode> {
    let mut summary = Summary::default();

    for path in files {
        let file = CaseFile::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?;
        info!(path = %path.display(), cases = file.cases().len(), "checking case file");

        for (case, outcome) in file.check_all() {
            match &outcome {
                Outcome::Pass => debug!(case = case.label(), "passed"),
                Outcome::Fail { expected, actual } => warn!(
                    path = %path.display(),
                    case = case.label(),
                    %expected,
                    %actual,
                    "case failed"
                ),
                Outcome::Invalid { reason } => warn!(
                    path = %path.display(),
                    case = case.label(),
                    %reason,
                    "case is invalid"
                ),
            }
            summary.record(&outcome);
        }
    }

    println!("{summary}");
    Ok(if summary.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
