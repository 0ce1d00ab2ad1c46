//! JuggleFest command-line entry point.
//!
//! Loads circuit and juggler records from the input file, runs the two-phase
//! assignment, and writes the per-circuit report. Any load or write failure
//! prints a diagnostic and exits non-zero without producing output.

mod console;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use jugglefest_config::AssignConfig;
use jugglefest_io::{load_file, render, write_report};
use jugglefest_solver::AssignmentEngine;

/// Default config file looked up next to the working directory.
const CONFIG_FILE: &str = "jugglefest.toml";

#[derive(Parser, Debug)]
#[command(
    name = "jugglefest",
    version,
    about = "Assigns jugglers to circuits by compatibility score"
)]
struct Args {
    /// Path to the input file of circuit and juggler records.
    input: PathBuf,

    /// Where to write the assignment report (overrides the config file).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Parse first: a bad invocation (or --help) gets clap's diagnostic alone,
    // with no banner in front of it.
    let args = Args::parse();
    console::init();

    let config = match &args.config {
        Some(path) => match AssignConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("error: cannot load config {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        // The default config file is optional.
        None => AssignConfig::load(CONFIG_FILE).unwrap_or_default(),
    };

    let problem = match load_file(&args.input) {
        Ok(problem) => problem,
        Err(err) => {
            eprintln!("error: cannot load {}: {err}", args.input.display());
            return ExitCode::FAILURE;
        }
    };

    let assignment = AssignmentEngine::new(&problem)
        .with_completion_order(config.completion_order)
        .run();

    let short_circuits = problem
        .circuit_ids()
        .filter(|&c| assignment.roster(c).len() < assignment.target_capacity())
        .count();

    let report = render(&problem, &assignment);
    let output = args.output.unwrap_or_else(|| config.output_path.clone());
    if let Err(err) = write_report(&output, &report) {
        eprintln!("error: cannot write {}: {err}", output.display());
        return ExitCode::FAILURE;
    }

    info!(
        event = "run_complete",
        placed = assignment.placed_count(),
        unassigned = assignment.unassigned().len(),
        short_circuits = short_circuits,
        output = %output.display(),
    );
    ExitCode::SUCCESS
}
