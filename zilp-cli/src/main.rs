//! Command-line front end for the zilp solver.
//!
//! Reads an instance file, runs the branch-and-bound search and prints
//! the optimal objective value as a single line on stdout. Infeasible
//! instances and errors are reported on stderr with distinct exit
//! codes.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use zilp_core::{BnbError, BranchAndBound, HighsOracle, Instance, Settings, Status};

/// The instance has no 0/1 feasible point, or the search stopped at a
/// limit before finding one.
const EXIT_NO_SOLUTION: u8 = 1;

/// The instance file is missing or malformed.
const EXIT_FORMAT: u8 = 2;

/// The relaxation oracle failed mid-search.
const EXIT_SOLVER: u8 = 3;

#[derive(Parser, Debug)]
#[command(
    name = "zilp",
    version,
    about = "Solve 0/1 integer linear programs by LP-based branch and bound"
)]
struct Args {
    /// Path to the instance file.
    instance: PathBuf,

    /// Integer feasibility tolerance.
    #[arg(long, default_value_t = 1e-6)]
    tolerance: f64,

    /// Stop after expanding this many nodes.
    #[arg(long)]
    max_nodes: Option<u64>,

    /// Wall-clock limit in seconds.
    #[arg(long)]
    time_limit: Option<f64>,

    /// Print a trace line per expanded node.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn settings(&self) -> Settings {
        let mut settings = Settings::default().with_tolerance(self.tolerance);
        settings.verbose = self.verbose;
        if let Some(nodes) = self.max_nodes {
            settings = settings.with_max_nodes(nodes);
        }
        if let Some(seconds) = self.time_limit {
            settings = settings.with_time_limit(seconds);
        }
        settings
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .default_filter_or(if args.verbose { "info" } else { "warn" }),
    )
    .init();

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = match err.downcast_ref::<BnbError>() {
                Some(BnbError::Oracle(_)) => EXIT_SOLVER,
                _ => EXIT_FORMAT,
            };
            ExitCode::from(code)
        }
    }
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let instance = Instance::from_file(&args.instance)
        .with_context(|| format!("failed to load {}", args.instance.display()))?;

    log::debug!(
        "loaded instance: {} variables, {} constraints",
        instance.num_vars,
        instance.num_constraints
    );

    let engine = BranchAndBound::new(HighsOracle::new(), args.settings());
    let solution = engine.solve(Arc::new(instance))?;

    match solution.status {
        Status::Optimal => {
            println!("{}", solution.objective);
            Ok(ExitCode::SUCCESS)
        }
        Status::Infeasible => {
            eprintln!("instance has no 0/1 feasible point");
            Ok(ExitCode::from(EXIT_NO_SOLUTION))
        }
        Status::NodeLimit | Status::TimeLimit => {
            if solution.has_incumbent() {
                eprintln!(
                    "search stopped at {:?} after {} nodes; dual bound {}",
                    solution.status, solution.nodes_explored, solution.bound
                );
                println!("{}", solution.objective);
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!(
                    "search stopped at {:?} after {} nodes without an integer solution",
                    solution.status, solution.nodes_explored
                );
                Ok(ExitCode::from(EXIT_NO_SOLUTION))
            }
        }
    }
}
