use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use heurlab::data::sample::generate_sample_data;
use heurlab::data::{append_records, write_records};
use heurlab::solver::{run_once, Algorithm, RuntimeConfig, SolverRuntime};
use heurlab::analyze;

/// Metaheuristic comparison experiment harness.
#[derive(Parser)]
#[command(name = "heurlab", version, about)]
struct Cli {
    /// Enable verbose tracing output on stderr.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one algorithm for a number of simulations and record results.
    Run {
        /// Which algorithm to run.
        #[arg(value_enum)]
        algorithm: AlgorithmArg,

        /// Number of simulations to run.
        #[arg(long, default_value_t = 1)]
        runs: u32,

        /// Append results to this CSV (printed to stdout when omitted).
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Analyze a results CSV: stats, plots, and a Markdown report.
    Analyze {
        /// Results CSV with one row per simulation.
        #[arg(long)]
        csv: PathBuf,

        /// Directory for the generated report.
        #[arg(long, default_value = "results")]
        results_dir: PathBuf,

        /// Directory for the generated plots.
        #[arg(long, default_value = "plots")]
        plots_dir: PathBuf,
    },

    /// Generate a deterministic synthetic results CSV.
    Sample {
        /// Output CSV path.
        #[arg(long, default_value = "results/sample_data.csv")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Alns,
    Tabu,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Alns => Algorithm::Alns,
            AlgorithmArg::Tabu => Algorithm::TabuSearch,
        }
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.command {
        Command::Run {
            algorithm,
            runs,
            csv,
        } => run_experiment(algorithm.into(), runs, csv.as_deref()),
        Command::Analyze {
            csv,
            results_dir,
            plots_dir,
        } => {
            let report = analyze::analyze_csv(&csv, &results_dir, &plots_dir)?;
            println!("{}", report.display());
            Ok(())
        }
        Command::Sample { output } => {
            write_records(&output, &generate_sample_data())?;
            println!("{}", output.display());
            Ok(())
        }
    }
}

fn run_experiment(algorithm: Algorithm, runs: u32, csv: Option<&std::path::Path>) -> Result<()> {
    let rt = SolverRuntime::acquire(&RuntimeConfig::default());

    let mut records = Vec::new();
    let mut failures = 0u32;
    for simulation_id in 1..=runs {
        match run_once(&rt, algorithm, simulation_id) {
            Some(record) => records.push(record),
            None => failures += 1,
        }
    }

    match csv {
        Some(path) => append_records(path, &records)?,
        None => {
            for record in &records {
                println!(
                    "{},{},{},{}",
                    record.algorithm,
                    record.simulation_id,
                    record.objective_value,
                    record.runtime_seconds
                );
            }
        }
    }

    if failures > 0 {
        eprintln!("{failures} of {runs} simulations failed; see logs");
    }
    Ok(())
}
