//! End-to-end analysis pipeline.
//!
//! Consumes a results CSV and produces the full analysis artifact set:
//! normality checks, the paired comparison, plots, and the Markdown
//! report. The CLI's `analyze` subcommand is a thin wrapper around
//! [`analyze_csv`].

use std::path::{Path, PathBuf};

use tracing::info;

use crate::data::{objective_values, read_records};
use crate::error::Error;
use crate::plots;
use crate::report::{write_report, NormalityByGroup};
use crate::solver::Algorithm;
use crate::stats::{check_normality, compare_algorithms, Summary};

/// Runs the whole analysis over `csv_path` and returns the report path.
///
/// Both output directories are created if missing. An empty group is a
/// hard error: there is nothing to pair.
pub fn analyze_csv(
    csv_path: &Path,
    results_dir: &Path,
    plots_dir: &Path,
) -> Result<PathBuf, Error> {
    std::fs::create_dir_all(results_dir)?;
    std::fs::create_dir_all(plots_dir)?;

    let records = read_records(csv_path)?;
    info!(
        csv = %csv_path.display(),
        records = records.len(),
        "loaded results"
    );

    let alns = objective_values(&records, Algorithm::Alns);
    let tabu = objective_values(&records, Algorithm::TabuSearch);
    for (algorithm, group) in [(Algorithm::Alns, &alns), (Algorithm::TabuSearch, &tabu)] {
        if group.is_empty() {
            return Err(Error::EmptyGroup(algorithm.label().to_string()));
        }
        if let Some(summary) = Summary::from_slice(group) {
            info!(
                group = algorithm.label(),
                n = group.len(),
                mean = summary.mean,
                median = summary.median,
                std = summary.std,
                "group statistics"
            );
        }
    }

    let normality = NormalityByGroup {
        alns: check_normality(&alns, Algorithm::Alns.label())?,
        tabu: check_normality(&tabu, Algorithm::TabuSearch.label())?,
    };

    plots::render_all(plots_dir, &alns, &tabu)?;

    let comparison = compare_algorithms(&alns, &tabu)?;

    let report = write_report(results_dir, &alns, &tabu, &normality, &comparison)?;
    info!(report = %report.display(), "analysis complete");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample::generate_sample_data;
    use crate::data::write_records;
    use tempfile::tempdir;

    #[test]
    fn full_pipeline_on_sample_data() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("results").join("sample.csv");
        let results = dir.path().join("results");
        let plots = dir.path().join("plots");

        write_records(&csv, &generate_sample_data()).unwrap();
        let report = analyze_csv(&csv, &results, &plots).unwrap();

        assert!(report.exists());
        assert!(plots.join("algorithm_comparison.png").exists());

        let body = std::fs::read_to_string(&report).unwrap();
        assert!(body.contains("- Number of simulations: 41"));
    }

    #[test]
    fn missing_group_is_an_error() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("alns_only.csv");

        let alns_only: Vec<_> = generate_sample_data()
            .into_iter()
            .filter(|r| r.algorithm == Algorithm::Alns)
            .collect();
        write_records(&csv, &alns_only).unwrap();

        let err = analyze_csv(&csv, dir.path(), &dir.path().join("plots"));
        assert!(matches!(err, Err(Error::EmptyGroup(ref g)) if g == "TabuSearch"));
    }

    #[test]
    fn missing_csv_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = analyze_csv(
            &dir.path().join("nope.csv"),
            dir.path(),
            &dir.path().join("plots"),
        );
        assert!(err.is_err());
    }
}
