//! End-to-end pipeline tests: generate data, analyze it, and check the
//! produced artifacts.

use heurlab::analyze::analyze_csv;
use heurlab::data::sample::{generate_sample_data, generate_with_seed, NUM_SIMULATIONS};
use heurlab::data::{objective_values, read_records, write_records};
use heurlab::solver::{run_once, Algorithm, RuntimeConfig, SolverRuntime};
use heurlab::stats::compare_algorithms;
use tempfile::tempdir;

#[test]
fn sample_to_report_round_trip() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("results").join("sample_data.csv");
    let results = dir.path().join("results");
    let plots = dir.path().join("plots");

    write_records(&csv, &generate_sample_data()).unwrap();

    let loaded = read_records(&csv).unwrap();
    assert_eq!(loaded.len(), 2 * NUM_SIMULATIONS as usize);

    let report = analyze_csv(&csv, &results, &plots).unwrap();
    assert!(report.exists());

    for name in [
        "qq_plot_alns.png",
        "qq_plot_tabusearch.png",
        "histogram_alns.png",
        "histogram_tabusearch.png",
        "algorithm_comparison.png",
    ] {
        assert!(plots.join(name).exists(), "missing plot {name}");
    }

    let body = std::fs::read_to_string(&report).unwrap();
    assert!(body.contains("# Algorithm Comparison Experiment Report"));
    assert!(body.contains(&format!("- Number of simulations: {NUM_SIMULATIONS}")));
}

#[test]
fn sample_data_separates_the_algorithms() {
    // The synthetic groups are drawn around the recorded experiment values,
    // where TabuSearch sits far above ALNS. The paired test must pick that
    // up as significant.
    let records = generate_sample_data();
    let alns = objective_values(&records, Algorithm::Alns);
    let tabu = objective_values(&records, Algorithm::TabuSearch);
    assert_eq!(alns.len(), NUM_SIMULATIONS as usize);
    assert_eq!(tabu.len(), NUM_SIMULATIONS as usize);

    let comparison = compare_algorithms(&alns, &tabu).unwrap();
    assert_eq!(comparison.n_pairs, NUM_SIMULATIONS as usize);
    assert!(comparison.two_tailed.significant);
    assert_eq!(
        comparison.one_tailed.better_algorithm,
        Algorithm::TabuSearch
    );
    assert!(comparison.one_tailed.p_value < 0.05);
}

#[test]
fn sample_generation_is_deterministic() {
    assert_eq!(generate_sample_data(), generate_sample_data());
    assert_ne!(generate_with_seed(1), generate_with_seed(2));
}

#[test]
fn solver_runs_feed_the_analysis() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("runs.csv");

    let rt = SolverRuntime::acquire(&RuntimeConfig {
        n_packages: 30,
        n_flights: 4,
        instance_seed: 3,
    });

    let mut records = Vec::new();
    for simulation_id in 1..=3 {
        for algorithm in [Algorithm::Alns, Algorithm::TabuSearch] {
            let record = run_once(&rt, algorithm, simulation_id)
                .expect("default-configured solvers succeed");
            assert!(record.objective_value.is_finite());
            assert!(record.runtime_seconds >= 0.0);
            records.push(record);
        }
    }
    write_records(&csv, &records).unwrap();

    let loaded = read_records(&csv).unwrap();
    assert_eq!(loaded.len(), 6);
    assert_eq!(objective_values(&loaded, Algorithm::Alns).len(), 3);
    assert_eq!(objective_values(&loaded, Algorithm::TabuSearch).len(), 3);
}
