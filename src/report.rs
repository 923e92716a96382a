//! Markdown report generation.
//!
//! Assembles experiment metadata, summary statistics, normality
//! conclusions, and the paired-test outcome into a single human-readable
//! document with relative links to the generated plots. Nothing reads the
//! report programmatically.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::error::Error;
use crate::solver::Algorithm;
use crate::stats::{ComparisonResult, NormalityResult, Summary, ALPHA};

/// Normality outcomes per group; `None` when the group was too small to
/// test.
#[derive(Debug, Clone, Copy)]
pub struct NormalityByGroup {
    pub alns: Option<NormalityResult>,
    pub tabu: Option<NormalityResult>,
}

/// Writes the experiment report and returns its path.
///
/// The file lands at `results_dir/experiment_report_<timestamp>.md`; plot
/// links assume the standard `plots/` directory next to `results_dir`.
pub fn write_report(
    results_dir: &Path,
    alns: &[f64],
    tabu: &[f64],
    normality: &NormalityByGroup,
    comparison: &ComparisonResult,
) -> Result<PathBuf, Error> {
    std::fs::create_dir_all(results_dir)?;
    let timestamp = Local::now();
    let path = results_dir.join(format!(
        "experiment_report_{}.md",
        timestamp.format("%Y%m%d-%H%M%S")
    ));

    let body = render_markdown(alns, tabu, normality, comparison, &timestamp);
    std::fs::write(&path, body)?;

    info!(path = %path.display(), "report generated");
    Ok(path)
}

fn render_markdown(
    alns: &[f64],
    tabu: &[f64],
    normality: &NormalityByGroup,
    comparison: &ComparisonResult,
    timestamp: &chrono::DateTime<Local>,
) -> String {
    let mut out = String::new();
    let alns_stats = Summary::from_slice(alns);
    let tabu_stats = Summary::from_slice(tabu);

    out.push_str("# Algorithm Comparison Experiment Report\n\n");
    out.push_str(&format!(
        "Date: {}\n\n",
        timestamp.format("%Y-%m-%d %H:%M:%S")
    ));

    out.push_str("## Experiment Configuration\n\n");
    out.push_str(&format!("- Number of simulations: {}\n", alns.len()));

    out.push_str("\n## Summary Statistics\n\n");
    out.push_str("| Metric | ALNS | TabuSearch |\n");
    out.push_str("|:-------|-----:|-----------:|\n");
    for (name, pick) in [
        ("Mean", (|s: &Summary| s.mean) as fn(&Summary) -> f64),
        ("Median", |s| s.median),
        ("Std Dev", |s| s.std),
        ("Min", |s| s.min),
        ("Max", |s| s.max),
    ] {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            name,
            format_stat(alns_stats.as_ref().map(pick)),
            format_stat(tabu_stats.as_ref().map(pick)),
        ));
    }

    out.push_str("\n## Normality Tests\n\n");
    push_normality_section(&mut out, Algorithm::Alns, normality.alns);
    push_normality_section(&mut out, Algorithm::TabuSearch, normality.tabu);

    out.push_str("## Statistical Comparison\n\n");

    out.push_str("### Wilcoxon Signed-Rank Test (Two-tailed)\n\n");
    out.push_str("H0: The medians of ALNS and TabuSearch are equal.\n");
    out.push_str("H1: The medians of ALNS and TabuSearch are different.\n\n");
    out.push_str(&format!(
        "- Test statistic: {}\n",
        comparison.two_tailed.statistic
    ));
    out.push_str(&format!(
        "- p-value: {:.6e}\n",
        comparison.two_tailed.p_value
    ));
    out.push_str(&format!(
        "- Conclusion: {}\n\n",
        if comparison.two_tailed.significant {
            "Reject H0"
        } else {
            "Fail to reject H0"
        }
    ));

    let better = comparison.one_tailed.better_algorithm;
    let worse = comparison.one_tailed.worse_algorithm;
    out.push_str("### Wilcoxon Signed-Rank Test (One-tailed)\n\n");
    out.push_str(&format!(
        "H0: The median of {better} is less than or equal to the median of {worse}.\n"
    ));
    out.push_str(&format!(
        "H1: The median of {better} is greater than the median of {worse}.\n\n"
    ));
    out.push_str(&format!(
        "- p-value: {:.6e}\n",
        comparison.one_tailed.p_value
    ));
    out.push_str(&format!(
        "- Conclusion: {}\n\n",
        if comparison.one_tailed.significant {
            "Reject H0"
        } else {
            "Fail to reject H0"
        }
    ));

    out.push_str("## Conclusion\n\n");
    if comparison.two_tailed.significant {
        out.push_str(
            "There is a statistically significant difference between the performance \
             of ALNS and TabuSearch algorithms.\n\n",
        );
        if comparison.one_tailed.significant {
            out.push_str(&format!(
                "The {better} algorithm consistently outperforms the {worse} algorithm \
                 in terms of objective function value.\n"
            ));
        }
    } else {
        out.push_str(
            "There is no statistically significant difference between the performance \
             of ALNS and TabuSearch algorithms.\n",
        );
    }

    out.push_str("\n## Visualizations\n\n");
    out.push_str("### QQ Plots\n\n");
    out.push_str("![ALNS QQ Plot](../plots/qq_plot_alns.png)\n\n");
    out.push_str("![TabuSearch QQ Plot](../plots/qq_plot_tabusearch.png)\n\n");
    out.push_str("### Histograms\n\n");
    out.push_str("![ALNS Histogram](../plots/histogram_alns.png)\n\n");
    out.push_str("![TabuSearch Histogram](../plots/histogram_tabusearch.png)\n\n");
    out.push_str("### Comparison\n\n");
    out.push_str("![Algorithm Comparison](../plots/algorithm_comparison.png)\n");

    out
}

fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "n/a".to_string(),
    }
}

fn push_normality_section(out: &mut String, algorithm: Algorithm, result: Option<NormalityResult>) {
    out.push_str(&format!("### {algorithm}\n\n"));
    match result {
        Some(r) => {
            out.push_str(&format!(
                "- Shapiro-Wilk test statistic: {:.6}\n",
                r.statistic
            ));
            out.push_str(&format!("- p-value: {:.6e}\n", r.p_value));
            out.push_str(&format!(
                "- Conclusion: {}\n\n",
                if r.p_value > ALPHA {
                    "Normally distributed"
                } else {
                    "Not normally distributed"
                }
            ));
        }
        None => {
            out.push_str("- Not enough samples for the Shapiro-Wilk test\n\n");
        }
    }
}
