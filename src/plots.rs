//! Plot rendering.
//!
//! Pure side effects: each function writes one PNG under the plots
//! directory and returns its path. Nothing computed here feeds back into
//! the comparison logic. File names are fixed because the report links to
//! them by relative path.

use std::error::Error as StdError;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::info;

use crate::error::Error;
use crate::solver::Algorithm;
use crate::stats::std_pop;

const FIGURE_SIZE: (u32, u32) = (1000, 600);

/// ALNS group color (sky blue, as in the source plots).
const ALNS_COLOR: RGBColor = RGBColor(135, 206, 235);
/// TabuSearch group color (light coral).
const TABU_COLOR: RGBColor = RGBColor(240, 128, 128);

fn group_color(algorithm: Algorithm) -> RGBColor {
    match algorithm {
        Algorithm::Alns => ALNS_COLOR,
        Algorithm::TabuSearch => TABU_COLOR,
    }
}

type DrawResult = Result<(), Box<dyn StdError>>;

fn wrap(path: PathBuf, result: DrawResult) -> Result<PathBuf, Error> {
    match result {
        Ok(()) => {
            info!(path = %path.display(), "plot saved");
            Ok(path)
        }
        Err(e) => Err(Error::Plot {
            path,
            message: e.to_string(),
        }),
    }
}

/// Renders every plot the report links to.
pub fn render_all(plots_dir: &Path, alns: &[f64], tabu: &[f64]) -> Result<(), Error> {
    std::fs::create_dir_all(plots_dir)?;
    qq_plot(plots_dir, alns, Algorithm::Alns)?;
    qq_plot(plots_dir, tabu, Algorithm::TabuSearch)?;
    histogram(plots_dir, alns, Algorithm::Alns)?;
    histogram(plots_dir, tabu, Algorithm::TabuSearch)?;
    comparison_plot(plots_dir, alns, tabu)?;
    Ok(())
}

/// Quantile-quantile plot against the normal distribution.
pub fn qq_plot(dir: &Path, data: &[f64], algorithm: Algorithm) -> Result<PathBuf, Error> {
    let path = dir.join(format!("qq_plot_{}.png", algorithm.file_stem()));
    let result = draw_qq(&path, data, algorithm);
    wrap(path, result)
}

fn draw_qq(path: &Path, data: &[f64], algorithm: Algorithm) -> DrawResult {
    let n = data.len();
    let mut sample = data.to_vec();
    sample.sort_by(f64::total_cmp);

    let std_normal = Normal::new(0.0, 1.0)?;
    let theoretical: Vec<f64> = (1..=n)
        .map(|i| std_normal.inverse_cdf((i as f64 - 0.375) / (n as f64 + 0.25)))
        .collect();

    // Least-squares reference line through the points.
    let tx = theoretical.iter().sum::<f64>() / n as f64;
    let sy = sample.iter().sum::<f64>() / n as f64;
    let sxx: f64 = theoretical.iter().map(|t| (t - tx).powi(2)).sum();
    let sxy: f64 = theoretical
        .iter()
        .zip(&sample)
        .map(|(t, s)| (t - tx) * (s - sy))
        .sum();
    let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
    let intercept = sy - slope * tx;

    let (x_min, x_max) = padded_range(&theoretical);
    let (y_min, y_max) = padded_range(&sample);

    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("QQ-Plot Fitness {}", algorithm.label()),
            ("sans-serif", 28),
        )
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(90)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Theoretical Quantiles")
        .y_desc("Sample Quantiles")
        .draw()?;

    chart.draw_series(
        theoretical
            .iter()
            .zip(&sample)
            .map(|(&t, &s)| Circle::new((t, s), 4, group_color(algorithm).filled())),
    )?;

    chart.draw_series(LineSeries::new(
        [
            (x_min, slope * x_min + intercept),
            (x_max, slope * x_max + intercept),
        ],
        RED.stroke_width(2),
    ))?;

    root.present()?;
    Ok(())
}

/// Histogram with a Gaussian-kernel density overlay.
pub fn histogram(dir: &Path, data: &[f64], algorithm: Algorithm) -> Result<PathBuf, Error> {
    let path = dir.join(format!("histogram_{}.png", algorithm.file_stem()));
    let result = draw_histogram(&path, data, algorithm);
    wrap(path, result)
}

fn draw_histogram(path: &Path, data: &[f64], algorithm: Algorithm) -> DrawResult {
    let n = data.len();
    let (lo, hi) = padded_range(data);
    let span = hi - lo;

    // Sturges' rule, as the source plotting library defaults to.
    let bins = ((n as f64).log2().ceil() as usize + 1).max(4);
    let bin_width = span / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in data {
        let idx = (((v - lo) / bin_width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    let to_density = 1.0 / (n as f64 * bin_width);
    let max_density = counts
        .iter()
        .map(|&c| c as f64 * to_density)
        .fold(0.0, f64::max);

    let kde = kde_curve(data, lo, hi);
    let y_max = kde
        .iter()
        .map(|&(_, d)| d)
        .fold(max_density, f64::max)
        * 1.1;

    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Histograma y densidad {}", algorithm.label()),
            ("sans-serif", 28),
        )
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(90)
        .build_cartesian_2d(lo..hi, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc(format!("Fitness {}", algorithm.label()))
        .y_desc("Density")
        .draw()?;

    let color = group_color(algorithm);
    chart.draw_series(counts.iter().enumerate().map(|(i, &c)| {
        let x0 = lo + i as f64 * bin_width;
        let x1 = x0 + bin_width;
        Rectangle::new([(x0, 0.0), (x1, c as f64 * to_density)], color.mix(0.6).filled())
    }))?;

    if !kde.is_empty() {
        chart.draw_series(LineSeries::new(kde, color.stroke_width(3)))?;
    }

    root.present()?;
    Ok(())
}

/// Box plots of both groups with jittered strip points.
pub fn comparison_plot(dir: &Path, alns: &[f64], tabu: &[f64]) -> Result<PathBuf, Error> {
    let path = dir.join("algorithm_comparison.png");
    let result = draw_comparison(&path, alns, tabu);
    wrap(path, result)
}

fn draw_comparison(path: &Path, alns: &[f64], tabu: &[f64]) -> DrawResult {
    let all: Vec<f64> = alns.iter().chain(tabu).copied().collect();
    let (y_min, y_max) = padded_range(&all);

    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Comparison of Algorithm Performance", ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(90)
        .build_cartesian_2d(0.0f32..3.0f32, y_min as f32..y_max as f32)?;

    chart
        .configure_mesh()
        .y_desc("Objective Function Value")
        .x_labels(4)
        .x_label_formatter(&|x| {
            if (x - 1.0).abs() < 0.01 {
                "ALNS".to_string()
            } else if (x - 2.0).abs() < 0.01 {
                "TabuSearch".to_string()
            } else {
                String::new()
            }
        })
        .draw()?;

    for (center, data, algorithm) in [
        (1.0f32, alns, Algorithm::Alns),
        (2.0f32, tabu, Algorithm::TabuSearch),
    ] {
        let quartiles = Quartiles::new(data);
        chart.draw_series([Boxplot::new_vertical(center, &quartiles)
            .width(60)
            .style(group_color(algorithm))])?;

        // Jittered strip points over the box (fixed seed: plots are
        // reproducible artifacts).
        let mut rng = StdRng::seed_from_u64(42);
        chart.draw_series(data.iter().map(|&v| {
            let x = center + rng.random_range(-0.15..0.15);
            Circle::new((x, v as f32), 3, BLACK.mix(0.5).filled())
        }))?;
    }

    root.present()?;
    Ok(())
}

/// Gaussian KDE sampled across `[lo, hi]`; empty when the bandwidth
/// degenerates (e.g. constant data).
fn kde_curve(data: &[f64], lo: f64, hi: f64) -> Vec<(f64, f64)> {
    let n = data.len() as f64;
    let sigma = std_pop(data);
    let bandwidth = 0.9 * sigma * n.powf(-0.2);
    if !(bandwidth > 0.0) || !bandwidth.is_finite() {
        return Vec::new();
    }

    const POINTS: usize = 200;
    let norm = 1.0 / ((2.0 * std::f64::consts::PI).sqrt() * bandwidth * n);
    (0..=POINTS)
        .map(|i| {
            let x = lo + (hi - lo) * i as f64 / POINTS as f64;
            let density = data
                .iter()
                .map(|&v| (-0.5 * ((x - v) / bandwidth).powi(2)).exp())
                .sum::<f64>()
                * norm;
            (x, density)
        })
        .collect()
}

/// Min/max of `data` widened by 5% so points never sit on the frame.
fn padded_range(data: &[f64]) -> (f64, f64) {
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let pad = ((max - min) * 0.05).max(1.0);
    (min - pad, max + pad)
}
