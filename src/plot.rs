// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostic plots of an ECDF model.
//!
//! All functions take the [`EcdfModel`] of an objective function (see
//! [`ObjectiveFunction::model`](crate::estimators::traits::ObjectiveFunction::model))
//! and render a PNG bitmap.

use ndarray::{Array1, Axis};
use plotters::prelude::*;
use statrs::distribution::{ChiSquared, Continuous, ContinuousCDF};
use std::path::Path;

use crate::error::{EcdfError, Result};
use crate::estimators::approaches::ecdf::EcdfModel;

const PLOT_SIZE: (u32, u32) = (800, 600);
const PDF_POINTS: usize = 100;

fn plot_err<E: std::fmt::Display>(e: E) -> EcdfError {
    EcdfError::Plot(e.to_string())
}

fn padded_range(values: impl Iterator<Item = f64>) -> std::ops::Range<f64> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    let pad = if hi > lo { 0.05 * (hi - lo) } else { 0.5 };
    (lo - pad)..(hi + pad)
}

/// Histogram of the scores of the reference ECDF vectors next to the
/// chi-squared density they should follow.
#[derive(Debug, Clone)]
pub struct Chi2TestHistogram {
    /// Score of every reference ECDF vector.
    pub scores: Array1<f64>,
    /// Histogram bin edges, one more than `densities`.
    pub edges: Array1<f64>,
    /// Histogram normalised to integrate to one.
    pub densities: Array1<f64>,
    /// Number of bins of the model.
    pub degrees_of_freedom: usize,
    /// Points between the 1% and 99% quantiles of the chi-squared distribution.
    pub pdf_x: Array1<f64>,
    pub pdf_y: Array1<f64>,
}

/// Equal-width histogram over the range of `values`, last bin closed.
fn histogram(values: &[f64], n_bins: usize) -> (Array1<f64>, Array1<usize>) {
    let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let edges = Array1::linspace(lo, hi, n_bins + 1);
    let width = (hi - lo) / n_bins as f64;
    let mut counts = Array1::<usize>::zeros(n_bins);
    for &v in values {
        let bin = (((v - lo) / width) as usize).min(n_bins - 1);
        counts[bin] += 1;
    }
    (edges, counts)
}

/// Score every reference ECDF vector and compare the histogram of scores
/// with the chi-squared density.
///
/// `n_bins` defaults to 10 histogram bins.
pub fn chi2_test_histogram(model: &EcdfModel, n_bins: Option<usize>) -> Result<Chi2TestHistogram> {
    let n_bins = n_bins.unwrap_or(10);
    if n_bins == 0 {
        return Err(EcdfError::InvalidParameter(
            "histogram needs at least one bin".to_string(),
        ));
    }
    let scores = model
        .ecdf_list
        .axis_iter(Axis(1))
        .map(|column| model.evaluate_from_ecdf(column))
        .collect::<Result<Vec<f64>>>()?;
    if scores.is_empty() {
        return Err(EcdfError::InsufficientSamples(0));
    }

    let (edges, counts) = histogram(&scores, n_bins);
    let width = edges[1] - edges[0];
    let total = scores.len() as f64;
    let densities = counts.mapv(|c| c as f64 / total / width);

    let degrees_of_freedom = model.n_bins();
    let chi2 = ChiSquared::new(degrees_of_freedom as f64).map_err(|e| {
        EcdfError::InvalidParameter(format!("chi-squared distribution: {e}"))
    })?;
    let pdf_x = Array1::linspace(
        chi2.inverse_cdf(0.01),
        chi2.inverse_cdf(0.99),
        PDF_POINTS,
    );
    let pdf_y = pdf_x.mapv(|x| chi2.pdf(x));

    Ok(Chi2TestHistogram {
        scores: Array1::from(scores),
        edges,
        densities,
        degrees_of_freedom,
        pdf_x,
        pdf_y,
    })
}

/// Plot every reference ECDF vector as points over the bins.
pub fn plot_ecdf_vectors(model: &EcdfModel, path: impl AsRef<Path>) -> Result<()> {
    let root = BitMapBackend::new(path.as_ref(), PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("ECDF vectors", ("sans-serif", 30).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(padded_range(model.bins.iter().copied()), -0.05f64..1.05f64)
        .map_err(plot_err)?;
    chart
        .configure_mesh()
        .x_desc("Bin")
        .y_desc("ECDF")
        .draw()
        .map_err(plot_err)?;

    for column in model.ecdf_list.axis_iter(Axis(1)) {
        chart
            .draw_series(
                model
                    .bins
                    .iter()
                    .zip(column.iter())
                    .map(|(&x, &y)| Circle::new((x, y), 2, BLUE.filled())),
            )
            .map_err(plot_err)?;
    }
    root.present().map_err(plot_err)?;
    Ok(())
}

/// Former name of [`plot_ecdf_vectors`].
#[deprecated(since = "0.1.0", note = "use `plot_ecdf_vectors` instead")]
pub fn plot_correlation_vectors(model: &EcdfModel, path: impl AsRef<Path>) -> Result<()> {
    plot_ecdf_vectors(model, path)
}

/// Plot the mean ECDF vector over the bins.
pub fn plot_mean_vector(model: &EcdfModel, path: impl AsRef<Path>) -> Result<()> {
    let root = BitMapBackend::new(path.as_ref(), PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Mean ECDF vector", ("sans-serif", 30).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(padded_range(model.bins.iter().copied()), -0.05f64..1.05f64)
        .map_err(plot_err)?;
    chart
        .configure_mesh()
        .x_desc("Bin")
        .y_desc("Mean ECDF")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(
            model
                .bins
                .iter()
                .zip(model.mean_vector.iter())
                .map(|(&x, &y)| Circle::new((x, y), 3, GREEN.filled())),
        )
        .map_err(plot_err)?;
    root.present().map_err(plot_err)?;
    Ok(())
}

/// Plot the histogram of reference scores against the chi-squared density.
pub fn plot_chi2_test(
    model: &EcdfModel,
    path: impl AsRef<Path>,
    n_bins: Option<usize>,
) -> Result<Chi2TestHistogram> {
    let hist = chi2_test_histogram(model, n_bins)?;

    let x_range = padded_range(hist.edges.iter().chain(hist.pdf_x.iter()).copied());
    let y_max = hist
        .densities
        .iter()
        .chain(hist.pdf_y.iter())
        .copied()
        .fold(0.0f64, f64::max);

    let root = BitMapBackend::new(path.as_ref(), PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Chi-squared test", ("sans-serif", 30).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(x_range, 0f64..(y_max * 1.1).max(1e-12))
        .map_err(plot_err)?;
    chart
        .configure_mesh()
        .x_desc("Score")
        .y_desc("Density")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(hist.densities.iter().enumerate().map(|(i, &h)| {
            Rectangle::new(
                [(hist.edges[i], 0.0), (hist.edges[i + 1], h)],
                BLUE.mix(0.5).filled(),
            )
        }))
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            hist.pdf_x.iter().copied().zip(hist.pdf_y.iter().copied()),
            RED.mix(0.6).stroke_width(5),
        ))
        .map_err(plot_err)?
        .label("chi2 pdf")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(hist)
}
