// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};
use std::path::PathBuf;

use crate::error::{EcdfError, Result};

/// Strategy for thinning out a fine set of candidate bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinChoice {
    /// Bins whose mean ECDF values are spread uniformly over the value range.
    #[default]
    UniformY,
    /// Bins spread uniformly over the index range between the smallest and
    /// the largest mean ECDF value.
    UniformX,
}

/// Options for `choose_bins` on standard and bootstrap objective functions.
#[derive(Debug, Clone)]
pub struct ChooseBinsOptions {
    /// Number of bins to select (before duplicates are removed).
    pub n_bins: usize,
    /// Shift of the lower end of the selection range. Defaults to one step
    /// towards the interior.
    pub lower_shift: Option<f64>,
    /// Shift of the upper end of the selection range. Defaults to one step
    /// towards the interior.
    pub upper_shift: Option<f64>,
    pub choice: BinChoice,
    /// Log a warning if the new covariance matrix is ill-conditioned.
    pub check_spectral_condition: bool,
    /// Write the re-estimated model into this directory.
    pub output_dir: Option<PathBuf>,
}

impl Default for ChooseBinsOptions {
    fn default() -> Self {
        Self {
            n_bins: 10,
            lower_shift: None,
            upper_shift: None,
            choice: BinChoice::UniformY,
            check_spectral_condition: true,
            output_dir: None,
        }
    }
}

impl ChooseBinsOptions {
    pub fn new(n_bins: usize) -> Self {
        Self { n_bins, ..Self::default() }
    }

    pub fn with_choice(mut self, choice: BinChoice) -> Self {
        self.choice = choice;
        self
    }

    pub fn with_shifts(mut self, lower: f64, upper: f64) -> Self {
        self.lower_shift = Some(lower);
        self.upper_shift = Some(upper);
        self
    }

    pub fn with_spectral_check(mut self, check: bool) -> Self {
        self.check_spectral_condition = check;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }
}

/// Index of the first maximum.
fn argmax(values: ArrayView1<'_, f64>) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] {
            best = i;
        }
    }
    best
}

/// Index of the first minimum.
fn argmin(values: ArrayView1<'_, f64>) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v < values[best] {
            best = i;
        }
    }
    best
}

/// Select bin indices from the mean ECDF vector.
///
/// Returns the sorted, de-duplicated indices into the current bins. A warning
/// is logged when duplicates were dropped.
pub fn select_bin_indices(
    mean_vector: ArrayView1<'_, f64>,
    options: &ChooseBinsOptions,
) -> Result<Vec<usize>> {
    if options.n_bins == 0 {
        return Err(EcdfError::InvalidParameter(
            "n_bins must be at least 1".to_string(),
        ));
    }
    if mean_vector.is_empty() {
        return Err(EcdfError::InvalidParameter(
            "cannot choose bins from an empty mean vector".to_string(),
        ));
    }
    let n_bins_f = options.n_bins as f64;

    let mut indices: Vec<usize> = match options.choice {
        BinChoice::UniformY => {
            let max_value = mean_vector.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let min_value = mean_vector.iter().copied().fold(f64::INFINITY, f64::min);
            let step = (max_value - min_value) / n_bins_f;
            let lower = min_value + options.lower_shift.unwrap_or(step);
            let upper = max_value + options.upper_shift.unwrap_or(-step);
            Array1::linspace(lower, upper, options.n_bins)
                .iter()
                .map(|&border| {
                    mean_vector
                        .iter()
                        .position(|&m| m >= border)
                        .unwrap_or(0)
                })
                .collect()
        }
        BinChoice::UniformX => {
            let low_index = argmin(mean_vector) as f64;
            let high_index = argmax(mean_vector) as f64;
            let step = (high_index - low_index) / n_bins_f;
            let lower = low_index + options.lower_shift.unwrap_or(step);
            let upper = high_index + options.upper_shift.unwrap_or(-step);
            let last = mean_vector.len() - 1;
            Array1::linspace(lower, upper, options.n_bins)
                .iter()
                .map(|&position| (position.max(0.0) as usize).min(last))
                .collect()
        }
    };

    let requested = indices.len();
    indices.sort_unstable();
    indices.dedup();
    if indices.len() != requested {
        log::warn!(
            "{} duplicate bins were removed, {} bins remain",
            requested - indices.len(),
            indices.len()
        );
    }
    Ok(indices)
}

/// Bins selected from `bins` according to the mean ECDF vector.
pub fn choose_bins(
    bins: ArrayView1<'_, f64>,
    mean_vector: ArrayView1<'_, f64>,
    options: &ChooseBinsOptions,
) -> Result<Array1<f64>> {
    if bins.len() != mean_vector.len() {
        return Err(EcdfError::DimensionMismatch {
            expected: bins.len(),
            found: mean_vector.len(),
        });
    }
    let indices = select_bin_indices(mean_vector, options)?;
    Ok(indices.iter().map(|&i| bins[i]).collect())
}
