// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, ArrayView1};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use super::utils::{covariance_of_ecdf_vectors, mean_of_ecdf_vectors};
use crate::error::{EcdfError, Result};
use crate::estimators::utils::{linalg, output};

/// Gaussian model of ECDF vectors: bins, the vectors themselves, their mean
/// and covariance.
///
/// Rows of `ecdf_list` correspond to bins, columns to individual ECDF vectors.
#[derive(Debug)]
pub struct EcdfModel {
    pub bins: Array1<f64>,
    pub ecdf_list: Array2<f64>,
    pub mean_vector: Array1<f64>,
    pub covar_matrix: Array2<f64>,
    singular_warned: AtomicBool,
}

impl EcdfModel {
    /// Build the model from precomputed ECDF vectors.
    pub fn from_ecdf_list(bins: Array1<f64>, ecdf_list: Array2<f64>) -> Result<Self> {
        if bins.len() != ecdf_list.nrows() {
            return Err(EcdfError::DimensionMismatch {
                expected: bins.len(),
                found: ecdf_list.nrows(),
            });
        }
        let mean_vector = mean_of_ecdf_vectors(ecdf_list.view())?;
        let covar_matrix = covariance_of_ecdf_vectors(ecdf_list.view())?;
        Ok(Self {
            bins,
            ecdf_list,
            mean_vector,
            covar_matrix,
            singular_warned: AtomicBool::new(false),
        })
    }

    pub fn n_bins(&self) -> usize {
        self.bins.len()
    }

    /// Number of ECDF vectors the model was estimated from.
    pub fn n_vectors(&self) -> usize {
        self.ecdf_list.ncols()
    }

    /// Squared Mahalanobis distance of `vector` from the mean ECDF vector.
    ///
    /// Falls back to the squared Euclidean distance when the covariance
    /// matrix is singular. The fallback is logged once per model.
    pub fn evaluate_from_ecdf(&self, vector: ArrayView1<'_, f64>) -> Result<f64> {
        if vector.len() != self.mean_vector.len() {
            return Err(EcdfError::DimensionMismatch {
                expected: self.mean_vector.len(),
                found: vector.len(),
            });
        }
        let deviation = &self.mean_vector - &vector;
        match linalg::solve(self.covar_matrix.view(), deviation.view()) {
            Some(weighted) => Ok(deviation.dot(&weighted)),
            None => {
                if !self.singular_warned.swap(true, Ordering::Relaxed) {
                    log::warn!(
                        "covariance matrix is singular, falling back to the Euclidean norm"
                    );
                }
                Ok(deviation.dot(&deviation))
            }
        }
    }

    /// Whether the singular-covariance fallback has been hit.
    pub fn used_singular_fallback(&self) -> bool {
        self.singular_warned.load(Ordering::Relaxed)
    }

    pub fn spectral_condition(&self) -> f64 {
        linalg::spectral_condition(self.covar_matrix.view())
    }

    /// Spectral condition of the covariance, logging a warning above the threshold.
    pub fn check_spectral_condition(&self) -> f64 {
        linalg::check_spectral_condition(self.covar_matrix.view())
    }

    /// Write the model as text files into `dir` using `prefix` for the file names.
    pub fn write_files(&self, dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
        output::write_model_files(
            dir,
            prefix,
            self.bins.view(),
            self.ecdf_list.view(),
            self.mean_vector.view(),
            self.covar_matrix.view(),
        )
    }
}
