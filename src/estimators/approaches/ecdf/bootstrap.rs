// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2};
use rand::{Rng, RngCore};
use std::path::{Path, PathBuf};

use super::bins::{ChooseBinsOptions, choose_bins};
use super::model::EcdfModel;
use super::utils::{
    create_distance_matrix, ecdf_vector_list_from_distances,
    empirical_cumulative_distribution_vector,
};
use crate::error::{EcdfError, Result};
use crate::estimators::traits::ObjectiveFunction;
use crate::estimators::utils::output::{CHOOSE_BINS_PREFIX, OBJECTIVE_PREFIX};

/// Default number of bootstrap samples.
pub const DEFAULT_BOOTSTRAP_SAMPLES: usize = 1000;

/// Which of the two reference datasets a comparison is made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceSet {
    A,
    B,
}

/// Objective function built by bootstrapping the distances between two
/// reference datasets.
///
/// The distance matrix between the datasets is computed once; each bootstrap
/// sample resamples its rows and columns with replacement. A dataset is
/// evaluated against one of the two reference datasets, chosen at random.
pub struct BootstrapObjective<T, D> {
    dataset_a: Vec<T>,
    dataset_b: Vec<T>,
    distance_fn: D,
    distances: Array2<f64>,
    n_samples: usize,
    model: EcdfModel,
}

impl<T, D> BootstrapObjective<T, D>
where
    D: Fn(&T, &T) -> f64,
{
    pub fn new(
        dataset_a: Vec<T>,
        dataset_b: Vec<T>,
        bins: Array1<f64>,
        distance_fn: D,
        n_samples: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Self> {
        if dataset_a.is_empty() || dataset_b.is_empty() {
            return Err(EcdfError::InvalidParameter(
                "both reference datasets must be non-empty".to_string(),
            ));
        }
        let distances = create_distance_matrix(&dataset_a, &dataset_b, &distance_fn);
        let ecdf_list = ecdf_vector_list_from_distances(distances.view(), bins.view(), n_samples, rng)?;
        let model = EcdfModel::from_ecdf_list(bins, ecdf_list)?;
        log::debug!(
            "bootstrap objective: {}x{} distances, {} bins, {} samples",
            dataset_a.len(),
            dataset_b.len(),
            model.n_bins(),
            n_samples
        );
        Ok(Self {
            dataset_a,
            dataset_b,
            distance_fn,
            distances,
            n_samples,
            model,
        })
    }

    /// Same as [`BootstrapObjective::new`] with [`DEFAULT_BOOTSTRAP_SAMPLES`].
    pub fn with_default_samples(
        dataset_a: Vec<T>,
        dataset_b: Vec<T>,
        bins: Array1<f64>,
        distance_fn: D,
        rng: &mut dyn RngCore,
    ) -> Result<Self> {
        Self::new(dataset_a, dataset_b, bins, distance_fn, DEFAULT_BOOTSTRAP_SAMPLES, rng)
    }

    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    pub fn dataset(&self, which: ReferenceSet) -> &[T] {
        match which {
            ReferenceSet::A => &self.dataset_a,
            ReferenceSet::B => &self.dataset_b,
        }
    }

    /// Distances between every element of dataset A (rows) and B (columns).
    pub fn distances(&self) -> &Array2<f64> {
        &self.distances
    }

    /// Write the current model into `dir` with the `obj-func_` prefix.
    pub fn write_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        self.model.write_files(dir, OBJECTIVE_PREFIX)
    }

    /// Replace the bins by a subset chosen from the mean ECDF vector and
    /// redraw the bootstrap samples for the new bins.
    ///
    /// Returns the spectral condition of the new covariance matrix when
    /// `options.check_spectral_condition` is set.
    pub fn choose_bins(
        &mut self,
        options: &ChooseBinsOptions,
        rng: &mut dyn RngCore,
    ) -> Result<Option<f64>> {
        let bins = choose_bins(self.model.bins.view(), self.model.mean_vector.view(), options)?;
        let ecdf_list =
            ecdf_vector_list_from_distances(self.distances.view(), bins.view(), self.n_samples, rng)?;
        self.model = EcdfModel::from_ecdf_list(bins, ecdf_list)?;
        if let Some(dir) = &options.output_dir {
            self.model.write_files(dir, CHOOSE_BINS_PREFIX)?;
        }
        let condition = options
            .check_spectral_condition
            .then(|| self.model.check_spectral_condition());
        Ok(condition)
    }

    /// ECDF vector of `dataset` against the given reference dataset.
    pub fn ecdf_vector_against(&self, dataset: &[T], which: ReferenceSet) -> Result<Array1<f64>> {
        let distances = create_distance_matrix(self.dataset(which), dataset, &self.distance_fn);
        let flat: Vec<f64> = distances.iter().copied().collect();
        empirical_cumulative_distribution_vector(&flat, self.model.bins.view())
    }
}

impl<T, D> ObjectiveFunction<T> for BootstrapObjective<T, D>
where
    D: Fn(&T, &T) -> f64,
{
    fn model(&self) -> &EcdfModel {
        &self.model
    }

    fn ecdf_vector(&self, dataset: &[T], rng: &mut dyn RngCore) -> Result<Array1<f64>> {
        let which = if rng.gen_bool(0.5) {
            ReferenceSet::A
        } else {
            ReferenceSet::B
        };
        self.ecdf_vector_against(dataset, which)
    }
}
