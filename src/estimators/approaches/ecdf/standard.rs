// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use rand::{Rng, RngCore};
use std::path::{Path, PathBuf};

use super::bins::{ChooseBinsOptions, choose_bins};
use super::model::EcdfModel;
use super::utils::{
    create_distance_matrix_range, ecdf_vector_list, empirical_cumulative_distribution_vector,
    subset_indices_from_sizes,
};
use crate::error::{EcdfError, Result};
use crate::estimators::traits::ObjectiveFunction;
use crate::estimators::utils::output::{CHOOSE_BINS_PREFIX, OBJECTIVE_PREFIX};

/// Objective function built from one reference dataset split into subsets.
///
/// Every pair of distinct subsets contributes one ECDF vector of the
/// distances between their elements. A dataset is evaluated against one
/// randomly chosen subset.
///
/// ```rust
/// use ecdf_estimator::estimators::approaches::ecdf::StandardObjective;
/// use ecdf_estimator::estimators::traits::ObjectiveFunction;
/// use ndarray::array;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let data: Vec<f64> = (0..60).map(|i| (i % 7) as f64 * 0.3).collect();
/// let objective = StandardObjective::new(
///     data.clone(),
///     array![0.5, 1.0, 1.5],
///     |a: &f64, b: &f64| (a - b).abs(),
///     &[15, 15, 15, 15],
/// )
/// .unwrap();
/// let mut rng = StdRng::seed_from_u64(1);
/// let score = objective.evaluate(&data[..15], &mut rng).unwrap();
/// assert!(score.is_finite());
/// ```
pub struct StandardObjective<T, D> {
    dataset: Vec<T>,
    distance_fn: D,
    subset_indices: Vec<usize>,
    model: EcdfModel,
}

impl<T, D> StandardObjective<T, D>
where
    D: Fn(&T, &T) -> f64,
{
    /// Build the objective from `dataset` split into consecutive subsets of
    /// the given sizes. The sizes must add up to the dataset length.
    pub fn new(
        dataset: Vec<T>,
        bins: Array1<f64>,
        distance_fn: D,
        subset_sizes: &[usize],
    ) -> Result<Self> {
        if subset_sizes.is_empty() {
            return Err(EcdfError::InvalidParameter(
                "at least one subset size is required".to_string(),
            ));
        }
        let subset_indices = subset_indices_from_sizes(subset_sizes);
        let ecdf_list = ecdf_vector_list(&dataset, bins.view(), &distance_fn, &subset_indices)?;
        let model = EcdfModel::from_ecdf_list(bins, ecdf_list)?;
        log::debug!(
            "standard objective: {} elements, {} subsets, {} bins, {} ECDF vectors",
            dataset.len(),
            subset_sizes.len(),
            model.n_bins(),
            model.n_vectors()
        );
        Ok(Self {
            dataset,
            distance_fn,
            subset_indices,
            model,
        })
    }

    pub fn dataset(&self) -> &[T] {
        &self.dataset
    }

    /// Subset boundaries `[0, s0, s0 + s1, ..., len]`.
    pub fn subset_indices(&self) -> &[usize] {
        &self.subset_indices
    }

    pub fn n_subsets(&self) -> usize {
        self.subset_indices.len() - 1
    }

    /// Write the current model into `dir` with the `obj-func_` prefix.
    pub fn write_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        self.model.write_files(dir, OBJECTIVE_PREFIX)
    }

    /// Replace the bins by a subset chosen from the mean ECDF vector and
    /// re-estimate the model.
    ///
    /// Returns the spectral condition of the new covariance matrix when
    /// `options.check_spectral_condition` is set.
    pub fn choose_bins(&mut self, options: &ChooseBinsOptions) -> Result<Option<f64>> {
        let bins = choose_bins(self.model.bins.view(), self.model.mean_vector.view(), options)?;
        let ecdf_list = ecdf_vector_list(
            &self.dataset,
            bins.view(),
            &self.distance_fn,
            &self.subset_indices,
        )?;
        self.model = EcdfModel::from_ecdf_list(bins, ecdf_list)?;
        if let Some(dir) = &options.output_dir {
            self.model.write_files(dir, CHOOSE_BINS_PREFIX)?;
        }
        let condition = options
            .check_spectral_condition
            .then(|| self.model.check_spectral_condition());
        Ok(condition)
    }

    /// ECDF vector of `dataset` against the reference subset `subset`.
    pub fn ecdf_vector_against_subset(&self, dataset: &[T], subset: usize) -> Result<Array1<f64>> {
        if subset >= self.n_subsets() {
            return Err(EcdfError::InvalidParameter(format!(
                "subset {subset} out of range for {} subsets",
                self.n_subsets()
            )));
        }
        let distances = create_distance_matrix_range(
            &self.dataset,
            self.subset_indices[subset]..self.subset_indices[subset + 1],
            dataset,
            0..dataset.len(),
            &self.distance_fn,
        )?;
        let flat: Vec<f64> = distances.iter().copied().collect();
        empirical_cumulative_distribution_vector(&flat, self.model.bins.view())
    }
}

impl<T, D> ObjectiveFunction<T> for StandardObjective<T, D>
where
    D: Fn(&T, &T) -> f64,
{
    fn model(&self) -> &EcdfModel {
        &self.model
    }

    fn ecdf_vector(&self, dataset: &[T], rng: &mut dyn RngCore) -> Result<Array1<f64>> {
        let subset = rng.gen_range(0..self.n_subsets());
        self.ecdf_vector_against_subset(dataset, subset)
    }
}
