// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, ArrayView1};
use rand::RngCore;

use crate::error::Result;
use crate::estimators::approaches::ecdf::model::EcdfModel;

/// Interface shared by all ECDF-based objective functions.
///
/// `T` is the type of a single element of a dataset (for example one
/// realisation of a random model). Random choices made during evaluation are
/// drawn from the caller's RNG so results are reproducible with a seeded RNG.
pub trait ObjectiveFunction<T> {
    /// The Gaussian model of reference ECDF vectors.
    fn model(&self) -> &EcdfModel;

    /// ECDF vector of `dataset` compared against the reference data.
    fn ecdf_vector(&self, dataset: &[T], rng: &mut dyn RngCore) -> Result<Array1<f64>>;

    fn bins(&self) -> &Array1<f64> {
        &self.model().bins
    }

    fn ecdf_list(&self) -> &Array2<f64> {
        &self.model().ecdf_list
    }

    fn mean_vector(&self) -> &Array1<f64> {
        &self.model().mean_vector
    }

    fn covar_matrix(&self) -> &Array2<f64> {
        &self.model().covar_matrix
    }

    /// Score a precomputed ECDF vector against the reference model.
    fn evaluate_from_ecdf(&self, vector: ArrayView1<'_, f64>) -> Result<f64> {
        self.model().evaluate_from_ecdf(vector)
    }

    /// Score `dataset`: smaller values mean closer to the reference data.
    fn evaluate(&self, dataset: &[T], rng: &mut dyn RngCore) -> Result<f64> {
        let vector = self.ecdf_vector(dataset, rng)?;
        self.evaluate_from_ecdf(vector.view())
    }
}
