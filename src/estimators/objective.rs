use ndarray::Array1;
use rand::RngCore;

use crate::error::Result;
use crate::estimators::approaches::ecdf::{
    BootstrapObjective, MultipleObjectives, StandardObjective, DEFAULT_BOOTSTRAP_SAMPLES,
};
pub use crate::estimators::traits::ObjectiveFunction;

/// Construction methods for the ECDF objective functions
///
/// This struct provides static methods for creating objective functions from
/// reference data, mirroring the three approaches of the crate.
pub struct Objective;

impl Objective {
    /// Creates an objective function from one dataset split into subsets
    ///
    /// # Arguments
    ///
    /// * `dataset` - Reference realisations, ordered subset by subset
    /// * `bins` - Distance thresholds at which the ECDFs are evaluated
    /// * `distance_fn` - Distance between two realisations
    /// * `subset_sizes` - Sizes of the consecutive subsets, summing to `dataset.len()`
    ///
    /// # Returns
    ///
    /// A standard objective function with one ECDF vector per pair of subsets
    pub fn standard<T, D>(
        dataset: Vec<T>,
        bins: Array1<f64>,
        distance_fn: D,
        subset_sizes: &[usize],
    ) -> Result<StandardObjective<T, D>>
    where
        D: Fn(&T, &T) -> f64,
    {
        StandardObjective::new(dataset, bins, distance_fn, subset_sizes)
    }

    /// Creates a bootstrapped objective function from two reference datasets
    ///
    /// # Arguments
    ///
    /// * `dataset_a`, `dataset_b` - Independent reference datasets
    /// * `bins` - Distance thresholds at which the ECDFs are evaluated
    /// * `distance_fn` - Distance between two realisations
    /// * `n_samples` - Number of bootstrap samples, [`DEFAULT_BOOTSTRAP_SAMPLES`] if `None`
    /// * `rng` - Source of the bootstrap resampling
    pub fn bootstrap<T, D>(
        dataset_a: Vec<T>,
        dataset_b: Vec<T>,
        bins: Array1<f64>,
        distance_fn: D,
        n_samples: Option<usize>,
        rng: &mut dyn RngCore,
    ) -> Result<BootstrapObjective<T, D>>
    where
        D: Fn(&T, &T) -> f64,
    {
        BootstrapObjective::new(
            dataset_a,
            dataset_b,
            bins,
            distance_fn,
            n_samples.unwrap_or(DEFAULT_BOOTSTRAP_SAMPLES),
            rng,
        )
    }

    /// Combines several objective functions into one joint model
    ///
    /// All members must hold the same number of ECDF vectors.
    pub fn multiple<'a, T>(
        members: Vec<Box<dyn ObjectiveFunction<T> + 'a>>,
    ) -> Result<MultipleObjectives<'a, T>> {
        MultipleObjectives::new(members, true)
    }
}
