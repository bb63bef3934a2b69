// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::{Rng, RngCore};
use std::ops::Range;

use crate::error::{EcdfError, Result};

/// Empirical cumulative distribution vector of a list of distances.
///
/// Entry `i` is the fraction of distances strictly smaller than `bins[i]`.
/// Bins do not need to be sorted. NaN distances are never smaller than a bin
/// but still count towards the total.
pub fn empirical_cumulative_distribution_vector(
    distances: &[f64],
    bins: ArrayView1<'_, f64>,
) -> Result<Array1<f64>> {
    if distances.is_empty() {
        return Err(EcdfError::EmptyDistances);
    }
    let n_f = distances.len() as f64;
    let mut sorted: Vec<f64> = distances.iter().copied().filter(|d| !d.is_nan()).collect();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));
    Ok(bins.mapv(|b| sorted.partition_point(|&d| d < b) as f64 / n_f))
}

/// Matrix of pairwise distances `distance_fn(a[i], b[j])`.
pub fn create_distance_matrix<T, D>(a: &[T], b: &[T], distance_fn: &D) -> Array2<f64>
where
    D: Fn(&T, &T) -> f64,
{
    distance_block(a, b, distance_fn)
}

/// Distance matrix restricted to `a[range_a]` x `b[range_b]`.
///
/// Fails with [`EcdfError::InvalidParameter`] if a range is inverted or
/// reaches past the end of its dataset.
pub fn create_distance_matrix_range<T, D>(
    a: &[T],
    range_a: Range<usize>,
    b: &[T],
    range_b: Range<usize>,
    distance_fn: &D,
) -> Result<Array2<f64>>
where
    D: Fn(&T, &T) -> f64,
{
    let rows = checked_slice(a, range_a)?;
    let cols = checked_slice(b, range_b)?;
    Ok(distance_block(rows, cols, distance_fn))
}

fn checked_slice<T>(data: &[T], range: Range<usize>) -> Result<&[T]> {
    data.get(range.clone()).ok_or_else(|| {
        EcdfError::InvalidParameter(format!(
            "invalid subset indices {}..{} for a dataset of {} elements",
            range.start,
            range.end,
            data.len()
        ))
    })
}

fn distance_block<T, D>(rows: &[T], cols: &[T], distance_fn: &D) -> Array2<f64>
where
    D: Fn(&T, &T) -> f64,
{
    Array2::from_shape_fn((rows.len(), cols.len()), |(i, j)| {
        distance_fn(&rows[i], &cols[j])
    })
}

/// Cumulative subset boundaries `[0, s0, s0 + s1, ...]` from subset sizes.
pub fn subset_indices_from_sizes(subset_sizes: &[usize]) -> Vec<usize> {
    let mut indices = Vec::with_capacity(subset_sizes.len() + 1);
    indices.push(0);
    let mut acc = 0usize;
    for &size in subset_sizes {
        acc += size;
        indices.push(acc);
    }
    indices
}

/// Check that subset boundaries are sorted and partition the whole dataset.
pub fn validate_subset_indices(subset_indices: &[usize], dataset_len: usize) -> Result<()> {
    if subset_indices.windows(2).any(|w| w[0] > w[1]) {
        return Err(EcdfError::UnorderedSubsets);
    }
    let first = subset_indices.first().copied().unwrap_or(0);
    let last = subset_indices.last().copied().unwrap_or(0);
    if subset_indices.is_empty() || first != 0 || last != dataset_len {
        return Err(EcdfError::IncompleteSubsets {
            first,
            last,
            len: dataset_len,
        });
    }
    Ok(())
}

/// ECDF vectors of all pairs of distinct subsets of `dataset`.
///
/// For every pair `(i, j)` with `j < i` the distances between the elements of
/// subset `i` and subset `j` are pooled into one ECDF vector. The result has
/// one row per bin and one column per pair.
pub fn ecdf_vector_list<T, D>(
    dataset: &[T],
    bins: ArrayView1<'_, f64>,
    distance_fn: &D,
    subset_indices: &[usize],
) -> Result<Array2<f64>>
where
    D: Fn(&T, &T) -> f64,
{
    validate_subset_indices(subset_indices, dataset.len())?;

    let n_subsets = subset_indices.len() - 1;
    let n_pairs = n_subsets * n_subsets.saturating_sub(1) / 2;
    let mut matrix = Array2::<f64>::zeros((bins.len(), n_pairs));

    let mut column = 0usize;
    for i in 0..n_subsets {
        for j in 0..i {
            let distances = create_distance_matrix_range(
                dataset,
                subset_indices[i]..subset_indices[i + 1],
                dataset,
                subset_indices[j]..subset_indices[j + 1],
                distance_fn,
            )?;
            let flat: Vec<f64> = distances.iter().copied().collect();
            let ecdf = empirical_cumulative_distribution_vector(&flat, bins)?;
            matrix.column_mut(column).assign(&ecdf);
            column += 1;
        }
    }
    Ok(matrix)
}

/// Bootstrapped ECDF vectors of the distances between `dataset_a` and `dataset_b`.
pub fn ecdf_vector_list_bootstrap<T, D>(
    dataset_a: &[T],
    dataset_b: &[T],
    bins: ArrayView1<'_, f64>,
    distance_fn: &D,
    n_samples: usize,
    rng: &mut dyn RngCore,
) -> Result<Array2<f64>>
where
    D: Fn(&T, &T) -> f64,
{
    let distances = create_distance_matrix(dataset_a, dataset_b, distance_fn);
    ecdf_vector_list_from_distances(distances.view(), bins, n_samples, rng)
}

/// Bootstrap ECDF vectors from a precomputed distance matrix.
///
/// Each sample redraws the rows and the columns with replacement and pools the
/// resampled sub-matrix into one ECDF vector.
pub fn ecdf_vector_list_from_distances(
    distances: ArrayView2<'_, f64>,
    bins: ArrayView1<'_, f64>,
    n_samples: usize,
    rng: &mut dyn RngCore,
) -> Result<Array2<f64>> {
    let (n_rows, n_cols) = distances.dim();
    if n_rows == 0 || n_cols == 0 {
        return Err(EcdfError::EmptyDistances);
    }

    let mut matrix = Array2::<f64>::zeros((bins.len(), n_samples));
    let mut pooled = Vec::with_capacity(n_rows * n_cols);
    for sample in 0..n_samples {
        let rows: Vec<usize> = (0..n_rows).map(|_| rng.gen_range(0..n_rows)).collect();
        let cols: Vec<usize> = (0..n_cols).map(|_| rng.gen_range(0..n_cols)).collect();
        pooled.clear();
        for &r in &rows {
            for &c in &cols {
                pooled.push(distances[(r, c)]);
            }
        }
        let ecdf = empirical_cumulative_distribution_vector(&pooled, bins)?;
        matrix.column_mut(sample).assign(&ecdf);
    }
    Ok(matrix)
}

/// Mean of every bin across all ECDF vectors (row means).
pub fn mean_of_ecdf_vectors(ecdf_list: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
    ecdf_list
        .mean_axis(Axis(1))
        .ok_or(EcdfError::InsufficientSamples(0))
}

/// Sample covariance between bins, treating each column as one observation.
pub fn covariance_of_ecdf_vectors(ecdf_list: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
    let n_obs = ecdf_list.ncols();
    if n_obs < 2 {
        return Err(EcdfError::InsufficientSamples(n_obs));
    }
    let mean = mean_of_ecdf_vectors(ecdf_list)?;
    let centered = &ecdf_list - &mean.insert_axis(Axis(1));
    Ok(centered.dot(&centered.t()) / (n_obs as f64 - 1.0))
}
