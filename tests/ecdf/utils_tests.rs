// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::{Array2, array};
use rand::SeedableRng;
use rand::rngs::StdRng;

use ecdf_estimator::EcdfError;
use ecdf_estimator::estimators::approaches::ecdf::utils::{
    covariance_of_ecdf_vectors, create_distance_matrix, create_distance_matrix_range,
    ecdf_vector_list, ecdf_vector_list_bootstrap, ecdf_vector_list_from_distances,
    empirical_cumulative_distribution_vector, mean_of_ecdf_vectors, subset_indices_from_sizes,
    validate_subset_indices,
};

use crate::test_helpers::abs_diff;

#[test]
fn ecdf_vector_counts_strictly_smaller_distances() {
    let distances = [0.1, 0.2, 0.3, 0.4];
    // Unsorted bins, one equal to a distance (not counted), one below all
    let bins = array![0.25, 0.1, 1.0, 0.0];
    let ecdf = empirical_cumulative_distribution_vector(&distances, bins.view()).unwrap();
    let expected = [0.5, 0.0, 1.0, 0.0];
    for (v, e) in ecdf.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*v, *e, epsilon = 1e-12);
    }
}

#[test]
fn ecdf_vector_never_counts_nan_distances() {
    let nan = 0.0_f64 / 0.0;
    for distances in [
        [nan, 0.1, 0.2, 0.3],
        [-nan, 0.1, 0.2, 0.3],
        [0.2, f64::NAN, 0.3, 0.1],
    ] {
        let bins = array![0.15, 0.25, 1.0];
        let ecdf = empirical_cumulative_distribution_vector(&distances, bins.view()).unwrap();
        let expected = [0.25, 0.5, 0.75];
        for (v, e) in ecdf.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*v, *e, epsilon = 1e-12);
        }
    }
}

#[test]
fn ecdf_vector_rejects_empty_distances() {
    let bins = array![1.0];
    let err = empirical_cumulative_distribution_vector(&[], bins.view()).unwrap_err();
    assert!(matches!(err, EcdfError::EmptyDistances));
}

#[test]
fn distance_matrix_full_and_ranged() {
    let a = vec![0.0, 1.0];
    let b = vec![0.0, 2.0, 5.0];
    let d = create_distance_matrix(&a, &b, &abs_diff);
    assert_eq!(d, array![[0.0, 2.0, 5.0], [1.0, 1.0, 4.0]]);

    let sub = create_distance_matrix_range(&a, 1..2, &b, 1..3, &abs_diff).unwrap();
    assert_eq!(sub, array![[1.0, 4.0]]);
}

#[test]
fn distance_matrix_range_rejects_invalid_ranges() {
    let a = vec![0.0, 1.0, 2.0];
    #[allow(clippy::reversed_empty_ranges)]
    let inverted = create_distance_matrix_range(&a, 2..1, &a, 0..3, &abs_diff);
    assert!(matches!(inverted, Err(EcdfError::InvalidParameter(_))));

    let past_end = create_distance_matrix_range(&a, 0..3, &a, 1..4, &abs_diff);
    assert!(matches!(past_end, Err(EcdfError::InvalidParameter(_))));

    let empty = create_distance_matrix_range(&a, 3..3, &a, 0..3, &abs_diff).unwrap();
    assert_eq!(empty.dim(), (0, 3));
}

#[test]
fn subset_boundaries_and_validation() {
    assert_eq!(subset_indices_from_sizes(&[2, 3, 1]), vec![0, 2, 5, 6]);
    assert!(validate_subset_indices(&[0, 2, 5, 6], 6).is_ok());

    assert!(matches!(
        validate_subset_indices(&[0, 3, 2, 6], 6),
        Err(EcdfError::UnorderedSubsets)
    ));
    assert!(matches!(
        validate_subset_indices(&[0, 2, 5], 6),
        Err(EcdfError::IncompleteSubsets { last: 5, len: 6, .. })
    ));
    assert!(matches!(
        validate_subset_indices(&[1, 6], 6),
        Err(EcdfError::IncompleteSubsets { first: 1, .. })
    ));
    assert!(matches!(
        validate_subset_indices(&[], 0),
        Err(EcdfError::IncompleteSubsets { .. })
    ));
}

fn three_subset_list() -> Array2<f64> {
    // Subsets {0,0}, {1,1}, {3,3}: pair distances are 1, 3 and 2
    let dataset = vec![0.0, 0.0, 1.0, 1.0, 3.0, 3.0];
    let bins = array![1.5, 2.5];
    ecdf_vector_list(&dataset, bins.view(), &abs_diff, &[0, 2, 4, 6]).unwrap()
}

#[test]
fn ecdf_vector_list_has_one_column_per_subset_pair() {
    let list = three_subset_list();
    // Columns ordered (1,0), (2,0), (2,1)
    assert_eq!(list, array![[1.0, 0.0, 0.0], [1.0, 0.0, 1.0]]);
}

#[test]
fn ecdf_vector_list_propagates_subset_errors() {
    let dataset = vec![0.0, 1.0, 2.0];
    let bins = array![1.0];
    let err = ecdf_vector_list(&dataset, bins.view(), &abs_diff, &[0, 2]).unwrap_err();
    assert!(matches!(err, EcdfError::IncompleteSubsets { .. }));
}

#[test]
fn mean_and_covariance_of_known_list() {
    let list = three_subset_list();
    let mean = mean_of_ecdf_vectors(list.view()).unwrap();
    assert_abs_diff_eq!(mean[0], 1.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(mean[1], 2.0 / 3.0, epsilon = 1e-12);

    let cov = covariance_of_ecdf_vectors(list.view()).unwrap();
    assert_eq!(cov.dim(), (2, 2));
    assert_abs_diff_eq!(cov[(0, 0)], 1.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(cov[(1, 1)], 1.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(cov[(0, 1)], 1.0 / 6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(cov[(1, 0)], cov[(0, 1)], epsilon = 1e-15);
}

#[test]
fn covariance_needs_two_vectors() {
    let list = array![[0.5], [1.0]];
    let err = covariance_of_ecdf_vectors(list.view()).unwrap_err();
    assert!(matches!(err, EcdfError::InsufficientSamples(1)));
}

#[test]
fn bootstrap_of_constant_distances_is_constant() {
    let distances = Array2::from_elem((3, 4), 2.0);
    let bins = array![1.0, 3.0];
    let mut rng = StdRng::seed_from_u64(11);
    let list = ecdf_vector_list_from_distances(distances.view(), bins.view(), 5, &mut rng).unwrap();
    assert_eq!(list.dim(), (2, 5));
    for column in list.columns() {
        assert_abs_diff_eq!(column[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(column[1], 1.0, epsilon = 1e-12);
    }
}

#[test]
fn bootstrap_rejects_empty_distance_matrix() {
    let distances = Array2::<f64>::zeros((0, 3));
    let bins = array![1.0];
    let mut rng = StdRng::seed_from_u64(0);
    let err =
        ecdf_vector_list_from_distances(distances.view(), bins.view(), 3, &mut rng).unwrap_err();
    assert!(matches!(err, EcdfError::EmptyDistances));
}

#[test]
fn bootstrap_is_reproducible_with_seed() {
    let a: Vec<f64> = (0..12).map(|i| i as f64 * 0.5).collect();
    let b: Vec<f64> = (0..9).map(|i| i as f64 * 0.7 + 0.2).collect();
    let bins = array![0.5, 1.5, 3.0, 4.5];

    let mut rng1 = StdRng::seed_from_u64(42);
    let mut rng2 = StdRng::seed_from_u64(42);
    let l1 = ecdf_vector_list_bootstrap(&a, &b, bins.view(), &abs_diff, 20, &mut rng1).unwrap();
    let l2 = ecdf_vector_list_bootstrap(&a, &b, bins.view(), &abs_diff, 20, &mut rng2).unwrap();
    assert_eq!(l1, l2);
    assert_eq!(l1.dim(), (4, 20));
    // ECDF values are monotone in the (sorted) bins
    for column in l1.columns() {
        for w in column.to_vec().windows(2) {
            assert!(w[0] <= w[1]);
        }
    }
}
