// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::array;

use ecdf_estimator::EcdfError;
use ecdf_estimator::estimators::approaches::ecdf::EcdfModel;

fn known_model() -> EcdfModel {
    // mean = [1/3, 2/3], covariance = [[1/3, 1/6], [1/6, 1/3]]
    EcdfModel::from_ecdf_list(
        array![1.5, 2.5],
        array![[1.0, 0.0, 0.0], [1.0, 0.0, 1.0]],
    )
    .unwrap()
}

#[test]
fn mean_vector_scores_zero() {
    let model = known_model();
    let mean = model.mean_vector.clone();
    assert_abs_diff_eq!(model.evaluate_from_ecdf(mean.view()).unwrap(), 0.0, epsilon = 1e-12);
    assert_eq!(model.n_bins(), 2);
    assert_eq!(model.n_vectors(), 3);
}

#[test]
fn mahalanobis_distance_of_known_deviation() {
    let model = known_model();
    // Inverse covariance is [[4, -2], [-2, 4]]; deviation [1, 0] scores 4
    let vector = &model.mean_vector - &array![1.0, 0.0];
    let score = model.evaluate_from_ecdf(vector.view()).unwrap();
    assert_abs_diff_eq!(score, 4.0, epsilon = 1e-9);

    // deviation [1, 1] scores 4 - 2 - 2 + 4 = 4
    let vector = &model.mean_vector - &array![1.0, 1.0];
    let score = model.evaluate_from_ecdf(vector.view()).unwrap();
    assert_abs_diff_eq!(score, 4.0, epsilon = 1e-9);
    assert!(!model.used_singular_fallback());
}

#[test]
fn wrong_vector_length_is_rejected() {
    let model = known_model();
    let err = model.evaluate_from_ecdf(array![0.5].view()).unwrap_err();
    assert!(matches!(
        err,
        EcdfError::DimensionMismatch { expected: 2, found: 1 }
    ));
}

#[test]
fn singular_covariance_falls_back_to_euclidean_norm() {
    // First bin is constant, so its variance is zero
    let model = EcdfModel::from_ecdf_list(
        array![1.0, 2.0],
        array![[1.0, 1.0, 1.0], [0.0, 1.0, 0.0]],
    )
    .unwrap();
    assert!(!model.used_singular_fallback());
    assert!(model.spectral_condition() > 1e3);

    let vector = array![0.0, 1.0 / 3.0];
    let score = model.evaluate_from_ecdf(vector.view()).unwrap();
    assert_abs_diff_eq!(score, 1.0, epsilon = 1e-12);
    assert!(model.used_singular_fallback());

    // Repeated fallback keeps working
    let score = model.evaluate_from_ecdf(vector.view()).unwrap();
    assert_abs_diff_eq!(score, 1.0, epsilon = 1e-12);
}

#[test]
fn bins_must_match_rows() {
    let err = EcdfModel::from_ecdf_list(array![1.0], array![[0.0, 1.0], [1.0, 1.0]]).unwrap_err();
    assert!(matches!(
        err,
        EcdfError::DimensionMismatch { expected: 1, found: 2 }
    ));
}

#[test]
fn single_vector_cannot_form_a_model() {
    let err = EcdfModel::from_ecdf_list(array![1.0, 2.0], array![[0.2], [0.8]]).unwrap_err();
    assert!(matches!(err, EcdfError::InsufficientSamples(1)));
}
