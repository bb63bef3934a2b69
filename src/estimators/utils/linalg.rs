// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Small dense linear algebra helpers for covariance matrices.
//!
//! Matrices live in `ndarray` everywhere else in the crate; they are copied
//! into `nalgebra` only for the factorisations.

use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, ArrayView1, ArrayView2};

/// Condition numbers above this value are reported as ill-conditioned.
pub const SPECTRAL_CONDITION_THRESHOLD: f64 = 1e3;

fn to_dmatrix(matrix: ArrayView2<'_, f64>) -> DMatrix<f64> {
    let (rows, cols) = matrix.dim();
    DMatrix::from_fn(rows, cols, |i, j| matrix[(i, j)])
}

/// Solve `matrix * x = rhs` with an LU decomposition.
///
/// Returns `None` if the matrix is singular, not square, or the solution is
/// not finite.
pub fn solve(matrix: ArrayView2<'_, f64>, rhs: ArrayView1<'_, f64>) -> Option<Array1<f64>> {
    let (rows, cols) = matrix.dim();
    if rows != cols || rows != rhs.len() {
        return None;
    }
    let a = to_dmatrix(matrix);
    let b = DVector::from_iterator(rhs.len(), rhs.iter().copied());
    let x = a.lu().solve(&b)?;
    if x.iter().all(|v| v.is_finite()) {
        Some(Array1::from_iter(x.iter().copied()))
    } else {
        None
    }
}

/// 2-norm condition number: largest over smallest singular value.
///
/// Singular matrices yield `f64::INFINITY`, an empty matrix yields `1.0`.
pub fn spectral_condition(matrix: ArrayView2<'_, f64>) -> f64 {
    if matrix.is_empty() {
        return 1.0;
    }
    let singular_values = to_dmatrix(matrix).singular_values();
    let max = singular_values.iter().copied().fold(0.0_f64, f64::max);
    let min = singular_values
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);
    if min <= 0.0 || !min.is_finite() {
        f64::INFINITY
    } else {
        max / min
    }
}

/// Log a warning when the condition number exceeds [`SPECTRAL_CONDITION_THRESHOLD`].
///
/// Returns the condition number.
pub fn check_spectral_condition(matrix: ArrayView2<'_, f64>) -> f64 {
    let condition = spectral_condition(matrix);
    if condition > SPECTRAL_CONDITION_THRESHOLD {
        log::warn!("the spectral condition of the covariance matrix is {condition}");
    } else {
        log::debug!("spectral condition of the covariance matrix: {condition}");
    }
    condition
}
