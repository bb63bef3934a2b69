// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Errors raised while building or evaluating ECDF-based objective functions.
#[derive(Debug, Error)]
pub enum EcdfError {
    #[error("subset indices are out of order")]
    UnorderedSubsets,

    #[error(
        "not all elements of the dataset are distributed into subsets \
         (subsets cover {first}..{last}, dataset has {len} elements)"
    )]
    IncompleteSubsets { first: usize, last: usize, len: usize },

    #[error("cannot build an ECDF vector from an empty list of distances")]
    EmptyDistances,

    #[error("covariance needs at least two ECDF vectors, got {0}")]
    InsufficientSamples(usize),

    #[error("vector has {found} entries but the objective function has {expected} bins")]
    DimensionMismatch { expected: usize, found: usize },

    #[error(
        "all objective functions must contain the same number of ECDF vectors \
         (expected {expected}, found {found})"
    )]
    ShapeMismatch { expected: usize, found: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("plotting failed: {0}")]
    Plot(String),
}

pub type Result<T> = std::result::Result<T, EcdfError>;
