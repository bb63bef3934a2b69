// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # ecdf_estimator
//!
//! Objective functions for identifying the parameters of random models from
//! empirical cumulative distribution functions (ECDFs) of distances between
//! realisations.
//!
//! ## Quick Start
//!
//! ```rust
//! use ecdf_estimator::estimators::objective::{Objective, ObjectiveFunction};
//! use ndarray::array;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! // Reference realisations, split into four subsets of ten.
//! let reference: Vec<f64> = (0..40).map(|i| ((i * 37) % 11) as f64 / 10.0).collect();
//! let distance = |a: &f64, b: &f64| (a - b).abs();
//!
//! let objective = Objective::standard(
//!     reference.clone(),
//!     array![0.2, 0.4, 0.6],
//!     distance,
//!     &[10, 10, 10, 10],
//! )
//! .unwrap();
//!
//! // Score a candidate dataset: smaller is closer to the reference.
//! let mut rng = StdRng::seed_from_u64(7);
//! let score = objective.evaluate(&reference[..10], &mut rng).unwrap();
//! assert!(score.is_finite());
//! ```
//!
//! ## Method
//!
//! A reference dataset is split into subsets. The distances between the
//! elements of two distinct subsets are summarised as an ECDF vector, that is
//! the fraction of distances below each of a fixed set of bins. The ECDF
//! vectors of all subset pairs are modelled as a Gaussian with sample mean
//! and covariance. A candidate dataset is compared with one reference subset
//! and scored by the squared Mahalanobis distance of its ECDF vector from the
//! mean. Under the reference parameters the score is approximately
//! chi-squared distributed with one degree of freedom per bin.
//!
//! ## Objective Functions
//!
//! | Type | Reference data | ECDF vectors |
//! |------|----------------|--------------|
//! | [`StandardObjective`](estimators::approaches::StandardObjective) | one dataset in subsets | one per subset pair |
//! | [`BootstrapObjective`](estimators::approaches::BootstrapObjective) | two datasets | bootstrap resamples |
//! | [`MultipleObjectives`](estimators::approaches::MultipleObjectives) | several objectives | stacked |
//!
//! Bins can be thinned out after construction with `choose_bins`, see
//! [`ChooseBinsOptions`](estimators::approaches::ChooseBinsOptions).
//!
//! ## Diagnostics
//!
//! The [`plot`] module draws the reference ECDF vectors, their mean, and the
//! histogram of reference scores against the chi-squared density. Warnings
//! about ill-conditioned or singular covariance matrices and dropped
//! duplicate bins are emitted through the `log` facade.
//!
//! ## Former package name
//!
//! This crate supersedes the deprecated `cil_estimator` package. Its plotting
//! helpers live in [`plot`]; the old `plot_correlation_vectors` name is kept
//! as a deprecated alias.

pub mod error;
pub mod estimators;
pub mod plot;

pub use error::{EcdfError, Result};
pub use estimators::ObjectiveFunction;
