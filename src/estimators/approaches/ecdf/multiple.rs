// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Axis, concatenate};
use rand::RngCore;

use super::model::EcdfModel;
use crate::error::{EcdfError, Result};
use crate::estimators::traits::ObjectiveFunction;

/// Several objective functions combined into one.
///
/// The ECDF lists of all members are stacked on top of each other, so the
/// combined model also captures correlations between the members. All
/// members must hold the same number of ECDF vectors. The combined bins are
/// the concatenation of the members' bins.
pub struct MultipleObjectives<'a, T> {
    members: Vec<Box<dyn ObjectiveFunction<T> + 'a>>,
    model: EcdfModel,
    spectral_condition: Option<f64>,
}

impl<'a, T> MultipleObjectives<'a, T> {
    pub fn new(
        members: Vec<Box<dyn ObjectiveFunction<T> + 'a>>,
        check_spectral_condition: bool,
    ) -> Result<Self> {
        let Some(first) = members.first() else {
            return Err(EcdfError::InvalidParameter(
                "at least one objective function is required".to_string(),
            ));
        };
        let n_columns = first.ecdf_list().ncols();
        for member in members.iter().skip(1) {
            let found = member.ecdf_list().ncols();
            if found != n_columns {
                return Err(EcdfError::ShapeMismatch {
                    expected: n_columns,
                    found,
                });
            }
        }

        let lists: Vec<_> = members.iter().map(|m| m.ecdf_list().view()).collect();
        let bins: Vec<_> = members.iter().map(|m| m.bins().view()).collect();
        let ecdf_list = concatenate(Axis(0), &lists)
            .map_err(|e| EcdfError::InvalidParameter(e.to_string()))?;
        let bins = concatenate(Axis(0), &bins)
            .map_err(|e| EcdfError::InvalidParameter(e.to_string()))?;

        let model = EcdfModel::from_ecdf_list(bins, ecdf_list)?;
        let spectral_condition = check_spectral_condition.then(|| model.check_spectral_condition());
        Ok(Self {
            members,
            model,
            spectral_condition,
        })
    }

    /// Spectral condition of the stacked covariance, if it was checked on construction.
    pub fn checked_spectral_condition(&self) -> Option<f64> {
        self.spectral_condition
    }

    pub fn members(&self) -> &[Box<dyn ObjectiveFunction<T> + 'a>] {
        &self.members
    }
}

impl<T> ObjectiveFunction<T> for MultipleObjectives<'_, T> {
    fn model(&self) -> &EcdfModel {
        &self.model
    }

    /// Concatenation of every member's ECDF vector for `dataset`.
    fn ecdf_vector(&self, dataset: &[T], rng: &mut dyn RngCore) -> Result<Array1<f64>> {
        let mut combined = Vec::with_capacity(self.model.n_bins());
        for member in &self.members {
            combined.extend(member.ecdf_vector(dataset, rng)?.iter().copied());
        }
        Ok(Array1::from(combined))
    }
}
