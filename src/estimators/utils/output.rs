// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plain-text export of an ECDF model.
//!
//! Values are written with six decimals, one matrix row per line and columns
//! separated by a single space. One-dimensional arrays are written one value
//! per line.

use ndarray::{ArrayView1, ArrayView2};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// File name prefix used when an objective function is constructed.
pub const OBJECTIVE_PREFIX: &str = "obj-func_";
/// File name prefix used after bins have been re-selected.
pub const CHOOSE_BINS_PREFIX: &str = "choose-bins_";

pub fn write_vector(path: &Path, values: ArrayView1<'_, f64>) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for v in values.iter() {
        writeln!(out, "{v:.6}")?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_matrix(path: &Path, values: ArrayView2<'_, f64>) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for row in values.rows() {
        let line = row
            .iter()
            .map(|v| format!("{v:.6}"))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

/// Write bins, ECDF list, mean vector and covariance matrix into `dir`.
///
/// The directory is created if missing. Returns the written paths in that order.
pub fn write_model_files(
    dir: &Path,
    prefix: &str,
    bins: ArrayView1<'_, f64>,
    ecdf_list: ArrayView2<'_, f64>,
    mean_vector: ArrayView1<'_, f64>,
    covar_matrix: ArrayView2<'_, f64>,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let bins_path = dir.join(format!("{prefix}bins.txt"));
    let ecdf_path = dir.join(format!("{prefix}ecdf-list.txt"));
    let mean_path = dir.join(format!("{prefix}mean-vector.txt"));
    let covar_path = dir.join(format!("{prefix}covar-matrix.txt"));

    write_vector(&bins_path, bins)?;
    write_matrix(&ecdf_path, ecdf_list)?;
    write_vector(&mean_path, mean_vector)?;
    write_matrix(&covar_path, covar_matrix)?;
    log::debug!("wrote ECDF model files with prefix {prefix:?} to {}", dir.display());

    Ok(vec![bins_path, ecdf_path, mean_path, covar_path])
}
