// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::array;
use std::fs;

use ecdf_estimator::estimators::utils::output::{
    CHOOSE_BINS_PREFIX, OBJECTIVE_PREFIX, write_matrix, write_model_files, write_vector,
};

#[test]
fn vectors_are_written_one_value_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("v.txt");
    write_vector(&path, array![1.0, 0.25, -3.1234567].view()).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "1.000000\n0.250000\n-3.123457\n");
}

#[test]
fn matrices_are_written_row_by_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("m.txt");
    write_matrix(&path, array![[1.0, 2.5], [0.1234567, 3.0]].view()).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "1.000000 2.500000\n0.123457 3.000000\n");
}

#[test]
fn model_files_use_prefix_and_create_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("run").join("out");
    let paths = write_model_files(
        &nested,
        OBJECTIVE_PREFIX,
        array![1.0, 2.0].view(),
        array![[0.0, 1.0, 0.5], [1.0, 1.0, 0.5]].view(),
        array![0.5, 0.833333].view(),
        array![[0.25, 0.0], [0.0, 0.08]].view(),
    )
    .unwrap();

    let names: Vec<String> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "obj-func_bins.txt",
            "obj-func_ecdf-list.txt",
            "obj-func_mean-vector.txt",
            "obj-func_covar-matrix.txt",
        ]
    );
    let ecdf = fs::read_to_string(nested.join("obj-func_ecdf-list.txt")).unwrap();
    assert_eq!(ecdf.lines().count(), 2);
    assert_eq!(ecdf.lines().next().unwrap().split(' ').count(), 3);
    assert_eq!(CHOOSE_BINS_PREFIX, "choose-bins_");
}
