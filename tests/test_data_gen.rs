//! Test data generation utilities for the tsvrw test suite

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tsvrw::Row;

/// Generate `rows` rows of `cols` fields each, e.g. `["r0c0", "r0c1", ...]`.
pub fn generate_rows(rows: usize, cols: usize) -> Vec<Row> {
    (0..rows)
        .map(|r| (0..cols).map(|c| format!("r{}c{}", r, c)).collect())
        .collect()
}

/// Rows with varying arity, including empty fields.
pub fn generate_ragged_rows() -> Vec<Row> {
    vec![
        vec!["id".into(), "name".into(), "email".into()],
        vec!["1".into(), "alice".into()],
        vec!["".into()],
        vec!["2".into(), "".into(), "bob@test.com".into(), "extra".into()],
        vec!["".into(), "".into()],
        vec!["with spaces and \"quotes\"".into(), "ünïcödé".into()],
    ]
}

/// Path for a scratch file inside `dir`.
pub fn scratch_file(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}
