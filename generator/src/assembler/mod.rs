//! Zip ragged datasets into one rectangular table.
//!
//! # Layout
//!
//! ```text
//! scatter (5)   bar (5)   ...   usa (50)   ...   sunburst (9)
//! ┌─────┬─────┬─────┬─────┬───┬────┬─────┬────┬───┬──────┬───┬────┐
//! │  1  │  2  │  A  │ 10  │...│ AL │ Ala.│ 45 │...│ Eve  │   │ 10 │  row 0
//! │ ... │     │     │     │   │    │     │    │   │      │   │    │
//! │     │     │     │     │...│ GA │ Geo.│ 72 │...│      │   │    │  row 9
//! └─────┴─────┴─────┴─────┴───┴────┴─────┴────┴───┴──────┴───┴────┘
//! ```
//!
//! Row `i` takes record `i` from every dataset. Datasets shorter than the
//! table contribute `width` empty strings instead.

use crate::datasets::{self, HEADER};
use crate::error::DatasetResult;
use crate::models::{ColumnSchema, Dataset, Table};

/// Number of rows needed to hold the longest dataset.
pub fn max_len(datasets: &[Dataset]) -> usize {
    datasets.iter().map(Dataset::len).max().unwrap_or(0)
}

/// Build output row `index` by concatenating every dataset's contribution.
pub fn assemble_row(datasets: &[Dataset], index: usize) -> Vec<String> {
    let width: usize = datasets.iter().map(Dataset::width).sum();
    let mut row = Vec::with_capacity(width);

    for ds in datasets {
        match ds.record(index) {
            Some(record) => row.extend(record.iter().map(ToString::to_string)),
            None => row.resize(row.len() + ds.width(), String::new()),
        }
    }

    row
}

/// Assemble datasets under the header derived from their own columns.
pub fn assemble(datasets: &[Dataset]) -> Table {
    let header = ColumnSchema::from_datasets(datasets).names();
    let rows = (0..max_len(datasets))
        .map(|i| assemble_row(datasets, i))
        .collect();

    Table { header, rows }
}

/// Assemble datasets under a fixed header, rejecting any disagreement.
pub fn assemble_with_header(datasets: &[Dataset], header: &[&str]) -> DatasetResult<Table> {
    ColumnSchema::from_datasets(datasets).check_header(header)?;

    let mut table = assemble(datasets);
    table.header = header.iter().map(|h| h.to_string()).collect();
    Ok(table)
}

/// The shipped datasets under the fixed [`HEADER`].
pub fn example_table() -> DatasetResult<Table> {
    assemble_with_header(&datasets::all()?, &HEADER)
}
