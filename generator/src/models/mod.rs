//! Domain models for the example data generator.
//!
//! - [`Cell`] - A single literal value (integer, decimal or text)
//! - [`Dataset`] - A named, fixed-width list of records
//! - [`ColumnSchema`] - Ordered output columns grouped by dataset
//! - [`Table`] - Header plus assembled rows, ready to be written

use serde::Serialize;
use std::fmt;
use std::ops::Range;

use crate::error::{DatasetError, DatasetResult};

// =============================================================================
// Cell
// =============================================================================

/// A literal value inside a dataset record.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Int(i64),
    /// Rendered in shortest round-trip form (`52.5200` → `52.52`).
    Decimal(f64),
    Text(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(v) => write!(f, "{}", v),
            Cell::Decimal(v) => write!(f, "{}", v),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Int(v)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Decimal(v)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

// =============================================================================
// Records
// =============================================================================

/// Conversion of a literal tuple into one dataset record.
pub trait IntoRecord {
    fn into_record(self) -> Vec<Cell>;
}

impl<A: Into<Cell>> IntoRecord for (A,) {
    fn into_record(self) -> Vec<Cell> {
        vec![self.0.into()]
    }
}

impl<A: Into<Cell>, B: Into<Cell>> IntoRecord for (A, B) {
    fn into_record(self) -> Vec<Cell> {
        vec![self.0.into(), self.1.into()]
    }
}

impl<A: Into<Cell>, B: Into<Cell>, C: Into<Cell>> IntoRecord for (A, B, C) {
    fn into_record(self) -> Vec<Cell> {
        vec![self.0.into(), self.1.into(), self.2.into()]
    }
}

impl<A: Into<Cell>, B: Into<Cell>, C: Into<Cell>, D: Into<Cell>> IntoRecord for (A, B, C, D) {
    fn into_record(self) -> Vec<Cell> {
        vec![self.0.into(), self.1.into(), self.2.into(), self.3.into()]
    }
}

impl IntoRecord for Vec<Cell> {
    fn into_record(self) -> Vec<Cell> {
        self
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// A named collection of records that all share the same width.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: String,
    columns: Vec<String>,
    records: Vec<Vec<Cell>>,
}

impl Dataset {
    /// Build a dataset, checking every record against the column count.
    pub fn new<R, I>(name: &str, columns: &[&str], records: I) -> DatasetResult<Self>
    where
        R: IntoRecord,
        I: IntoIterator<Item = R>,
    {
        if columns.is_empty() {
            return Err(DatasetError::NoColumns(name.to_string()));
        }

        let records: Vec<Vec<Cell>> = records.into_iter().map(IntoRecord::into_record).collect();

        for (row, record) in records.iter().enumerate() {
            if record.len() != columns.len() {
                return Err(DatasetError::WidthMismatch {
                    dataset: name.to_string(),
                    row,
                    expected: columns.len(),
                    found: record.len(),
                });
            }
        }

        Ok(Self {
            name: name.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            records,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns each record contributes to an output row.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, index: usize) -> Option<&[Cell]> {
        self.records.get(index).map(Vec::as_slice)
    }
}

// =============================================================================
// Column Schema
// =============================================================================

/// The slice of output columns owned by one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnGroup {
    pub dataset: String,
    pub columns: Vec<String>,
    pub row_count: usize,
    /// First output column index (inclusive).
    pub start: usize,
    /// Last output column index (exclusive).
    pub end: usize,
}

impl ColumnGroup {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Ordered output columns, grouped by contributing dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSchema {
    pub groups: Vec<ColumnGroup>,
}

impl ColumnSchema {
    /// Derive the schema from datasets in concatenation order.
    pub fn from_datasets(datasets: &[Dataset]) -> Self {
        let mut start = 0;
        let groups = datasets
            .iter()
            .map(|ds| {
                let group = ColumnGroup {
                    dataset: ds.name().to_string(),
                    columns: ds.columns().to_vec(),
                    row_count: ds.len(),
                    start,
                    end: start + ds.width(),
                };
                start = group.end;
                group
            })
            .collect();

        Self { groups }
    }

    /// Total number of output columns.
    pub fn width(&self) -> usize {
        self.groups.last().map(|g| g.end).unwrap_or(0)
    }

    /// Column names in output order.
    pub fn names(&self) -> Vec<String> {
        self.groups
            .iter()
            .flat_map(|g| g.columns.iter().cloned())
            .collect()
    }

    /// Column range occupied by the named dataset.
    pub fn span(&self, dataset: &str) -> Option<Range<usize>> {
        self.groups
            .iter()
            .find(|g| g.dataset == dataset)
            .map(ColumnGroup::span)
    }

    /// Check a fixed header against the derived column names.
    pub fn check_header(&self, header: &[&str]) -> DatasetResult<()> {
        if header.len() != self.width() {
            return Err(DatasetError::HeaderWidth {
                header: header.len(),
                datasets: self.width(),
            });
        }

        for (index, (expected, found)) in self.names().iter().zip(header).enumerate() {
            if expected != found {
                return Err(DatasetError::HeaderMismatch {
                    index,
                    expected: expected.clone(),
                    found: found.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// =============================================================================
// Table
// =============================================================================

/// Header plus padded rows; every row has exactly `header.len()` cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// Cell at `row` under the named column.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// A copy holding only the first `n` rows.
    pub fn head(&self, n: usize) -> Table {
        Table {
            header: self.header.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}
