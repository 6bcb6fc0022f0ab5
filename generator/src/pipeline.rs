//! End-to-end generation: literal datasets → padded table → file.
//!
//! # Example
//!
//! ```rust,ignore
//! use example_data::{generate, GeneratorConfig};
//!
//! let summary = generate(&GeneratorConfig::default())?;
//! println!("Wrote {} rows to {}", summary.rows, summary.output_path.display());
//! ```

use serde::Serialize;
use std::path::PathBuf;

use crate::assembler::example_table;
use crate::config::{format_delimiter, GeneratorConfig};
use crate::error::GenerateResult;
use crate::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::writer::write_table_to_path;

/// What a generation run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSummary {
    pub output_path: PathBuf,
    pub rows: usize,
    pub columns: usize,
}

/// Assemble the shipped datasets and write them to `config.output_path`.
///
/// Fails with an IO error when the parent directory is missing or not
/// writable; the directory is never created.
pub fn generate(config: &GeneratorConfig) -> GenerateResult<GenerateSummary> {
    let table = example_table()?;

    log_info(format!("Assembled {} datasets", crate::datasets::ORDER.len()));
    log_info_indent(format!("Rows: {}", table.row_count()), 1);
    log_info_indent(format!("Columns: {}", table.column_count()), 1);
    log_info_indent(format!("Delimiter: '{}'", format_delimiter(config.delimiter)), 1);

    if config.output_path.exists() {
        log_warning(format!("Overwriting {}", config.output_path.display()));
    }

    write_table_to_path(&table, &config.output_path, config.delimiter)?;
    log_success(format!("Written to {}", config.output_path.display()));

    Ok(GenerateSummary {
        output_path: config.output_path.clone(),
        rows: table.row_count(),
        columns: table.column_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GenerateError, WriteError};
    use crate::logs::set_quiet;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_generate_writes_file() {
        set_quiet(true);
        let dir = tempdir().unwrap();
        let config = GeneratorConfig::default().with_output(Some(dir.path().join("exampleData.csv")));

        let summary = generate(&config).unwrap();
        assert_eq!(summary.rows, 50);
        assert_eq!(summary.columns, 21);

        let content = fs::read_to_string(&summary.output_path).unwrap();
        assert!(content.starts_with("scatter_x,scatter_y,bar_label,bar_val,"));
        assert_eq!(content.matches("\r\n").count(), 51);
    }

    #[test]
    fn test_generate_twice_is_identical() {
        set_quiet(true);
        let dir = tempdir().unwrap();
        let config = GeneratorConfig::default().with_output(Some(dir.path().join("data.csv")));

        generate(&config).unwrap();
        let first = fs::read(&config.output_path).unwrap();
        generate(&config).unwrap();
        let second = fs::read(&config.output_path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_missing_directory() {
        set_quiet(true);
        let dir = tempdir().unwrap();
        let config = GeneratorConfig::default()
            .with_output(Some(dir.path().join("public").join("exampleData.csv")));

        let err = generate(&config).unwrap_err();
        assert!(matches!(err, GenerateError::Write(WriteError::Io(_))));
    }
}
