//! Delimited-text output for assembled tables.
//!
//! Records are written with minimal quoting: only fields containing the
//! delimiter, a quote or a line break are wrapped in `"`, with embedded
//! quotes doubled. Every record ends with `\r\n`.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{WriteError, WriteResult};
use crate::models::Table;

/// Write the header once, then every row, to `out`.
pub fn write_table<W: Write>(table: &Table, out: W, delimiter: u8) -> WriteResult<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(Terminator::CRLF)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(out);

    writer.write_record(&table.header)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Create (or truncate) the file at `path` and write the table into it.
///
/// The parent directory must already exist.
pub fn write_table_to_path<P: AsRef<Path>>(table: &Table, path: P, delimiter: u8) -> WriteResult<()> {
    let file = File::create(path.as_ref())?;
    write_table(table, file, delimiter)
}

/// Render the table in memory.
pub fn to_csv_string(table: &Table, delimiter: u8) -> WriteResult<String> {
    let mut buf = Vec::new();
    write_table(table, &mut buf, delimiter)?;
    String::from_utf8(buf)
        .map_err(|e| WriteError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::example_table;
    use crate::datasets::HEADER;
    use std::fs;
    use tempfile::tempdir;

    fn small_table() -> Table {
        Table {
            header: vec!["label".into(), "value".into()],
            rows: vec![
                vec!["a,b".into(), "1".into()],
                vec!["say \"hi\"".into(), "".into()],
                vec!["line\nbreak".into(), "-0.5".into()],
            ],
        }
    }

    #[test]
    fn test_minimal_quoting() {
        let out = to_csv_string(&small_table(), b',').unwrap();
        assert_eq!(
            out,
            "label,value\r\n\"a,b\",1\r\n\"say \"\"hi\"\"\",\r\n\"line\nbreak\",-0.5\r\n"
        );
    }

    #[test]
    fn test_custom_delimiter() {
        let out = to_csv_string(&small_table(), b';').unwrap();
        assert!(out.starts_with("label;value\r\na,b;1\r\n"));
    }

    #[test]
    fn test_header_written_once_first() {
        let out = to_csv_string(&example_table().unwrap(), b',').unwrap();
        let lines: Vec<&str> = out.split("\r\n").filter(|l| !l.is_empty()).collect();

        assert_eq!(lines.len(), 51);
        assert_eq!(lines[0], HEADER.join(","));
        assert_eq!(lines.iter().filter(|l| l.starts_with("scatter_x,")).count(), 1);
        assert_eq!(
            lines[1],
            "1,2,A,10,Product A,300,London,51.5074,-0.1278,8908081,AL,Alabama,45,A,1,1,0,0,Eve,,10"
        );
        assert_eq!(lines[10], ",,,,,,,,,,GA,Georgia,72,,,5,,,,,");
        assert!(lines.iter().all(|l| l.split(',').count() == 21));
    }

    #[test]
    fn test_write_to_path_is_deterministic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("exampleData.csv");
        let table = example_table().unwrap();

        write_table_to_path(&table, &path, b',').unwrap();
        let first = fs::read(&path).unwrap();
        write_table_to_path(&table, &path, b',').unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, to_csv_string(&table, b',').unwrap().into_bytes());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale content that is longer than the new table\n".repeat(10)).unwrap();

        write_table_to_path(&small_table(), &path, b',').unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("label,value\r\n"));
        assert!(!content.contains("stale"));
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("public").join("exampleData.csv");

        let err = write_table_to_path(&small_table(), &path, b',').unwrap_err();
        match err {
            WriteError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected IO error, got {:?}", other),
        }
        assert!(!path.exists());
    }
}
