//! Generator configuration.
//!
//! Defaults are hardcoded. The output path and delimiter can be overridden
//! from the environment (or a `.env` file loaded by the CLI), and CLI flags
//! take precedence over both.

use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Output path, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "public/exampleData.csv";

/// Field delimiter.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Environment variable overriding [`DEFAULT_OUTPUT_PATH`].
pub const OUTPUT_ENV: &str = "EXAMPLE_DATA_OUTPUT";

/// Environment variable overriding [`DEFAULT_DELIMITER`].
pub const DELIMITER_ENV: &str = "EXAMPLE_DATA_DELIMITER";

/// Resolved settings for one generator run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub output_path: PathBuf,
    pub delimiter: u8,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl GeneratorConfig {
    /// Defaults, overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(OUTPUT_ENV).filter(|p| !p.trim().is_empty()) {
            config.output_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(DELIMITER_ENV) {
            config.delimiter = parse_delimiter(&raw)?;
        }

        Ok(config)
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        if let Some(path) = output {
            self.output_path = path;
        }
        self
    }

    pub fn with_delimiter(mut self, delimiter: Option<char>) -> Result<Self, ConfigError> {
        if let Some(c) = delimiter {
            self.delimiter = delimiter_byte(c)?;
        }
        Ok(self)
    }
}

/// Parse a delimiter value; accepts a single ASCII character or `\t`.
pub fn parse_delimiter(raw: &str) -> Result<u8, ConfigError> {
    if raw == "\\t" {
        return Ok(b'\t');
    }

    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => delimiter_byte(c),
        _ => Err(ConfigError::InvalidDelimiter(raw.to_string())),
    }
}

fn delimiter_byte(c: char) -> Result<u8, ConfigError> {
    if !c.is_ascii() {
        return Err(ConfigError::InvalidDelimiter(c.to_string()));
    }
    if matches!(c, '"' | '\r' | '\n') {
        return Err(ConfigError::ReservedDelimiter(format_delimiter(c as u8)));
    }
    Ok(c as u8)
}

/// Printable form of a delimiter for log lines.
pub fn format_delimiter(d: u8) -> String {
    match d {
        b'\t' => "\\t".to_string(),
        b'\r' => "\\r".to_string(),
        b'\n' => "\\n".to_string(),
        c => (c as char).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.output_path, PathBuf::from("public/exampleData.csv"));
        assert_eq!(config.delimiter, b',');
    }

    #[test]
    fn test_env_overrides() {
        let config = GeneratorConfig::from_lookup(lookup(&[
            (OUTPUT_ENV, "out/data.tsv"),
            (DELIMITER_ENV, "\\t"),
        ]))
        .unwrap();
        assert_eq!(config.output_path, PathBuf::from("out/data.tsv"));
        assert_eq!(config.delimiter, b'\t');
    }

    #[test]
    fn test_blank_output_env_ignored() {
        let config = GeneratorConfig::from_lookup(lookup(&[(OUTPUT_ENV, "  ")])).unwrap();
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
    }

    #[test]
    fn test_flags_take_precedence() {
        let config = GeneratorConfig::from_lookup(lookup(&[
            (OUTPUT_ENV, "from-env.csv"),
            (DELIMITER_ENV, "|"),
        ]))
        .unwrap()
        .with_output(Some(PathBuf::from("from-flag.csv")))
        .with_delimiter(Some(';'))
        .unwrap();

        assert_eq!(config.output_path, PathBuf::from("from-flag.csv"));
        assert_eq!(config.delimiter, b';');
    }

    #[test]
    fn test_absent_flags_keep_values() {
        let config = GeneratorConfig::default()
            .with_output(None)
            .with_delimiter(None)
            .unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_invalid_delimiters() {
        assert_eq!(
            parse_delimiter(";;"),
            Err(ConfigError::InvalidDelimiter(";;".into()))
        );
        assert_eq!(parse_delimiter(""), Err(ConfigError::InvalidDelimiter("".into())));
        assert_eq!(parse_delimiter("é"), Err(ConfigError::InvalidDelimiter("é".into())));
        assert_eq!(
            parse_delimiter("\""),
            Err(ConfigError::ReservedDelimiter("\"".into()))
        );
        assert!(GeneratorConfig::from_lookup(lookup(&[(DELIMITER_ENV, "ab")])).is_err());
    }

    #[test]
    fn test_format_delimiter() {
        assert_eq!(format_delimiter(b'\t'), "\\t");
        assert_eq!(format_delimiter(b','), ",");
    }
}
