//! # Example Data - sample datasets for the demo visualizations
//!
//! Assembles nine small, unrelated datasets (scatter, bar, pie, map, usa,
//! strip, violin, features, sunburst) into one flat CSV file. Rows are
//! aligned purely by index; shorter datasets are padded with empty cells.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Datasets   │────▶│  Assembler  │────▶│   Writer    │────▶ public/exampleData.csv
//! │ (literals)  │     │  (padding)  │     │    (csv)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use example_data::{generate, GeneratorConfig};
//!
//! let summary = generate(&GeneratorConfig::default())?;
//! println!("{} rows x {} columns", summary.rows, summary.columns);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Cell, Dataset, ColumnSchema, Table
//! - [`datasets`] - The literal datasets and fixed header
//! - [`assembler`] - Ragged padding into a rectangular table
//! - [`writer`] - Delimited-text output
//! - [`config`] - Output path and delimiter resolution
//! - [`logs`] - Progress logging
//! - [`pipeline`] - End-to-end generation

// Core modules
pub mod error;
pub mod models;

// Data
pub mod datasets;

// Assembly and output
pub mod assembler;
pub mod writer;

// Ambient
pub mod config;
pub mod logs;

// Orchestration
pub mod pipeline;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{
    ConfigError,
    DatasetError,
    GenerateError,
    GenerateResult,
    WriteError,
    WriteResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Cell, ColumnGroup, ColumnSchema, Dataset, Table};

// =============================================================================
// Re-exports - Assembly and output
// =============================================================================

pub use assembler::{assemble, assemble_row, assemble_with_header, example_table, max_len};
pub use datasets::HEADER;
pub use writer::{to_csv_string, write_table, write_table_to_path};

// =============================================================================
// Re-exports - Config and pipeline
// =============================================================================

pub use config::GeneratorConfig;
pub use pipeline::{generate, GenerateSummary};
