//! gen-example-data CLI - Write the demo visualization dataset
//!
//! ```bash
//! gen-example-data                       # Write public/exampleData.csv
//! gen-example-data generate -o out.csv   # Write somewhere else
//! gen-example-data preview -n 5          # Print the first rows to stdout
//! gen-example-data schema                # Print the column layout as JSON
//! ```

use clap::{Parser, Subcommand};
use example_data::{
    config::{format_delimiter, GeneratorConfig},
    datasets, example_table, generate, logs, write_table, ColumnSchema, GenerateResult,
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gen-example-data")]
#[command(about = "Generate the example CSV used by the demo visualizations", long_about = None)]
struct Cli {
    /// Suppress progress output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the assembled table to the output file (default)
    Generate {
        /// Output file (default: public/exampleData.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Field delimiter (default: ',')
        #[arg(short, long)]
        delimiter: Option<char>,
    },

    /// Print the assembled table to stdout
    Preview {
        /// Number of data rows to print (default: all)
        #[arg(short = 'n', long)]
        rows: Option<usize>,

        /// Field delimiter (default: ',')
        #[arg(short, long)]
        delimiter: Option<char>,
    },

    /// Show which columns each dataset occupies
    Schema,
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logs::set_quiet(cli.quiet);

    let command = cli.command.unwrap_or(Commands::Generate {
        output: None,
        delimiter: None,
    });

    let result = match command {
        Commands::Generate { output, delimiter } => cmd_generate(output, delimiter),
        Commands::Preview { rows, delimiter } => cmd_preview(rows, delimiter),
        Commands::Schema => cmd_schema(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_generate(output: Option<PathBuf>, delimiter: Option<char>) -> GenerateResult<()> {
    let config = GeneratorConfig::from_env()?
        .with_output(output)
        .with_delimiter(delimiter)?;

    eprintln!("📄 Generating: {}", config.output_path.display());
    let summary = generate(&config)?;
    eprintln!("✨ Done! {} rows x {} columns", summary.rows, summary.columns);

    Ok(())
}

fn cmd_preview(rows: Option<usize>, delimiter: Option<char>) -> GenerateResult<()> {
    let config = GeneratorConfig::from_env()?.with_delimiter(delimiter)?;

    let table = example_table()?;
    let table = match rows {
        Some(n) => table.head(n),
        None => table,
    };

    logs::log_info(format!(
        "Previewing {} rows, delimiter '{}'",
        table.row_count(),
        format_delimiter(config.delimiter)
    ));
    write_table(&table, io::stdout().lock(), config.delimiter)?;

    Ok(())
}

fn cmd_schema() -> GenerateResult<()> {
    let schema = ColumnSchema::from_datasets(&datasets::all()?);
    println!("{}", schema.to_json()?);
    Ok(())
}
