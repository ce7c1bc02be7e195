//! ThresholdClamp CLI — apply the clamp to paired CSV columns.
//!
//! Commands:
//! - `apply` — read a value column and a threshold column from a CSV file,
//!   zero every value above its threshold, and write the values back out

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use threshclamp_core::ClampConfig;

#[derive(Parser)]
#[command(
    name = "threshclamp",
    about = "ThresholdClamp CLI — zero every value above its paired threshold"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clamp the value column of a CSV file against its threshold column.
    Apply {
        /// Input CSV with a header row.
        #[arg(long)]
        input: PathBuf,

        /// Output CSV path. Defaults to stdout.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Path to a TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Force the parallel path (overrides the config file).
        #[arg(long, default_value_t = false)]
        parallel: bool,

        /// Header of the value column.
        #[arg(long, default_value = "value")]
        value_column: String,

        /// Header of the threshold column.
        #[arg(long, default_value = "threshold")]
        threshold_column: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Apply {
            input,
            output,
            config,
            parallel,
            value_column,
            threshold_column,
        } => run_apply(
            &input,
            output.as_deref(),
            config.as_deref(),
            parallel,
            &value_column,
            &threshold_column,
        ),
    }
}

fn run_apply(
    input: &Path,
    output: Option<&Path>,
    config: Option<&Path>,
    parallel: bool,
    value_column: &str,
    threshold_column: &str,
) -> Result<()> {
    let mut config = match config {
        Some(path) => ClampConfig::load(path)?,
        None => ClampConfig::default(),
    };
    if parallel {
        config.parallel = true;
    }

    let (mut values, thresholds) = read_columns(input, value_column, threshold_column)?;
    let zeroed = config.apply(&mut values, &thresholds)?;

    match output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create '{}'", path.display()))?;
            write_values(file, &values)?;
        }
        None => write_values(std::io::stdout().lock(), &values)?,
    }

    eprintln!("Clamped {} values: {} zeroed", values.len(), zeroed);
    Ok(())
}

/// Read the named value and threshold columns from a headered CSV file.
fn read_columns(
    path: &Path,
    value_column: &str,
    threshold_column: &str,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open '{}'", path.display()))?;

    let headers = rdr.headers()?.clone();
    let column_index = |name: &str| -> Result<usize> {
        match headers.iter().position(|h| h.trim() == name) {
            Some(idx) => Ok(idx),
            None => bail!("column '{name}' not found in '{}'", path.display()),
        }
    };
    let value_idx = column_index(value_column)?;
    let threshold_idx = column_index(threshold_column)?;

    let mut values = Vec::new();
    let mut thresholds = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = i + 1;
        values.push(parse_cell(record.get(value_idx), value_column, row)?);
        thresholds.push(parse_cell(record.get(threshold_idx), threshold_column, row)?);
    }

    Ok((values, thresholds))
}

fn parse_cell(cell: Option<&str>, column: &str, row: usize) -> Result<f64> {
    let raw = cell.map(str::trim).unwrap_or("");
    if raw.is_empty() {
        bail!("row {row}: empty '{column}' cell");
    }
    raw.parse::<f64>()
        .with_context(|| format!("row {row}: invalid number '{raw}' in '{column}'"))
}

/// Write values as a single-column CSV headed `value`.
fn write_values<W: Write>(writer: W, values: &[f64]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["value"])?;
    for v in values {
        wtr.write_record([v.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}
