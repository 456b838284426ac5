//! # rustful-resample
//!
//! Command-line interface for the rustful-resample library.

use clap::{Parser, Subcommand, ValueEnum};
use resample::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "rustful-resample")]
#[command(about = "Analysis/assessment splits for model evaluation", long_about = None)]
struct Cli {
    /// Number of rows (defaults to the number of labels)
    #[arg(short, long, global = true)]
    rows: Option<usize>,

    /// CSV file with one stratum or group label per row
    #[arg(short, long, global = true)]
    labels: Option<PathBuf>,

    /// Label column name or index (default: first column)
    #[arg(short, long, global = true)]
    column: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary", global = true)]
    format: OutputFormat,

    /// Output file (optional)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// One line per split
    Summary,
    /// Full resample set as JSON
    Json,
    /// Row-level CSV records
    Tidy,
}

#[derive(Subcommand)]
enum Commands {
    /// Random holdout
    Initial {
        /// Share of rows used for analysis
        #[arg(long, default_value = "0.75")]
        prop: f64,

        /// Stratify on the labels
        #[arg(long)]
        strata: bool,

        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// Chronological holdout (rows must already be in time order)
    Time {
        #[arg(long, default_value = "0.75")]
        prop: f64,
    },

    /// K-fold cross-validation
    Vfold {
        #[arg(long, default_value = "10")]
        folds: usize,

        #[arg(long, default_value = "1")]
        repeats: usize,

        #[arg(long)]
        strata: bool,

        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// K-fold cross-validation keeping label groups together
    GroupVfold {
        #[arg(long, default_value = "10")]
        folds: usize,

        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// Leave-one-out cross-validation
    Loo,

    /// Monte Carlo cross-validation
    Mc {
        #[arg(long, default_value = "0.75")]
        prop: f64,

        #[arg(long, default_value = "25")]
        times: usize,

        #[arg(long)]
        strata: bool,

        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// Bootstrap resampling
    Boot {
        #[arg(long, default_value = "25")]
        times: usize,

        #[arg(long)]
        strata: bool,

        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// Rolling forecast origin
    Rolling {
        /// Rows in the first analysis window
        #[arg(long)]
        initial: usize,

        /// Rows in each assessment window
        #[arg(long, default_value = "1")]
        assess: usize,

        /// Slide a fixed-width window instead of growing it
        #[arg(long)]
        fixed: bool,

        /// Extra rows between slice origins
        #[arg(long, default_value = "0")]
        skip: usize,
    },

    /// Scheme read from a JSON configuration file
    Config {
        #[arg(long)]
        path: PathBuf,
    },
}

impl Commands {
    fn into_config(self) -> CliResult<SchemeConfig> {
        let config = match self {
            Commands::Initial { prop, strata, seed } => {
                with_strata(SchemeBuilder::initial_split(prop), strata).seed(seed).build()
            }
            Commands::Time { prop } => SchemeBuilder::initial_time_split(prop).build(),
            Commands::Vfold { folds, repeats, strata, seed } => {
                with_strata(SchemeBuilder::vfold(folds).repeats(repeats), strata)
                    .seed(seed)
                    .build()
            }
            Commands::GroupVfold { folds, seed } => SchemeBuilder::group_vfold(folds).seed(seed).build(),
            Commands::Loo => SchemeBuilder::leave_one_out().build(),
            Commands::Mc { prop, times, strata, seed } => {
                with_strata(SchemeBuilder::monte_carlo(prop, times), strata).seed(seed).build()
            }
            Commands::Boot { times, strata, seed } => {
                with_strata(SchemeBuilder::bootstrap(times), strata).seed(seed).build()
            }
            Commands::Rolling { initial, assess, fixed, skip } => SchemeBuilder::rolling_origin(initial)
                .assess(assess)
                .cumulative(!fixed)
                .skip(skip)
                .build(),
            Commands::Config { path } => load_config(&path)?,
        };
        Ok(config)
    }
}

fn with_strata(builder: SchemeBuilder, strata: bool) -> SchemeBuilder {
    if strata {
        builder.stratified()
    } else {
        builder
    }
}

/// Load a scheme configuration from a JSON file
fn load_config(path: &PathBuf) -> CliResult<SchemeConfig> {
    let file = File::open(path).map_err(|e| format!("Failed to open config: {}", e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse config: {}", e))
}

/// Load one label per row from a CSV file
fn load_labels(path: &PathBuf, column: Option<&str>) -> CliResult<StratumLabels> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read headers: {}", e))?
        .clone();

    let col_idx = match column {
        Some(col) => match col.parse::<usize>() {
            Ok(idx) => idx,
            Err(_) => headers
                .iter()
                .position(|h| h == col)
                .ok_or_else(|| format!("Column '{}' not found", col))?,
        },
        None => 0,
    };

    let mut values = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| format!("Failed to read record: {}", e))?;
        let value = record
            .get(col_idx)
            .ok_or_else(|| format!("Column {} missing in record {}", col_idx, values.len() + 1))?;
        values.push(value.trim().to_string());
    }

    if values.is_empty() {
        return Err("No labels found in the specified column".to_string());
    }

    Ok(StratumLabels::new(values))
}

#[derive(Serialize)]
struct TidyRow<'a> {
    outer_id: &'a str,
    split_id: &'a str,
    row: usize,
    role: String,
}

fn open_output(output: Option<&PathBuf>) -> CliResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}

/// Write resampling results in the requested format
fn write_results(set: &ResampleSet, format: OutputFormat, output: Option<&PathBuf>) -> CliResult<()> {
    let mut out = open_output(output)?;

    match format {
        OutputFormat::Summary => {
            write!(out, "{}", set).map_err(|e| format!("Failed to write summary: {}", e))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, set)
                .map_err(|e| format!("Failed to write JSON: {}", e))?;
            writeln!(out).map_err(|e| format!("Failed to write JSON: {}", e))?;
        }
        OutputFormat::Tidy => {
            let mut writer = csv::Writer::from_writer(out);
            for record in tidy_nested(set) {
                writer
                    .serialize(TidyRow {
                        outer_id: record.outer_id.as_deref().unwrap_or(""),
                        split_id: &record.split_id,
                        row: record.row,
                        role: record.role.to_string(),
                    })
                    .map_err(|e| format!("Failed to write CSV: {}", e))?;
            }
            writer.flush().map_err(|e| format!("Failed to write CSV: {}", e))?;
        }
    }

    if let Some(path) = output {
        info!("Results written to {:?}", path);
    }
    Ok(())
}

fn run(cli: Cli) -> CliResult<()> {
    let labels = match &cli.labels {
        Some(path) => {
            let labels = load_labels(path, cli.column.as_deref())?;
            info!(
                "Loaded {} labels ({} levels) from {:?}",
                labels.len(),
                labels.levels().len(),
                path.file_name().unwrap_or_default()
            );
            Some(labels)
        }
        None => None,
    };

    let rows = match (cli.rows, &labels) {
        (Some(rows), _) => rows,
        (None, Some(labels)) => labels.len(),
        (None, None) => return Err("Either --rows or --labels is required".to_string()),
    };

    let config = cli.command.into_config()?;
    let dataset = Dataset::with_len(rows);
    let set = resample(&dataset, &config, labels.as_ref()).map_err(|e| e.to_string())?;
    info!("{} produced {} splits over {} rows", set.kind(), set.len(), rows);

    write_results(&set, cli.format, cli.output.as_ref())
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rustful_resample=info,resample_core=info".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
