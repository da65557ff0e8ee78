//! ibf-dedup - Main entrypoint.
//!
//! Streams newline-delimited records through an inverse Bloom filter and
//! prints the records it has not seen before.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use inverse_bloom::config::{ConfigLoader, ConfigResult, DedupConfig, LogConfig, ENV_PREFIX};
use inverse_bloom::dedup::{Deduplicator, EmitMode};
use inverse_bloom::error::{DedupError, DedupResult};

/// Command line arguments for ibf-dedup.
#[derive(Parser, Debug)]
#[clap(name = "ibf-dedup", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Requested filter capacity, overrides the configuration
    #[clap(long)]
    capacity: Option<i64>,

    /// Read records from this file instead of stdin
    #[clap(short, long, value_parser)]
    input: Option<PathBuf>,

    /// Print records reported as duplicates instead of unique ones
    #[clap(long)]
    duplicates: bool,

    /// Log record counts when finished
    #[clap(long)]
    stats: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Deduplicate the input (default)
    Run,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system. `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> DedupResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_thread_names(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| DedupError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn load_config(args: &Args) -> ConfigResult<DedupConfig> {
    ConfigLoader::new(args.config.as_deref(), ENV_PREFIX)
        .with_capacity_override(args.capacity)
        .load()
}

fn run(args: &Args, config: &DedupConfig) -> DedupResult<()> {
    let dedup = Deduplicator::from_config(config)?;
    info!(slots = dedup.filter().size(), "filter ready");

    let mode = if args.duplicates {
        EmitMode::Duplicates
    } else {
        EmitMode::Unique
    };
    let writer = BufWriter::new(io::stdout().lock());

    let stats = match &args.input {
        Some(path) => dedup.run(BufReader::new(File::open(path)?), writer, mode)?,
        None => dedup.run(io::stdin().lock(), writer, mode)?,
    };

    if args.stats {
        info!(
            records = stats.records,
            unique = stats.unique,
            duplicates = stats.duplicates,
            skipped = stats.skipped,
            "deduplication finished"
        );
    }
    Ok(())
}

fn gen_config(output: &Path) -> DedupResult<()> {
    init_logging(&LogConfig::default())?;
    info!("Generating default configuration");

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml = toml::to_string_pretty(&DedupConfig::default())
        .map_err(|e| DedupError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Load the configuration and install logging, exiting on configuration errors.
fn configure(args: &Args) -> DedupResult<DedupConfig> {
    match load_config(args) {
        Ok(config) => {
            init_logging(&config.log)?;
            Ok(config)
        }
        Err(e) => {
            init_logging(&LogConfig::default())?;
            tracing::error!("{}", e);
            process::exit(1);
        }
    }
}

/// Main entry point for the application.
fn main() -> DedupResult<()> {
    let args = Args::parse();

    match args.command.as_ref().unwrap_or(&Command::Run) {
        Command::GenConfig { output } => gen_config(output),
        Command::Validate => {
            configure(&args)?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::Run => {
            let config = configure(&args)?;
            run(&args, &config)
        }
    }
}
