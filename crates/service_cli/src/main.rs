//! anstable CLI - Synthetic ANS slot-table generation
//!
//! This is the operational entry point for the slot-table generator.
//!
//! # Commands
//!
//! - `anstable generate` - Generate a batch of slot tables
//! - `anstable verify --input <file>` - Verify a JSON batch file
//! - `anstable stats` - Print per-table run statistics for a batch

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use service_cli::commands;
use service_cli::config::{
    build_config, resolve_log_level, CliArgs, GeneratorConfig, LogLevel,
};
use service_cli::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Synthetic ANS slot-table generator
#[derive(Parser)]
#[command(name = "anstable")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Batch parameters shared by the generating commands
#[derive(Args, Default)]
struct ParamArgs {
    /// Number of distinct symbols per table
    #[arg(short, long)]
    alphabet_size: Option<usize>,

    /// Number of tables to generate
    #[arg(short, long)]
    num_histograms: Option<usize>,

    /// Number of slots per table
    #[arg(short, long)]
    precision: Option<usize>,

    /// Random Source seed
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a batch of slot tables
    Generate {
        #[command(flatten)]
        params: ParamArgs,

        /// Output format (json, csv, table)
        #[arg(short, long)]
        format: Option<String>,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Verify every table of a JSON batch file
    Verify {
        /// Path to the batch file
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },

    /// Print per-table run statistics for a generated batch
    Stats {
        #[command(flatten)]
        params: ParamArgs,
    },
}

fn cli_args(cli: &Cli, params: &ParamArgs, format: Option<&str>) -> CliArgs {
    CliArgs {
        config_file: cli.config.clone(),
        alphabet_size: params.alphabet_size,
        num_histograms: params.num_histograms,
        precision: params.precision,
        seed: params.seed,
        log_level: cli.log_level.clone(),
        format: format.map(str::to_string),
    }
}

fn init_tracing(log_level: LogLevel) {
    // Logs go to stderr so batch output on stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Verify never builds a batch, so only its log level is resolved.
    let config = match &cli.command {
        Commands::Generate { params, format, .. } => {
            build_config(&cli_args(&cli, params, format.as_deref()))?
        }
        Commands::Stats { params } => build_config(&cli_args(&cli, params, None))?,
        Commands::Verify { .. } => GeneratorConfig {
            log_level: resolve_log_level(&cli_args(&cli, &ParamArgs::default(), None))?,
            ..Default::default()
        },
    };

    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        config.log_level
    };
    init_tracing(log_level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match &cli.command {
        Commands::Generate { output, .. } => {
            commands::generate::run(&config, output.as_deref()).map(|_| ())
        }
        Commands::Verify { input } => commands::verify::run(input).map(|_| ()),
        Commands::Stats { .. } => commands::stats::run(&config).map(|_| ()),
    }
}
