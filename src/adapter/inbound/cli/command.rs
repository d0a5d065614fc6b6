//! Command-line interface definitions.
//!
//! Defines the CLI structure for floatscout using `clap`. Prices are in
//! cents, matching the configuration file.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration path.
pub const DEFAULT_CONFIG: &str = "config.toml";

/// CSFloat deal alerts
#[derive(Parser, Debug)]
#[command(name = "floatscout")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch the feed until interrupted
    Run(RunArgs),

    /// Scan expiring auctions once and exit
    Auctions(AuctionsArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `floatscout config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value = DEFAULT_CONFIG)]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Overrides shared by commands that run the pipeline.
#[derive(Parser, Debug, Default, Clone)]
pub struct FilterOverrides {
    /// Price ceiling in cents
    #[arg(long)]
    pub max_price: Option<u64>,

    /// Price floor in cents
    #[arg(long)]
    pub min_price: Option<u64>,

    /// Minimum discount percentage
    #[arg(long)]
    pub min_discount: Option<f64>,

    /// Log level (overrides config and RUST_LOG is still honoured)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    #[command(flatten)]
    pub overrides: FilterOverrides,

    /// Hours of auctions to scan on exit, without prompting
    #[arg(
        long,
        conflicts_with = "no_exit_prompt",
        value_parser = clap::value_parser!(u32).range(1..=336)
    )]
    pub exit_scan_hours: Option<u32>,

    /// Exit without prompting or scanning
    #[arg(long)]
    pub no_exit_prompt: bool,
}

/// Arguments for the `auctions` subcommand.
#[derive(Parser, Debug)]
pub struct AuctionsArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Lookahead window in hours (defaults to the configured window)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=336))]
    pub hours: Option<u32>,

    #[command(flatten)]
    pub overrides: FilterOverrides,
}
