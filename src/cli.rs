use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Period averages and differences of gridded climate-model output.
#[derive(Parser)]
#[command(
    name = "climplot",
    version,
    about = "Period averages, regional means and period differences of climate-model output"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Build one plot payload and write it as JSON.
    Plot(PlotArgs),
    /// Print the flat time indices of a period and month selection.
    Indices(IndicesArgs),
    /// Open the dataset and print its dimensions and fields.
    Check(CheckArgs),
}

/// Arguments for the `plot` subcommand.
#[derive(clap::Args)]
pub struct PlotArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "climplot.toml")]
    pub config: PathBuf,

    /// Override input NetCDF path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path for the JSON payload; stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `indices` subcommand.
#[derive(clap::Args)]
pub struct IndicesArgs {
    /// Period index (0 is the first period).
    #[arg(short, long, allow_negative_numbers = true)]
    pub period: i64,

    /// Comma-separated calendar months, 1..=12.
    #[arg(short, long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
    pub months: Vec<i64>,

    /// Period length in years.
    #[arg(short, long, default_value_t = 10)]
    pub length: usize,
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "climplot.toml")]
    pub config: PathBuf,

    /// Override input NetCDF path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}
