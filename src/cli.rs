use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Lunaria lunar calendar engine.
#[derive(Parser)]
#[command(
    name = "lunaria",
    version,
    about = "Astronomically-bounded lunar calendar, rendered natively or over a Gregorian grid"
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
    /// Render one month in the active grid mode.
    Show(ShowArgs),
    /// Print the month table for the current lunar year.
    Year(YearArgs),
    /// Print the month tables for every loaded lunar year.
    Multiyear(MultiyearArgs),
}

/// Grid mode selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// The native lunar month matrix.
    Custom,
    /// The Gregorian grid with lunar overlay.
    Gregorian,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "lunaria.toml")]
    pub config: PathBuf,

    /// Override grid mode from config.
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Months to step from the current month (negative steps back).
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i32,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "lunaria.toml")]
    pub config: PathBuf,
}

/// Arguments for the `multiyear` subcommand.
#[derive(clap::Args)]
pub struct MultiyearArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "lunaria.toml")]
    pub config: PathBuf,

    /// Only print years starting at this Gregorian year.
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Only print years up to this Gregorian year.
    #[arg(long)]
    pub end_year: Option<i32>,
}
