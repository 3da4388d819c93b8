use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Rotaday school rotation-day calculator.
#[derive(Parser)]
#[command(
    name = "rotaday",
    version,
    about = "School rotation-day calculator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true, default_value = "rotaday.toml")]
    pub config: PathBuf,

    /// Subcommand to run; the interactive console starts when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Classify a date against the rotation.
    Day(DayArgs),
    /// Show today's classification and the currently active period.
    Now,
    /// Show the anchor and the school days elapsed since it.
    Anchor,
}

/// Arguments for the `day` subcommand.
#[derive(clap::Args)]
pub struct DayArgs {
    /// Date to classify (YYYY-MM-DD); defaults to today.
    pub date: Option<String>,
}
