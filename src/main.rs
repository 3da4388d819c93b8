mod anchor_cmd;
mod cli;
mod config;
mod convert;
mod day_cmd;
mod logging;
mod now_cmd;
mod repl;
mod wallclock;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Command::Day(args)) => day_cmd::run(&cli.config, args),
        Some(Command::Now) => now_cmd::run(&cli.config),
        Some(Command::Anchor) => anchor_cmd::run(&cli.config),
        None => repl::run(&cli.config),
    }
}
