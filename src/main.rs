mod cli;
mod config;
mod logging;
mod multiyear_cmd;
mod session;
mod show_cmd;
mod year_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Show(args) => show_cmd::run(args),
        Command::Year(args) => year_cmd::run(args),
        Command::Multiyear(args) => multiyear_cmd::run(args),
    }
}
