mod check_cmd;
mod cli;
mod config;
mod convert;
mod indices_cmd;
mod logging;
mod plot_cmd;

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
        Command::Plot(args) => plot_cmd::run(args),
        Command::Indices(args) => indices_cmd::run(args),
        Command::Check(args) => check_cmd::run(args),
    }
}
