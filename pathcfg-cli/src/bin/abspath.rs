//! Entry point for the `abspath` binary.
//!
//! Prints the absolute, normalized form of each path argument, one per line.

use clap::Parser;
use pathcfg_cli::cli::AbspathCli;
use pathcfg_cli::error::exit_with;

fn main() {
    let cli = AbspathCli::parse();

    cli.global.install_logger();

    exit_with(cli.command.execute(&cli.global));
}
