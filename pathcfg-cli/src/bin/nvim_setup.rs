//! Entry point for the `nvim-setup` binary.
//!
//! Writes `<config root>/nvim/init.lua` so that neovim loads the
//! `init.lua` shipped next to this program.

use clap::Parser;
use pathcfg_cli::cli::NvimSetupCli;
use pathcfg_cli::error::exit_with;

fn main() {
    let cli = NvimSetupCli::parse();

    cli.global.install_logger();

    exit_with(cli.command.execute(&cli.global));
}
