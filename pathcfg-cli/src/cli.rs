//! CLI structure and argument definitions.
//!
//! This module defines the argument structures for both binaries using
//! clap's derive macros. Each binary has its own top-level parser sharing
//! the same global logging options.

use crate::commands::{AbspathCommand, NvimSetupCommand};
use clap::{Args, Parser};

/// Options shared by every binary in this crate.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,
}

impl GlobalOptions {
    /// Set up the stderr logger for this process.
    pub fn install_logger(&self) {
        pathcfg::init_logger(self.verbose, self.quiet).install();
    }
}

/// Print the absolute, normalized form of each path.
#[derive(Parser)]
#[command(name = "abspath")]
#[command(version, about = "Print the absolute form of each path", long_about = None)]
pub struct AbspathCli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(flatten)]
    pub command: AbspathCommand,
}

/// Install the neovim bootstrap file.
#[derive(Parser)]
#[command(name = "nvim-setup")]
#[command(
    version,
    about = "Point neovim's init.lua at the init.lua next to this program",
    long_about = None
)]
pub struct NvimSetupCli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(flatten)]
    pub command: NvimSetupCommand,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definitions_are_valid() {
        AbspathCli::command().debug_assert();
        NvimSetupCli::command().debug_assert();
    }

    #[test]
    fn test_abspath_accepts_empty_argument() {
        let cli = AbspathCli::try_parse_from(["abspath", "", "a"]).unwrap();
        assert_eq!(cli.command.paths.len(), 2);
        assert!(cli.command.paths[0].is_empty());
    }

    #[test]
    fn test_nvim_setup_rejects_positional() {
        assert!(NvimSetupCli::try_parse_from(["nvim-setup", "extra"]).is_err());
    }
}
