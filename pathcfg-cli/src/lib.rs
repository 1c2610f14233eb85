//! Library exports for pathcfg-cli.
//!
//! This module exports the CLI structures shared by the `abspath` and
//! `nvim-setup` binaries, and used by the build script to generate man pages.

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::{AbspathCli, GlobalOptions, NvimSetupCli};
