//! CLI command implementations.
//!
//! This module contains the implementations of both programs:
//! - `abspath`: Print the absolute form of each path
//! - `nvim_setup`: Install the neovim bootstrap file

pub mod abspath;
pub mod nvim_setup;

pub use abspath::AbspathCommand;
pub use nvim_setup::{NvimSetupCommand, OutputFormat};
