#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathcfg
//!
//! Path and editor-configuration helpers behind the `abspath` and
//! `nvim-setup` command-line tools.
//!
//! ## Core Types
//!
//! - [`AbsolutePathConverter`]: lexical conversion of paths to normalized
//!   absolute form, driven over a list by [`to_absolute_paths`]
//! - [`BootstrapConfig`] and [`InstallPlan`]: installation of the neovim
//!   bootstrap file
//! - [`UserConfigRoot`]: per-user configuration root lookup
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathcfg::{bootstrap_directive, AbsolutePathConverter};
//! use std::path::Path;
//!
//! let converter = AbsolutePathConverter::new("/home/u");
//! let source = converter.convert(Path::new("dotfiles/./nvim/../init.lua"));
//! assert_eq!(source, Path::new("/home/u/dotfiles/init.lua"));
//!
//! assert_eq!(
//!     bootstrap_directive(&source),
//!     "dofile('/home/u/dotfiles/init.lua')\n"
//! );
//! ```

pub mod bootstrap;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use bootstrap::{
    bootstrap_directive, install_bootstrap, BootstrapConfig, FixedConfigRoot, InstallAction,
    InstallPlan, InstallResult, PlatformConfigRoot, UserConfigRoot,
};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{to_absolute_paths, to_absolute_paths_from_reader, AbsolutePathConverter};
