//! Neovim bootstrap file installation.
//!
//! The installer writes `<config root>/nvim/init.lua` containing a single
//! `dofile('<source>')` line, so neovim starts by running a script kept
//! elsewhere (usually a dotfiles checkout next to the installer binary).
//!
//! The pieces are kept separate so each can be exercised on its own:
//!
//! - [`BootstrapConfig`]: source script, configuration root, relative
//!   destination; built from overrides or defaults with
//!   [`BootstrapConfig::resolve`]
//! - [`UserConfigRoot`]: where the per-user configuration root lives
//! - [`InstallPlan`]: precondition check, planned actions, execution
//!
//! # Examples
//!
//! ```no_run
//! use pathcfg::bootstrap::{install_bootstrap, BootstrapConfig, PlatformConfigRoot};
//!
//! let config = BootstrapConfig::resolve(None, None, &PlatformConfigRoot).unwrap();
//! install_bootstrap(config, &mut std::io::stdout()).unwrap();
//! ```

mod config;
mod config_root;
mod install;

pub use config::{
    default_dest_relative_path, default_source_path, source_path_for_exe, BootstrapConfig,
    BOOTSTRAP_FILE_NAME, EDITOR_CONFIG_DIR, SOURCE_FILE_NAME,
};
pub use config_root::{FixedConfigRoot, PlatformConfigRoot, UserConfigRoot};
pub use install::{
    bootstrap_directive, install_bootstrap, InstallAction, InstallPlan, InstallResult,
};
