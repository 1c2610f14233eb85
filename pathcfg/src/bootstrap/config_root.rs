//! Per-user configuration root lookup.

use std::path::PathBuf;

/// Capability that locates the per-user configuration root directory.
///
/// The installer asks this once per run; tests substitute a fixed or mocked
/// implementation instead of depending on the host's environment.
#[cfg_attr(test, mockall::automock)]
pub trait UserConfigRoot {
    /// The per-user configuration root, or `None` if the platform has none.
    fn resolve_user_config_root(&self) -> Option<PathBuf>;
}

/// The host platform's convention, via the `dirs` crate.
///
/// | Platform | Value                                 |
/// | -------- | ------------------------------------- |
/// | Linux    | `$XDG_CONFIG_HOME` or `$HOME/.config` |
/// | macOS    | `$HOME/Library/Application Support`   |
/// | Windows  | `{FOLDERID_RoamingAppData}`           |
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformConfigRoot;

impl UserConfigRoot for PlatformConfigRoot {
    fn resolve_user_config_root(&self) -> Option<PathBuf> {
        dirs::config_dir()
    }
}

/// A configuration root supplied up front (command line, tests).
#[derive(Debug, Clone)]
pub struct FixedConfigRoot(pub PathBuf);

impl UserConfigRoot for FixedConfigRoot {
    fn resolve_user_config_root(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}
