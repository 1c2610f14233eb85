//! Bootstrap installation settings.
//!
//! [`BootstrapConfig`] names the three inputs of an installation: the
//! source script, the configuration root, and the bootstrap file's location
//! under that root. Nothing here touches the filesystem.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use crate::bootstrap::config_root::UserConfigRoot;
use crate::error::{Error, Result};
use crate::path::normalize::normalize_with_base;

/// File name of the source script shipped next to the installer.
pub const SOURCE_FILE_NAME: &str = "init.lua";

/// Directory under the configuration root that neovim reads.
pub const EDITOR_CONFIG_DIR: &str = "nvim";

/// File name of the generated bootstrap file.
pub const BOOTSTRAP_FILE_NAME: &str = "init.lua";

/// Where the bootstrap file comes from and where it goes.
///
/// # Examples
///
/// ```
/// use pathcfg::BootstrapConfig;
/// use std::path::Path;
///
/// let config = BootstrapConfig::new("/opt/dotfiles/init.lua", "/home/u/.config");
/// assert_eq!(config.dest_dir(), Path::new("/home/u/.config/nvim"));
/// assert_eq!(config.dest_file(), Path::new("/home/u/.config/nvim/init.lua"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// Absolute path of the script the bootstrap file loads.
    pub source_path: PathBuf,
    /// Per-user configuration root.
    pub dest_root: PathBuf,
    /// Location of the bootstrap file relative to `dest_root`.
    pub dest_relative_path: PathBuf,
}

impl BootstrapConfig {
    /// Creates a config writing `<dest_root>/nvim/init.lua`.
    #[must_use]
    pub fn new(source_path: impl Into<PathBuf>, dest_root: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            dest_root: dest_root.into(),
            dest_relative_path: default_dest_relative_path(),
        }
    }

    /// Sets the bootstrap file location relative to the configuration root.
    #[must_use]
    pub fn with_dest_relative_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dest_relative_path = path.into();
        self
    }

    /// Builds a config from optional overrides, falling back to defaults.
    ///
    /// - The source defaults to [`default_source_path`].
    /// - The root defaults to whatever `provider` reports.
    ///
    /// Relative overrides are made absolute against the current directory so
    /// the generated directive always embeds an absolute path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigRootUnavailable`] if no root override is given
    /// and the provider has none, or [`Error::Io`] if the executable's
    /// location or, for a relative override, the current directory cannot be
    /// determined.
    pub fn resolve(
        source_override: Option<PathBuf>,
        root_override: Option<PathBuf>,
        provider: &dyn UserConfigRoot,
    ) -> Result<Self> {
        Self::resolve_with_cwd(source_override, root_override, provider, env::current_dir)
    }

    fn resolve_with_cwd<F>(
        source_override: Option<PathBuf>,
        root_override: Option<PathBuf>,
        provider: &dyn UserConfigRoot,
        current_dir: F,
    ) -> Result<Self>
    where
        F: Fn() -> io::Result<PathBuf>,
    {
        let source_path = match source_override {
            Some(path) => absolutize(&path, &current_dir)?,
            None => default_source_path()?,
        };

        let dest_root = match root_override {
            Some(path) => absolutize(&path, &current_dir)?,
            None => provider
                .resolve_user_config_root()
                .ok_or(Error::ConfigRootUnavailable)?,
        };

        log::debug!(
            "bootstrap source {}, config root {}",
            source_path.display(),
            dest_root.display()
        );

        Ok(Self::new(source_path, dest_root))
    }

    /// Full path of the bootstrap file.
    #[must_use]
    pub fn dest_file(&self) -> PathBuf {
        self.dest_root.join(&self.dest_relative_path)
    }

    /// Directory holding the bootstrap file.
    #[must_use]
    pub fn dest_dir(&self) -> PathBuf {
        let dest_file = self.dest_file();
        dest_file
            .parent()
            .map_or_else(|| self.dest_root.clone(), Path::to_path_buf)
    }
}

/// Normalize `path`, reading the working directory only when it is relative.
fn absolutize<F>(path: &Path, current_dir: &F) -> Result<PathBuf>
where
    F: Fn() -> io::Result<PathBuf>,
{
    let base = if path.is_absolute() {
        PathBuf::new()
    } else {
        current_dir()?
    };
    Ok(normalize_with_base(path, &base))
}

/// `nvim/init.lua`, joined with the platform separator.
#[must_use]
pub fn default_dest_relative_path() -> PathBuf {
    Path::new(EDITOR_CONFIG_DIR).join(BOOTSTRAP_FILE_NAME)
}

/// The source script next to the given executable.
///
/// # Examples
///
/// ```
/// use pathcfg::bootstrap::source_path_for_exe;
/// use std::path::Path;
///
/// assert_eq!(
///     source_path_for_exe(Path::new("/opt/dotfiles/nvim-setup")),
///     Path::new("/opt/dotfiles/init.lua")
/// );
/// ```
#[must_use]
pub fn source_path_for_exe(exe: &Path) -> PathBuf {
    exe.parent()
        .unwrap_or_else(|| Path::new(""))
        .join(SOURCE_FILE_NAME)
}

/// The source script next to the running executable.
///
/// # Errors
///
/// Returns an error if the executable's path cannot be determined.
pub fn default_source_path() -> Result<PathBuf> {
    let exe = env::current_exe()?;
    Ok(source_path_for_exe(&exe))
}
