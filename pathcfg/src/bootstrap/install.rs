//! Bootstrap file installation.
//!
//! Installation is split into a planning phase and an execution phase.
//! [`InstallPlan::build`] checks the one precondition (the source script
//! exists) and records the actions a run will take without touching
//! anything. [`InstallPlan::execute`] then performs them in order:
//!
//! 1. Create the destination directory and any missing parents
//! 2. Report `Creating <dest> to call <source>` on the progress writer
//! 3. Write the one-line directive, replacing whatever was there
//!
//! A failure at any step aborts the run. Nothing is retried or rolled back.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::bootstrap::config::BootstrapConfig;
use crate::error::{Error, Result};

/// The line written to the bootstrap file for a given source script.
///
/// # Examples
///
/// ```
/// use pathcfg::bootstrap_directive;
/// use std::path::Path;
///
/// assert_eq!(
///     bootstrap_directive(Path::new("/opt/dotfiles/init.lua")),
///     "dofile('/opt/dotfiles/init.lua')\n"
/// );
/// ```
#[must_use]
pub fn bootstrap_directive(source: &Path) -> String {
    format!("dofile('{}')\n", source.display())
}

/// A single step of an installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallAction {
    /// Make sure the destination directory (and its parents) exist.
    EnsureDirectory {
        /// The directory.
        path: PathBuf,
        /// Whether the directory already existed when the plan was built.
        exists: bool,
    },

    /// Write the bootstrap file.
    WriteFile {
        /// The file to write.
        path: PathBuf,
        /// The full content of the file.
        content: String,
        /// Whether a file already exists at `path` and will be replaced.
        replaces_existing: bool,
    },
}

impl InstallAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::EnsureDirectory { path, exists: true } => {
                format!("Use existing directory {}", path.display())
            }
            Self::EnsureDirectory { path, .. } => format!("Create directory {}", path.display()),
            Self::WriteFile {
                path,
                replaces_existing: true,
                ..
            } => format!("Overwrite {}", path.display()),
            Self::WriteFile { path, .. } => format!("Create {}", path.display()),
        }
    }
}

/// What an installation did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallResult {
    /// The source script the bootstrap file loads.
    pub source_path: PathBuf,
    /// The bootstrap file that was written.
    pub dest_file: PathBuf,
    /// Whether the destination directory had to be created.
    pub dest_dir_created: bool,
    /// Whether an existing bootstrap file was replaced.
    pub replaced_existing: bool,
}

/// The checked, not yet executed, steps of an installation.
///
/// # Examples
///
/// ```no_run
/// use pathcfg::{BootstrapConfig, InstallPlan};
///
/// let config = BootstrapConfig::new("/opt/dotfiles/init.lua", "/home/u/.config");
/// let plan = InstallPlan::build(config).unwrap();
/// for action in plan.actions() {
///     println!("{}", action.description());
/// }
/// let result = plan.execute(&mut std::io::stdout()).unwrap();
/// assert!(result.dest_file.ends_with("nvim/init.lua"));
/// ```
#[derive(Debug, Clone)]
pub struct InstallPlan {
    config: BootstrapConfig,
    actions: Vec<InstallAction>,
}

impl InstallPlan {
    /// Checks the source script and plans the installation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSourceFile`] if the source script does not
    /// exist. Nothing is created in that case.
    pub fn build(config: BootstrapConfig) -> Result<Self> {
        if !config.source_path.exists() {
            return Err(Error::MissingSourceFile {
                path: config.source_path.clone(),
            });
        }

        let dest_dir = config.dest_dir();
        let dest_file = config.dest_file();

        let actions = vec![
            InstallAction::EnsureDirectory {
                exists: dest_dir.is_dir(),
                path: dest_dir,
            },
            InstallAction::WriteFile {
                content: bootstrap_directive(&config.source_path),
                replaces_existing: dest_file.exists(),
                path: dest_file,
            },
        ];

        Ok(Self { config, actions })
    }

    /// The configuration this plan was built from.
    #[must_use]
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// The planned actions, in execution order.
    #[must_use]
    pub fn actions(&self) -> &[InstallAction] {
        &self.actions
    }

    /// The progress line reported before the bootstrap file is written.
    #[must_use]
    pub fn progress_message(&self) -> String {
        format!(
            "Creating {} to call {}",
            self.config.dest_file().display(),
            self.config.source_path.display()
        )
    }

    /// Performs the planned actions, reporting progress to `progress`.
    ///
    /// Directory creation is idempotent; the bootstrap file is always
    /// rewritten in full.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CreateDirectory`] or [`Error::WriteFile`] if the
    /// filesystem refuses, and [`Error::Output`] if the progress line cannot
    /// be written.
    pub fn execute<W: Write>(&self, progress: &mut W) -> Result<InstallResult> {
        let mut result = InstallResult {
            source_path: self.config.source_path.clone(),
            dest_file: self.config.dest_file(),
            dest_dir_created: false,
            replaced_existing: false,
        };

        for action in &self.actions {
            log::debug!("{}", action.description());
            match action {
                InstallAction::EnsureDirectory { path, exists } => {
                    fs::create_dir_all(path).map_err(|source| Error::CreateDirectory {
                        path: path.clone(),
                        source,
                    })?;
                    result.dest_dir_created = !exists;
                }
                InstallAction::WriteFile {
                    path,
                    content,
                    replaces_existing,
                } => {
                    writeln!(progress, "{}", self.progress_message()).map_err(Error::Output)?;

                    fs::write(path, content).map_err(|source| Error::WriteFile {
                        path: path.clone(),
                        source,
                    })?;
                    result.replaced_existing = *replaces_existing;
                }
            }
        }

        log::info!("wrote {}", result.dest_file.display());
        Ok(result)
    }
}

/// Plans and executes an installation in one step.
///
/// # Errors
///
/// See [`InstallPlan::build`] and [`InstallPlan::execute`].
pub fn install_bootstrap<W: Write>(
    config: BootstrapConfig,
    progress: &mut W,
) -> Result<InstallResult> {
    InstallPlan::build(config)?.execute(progress)
}
