//! Nvim-setup command implementation.
//!
//! This module implements the installer for the neovim bootstrap file,
//! with support for dry-run mode and JSON output.

use crate::cli::GlobalOptions;
use crate::error::CliError;
use clap::{Args, ValueEnum};
use pathcfg::{BootstrapConfig, InstallPlan, PlatformConfigRoot, UserConfigRoot};
use std::io::{self, Write};
use std::path::PathBuf;

/// Install the neovim bootstrap file.
#[derive(Args, Debug)]
pub struct NvimSetupCommand {
    /// Script the bootstrap file should load [default: init.lua next to this program]
    #[arg(long, value_name = "PATH", env = "NVIM_SETUP_SOURCE")]
    pub source: Option<PathBuf>,

    /// Configuration root to install under [default: the user config directory]
    #[arg(long, value_name = "PATH", env = "NVIM_SETUP_CONFIG_ROOT")]
    pub config_root: Option<PathBuf>,

    /// Preview actions without executing
    #[arg(long)]
    pub dry_run: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

/// Output format for the nvim-setup command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// A single human-readable progress line
    Text,
    /// A JSON object describing what was done
    Json,
}

impl NvimSetupCommand {
    /// Execute the nvim-setup command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.run(global, &PlatformConfigRoot, &mut handle)
    }

    /// Resolve, check, and (unless dry-running) perform the installation.
    pub fn run<W: Write>(
        self,
        _global: &GlobalOptions,
        provider: &dyn UserConfigRoot,
        out: &mut W,
    ) -> Result<(), CliError> {
        let config = BootstrapConfig::resolve(self.source, self.config_root, provider)?;
        let plan = InstallPlan::build(config)?;

        if self.dry_run {
            return report_dry_run(self.format, &plan, out);
        }

        match self.format {
            OutputFormat::Text => {
                plan.execute(out)?;
            }
            OutputFormat::Json => {
                let result = plan.execute(&mut io::sink())?;
                serde_json::to_writer_pretty(&mut *out, &result)?;
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

/// Describe what a run would do without doing it.
fn report_dry_run<W: Write>(
    format: OutputFormat,
    plan: &InstallPlan,
    out: &mut W,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Dry-run mode: no changes will be made")?;
            writeln!(out)?;
            writeln!(out, "Would run: {}", plan.progress_message())?;
            for action in plan.actions() {
                writeln!(out, "  - {}", action.description())?;
            }
        }
        OutputFormat::Json => {
            let actions: Vec<String> = plan.actions().iter().map(|a| a.description()).collect();
            let report = serde_json::json!({
                "dry_run": true,
                "source_path": plan.config().source_path.display().to_string(),
                "dest_file": plan.config().dest_file().display().to_string(),
                "actions": actions,
            });
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
