//! Build script for pathcfg-cli.
//!
//! This script generates man pages for both binaries at build time using
//! clap_mangen. The generated pages are placed in OUT_DIR for inclusion in
//! release builds.
//!
//! Note: We build minimal command structures here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::{Path, PathBuf};

fn global_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("verbose")
            .long("verbose")
            .help("Enable verbose output")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("quiet")
            .long("quiet")
            .help("Suppress non-essential output")
            .action(ArgAction::SetTrue),
    )
}

/// IMPORTANT: Keep this structure synchronized with src/cli.rs and
/// src/commands/abspath.rs.
fn build_abspath() -> Command {
    global_args(
        Command::new("abspath")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Print the absolute form of each path")
            .long_about(
                "Print the absolute, normalized form of each path, one per line, in the \
                 order given. Relative paths are resolved against the current directory; \
                 '.' and '..' components and repeated separators are removed.",
            ),
    )
    .arg(
        Arg::new("stdin")
            .long("stdin")
            .help("Also read paths from standard input, one per line")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("expand-tilde")
            .long("expand-tilde")
            .help("Expand a leading ~ to the home directory")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("PATH")
            .help("The paths to convert to absolute paths")
            .num_args(0..),
    )
}

/// IMPORTANT: Keep this structure synchronized with src/cli.rs and
/// src/commands/nvim_setup.rs.
fn build_nvim_setup() -> Command {
    global_args(
        Command::new("nvim-setup")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Point neovim's init.lua at the init.lua next to this program")
            .long_about(
                "Write <config root>/nvim/init.lua containing a single dofile() call that \
                 loads the init.lua shipped next to this program. Any existing file at \
                 that location is replaced.",
            ),
    )
    .arg(
        Arg::new("source")
            .long("source")
            .help("Script the bootstrap file should load")
            .value_name("PATH")
            .env("NVIM_SETUP_SOURCE"),
    )
    .arg(
        Arg::new("config-root")
            .long("config-root")
            .help("Configuration root to install under")
            .value_name("PATH")
            .env("NVIM_SETUP_CONFIG_ROOT"),
    )
    .arg(
        Arg::new("dry-run")
            .long("dry-run")
            .help("Preview actions without executing")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("format")
            .long("format")
            .help("Output format")
            .value_parser(["text", "json"])
            .default_value("text"),
    )
}

fn render(cmd: Command, man_dir: &Path, file_name: &str) {
    let man = Man::new(cmd);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();
    fs::write(man_dir.join(file_name), buffer).unwrap();
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    render(build_abspath(), &man_dir, "abspath.1");
    render(build_nvim_setup(), &man_dir, "nvim-setup.1");

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
