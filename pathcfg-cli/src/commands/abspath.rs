//! Abspath command implementation.
//!
//! Prints one absolute, normalized path per input, in input order.

use crate::cli::GlobalOptions;
use crate::error::CliError;
use clap::Args;
use pathcfg::path::line_sink;
use pathcfg::{to_absolute_paths, to_absolute_paths_from_reader, AbsolutePathConverter};
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Print the absolute form of each path.
#[derive(Args, Debug)]
pub struct AbspathCommand {
    /// The paths to convert to absolute paths
    #[arg(value_name = "PATH")]
    pub paths: Vec<OsString>,

    /// Also read paths from standard input, one per line
    #[arg(long)]
    pub stdin: bool,

    /// Expand a leading ~ to the home directory
    #[arg(long)]
    pub expand_tilde: bool,
}

impl AbspathCommand {
    /// Execute the abspath command against the process's stdin and stdout.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let stdin = io::stdin();
        self.run(global, stdin.lock(), &mut handle)
    }

    /// Convert the positional paths, then stdin lines if requested.
    pub fn run<R: BufRead, W: Write>(
        self,
        _global: &GlobalOptions,
        input: R,
        out: &mut W,
    ) -> Result<(), CliError> {
        let mut converter = AbsolutePathConverter::from_current_dir();
        if self.expand_tilde {
            converter = converter.with_tilde_expansion();
        }

        let mut count = to_absolute_paths(
            self.paths.iter().map(Path::new),
            &converter,
            line_sink(out),
        )?;

        if self.stdin {
            count += to_absolute_paths_from_reader(input, &converter, line_sink(out))?;
        }

        log::debug!(
            "converted {count} path(s) against {}",
            converter.base().display()
        );
        Ok(())
    }
}
