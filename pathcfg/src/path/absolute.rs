//! Conversion of path lists to absolute form.
//!
//! [`AbsolutePathConverter`] captures the working directory once and turns
//! each input into its normalized absolute form. [`to_absolute_paths`] and
//! [`to_absolute_paths_from_reader`] drive a converter over a sequence of
//! inputs and hand every result to a sink before looking at the next input.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::normalize;

/// Converts paths to normalized absolute form against a fixed base.
///
/// # Examples
///
/// ```
/// use pathcfg::path::AbsolutePathConverter;
/// use std::path::Path;
///
/// let converter = AbsolutePathConverter::new("/home/u");
/// assert_eq!(converter.convert(Path::new("foo")), Path::new("/home/u/foo"));
/// assert_eq!(converter.convert(Path::new("/bar/./baz")), Path::new("/bar/baz"));
/// assert_eq!(converter.convert(Path::new("../x")), Path::new("/home/x"));
/// ```
#[derive(Debug, Clone)]
pub struct AbsolutePathConverter {
    /// Directory that relative inputs are resolved against.
    base: PathBuf,
    /// Home directory for tilde expansion; `None` disables expansion.
    home: Option<PathBuf>,
}

impl AbsolutePathConverter {
    /// Create a converter that resolves relative paths against `base`.
    #[must_use]
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            home: None,
        }
    }

    /// Create a converter for the process's current working directory.
    ///
    /// The working directory is read once, here. If it cannot be read the
    /// converter still works with an empty base: inputs are normalized and
    /// emitted, relative ones stay relative.
    #[must_use]
    pub fn from_current_dir() -> Self {
        match env::current_dir() {
            Ok(cwd) => Self::new(cwd),
            Err(e) => {
                log::warn!("cannot read current directory: {e}");
                Self::new(PathBuf::new())
            }
        }
    }

    /// Expand a leading `~` using the given home directory.
    #[must_use]
    pub fn with_home_dir(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Expand a leading `~` using the current user's home directory.
    ///
    /// When the home directory cannot be determined, tilde paths are left
    /// alone and treated as relative names.
    #[must_use]
    pub fn with_tilde_expansion(self) -> Self {
        match home::home_dir() {
            Some(home) => self.with_home_dir(home),
            None => {
                log::warn!("cannot determine home directory; '~' will not be expanded");
                self
            }
        }
    }

    /// The directory relative inputs are resolved against.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Convert a single path to its normalized absolute form.
    #[must_use]
    pub fn convert(&self, path: &Path) -> PathBuf {
        match &self.home {
            Some(home) => {
                let expanded = normalize::expand_tilde(path, home);
                normalize::normalize_with_base(&expanded, &self.base)
            }
            None => normalize::normalize_with_base(path, &self.base),
        }
    }
}

/// Convert every path in `paths`, passing each result to `sink` in order.
///
/// Each result is handed to the sink before the next input is converted.
/// Returns the number of paths emitted.
///
/// # Errors
///
/// Returns [`Error::Output`] with the first error reported by the sink;
/// remaining inputs are not processed.
///
/// # Examples
///
/// ```
/// use pathcfg::path::{to_absolute_paths, AbsolutePathConverter};
///
/// let converter = AbsolutePathConverter::new("/home/u");
/// let mut seen = Vec::new();
/// let count = to_absolute_paths(["b/../a", "/x/y/", "c"], &converter, |p| {
///     seen.push(p.display().to_string());
///     Ok(())
/// })
/// .unwrap();
///
/// assert_eq!(count, 3);
/// assert_eq!(seen, ["/home/u/a", "/x/y/", "/home/u/c"]);
/// ```
pub fn to_absolute_paths<I, P, F>(
    paths: I,
    converter: &AbsolutePathConverter,
    mut sink: F,
) -> Result<usize>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    F: FnMut(&Path) -> io::Result<()>,
{
    let mut count = 0;
    for path in paths {
        let converted = converter.convert(path.as_ref());
        sink(&converted).map_err(Error::Output)?;
        count += 1;
    }
    Ok(count)
}

/// Convert paths read from `reader`, one per line, passing each to `sink`.
///
/// Trailing whitespace (including the line terminator) is trimmed from each
/// line. Blank lines are converted like any other input. Lines are read
/// lazily, so output for a line is emitted before the next line is read.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails and [`Error::Output`] if the sink
/// fails.
pub fn to_absolute_paths_from_reader<R, F>(
    reader: R,
    converter: &AbsolutePathConverter,
    mut sink: F,
) -> Result<usize>
where
    R: BufRead,
    F: FnMut(&Path) -> io::Result<()>,
{
    let mut count = 0;
    for line in reader.lines() {
        let line = line?;
        let converted = converter.convert(Path::new(line.trim_end()));
        sink(&converted).map_err(Error::Output)?;
        count += 1;
    }
    Ok(count)
}

/// Sink that writes each path to `out` on its own line.
///
/// Paths that are not valid UTF-8 are written lossily.
pub fn line_sink<W: Write>(out: &mut W) -> impl FnMut(&Path) -> io::Result<()> + '_ {
    move |path: &Path| writeln!(out, "{}", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(converter: &AbsolutePathConverter, inputs: &[&str]) -> Vec<String> {
        let mut out = Vec::new();
        to_absolute_paths(inputs, converter, line_sink(&mut out)).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    #[cfg(unix)]
    fn test_documented_example() {
        let converter = AbsolutePathConverter::new("/home/u");
        assert_eq!(
            collect(&converter, &["foo", "/bar/./baz", "../x"]),
            vec!["/home/u/foo", "/bar/baz", "/home/x"]
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_order_and_count_preserved() {
        let converter = AbsolutePathConverter::new("/work");
        let lines = collect(&converter, &["b/../a", "/x/y/", "c", "c"]);
        assert_eq!(lines, vec!["/work/a", "/x/y/", "/work/c", "/work/c"]);
    }

    #[test]
    fn test_no_inputs_no_output() {
        let converter = AbsolutePathConverter::new("/work");
        let mut out = Vec::new();
        let count = to_absolute_paths(Vec::<PathBuf>::new(), &converter, line_sink(&mut out))
            .unwrap();
        assert_eq!(count, 0);
        assert!(out.is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn test_tilde_expansion_opt_in() {
        let plain = AbsolutePathConverter::new("/work");
        assert_eq!(plain.convert(Path::new("~/x")), PathBuf::from("/work/~/x"));

        let expanding = AbsolutePathConverter::new("/work").with_home_dir("/home/u");
        assert_eq!(
            expanding.convert(Path::new("~/x/../y")),
            PathBuf::from("/home/u/y")
        );
    }

    #[test]
    fn test_sink_error_stops_processing() {
        let converter = AbsolutePathConverter::new("/work");
        let mut calls = 0;
        let result = to_absolute_paths(["a", "b", "c"], &converter, |_| {
            calls += 1;
            if calls == 2 {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            } else {
                Ok(())
            }
        });
        assert!(matches!(result, Err(Error::Output(_))));
        assert_eq!(calls, 2);
    }

    #[test]
    #[cfg(unix)]
    fn test_reader_trims_trailing_whitespace() {
        let converter = AbsolutePathConverter::new("/work");
        let input = Cursor::new("a \nsub/../b\r\n\n/abs/./c\t\n");
        let mut out = Vec::new();
        let count =
            to_absolute_paths_from_reader(input, &converter, line_sink(&mut out)).unwrap();
        assert_eq!(count, 4);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "/work/a\n/work/b\n/work/\n/abs/c\n"
        );
    }

    #[test]
    fn test_from_current_dir_uses_cwd() {
        let cwd = env::current_dir().unwrap();
        let converter = AbsolutePathConverter::from_current_dir();
        assert_eq!(converter.base(), cwd.as_path());
        let converted = converter.convert(Path::new("relative/path"));
        assert!(converted.is_absolute());
        assert!(converted.starts_with(&cwd));
        assert!(converted.ends_with("relative/path"));
    }
}
