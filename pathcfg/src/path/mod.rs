//! Absolute path conversion.
//!
//! This module turns user-supplied paths into absolute, normalized paths.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization is purely lexical:
//! - Relative paths are joined onto the working directory
//! - `.` components are dropped and `..` components consume their parent
//! - Repeated separators are collapsed; an input ending in a separator
//!   keeps one, so `"/x/y/"` stays `/x/y/` and `""` becomes `<cwd>/`
//! - Optionally, a leading `~` is expanded to the home directory
//!
//! Symlinks are never followed and the filesystem is never consulted, so
//! paths that do not exist convert exactly like paths that do. No input is
//! rejected; whatever the rules produce is emitted.
//!
//! ## Ordering
//!
//! [`to_absolute_paths`] emits exactly one result per input, in input order,
//! each handed to the sink before the next input is converted.
//!
//! # Examples
//!
//! ```
//! use pathcfg::path::{line_sink, to_absolute_paths, AbsolutePathConverter};
//!
//! let converter = AbsolutePathConverter::new("/home/u");
//! let mut out = Vec::new();
//! to_absolute_paths(["foo", "/bar/./baz", "../x"], &converter, line_sink(&mut out)).unwrap();
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "/home/u/foo\n/bar/baz\n/home/x\n");
//! ```

mod absolute;
pub mod normalize;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use absolute::{
    line_sink, to_absolute_paths, to_absolute_paths_from_reader, AbsolutePathConverter,
};
