//! Lexical path normalization.
//!
//! Everything here works on path text only: the filesystem is never
//! consulted, symlinks are not followed, and no input is rejected.
//!
//! - Expanding tilde (~) to the home directory (opt-in)
//! - Converting relative paths to absolute paths against a base directory
//! - Resolving `.` and `..` components
//! - Collapsing repeated separators (a trailing separator is kept as one)

use std::path::{is_separator, Component, Path, PathBuf};

/// Expand a leading tilde (~) to the given home directory.
///
/// `~` and `~/path` are expanded. Anything else, including the `~user`
/// form and paths that are not valid UTF-8, is returned unchanged.
///
/// # Examples
///
/// ```
/// use pathcfg::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let home = Path::new("/home/u");
/// assert_eq!(expand_tilde(Path::new("~"), home), Path::new("/home/u"));
/// assert_eq!(expand_tilde(Path::new("~/src"), home), Path::new("/home/u/src"));
/// assert_eq!(expand_tilde(Path::new("~bob/src"), home), Path::new("~bob/src"));
/// assert_eq!(expand_tilde(Path::new("/abs"), home), Path::new("/abs"));
/// ```
#[must_use]
pub fn expand_tilde(path: &Path, home: &Path) -> PathBuf {
    let Some(path_str) = path.to_str() else {
        return path.to_path_buf();
    };

    if path_str == "~" {
        home.to_path_buf()
    } else if let Some(rest) = path_str
        .strip_prefix("~/")
        .or_else(|| path_str.strip_prefix("~\\"))
    {
        home.join(rest)
    } else {
        path.to_path_buf()
    }
}

/// Make a path absolute by joining it onto `base` when it is relative.
///
/// Absolute paths are returned as-is. No normalization is applied.
///
/// # Examples
///
/// ```
/// use pathcfg::path::normalize::to_absolute;
/// use std::path::Path;
///
/// let cwd = Path::new("/home/u");
/// assert_eq!(to_absolute(Path::new("foo"), cwd), Path::new("/home/u/foo"));
/// assert_eq!(to_absolute(Path::new("/bar"), cwd), Path::new("/bar"));
/// ```
#[must_use]
pub fn to_absolute(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Resolve `.` and `..` components and collapse redundant separators.
///
/// `..` removes the preceding normal component. At the root it is dropped
/// (`/..` is `/`). A relative path that climbs above its start keeps its
/// leading `..` components, and a relative path that resolves to nothing
/// becomes `.`. An input ending in a separator keeps exactly one.
///
/// # Examples
///
/// ```
/// use pathcfg::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(resolve_components(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(resolve_components(Path::new("/a//b//")), PathBuf::from("/a/b/"));
/// assert_eq!(resolve_components(Path::new("/a/../..")), PathBuf::from("/"));
/// assert_eq!(resolve_components(Path::new("../x/../y")), PathBuf::from("../y"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                parts.push(component);
            }
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // Nothing above the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
        }
    }

    let mut resolved = if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.iter().collect()
    };

    // Pushing an empty component appends one separator, or none after a root
    if has_trailing_separator(path) {
        resolved.push("");
    }

    resolved
}

fn has_trailing_separator(path: &Path) -> bool {
    path.as_os_str()
        .as_encoded_bytes()
        .last()
        .is_some_and(|&b| is_separator(char::from(b)))
}

/// Normalize a path to absolute form against an explicit base directory.
///
/// This is `resolve_components(to_absolute(path, base))`.
///
/// # Examples
///
/// ```
/// use pathcfg::path::normalize::normalize_with_base;
/// use std::path::Path;
///
/// let cwd = Path::new("/home/u");
/// assert_eq!(normalize_with_base(Path::new("../x"), cwd), Path::new("/home/x"));
/// assert_eq!(normalize_with_base(Path::new("/bar/./baz"), cwd), Path::new("/bar/baz"));
/// ```
#[must_use]
pub fn normalize_with_base(path: &Path, base: &Path) -> PathBuf {
    resolve_components(&to_absolute(path, base))
}
