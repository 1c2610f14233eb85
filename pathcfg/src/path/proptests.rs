//! Property-based tests for absolute path conversion.
//!
//! The normalize module carries a few quick properties of its own; these
//! run many more cases and cover the converter as a whole.

use super::normalize::{normalize_with_base, resolve_components};
use super::AbsolutePathConverter;
use proptest::prelude::*;
use std::path::{Component, Path, PathBuf};

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

// Relative inputs mixing names, `.`, `..` and empty segments (`a//b`).
// A leading empty segment would make the input absolute, so those are
// filtered out.
fn messy_relative_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(".".to_string()),
            Just("..".to_string()),
            Just(String::new()),
            path_component_strategy(),
        ],
        1..10,
    )
    .prop_map(|parts| parts.join("/"))
    .prop_filter("input must be relative", |s| !s.starts_with('/'))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Normalizing an already normalized absolute path returns it unchanged
    #[test]
    fn normalization_idempotent(path in absolute_path_strategy(), rel in messy_relative_strategy()) {
        let once = normalize_with_base(Path::new(&rel), &path);
        let twice = normalize_with_base(&once, Path::new("/elsewhere"));
        prop_assert_eq!(once.as_os_str(), twice.as_os_str());
    }

    // Relative P converts to normalize(cwd + "/" + P)
    #[test]
    fn relative_matches_joined_string(cwd in absolute_path_strategy(), rel in messy_relative_strategy()) {
        let converter = AbsolutePathConverter::new(&cwd);
        let joined = format!("{}/{}", cwd.display(), rel);
        prop_assert_eq!(
            converter.convert(Path::new(&rel)).as_os_str(),
            resolve_components(Path::new(&joined)).as_os_str()
        );
    }

    // Absolute P converts to normalize(P) regardless of the working directory
    #[test]
    fn absolute_ignores_cwd(cwd in absolute_path_strategy(), rel in messy_relative_strategy()) {
        let absolute = format!("/{rel}");
        let converter = AbsolutePathConverter::new(&cwd);
        prop_assert_eq!(
            converter.convert(Path::new(&absolute)).as_os_str(),
            resolve_components(Path::new(&absolute)).as_os_str()
        );
    }

    // Converted paths are absolute and free of `.` and `..`
    #[test]
    fn converted_paths_are_clean(cwd in absolute_path_strategy(), rel in messy_relative_strategy()) {
        let converted = AbsolutePathConverter::new(&cwd).convert(Path::new(&rel));
        prop_assert!(converted.is_absolute());
        for component in converted.components() {
            prop_assert!(!matches!(component, Component::CurDir | Component::ParentDir));
        }
        let text = converted.to_string_lossy();
        prop_assert!(!text.contains("//"));
    }

    // A trailing separator survives as one; otherwise only the root ends in one
    #[test]
    fn trailing_separator_follows_input(cwd in absolute_path_strategy(), rel in messy_relative_strategy()) {
        let text = AbsolutePathConverter::new(&cwd)
            .convert(Path::new(&rel))
            .display()
            .to_string();
        if rel.is_empty() || rel.ends_with('/') {
            prop_assert!(text.ends_with('/'), "{:?} -> {}", rel, text);
        } else {
            prop_assert!(!text.ends_with('/') || text == "/", "{:?} -> {}", rel, text);
        }
    }
}
