//! Property tests for path resolution.

use proptest::prelude::*;

use mapship::paths::resolve;
use std::path::{Path, PathBuf};

fn platform_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9]{0,12}").unwrap()
}

fn file_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{1,24}").unwrap()
}

fn base_dir() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9._-]{1,12}").unwrap();
    proptest::collection::vec(segment, 1..=3).prop_map(|segments| format!("/{}", segments.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: without overrides, both paths follow the
    /// `dir/{platform}.bundle[.map]` formula for any platform string.
    #[test]
    fn property_default_paths_follow_formula(
        dir in base_dir(),
        platform in platform_name(),
    ) {
        let paths = resolve(Path::new(&dir), &platform, None, None);
        prop_assert_eq!(
            paths.source_map,
            PathBuf::from(format!("{dir}/{platform}.bundle.map"))
        );
        prop_assert_eq!(paths.bundle, PathBuf::from(format!("{dir}/{platform}.bundle")));
    }

    /// PROPERTY: a non-empty override wins verbatim, irrespective of the
    /// platform.
    #[test]
    fn property_overrides_win_for_any_platform(
        dir in base_dir(),
        platform in platform_name(),
        map_name in file_name(),
        bundle_name in file_name(),
    ) {
        let paths = resolve(Path::new(&dir), &platform, Some(&map_name), Some(&bundle_name));
        prop_assert_eq!(paths.source_map, PathBuf::from(format!("{dir}/{map_name}")));
        prop_assert_eq!(paths.bundle, PathBuf::from(format!("{dir}/{bundle_name}")));
    }

    /// PROPERTY: resolution is a pure function - identical inputs yield
    /// identical outputs.
    #[test]
    fn property_resolve_is_idempotent(
        dir in base_dir(),
        platform in platform_name(),
        map_name in proptest::option::of(file_name()),
        bundle_name in proptest::option::of(file_name()),
    ) {
        let a = resolve(Path::new(&dir), &platform, map_name.as_deref(), bundle_name.as_deref());
        let b = resolve(Path::new(&dir), &platform, map_name.as_deref(), bundle_name.as_deref());
        prop_assert_eq!(a, b);
    }

    /// PROPERTY: an empty override behaves exactly like no override.
    #[test]
    fn property_empty_override_equals_absent(
        dir in base_dir(),
        platform in platform_name(),
    ) {
        let with_empty = resolve(Path::new(&dir), &platform, Some(""), Some(""));
        let without = resolve(Path::new(&dir), &platform, None, None);
        prop_assert_eq!(with_empty, without);
    }
}
