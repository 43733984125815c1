//! Property tests for upload command assembly.

use proptest::prelude::*;

use mapship::invocation::{upload_command, UploadOptions};
use mapship::paths::resolve;
use std::path::Path;

/// Subcommand pair plus four mandatory flag/value pairs.
const MANDATORY_ARGS: usize = 10;

/// Optional values never start with `-`, so a value can never be mistaken
/// for a flag when asserting on the argument list.
fn opt_value() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(
        proptest::string::string_regex("[A-Za-z0-9._][A-Za-z0-9._-]{0,11}").unwrap(),
    )
}

fn upload_options() -> impl Strategy<Value = UploadOptions> {
    (
        opt_value(),
        opt_value(),
        opt_value(),
        opt_value(),
        any::<bool>(),
        opt_value(),
        opt_value(),
    )
        .prop_map(
            |(
                app_version,
                code_bundle_id,
                app_version_code,
                app_bundle_version,
                overwrite,
                endpoint,
                project_root,
            )| UploadOptions {
                app_version,
                code_bundle_id,
                app_version_code,
                app_bundle_version,
                overwrite,
                endpoint,
                project_root,
            },
        )
}

fn set_value_count(options: &UploadOptions) -> usize {
    [
        &options.app_version,
        &options.code_bundle_id,
        &options.app_version_code,
        &options.app_bundle_version,
        &options.endpoint,
        &options.project_root,
    ]
    .iter()
    .filter(|value| value.is_some())
    .count()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the argument list length is exactly the mandatory count
    /// plus two per set value option plus one for a disabled overwrite.
    #[test]
    fn property_arg_count_formula(options in upload_options()) {
        let paths = resolve(Path::new("/tmp"), "ios", None, None);
        let spec = upload_command("key", "ios", &paths, &options);

        let expected = MANDATORY_ARGS
            + 2 * set_value_count(&options)
            + usize::from(!options.overwrite);
        prop_assert_eq!(spec.args.len(), expected);
    }

    /// PROPERTY: unset fields never surface as flags.
    #[test]
    fn property_unset_fields_never_emit_flags(options in upload_options()) {
        let paths = resolve(Path::new("/tmp"), "ios", None, None);
        let spec = upload_command("key", "ios", &paths, &options);

        let pairs = [
            ("--app-version", options.app_version.is_some()),
            ("--code-bundle-id", options.code_bundle_id.is_some()),
            ("--app-version-code", options.app_version_code.is_some()),
            ("--app-bundle-version", options.app_bundle_version.is_some()),
            ("--endpoint", options.endpoint.is_some()),
            ("--project-root", options.project_root.is_some()),
        ];
        for (flag, set) in pairs {
            prop_assert_eq!(spec.args.iter().any(|a| a == flag), set, "flag {}", flag);
        }
    }

    /// PROPERTY: `--no-overwrite` appears exactly when overwriting is
    /// disabled.
    #[test]
    fn property_no_overwrite_iff_disabled(options in upload_options()) {
        let paths = resolve(Path::new("/tmp"), "android", None, None);
        let spec = upload_command("key", "android", &paths, &options);

        prop_assert_eq!(
            spec.args.iter().any(|a| a == "--no-overwrite"),
            !options.overwrite
        );
    }

    /// PROPERTY: command assembly is byte-identical across repeated calls.
    #[test]
    fn property_upload_command_is_idempotent(options in upload_options()) {
        let paths = resolve(Path::new("/tmp"), "ios", None, None);
        let a = upload_command("key", "ios", &paths, &options);
        let b = upload_command("key", "ios", &paths, &options);
        prop_assert_eq!(a, b);
    }

    /// PROPERTY: the mandatory prefix is identical regardless of options.
    #[test]
    fn property_mandatory_prefix_is_stable(options in upload_options()) {
        let paths = resolve(Path::new("/tmp"), "ios", None, None);
        let spec = upload_command("key", "ios", &paths, &options);

        prop_assert_eq!(
            &spec.args[..MANDATORY_ARGS],
            [
                "@bugsnag/source-maps",
                "upload-react-native",
                "--platform",
                "ios",
                "--api-key",
                "key",
                "--source-map",
                "/tmp/ios.bundle.map",
                "--bundle",
                "/tmp/ios.bundle",
            ]
        );
    }
}
