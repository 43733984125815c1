//! External command assembly
//!
//! Builds the argument lists for the two external tools this pipeline
//! drives: the React Native bundler and the Bugsnag source map uploader.
//! Both builders are pure; identical inputs always produce identical
//! argument lists, so logged command lines are reproducible.
//!
//! Optional upload flags are driven by a fixed rule table rather than ad hoc
//! string concatenation, which pins the emission order.

use std::fmt;

use crate::paths::ResolvedPaths;

/// One fully assembled external command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl InvocationSpec {
    fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
        }
    }

    fn push(&mut self, arg: impl Into<String>) {
        self.args.push(arg.into());
    }

    /// Render the full command line for logs and dry runs.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl fmt::Display for InvocationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command_line())
    }
}

/// Optional upload parameters.
///
/// Every field maps to at most one flag of the upload tool. `overwrite`
/// is inverted on the wire: the tool overwrites by default, so a flag is
/// emitted only when overwriting is explicitly disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    pub app_version: Option<String>,
    pub code_bundle_id: Option<String>,
    pub app_version_code: Option<String>,
    pub app_bundle_version: Option<String>,
    pub overwrite: bool,
    pub endpoint: Option<String>,
    pub project_root: Option<String>,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            app_version: None,
            code_bundle_id: None,
            app_version_code: None,
            app_bundle_version: None,
            overwrite: true,
            endpoint: None,
            project_root: None,
        }
    }
}

/// One optional-flag emission rule.
enum FlagRule<'a> {
    /// `--flag <value>`, emitted when the value is set and non-empty
    Value(&'static str, Option<&'a str>),
    /// Bare `--flag`, emitted when the underlying setting is `false`
    InvertedSwitch(&'static str, bool),
}

impl FlagRule<'_> {
    fn append_to(&self, spec: &mut InvocationSpec) {
        match self {
            FlagRule::Value(flag, Some(value)) if !value.is_empty() => {
                spec.push(*flag);
                spec.push(*value);
            }
            FlagRule::Value(_, _) => {}
            FlagRule::InvertedSwitch(flag, enabled) => {
                if !enabled {
                    spec.push(*flag);
                }
            }
        }
    }
}

/// Build the bundler invocation.
///
/// All parameters are required and every flag is always emitted; the
/// pipeline only builds production (non-dev) bundles.
pub fn bundle_command(platform: &str, entry_file: &str, paths: &ResolvedPaths) -> InvocationSpec {
    let mut spec = InvocationSpec::new("npx");
    spec.push("react-native");
    spec.push("bundle");
    spec.push("--dev");
    spec.push("false");
    spec.push("--platform");
    spec.push(platform);
    spec.push("--bundle-output");
    spec.push(paths.bundle.display().to_string());
    spec.push("--sourcemap-output");
    spec.push(paths.source_map.display().to_string());
    spec.push("--entry-file");
    spec.push(entry_file);
    spec
}

/// Build the upload invocation.
///
/// Mandatory flags come first (platform, api key, both paths), then the
/// optional rules in table order. The caller validates the api key before
/// getting here; values are otherwise forwarded verbatim.
pub fn upload_command(
    api_key: &str,
    platform: &str,
    paths: &ResolvedPaths,
    options: &UploadOptions,
) -> InvocationSpec {
    let mut spec = InvocationSpec::new("npx");
    spec.push("@bugsnag/source-maps");
    spec.push("upload-react-native");
    spec.push("--platform");
    spec.push(platform);
    spec.push("--api-key");
    spec.push(api_key);
    spec.push("--source-map");
    spec.push(paths.source_map.display().to_string());
    spec.push("--bundle");
    spec.push(paths.bundle.display().to_string());

    let rules = [
        FlagRule::Value("--app-version", options.app_version.as_deref()),
        FlagRule::Value("--code-bundle-id", options.code_bundle_id.as_deref()),
        FlagRule::Value("--app-version-code", options.app_version_code.as_deref()),
        FlagRule::Value("--app-bundle-version", options.app_bundle_version.as_deref()),
        FlagRule::InvertedSwitch("--no-overwrite", options.overwrite),
        FlagRule::Value("--endpoint", options.endpoint.as_deref()),
        FlagRule::Value("--project-root", options.project_root.as_deref()),
    ];
    for rule in &rules {
        rule.append_to(&mut spec);
    }
    spec
}
