//! Configuration loading and environment overrides

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MapshipError, MapshipResult};
use crate::models::Platform;

use super::types::Config;

/// Default config filename looked up in the working directory.
const CONFIG_FILE: &str = "mapship.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MapshipResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MapshipError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit path, `mapship.toml` in the working directory, or
/// defaults, then apply environment overrides.
///
/// An explicit path must exist and parse; the implicit file is only read
/// when present.
pub fn load_or_default(explicit: Option<&Path>) -> MapshipResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => {
            let implicit = Path::new(CONFIG_FILE);
            if implicit.exists() {
                load_with_warnings(implicit)?
            } else {
                (Config::default(), Vec::new())
            }
        }
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides.
///
/// The variable names match the environment contract the surrounding build
/// automation already uses (BUGSNAG_API_KEY plus BUGSNAG_SOURCEMAPS_*).
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Some(key) = env_string("BUGSNAG_API_KEY") {
        config.api_key = Some(key);
    }
    if let Some(version) = env_string("BUGSNAG_SOURCEMAPS_APP_VERSION") {
        config.app_version = Some(version);
    }
    if let Some(code) = env_string("BUGSNAG_SOURCEMAPS_APP_VERSION_CODE") {
        config.app_version_code = Some(code);
    }
    if let Some(version) = env_string("BUGSNAG_SOURCEMAPS_APP_BUNDLE_VERSION") {
        config.app_bundle_version = Some(version);
    }
    if let Some(id) = env_string("BUGSNAG_SOURCEMAPS_CODE_BUNDLE") {
        config.code_bundle_id = Some(id);
    }
    if let Some(name) = env_string("BUGSNAG_SOURCEMAPS_PLATFORM") {
        if let Some(platform) = Platform::parse_name(&name) {
            config.platform = platform;
        }
    }
    if let Some(dir) = env_string("BUGSNAG_SOURCEMAPS_DIR") {
        config.sourcemaps_dir = PathBuf::from(dir);
    }
    if let Some(name) = env_string("BUGSNAG_SOURCEMAPS_NAME") {
        config.sourcemap = Some(name);
    }
    if let Some(name) = env_string("BUGSNAG_SOURCEMAPS_BUNDLE_NAME") {
        config.bundle = Some(name);
    }
    if let Ok(val) = std::env::var("BUGSNAG_SOURCEMAPS_OVERWRITE") {
        config.overwrite = parse_env_bool(&val);
    }
    if let Ok(val) = std::env::var("BUGSNAG_SOURCEMAPS_GENERATE") {
        config.generate = parse_env_bool(&val);
    }
    if let Some(entry) = env_string("BUGSNAG_SOURCEMAPS_ENTRY_FILE") {
        config.entry_file = entry;
    }
    if let Some(endpoint) = env_string("BUGSNAG_SOURCEMAPS_ENDPOINT") {
        config.endpoint = Some(endpoint);
    }
    if let Some(root) = env_string("BUGSNAG_SOURCEMAPS_PROJECT_ROOT") {
        config.project_root = Some(root);
    }

    config
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_env_bool(val: &str) -> bool {
    val.to_lowercase() != "false" && val != "0"
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "api_key",
        "app_version",
        "app_version_code",
        "app_bundle_version",
        "code_bundle_id",
        "platform",
        "sourcemaps_dir",
        "sourcemap",
        "bundle",
        "overwrite",
        "generate",
        "entry_file",
        "endpoint",
        "project_root",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
