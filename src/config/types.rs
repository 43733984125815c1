//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{MapshipError, MapshipResult};
use crate::invocation::UploadOptions;
use crate::models::Platform;

/// All settings for one pipeline run.
///
/// Constructed once at startup with defaults applied, then layered with the
/// config file, environment and CLI flags; immutable while the pipeline
/// runs. Only the api key is validated here - every other value is
/// forwarded verbatim to the external tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bugsnag API key (required, validated before anything runs)
    pub api_key: Option<String>,

    /// Target app version
    pub app_version: Option<String>,

    /// Android app version code
    pub app_version_code: Option<String>,

    /// iOS bundle version
    pub app_bundle_version: Option<String>,

    /// CodePush bundle ID
    pub code_bundle_id: Option<String>,

    /// Target platform
    pub platform: Platform,

    /// Directory holding (or receiving) the bundle and source map
    pub sourcemaps_dir: PathBuf,

    /// Source map filename override, relative to `sourcemaps_dir`
    pub sourcemap: Option<String>,

    /// Bundle filename override, relative to `sourcemaps_dir`
    pub bundle: Option<String>,

    /// Overwrite existing source maps on the backend
    pub overwrite: bool,

    /// Generate the bundle and source map before uploading
    pub generate: bool,

    /// React Native entry file for bundle generation
    pub entry_file: String,

    /// Upload endpoint override (on-premise installs)
    pub endpoint: Option<String>,

    /// Project root forwarded to the uploader
    pub project_root: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            app_version: None,
            app_version_code: None,
            app_bundle_version: None,
            code_bundle_id: None,
            platform: Platform::Ios,
            sourcemaps_dir: PathBuf::from("/tmp"),
            sourcemap: None,
            bundle: None,
            overwrite: true,
            generate: true,
            entry_file: "index.js".to_string(),
            endpoint: None,
            project_root: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, discarding warnings.
    pub fn load(path: &std::path::Path) -> MapshipResult<Self> {
        super::loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// The api key, or `MissingApiKey` when absent or empty.
    pub fn validated_api_key(&self) -> MapshipResult<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(MapshipError::MissingApiKey),
        }
    }

    /// The optional upload parameters for the command builder.
    pub fn upload_options(&self) -> UploadOptions {
        UploadOptions {
            app_version: self.app_version.clone(),
            code_bundle_id: self.code_bundle_id.clone(),
            app_version_code: self.app_version_code.clone(),
            app_bundle_version: self.app_bundle_version.clone(),
            overwrite: self.overwrite,
            endpoint: self.endpoint.clone(),
            project_root: self.project_root.clone(),
        }
    }
}
