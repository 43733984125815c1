use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::models::Platform;

/// Mapship - React Native source map upload tool
#[derive(Parser, Debug)]
#[command(name = "mapship")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Every upload flag can also come from mapship.toml or BUGSNAG_* environment variables.")]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a React Native bundle + source map and upload to Bugsnag
    Upload(UploadArgs),

    /// Verify the external toolchain is available
    Check,
}

/// Flags for the upload pipeline.
///
/// Every flag is optional; unset flags fall through to the environment, the
/// config file, then built-in defaults.
#[derive(Args, Debug, Default)]
pub struct UploadArgs {
    /// Bugsnag API key
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Target app version
    #[arg(long, value_name = "VERSION")]
    pub app_version: Option<String>,

    /// Android app version code
    #[arg(long, value_name = "CODE")]
    pub app_version_code: Option<String>,

    /// iOS bundle version
    #[arg(long, value_name = "VERSION")]
    pub app_bundle_version: Option<String>,

    /// CodePush bundle ID
    #[arg(long, value_name = "ID")]
    pub code_bundle_id: Option<String>,

    /// Target platform
    #[arg(long, value_enum)]
    pub platform: Option<Platform>,

    /// Directory holding the bundle and source map
    #[arg(long = "dir", value_name = "DIR")]
    pub sourcemaps_dir: Option<PathBuf>,

    /// Source map filename override (relative to --dir)
    #[arg(long, value_name = "NAME")]
    pub sourcemap: Option<String>,

    /// Bundle filename override (relative to --dir)
    #[arg(long, value_name = "NAME")]
    pub bundle: Option<String>,

    /// Overwrite existing source maps on the backend
    #[arg(long, value_name = "BOOL")]
    pub overwrite: Option<bool>,

    /// Generate the bundle and source map before uploading
    #[arg(long, value_name = "BOOL")]
    pub generate: Option<bool>,

    /// React Native entry file for bundle generation
    #[arg(long, value_name = "FILE")]
    pub entry_file: Option<String>,

    /// Upload endpoint (Bugsnag On-premise)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Project root forwarded to the uploader
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<String>,

    /// Path to a config file (defaults to ./mapship.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the assembled commands without executing them
    #[arg(long)]
    pub dry_run: bool,
}

impl UploadArgs {
    /// Overlay set flags onto `config`; flags beat file and environment.
    pub fn apply(&self, config: &mut Config) {
        if let Some(key) = &self.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(version) = &self.app_version {
            config.app_version = Some(version.clone());
        }
        if let Some(code) = &self.app_version_code {
            config.app_version_code = Some(code.clone());
        }
        if let Some(version) = &self.app_bundle_version {
            config.app_bundle_version = Some(version.clone());
        }
        if let Some(id) = &self.code_bundle_id {
            config.code_bundle_id = Some(id.clone());
        }
        if let Some(platform) = self.platform {
            config.platform = platform;
        }
        if let Some(dir) = &self.sourcemaps_dir {
            config.sourcemaps_dir = dir.clone();
        }
        if let Some(name) = &self.sourcemap {
            config.sourcemap = Some(name.clone());
        }
        if let Some(name) = &self.bundle {
            config.bundle = Some(name.clone());
        }
        if let Some(overwrite) = self.overwrite {
            config.overwrite = overwrite;
        }
        if let Some(generate) = self.generate {
            config.generate = generate;
        }
        if let Some(entry) = &self.entry_file {
            config.entry_file = entry.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = Some(endpoint.clone());
        }
        if let Some(root) = &self.project_root {
            config.project_root = Some(root.clone());
        }
    }
}
