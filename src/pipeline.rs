//! Upload pipeline orchestration
//!
//! Coordinates one run end to end:
//!
//! 1. Validate the api key (fail fast, before anything else)
//! 2. Resolve the source map and bundle paths
//! 3. If generation is enabled, build and execute the bundler invocation
//! 4. Build and execute the upload invocation
//!
//! The two invocations are strictly sequential; the uploader consumes the
//! bundler's output files. Each run is a pure function of its `Config`
//! except for the child processes themselves.

use crate::config::Config;
use crate::error::MapshipResult;
use crate::exec::CommandRunner;
use crate::invocation::{bundle_command, upload_command};
use crate::paths::{resolve, ResolvedPaths};

/// Pipeline progress events for NDJSON output
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UploadEvent {
    PathsResolved { source_map: String, bundle: String },
    BundleStarted { command: String },
    UploadStarted { command: String },
    Finished,
}

impl UploadEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// One generate-and-upload run.
pub struct UploadPipeline<'a> {
    config: &'a Config,
    runner: &'a dyn CommandRunner,
    dry_run: bool,
}

impl<'a> UploadPipeline<'a> {
    pub fn new(config: &'a Config, runner: &'a dyn CommandRunner) -> Self {
        Self {
            config,
            runner,
            dry_run: false,
        }
    }

    /// Report the assembled command lines without executing them.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Execute the pipeline, reporting progress through `on_event`.
    ///
    /// Aborts on the first failure; files already written by the bundler are
    /// left on disk.
    pub fn run(&self, mut on_event: impl FnMut(&UploadEvent)) -> MapshipResult<ResolvedPaths> {
        let api_key = self.config.validated_api_key()?;
        let platform = self.config.platform.as_str();

        let paths = resolve(
            &self.config.sourcemaps_dir,
            platform,
            self.config.sourcemap.as_deref(),
            self.config.bundle.as_deref(),
        );
        on_event(&UploadEvent::PathsResolved {
            source_map: paths.source_map.display().to_string(),
            bundle: paths.bundle.display().to_string(),
        });

        if self.config.generate {
            let spec = bundle_command(platform, &self.config.entry_file, &paths);
            on_event(&UploadEvent::BundleStarted {
                command: spec.command_line(),
            });
            if !self.dry_run {
                self.runner.run(&spec)?;
            }
        }

        let spec = upload_command(api_key, platform, &paths, &self.config.upload_options());
        on_event(&UploadEvent::UploadStarted {
            command: spec.command_line(),
        });
        if !self.dry_run {
            self.runner.run(&spec)?;
        }

        on_event(&UploadEvent::Finished);
        Ok(paths)
    }
}
