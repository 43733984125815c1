//! Mapship - React Native source map upload tool
//!
//! Mapship prepares client-side debug symbols for a React Native app and
//! ships them to Bugsnag: it derives bundle and source map paths, optionally
//! generates both with the React Native bundler, then drives the Bugsnag
//! upload CLI with a precisely assembled flag set.

pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod invocation;
pub mod models;
pub mod paths;
pub mod pipeline;

// Re-exports for convenience
pub use config::{load_or_default, with_env_overrides, Config, ConfigWarning};
pub use error::{MapshipError, MapshipResult};
pub use exec::{check_available, CommandRunner, ProcessRunner};
pub use invocation::{bundle_command, upload_command, InvocationSpec, UploadOptions};
pub use models::Platform;
pub use paths::{resolve, ResolvedPaths};
pub use pipeline::{UploadEvent, UploadPipeline};
