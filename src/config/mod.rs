//! Configuration module for Mapship
//!
//! Implements the configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BUGSNAG_*)
//! 3. Project config (mapship.toml, or the `--config` path)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_or_default, load_with_warnings, with_env_overrides, ConfigWarning};
pub use types::Config;
