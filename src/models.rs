//! Core data models for Mapship
//!
//! Defines `Platform`, the target mobile operating system. The platform
//! determines the default bundle and source map filenames and is forwarded
//! to both external tools.

use serde::{Deserialize, Serialize};

/// Target mobile platform
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Apple iOS
    #[default]
    Ios,
    /// Android
    Android,
}

impl Platform {
    /// All supported platforms
    pub const SUPPORTED: [Platform; 2] = [Platform::Ios, Platform::Android];

    /// The name used in flags and default filenames
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }

    /// Parse a platform name, case-insensitively. Returns `None` for
    /// unsupported values so callers can keep their current setting.
    pub fn parse_name(name: &str) -> Option<Platform> {
        match name.trim().to_lowercase().as_str() {
            "ios" => Some(Platform::Ios),
            "android" => Some(Platform::Android),
            _ => None,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
