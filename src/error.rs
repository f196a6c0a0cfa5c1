// src/error.rs
//! Unified error handling for the glove firmware core
//!
//! All fallible configuration operations funnel into [`ConfigError`] so that
//! callers see one error surface regardless of whether a problem came from
//! file I/O, TOML parsing, or resolution of the configuration itself.

use thiserror::Error;

use crate::config::BoardClass;

/// Errors raised while loading or resolving the firmware configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The target board has no automatic analog maximum and none was set
    /// manually. Fatal: every downstream sensor scaling computation depends
    /// on a concrete analog range, so there is no safe default to fall
    /// back to.
    #[error(
        "board class `{board}` has no automatic analog maximum assignment; \
         set [analog] analog_max manually"
    )]
    UnresolvedAnalogMax {
        /// Board class that failed automatic detection
        board: BoardClass,
    },

    /// A required configuration file was not found on disk
    #[error("configuration file not found: {path}")]
    FileNotFound {
        /// Path that was searched
        path: String,
    },

    /// The configuration file exists but is not valid TOML
    #[error("configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized back to TOML
    #[error("configuration serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Cross-field consistency checks failed
    #[error("configuration validation failed: {}", .issues.join("; "))]
    Validation {
        /// Human-readable description of each failed check
        issues: Vec<String>,
    },

    /// Underlying I/O failure while reading or writing configuration
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
