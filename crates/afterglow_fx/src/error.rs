//! # Trail Error Types
//!
//! Runtime operations (spawning, ticking, resizing) are infallible.
//! Everything here comes from loading configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring the trail.
#[derive(Error, Debug)]
pub enum TrailError {
    /// Configuration parsed but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration is not valid TOML or has the wrong shape.
    #[error("malformed configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration file could not be read.
    #[error("cannot read configuration {path}: {source}")]
    ConfigIo {
        /// The file that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A palette entry is not a `#rrggbb` / `#rrggbbaa` color.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
}

/// Result type for trail configuration.
pub type TrailResult<T> = Result<T, TrailError>;
