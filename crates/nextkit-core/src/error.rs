//! Error handling for the nextkit scaffolding library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. It uses `thiserror` for easy
//! error handling and implements conversions from common error types.
//!
//! User cancellation is deliberately not represented here: commands report it
//! through [`crate::commands::CommandOutcome::Cancelled`].
//!
//! # Examples
//!
//! ```
//! use nextkit_core::error::{Error, Result};
//!
//! fn require_name(name: &str) -> Result<&str> {
//!     if name.trim().is_empty() {
//!         return Err(Error::validation("The component name is required"));
//!     }
//!     Ok(name)
//! }
//!
//! assert!(require_name("").is_err());
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Result type for nextkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for nextkit operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error tied to a specific path
    #[error("Failed to access {}: {source}", path.display())]
    Fs {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file exists and overwriting was not allowed
    #[error("File already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Template error
    #[error("Template error: {0}")]
    Template(String),

    /// Template engine error
    #[error("Template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Required user input was missing or invalid
    #[error("{0}")]
    Validation(String),

    /// The interactive prompt backend failed
    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new template error
    pub fn template<S: Into<String>>(msg: S) -> Self {
        Self::Template(msg.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Wrap an I/O error with the path it occurred on
    pub fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Fs {
            path: path.into(),
            source,
        }
    }
}
