//! Demo Processor Library
//!
//! A Rust library for parsing CS:GO demo (replay) files into round and frame
//! data by delegating to an external demo-parser backend.
//!
//! This library provides tools for:
//! - A format-agnostic parser contract ("parse a file, expose a mapping")
//! - A CS:GO parser delegating to an external demo-parser executable
//! - Opaque round/frame data exposed as a nested JSON mapping
//! - Sampling-rate configuration for controlling parsed frame density
//! - Comprehensive error handling for backend and I/O failures

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod demo_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::ParsedReplay;
pub use app::services::demo_parser::{CsgoParser, DemoBackend, ExternalBackend, ReplayParser};
pub use config::ParserConfig;

/// Result type alias for the demo processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for demo processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Demo file not found
    #[error("Demo file not found: {path}")]
    DemoNotFound { path: String },

    /// The external demo-parser executable could not be started
    #[error("Failed to launch demo-parser backend '{program}': {source}")]
    BackendLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external demo-parser executable ran but reported failure
    #[error("Demo-parser backend '{program}' failed ({status}): {stderr}")]
    BackendFailed {
        program: String,
        status: String,
        stderr: String,
    },

    /// The external demo-parser produced output this layer cannot decode
    #[error("Invalid demo-parser output: {message}")]
    InvalidOutput {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a demo-not-found error
    pub fn demo_not_found(path: impl Into<String>) -> Self {
        Self::DemoNotFound { path: path.into() }
    }

    /// Create a backend launch error
    pub fn backend_launch(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::BackendLaunch {
            program: program.into(),
            source,
        }
    }

    /// Create a backend failure error from the backend's exit status and stderr
    pub fn backend_failed(
        program: impl Into<String>,
        status: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::BackendFailed {
            program: program.into(),
            status: status.into(),
            stderr: stderr.into(),
        }
    }

    /// Create an invalid-output error with an optional JSON source
    pub fn invalid_output(message: impl Into<String>, source: Option<serde_json::Error>) -> Self {
        Self::InvalidOutput {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidOutput {
            message: "JSON decoding failed".to_string(),
            source: Some(error),
        }
    }
}
