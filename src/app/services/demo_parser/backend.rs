//! External demo-parsing backend
//!
//! The actual decoding of the binary demo format is delegated to an external
//! demo-parser executable that emits the parsed match as JSON on stdout. This
//! module defines the backend capability as a trait, so the parser takes it
//! as an explicit injected dependency and tests can substitute a fake.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::app::models::ParsedReplay;
use crate::constants::DEFAULT_PARSER_BIN;
use crate::{Error, Result};

/// An external parsing capability for demo files
///
/// Implementations take a demo path and a parse rate and return the full
/// parsed mapping. Errors are whatever the capability raises; no recovery
/// happens at this layer.
pub trait DemoBackend {
    /// Parse the demo at `demo_path`, sampling one frame every `parse_rate` ticks
    fn parse_demo(&self, demo_path: &Path, parse_rate: u32) -> Result<ParsedReplay>;
}

// Allow a backend to be borrowed rather than owned by a parser.
impl<B: DemoBackend + ?Sized> DemoBackend for &B {
    fn parse_demo(&self, demo_path: &Path, parse_rate: u32) -> Result<ParsedReplay> {
        (**self).parse_demo(demo_path, parse_rate)
    }
}

/// Backend adapter that shells out to the demo-parser executable
///
/// Invokes `<program> --demo <path> --parse-rate <n>` and decodes the JSON
/// object the program writes to stdout. The invocation is synchronous and
/// blocking, with no timeout: the demo-parser runs to completion or failure.
#[derive(Debug, Clone)]
pub struct ExternalBackend {
    program: PathBuf,
}

impl ExternalBackend {
    /// Create a backend driving the given executable
    ///
    /// `program` may be a bare name resolved through `PATH` or an explicit
    /// path to the demo-parser binary.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The executable this backend invokes
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for ExternalBackend {
    fn default() -> Self {
        Self::new(DEFAULT_PARSER_BIN)
    }
}

impl DemoBackend for ExternalBackend {
    fn parse_demo(&self, demo_path: &Path, parse_rate: u32) -> Result<ParsedReplay> {
        if !demo_path.is_file() {
            return Err(Error::demo_not_found(demo_path.display().to_string()));
        }

        debug!(
            "Invoking backend: {} --demo {} --parse-rate {}",
            self.program.display(),
            demo_path.display(),
            parse_rate
        );

        let output = Command::new(&self.program)
            .arg("--demo")
            .arg(demo_path)
            .arg("--parse-rate")
            .arg(parse_rate.to_string())
            .output()
            .map_err(|e| Error::backend_launch(self.program.display().to_string(), e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(Error::backend_failed(
                self.program.display().to_string(),
                output.status.to_string(),
                stderr,
            ));
        }

        let value: serde_json::Value = serde_json::from_slice(&output.stdout)
            .map_err(|e| Error::invalid_output("backend stdout is not valid JSON", Some(e)))?;

        ParsedReplay::from_value(value)
    }
}
