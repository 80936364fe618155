//! CS:GO demo parser implementation
//!
//! Adapts the CS:GO demo format to the [`ReplayParser`] contract by
//! delegating entirely to a [`DemoBackend`], configured by a parse rate.

use std::path::{Path, PathBuf};

use tracing::info;

use super::backend::{DemoBackend, ExternalBackend};
use super::contract::ReplayParser;
use crate::Result;
use crate::app::models::ParsedReplay;
use crate::config::ParserConfig;

/// Parser for CS:GO demo files
///
/// Owns its state exclusively: the configuration it was constructed with, the
/// path of the last demo handed to [`parse`](ReplayParser::parse), and the
/// parsed data from the last successful parse. The backend result is stored
/// as-is, with no transformation, filtering, or schema enforcement.
#[derive(Debug)]
pub struct CsgoParser<B = ExternalBackend> {
    config: ParserConfig,
    backend: B,
    filename: Option<PathBuf>,
    parsed_data: Option<ParsedReplay>,
}

impl CsgoParser<ExternalBackend> {
    /// Create a parser over the default external backend
    ///
    /// `parse_rate` is one of 128, 64, 32, 16, 8, 4, 2, or 1: the spacing in
    /// ticks between parsed demo frames. The lower the value, the more frames
    /// are collected, at proportionally higher processing cost. The value is
    /// passed through to the backend unvalidated.
    pub fn new(parse_rate: u32) -> Self {
        Self::with_backend(
            ExternalBackend::default(),
            ParserConfig::default().with_parse_rate(parse_rate),
        )
    }
}

impl<B: DemoBackend> CsgoParser<B> {
    /// Create a parser with an injected backend and explicit configuration
    pub fn with_backend(backend: B, config: ParserConfig) -> Self {
        Self {
            config,
            backend,
            filename: None,
            parsed_data: None,
        }
    }

    /// The configuration this parser was constructed with
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// The path handed to the most recent `parse` call, successful or not
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }
}

impl<B: DemoBackend> ReplayParser for CsgoParser<B> {
    fn parse(&mut self, demo_path: &Path) -> Result<()> {
        info!("Parsing demo file: {}", demo_path.display());

        self.filename = Some(demo_path.to_path_buf());

        // Clear-then-set: a failed re-parse leaves state absent, never stale.
        self.parsed_data = None;

        let data = self.backend.parse_demo(demo_path, self.config.parse_rate)?;

        info!(
            "Parsed demo: {} top-level keys, {} rounds",
            data.len(),
            data.game_rounds().map_or(0, Vec::len)
        );

        self.parsed_data = Some(data);
        Ok(())
    }

    fn parsed_data(&self) -> Option<&ParsedReplay> {
        self.parsed_data.as_ref()
    }
}
