//! The replay-parser capability contract
//!
//! Any number of format-specific parsers may implement this contract; callers
//! program against it rather than a concrete parser type.

use std::path::Path;

use crate::Result;
use crate::app::models::ParsedReplay;

/// Minimal capability set for a replay-file parser
///
/// A parser has a two-phase lifecycle: "unparsed" until a successful
/// [`parse`](ReplayParser::parse), then "parsed". Calling `parse` again is
/// permitted and overwrites prior state (last write wins).
///
/// The trait is object safe, so callers can hold a `Box<dyn ReplayParser>`
/// or `&mut dyn ReplayParser` when the concrete format does not matter.
pub trait ReplayParser {
    /// Parse the replay file at `demo_path`, populating the parser's state
    ///
    /// Blocks until parsing completes. Any error raised by the underlying
    /// parsing capability (missing file, malformed or unsupported format,
    /// backend fault) propagates unchanged; this layer performs no recovery.
    fn parse(&mut self, demo_path: &Path) -> Result<()>;

    /// The parsed data, or `None` if no successful parse has happened
    ///
    /// Never fails and has no side effects; simply returns what is stored.
    fn parsed_data(&self) -> Option<&ParsedReplay>;
}
