//! Demo parser service for CS:GO replay files
//!
//! This module provides the replay-parsing abstraction layer: a minimal
//! contract any format-specific parser implements, and a CS:GO implementation
//! that delegates the actual parsing to an external backend.
//!
//! ## Architecture
//!
//! The service is organized into logical components:
//! - [`contract`] - The `ReplayParser` capability contract
//! - [`backend`] - The external parsing capability and its process adapter
//! - [`parser`] - The CS:GO parser implementing the contract
//!
//! ## Usage
//!
//! ```rust
//! use std::path::Path;
//! use demo_processor::app::services::demo_parser::{CsgoParser, ReplayParser};
//!
//! # fn example() -> demo_processor::Result<()> {
//! let mut parser = CsgoParser::new(64);
//! parser.parse(Path::new("fixtures/default.dem"))?;
//!
//! if let Some(data) = parser.parsed_data() {
//!     println!("Parsed {} rounds", data.game_rounds().map_or(0, Vec::len));
//! }
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod contract;
pub mod parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use backend::{DemoBackend, ExternalBackend};
pub use contract::ReplayParser;
pub use parser::CsgoParser;
