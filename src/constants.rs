//! Application constants for demo processor
//!
//! This module contains all configuration constants, default values,
//! and well-known output keys used throughout the demo processor application.

// =============================================================================
// Parse Rate Constants
// =============================================================================

/// Supported demo parse rates, in ticks between sampled frames
///
/// Lower values collect more frames at proportionally higher processing cost.
pub const SUPPORTED_PARSE_RATES: &[u32] = &[1, 2, 4, 8, 16, 32, 64, 128];

/// Default parse rate if none specified
pub const DEFAULT_PARSE_RATE: u32 = 128;

// =============================================================================
// Demo File Constants
// =============================================================================

/// File extension CS:GO demo files are expected to carry
pub const DEMO_EXTENSION: &str = "dem";

/// Default executable name of the external demo-parser backend
///
/// Resolved through `PATH` unless an explicit path is configured.
pub const DEFAULT_PARSER_BIN: &str = "csgo-demoparser";

// =============================================================================
// Parsed Output Keys
// =============================================================================

/// Well-known keys in the backend's JSON output
///
/// The output mapping is treated as opaque; these are the few keys the CLI
/// reports on. Names follow the backend's own conventions.
pub mod keys {
    /// List of game rounds in a parsed demo
    pub const GAME_ROUNDS: &str = "gameRounds";

    /// List of sampled frames within a round
    pub const FRAMES: &str = "frames";

    /// Tick counter of a sampled frame
    pub const TICK: &str = "tick";

    /// Terminal outcome reason of a round
    pub const ROUND_END_REASON: &str = "roundEndReason";

    /// Official ending tick of a round
    pub const END_OFFICIAL_TICK: &str = "endOfficialTick";
}
