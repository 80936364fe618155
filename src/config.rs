//! Configuration management for demo parsing.
//!
//! Provides the parser configuration structure holding the sampling-rate
//! knob that is passed through to the external demo-parser backend.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PARSE_RATE, SUPPORTED_PARSE_RATES};

/// Configuration for a demo parser instance
///
/// The parse rate is the spacing, in simulation ticks, between frames the
/// backend retains while parsing. It is a pass-through knob: the library hands
/// it to the backend unchanged and performs no validation of its own. Callers
/// that accept user input (the CLI does) can check candidate values against
/// the enumerated set with [`ParserConfig::is_supported_rate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Ticks between sampled frames (one of 1, 2, 4, 8, 16, 32, 64, or 128)
    pub parse_rate: u32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            parse_rate: DEFAULT_PARSE_RATE,
        }
    }
}

impl ParserConfig {
    /// Create configuration with a custom parse rate
    pub fn with_parse_rate(mut self, parse_rate: u32) -> Self {
        self.parse_rate = parse_rate;
        self
    }

    /// Check whether a candidate rate is in the supported enumerated set
    pub fn is_supported_rate(rate: u32) -> bool {
        SUPPORTED_PARSE_RATES.contains(&rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parse_rate() {
        let config = ParserConfig::default();
        assert_eq!(config.parse_rate, 128);
    }

    #[test]
    fn test_with_parse_rate_builder() {
        let config = ParserConfig::default().with_parse_rate(64);
        assert_eq!(config.parse_rate, 64);
    }

    #[test]
    fn test_supported_rates_are_powers_of_two() {
        for rate in [1, 2, 4, 8, 16, 32, 64, 128] {
            assert!(ParserConfig::is_supported_rate(rate));
        }
        assert!(!ParserConfig::is_supported_rate(0));
        assert!(!ParserConfig::is_supported_rate(3));
        assert!(!ParserConfig::is_supported_rate(256));
    }
}
