//! Test utilities and mock infrastructure for demo parser testing
//!
//! This module provides common test utilities, mock backends, and helper
//! functions used across different test modules.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use crate::app::models::ParsedReplay;
use crate::app::services::demo_parser::DemoBackend;
use crate::{Error, Result};

// Test modules
mod backend_tests;

/// A scripted response for the mock backend
pub enum ScriptedResponse {
    /// Return this value as the parsed payload
    Payload(Value),
    /// Fail with a backend error carrying this message
    Failure(&'static str),
}

/// Mock backend that replays a fixed sequence of responses
///
/// Records every invocation so tests can assert the path and parse rate the
/// parser handed through.
pub struct ScriptedBackend {
    responses: RefCell<VecDeque<ScriptedResponse>>,
    pub calls: RefCell<Vec<(PathBuf, u32)>>,
}

impl ScriptedBackend {
    pub fn new(responses: Vec<ScriptedResponse>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A backend that always succeeds with the standard test replay
    pub fn succeeding() -> Self {
        Self::new(vec![ScriptedResponse::Payload(create_test_replay_value())])
    }
}

impl DemoBackend for ScriptedBackend {
    fn parse_demo(&self, demo_path: &Path, parse_rate: u32) -> Result<ParsedReplay> {
        self.calls
            .borrow_mut()
            .push((demo_path.to_path_buf(), parse_rate));

        match self
            .responses
            .borrow_mut()
            .pop_front()
            .expect("scripted backend ran out of responses")
        {
            ScriptedResponse::Payload(value) => ParsedReplay::from_value(value),
            ScriptedResponse::Failure(message) => Err(Error::backend_failed(
                "scripted-backend",
                "exit status: 1",
                message,
            )),
        }
    }
}

/// Helper to create a parsed-replay payload shaped like real backend output
///
/// Two rounds with frames sampled every 64 ticks, matching a parse run at
/// rate 64 on a 128-tick server.
pub fn create_test_replay_value() -> Value {
    json!({
        "matchID": "default",
        "mapName": "de_dust2",
        "tickRate": 128,
        "parserParameters": {"parseRate": 64},
        "gameRounds": [
            {
                "roundNum": 1,
                "winningSide": "CT",
                "roundEndReason": "CTWin",
                "endOfficialTick": 17_152,
                "frames": [
                    {"tick": 16_384, "seconds": 128.0},
                    {"tick": 16_448, "seconds": 128.5},
                    {"tick": 16_512, "seconds": 129.0}
                ]
            },
            {
                "roundNum": 2,
                "winningSide": "T",
                "roundEndReason": "TerroristsWin",
                "endOfficialTick": 24_320,
                "frames": [
                    {"tick": 23_040, "seconds": 180.0},
                    {"tick": 23_104, "seconds": 180.5}
                ]
            }
        ]
    })
}

/// Helper to create a minimal but still well-formed payload
pub fn create_minimal_replay_value() -> Value {
    json!({
        "mapName": "de_nuke",
        "gameRounds": []
    })
}
