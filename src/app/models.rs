//! Data models for demo processing
//!
//! This module contains the parsed-replay container returned by the external
//! demo-parser backend. The structure of the payload is defined entirely by
//! the backend; this layer stores and returns it unchanged.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants::keys;
use crate::{Error, Result};

/// Parsed replay data, an opaque mapping from string keys to nested values
///
/// The mapping is whatever the backend emitted: round lists, per-round frame
/// lists, per-frame tick counters and anything else the backend chooses to
/// include. No transformation, filtering, or schema enforcement happens here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParsedReplay(Map<String, Value>);

impl ParsedReplay {
    /// Wrap a backend output value
    ///
    /// The backend contract is a JSON object at the top level; any other
    /// value kind is reported as invalid backend output.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(Error::invalid_output(
                format!("expected a JSON object at the top level, got {}", json_kind(&other)),
                None,
            )),
        }
    }

    /// Top-level keys of the parsed mapping
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Look up a top-level entry by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of top-level entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The game-round list, if the backend emitted one
    pub fn game_rounds(&self) -> Option<&Vec<Value>> {
        self.0.get(keys::GAME_ROUNDS).and_then(Value::as_array)
    }

    /// Consume the wrapper and return the raw mapping as a JSON value
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Human-readable name of a JSON value kind, for error messages
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_accepts_object() {
        let replay = ParsedReplay::from_value(json!({"mapName": "de_dust2"})).unwrap();
        assert_eq!(replay.len(), 1);
        assert_eq!(replay.get("mapName"), Some(&json!("de_dust2")));
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        for value in [json!(null), json!(42), json!("demo"), json!([1, 2, 3])] {
            let err = ParsedReplay::from_value(value).unwrap_err();
            assert!(matches!(err, Error::InvalidOutput { .. }));
        }
    }

    #[test]
    fn test_game_rounds_accessor() {
        let replay = ParsedReplay::from_value(json!({
            "gameRounds": [{"roundNum": 1}, {"roundNum": 2}]
        }))
        .unwrap();
        assert_eq!(replay.game_rounds().map(Vec::len), Some(2));
    }

    #[test]
    fn test_game_rounds_absent_or_wrong_kind() {
        let no_rounds = ParsedReplay::from_value(json!({"mapName": "de_nuke"})).unwrap();
        assert!(no_rounds.game_rounds().is_none());

        let wrong_kind = ParsedReplay::from_value(json!({"gameRounds": "oops"})).unwrap();
        assert!(wrong_kind.game_rounds().is_none());
    }

    #[test]
    fn test_into_value_round_trips_unchanged() {
        let original = json!({"gameRounds": [], "tickRate": 128});
        let replay = ParsedReplay::from_value(original.clone()).unwrap();
        assert_eq!(replay.into_value(), original);
    }
}
