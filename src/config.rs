//! Capacities negotiated between the engine and its callers.

use crate::builder::BuildError;
use serde::{Deserialize, Serialize};

/// Fixed capacities of an FSM.
///
/// Every buffer and table is sized from these values when the FSM is
/// built and never grows afterwards.
///
/// # Example
///
/// ```rust
/// use generic_fsm::FsmConfig;
///
/// let config = FsmConfig::from_json(r#"{ "table_capacity": 4 }"#).unwrap();
/// assert_eq!(config.table_capacity, 4);
/// assert_eq!(config.max_input_len, 128);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FsmConfig {
    /// Largest logical input accepted by `set_input`
    pub max_input_len: usize,
    /// Size of the scratch buffer handed to the reader
    pub max_chunk_len: usize,
    /// Slots per state transition table
    pub table_capacity: usize,
    /// Longest transition key, in bytes
    pub max_key_len: usize,
    /// Longest state name, in bytes
    pub max_state_name_len: usize,
    /// Longest FSM name, in bytes
    pub max_fsm_name_len: usize,
}

impl Default for FsmConfig {
    fn default() -> Self {
        Self {
            max_input_len: 128,
            max_chunk_len: 128,
            table_capacity: 128,
            max_key_len: 64,
            max_state_name_len: 32,
            max_fsm_name_len: 32,
        }
    }
}

impl FsmConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_max_input_len(mut self, len: usize) -> Self {
        self.max_input_len = len;
        self
    }

    pub fn with_max_chunk_len(mut self, len: usize) -> Self {
        self.max_chunk_len = len;
        self
    }

    pub fn with_table_capacity(mut self, capacity: usize) -> Self {
        self.table_capacity = capacity;
        self
    }

    pub fn with_max_key_len(mut self, len: usize) -> Self {
        self.max_key_len = len;
        self
    }

    pub fn with_max_state_name_len(mut self, len: usize) -> Self {
        self.max_state_name_len = len;
        self
    }

    pub fn with_max_fsm_name_len(mut self, len: usize) -> Self {
        self.max_fsm_name_len = len;
        self
    }
}

/// Cut `name` to at most `max` bytes without splitting a character.
pub(crate) fn bounded_name(name: &str, max: usize) -> String {
    if name.len() <= max {
        return name.to_string();
    }

    let mut end = max;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    tracing::warn!(name, max, "name exceeds maximum length, truncating");
    name[..end].to_string()
}
