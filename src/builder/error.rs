//! Errors raised while constructing an FSM.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur when building an FSM and its transition tables.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Transition table of state '{state}' is full ({capacity} entries)")]
    TableFull { state: String, capacity: usize },

    #[error("Transition key is {len} bytes, maximum is {max}")]
    KeyTooLong { len: usize, max: usize },

    #[error("Initial state already set to '{existing}', refusing to replace it with '{attempted}'")]
    DuplicateInitialState { existing: String, attempted: String },

    #[error("State {0} does not belong to this FSM")]
    UnknownState(StateId),

    #[error("Input is {len} bytes, maximum is {max}")]
    BufferOverflow { len: usize, max: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
