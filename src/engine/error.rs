//! Run-time outcomes of executing an FSM.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where the engine is in its own run state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionStatus {
    /// Never executed
    Idle,
    /// Consuming input
    Running,
    /// Input exhausted or the reader signalled the end
    HaltedComplete,
    /// The current state had no transition for the chunk read
    HaltedNoTransition,
    /// Stopped by a configuration or reader contract error
    Failed,
}

impl ExecutionStatus {
    /// Check if the engine has stopped.
    pub fn is_halted(self) -> bool {
        !matches!(self, Self::Idle | Self::Running)
    }
}

/// Errors that can end a run.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExecutionError {
    #[error("No transition from state '{state}' for input {chunk:?} at position {position}")]
    NoTransition {
        state: String,
        position: usize,
        chunk: Vec<u8>,
    },

    #[error("State '{state}' has no matcher and the FSM has no default matcher")]
    NoMatcherConfigured { state: String },

    #[error("Initial state not set. Call set_initial_state() before execute()")]
    MissingInitialState,

    #[error("Input reader not registered. Call set_reader() before execute()")]
    MissingInputReader,

    #[error("Reader returned {read} bytes but the chunk buffer holds {capacity}")]
    ChunkOverflow { read: usize, capacity: usize },
}

impl ExecutionError {
    /// Status the engine is left in after this error.
    pub fn status(&self) -> ExecutionStatus {
        match self {
            Self::NoTransition { .. } => ExecutionStatus::HaltedNoTransition,
            _ => ExecutionStatus::Failed,
        }
    }
}
