//! Configuration problems found by [`Fsm::validate`](crate::engine::Fsm::validate).

use thiserror::Error;

/// A defect that would make a run fail or behave degenerately.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("No initial state set")]
    MissingInitialState,

    #[error("No input reader registered")]
    MissingInputReader,

    #[error("State '{state}' has transitions but no matcher, and there is no default matcher")]
    NoMatcher { state: String },

    #[error("Chunk buffer capacity is zero; every read will end the run")]
    ZeroChunkCapacity,

    #[error("Transition table capacity is zero; no transition can be added")]
    ZeroTableCapacity,
}
