//! Core data model of the engine.
//!
//! This module contains the pieces a state graph is built from:
//! - States and their ids
//! - Fixed-capacity transition tables
//! - Matchers and output actions attached to them
//! - The trace of a run
//!
//! Nothing here reads input; driving the graph is the job of
//! [`engine`](crate::engine).

mod action;
mod matcher;
mod state;
mod table;
mod trace;

pub use action::OutputAction;
pub use matcher::Matcher;
pub use state::{State, StateId};
pub use table::{TableError, TransitionEntry, TransitionTable};
pub use trace::{RunTrace, Step};
