//! Execution of a built FSM.
//!
//! This module is the imperative shell around [`core`](crate::core):
//! - **Fsm**: owns the state graph, the input and the run context
//! - **InputReader**: caller strategy that carves input into chunks
//! - **execute**: reads a chunk, fires the first matching transition of
//!   the current state and moves on, until the input runs out or the
//!   machine rejects it
//!
//! A run is single-threaded and synchronous. Each `Fsm` is self-contained;
//! nothing is shared between instances.

mod error;
mod machine;
mod reader;

pub use error::{ExecutionError, ExecutionStatus};
pub use machine::{Fsm, RunSummary};
pub use reader::InputReader;
