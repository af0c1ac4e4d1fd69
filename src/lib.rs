//! generic-fsm: a table-driven finite state machine engine
//!
//! A machine is a set of named states, each owning a fixed-capacity
//! transition table of `(key, output action, next state)` entries. The
//! engine pulls chunks of input through a caller-supplied reader, finds
//! the first entry of the current state whose key matches the chunk, runs
//! its output action and moves to its target. What a chunk is and what
//! "matches" means are both injected, so the same engine runs over any
//! alphabet.
//!
//! # Core Concepts
//!
//! - **State**: a named node with a transition table and optional matcher
//! - **Transition table**: ordered slots, first empty slot filled on insert,
//!   first match wins on lookup
//! - **Reader / Matcher / OutputAction**: the caller's strategies
//! - **Execution**: ends in `HaltedComplete` or is rejected with
//!   `ExecutionError::NoTransition`
//!
//! # Example
//!
//! ```rust
//! use generic_fsm::core::{Matcher, OutputAction};
//! use generic_fsm::engine::{ExecutionStatus, Fsm, InputReader};
//! use std::sync::{Arc, Mutex};
//!
//! let out = Arc::new(Mutex::new(String::new()));
//! let flip = {
//!     let out = Arc::clone(&out);
//!     OutputAction::new(move |chunk| {
//!         out.lock().unwrap().push(if chunk[0] == b'1' { '0' } else { '1' })
//!     })
//! };
//!
//! let mut fsm = Fsm::new("Bit Flipper");
//! let s0 = fsm.add_state("S0", true, Some(Matcher::exact()));
//! fsm.set_initial_state(s0).unwrap();
//! fsm.add_transition(s0, b"0", flip.clone(), s0).unwrap();
//! fsm.add_transition(s0, b"1", flip, s0).unwrap();
//! fsm.set_reader(InputReader::bytes());
//! fsm.set_input(b"0110").unwrap();
//!
//! fsm.execute().unwrap();
//! assert_eq!(fsm.status(), ExecutionStatus::HaltedComplete);
//! assert_eq!(*out.lock().unwrap(), "1001");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, FsmBuilder};
pub use config::FsmConfig;
pub use self::core::{
    Matcher, OutputAction, RunTrace, State, StateId, TableError, TransitionTable,
};
pub use engine::{ExecutionError, ExecutionStatus, Fsm, InputReader, RunSummary};
pub use validation::ConfigViolation;
