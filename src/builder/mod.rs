//! Builder API for FSM construction.
//!
//! [`FsmBuilder`] assembles the run context; [`BuildError`] covers every
//! failure of the construction phase, table insertion included.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::FsmBuilder;
