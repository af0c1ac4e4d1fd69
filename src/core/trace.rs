//! Record of the transitions taken during a run.
//!
//! The engine appends one [`Step`] per successful transition and clears
//! the trace at the start of every run, so after a run it describes
//! exactly that run.

use super::state::StateId;
use serde::{Deserialize, Serialize};

/// A single transition taken by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// The state being transitioned from
    pub from: StateId,
    /// The state being transitioned to
    pub to: StateId,
    /// Input offset at which the chunk started
    pub position: usize,
    /// The chunk that matched
    pub chunk: Vec<u8>,
}

/// Ordered steps of one run.
///
/// # Example
///
/// ```rust
/// use generic_fsm::core::RunTrace;
///
/// let trace = RunTrace::new();
/// assert!(trace.is_empty());
/// assert!(trace.get_path().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTrace {
    steps: Vec<Step>,
}

impl RunTrace {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step.
    pub fn record(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub(crate) fn clear(&mut self) {
        self.steps.clear();
    }

    /// Get all steps in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get the path of states traversed.
    ///
    /// Returns the starting state, then the `to` state of each step.
    /// Empty when no transition was taken.
    pub fn get_path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.first() {
            path.push(first.from);
        }
        path.extend(self.steps.iter().map(|step| step.to));
        path
    }

    /// Concatenation of every matched chunk.
    pub fn consumed(&self) -> Vec<u8> {
        self.steps
            .iter()
            .flat_map(|step| step.chunk.iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(from: usize, to: usize, position: usize, chunk: &[u8]) -> Step {
        Step {
            from: StateId(from),
            to: StateId(to),
            position,
            chunk: chunk.to_vec(),
        }
    }

    #[test]
    fn path_follows_recorded_steps() {
        let mut trace = RunTrace::new();
        trace.record(step(0, 1, 0, b"a"));
        trace.record(step(1, 2, 1, b"b"));

        assert_eq!(trace.get_path(), vec![StateId(0), StateId(1), StateId(2)]);
        assert_eq!(trace.len(), 2);
    }

    #[test]
    fn consumed_concatenates_chunks() {
        let mut trace = RunTrace::new();
        trace.record(step(0, 0, 0, b"ab"));
        trace.record(step(0, 0, 2, b"c"));

        assert_eq!(trace.consumed(), b"abc".to_vec());
    }

    #[test]
    fn clear_empties_trace() {
        let mut trace = RunTrace::new();
        trace.record(step(0, 0, 0, b"a"));
        trace.clear();

        assert!(trace.is_empty());
        assert!(trace.get_path().is_empty());
    }

    #[test]
    fn trace_serializes_correctly() {
        let mut trace = RunTrace::new();
        trace.record(step(0, 1, 0, b"1"));

        let json = serde_json::to_string(&trace).unwrap();
        let deserialized: RunTrace = serde_json::from_str(&json).unwrap();
        assert_eq!(trace, deserialized);
    }
}
