//! The FSM container and its execution loop.

use crate::builder::BuildError;
use crate::config::{bounded_name, FsmConfig};
use crate::core::{
    Matcher, OutputAction, RunTrace, State, StateId, Step, TableError, TransitionTable,
};
use crate::engine::error::{ExecutionError, ExecutionStatus};
use crate::engine::reader::InputReader;
use serde::{Deserialize, Serialize};

/// Result of a run that consumed its input without being rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// State the machine stopped in
    pub final_state: StateId,
    /// Whether that state is marked final
    pub accepted: bool,
    /// Bytes consumed from the input
    pub consumed: usize,
    /// Transitions taken
    pub steps: usize,
}

/// A finite state machine: the state graph plus everything needed to run
/// it over one input.
///
/// # Example
///
/// ```rust
/// use generic_fsm::core::{Matcher, OutputAction};
/// use generic_fsm::engine::{Fsm, InputReader};
///
/// let mut fsm = Fsm::new("parity");
/// let even = fsm.add_state("even", true, None);
/// let odd = fsm.add_state("odd", false, None);
/// fsm.set_initial_state(even).unwrap();
///
/// fsm.add_transition(even, b"1", OutputAction::noop(), odd).unwrap();
/// fsm.add_transition(even, b"0", OutputAction::noop(), even).unwrap();
/// fsm.add_transition(odd, b"1", OutputAction::noop(), even).unwrap();
/// fsm.add_transition(odd, b"0", OutputAction::noop(), odd).unwrap();
///
/// fsm.set_reader(InputReader::bytes());
/// fsm.set_default_matcher(Matcher::exact());
/// fsm.set_input(b"1101").unwrap();
///
/// let summary = fsm.execute().unwrap();
/// assert_eq!(summary.final_state, odd);
/// assert!(!summary.accepted);
/// ```
pub struct Fsm {
    name: String,
    config: FsmConfig,
    states: Vec<State>,
    initial: Option<StateId>,
    current: Option<StateId>,
    input: Vec<u8>,
    cursor: usize,
    chunk: Vec<u8>,
    chunk_len: usize,
    reader: Option<InputReader>,
    default_matcher: Option<Matcher>,
    status: ExecutionStatus,
    trace: RunTrace,
}

impl Fsm {
    /// Create an FSM with the default capacities.
    pub fn new(name: &str) -> Self {
        Self::with_config(name, FsmConfig::default())
    }

    pub fn with_config(name: &str, config: FsmConfig) -> Self {
        Self {
            name: bounded_name(name, config.max_fsm_name_len),
            chunk: vec![0; config.max_chunk_len],
            config,
            states: Vec::new(),
            initial: None,
            current: None,
            input: Vec::new(),
            cursor: 0,
            chunk_len: 0,
            reader: None,
            default_matcher: None,
            status: ExecutionStatus::Idle,
            trace: RunTrace::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &FsmConfig {
        &self.config
    }

    /// Create a state owned by this FSM.
    ///
    /// `matcher` overrides the FSM default for this state's transitions.
    /// Names are not checked for uniqueness.
    pub fn add_state(&mut self, name: &str, is_final: bool, matcher: Option<Matcher>) -> StateId {
        let id = StateId(self.states.len());
        let table = TransitionTable::new(self.config.table_capacity, self.config.max_key_len);
        self.states.push(State::new(
            bounded_name(name, self.config.max_state_name_len),
            is_final,
            table,
            matcher,
        ));
        id
    }

    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id.0)
    }

    fn state_mut(&mut self, id: StateId) -> Result<&mut State, BuildError> {
        self.states.get_mut(id.0).ok_or(BuildError::UnknownState(id))
    }

    /// Id of the first state created with `name`.
    pub fn state_by_name(&self, name: &str) -> Option<StateId> {
        self.states
            .iter()
            .position(|s| s.name() == name)
            .map(StateId)
    }

    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states.iter().enumerate().map(|(i, s)| (StateId(i), s))
    }

    /// Insert `key -> (action, to)` into the table of `from`.
    ///
    /// This is the only way to fill a table, so every stored target is a
    /// state of this FSM. Returns the slot index used.
    pub fn add_transition(
        &mut self,
        from: StateId,
        key: &[u8],
        action: OutputAction,
        to: StateId,
    ) -> Result<usize, BuildError> {
        if self.state(to).is_none() {
            return Err(BuildError::UnknownState(to));
        }
        let state = self.state_mut(from)?;
        state
            .table_mut()
            .insert(key, action, to)
            .map_err(|e| match e {
                TableError::TableFull { capacity } => {
                    tracing::warn!(state = state.name(), capacity, "transition table is full");
                    BuildError::TableFull {
                        state: state.name().to_string(),
                        capacity,
                    }
                }
                TableError::KeyTooLong { len, max } => BuildError::KeyTooLong { len, max },
            })
    }

    /// Set the state execution starts from. It can only be set once.
    pub fn set_initial_state(&mut self, id: StateId) -> Result<(), BuildError> {
        let attempted = self.state(id).ok_or(BuildError::UnknownState(id))?;
        if let Some(existing) = self.initial {
            return Err(BuildError::DuplicateInitialState {
                existing: self.states[existing.0].name().to_string(),
                attempted: attempted.name().to_string(),
            });
        }
        self.initial = Some(id);
        Ok(())
    }

    pub fn initial_state(&self) -> Option<StateId> {
        self.initial
    }

    /// State the engine is in, or stopped in after the last run.
    pub fn current_state(&self) -> Option<StateId> {
        self.current
    }

    /// Load the input to run over. Its length is the logical input size.
    pub fn set_input(&mut self, input: &[u8]) -> Result<(), BuildError> {
        if input.len() > self.config.max_input_len {
            return Err(BuildError::BufferOverflow {
                len: input.len(),
                max: self.config.max_input_len,
            });
        }
        self.input.clear();
        self.input.extend_from_slice(input);
        self.cursor = 0;
        Ok(())
    }

    pub fn input(&self) -> &[u8] {
        &self.input
    }

    /// Offset of the first unread input byte.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The chunk most recently produced by the reader.
    pub fn last_chunk(&self) -> &[u8] {
        &self.chunk[..self.chunk_len]
    }

    pub fn set_reader(&mut self, reader: InputReader) {
        self.reader = Some(reader);
    }

    pub fn reader(&self) -> Option<&InputReader> {
        self.reader.as_ref()
    }

    /// Matcher used by states that do not carry their own.
    pub fn set_default_matcher(&mut self, matcher: Matcher) {
        self.default_matcher = Some(matcher);
    }

    pub fn default_matcher(&self) -> Option<&Matcher> {
        self.default_matcher.as_ref()
    }

    pub fn status(&self) -> ExecutionStatus {
        self.status
    }

    /// Transitions taken by the last run.
    pub fn trace(&self) -> &RunTrace {
        &self.trace
    }

    /// Run the machine from the initial state over the whole input.
    ///
    /// Every call starts over: the cursor goes back to 0 and the trace is
    /// cleared. The run ends when the cursor reaches the input size or the
    /// reader returns 0, giving [`ExecutionStatus::HaltedComplete`].
    ///
    /// # Errors
    ///
    /// - [`ExecutionError::NoTransition`] when no entry of the current
    ///   state matches the chunk. Nothing is emitted for that chunk and the
    ///   reader is not called again.
    /// - [`ExecutionError::NoMatcherConfigured`] when a match is attempted
    ///   in a state with no matcher and there is no default.
    /// - [`ExecutionError::MissingInitialState`],
    ///   [`ExecutionError::MissingInputReader`] and
    ///   [`ExecutionError::ChunkOverflow`] for setup and reader contract
    ///   violations.
    pub fn execute(&mut self) -> Result<RunSummary, ExecutionError> {
        let result = self.run();
        self.status = match &result {
            Ok(_) => ExecutionStatus::HaltedComplete,
            Err(e) => e.status(),
        };
        match &result {
            Ok(summary) => tracing::info!(
                fsm = %self.name,
                steps = summary.steps,
                consumed = summary.consumed,
                accepted = summary.accepted,
                "run complete"
            ),
            Err(e) => tracing::warn!(fsm = %self.name, error = %e, "run halted"),
        }
        result
    }

    fn run(&mut self) -> Result<RunSummary, ExecutionError> {
        let initial = self.initial.ok_or(ExecutionError::MissingInitialState)?;
        let reader = self
            .reader
            .clone()
            .ok_or(ExecutionError::MissingInputReader)?;

        self.status = ExecutionStatus::Running;
        self.cursor = 0;
        self.chunk_len = 0;
        self.current = Some(initial);
        self.trace.clear();

        let mut current = initial;
        while self.cursor < self.input.len() {
            self.chunk.fill(0);
            self.chunk_len = 0;

            let read = reader.read(&self.input, self.cursor, &mut self.chunk);
            if read == 0 {
                tracing::debug!(cursor = self.cursor, "reader signalled end of input");
                break;
            }
            if read > self.chunk.len() {
                return Err(ExecutionError::ChunkOverflow {
                    read,
                    capacity: self.chunk.len(),
                });
            }

            self.chunk_len = read;
            let position = self.cursor;
            self.cursor += read;

            let chunk = &self.chunk[..read];
            let next = self.apply_transition(current, position, chunk)?;
            tracing::debug!(
                from = self.states[current.0].name(),
                to = self.states[next.0].name(),
                position,
                "transition"
            );
            self.trace.record(Step {
                from: current,
                to: next,
                position,
                chunk: chunk.to_vec(),
            });
            current = next;
            self.current = Some(next);
        }

        Ok(RunSummary {
            final_state: current,
            accepted: self.states[current.0].is_final(),
            consumed: self.cursor,
            steps: self.trace.len(),
        })
    }

    /// Fire the first entry of `id` whose key matches `chunk` and return
    /// its target.
    fn apply_transition(
        &self,
        id: StateId,
        position: usize,
        chunk: &[u8],
    ) -> Result<StateId, ExecutionError> {
        let state = &self.states[id.0];
        let no_transition = || ExecutionError::NoTransition {
            state: state.name().to_string(),
            position,
            chunk: chunk.to_vec(),
        };

        if state.table().is_empty() {
            return Err(no_transition());
        }

        let matcher = state
            .resolve_matcher(self.default_matcher.as_ref())
            .ok_or_else(|| ExecutionError::NoMatcherConfigured {
                state: state.name().to_string(),
            })?;

        let entry = state
            .table()
            .find(|entry| matcher.check(entry.key(), chunk))
            .ok_or_else(no_transition)?;

        entry.action().invoke(chunk);
        Ok(entry.target())
    }
}

impl std::fmt::Debug for Fsm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fsm")
            .field("name", &self.name)
            .field("states", &self.states)
            .field("initial", &self.initial)
            .field("cursor", &self.cursor)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}
