//! States of the machine.
//!
//! A state is a named node owning its transition table. States live in an
//! arena inside the [`Fsm`](crate::engine::Fsm) and are referred to by
//! [`StateId`], so transition entries never own their targets.

use super::matcher::Matcher;
use super::table::TransitionTable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to a state inside the FSM that created it.
///
/// Ids are only meaningful for the FSM that handed them out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// Position of the state in its FSM's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named node of the state graph.
///
/// The `is_final` flag is informational: the engine never stops because it
/// reached a final state. Callers interpret it through
/// [`RunSummary::accepted`](crate::engine::RunSummary::accepted).
pub struct State {
    name: String,
    is_final: bool,
    table: TransitionTable,
    matcher: Option<Matcher>,
}

impl State {
    pub(crate) fn new(
        name: String,
        is_final: bool,
        table: TransitionTable,
        matcher: Option<Matcher>,
    ) -> Self {
        Self {
            name,
            is_final,
            table,
            matcher,
        }
    }

    /// Get the state's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if this state is marked final.
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// The state's transition table.
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Inserts go through `Fsm::add_transition`, which checks the target.
    pub(crate) fn table_mut(&mut self) -> &mut TransitionTable {
        &mut self.table
    }

    /// State-local matcher, if one overrides the FSM default.
    pub fn matcher(&self) -> Option<&Matcher> {
        self.matcher.as_ref()
    }

    /// Resolve the matcher to use for this state: the local override
    /// first, then the FSM-wide default.
    pub fn resolve_matcher<'a>(&'a self, default: Option<&'a Matcher>) -> Option<&'a Matcher> {
        self.matcher.as_ref().or(default)
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("is_final", &self.is_final)
            .field("transitions", &self.table.len())
            .field("has_matcher", &self.matcher.is_some())
            .finish()
    }
}
