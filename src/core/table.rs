//! Fixed-capacity transition tables.
//!
//! Each slot is either empty or holds one entry. Insertion fills the first
//! empty slot found by a linear scan and iteration stops at the first empty
//! slot, so a table built only through [`TransitionTable::insert`] is always
//! dense. Keys are not deduplicated: when two entries could match the same
//! chunk, the one inserted first wins.

use super::action::OutputAction;
use super::state::StateId;
use thiserror::Error;

/// Reasons an insertion into a single table can fail.
///
/// [`Fsm::add_transition`](crate::engine::Fsm::add_transition) reports
/// these as [`BuildError`](crate::builder::BuildError)s naming the state.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableError {
    #[error("Transition table is full ({capacity} entries)")]
    TableFull { capacity: usize },

    #[error("Transition key is {len} bytes, maximum is {max}")]
    KeyTooLong { len: usize, max: usize },
}

/// One `(key, action, target)` rule.
#[derive(Clone, Debug)]
pub struct TransitionEntry {
    key: Vec<u8>,
    action: OutputAction,
    target: StateId,
}

impl TransitionEntry {
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn action(&self) -> &OutputAction {
        &self.action
    }

    pub fn target(&self) -> StateId {
        self.target
    }
}

/// Ordered, fixed-capacity collection of transition entries.
#[derive(Clone, Debug)]
pub struct TransitionTable {
    slots: Vec<Option<TransitionEntry>>,
    max_key_len: usize,
}

impl TransitionTable {
    /// Create a table with `capacity` slots accepting keys of at most
    /// `max_key_len` bytes.
    pub fn new(capacity: usize, max_key_len: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, max_key_len }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    /// Index of the first empty slot, if any.
    pub fn find_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Store a transition in the first empty slot and return its index.
    ///
    /// # Errors
    ///
    /// - [`TableError::KeyTooLong`] if the key exceeds the table's key bound.
    /// - [`TableError::TableFull`] if every slot is occupied.
    pub fn insert(
        &mut self,
        key: &[u8],
        action: OutputAction,
        target: StateId,
    ) -> Result<usize, TableError> {
        if key.len() > self.max_key_len {
            return Err(TableError::KeyTooLong {
                len: key.len(),
                max: self.max_key_len,
            });
        }

        let index = self.find_empty_slot().ok_or(TableError::TableFull {
            capacity: self.capacity(),
        })?;

        self.slots[index] = Some(TransitionEntry {
            key: key.to_vec(),
            action,
            target,
        });
        Ok(index)
    }

    /// Entries in slot order, stopping at the first empty slot.
    pub fn iter(&self) -> impl Iterator<Item = &TransitionEntry> {
        self.slots.iter().map_while(Option::as_ref)
    }

    /// Number of reachable entries.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn is_full(&self) -> bool {
        self.find_empty_slot().is_none()
    }

    /// First entry, in insertion order, whose key satisfies `matches`.
    pub fn find<F>(&self, mut matches: F) -> Option<&TransitionEntry>
    where
        F: FnMut(&TransitionEntry) -> bool,
    {
        self.iter().find(|entry| matches(*entry))
    }
}
