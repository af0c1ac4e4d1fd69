//! Input reading strategies.
//!
//! The reader decides what one input unit is. The engine only knows how
//! many bytes the reader produced, so the same machine can consume single
//! bytes, fixed-width records or anything else a closure can carve out.

use std::fmt;
use std::sync::Arc;

type ReadFn = dyn Fn(&[u8], usize, &mut [u8]) -> usize + Send + Sync;

/// Pulls the next chunk out of the FSM's input.
///
/// The wrapped function is called as `read(input, cursor, out)` where
/// `input` is the logical input (its length is the input size), `cursor`
/// is the offset of the first unread byte and `out` is the zeroed scratch
/// buffer whose length is the chunk capacity. It must return 0 once
/// `cursor >= input.len()`, and otherwise write between 1 and `out.len()`
/// bytes to the front of `out` and return that count.
///
/// # Example
///
/// ```rust
/// use generic_fsm::engine::InputReader;
///
/// let reader = InputReader::bytes();
/// let mut out = [0u8; 4];
/// assert_eq!(reader.read(b"01", 1, &mut out), 1);
/// assert_eq!(out[0], b'1');
/// assert_eq!(reader.read(b"01", 2, &mut out), 0);
/// ```
#[derive(Clone)]
pub struct InputReader {
    read: Arc<ReadFn>,
}

impl InputReader {
    pub fn new<F>(read: F) -> Self
    where
        F: Fn(&[u8], usize, &mut [u8]) -> usize + Send + Sync + 'static,
    {
        Self { read: Arc::new(read) }
    }

    /// One byte per call.
    pub fn bytes() -> Self {
        Self::fixed(1)
    }

    /// Up to `width` bytes per call. The last chunk may be shorter, and a
    /// chunk never exceeds the scratch buffer. A width of 0 reads one byte,
    /// since an empty read would end the run.
    pub fn fixed(width: usize) -> Self {
        let width = width.max(1);
        Self::new(move |input, cursor, out| {
            if cursor >= input.len() {
                return 0;
            }
            let n = width.min(out.len()).min(input.len() - cursor);
            out[..n].copy_from_slice(&input[cursor..cursor + n]);
            n
        })
    }

    /// Run the reader.
    pub fn read(&self, input: &[u8], cursor: usize, out: &mut [u8]) -> usize {
        (self.read)(input, cursor, out)
    }
}

impl fmt::Debug for InputReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InputReader(..)")
    }
}
