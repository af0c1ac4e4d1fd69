//! Output actions attached to transitions.

use std::fmt;
use std::sync::Arc;

type ActionFn = dyn Fn(&[u8]) + Send + Sync;

/// Side effect run once each time its transition fires.
///
/// The action receives the chunk that matched. Anything observable the
/// machine produces (printing, buffering, signalling) happens here.
#[derive(Clone)]
pub struct OutputAction {
    action: Arc<ActionFn>,
}

impl OutputAction {
    pub fn new<F>(action: F) -> Self
    where
        F: Fn(&[u8]) + Send + Sync + 'static,
    {
        Self {
            action: Arc::new(action),
        }
    }

    /// An action that does nothing.
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    pub fn invoke(&self, chunk: &[u8]) {
        (self.action)(chunk)
    }
}

impl fmt::Debug for OutputAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OutputAction(..)")
    }
}
