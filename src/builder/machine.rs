//! Builder for constructing FSMs.

use crate::builder::error::BuildError;
use crate::config::FsmConfig;
use crate::core::Matcher;
use crate::engine::{Fsm, InputReader};

/// Builder for the run context of an FSM with a fluent API.
///
/// States and transitions are added to the built [`Fsm`], since their ids
/// come from it.
///
/// # Example
///
/// ```rust
/// use generic_fsm::builder::FsmBuilder;
/// use generic_fsm::core::Matcher;
/// use generic_fsm::engine::InputReader;
///
/// let fsm = FsmBuilder::new("Bit Flipper")
///     .reader(InputReader::bytes())
///     .default_matcher(Matcher::exact())
///     .input(b"0101")
///     .build()
///     .unwrap();
///
/// assert_eq!(fsm.input(), b"0101");
/// ```
pub struct FsmBuilder {
    name: String,
    config: FsmConfig,
    reader: Option<InputReader>,
    default_matcher: Option<Matcher>,
    input: Option<Vec<u8>>,
}

impl FsmBuilder {
    /// Create a new builder.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            config: FsmConfig::default(),
            reader: None,
            default_matcher: None,
            input: None,
        }
    }

    /// Replace the default capacities.
    pub fn config(mut self, config: FsmConfig) -> Self {
        self.config = config;
        self
    }

    /// Register the input reader.
    pub fn reader(mut self, reader: InputReader) -> Self {
        self.reader = Some(reader);
        self
    }

    /// Register the matcher used by states without their own.
    pub fn default_matcher(mut self, matcher: Matcher) -> Self {
        self.default_matcher = Some(matcher);
        self
    }

    /// Set the input to run over.
    pub fn input(mut self, input: &[u8]) -> Self {
        self.input = Some(input.to_vec());
        self
    }

    /// Build the FSM.
    /// Returns an error if the input does not fit the configured buffer.
    pub fn build(self) -> Result<Fsm, BuildError> {
        let mut fsm = Fsm::with_config(&self.name, self.config);
        if let Some(reader) = self.reader {
            fsm.set_reader(reader);
        }
        if let Some(matcher) = self.default_matcher {
            fsm.set_default_matcher(matcher);
        }
        if let Some(input) = self.input {
            fsm.set_input(&input)?;
        }
        Ok(fsm)
    }
}
