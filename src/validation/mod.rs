//! Pre-flight validation of an FSM.
//!
//! `execute` reports the first problem it runs into. [`Fsm::validate`]
//! instead checks the whole configuration up front and accumulates every
//! violation with stillwater's `Validation`, so all of them can be fixed
//! in one pass.
//!
//! # Example
//!
//! ```rust
//! use generic_fsm::engine::Fsm;
//! use generic_fsm::validation::ConfigViolation;
//! use stillwater::validation::Validation;
//!
//! let fsm = Fsm::new("empty");
//!
//! match fsm.validate() {
//!     Validation::Failure(errors) => {
//!         assert!(errors.iter().any(|e| matches!(e, ConfigViolation::MissingInitialState)));
//!         assert!(errors.iter().any(|e| matches!(e, ConfigViolation::MissingInputReader)));
//!     }
//!     Validation::Success(_) => panic!("expected violations"),
//! }
//! ```

pub mod violations;

pub use violations::ConfigViolation;

use crate::engine::Fsm;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of [`Fsm::validate`].
pub type ConfigValidation = Validation<(), NonEmptyVec<ConfigViolation>>;

fn check(ok: bool, violation: ConfigViolation) -> ConfigValidation {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

impl Fsm {
    /// Check the whole configuration, accumulating ALL violations.
    ///
    /// States with an empty table need no matcher, since no match is ever
    /// attempted in them.
    pub fn validate(&self) -> ConfigValidation {
        let mut checks: Vec<ConfigValidation> = vec![
            check(
                self.initial_state().is_some(),
                ConfigViolation::MissingInitialState,
            ),
            check(self.reader().is_some(), ConfigViolation::MissingInputReader),
            check(
                self.config().max_chunk_len > 0,
                ConfigViolation::ZeroChunkCapacity,
            ),
            check(
                self.config().table_capacity > 0,
                ConfigViolation::ZeroTableCapacity,
            ),
        ];

        for (_, state) in self.states() {
            let resolvable = state.table().is_empty()
                || state.resolve_matcher(self.default_matcher()).is_some();
            checks.push(check(
                resolvable,
                ConfigViolation::NoMatcher {
                    state: state.name().to_string(),
                },
            ));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FsmConfig;
    use crate::core::{Matcher, OutputAction};
    use crate::engine::InputReader;

    #[test]
    fn complete_machine_is_valid() {
        let mut fsm = Fsm::new("ok");
        let s = fsm.add_state("S", true, None);
        fsm.set_initial_state(s).unwrap();
        fsm.add_transition(s, b"a", OutputAction::noop(), s).unwrap();
        fsm.set_reader(InputReader::bytes());
        fsm.set_default_matcher(Matcher::exact());

        assert!(fsm.validate().is_success());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = FsmConfig::default().with_max_chunk_len(0);
        let mut fsm = Fsm::with_config("broken", config);
        let a = fsm.add_state("A", false, None);
        let b = fsm.add_state("B", false, None);
        fsm.add_transition(a, b"x", OutputAction::noop(), b).unwrap();
        fsm.add_transition(b, b"y", OutputAction::noop(), a).unwrap();

        match fsm.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 5);

                let has_initial = errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::MissingInitialState));
                let has_reader = errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::MissingInputReader));
                let has_chunk = errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::ZeroChunkCapacity));
                let no_matcher = errors
                    .iter()
                    .filter(|e| matches!(e, ConfigViolation::NoMatcher { .. }))
                    .count();

                assert!(has_initial);
                assert!(has_reader);
                assert!(has_chunk);
                assert_eq!(no_matcher, 2);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn state_local_matcher_satisfies_validation() {
        let mut fsm = Fsm::new("local");
        let s = fsm.add_state("S", false, Some(Matcher::exact()));
        fsm.set_initial_state(s).unwrap();
        fsm.add_transition(s, b"a", OutputAction::noop(), s).unwrap();
        fsm.set_reader(InputReader::bytes());

        assert!(fsm.validate().is_success());
    }

    #[test]
    fn empty_tables_need_no_matcher() {
        let mut fsm = Fsm::new("sink");
        let s = fsm.add_state("S", false, None);
        fsm.set_initial_state(s).unwrap();
        fsm.set_reader(InputReader::bytes());

        assert!(fsm.validate().is_success());
    }

    #[test]
    fn zero_table_capacity_is_flagged() {
        let mut fsm = Fsm::with_config("zero", FsmConfig::default().with_table_capacity(0));
        let s = fsm.add_state("S", false, None);
        fsm.set_initial_state(s).unwrap();
        fsm.set_reader(InputReader::bytes());

        let result = fsm.validate();
        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert!(errors
                .iter()
                .any(|e| matches!(e, ConfigViolation::ZeroTableCapacity)));
        }
    }
}
