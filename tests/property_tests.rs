//! Property-based tests for the engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use generic_fsm::{
    BuildError, ExecutionError, ExecutionStatus, Fsm, FsmConfig, InputReader, Matcher,
    OutputAction, StateId, TableError, TransitionTable,
};
use proptest::prelude::*;
use std::sync::{Arc, Mutex};

type Log = Arc<Mutex<Vec<(u8, Vec<u8>)>>>;

/// Two-state machine over {a, b, c}: 'c' is only accepted in the second state.
fn machine(input: &[u8], log: &Log) -> Fsm {
    let emit = |tag: u8| {
        let log = Arc::clone(log);
        OutputAction::new(move |chunk| log.lock().unwrap().push((tag, chunk.to_vec())))
    };

    let mut fsm = Fsm::new("abc");
    let p = fsm.add_state("P", false, None);
    let q = fsm.add_state("Q", true, None);
    fsm.set_initial_state(p).unwrap();
    fsm.add_transition(p, b"a", emit(1), q).unwrap();
    fsm.add_transition(p, b"b", emit(2), p).unwrap();
    fsm.add_transition(q, b"a", emit(3), p).unwrap();
    fsm.add_transition(q, b"b", emit(4), q).unwrap();
    fsm.add_transition(q, b"c", emit(5), q).unwrap();
    fsm.set_reader(InputReader::bytes());
    fsm.set_default_matcher(Matcher::exact());
    fsm.set_input(input).unwrap();
    fsm
}

fn bits() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop_oneof![Just(b'0'), Just(b'1')], 0..128)
}

fn short_bits() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop_oneof![Just(b'0'), Just(b'1')], 0..60)
}

proptest! {
    #[test]
    fn table_accepts_exactly_capacity_entries(capacity in 0usize..64) {
        let mut table = TransitionTable::new(capacity, 4);
        let target = Fsm::new("t").add_state("T", false, None);

        for i in 0..capacity {
            prop_assert_eq!(table.insert(&[i as u8], OutputAction::noop(), target).unwrap(), i);
        }
        let overflow = table.insert(b"x", OutputAction::noop(), target);
        prop_assert_eq!(overflow, Err(TableError::TableFull { capacity }));
        prop_assert_eq!(table.len(), capacity);
    }

    #[test]
    fn full_state_table_names_the_state(capacity in 0usize..64) {
        let mut fsm = Fsm::with_config("cap", FsmConfig::default().with_table_capacity(capacity));
        let s = fsm.add_state("Busy", false, None);

        for i in 0..capacity {
            prop_assert!(fsm.add_transition(s, &[i as u8], OutputAction::noop(), s).is_ok());
        }
        let overflow = fsm.add_transition(s, b"x", OutputAction::noop(), s);
        prop_assert!(
            matches!(
                overflow,
                Err(BuildError::TableFull { ref state, capacity: c }) if state == "Busy" && c == capacity
            ),
            "expected TableFull for Busy"
        );
    }

    #[test]
    fn runs_are_deterministic(input in prop::collection::vec(prop_oneof![Just(b'a'), Just(b'b'), Just(b'c')], 0..64)) {
        let first_log: Log = Arc::default();
        let second_log: Log = Arc::default();
        let mut first = machine(&input, &first_log);
        let mut second = machine(&input, &second_log);

        let r1 = first.execute();
        let r2 = second.execute();

        prop_assert_eq!(r1, r2);
        prop_assert_eq!(first.status(), second.status());
        prop_assert_eq!(first.trace(), second.trace());
        let first_calls = first_log.lock().unwrap().clone();
        let second_calls = second_log.lock().unwrap().clone();
        prop_assert_eq!(first_calls, second_calls);
    }

    #[test]
    fn bit_flip_is_complement(input in bits()) {
        let out = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&out);
        let flip = OutputAction::new(move |chunk| {
            sink.lock().unwrap().push(if chunk[0] == b'1' { b'0' } else { b'1' })
        });

        let mut fsm = Fsm::new("flip");
        let s0 = fsm.add_state("S0", true, None);
        fsm.set_initial_state(s0).unwrap();
        fsm.add_transition(s0, b"0", flip.clone(), s0).unwrap();
        fsm.add_transition(s0, b"1", flip, s0).unwrap();
        fsm.set_reader(InputReader::bytes());
        fsm.set_default_matcher(Matcher::exact());
        fsm.set_input(&input).unwrap();

        let summary = fsm.execute().unwrap();
        let expected: Vec<u8> = input.iter().map(|&b| if b == b'1' { b'0' } else { b'1' }).collect();

        let flipped = out.lock().unwrap().clone();
        prop_assert_eq!(flipped, expected);
        prop_assert_eq!(summary.steps, input.len());
        prop_assert_eq!(fsm.status(), ExecutionStatus::HaltedComplete);
    }

    #[test]
    fn rejection_stops_at_unknown_symbol(prefix in short_bits(), suffix in short_bits()) {
        let mut input = prefix.clone();
        input.push(b'2');
        input.extend_from_slice(&suffix);

        let emitted = Arc::new(Mutex::new(0usize));
        let count = Arc::clone(&emitted);
        let action = OutputAction::new(move |_| *count.lock().unwrap() += 1);

        let mut fsm = Fsm::new("flip");
        let s0 = fsm.add_state("S0", true, Some(Matcher::exact()));
        fsm.set_initial_state(s0).unwrap();
        fsm.add_transition(s0, b"0", action.clone(), s0).unwrap();
        fsm.add_transition(s0, b"1", action, s0).unwrap();
        fsm.set_reader(InputReader::bytes());
        fsm.set_input(&input).unwrap();

        let err = fsm.execute().unwrap_err();

        prop_assert_eq!(
            err,
            ExecutionError::NoTransition {
                state: "S0".to_string(),
                position: prefix.len(),
                chunk: b"2".to_vec(),
            }
        );
        prop_assert_eq!(*emitted.lock().unwrap(), prefix.len());
        prop_assert_eq!(fsm.cursor(), prefix.len() + 1);
    }

    #[test]
    fn early_end_of_input_completes(input in bits(), stop in 0usize..128) {
        let mut fsm = Fsm::new("early");
        let s0 = fsm.add_state("S0", false, None);
        fsm.set_initial_state(s0).unwrap();
        fsm.add_transition(s0, b"0", OutputAction::noop(), s0).unwrap();
        fsm.add_transition(s0, b"1", OutputAction::noop(), s0).unwrap();
        fsm.set_default_matcher(Matcher::exact());
        let bytes = InputReader::bytes();
        fsm.set_reader(InputReader::new(move |input, cursor, out| {
            if cursor >= stop { 0 } else { bytes.read(input, cursor, out) }
        }));
        fsm.set_input(&input).unwrap();

        let summary = fsm.execute().unwrap();

        prop_assert_eq!(summary.consumed, stop.min(input.len()));
        prop_assert_eq!(fsm.status(), ExecutionStatus::HaltedComplete);
    }

    #[test]
    fn chunk_width_does_not_change_consumption(input in bits(), width in 1usize..16) {
        let config = FsmConfig::default().with_max_chunk_len(16);
        let mut fsm = Fsm::with_config("wide", config);
        let s0 = fsm.add_state("S0", false, Some(Matcher::new(|_, _| true)));
        fsm.set_initial_state(s0).unwrap();
        fsm.add_transition(s0, b"", OutputAction::noop(), s0).unwrap();
        fsm.set_reader(InputReader::fixed(width));
        fsm.set_input(&input).unwrap();

        let summary = fsm.execute().unwrap();

        prop_assert_eq!(summary.consumed, input.len());
        prop_assert_eq!(summary.steps, input.len().div_ceil(width));
        prop_assert_eq!(fsm.trace().consumed(), input);
    }
}

#[test]
fn state_ids_index_the_arena() {
    let mut fsm = Fsm::new("ids");
    let a = fsm.add_state("A", false, None);
    let b = fsm.add_state("B", false, None);
    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    let ids: Vec<StateId> = fsm.states().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![a, b]);
}
