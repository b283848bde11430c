//! Structural invariants, checked after every command of randomized
//! play sequences.
//!
//! The partition invariant is the load-bearing one: at every reachable
//! state, the cards still in play plus the members of every solved group
//! are exactly the full bank, with no overlap and nothing lost.

use std::collections::HashSet;

use proptest::prelude::*;

use word_connections::{GameEngine, Phase, SessionConfig, WordBank, WordId, BANK_SIZE};

/// One presentation-layer command, as fed to the engine.
#[derive(Clone, Debug)]
enum Cmd {
    /// Toggle the card at this bank index.
    Select(usize),
    DeselectAll,
    Check,
    Shuffle,
    Reset,
}

fn cmd_strategy() -> impl Strategy<Value = Cmd> {
    prop_oneof![
        8 => (0..BANK_SIZE).prop_map(Cmd::Select),
        1 => Just(Cmd::DeselectAll),
        4 => Just(Cmd::Check),
        1 => Just(Cmd::Shuffle),
        1 => Just(Cmd::Reset),
    ]
}

fn apply(engine: &mut GameEngine, cmd: &Cmd) {
    match cmd {
        Cmd::Select(index) => {
            engine.select(WordId::new(*index as u32));
        }
        Cmd::DeselectAll => engine.deselect_all(),
        Cmd::Check => {
            engine.check();
        }
        Cmd::Shuffle => engine.shuffle(),
        Cmd::Reset => engine.reset(),
    }
}

fn assert_invariants(engine: &GameEngine) {
    let bank = engine.bank();

    // Partition: remaining and solved-group members tile the bank.
    let remaining: HashSet<WordId> = engine.remaining().iter().copied().collect();
    assert_eq!(remaining.len(), engine.remaining().len(), "duplicate card in play");

    let mut covered = remaining.clone();
    for &group in engine.solved() {
        for &id in bank.members(group) {
            assert!(
                covered.insert(id),
                "card {id} is both remaining and solved"
            );
        }
    }
    let all: HashSet<WordId> = bank.word_ids().collect();
    assert_eq!(covered, all, "cards lost or invented");

    // Solved groups are unique.
    let solved: HashSet<_> = engine.solved().iter().copied().collect();
    assert_eq!(solved.len(), engine.solved().len(), "group solved twice");

    // Selection is bounded and drawn from cards in play.
    assert!(engine.selection().len() <= 4);
    for id in engine.selection() {
        assert!(remaining.contains(id), "selected card not in play");
    }

    // Lives stay within [0, initial].
    assert!(engine.lives() <= engine.initial_lives());

    // Phase agrees with the terminal rules, win first.
    match engine.phase() {
        Phase::Won => assert_eq!(engine.solved().len(), 4),
        Phase::Lost => {
            assert_eq!(engine.lives(), 0);
            assert!(engine.solved().len() < 4);
        }
        Phase::Playing => {
            assert!(engine.lives() > 0);
            assert!(engine.solved().len() < 4);
        }
    }
}

proptest! {
    #[test]
    fn invariants_hold_under_any_command_sequence(
        seed in any::<u64>(),
        cmds in prop::collection::vec(cmd_strategy(), 1..200),
    ) {
        let mut engine = GameEngine::with_config(
            WordBank::builtin(),
            SessionConfig::new().seed(seed),
        );
        assert_invariants(&engine);

        for cmd in &cmds {
            apply(&mut engine, cmd);
            assert_invariants(&engine);
        }
    }

    #[test]
    fn shuffle_never_changes_membership(
        seed in any::<u64>(),
        shuffles in 1..20usize,
    ) {
        let mut engine = GameEngine::with_config(
            WordBank::builtin(),
            SessionConfig::new().seed(seed),
        );

        let before: HashSet<WordId> = engine.remaining().iter().copied().collect();
        for _ in 0..shuffles {
            engine.shuffle();
            let after: HashSet<WordId> = engine.remaining().iter().copied().collect();
            prop_assert_eq!(&before, &after);
        }
    }

    #[test]
    fn select_is_a_toggle(
        seed in any::<u64>(),
        index in 0..BANK_SIZE,
    ) {
        let mut engine = GameEngine::with_config(
            WordBank::builtin(),
            SessionConfig::new().seed(seed),
        );
        let id = WordId::new(index as u32);

        let before = engine.selection().to_vec();
        engine.select(id);
        engine.select(id);

        // select(x); select(x) returns the selection to its prior value.
        prop_assert_eq!(engine.selection(), &before[..]);
    }
}
