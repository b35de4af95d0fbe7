//! Property-based tests for the decay and round-end invariants.

use decay_tac_toe::board::{Cell, CELL_COUNT};
use decay_tac_toe::core::{SessionConfig, Side};
use decay_tac_toe::rules::winning_line;
use decay_tac_toe::session::{RoundState, Session};
use proptest::prelude::*;

/// Picks an empty cell for the side to move from an arbitrary choice.
fn pick(session: &Session, choice: usize) -> usize {
    let empty = session.board().empty_cells();
    empty[choice % empty.len()]
}

fn choices() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<usize>(), 1..40)
}

proptest! {
    // 1. Each turn ages every surviving mark by exactly one
    #[test]
    fn decay_ages_marks_by_one(moves in choices()) {
        let mut session = Session::new(SessionConfig::pvp()).unwrap();

        for choice in moves {
            if !session.round().is_in_progress() {
                break;
            }
            let before = *session.board().cells();
            let index = pick(&session, choice);
            let side = session.current_side();
            session.request_placement(index, side).unwrap();
            let after = session.board().cells();

            for i in 0..CELL_COUNT {
                match (before[i], after[i]) {
                    (Cell::Empty, Cell::Occupied { side: s, lifetime }) => {
                        prop_assert_eq!(i, index);
                        prop_assert_eq!(s, side);
                        prop_assert_eq!(lifetime, 6);
                    }
                    (Cell::Occupied { lifetime: old, side: s0 }, Cell::Occupied { lifetime: new, side: s1 }) => {
                        prop_assert_eq!(s0, s1);
                        prop_assert_eq!(new + 1, old);
                    }
                    (Cell::Occupied { lifetime, .. }, Cell::Empty) => {
                        prop_assert_eq!(lifetime, 1);
                    }
                    (Cell::Empty, Cell::Empty) => {
                        prop_assert_ne!(i, index);
                    }
                }
            }
        }
    }

    // 2. A round is drawn exactly at the cap and never before
    #[test]
    fn draw_only_at_cap(moves in prop::collection::vec(any::<usize>(), 1..60)) {
        let mut session = Session::new(SessionConfig::pvp()).unwrap();

        for choice in moves {
            let index = pick(&session, choice);
            let side = session.current_side();
            let outcome = session.request_placement(index, side).unwrap();
            match outcome.round {
                RoundState::InProgress { .. } => prop_assert!(outcome.move_count < 30),
                RoundState::Drawn => {
                    prop_assert_eq!(outcome.move_count, 30);
                    break;
                }
                RoundState::Won(_) => {
                    prop_assert!(outcome.move_count <= 30);
                    break;
                }
            }
        }
    }

    // 3. A won round always shows the winner's full line
    #[test]
    fn win_has_a_line(moves in choices()) {
        let mut session = Session::new(SessionConfig::pvp()).unwrap();

        for choice in moves {
            let index = pick(&session, choice);
            let side = session.current_side();
            let outcome = session.request_placement(index, side).unwrap();
            match outcome.round {
                RoundState::Won(winner) => {
                    prop_assert_eq!(winner, side);
                    let line = winning_line(session.board());
                    prop_assert_eq!(line.map(|(s, _)| s), Some(winner));
                    break;
                }
                RoundState::Drawn => break,
                RoundState::InProgress { .. } => {
                    prop_assert!(winning_line(session.board()).is_none());
                }
            }
        }
    }

    // 4. Rejected placements change nothing
    #[test]
    fn rejected_placement_is_pure(moves in choices(), target in 0usize..9) {
        let mut session = Session::new(SessionConfig::pvp()).unwrap();
        for choice in moves {
            if !session.round().is_in_progress() {
                break;
            }
            let index = pick(&session, choice);
            let side = session.current_side();
            session.request_placement(index, side).unwrap();
        }

        let before = session.query_state();
        let waiting = session.current_side().other();
        let bad_side = session.request_placement(target, waiting);
        prop_assert!(bad_side.is_err());

        if !session.board().is_empty(target) {
            let mover = session.current_side();
            let occupied = session.request_placement(target, mover);
            prop_assert!(occupied.is_err());
        }
        prop_assert_eq!(session.query_state(), before);
    }

    // 5. Computer matches finish with scores capped at the winning score
    #[test]
    fn pvc_match_terminates(seed in any::<u64>(), human_first in any::<bool>(), moves in choices()) {
        let human = if human_first { Side::First } else { Side::Second };
        let mut session = Session::new(SessionConfig::pvc(human).with_seed(seed)).unwrap();
        let mut choices = moves.into_iter().cycle();

        let mut placements = 0;
        while session.match_winner().is_none() {
            if !session.round().is_in_progress() {
                session.request_reset();
                continue;
            }
            let index = pick(&session, choices.next().unwrap_or(0));
            session.request_placement(index, human).unwrap();
            placements += 1;
            prop_assert!(placements < 5000);
            for side in Side::ALL {
                prop_assert!(session.scores()[side] <= 3);
            }
        }

        let winner = session.match_winner().unwrap();
        prop_assert_eq!(session.scores()[winner], 3);
    }
}
