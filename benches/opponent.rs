//! Opponent and session throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use decay_tac_toe::board::Board;
use decay_tac_toe::core::{GameRng, SessionConfig, Side};
use decay_tac_toe::opponent::{HeuristicOpponent, OpponentPolicy};
use decay_tac_toe::Session;

fn mid_game_board() -> Board {
    let mut board = Board::new();
    for (index, side, lifetime) in [
        (0, Side::First, 6),
        (4, Side::Second, 5),
        (8, Side::First, 4),
        (2, Side::Second, 3),
        (6, Side::First, 2),
    ] {
        let _ = board.place(index, side, lifetime);
    }
    board
}

fn bench_choose_move(c: &mut Criterion) {
    let board = mid_game_board();
    let opponent = HeuristicOpponent::default();
    let mut rng = GameRng::new(42);

    c.bench_function("heuristic_choose_move", |b| {
        b.iter(|| opponent.choose_move(black_box(&board), Side::Second, &mut rng))
    });
}

fn bench_full_round(c: &mut Criterion) {
    c.bench_function("pvc_full_round", |b| {
        b.iter(|| {
            let mut session = Session::new(SessionConfig::pvc(Side::First)).unwrap();
            while session.round().is_in_progress() {
                let index = session.board().empty_cells()[0];
                session.request_placement(index, Side::First).unwrap();
            }
            black_box(session.round())
        })
    });
}

criterion_group!(benches, bench_choose_move, bench_full_round);
criterion_main!(benches);
