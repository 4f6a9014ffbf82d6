use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_engine::Mark::{Empty, O, X};
use tictactoe_engine::{
    Board, Difficulty, GameState, Outcome, SessionRng, calculate_minimax_move, select_move,
};

fn bench_best_move_empty_board(c: &mut Criterion) {
    c.bench_function("minimax_empty_board", |b| {
        let board = Board::new();
        b.iter(|| calculate_minimax_move(&board));
    });
}

fn bench_best_move_midgame(c: &mut Criterion) {
    // X opened in a corner, O answered in the center, X took the opposite corner.
    let board = Board::from_cells(&[X, Empty, Empty, Empty, O, Empty, Empty, Empty, X]).unwrap();

    c.bench_function("minimax_midgame", |b| {
        b.iter(|| calculate_minimax_move(&board));
    });
}

fn bench_hard_bot_full_game(c: &mut Criterion) {
    c.bench_function("hard_bot_full_game", |b| {
        b.iter(|| {
            let mut rng = SessionRng::new(1);
            let mut state = GameState::new();

            while state.status == Outcome::InProgress {
                let index = if state.is_bot_turn() {
                    select_move(&state.board, Difficulty::Hard, &mut rng).unwrap()
                } else {
                    state.board.available_moves()[0]
                };
                state.place_mark(index).unwrap();
            }

            state.status
        });
    });
}

criterion_group!(
    benches,
    bench_best_move_empty_board,
    bench_best_move_midgame,
    bench_hard_bot_full_game
);
criterion_main!(benches);
