use crate::board::{Board, CELL_COUNT};
use crate::error::EngineError;
use crate::session_rng::SessionRng;
use crate::types::{Difficulty, Mark, Outcome};
use crate::win_detector::{check_win, evaluate};

/// Picks the cell the automated player (always `O`) should occupy.
///
/// Easy and Medium first roll against their randomization chance and may
/// play a uniformly random empty cell; otherwise the full alpha-beta search
/// decides. Hard never rolls, so it draws nothing from `rng`.
pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<usize, EngineError> {
    if evaluate(board) != Outcome::InProgress {
        return Err(EngineError::ContractViolation {
            reason: "game is already over".to_string(),
        });
    }

    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return Err(EngineError::ContractViolation {
            reason: "no empty cells left".to_string(),
        });
    }

    let chance = difficulty.randomization_chance();
    if chance > 0.0 && rng.random_chance(chance) {
        return Ok(calculate_random_move(&available_moves, rng));
    }

    calculate_minimax_move(board).ok_or_else(|| EngineError::ContractViolation {
        reason: "no empty cells left".to_string(),
    })
}

fn calculate_random_move(available_moves: &[usize], rng: &mut SessionRng) -> usize {
    available_moves[rng.random_range(0..available_moves.len())]
}

/// Full-depth best-move search for `O`. Ties keep the lowest index because
/// the comparison is strict.
pub fn calculate_minimax_move(board: &Board) -> Option<usize> {
    let mut search_board = *board;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in board.available_moves() {
        search_board.place(index, Mark::O);
        let score = minimax(&mut search_board, 0, false, i32::MIN, i32::MAX);
        search_board.clear(index);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

// Scores are depth-adjusted so a faster win (or slower loss) always ranks
// higher: O wins score 10 - depth, X wins score depth - 10, draws 0.
fn minimax(board: &mut Board, depth: i32, is_maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
    if let Some(winner) = check_win(board) {
        return if winner == Mark::O {
            10 - depth
        } else {
            depth - 10
        };
    }

    if board.is_full() {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in 0..CELL_COUNT {
            if board.get(index) != Mark::Empty {
                continue;
            }

            board.place(index, Mark::O);
            let eval = minimax(board, depth + 1, false, alpha, beta);
            board.clear(index);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                return max_eval;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in 0..CELL_COUNT {
            if board.get(index) != Mark::Empty {
                continue;
            }

            board.place(index, Mark::X);
            let eval = minimax(board, depth + 1, true, alpha, beta);
            board.clear(index);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                return min_eval;
            }
        }
        min_eval
    }
}
