use crate::board::Board;
use crate::types::{Mark, Outcome};

/// The 8 winning index triples: rows, then columns, then diagonals.
/// Scan order is fixed so evaluation is reproducible.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn winning_line(board: &Board) -> Option<(Mark, [usize; 3])> {
    for line in WIN_LINES {
        let mark = board.get(line[0]);
        if mark != Mark::Empty && board.get(line[1]) == mark && board.get(line[2]) == mark {
            return Some((mark, line));
        }
    }
    None
}

pub fn check_win(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_win(board) {
        return Outcome::Win(winner);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
