use crate::error::EngineError;
use crate::types::Mark;

pub const CELL_COUNT: usize = 9;

/// A 3x3 board stored as a flat row-major array: row 0 is cells 0..=2,
/// row 1 is 3..=5, row 2 is 6..=8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: &[Mark]) -> Result<Self, EngineError> {
        if cells.len() != CELL_COUNT {
            return Err(EngineError::InvalidBoard {
                expected: CELL_COUNT,
                got: cells.len(),
            });
        }

        let mut board = Self::new();
        board.cells.copy_from_slice(cells);
        Ok(board)
    }

    pub fn get(&self, index: usize) -> Mark {
        self.cells[index]
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    // Hypothetical placements during search come through place/clear in
    // strict pairs; outside the crate a cell is only ever written via
    // GameState::place_mark and never reset.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }

    pub fn available_moves(&self) -> Vec<usize> {
        let mut moves = Vec::new();
        for (index, &cell) in self.cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(index);
            }
        }
        moves
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index] == Mark::Empty
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark::{Empty, O, X};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.available_moves().len(), CELL_COUNT);
        assert!(!board.is_full());
    }

    #[test]
    fn test_from_cells_rejects_wrong_length() {
        let short = [X, O, X];
        let result = Board::from_cells(&short);
        assert_eq!(
            result,
            Err(EngineError::InvalidBoard {
                expected: 9,
                got: 3
            })
        );

        let long = [Empty; 12];
        let result = Board::from_cells(&long);
        assert_eq!(
            result,
            Err(EngineError::InvalidBoard {
                expected: 9,
                got: 12
            })
        );
    }

    #[test]
    fn test_available_moves_are_ascending_empty_indices() {
        #[rustfmt::skip]
        let board = Board::from_cells(&[
            X, Empty, O,
            Empty, X, Empty,
            O, Empty, Empty,
        ])
        .unwrap();

        assert_eq!(board.available_moves(), vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_is_valid_move() {
        #[rustfmt::skip]
        let board = Board::from_cells(&[
            X, Empty, Empty,
            Empty, Empty, Empty,
            Empty, Empty, Empty,
        ])
        .unwrap();

        assert!(!board.is_valid_move(0));
        assert!(board.is_valid_move(1));
        assert!(!board.is_valid_move(9));
    }

    #[test]
    fn test_is_full() {
        let board = Board::from_cells(&[X, O, X, X, O, O, O, X, X]).unwrap();
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }
}
