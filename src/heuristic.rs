//! Cost estimates between boards.

use crate::board::{check_compatible, Board, Position};
use crate::error::Result;

/// Estimate of the number of slides separating two boards.
///
/// Implementations must never overestimate the true distance, otherwise the
/// search loses its optimality guarantee. Errors abort the search.
pub trait Heuristic {
    fn estimate(&self, from: &Board, to: &Board) -> Result<u32>;
}

/// Sum of per-tile Manhattan distances, ignoring the blank.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, from: &Board, to: &Board) -> Result<u32> {
        manhattan(from, to)
    }
}

impl<F> Heuristic for F
where
    F: Fn(&Board, &Board) -> u32,
{
    fn estimate(&self, from: &Board, to: &Board) -> Result<u32> {
        Ok(self(from, to))
    }
}

/// Manhattan distance between two boards.
///
/// Both boards must share width and blank value. Also serves as the edge
/// cost between adjacent boards, where exactly one tile moves one cell and
/// the result is always 1.
pub fn manhattan(from: &Board, to: &Board) -> Result<u32> {
    check_compatible(from, to)?;

    let width = from.width();
    let mut total = 0usize;
    for (index, &value) in from.cells().iter().enumerate() {
        if value == from.blank() {
            continue;
        }
        let target = to.locate(value)?;
        total += Position::new(index / width, index % width).distance(target);
    }
    Ok(total as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PuzzleError;
    use crate::moves::successors;

    fn board(cells: &[u32]) -> Board {
        Board::from_flat(3, cells.to_vec(), 0).unwrap()
    }

    #[test]
    fn distance_to_self_is_zero() {
        let b = board(&[8, 0, 6, 5, 4, 7, 2, 3, 1]);
        assert_eq!(manhattan(&b, &b), Ok(0));
    }

    #[test]
    fn adjacent_boards_cost_one() {
        let b = board(&[8, 0, 6, 5, 4, 7, 2, 3, 1]);
        for s in successors(&b) {
            assert_eq!(manhattan(&b, &s.board), Ok(1));
            assert_eq!(manhattan(&s.board, &b), Ok(1));
        }
    }

    #[test]
    fn blank_is_not_counted() {
        let goal = board(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let one_off = board(&[1, 0, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(manhattan(&one_off, &goal), Ok(1));
    }

    #[test]
    fn known_instance_estimate() {
        let start = board(&[8, 0, 6, 5, 4, 7, 2, 3, 1]);
        let goal = board(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(manhattan(&start, &goal), Ok(21));
        assert_eq!(Manhattan.estimate(&start, &goal), Ok(21));
    }

    #[test]
    fn mismatched_boards_are_an_error() {
        let three = Board::solved(3).unwrap();
        let two = Board::solved(2).unwrap();
        let other_blank = Board::from_flat(3, vec![1, 2, 3, 4, 5, 6, 7, 8, 0], 8).unwrap();

        assert_eq!(
            manhattan(&three, &two),
            Err(PuzzleError::WidthMismatch { start: 3, goal: 2 })
        );
        assert_eq!(
            Manhattan.estimate(&two, &three),
            Err(PuzzleError::WidthMismatch { start: 2, goal: 3 })
        );
        assert_eq!(
            manhattan(&three, &other_blank),
            Err(PuzzleError::BlankMismatch { start: 0, goal: 8 })
        );
    }

    #[test]
    fn closures_are_heuristics() {
        let zero = |_: &Board, _: &Board| 0u32;
        let b = Board::solved(3).unwrap();
        assert_eq!(zero.estimate(&b, &b), Ok(0));
    }
}
