use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{PuzzleError, Result};
use crate::moves::Move;

/// A cell coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Taxicab distance between two cells.
    pub fn distance(&self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// An immutable square grid holding each value of `0..width²` exactly once.
///
/// One of the values is the blank. Alongside the cells the board keeps a
/// value-to-index lookup so that `locate` is constant time; the lookup is
/// derived from the cells and takes no part in equality or hashing.
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    blank: u32,
    cells: Vec<u32>,
    positions: Vec<usize>,
}

impl Board {
    /// Builds a board from its rows, rejecting anything that is not a square
    /// permutation of `0..width²`.
    pub fn new(rows: Vec<Vec<u32>>, blank: u32) -> Result<Self> {
        let width = rows.len();
        if width == 0 {
            return Err(PuzzleError::Empty);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(PuzzleError::NotSquare {
                    row,
                    len: cells.len(),
                    width,
                });
            }
        }

        Self::from_flat(width, rows.into_iter().flatten().collect(), blank)
    }

    /// Builds a board from row-major cells.
    pub fn from_flat(width: usize, cells: Vec<u32>, blank: u32) -> Result<Self> {
        if width == 0 || cells.is_empty() {
            return Err(PuzzleError::Empty);
        }
        let expected = width
            .checked_mul(width)
            .ok_or(PuzzleError::TooLarge { width })?;
        if cells.len() != expected {
            return Err(PuzzleError::CellCount {
                len: cells.len(),
                expected,
            });
        }

        let max = u32::try_from(expected - 1).map_err(|_| PuzzleError::TooLarge { width })?;
        if blank > max {
            return Err(PuzzleError::InvalidBlank { blank, max });
        }

        let mut positions = vec![usize::MAX; expected];
        for (index, &value) in cells.iter().enumerate() {
            if value > max {
                return Err(PuzzleError::OutOfRange { value, max });
            }
            let slot = &mut positions[value as usize];
            if *slot != usize::MAX {
                return Err(PuzzleError::Duplicate { value });
            }
            *slot = index;
        }

        Ok(Self {
            width,
            blank,
            cells,
            positions,
        })
    }

    /// The conventional solved layout: `1..width²` in row-major order with
    /// the blank (`0`) in the bottom-right corner.
    pub fn solved(width: usize) -> Result<Self> {
        let len = width
            .checked_mul(width)
            .and_then(|len| u32::try_from(len).ok())
            .ok_or(PuzzleError::TooLarge { width })?;
        let cells = (1..len).chain(std::iter::once(0)).collect();
        Self::from_flat(width, cells, 0)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn blank(&self) -> u32 {
        self.blank
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.width)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.width || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// Returns the row and column holding `value`.
    pub fn locate(&self, value: u32) -> Result<Position> {
        self.positions
            .get(value as usize)
            .map(|&index| self.position_of(index))
            .ok_or(PuzzleError::NotFound { value })
    }

    pub fn blank_position(&self) -> Position {
        self.position_of(self.positions[self.blank as usize])
    }

    /// Slides the blank one cell in the given direction.
    ///
    /// Returns `None` when the blank sits on the edge the move points at.
    pub fn apply(&self, mv: Move) -> Option<Board> {
        let blank = self.blank_position();
        let (dr, dc) = mv.as_offset();

        let row = blank.row.checked_add_signed(dr)?;
        let col = blank.col.checked_add_signed(dc)?;
        if row >= self.width || col >= self.width {
            return None;
        }

        Some(self.swap_blank_with(Position::new(row, col)))
    }

    fn swap_blank_with(&self, target: Position) -> Board {
        let mut next = self.clone();
        let from = self.positions[self.blank as usize];
        let to = target.row * self.width + target.col;
        let tile = next.cells[to];

        next.cells.swap(from, to);
        next.positions[self.blank as usize] = to;
        next.positions[tile as usize] = from;
        next
    }

    fn position_of(&self, index: usize) -> Position {
        Position::new(index / self.width, index % self.width)
    }
}

/// Ensures two boards share a width and a blank value, as every pairwise
/// operation (cost estimates, search) requires.
pub fn check_compatible(start: &Board, goal: &Board) -> Result<()> {
    if start.width() != goal.width() {
        return Err(PuzzleError::WidthMismatch {
            start: start.width(),
            goal: goal.width(),
        });
    }
    if start.blank() != goal.blank() {
        return Err(PuzzleError::BlankMismatch {
            start: start.blank(),
            goal: goal.blank(),
        });
    }
    Ok(())
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &val in row {
                write!(f, "{:2} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&[u32]]) -> Board {
        Board::new(rows.iter().map(|r| r.to_vec()).collect(), 0).unwrap()
    }

    #[test]
    fn equality_is_cellwise() {
        let a = board(&[&[1, 2], &[3, 0]]);
        let b = Board::from_flat(2, vec![1, 2, 3, 0], 0).unwrap();
        let c = board(&[&[1, 2], &[0, 3]]);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn locate_finds_every_value() {
        let b = board(&[&[8, 0, 6], &[5, 4, 7], &[2, 3, 1]]);

        assert_eq!(b.locate(0).unwrap(), Position::new(0, 1));
        assert_eq!(b.locate(1).unwrap(), Position::new(2, 2));
        assert_eq!(b.locate(5).unwrap(), Position::new(1, 0));
        assert_eq!(b.blank_position(), Position::new(0, 1));
        assert_eq!(b.get(2, 0), Some(2));
        assert_eq!(b.get(3, 0), None);
    }

    #[test]
    fn locate_missing_value_is_an_error() {
        let b = board(&[&[1, 2], &[3, 0]]);
        assert_eq!(b.locate(4), Err(PuzzleError::NotFound { value: 4 }));
    }

    #[test]
    fn rejects_malformed_boards() {
        assert_eq!(Board::new(vec![], 0).unwrap_err(), PuzzleError::Empty);
        assert_eq!(
            Board::new(vec![vec![1, 2], vec![3]], 0).unwrap_err(),
            PuzzleError::NotSquare {
                row: 1,
                len: 1,
                width: 2
            }
        );
        assert_eq!(
            Board::new(vec![vec![1, 2], vec![3, 4]], 0).unwrap_err(),
            PuzzleError::OutOfRange { value: 4, max: 3 }
        );
        assert_eq!(
            Board::new(vec![vec![1, 1], vec![3, 0]], 0).unwrap_err(),
            PuzzleError::Duplicate { value: 1 }
        );
        assert_eq!(
            Board::new(vec![vec![1, 2], vec![3, 0]], 9).unwrap_err(),
            PuzzleError::InvalidBlank { blank: 9, max: 3 }
        );
        assert_eq!(
            Board::from_flat(3, vec![0, 1, 2, 3], 0).unwrap_err(),
            PuzzleError::CellCount {
                len: 4,
                expected: 9
            }
        );
    }

    #[test]
    fn oversized_widths_are_rejected_without_overflow() {
        assert_eq!(
            Board::from_flat(usize::MAX, vec![0], 0).unwrap_err(),
            PuzzleError::TooLarge { width: usize::MAX }
        );
        assert_eq!(
            Board::solved(usize::MAX).unwrap_err(),
            PuzzleError::TooLarge { width: usize::MAX }
        );
        assert_eq!(
            Board::solved(70_000).unwrap_err(),
            PuzzleError::TooLarge { width: 70_000 }
        );
    }

    #[test]
    fn compatibility_requires_same_width_and_blank() {
        let two = Board::solved(2).unwrap();
        let three = Board::solved(3).unwrap();
        let other_blank = Board::from_flat(2, vec![1, 2, 3, 0], 3).unwrap();

        assert_eq!(check_compatible(&two, &two), Ok(()));
        assert_eq!(
            check_compatible(&two, &three),
            Err(PuzzleError::WidthMismatch { start: 2, goal: 3 })
        );
        assert_eq!(
            check_compatible(&other_blank, &two),
            Err(PuzzleError::BlankMismatch { start: 3, goal: 0 })
        );
    }

    #[test]
    fn apply_moves_the_blank_and_leaves_the_input_intact() {
        let b = board(&[&[1, 2, 3], &[4, 0, 5], &[6, 7, 8]]);
        let up = b.apply(Move::Up).unwrap();

        assert_eq!(up, board(&[&[1, 0, 3], &[4, 2, 5], &[6, 7, 8]]));
        assert_eq!(up.blank_position(), Position::new(0, 1));
        assert_eq!(up.locate(2).unwrap(), Position::new(1, 1));
        assert_eq!(b.blank_position(), Position::new(1, 1));
    }

    #[test]
    fn apply_off_the_edge_is_rejected() {
        let b = Board::solved(3).unwrap();
        assert!(b.apply(Move::Down).is_none());
        assert!(b.apply(Move::Right).is_none());
        assert!(b.apply(Move::Up).is_some());
    }

    #[test]
    fn custom_blank_value() {
        let b = Board::new(vec![vec![3, 1], vec![2, 0]], 3).unwrap();
        assert_eq!(b.blank_position(), Position::new(0, 0));
        assert_eq!(
            b.apply(Move::Down).unwrap(),
            Board::new(vec![vec![2, 1], vec![3, 0]], 3).unwrap()
        );
    }

    #[test]
    fn display_matches_grid_layout() {
        let b = Board::solved(2).unwrap();
        assert_eq!(b.to_string(), " 1  2 \n 3  0 \n");
    }
}
