use std::fmt;

use crate::board::Board;

/// Direction the blank travels in a single slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Every move, in successor generation order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row and column delta applied to the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "UP",
            Move::Down => "DOWN",
            Move::Left => "LEFT",
            Move::Right => "RIGHT",
        };
        write!(f, "{}", s)
    }
}

/// A board reachable by one slide, with the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor {
    pub mv: Move,
    pub board: Board,
}

/// All boards one legal slide away from `board`, in `Move::ALL` order.
///
/// A corner blank yields two successors, an edge blank three and an interior
/// blank four.
pub fn successors(board: &Board) -> Vec<Successor> {
    Move::ALL
        .iter()
        .filter_map(|&mv| board.apply(mv).map(|next| Successor { mv, board: next }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &[u32]) -> Board {
        Board::from_flat(3, cells.to_vec(), 0).unwrap()
    }

    fn differs_by_one_blank_swap(a: &Board, b: &Board) -> bool {
        let diff: Vec<usize> = (0..a.cells().len())
            .filter(|&i| a.cells()[i] != b.cells()[i])
            .collect();
        diff.len() == 2
            && a.blank_position().distance(b.blank_position()) == 1
            && diff.iter().any(|&i| a.cells()[i] == a.blank())
    }

    #[test]
    fn corner_has_two_successors() {
        let b = board(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let moves: Vec<Move> = successors(&b).iter().map(|s| s.mv).collect();
        assert_eq!(moves, vec![Move::Down, Move::Right]);
    }

    #[test]
    fn edge_has_three_successors() {
        let b = board(&[8, 0, 6, 5, 4, 7, 2, 3, 1]);
        let moves: Vec<Move> = successors(&b).iter().map(|s| s.mv).collect();
        assert_eq!(moves, vec![Move::Down, Move::Left, Move::Right]);
    }

    #[test]
    fn interior_has_four_successors_in_order() {
        let b = board(&[1, 2, 3, 4, 0, 5, 6, 7, 8]);
        let succ = successors(&b);
        let moves: Vec<Move> = succ.iter().map(|s| s.mv).collect();

        assert_eq!(moves, Move::ALL.to_vec());
        assert_eq!(succ[0].board, board(&[1, 0, 3, 4, 2, 5, 6, 7, 8]));
        assert_eq!(succ[1].board, board(&[1, 2, 3, 4, 7, 5, 6, 0, 8]));
        assert_eq!(succ[2].board, board(&[1, 2, 3, 0, 4, 5, 6, 7, 8]));
        assert_eq!(succ[3].board, board(&[1, 2, 3, 4, 5, 0, 6, 7, 8]));
    }

    #[test]
    fn every_successor_is_one_blank_swap_away() {
        for cells in [
            [0, 1, 2, 3, 4, 5, 6, 7, 8],
            [1, 0, 2, 3, 4, 5, 6, 7, 8],
            [1, 2, 3, 4, 0, 5, 6, 7, 8],
            [1, 2, 3, 4, 5, 6, 7, 8, 0],
        ] {
            let b = board(&cells);
            for s in successors(&b) {
                assert!(differs_by_one_blank_swap(&b, &s.board));
                assert_eq!(s.board.apply(s.mv.opposite()).as_ref(), Some(&b));
            }
        }
    }

    #[test]
    fn display_uses_upper_case_labels() {
        let labels: Vec<String> = Move::ALL.iter().map(|m| m.to_string()).collect();
        assert_eq!(labels, vec!["UP", "DOWN", "LEFT", "RIGHT"]);
    }
}
