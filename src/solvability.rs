//! Solvability pre-checks run before handing a pair of boards to the solver.
//!
//! The search itself never validates solvability: an unsolvable pair simply
//! exhausts the frontier. These predicates let callers reject such pairs
//! cheaply.

use crate::board::Board;

/// Decides whether `goal` is reachable from `board`.
pub trait Solvability {
    fn is_solvable(&self, board: &Board, goal: &Board) -> bool;
}

impl<F> Solvability for F
where
    F: Fn(&Board, &Board) -> bool,
{
    fn is_solvable(&self, board: &Board, goal: &Board) -> bool {
        self(board, goal)
    }
}

/// The classic inversion-parity rule.
///
/// For odd widths the board is accepted iff its inversion count is even,
/// which is exact whenever the goal itself has an even inversion count (as
/// both the row-major `0..n²` layout and [`Board::solved`] do). The goal is
/// otherwise ignored.
///
/// Even widths are always accepted. Deciding them needs the blank's row as
/// well, which this rule does not look at; use [`RelativeParity`] when
/// even-width boards matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct InversionParity;

impl Solvability for InversionParity {
    fn is_solvable(&self, board: &Board, _goal: &Board) -> bool {
        if board.width() % 2 == 1 {
            count_inversions(board) % 2 == 0
        } else {
            true
        }
    }
}

/// Compares the permutation parity of both boards, adding the blank's row
/// on even widths. Correct for any width and any goal layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativeParity;

impl Solvability for RelativeParity {
    fn is_solvable(&self, board: &Board, goal: &Board) -> bool {
        if board.width() != goal.width() || board.blank() != goal.blank() {
            return false;
        }
        parity_class(board) == parity_class(goal)
    }
}

fn parity_class(board: &Board) -> usize {
    let inversions = count_inversions(board);
    if board.width() % 2 == 1 {
        inversions % 2
    } else {
        (inversions + board.blank_position().row) % 2
    }
}

/// Pairs of non-blank tiles that appear in descending row-major order.
pub fn count_inversions(board: &Board) -> usize {
    let tiles: Vec<u32> = board
        .cells()
        .iter()
        .copied()
        .filter(|&value| value != board.blank())
        .collect();

    tiles
        .iter()
        .enumerate()
        .map(|(i, &val)| tiles[i + 1..].iter().filter(|&&next| next < val).count())
        .sum()
}
