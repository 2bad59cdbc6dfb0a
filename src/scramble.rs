//! Random puzzle instances.
//!
//! Instances are produced by walking the blank from the goal rather than by
//! shuffling cells, so every scramble is solvable regardless of width.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::moves::{successors, Move};

/// Applies `moves` random slides to `goal`, never immediately undoing the
/// previous slide.
pub fn scramble<R: Rng + ?Sized>(goal: &Board, moves: usize, rng: &mut R) -> Board {
    let mut board = goal.clone();
    let mut last: Option<Move> = None;

    for _ in 0..moves {
        let options: Vec<_> = successors(&board)
            .into_iter()
            .filter(|s| last.map_or(true, |prev| s.mv != prev.opposite()))
            .collect();

        match options.choose(&mut *rng) {
            Some(next) => {
                last = Some(next.mv);
                board = next.board.clone();
            }
            None => break,
        }
    }

    board
}

/// Reproducible [`scramble`] driven by a seeded `StdRng`.
pub fn scramble_seeded(goal: &Board, moves: usize, seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    scramble(goal, moves, &mut rng)
}
