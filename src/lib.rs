//! Shortest-path solver for the generalized sliding-tile puzzle.
//!
//! Boards are square permutations of `0..width²` with a configurable blank.
//! [`solve`] runs A* with the Manhattan distance heuristic and returns the
//! ordered slides from start to goal.
//!
//! ```
//! use slider_puzzle::{solve, Board};
//!
//! let start = Board::new(vec![vec![1, 2, 3], vec![4, 5, 6], vec![0, 7, 8]], 0).unwrap();
//! let goal = Board::solved(3).unwrap();
//!
//! let steps = solve(start, goal).unwrap();
//! assert_eq!(steps.len(), 2);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod heuristic;
pub mod moves;
pub mod render;
pub mod scramble;
pub mod search;
pub mod solvability;

pub use board::{check_compatible, Board, Position};
pub use config::{PuzzleConfig, ScrambleConfig, SearchConfig};
pub use error::{ConfigError, PuzzleError, Result, SearchError};
pub use heuristic::{manhattan, Heuristic, Manhattan};
pub use moves::{successors, Move, Successor};
pub use render::{solution_text, SolutionView};
pub use scramble::{scramble, scramble_seeded};
pub use search::{solve, NodeId, SearchStats, Solution, Solver, Step};
pub use solvability::{count_inversions, InversionParity, RelativeParity, Solvability};
