//! Plain-text presentation of a solution.

use std::fmt;

use crate::board::Board;
use crate::search::Step;

/// Displays the start board followed by each move and the board it
/// produces, ending with the move count.
#[derive(Debug, Clone, Copy)]
pub struct SolutionView<'a> {
    pub start: &'a Board,
    pub steps: &'a [Step],
}

impl fmt::Display for SolutionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Start")?;
        writeln!(f, "{}", self.start)?;
        for (index, step) in self.steps.iter().enumerate() {
            writeln!(f, "{}. {}", index + 1, step.mv)?;
            writeln!(f, "{}", step.board)?;
        }
        write!(f, "Number of moves: {}", self.steps.len())
    }
}

pub fn solution_text(start: &Board, steps: &[Step]) -> String {
    SolutionView { start, steps }.to_string()
}
