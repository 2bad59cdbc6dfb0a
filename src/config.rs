//! Puzzle configuration.
//!
//! Start and goal layouts, the blank value and search limits can be loaded
//! from TOML so the binary can run other instances without recompiling.
//!
//! ```
//! use slider_puzzle::PuzzleConfig;
//!
//! let config = PuzzleConfig::from_toml_str(r#"
//!     blank = 0
//!     start = [[1, 2], [0, 3]]
//!     goal = [[1, 2], [3, 0]]
//!
//!     [search]
//!     max_expansions = 1000
//! "#).unwrap();
//!
//! let (start, goal) = config.boards().unwrap();
//! assert_eq!(start.width(), 2);
//! assert_eq!(config.search.max_expansions, Some(1000));
//! # let _ = goal;
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::ConfigError;
use crate::scramble::scramble_seeded;

/// Top-level configuration for one puzzle run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PuzzleConfig {
    /// Value that marks the empty cell.
    #[serde(default)]
    pub blank: u32,

    #[serde(default = "default_start")]
    pub start: Vec<Vec<u32>>,

    #[serde(default = "default_goal")]
    pub goal: Vec<Vec<u32>>,

    #[serde(default)]
    pub search: SearchConfig,

    /// When present the start layout is replaced by a random walk from the
    /// goal.
    #[serde(default)]
    pub scramble: Option<ScrambleConfig>,
}

/// Limits applied to the search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub max_expansions: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScrambleConfig {
    pub moves: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_start() -> Vec<Vec<u32>> {
    vec![vec![8, 0, 6], vec![5, 4, 7], vec![2, 3, 1]]
}

fn default_goal() -> Vec<Vec<u32>> {
    vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]]
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            blank: 0,
            start: default_start(),
            goal: default_goal(),
            search: SearchConfig::default(),
            scramble: None,
        }
    }
}

impl PuzzleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads `path`, falling back to the default configuration when the file
    /// does not exist. Parse errors are still reported.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn with_start(mut self, rows: Vec<Vec<u32>>) -> Self {
        self.start = rows;
        self
    }

    pub fn with_goal(mut self, rows: Vec<Vec<u32>>) -> Self {
        self.goal = rows;
        self
    }

    pub fn with_max_expansions(mut self, limit: u64) -> Self {
        self.search.max_expansions = Some(limit);
        self
    }

    pub fn with_scramble(mut self, moves: usize, seed: Option<u64>) -> Self {
        self.scramble = Some(ScrambleConfig { moves, seed });
        self
    }

    /// Builds and validates the start and goal boards. A configured scramble
    /// replaces the start layout; without a seed the scramble uses the
    /// thread RNG.
    pub fn boards(&self) -> Result<(Board, Board), ConfigError> {
        let goal = Board::new(self.goal.clone(), self.blank)?;
        let start = match &self.scramble {
            Some(ScrambleConfig {
                moves,
                seed: Some(seed),
            }) => scramble_seeded(&goal, *moves, *seed),
            Some(ScrambleConfig { moves, seed: None }) => {
                crate::scramble::scramble(&goal, *moves, &mut rand::thread_rng())
            }
            None => Board::new(self.start.clone(), self.blank)?,
        };

        if start.width() != goal.width() {
            return Err(ConfigError::Invalid(format!(
                "start is {0}x{0} but goal is {1}x{1}",
                start.width(),
                goal.width()
            )));
        }
        Ok((start, goal))
    }
}
