//! Core domain types for tic-tac-toe.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// The 8 winning lines as 0-based cell indices.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],             // Diagonals
];

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Unoccupied cell.
    #[default]
    Empty,
    /// The first player to move, rendered as `O`.
    PlayerA,
    /// The second player to move, rendered as `X`.
    PlayerB,
}

impl Mark {
    /// Returns the other player. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Mark::PlayerA => Mark::PlayerB,
            Mark::PlayerB => Mark::PlayerA,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Board symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::PlayerA => 'O',
            Mark::PlayerB => 'X',
            Mark::Empty => ' ',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A move: a 1-based board position in `1..=9`.
///
/// Positions are numbered row by row:
///
/// ```text
/// 1 | 2 | 3
/// 4 | 5 | 6
/// 7 | 8 | 9
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Move(u8);

impl Move {
    /// Creates a move from a 1-based position.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PositionOutOfRange`] unless `position` is in `1..=9`.
    #[instrument(level = "trace")]
    pub fn new(position: usize) -> Result<Self, GameError> {
        if (1..=CELLS).contains(&position) {
            Ok(Self(position as u8))
        } else {
            Err(GameError::PositionOutOfRange { position })
        }
    }

    /// Creates a move from a 0-based cell index (`0..9`).
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < CELLS);
        Self(index as u8 + 1)
    }

    /// The 1-based position.
    pub fn position(self) -> usize {
        self.0 as usize
    }

    /// The 0-based cell index.
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// All nine moves in ascending order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..CELLS).map(Move::from_index)
    }
}

impl TryFrom<usize> for Move {
    type Error = GameError;

    fn try_from(position: usize) -> Result<Self, Self::Error> {
        Move::new(position)
    }
}

impl From<Move> for usize {
    fn from(mv: Move) -> Self {
        mv.position()
    }
}

impl std::str::FromStr for Move {
    type Err = GameError;

    /// Parses a 1-based position such as `"5"`. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let position = trimmed
            .parse::<usize>()
            .map_err(|_| GameError::Unparsable { input: trimmed.to_string() })?;
        Move::new(position)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 3x3 board in row-major order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Mark; CELLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mark at `mv`.
    pub fn get(&self, mv: Move) -> Mark {
        self.cells[mv.index()]
    }

    /// Checks if the cell at `mv` is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Mark::Empty
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Mark; CELLS] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&m| m != Mark::Empty).count()
    }

    /// Counts the lines fully owned by `mark`.
    pub fn lines_owned_by(&self, mark: Mark) -> usize {
        LINES
            .iter()
            .filter(|line| line.iter().all(|&i| self.cells[i] == mark))
            .count()
    }

    // Cells change only through GameState, keeping its move counter exact.
    pub(crate) fn set(&mut self, mv: Move, mark: Mark) {
        self.cells[mv.index()] = mark;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "-------------")?;
        for row in self.cells.chunks(3) {
            writeln!(f, "| {} | {} | {} |", row[0], row[1], row[2])?;
            writeln!(f, "-------------")?;
        }
        Ok(())
    }
}
