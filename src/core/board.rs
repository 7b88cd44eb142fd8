//! The 4×4 board and move directions.
//!
//! ## Board
//!
//! A `Copy` value holding 16 cells in row-major order. `0` is an empty cell;
//! every other cell is a power of two (2, 4, 8, ...). The only public ways to
//! build a `Board` validate their input, so a `Board` always satisfies that
//! invariant.
//!
//! ## Lines
//!
//! A move works on four lines. `Board::line` reads a line in the order tiles
//! travel for a direction (index 0 is the edge they slide toward) and
//! `Board::set_line` writes one back in the same order. This lets a single
//! merge routine serve all four directions.
//!
//! ```
//! use rust_2048::core::{Board, Direction};
//!
//! let board = Board::from_rows([
//!     [2, 0, 0, 4],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [8, 0, 0, 0],
//! ]).unwrap();
//!
//! assert_eq!(board.line(Direction::Left, 0), [2, 0, 0, 4]);
//! assert_eq!(board.line(Direction::Right, 0), [4, 0, 0, 2]);
//! assert_eq!(board.line(Direction::Up, 0), [2, 0, 0, 8]);
//! assert_eq!(board.line(Direction::Down, 0), [8, 0, 0, 2]);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use super::error::BoardError;

/// Side length of the board.
pub const SIZE: usize = 4;

/// Total number of cells.
pub const CELLS: usize = SIZE * SIZE;

/// One row or column, ordered toward the edge tiles slide to.
pub type Line = [u32; SIZE];

/// Coordinates of empty cells, in row-major scan order.
pub type EmptyCells = SmallVec<[(usize, usize); CELLS]>;

/// Check that a cell value is empty or a power of two >= 2.
#[must_use]
pub const fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

// ============================================================================
// DIRECTION
// ============================================================================

/// Direction of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Up and down operate on columns.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Right and down slide toward the high index, so their lines are read
    /// back to front.
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    /// Map a keyboard key name to a direction.
    ///
    /// Accepts DOM key names (`"ArrowLeft"`) as well as plain names
    /// (`"left"`, case-insensitive). Returns `None` for anything else.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            other => match other.to_ascii_lowercase().as_str() {
                "left" => Some(Direction::Left),
                "right" => Some(Direction::Right),
                "up" => Some(Direction::Up),
                "down" => Some(Direction::Down),
                _ => None,
            },
        }
    }
}

impl FromStr for Direction {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::from_key(s).ok_or_else(|| BoardError::UnknownDirection(s.to_string()))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// A validated 4×4 grid of tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct Board([[u32; SIZE]; SIZE]);

impl Board {
    /// The all-empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self([[0; SIZE]; SIZE])
    }

    /// Build a board from a fixed-size grid.
    ///
    /// Fails if any cell is neither 0 nor a power of two >= 2.
    pub fn from_rows(rows: [[u32; SIZE]; SIZE]) -> Result<Self, BoardError> {
        for (row, cells) in rows.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(BoardError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Self(rows))
    }

    /// Build a board from an untyped grid, checking its dimensions first.
    pub fn from_slices<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, BoardError> {
        if rows.len() != SIZE {
            return Err(BoardError::WrongRowCount(rows.len()));
        }

        let mut grid = [[0; SIZE]; SIZE];
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != SIZE {
                return Err(BoardError::WrongRowLength { row, len: cells.len() });
            }
            grid[row].copy_from_slice(cells);
        }

        Self::from_rows(grid)
    }

    /// Get the value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is 4 or more.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.0[row][col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) {
        debug_assert!(is_valid_tile(value));
        self.0[row][col] = value;
    }

    /// Copy of the grid as plain arrays.
    #[must_use]
    pub fn rows(&self) -> [[u32; SIZE]; SIZE] {
        self.0
    }

    /// Iterate over `(row, col, value)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| cells.iter().enumerate().map(move |(col, &v)| (row, col, v)))
    }

    /// Read line `index` in the order tiles travel for `direction`.
    ///
    /// `index` is a row for left/right and a column for up/down.
    #[must_use]
    pub fn line(&self, direction: Direction, index: usize) -> Line {
        let mut line = if direction.is_vertical() {
            [self.0[0][index], self.0[1][index], self.0[2][index], self.0[3][index]]
        } else {
            self.0[index]
        };
        if direction.is_reversed() {
            line.reverse();
        }
        line
    }

    /// Write a line produced for `direction` back into place.
    pub(crate) fn set_line(&mut self, direction: Direction, index: usize, mut line: Line) {
        if direction.is_reversed() {
            line.reverse();
        }
        if direction.is_vertical() {
            for (row, value) in line.into_iter().enumerate() {
                self.0[row][index] = value;
            }
        } else {
            self.0[index] = line;
        }
    }

    /// Coordinates of all empty cells, scanning rows top to bottom.
    #[must_use]
    pub fn empty_cells(&self) -> EmptyCells {
        self.cells()
            .filter(|&(_, _, value)| value == 0)
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells().filter(|&(_, _, value)| value == 0).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.iter().all(|row| !row.contains(&0))
    }

    /// Largest tile on the board (0 if empty).
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.cells().map(|(_, _, value)| value).max().unwrap_or(0)
    }

    /// Whether any cell holds exactly `value`.
    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        self.0.iter().any(|row| row.contains(&value))
    }

    /// Whether two horizontally or vertically adjacent cells are equal.
    ///
    /// Empty cells count too; callers interested in merges check
    /// `is_full` first.
    #[must_use]
    pub fn has_adjacent_pair(&self) -> bool {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let value = self.0[row][col];
                if row + 1 < SIZE && value == self.0[row + 1][col] {
                    return true;
                }
                if col + 1 < SIZE && value == self.0[row][col + 1] {
                    return true;
                }
            }
        }
        false
    }
}

impl TryFrom<Vec<Vec<u32>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Self::from_slices(&rows)
    }
}

impl TryFrom<[[u32; SIZE]; SIZE]> for Board {
    type Error = BoardError;

    fn try_from(rows: [[u32; SIZE]; SIZE]) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<u32>> {
    fn from(board: Board) -> Self {
        board.0.iter().map(|row| row.to_vec()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                if value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        Board::from_rows([
            [2, 4, 8, 16],
            [0, 0, 0, 0],
            [32, 0, 64, 0],
            [0, 128, 0, 2048],
        ])
        .unwrap()
    }

    #[test]
    fn test_valid_tiles() {
        assert!(is_valid_tile(0));
        assert!(is_valid_tile(2));
        assert!(is_valid_tile(2048));
        assert!(is_valid_tile(1 << 17));
        assert!(!is_valid_tile(1));
        assert!(!is_valid_tile(3));
        assert!(!is_valid_tile(6));
    }

    #[test]
    fn test_from_rows_rejects_invalid_tile() {
        let err = Board::from_rows([[0, 0, 0, 0], [0, 0, 3, 0], [0; 4], [0; 4]]).unwrap_err();
        assert_eq!(err, BoardError::InvalidTile { row: 1, col: 2, value: 3 });

        let err = Board::from_rows([[1, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap_err();
        assert_eq!(err, BoardError::InvalidTile { row: 0, col: 0, value: 1 });
    }

    #[test]
    fn test_from_slices_checks_dimensions() {
        let three_rows = vec![vec![0; 4]; 3];
        assert_eq!(Board::from_slices(&three_rows), Err(BoardError::WrongRowCount(3)));

        let mut short_row = vec![vec![0; 4]; 4];
        short_row[2].pop();
        assert_eq!(
            Board::from_slices(&short_row),
            Err(BoardError::WrongRowLength { row: 2, len: 3 })
        );

        let ok = Board::try_from(vec![vec![0, 2, 0, 4], vec![0; 4], vec![0; 4], vec![0; 4]]).unwrap();
        assert_eq!(ok.get(0, 3), 4);
    }

    #[test]
    fn test_lines_per_direction() {
        let board = sample();

        assert_eq!(board.line(Direction::Left, 0), [2, 4, 8, 16]);
        assert_eq!(board.line(Direction::Right, 0), [16, 8, 4, 2]);
        assert_eq!(board.line(Direction::Up, 0), [2, 0, 32, 0]);
        assert_eq!(board.line(Direction::Down, 3), [2048, 0, 0, 16]);
    }

    #[test]
    fn test_set_line_inverts_line() {
        for direction in Direction::ALL {
            for index in 0..SIZE {
                let mut board = sample();
                let line = board.line(direction, index);
                board.set_line(direction, index, line);
                assert_eq!(board, sample(), "{direction} line {index}");
            }
        }

        let mut board = Board::empty();
        board.set_line(Direction::Down, 1, [4, 2, 0, 0]);
        assert_eq!(board.get(3, 1), 4);
        assert_eq!(board.get(2, 1), 2);
        assert_eq!(board.get(0, 1), 0);
    }

    #[test]
    fn test_cell_queries() {
        let board = sample();

        assert_eq!(board.empty_count(), 8);
        assert_eq!(board.empty_cells().len(), 8);
        assert_eq!(board.empty_cells()[0], (1, 0));
        assert!(!board.is_full());
        assert_eq!(board.max_tile(), 2048);
        assert!(board.contains(2048));
        assert!(!board.contains(4096));

        assert_eq!(Board::empty().max_tile(), 0);
        assert_eq!(Board::empty().empty_count(), 16);
    }

    #[test]
    fn test_adjacent_pairs() {
        let checker = Board::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ])
        .unwrap();
        assert!(checker.is_full());
        assert!(!checker.has_adjacent_pair());

        let vertical = Board::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 8],
            [4, 2, 4, 8],
        ])
        .unwrap();
        assert!(vertical.has_adjacent_pair());
    }

    #[test]
    fn test_direction_from_key() {
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(Direction::from_key("UP"), Some(Direction::Up));
        assert_eq!(Direction::from_key("Enter"), None);

        assert_eq!("right".parse::<Direction>(), Ok(Direction::Right));
        assert!("diagonal".parse::<Direction>().is_err());
        assert_eq!(Direction::Up.to_string(), "up");
    }

    #[test]
    fn test_display() {
        let text = sample().to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "    .   128     .  2048");
    }

    #[test]
    fn test_serde_validates() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.starts_with("[[2,4,8,16]"));

        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());

        let bad = "[[3,0,0,0],[0,0,0,0],[0,0,0,0],[0,0,0,0]]";
        assert!(serde_json::from_str::<Board>(bad).is_err());
    }
}
