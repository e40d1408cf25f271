use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use super::error::{Result, TicTacToeError};
use super::types::{Mark, Position};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn reset(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    pub fn in_bounds(pos: Position) -> bool {
        pos.row < BOARD_SIZE && pos.col < BOARD_SIZE
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        if !Self::in_bounds(pos) {
            return None;
        }
        Some(self.cells[pos.row][pos.col])
    }

    /// Unchecked read for positions that come from the board itself.
    pub(crate) fn at(&self, pos: Position) -> Mark {
        self.cells[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: Position, mark: Mark) -> Result<()> {
        if !Self::in_bounds(pos) {
            return Err(TicTacToeError::OutOfBounds(pos));
        }
        self.cells[pos.row][pos.col] = mark;
        Ok(())
    }

    pub fn is_valid_move(&self, pos: Position) -> bool {
        self.get(pos) == Some(Mark::Empty)
    }

    /// Empty cells in row-major order. Each call starts a fresh scan.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
            .filter(|&pos| self.at(pos) == Mark::Empty)
    }

    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_empty()).count())
            .sum()
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Puts `mark` on an empty cell for as long as the returned guard lives.
    ///
    /// The cell is cleared again when the guard is dropped, whichever way the
    /// caller leaves its scope, so speculative moves cannot leak.
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<PlacedMark<'_>> {
        match self.get(pos) {
            None => Err(TicTacToeError::OutOfBounds(pos)),
            Some(Mark::Empty) => {
                self.cells[pos.row][pos.col] = mark;
                Ok(PlacedMark { board: self, pos })
            }
            Some(_) => Err(TicTacToeError::CellOccupied(pos)),
        }
    }
}

pub struct PlacedMark<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl Deref for PlacedMark<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for PlacedMark<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for PlacedMark<'_> {
    fn drop(&mut self) {
        self.board.cells[self.pos.row][self.pos.col] = Mark::Empty;
    }
}

impl FromStr for Board {
    type Err = TicTacToeError;

    /// Accepts `X`, `O` and `.` cells in row-major order; whitespace and `/`
    /// between rows are ignored, so `"X.. .X. OO."` and `"X../.X./OO."` are equal.
    fn from_str(s: &str) -> Result<Self> {
        let marks = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .map(|c| {
                Mark::from_char(c)
                    .ok_or_else(|| TicTacToeError::InvalidBoard(format!("unexpected cell '{}'", c)))
            })
            .collect::<Result<Vec<Mark>>>()?;

        if marks.len() != CELL_COUNT {
            return Err(TicTacToeError::InvalidBoard(format!(
                "expected {} cells, got {}",
                CELL_COUNT,
                marks.len()
            )));
        }

        let mut board = Board::new();
        for (i, mark) in marks.into_iter().enumerate() {
            board.cells[i / BOARD_SIZE][i % BOARD_SIZE] = mark;
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
