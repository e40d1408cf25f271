use thiserror::Error;

use super::types::{Mark, Position};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TicTacToeError {
    #[error("Invalid board state: no legal moves or game already decided")]
    InvalidState,

    #[error("Search committed no move although {legal_moves} legal moves exist")]
    DegenerateSearchResult { legal_moves: usize },

    #[error("Invalid seeds: mine={mine}, opponent={opponent}")]
    InvalidSeeds { mine: Mark, opponent: Mark },

    #[error("Position {0} is out of bounds")]
    OutOfBounds(Position),

    #[error("Cell {0} is already marked")]
    CellOccupied(Position),

    #[error("Game is already over")]
    GameOver,

    #[error("Not your turn: expected {expected}, got {got}")]
    NotYourTurn { expected: Mark, got: Mark },

    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    #[error("Invalid search settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, TicTacToeError>;
