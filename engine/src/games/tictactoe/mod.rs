mod board;
mod bot_controller;
mod error;
mod game_state;
mod heuristic;
mod minimax;
mod settings;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, PlacedMark};
pub use bot_controller::{
    BotInput, BotType, analyze_moves, calculate_move, compute_move, compute_move_with,
};
pub use error::{Result, TicTacToeError};
pub use game_state::TicTacToeGameState;
pub use heuristic::{CENTER_BONUS, evaluate, evaluate_line};
pub use minimax::{MinimaxSearch, SearchNode};
pub use settings::{DEFAULT_ENDGAME_EMPTY_CELLS, DEFAULT_SEARCH_DEPTH, SearchSettings};
pub use types::{GameStatus, Mark, Position, WinningLine};
pub use win_detector::{
    CellMask, LINE_COUNT, WINNING_LINES, check_win, check_win_with_line, has_won, is_board_full,
    is_decided, mark_mask,
};
