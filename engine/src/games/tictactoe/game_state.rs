use super::board::Board;
use super::error::{Result, TicTacToeError};
use super::types::{GameStatus, Mark, Position, WinningLine};
use super::win_detector::{check_win_with_line, has_won, is_board_full};

/// Board plus turn order and the `Playing -> {CrossWon, NoughtWon, Draw}`
/// transitions. Human and bot moves go through the same `place_mark`.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    first_mark: Mark,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<Position>,
    winning_line: Option<WinningLine>,
    move_count: usize,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}

impl TicTacToeGameState {
    /// `first_mark` must be `X` or `O`; anything else starts with `X`.
    pub fn new(first_mark: Mark) -> Self {
        let first_mark = if first_mark == Mark::Empty { Mark::X } else { first_mark };
        Self {
            board: Board::new(),
            first_mark,
            current_mark: first_mark,
            status: GameStatus::Playing,
            last_move: None,
            winning_line: None,
            move_count: 0,
        }
    }

    /// Resumes from an arbitrary position with `to_move` on turn.
    pub fn from_board(board: Board, to_move: Mark) -> Result<Self> {
        if to_move == Mark::Empty {
            return Err(TicTacToeError::InvalidSeeds {
                mine: to_move,
                opponent: to_move,
            });
        }
        let move_count = board.rows().iter().flatten().filter(|m| !m.is_empty()).count();
        let mut state = Self {
            board,
            first_mark: to_move,
            current_mark: to_move,
            status: GameStatus::Playing,
            last_move: None,
            winning_line: None,
            move_count,
        };
        state.winning_line = check_win_with_line(&state.board);
        state.status = match state.winning_line {
            Some(line) => GameStatus::won_by(line.mark).unwrap_or(GameStatus::Playing),
            None if is_board_full(&state.board) => GameStatus::Draw,
            None => GameStatus::Playing,
        };
        Ok(state)
    }

    /// Clears the board for a new game, keeping who moves first.
    pub fn reset(&mut self) {
        *self = Self::new(self.first_mark);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn place_mark(&mut self, mark: Mark, pos: Position) -> Result<GameStatus> {
        if self.status != GameStatus::Playing {
            return Err(TicTacToeError::GameOver);
        }

        if mark != self.current_mark {
            return Err(TicTacToeError::NotYourTurn {
                expected: self.current_mark,
                got: mark,
            });
        }

        match self.board.get(pos) {
            None => return Err(TicTacToeError::OutOfBounds(pos)),
            Some(Mark::Empty) => {}
            Some(_) => return Err(TicTacToeError::CellOccupied(pos)),
        }

        self.board.set(pos, mark)?;
        self.last_move = Some(pos);
        self.move_count += 1;

        self.check_game_over(mark);

        if self.status == GameStatus::Playing {
            self.switch_turn();
        }

        Ok(self.status)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self, mover: Mark) {
        if has_won(&self.board, mover) {
            self.winning_line = check_win_with_line(&self.board);
            self.status = GameStatus::won_by(mover).unwrap_or(GameStatus::Playing);
            return;
        }

        if is_board_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }

    pub fn get_winner(&self) -> Option<Mark> {
        self.status.winner()
    }
}
