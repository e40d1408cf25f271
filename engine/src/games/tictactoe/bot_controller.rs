use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use crate::{log_debug, log_warn};
use super::board::Board;
use super::error::{Result, TicTacToeError};
use super::game_state::TicTacToeGameState;
use super::minimax::{MinimaxSearch, SearchNode};
use super::settings::SearchSettings;
use super::types::{Mark, Position};
use super::win_detector::is_decided;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotType {
    Minimax,
    Random,
}

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board().clone(),
            current_mark: state.current_mark(),
        }
    }
}

pub fn calculate_move(
    bot_type: BotType,
    mut input: BotInput,
    settings: &SearchSettings,
    rng: &mut SessionRng,
) -> Result<Position> {
    let opponent_mark = input.current_mark.opponent().ok_or(TicTacToeError::InvalidSeeds {
        mine: input.current_mark,
        opponent: input.current_mark,
    })?;

    match bot_type {
        BotType::Minimax => {
            compute_move_with(settings, &mut input.board, input.current_mark, opponent_mark)
        }
        BotType::Random => calculate_random_move(&input.board, rng),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Result<Position> {
    if is_decided(board) {
        return Err(TicTacToeError::InvalidState);
    }
    let available_moves: Vec<Position> = board.empty_cells().collect();
    let idx = rng.random_range(0..available_moves.len());
    Ok(available_moves[idx])
}

/// Best move for `my_mark` under the default search tuning.
///
/// The board is borrowed for the duration of the search and is identical to
/// its prior state on return.
pub fn compute_move(board: &mut Board, my_mark: Mark, opp_mark: Mark) -> Result<Position> {
    compute_move_with(&SearchSettings::default(), board, my_mark, opp_mark)
}

pub fn compute_move_with(
    settings: &SearchSettings,
    board: &mut Board,
    my_mark: Mark,
    opp_mark: Mark,
) -> Result<Position> {
    let mut search = MinimaxSearch::new(*settings, my_mark, opp_mark)?;

    if is_decided(board) {
        return Err(TicTacToeError::InvalidState);
    }

    let node = search.search(board)?;
    commit_search_result(node, board, my_mark, search.nodes_visited())
}

/// A root that commits no move while legal moves remain is logged and
/// answered with the first legal move in row-major order.
fn commit_search_result(
    node: SearchNode,
    board: &Board,
    my_mark: Mark,
    nodes_visited: usize,
) -> Result<Position> {
    match node.position {
        Some(pos) => {
            log_debug!(
                "Minimax picked {} for {} (score {}, {} nodes)",
                pos,
                my_mark,
                node.score,
                nodes_visited
            );
            Ok(pos)
        }
        None => {
            let degenerate = TicTacToeError::DegenerateSearchResult {
                legal_moves: board.empty_count(),
            };
            let fallback = first_legal_move(board)?;
            log_warn!("{}; falling back to {}", degenerate, fallback);
            Ok(fallback)
        }
    }
}

/// Root candidates with their exact scores, for move hints.
pub fn analyze_moves(
    settings: &SearchSettings,
    board: &mut Board,
    my_mark: Mark,
    opp_mark: Mark,
) -> Result<Vec<(Position, i32)>> {
    let mut search = MinimaxSearch::new(*settings, my_mark, opp_mark)?;
    if is_decided(board) {
        return Err(TicTacToeError::InvalidState);
    }
    search.analyze(board)
}

fn first_legal_move(board: &Board) -> Result<Position> {
    board.empty_cells().next().ok_or(TicTacToeError::InvalidState)
}
