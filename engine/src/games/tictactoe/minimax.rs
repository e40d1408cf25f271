use crate::config::Validate;
use super::board::Board;
use super::error::{Result, TicTacToeError};
use super::heuristic::evaluate;
use super::settings::SearchSettings;
use super::types::{Mark, Position};
use super::win_detector::is_decided;

/// Result of one search node. `position` is `None` at leaves, where no move
/// was committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub score: i32,
    pub position: Option<Position>,
}

impl SearchNode {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            position: None,
        }
    }
}

/// Depth-limited minimax with alpha-beta pruning, always maximizing for
/// `my_mark`.
///
/// The board is searched in place: every speculative mark is held by a
/// [`PlacedMark`](super::board::PlacedMark) guard and removed before the next
/// candidate is tried, so the board is unchanged when a search returns.
pub struct MinimaxSearch {
    settings: SearchSettings,
    my_mark: Mark,
    opp_mark: Mark,
    nodes_visited: usize,
}

impl MinimaxSearch {
    pub fn new(settings: SearchSettings, my_mark: Mark, opp_mark: Mark) -> Result<Self> {
        if my_mark == opp_mark || my_mark == Mark::Empty || opp_mark == Mark::Empty {
            return Err(TicTacToeError::InvalidSeeds {
                mine: my_mark,
                opponent: opp_mark,
            });
        }
        settings.validate().map_err(TicTacToeError::InvalidSettings)?;
        Ok(Self {
            settings,
            my_mark,
            opp_mark,
            nodes_visited: 0,
        })
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Nodes entered by the most recent `search` or `analyze` call.
    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    pub fn search(&mut self, board: &mut Board) -> Result<SearchNode> {
        self.nodes_visited = 0;
        self.minimax(
            board,
            self.settings.depth,
            self.my_mark,
            i32::MIN,
            i32::MAX,
            true,
        )
    }

    /// Exact score of every root candidate, in enumeration order.
    ///
    /// Each candidate gets its own full window, so scores are comparable with
    /// each other, unlike the bounds seen inside a pruned `search`.
    pub fn analyze(&mut self, board: &mut Board) -> Result<Vec<(Position, i32)>> {
        self.nodes_visited = 0;
        if is_decided(board) {
            return Ok(Vec::new());
        }

        let candidates: Vec<Position> = board.empty_cells().collect();
        let mut scores = Vec::with_capacity(candidates.len());
        for pos in candidates {
            let mut placed = board.place(pos, self.my_mark)?;
            let node = self.minimax(
                &mut placed,
                self.settings.depth.saturating_sub(1),
                self.opp_mark,
                i32::MIN,
                i32::MAX,
                false,
            )?;
            scores.push((pos, node.score));
        }
        Ok(scores)
    }

    fn is_cutoff(&self, board: &Board, depth: usize, is_root: bool) -> bool {
        if depth == 0 {
            return true;
        }
        // The root always expands so that a move is committed whenever one exists.
        if !is_root && board.empty_count() <= self.settings.endgame_empty_cells {
            return true;
        }
        is_decided(board)
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        depth: usize,
        player: Mark,
        mut alpha: i32,
        mut beta: i32,
        is_root: bool,
    ) -> Result<SearchNode> {
        self.nodes_visited += 1;

        if self.is_cutoff(board, depth, is_root) {
            return Ok(SearchNode::leaf(evaluate(board, self.my_mark, self.opp_mark)));
        }

        let maximizing = player == self.my_mark;
        let next_player = if maximizing { self.opp_mark } else { self.my_mark };
        let mut best = SearchNode::leaf(if maximizing { i32::MIN } else { i32::MAX });

        let candidates: Vec<Position> = board.empty_cells().collect();
        for pos in candidates {
            let score = {
                let mut placed = board.place(pos, player)?;
                self.minimax(&mut placed, depth - 1, next_player, alpha, beta, false)?
                    .score
            };

            // Strict comparisons: the first candidate in row-major order wins ties.
            if maximizing {
                if score > best.score {
                    best = SearchNode {
                        score,
                        position: Some(pos),
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = SearchNode {
                        score,
                        position: Some(pos),
                    };
                }
                beta = beta.min(best.score);
            }

            if self.settings.alpha_beta && alpha >= beta {
                break;
            }
        }

        Ok(best)
    }
}
