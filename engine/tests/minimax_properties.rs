//! Property tests for the move search over reachable 3x3 positions.

use std::collections::HashSet;

use proptest::prelude::*;
use tictactoe_engine::tictactoe::{
    BOARD_SIZE, Board, Mark, MinimaxSearch, Position, SearchSettings, TicTacToeGameState,
    compute_move, has_won, is_decided,
};

/// Plays `choices` as indices into the remaining empty cells until the game
/// ends or the choices run out. Returns the board and the side to move.
fn playout(choices: &[usize]) -> (Board, Mark) {
    let mut state = TicTacToeGameState::new(Mark::X);
    for &choice in choices {
        if state.status().is_terminal() {
            break;
        }
        let empty: Vec<Position> = state.board().empty_cells().collect();
        let pos = empty[choice % empty.len()];
        let mark = state.current_mark();
        state.place_mark(mark, pos).unwrap();
    }
    (state.board().clone(), state.current_mark())
}

fn arb_position() -> impl Strategy<Value = (Board, Mark)> {
    prop::collection::vec(0usize..9, 0..8).prop_map(|choices| playout(&choices))
}

type Symmetry = fn(Position) -> Position;

fn transform(board: &Board, symmetry: Symmetry) -> Board {
    let mut transformed = Board::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let mark = board.get(Position::new(row, col)).unwrap();
            transformed.set(symmetry(Position::new(row, col)), mark).unwrap();
        }
    }
    transformed
}

/// Quarter turn clockwise.
fn rotate_position(pos: Position) -> Position {
    Position::new(pos.col, BOARD_SIZE - 1 - pos.row)
}

/// Reflection across the vertical center column.
fn mirror_position(pos: Position) -> Position {
    Position::new(pos.row, BOARD_SIZE - 1 - pos.col)
}

fn winning_cells(board: &Board, mark: Mark) -> Vec<Position> {
    let mut scratch = board.clone();
    let candidates: Vec<Position> = board.empty_cells().collect();
    candidates
        .into_iter()
        .filter(|&pos| {
            let placed = scratch.place(pos, mark).unwrap();
            has_won(&placed, mark)
        })
        .collect()
}

fn all_reachable_positions() -> Vec<(Board, Mark)> {
    let mut seen = HashSet::new();
    let mut stack = vec![(Board::new(), Mark::X)];
    let mut positions = Vec::new();

    while let Some((board, to_move)) = stack.pop() {
        if !seen.insert(board.clone()) {
            continue;
        }
        positions.push((board.clone(), to_move));
        if is_decided(&board) {
            continue;
        }
        for pos in board.empty_cells() {
            let mut next = board.clone();
            next.set(pos, to_move).unwrap();
            stack.push((next, to_move.opponent().unwrap()));
        }
    }
    positions
}

#[test]
fn test_reachable_position_count() {
    assert_eq!(all_reachable_positions().len(), 5478);
}

#[test]
fn test_takes_a_winning_cell_whenever_one_exists() {
    let mut checked = 0;
    for (mut board, to_move) in all_reachable_positions() {
        if is_decided(&board) {
            continue;
        }
        let wins = winning_cells(&board, to_move);
        if wins.is_empty() {
            continue;
        }
        let chosen = compute_move(&mut board, to_move, to_move.opponent().unwrap()).unwrap();
        assert!(
            wins.contains(&chosen),
            "{} to move on {} chose {} instead of one of {:?}",
            to_move,
            board,
            chosen,
            wins
        );
        checked += 1;
    }
    assert!(checked > 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_search_leaves_board_unchanged_and_is_repeatable((board, to_move) in arb_position()) {
        prop_assume!(!is_decided(&board));
        let mut working = board.clone();
        let opponent = to_move.opponent().unwrap();

        let first = compute_move(&mut working, to_move, opponent).unwrap();
        prop_assert_eq!(&working, &board);
        let second = compute_move(&mut working, to_move, opponent).unwrap();
        prop_assert_eq!(&working, &board);

        prop_assert_eq!(first, second);
        prop_assert!(board.is_valid_move(first));
    }

    #[test]
    fn prop_pruning_matches_exhaustive_minimax((board, to_move) in arb_position()) {
        prop_assume!(!is_decided(&board));
        let opponent = to_move.opponent().unwrap();

        let mut pruned = MinimaxSearch::new(SearchSettings::default(), to_move, opponent).unwrap();
        let mut full =
            MinimaxSearch::new(SearchSettings::default().exhaustive(), to_move, opponent).unwrap();

        let mut working = board.clone();
        let pruned_node = pruned.search(&mut working).unwrap();
        let full_node = full.search(&mut working).unwrap();

        prop_assert_eq!(pruned_node, full_node);
        prop_assert!(pruned.nodes_visited() <= full.nodes_visited());
        prop_assert_eq!(&working, &board);
    }

    #[test]
    fn prop_search_picks_first_best_scored_candidate((board, to_move) in arb_position()) {
        prop_assume!(!is_decided(&board));
        let opponent = to_move.opponent().unwrap();
        let mut search = MinimaxSearch::new(SearchSettings::default(), to_move, opponent).unwrap();

        let mut working = board.clone();
        let scores = search.analyze(&mut working).unwrap();
        let node = search.search(&mut working).unwrap();

        let best = scores.iter().map(|(_, score)| *score).max().unwrap();
        let first_best = scores.iter().find(|(_, score)| *score == best).map(|(pos, _)| *pos);
        prop_assert_eq!(node.score, best);
        prop_assert_eq!(node.position, first_best);
    }

    /// Rotations and reflections only preserve the choice when the best score
    /// is unique; otherwise row-major tie-breaking may pick a different cell.
    #[test]
    fn prop_symmetry_for_unique_best_move((board, to_move) in arb_position()) {
        prop_assume!(!is_decided(&board));
        let opponent = to_move.opponent().unwrap();
        let mut search = MinimaxSearch::new(SearchSettings::default(), to_move, opponent).unwrap();

        let mut working = board.clone();
        let scores = search.analyze(&mut working).unwrap();
        let best = scores.iter().map(|(_, score)| *score).max().unwrap();
        prop_assume!(scores.iter().filter(|(_, score)| *score == best).count() == 1);

        let chosen = compute_move(&mut working, to_move, opponent).unwrap();
        for symmetry in [rotate_position as Symmetry, mirror_position] {
            let mut transformed = transform(&board, symmetry);
            let transformed_choice = compute_move(&mut transformed, to_move, opponent).unwrap();
            prop_assert_eq!(transformed_choice, symmetry(chosen));
        }
    }
}

#[test]
fn test_rotate_position_cycles_after_four_turns() {
    let pos = Position::new(0, 1);
    let mut current = pos;
    for _ in 0..4 {
        current = rotate_position(current);
    }
    assert_eq!(current, pos);
    assert_eq!(rotate_position(Position::new(0, 0)), Position::new(0, 2));
}

#[test]
fn test_mirror_position_is_an_involution() {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            assert_eq!(mirror_position(mirror_position(pos)), pos);
        }
    }
    assert_eq!(mirror_position(Position::new(2, 0)), Position::new(2, 2));
    assert_eq!(mirror_position(Position::new(1, 1)), Position::new(1, 1));
}
