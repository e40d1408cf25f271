//! Static evaluation of a position from the searching side's point of view.
//!
//! Every open line is worth `10^(k-1)` for `k` marks of one side and nothing
//! once both sides have a mark in it. A centre cell adds a small bonus.

use super::board::{BOARD_SIZE, Board};
use super::types::{Mark, Position};
use super::win_detector::WINNING_LINES;

pub const CENTER_BONUS: i32 = 3;

/// Indexed by the number of marks of a single side in an otherwise empty line.
const LINE_WEIGHTS: [i32; BOARD_SIZE + 1] = line_weights();

const fn line_weights() -> [i32; BOARD_SIZE + 1] {
    let mut weights = [0; BOARD_SIZE + 1];
    let mut k = 1;
    let mut weight = 1;
    while k <= BOARD_SIZE {
        weights[k] = weight;
        weight *= 10;
        k += 1;
    }
    weights
}

const fn center() -> Option<Position> {
    if BOARD_SIZE % 2 == 1 {
        Some(Position::new(BOARD_SIZE / 2, BOARD_SIZE / 2))
    } else {
        None
    }
}

/// Positive favours `my_mark`, negative favours `opp_mark`.
pub fn evaluate(board: &Board, my_mark: Mark, opp_mark: Mark) -> i32 {
    let mut score = 0;

    if let Some(center) = center() {
        let cell = board.at(center);
        if cell == my_mark {
            score += CENTER_BONUS;
        } else if cell == opp_mark {
            score -= CENTER_BONUS;
        }
    }

    for line in &WINNING_LINES {
        score += evaluate_line(board, line, my_mark, opp_mark);
    }

    score
}

pub fn evaluate_line(
    board: &Board,
    line: &[Position; BOARD_SIZE],
    my_mark: Mark,
    opp_mark: Mark,
) -> i32 {
    let mut mine = 0;
    let mut theirs = 0;

    for &pos in line {
        let cell = board.at(pos);
        if cell == my_mark {
            mine += 1;
        } else if cell == opp_mark {
            theirs += 1;
        }
        if mine > 0 && theirs > 0 {
            return 0;
        }
    }

    if mine > 0 {
        LINE_WEIGHTS[mine]
    } else {
        -LINE_WEIGHTS[theirs]
    }
}
