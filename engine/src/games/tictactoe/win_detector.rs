use super::board::{BOARD_SIZE, Board, CELL_COUNT};
use super::types::{Mark, Position, WinningLine};

/// One bit per cell, `row * BOARD_SIZE + col`.
pub type CellMask = u16;

const _: () = assert!(CELL_COUNT <= CellMask::BITS as usize);

pub const LINE_COUNT: usize = 2 * BOARD_SIZE + 2;

/// Rows, then columns, then the main diagonal and the anti-diagonal.
pub const WINNING_LINES: [[Position; BOARD_SIZE]; LINE_COUNT] = build_lines();

const LINE_MASKS: [CellMask; LINE_COUNT] = build_masks();

const fn build_lines() -> [[Position; BOARD_SIZE]; LINE_COUNT] {
    let mut lines = [[Position::new(0, 0); BOARD_SIZE]; LINE_COUNT];
    let mut i = 0;
    while i < BOARD_SIZE {
        let mut j = 0;
        while j < BOARD_SIZE {
            lines[i][j] = Position::new(i, j);
            lines[BOARD_SIZE + i][j] = Position::new(j, i);
            j += 1;
        }
        lines[2 * BOARD_SIZE][i] = Position::new(i, i);
        lines[2 * BOARD_SIZE + 1][i] = Position::new(i, BOARD_SIZE - 1 - i);
        i += 1;
    }
    lines
}

const fn build_masks() -> [CellMask; LINE_COUNT] {
    let mut masks = [0; LINE_COUNT];
    let mut i = 0;
    while i < LINE_COUNT {
        let mut j = 0;
        while j < BOARD_SIZE {
            masks[i] |= cell_bit(WINNING_LINES[i][j]);
            j += 1;
        }
        i += 1;
    }
    masks
}

const fn cell_bit(pos: Position) -> CellMask {
    1 << (pos.row * BOARD_SIZE + pos.col)
}

pub fn mark_mask(board: &Board, mark: Mark) -> CellMask {
    let mut mask = 0;
    for (row, cells) in board.rows().iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == mark {
                mask |= cell_bit(Position::new(row, col));
            }
        }
    }
    mask
}

pub fn has_won(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    let pattern = mark_mask(board, mark);
    LINE_MASKS.iter().any(|&line| pattern & line == line)
}

pub fn is_board_full(board: &Board) -> bool {
    board.is_full()
}

pub fn check_win(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O].into_iter().find(|&mark| has_won(board, mark))
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for mark in [Mark::X, Mark::O] {
        let pattern = mark_mask(board, mark);
        if let Some(index) = LINE_MASKS.iter().position(|&line| pattern & line == line) {
            let line = &WINNING_LINES[index];
            return Some(WinningLine::new(mark, line[0], line[BOARD_SIZE - 1]));
        }
    }
    None
}

/// True once either side has a full line or no empty cell is left.
pub fn is_decided(board: &Board) -> bool {
    check_win(board).is_some() || is_board_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_line_masks_cover_expected_patterns() {
        assert_eq!(LINE_MASKS[0], 0b000_000_111);
        assert_eq!(LINE_MASKS[BOARD_SIZE], 0b001_001_001);
        assert_eq!(LINE_MASKS[2 * BOARD_SIZE], 0b100_010_001);
        assert_eq!(LINE_MASKS[2 * BOARD_SIZE + 1], 0b001_010_100);
    }

    #[test]
    fn test_every_line_wins() {
        for line in WINNING_LINES {
            let mut b = Board::new();
            for pos in line {
                b.set(pos, Mark::O).unwrap();
            }
            assert!(has_won(&b, Mark::O), "line {:?} should win", line);
            assert!(!has_won(&b, Mark::X));
        }
    }

    #[test]
    fn test_two_in_line_does_not_win() {
        let b = board("XX. OO. ...");
        assert!(!has_won(&b, Mark::X));
        assert!(!has_won(&b, Mark::O));
        assert_eq!(check_win(&b), None);
        assert!(!is_decided(&b));
    }

    #[test]
    fn test_empty_never_wins() {
        assert!(!has_won(&Board::new(), Mark::Empty));
    }

    #[test]
    fn test_check_win_with_line_reports_endpoints() {
        let b = board("..X .XO XO.");
        let line = check_win_with_line(&b).unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.start, Position::new(0, 2));
        assert_eq!(line.end, Position::new(2, 0));
    }

    #[test]
    fn test_full_board_without_winner_is_draw() {
        let b = board("XOX XOO OXX");
        assert!(is_board_full(&b));
        assert_eq!(check_win(&b), None);
        assert!(is_decided(&b));
    }

    #[test]
    fn test_win_on_full_board_is_reported() {
        let b = board("XXX OOX OXO");
        assert_eq!(check_win(&b), Some(Mark::X));
    }
}
