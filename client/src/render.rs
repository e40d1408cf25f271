use tictactoe_engine::tictactoe::{BOARD_SIZE, Board, Mark};

use crate::config::PlayerProfiles;

pub fn render_board(board: &Board, profiles: &PlayerProfiles) -> String {
    let mut out = String::from("   ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!(" {}  ", col));
    }
    out.push('\n');

    for (row, cells) in board.rows().iter().enumerate() {
        if row > 0 {
            out.push_str("   ");
            out.push_str(&vec!["---"; BOARD_SIZE].join("+"));
            out.push('\n');
        }
        out.push_str(&format!("{}  ", row));
        let symbols: Vec<String> = cells
            .iter()
            .map(|&mark| match mark {
                Mark::Empty => "   ".to_string(),
                mark => format!(" {} ", profiles.symbol(mark)),
            })
            .collect();
        out.push_str(&symbols.join("|"));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerProfile;

    #[test]
    fn test_render_uses_profile_symbols() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        let profiles = PlayerProfiles {
            cross: PlayerProfile::new("Ann", '#'),
            nought: PlayerProfile::new("Bot", '@'),
        };
        let rendered = render_board(&board, &profiles);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "0   # |   |   ");
        assert_eq!(lines[2], "   ---+---+---");
        assert_eq!(lines[3], "1     | @ |   ");
    }
}
