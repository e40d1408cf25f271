use std::fmt;

use tictactoe_engine::tictactoe::{GameStatus, Mark};

/// In-memory tally for one run of the program.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub cross_wins: u32,
    pub nought_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::CrossWon => self.cross_wins += 1,
            GameStatus::NoughtWon => self.nought_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::Playing => {}
        }
    }

    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.cross_wins,
            Mark::O => self.nought_wins,
            Mark::Empty => 0,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.cross_wins + self.nought_wins + self.draws
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X: {}  O: {}  draws: {}",
            self.cross_wins, self.nought_wins, self.draws
        )
    }
}
