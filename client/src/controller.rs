use std::io::{self, BufRead, Write};

use thiserror::Error;
use tictactoe_engine::games::SessionRng;
use tictactoe_engine::tictactoe::{
    BotInput, BotType, GameStatus, Mark, Position, SearchSettings, TicTacToeError,
    TicTacToeGameState, analyze_moves, calculate_move, compute_move_with,
};
use tictactoe_engine::{log, log_debug};

use crate::command::{Command, HELP_TEXT};
use crate::config::{ClientConfig, FirstPlayer, PlayerProfiles};
use crate::render::render_board;
use crate::scoreboard::Scoreboard;

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Engine error: {0}")]
    Engine(#[from] TicTacToeError),
}

struct Bot {
    bot_type: BotType,
    mark: Mark,
}

/// Drives one terminal session: reads commands, applies human moves, lets the
/// bot answer and keeps the scoreboard.
pub struct GameController<R, W> {
    input: R,
    output: W,
    state: TicTacToeGameState,
    settings: SearchSettings,
    bot: Option<Bot>,
    profiles: PlayerProfiles,
    scoreboard: Scoreboard,
    rng: SessionRng,
}

impl<R: BufRead, W: Write> GameController<R, W> {
    pub fn new(config: &ClientConfig, input: R, output: W) -> Self {
        let bot = config.bot.bot_type().map(|bot_type| Bot {
            bot_type,
            mark: match config.first_player {
                FirstPlayer::Human => Mark::O,
                FirstPlayer::Bot => Mark::X,
            },
        });

        Self {
            input,
            output,
            state: TicTacToeGameState::new(Mark::X),
            settings: config.search,
            bot,
            profiles: config.players.clone(),
            scoreboard: Scoreboard::default(),
            rng: SessionRng::from_optional_seed(config.seed),
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn is_bot_turn(&self) -> bool {
        self.bot
            .as_ref()
            .is_some_and(|bot| bot.mark == self.state.current_mark())
    }

    pub fn run(&mut self) -> Result<(), ControllerError> {
        log!("Session started (rng seed {})", self.rng.seed());
        writeln!(self.output, "{}", HELP_TEXT)?;
        self.show_board()?;

        loop {
            if self.state.status() == GameStatus::Playing && self.is_bot_turn() {
                self.play_bot_move()?;
                continue;
            }

            self.prompt()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match Command::parse(&line) {
                Ok(Command::Move(pos)) => self.play_human_move(pos)?,
                Ok(Command::Hint) => self.show_hint()?,
                Ok(Command::NewGame) => self.new_game()?,
                Ok(Command::Score) => writeln!(self.output, "{}", self.scoreboard)?,
                Ok(Command::Help) => writeln!(self.output, "{}", HELP_TEXT)?,
                Ok(Command::Quit) => break,
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }

        log!("Session finished: {}", self.scoreboard);
        writeln!(self.output, "Final score: {}", self.scoreboard)?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<(), ControllerError> {
        if self.state.status() == GameStatus::Playing {
            let mark = self.state.current_mark();
            write!(
                self.output,
                "{} ({}) > ",
                self.profiles.name(mark),
                self.profiles.symbol(mark)
            )?;
        } else {
            write!(self.output, "> ")?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn show_board(&mut self) -> Result<(), ControllerError> {
        write!(self.output, "{}", render_board(self.state.board(), &self.profiles))?;
        Ok(())
    }

    fn play_human_move(&mut self, pos: Position) -> Result<(), ControllerError> {
        let mark = self.state.current_mark();
        match self.state.place_mark(mark, pos) {
            Ok(status) => self.after_move(mark, pos, status),
            Err(
                err @ (TicTacToeError::OutOfBounds(_)
                | TicTacToeError::CellOccupied(_)
                | TicTacToeError::GameOver
                | TicTacToeError::NotYourTurn { .. }),
            ) => {
                writeln!(self.output, "{}", err)?;
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn play_bot_move(&mut self) -> Result<(), ControllerError> {
        let Some(bot_type) = self.bot.as_ref().map(|bot| bot.bot_type) else {
            return Ok(());
        };
        let mark = self.state.current_mark();
        let input = BotInput::from_game_state(&self.state);
        let pos = calculate_move(bot_type, input, &self.settings, &mut self.rng)?;
        let status = self.state.place_mark(mark, pos)?;
        writeln!(self.output, "{} plays {}", self.profiles.name(mark), pos)?;
        self.after_move(mark, pos, status)
    }

    fn after_move(
        &mut self,
        mark: Mark,
        pos: Position,
        status: GameStatus,
    ) -> Result<(), ControllerError> {
        log_debug!("{} -> {} ({:?})", mark, pos, status);
        self.show_board()?;

        match status {
            GameStatus::Playing => {}
            GameStatus::CrossWon | GameStatus::NoughtWon => {
                self.scoreboard.record(status);
                writeln!(
                    self.output,
                    "{} wins! Type `new` to play again.",
                    self.profiles.name(mark)
                )?;
                log!("Game over: {} won in {} moves", mark, self.state.move_count());
            }
            GameStatus::Draw => {
                self.scoreboard.record(status);
                writeln!(self.output, "It's a draw! Type `new` to play again.")?;
                log!("Game over: draw");
            }
        }
        Ok(())
    }

    fn show_hint(&mut self) -> Result<(), ControllerError> {
        if self.state.status() != GameStatus::Playing {
            writeln!(self.output, "The game is over. Type `new` to play again.")?;
            return Ok(());
        }

        let mark = self.state.current_mark();
        let Some(opponent) = mark.opponent() else {
            return Ok(());
        };
        let mut board = self.state.board().clone();
        let scores = analyze_moves(&self.settings, &mut board, mark, opponent)?;
        let best = compute_move_with(&self.settings, &mut board, mark, opponent)?;

        for (pos, score) in scores {
            writeln!(self.output, "  {} -> {}", pos, score)?;
        }
        writeln!(self.output, "Suggested move: {} {}", best.row, best.col)?;
        Ok(())
    }

    fn new_game(&mut self) -> Result<(), ControllerError> {
        self.state.reset();
        log!("New game started");
        writeln!(self.output, "New game.")?;
        self.show_board()
    }
}
