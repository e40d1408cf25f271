use tictactoe_engine::tictactoe::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Position),
    Hint,
    NewGame,
    Score,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  <row> <col>   place your mark (0-based, e.g. `1 1` or `1,1`)
  hint          show the engine's evaluation of every free cell
  new           start a new game
  score         show the session scoreboard
  help          show this help
  quit          leave";

impl Command {
    pub fn parse(line: &str) -> Result<Command, String> {
        let trimmed = line.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" => return Err("Enter a move or `help`".to_string()),
            "hint" => return Ok(Command::Hint),
            "new" | "restart" => return Ok(Command::NewGame),
            "score" => return Ok(Command::Score),
            "help" | "?" => return Ok(Command::Help),
            "quit" | "exit" | "q" => return Ok(Command::Quit),
            _ => {}
        }

        let parts: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        if parts.len() != 2 {
            return Err(format!("Unknown command `{}`; type `help`", trimmed));
        }

        let row = parts[0]
            .parse::<usize>()
            .map_err(|_| format!("Invalid row `{}`", parts[0]))?;
        let col = parts[1]
            .parse::<usize>()
            .map_err(|_| format!("Invalid column `{}`", parts[1]))?;

        Ok(Command::Move(Position::new(row, col)))
    }
}
