use serde::{Deserialize, Serialize};
use tictactoe_engine::config::Validate;
use tictactoe_engine::tictactoe::Mark;

/// Presentation data for one side. Lives in the client, never on the board.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PlayerProfile {
    pub name: String,
    pub symbol: char,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>, symbol: char) -> Self {
        Self {
            name: name.into(),
            symbol,
        }
    }
}

impl Validate for PlayerProfile {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("player name must not be empty".to_string());
        }
        if self.symbol.is_whitespace() || self.symbol == '.' {
            return Err(format!("'{}' cannot be used as a player symbol", self.symbol));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PlayerProfiles {
    pub cross: PlayerProfile,
    pub nought: PlayerProfile,
}

impl PlayerProfiles {
    pub fn get(&self, mark: Mark) -> Option<&PlayerProfile> {
        match mark {
            Mark::X => Some(&self.cross),
            Mark::O => Some(&self.nought),
            Mark::Empty => None,
        }
    }

    pub fn get_mut(&mut self, mark: Mark) -> Option<&mut PlayerProfile> {
        match mark {
            Mark::X => Some(&mut self.cross),
            Mark::O => Some(&mut self.nought),
            Mark::Empty => None,
        }
    }

    pub fn name(&self, mark: Mark) -> &str {
        self.get(mark).map_or("nobody", |profile| profile.name.as_str())
    }

    pub fn symbol(&self, mark: Mark) -> char {
        self.get(mark).map_or(' ', |profile| profile.symbol)
    }
}

impl Validate for PlayerProfiles {
    fn validate(&self) -> Result<(), String> {
        self.cross.validate()?;
        self.nought.validate()?;
        if self.cross.symbol == self.nought.symbol {
            return Err("players must use different symbols".to_string());
        }
        Ok(())
    }
}

impl Default for PlayerProfiles {
    fn default() -> Self {
        Self {
            cross: PlayerProfile::new("Cross", 'X'),
            nought: PlayerProfile::new("Nought", 'O'),
        }
    }
}
