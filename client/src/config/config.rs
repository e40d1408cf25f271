use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_engine::tictactoe::{BotType, SearchSettings};

use super::{LoggingConfig, PlayerProfiles};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: PathBuf,
) -> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BotMode {
    Minimax,
    Random,
    /// Two humans share the terminal.
    None,
}

impl BotMode {
    pub fn bot_type(&self) -> Option<BotType> {
        match self {
            BotMode::Minimax => Some(BotType::Minimax),
            BotMode::Random => Some(BotType::Random),
            BotMode::None => None,
        }
    }
}

/// Cross always opens; this picks who holds the cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    Human,
    Bot,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ClientConfig {
    pub bot: BotMode,
    pub first_player: FirstPlayer,
    pub search: SearchSettings,
    pub players: PlayerProfiles,
    pub logging: LoggingConfig,
    pub seed: Option<u64>,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.search.validate()?;
        self.players.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            bot: BotMode::Minimax,
            first_player: FirstPlayer::Human,
            search: SearchSettings::default(),
            players: PlayerProfiles::default(),
            logging: LoggingConfig::default(),
            seed: None,
        }
    }
}
