mod config;
mod logging_config;
mod player_profile;

pub use config::{BotMode, ClientConfig, FirstPlayer, default_config_path, get_config_manager};
pub use logging_config::LoggingConfig;
pub use player_profile::{PlayerProfile, PlayerProfiles};
