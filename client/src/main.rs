mod command;
mod config;
mod controller;
mod render;
mod scoreboard;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tictactoe_engine::{log, logger};

use config::{BotMode, FirstPlayer, default_config_path, get_config_manager};
use controller::GameController;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a minimax bot in the terminal")]
struct Args {
    /// YAML config file; defaults are used when it does not exist.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    bot: Option<BotMode>,

    #[arg(long, value_enum)]
    first: Option<FirstPlayer>,

    /// Seed for the random bot.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(default_config_path);
    let mut config = get_config_manager(config_path.clone()).get_config()?;

    if let Some(bot) = args.bot {
        config.bot = bot;
    }
    if let Some(first) = args.first {
        config.first_player = first;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let prefix = if args.use_log_prefix {
        Some(config.logging.prefix.clone().unwrap_or_else(|| "TicTacToe".to_string()))
    } else {
        config.logging.prefix.clone()
    };
    logger::init_logger(prefix, config.logging.level);

    log!(
        "Config loaded from {} (bot {:?}, depth {})",
        config_path.display(),
        config.bot,
        config.search.depth
    );

    let stdin = io::stdin();
    let mut controller = GameController::new(&config, stdin.lock(), io::stdout());
    controller.run()?;

    Ok(())
}
