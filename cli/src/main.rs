mod config;
mod human;
mod render;
mod runner;

use clap::Parser;
use tictactoe_engine::config::{ConfigManager, Validate};
use tictactoe_engine::logger::{self, LogLevel};
use tictactoe_engine::log_info;

use config::{DEFAULT_CONFIG_PATH, MatchConfig, PlayerChoice};

#[derive(Parser)]
#[command(
    name = "tictactoe",
    about = "Play tic-tac-toe matches between minimax, heuristic, random and human players"
)]
struct Args {
    /// YAML match config; a missing file means defaults
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,
    #[arg(long, value_enum)]
    x: Option<PlayerChoice>,
    #[arg(long, value_enum)]
    o: Option<PlayerChoice>,
    #[arg(long)]
    games: Option<u32>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    show_boards: bool,
    #[arg(long)]
    replay: bool,
    #[arg(long, default_value = "info")]
    log_level: LogLevel,
    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply(&self, mut config: MatchConfig) -> MatchConfig {
        if let Some(x) = self.x {
            config.x_player = x;
        }
        if let Some(o) = self.o {
            config.o_player = o;
        }
        if let Some(games) = self.games {
            config.games = games;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.show_boards |= self.show_boards;
        config.replay |= self.replay;
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Match".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.log_level);

    let manager: ConfigManager<_, MatchConfig> = ConfigManager::from_yaml_file(&args.config);
    let config = args.apply(manager.get_config()?);
    config.validate()?;

    let summary = runner::run_match(&config, &mut std::io::stdout())?;
    log_info!("Match finished, seed {}", summary.seed);
    println!("{}", summary);

    Ok(())
}
