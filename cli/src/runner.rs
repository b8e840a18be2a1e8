use std::io::Write;

use tictactoe_engine::{
    EmptyPlayer, Game, GameError, HeuristicLevel, HeuristicPlayer, OraclePlayer, Player,
    RandomPlayer, SessionRng, Side, Tally, log_info,
};

use crate::config::{MatchConfig, PlayerChoice};
use crate::human::HumanPlayer;
use crate::render::{describe, replay};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub seed: u64,
    pub x_name: String,
    pub o_name: String,
    pub x_tally: Tally,
    pub o_tally: Tally,
}

impl std::fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "X: {} {}", self.x_name, self.x_tally)?;
        write!(f, "O: {} {}", self.o_name, self.o_tally)
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum RunError {
    #[display("game failed: {_0}")]
    Game(GameError),
    #[display("failed to write output: {_0}")]
    Output(std::io::Error),
}

pub fn build_player(choice: PlayerChoice, rng: &mut SessionRng) -> Box<dyn Player> {
    match choice {
        PlayerChoice::Empty => Box::new(EmptyPlayer),
        PlayerChoice::Random => Box::new(RandomPlayer::new(rng.fork())),
        PlayerChoice::PrettyGood => {
            Box::new(HeuristicPlayer::new(HeuristicLevel::PrettyGood, rng.fork()))
        }
        PlayerChoice::VeryGood => {
            Box::new(HeuristicPlayer::new(HeuristicLevel::VeryGood, rng.fork()))
        }
        PlayerChoice::Minimax => Box::new(OraclePlayer::default()),
        PlayerChoice::Human => Box::new(HumanPlayer::stdio()),
    }
}

pub fn run_match<W: Write>(config: &MatchConfig, out: &mut W) -> Result<MatchSummary, RunError> {
    let mut rng = config.seed.map_or_else(SessionRng::from_random, SessionRng::new);
    log_info!(
        "Starting {} games, {:?} vs {:?}, seed {}",
        config.games,
        config.x_player,
        config.o_player,
        rng.seed()
    );

    let x_player = build_player(config.x_player, &mut rng);
    let o_player = build_player(config.o_player, &mut rng);
    let mut game = Game::new(x_player, o_player);

    for _ in 0..config.games {
        let record = game.play()?;
        if config.show_boards {
            writeln!(out, "{}", describe(&record.final_board))?;
            writeln!(out, "Result: {}\n", record.outcome)?;
        }
        if config.replay {
            write!(out, "{}", replay(&record))?;
        }
    }

    Ok(MatchSummary {
        seed: rng.seed(),
        x_name: game.player(Side::X).name().to_string(),
        o_name: game.player(Side::O).name().to_string(),
        x_tally: game.tally(Side::X),
        o_tally: game.tally(Side::O),
    })
}
