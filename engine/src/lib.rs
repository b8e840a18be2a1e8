pub mod board;
pub mod config;
pub mod encoder;
pub mod error;
pub mod game;
pub mod heuristic;
pub mod logger;
pub mod oracle;
pub mod player;
pub mod session_rng;
pub mod types;

pub use board::Board;
pub use encoder::{StateId, decode, encode, state_ids};
pub use error::GameError;
pub use game::{Game, GameRecord, Tally};
pub use heuristic::HeuristicLevel;
pub use oracle::MoveOracle;
pub use player::{
    EmptyPlayer, HeuristicPlayer, OraclePlayer, Player, PlayerView, RandomPlayer,
    REWARD_FORFEIT, REWARD_LOSS, REWARD_ONGOING, REWARD_WIN,
};
pub use session_rng::SessionRng;
pub use types::{GameOutcome, Mark, Side};
