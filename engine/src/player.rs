use crate::board::Board;
use crate::encoder::{StateId, encode};
use crate::heuristic::{self, HeuristicLevel};
use crate::oracle::MoveOracle;
use crate::session_rng::SessionRng;
use crate::types::Side;
use crate::{log_debug, log_error};

pub const REWARD_ONGOING: i32 = 0;
pub const REWARD_WIN: i32 = 1;
pub const REWARD_LOSS: i32 = -1;
pub const REWARD_FORFEIT: i32 = -100;

/// What a player is shown on its turn: a read-only board plus its own seat.
#[derive(Debug, Clone, Copy)]
pub struct PlayerView<'a> {
    pub board: &'a Board,
    pub side: Side,
    pub state_id: StateId,
}

impl<'a> PlayerView<'a> {
    pub fn new(board: &'a Board, side: Side) -> Self {
        Self {
            board,
            side,
            state_id: encode(board, side),
        }
    }
}

pub trait Player {
    fn name(&self) -> &str;

    /// Cell to play, or `None` to pass. Passing forfeits the game.
    fn choose_move(&mut self, view: &PlayerView<'_>) -> Option<usize>;

    /// Called after every ply with the reward for this player.
    fn update(&mut self, view: &PlayerView<'_>, reward: i32);

    /// Called at the start of every game.
    fn reset(&mut self);
}

/// Never moves; seating it forfeits on its first turn.
#[derive(Debug, Default)]
pub struct EmptyPlayer;

impl Player for EmptyPlayer {
    fn name(&self) -> &str {
        "EmptyPlayer"
    }

    fn choose_move(&mut self, _view: &PlayerView<'_>) -> Option<usize> {
        None
    }

    fn update(&mut self, _view: &PlayerView<'_>, _reward: i32) {}

    fn reset(&mut self) {}
}

pub struct RandomPlayer {
    rng: SessionRng,
}

impl RandomPlayer {
    pub fn new(rng: SessionRng) -> Self {
        Self { rng }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "RandomPlayer"
    }

    fn choose_move(&mut self, view: &PlayerView<'_>) -> Option<usize> {
        view.board.sample_random_empty(&mut self.rng).ok()
    }

    fn update(&mut self, _view: &PlayerView<'_>, _reward: i32) {}

    fn reset(&mut self) {}
}

pub struct HeuristicPlayer {
    level: HeuristicLevel,
    rng: SessionRng,
}

impl HeuristicPlayer {
    pub fn new(level: HeuristicLevel, rng: SessionRng) -> Self {
        Self { level, rng }
    }
}

impl Player for HeuristicPlayer {
    fn name(&self) -> &str {
        match self.level {
            HeuristicLevel::PrettyGood => "PrettyGoodPlayer",
            HeuristicLevel::VeryGood => "VeryGoodPlayer",
        }
    }

    fn choose_move(&mut self, view: &PlayerView<'_>) -> Option<usize> {
        heuristic::choose_move(view.board, view.side, self.level, &mut self.rng).ok()
    }

    fn update(&mut self, _view: &PlayerView<'_>, _reward: i32) {}

    fn reset(&mut self) {}
}

pub struct OraclePlayer {
    oracle: MoveOracle,
}

impl OraclePlayer {
    pub fn new(oracle: MoveOracle) -> Self {
        Self { oracle }
    }
}

impl Default for OraclePlayer {
    fn default() -> Self {
        Self::new(MoveOracle::new())
    }
}

impl Player for OraclePlayer {
    fn name(&self) -> &str {
        "MinimaxPlayer"
    }

    fn choose_move(&mut self, view: &PlayerView<'_>) -> Option<usize> {
        match self.oracle.best_move(view.board, view.side) {
            Ok(position) => Some(position),
            Err(e) => {
                log_error!("Minimax could not choose a move for {}: {}", view.side, e);
                None
            }
        }
    }

    fn update(&mut self, view: &PlayerView<'_>, reward: i32) {
        if reward == REWARD_LOSS {
            log_error!(
                "Minimax player lost as {} in state {}; every line was searched",
                view.side,
                view.state_id
            );
        }
    }

    fn reset(&mut self) {
        log_debug!("Minimax cache holds {} positions", self.oracle.cache_len());
    }
}
