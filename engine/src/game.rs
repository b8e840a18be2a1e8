use crate::board::Board;
use crate::encoder::{StateId, encode};
use crate::error::GameError;
use crate::player::{
    Player, PlayerView, REWARD_FORFEIT, REWARD_LOSS, REWARD_ONGOING, REWARD_WIN,
};
use crate::types::{GameOutcome, Side};
use crate::{log_debug, log_info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: GameOutcome, side: Side) {
        match outcome.winner() {
            Some(winner) if winner == side => self.wins += 1,
            Some(_) => self.losses += 1,
            None => self.ties += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "w/l/t={}/{}/{}", self.wins, self.losses, self.ties)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    /// Positions played, in order. An illegal final move is included.
    pub moves: Vec<usize>,
    /// X-perspective state id after every legal ply.
    pub states: Vec<StateId>,
    pub final_board: Board,
}

/// Runs games between two owned players, X always moving first.
pub struct Game {
    x_player: Box<dyn Player>,
    o_player: Box<dyn Player>,
    x_tally: Tally,
    o_tally: Tally,
    games_played: u32,
}

impl Game {
    pub fn new(x_player: Box<dyn Player>, o_player: Box<dyn Player>) -> Self {
        Self {
            x_player,
            o_player,
            x_tally: Tally::default(),
            o_tally: Tally::default(),
            games_played: 0,
        }
    }

    pub fn player(&self, side: Side) -> &dyn Player {
        match side {
            Side::X => self.x_player.as_ref(),
            Side::O => self.o_player.as_ref(),
        }
    }

    pub fn tally(&self, side: Side) -> Tally {
        match side {
            Side::X => self.x_tally,
            Side::O => self.o_tally,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    fn player_mut(&mut self, side: Side) -> &mut dyn Player {
        match side {
            Side::X => self.x_player.as_mut(),
            Side::O => self.o_player.as_mut(),
        }
    }

    fn notify(&mut self, board: &Board, mover: Side, mover_reward: i32, opponent_reward: i32) {
        self.player_mut(mover)
            .update(&PlayerView::new(board, mover), mover_reward);
        self.player_mut(mover.opponent())
            .update(&PlayerView::new(board, mover.opponent()), opponent_reward);
    }

    /// Plays one full game. Only an unreachable board state is an error;
    /// illegal moves end the game as a forfeit.
    pub fn play(&mut self) -> Result<GameRecord, GameError> {
        self.x_player.reset();
        self.o_player.reset();
        self.games_played += 1;

        let mut board = Board::new();
        let mut moves = Vec::new();
        let mut states = Vec::new();
        let mut mover = Side::X;

        let outcome = loop {
            let choice = self.player_mut(mover).choose_move(&PlayerView::new(&board, mover));
            if let Some(position) = choice {
                moves.push(position);
            }

            let placed = match choice {
                Some(position) => board.place(position, mover.mark()),
                None => Err(GameError::NoMove),
            };
            if let Err(e) = placed {
                log_debug!("{} ({}) forfeits: {}", self.player(mover).name(), mover, e);
                self.notify(&board, mover, REWARD_FORFEIT, REWARD_WIN);
                break GameOutcome::Forfeit(mover);
            }
            states.push(encode(&board, Side::X));

            let outcome = board.outcome()?;
            match outcome {
                GameOutcome::XWins | GameOutcome::OWins => {
                    self.notify(&board, mover, REWARD_WIN, REWARD_LOSS);
                    break outcome;
                }
                GameOutcome::Draw => {
                    self.notify(&board, mover, REWARD_ONGOING, REWARD_ONGOING);
                    break outcome;
                }
                GameOutcome::Ongoing => {
                    self.notify(&board, mover, REWARD_ONGOING, REWARD_ONGOING);
                }
                // forfeits are decided by the loop above, never by the board
                GameOutcome::Forfeit(_) => return Err(GameError::UnreachableState),
            }
            mover = mover.opponent();
        };

        self.x_tally.record(outcome, Side::X);
        self.o_tally.record(outcome, Side::O);
        log_info!(
            "Game {}: {} after {} moves ({} {}, {} {})",
            self.games_played,
            outcome,
            board.move_count(),
            self.x_player.name(),
            self.x_tally,
            self.o_player.name(),
            self.o_tally
        );

        Ok(GameRecord {
            outcome,
            moves,
            states,
            final_board: board,
        })
    }
}
