use std::collections::HashMap;

use crate::board::Board;
use crate::encoder::{StateId, encode};
use crate::error::GameError;
use crate::types::Side;

pub const WIN: i8 = 1;
pub const DRAW: i8 = 0;
pub const LOSS: i8 = -1;

/// Exhaustive minimax over the full game tree. The cache is keyed by the
/// board's id from the evaluating side's perspective plus whose turn it is,
/// which makes entries valid for either side.
pub struct MoveOracle {
    cache: Option<HashMap<(StateId, bool), i8>>,
}

impl Default for MoveOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveOracle {
    pub fn new() -> Self {
        Self {
            cache: Some(HashMap::new()),
        }
    }

    pub fn without_cache() -> Self {
        Self { cache: None }
    }

    pub fn cache_len(&self) -> usize {
        self.cache.as_ref().map_or(0, HashMap::len)
    }

    pub fn clear_cache(&mut self) {
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
    }

    /// Cell to play for `mark`. Ties go to the first cell in row-major order.
    pub fn best_move(&mut self, board: &Board, mark: Side) -> Result<usize, GameError> {
        let mut best_move = None;
        let mut best_score = i8::MIN;

        for (position, score) in self.scored_moves(board, mark)? {
            if score > best_score {
                best_score = score;
                best_move = Some(position);
            }
        }

        best_move.ok_or(GameError::BoardFull)
    }

    /// Game value for `mark` of every legal move, in row-major order.
    pub fn scored_moves(
        &mut self,
        board: &Board,
        mark: Side,
    ) -> Result<Vec<(usize, i8)>, GameError> {
        if board.is_full() {
            return Err(GameError::BoardFull);
        }
        if board.outcome()?.is_terminal() {
            return Err(GameError::GameOver);
        }

        board
            .empty_positions()
            .into_iter()
            .map(|position| -> Result<(usize, i8), GameError> {
                let child = board.with_move(position, mark)?;
                Ok((position, self.value(&child, mark, false)?))
            })
            .collect()
    }

    /// Exact value of `board` for `mark`: `WIN`, `DRAW` or `LOSS` under
    /// perfect play. `maximizing` is true when `mark` is the side to move.
    pub fn value(&mut self, board: &Board, mark: Side, maximizing: bool) -> Result<i8, GameError> {
        let outcome = board.outcome()?;
        if outcome.is_terminal() {
            return Ok(match outcome.winner() {
                Some(winner) if winner == mark => WIN,
                Some(_) => LOSS,
                None => DRAW,
            });
        }

        let key = (encode(board, mark), maximizing);
        if let Some(&cached) = self.cache.as_ref().and_then(|cache| cache.get(&key)) {
            return Ok(cached);
        }

        let mover = if maximizing { mark } else { mark.opponent() };
        let mut best = if maximizing { i8::MIN } else { i8::MAX };
        for position in board.empty_positions() {
            let child = board.with_move(position, mover)?;
            let score = self.value(&child, mark, !maximizing)?;
            best = if maximizing { best.max(score) } else { best.min(score) };
        }

        if let Some(cache) = self.cache.as_mut() {
            cache.insert(key, best);
        }
        Ok(best)
    }
}
