use crate::board::Board;
use crate::error::GameError;
use crate::session_rng::SessionRng;
use crate::types::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicLevel {
    /// Win if possible, otherwise block, otherwise random.
    PrettyGood,
    /// Additionally creates its own forks and occupies the opponent's fork cells.
    VeryGood,
}

/// First empty cell (row-major) that completes a line for `side`.
pub fn winning_move(board: &Board, side: Side) -> Option<usize> {
    let target = 3 * side.sign();
    board.empty_positions().into_iter().find(|&position| {
        board
            .with_move(position, side)
            .map(|next| {
                let (max, min) = next.line_extrema();
                max == target || min == target
            })
            .unwrap_or(false)
    })
}

/// First empty cell where the opponent would complete a line next turn.
pub fn block_opponent(board: &Board, side: Side) -> Option<usize> {
    winning_move(board, side.opponent())
}

/// Number of lines holding two of `side`'s marks and one empty cell.
pub fn open_twos(board: &Board, side: Side) -> usize {
    let target = 2 * side.sign();
    board.line_sums().iter().filter(|&&sum| sum == target).count()
}

/// First empty cell where playing `side` leaves two or more lines one move
/// from completion.
pub fn fork_move(board: &Board, side: Side) -> Option<usize> {
    board.empty_positions().into_iter().find(|&position| {
        board
            .with_move(position, side)
            .map(|next| open_twos(&next, side) >= 2)
            .unwrap_or(false)
    })
}

/// Runs the rule cascade for `level`, falling back to a random empty cell.
pub fn choose_move(
    board: &Board,
    side: Side,
    level: HeuristicLevel,
    rng: &mut SessionRng,
) -> Result<usize, GameError> {
    if let Some(position) = winning_move(board, side) {
        return Ok(position);
    }
    if let Some(position) = block_opponent(board, side) {
        return Ok(position);
    }
    if level == HeuristicLevel::VeryGood {
        if let Some(position) = fork_move(board, side) {
            return Ok(position);
        }
        if let Some(position) = fork_move(board, side.opponent()) {
            return Ok(position);
        }
    }
    board.sample_random_empty(rng)
}
