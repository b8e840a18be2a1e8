use crate::board::{Board, CELL_COUNT};
use crate::error::GameError;
use crate::types::{Mark, Side};

/// Base-3 positional id of a board seen from one side.
pub type StateId = u16;

/// Number of distinct ids, 3^9.
pub const STATE_COUNT: u32 = 19683;

/// Each cell contributes `(sign * cell + 1) * 3^position`, so the same board
/// has a different id for X and for O.
pub fn encode(board: &Board, perspective: Side) -> StateId {
    let sign = perspective.sign();
    board
        .cells()
        .iter()
        .rev()
        .fold(0, |id, cell| id * 3 + (sign * cell.value() + 1) as StateId)
}

/// Inverse of `encode(_, Side::X)`. An O-perspective id decodes to the
/// sign-flipped board.
pub fn decode(id: u32) -> Result<Board, GameError> {
    if id >= STATE_COUNT {
        return Err(GameError::InvalidStateId { id });
    }

    let mut cells = [Mark::Empty; CELL_COUNT];
    let mut rest = id;
    for position in (0..CELL_COUNT).rev() {
        let power = 3u32.pow(position as u32);
        let digit = (rest / power) as i8;
        rest %= power;
        cells[position] = Mark::from_value(digit - 1).ok_or(GameError::InvalidStateId { id })?;
    }
    Ok(Board::from_cells(cells))
}

/// X- and O-perspective ids of the same board, as shown next to a rendered board.
pub fn state_ids(board: &Board) -> (StateId, StateId) {
    (encode(board, Side::X), encode(board, Side::O))
}
