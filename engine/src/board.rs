use crate::error::GameError;
use crate::session_rng::SessionRng;
use crate::types::{GameOutcome, Mark, Side};

pub const CELL_COUNT: usize = 9;

/// Cell indices of the 3 rows, 3 columns and 2 diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
    move_count: u8,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        let move_count = cells.iter().filter(|&&cell| cell != Mark::Empty).count() as u8;
        Self { cells, move_count }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, position: usize) -> Option<Mark> {
        self.cells.get(position).copied()
    }

    pub fn move_count(&self) -> usize {
        self.move_count as usize
    }

    pub fn is_full(&self) -> bool {
        self.move_count as usize == CELL_COUNT
    }

    pub fn is_empty_at(&self, position: usize) -> bool {
        self.cell(position) == Some(Mark::Empty)
    }

    pub fn empty_positions(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&pos| self.is_empty_at(pos)).collect()
    }

    /// X moves whenever both sides have placed the same number of marks.
    pub fn side_to_move(&self) -> Side {
        let x_count = self.cells.iter().filter(|&&cell| cell == Mark::X).count();
        let o_count = self.cells.iter().filter(|&&cell| cell == Mark::O).count();
        if x_count <= o_count { Side::X } else { Side::O }
    }

    pub fn place(&mut self, position: usize, mark: Mark) -> Result<(), GameError> {
        if mark == Mark::Empty || !self.is_empty_at(position) {
            return Err(GameError::IllegalMove { position });
        }

        self.cells[position] = mark;
        self.move_count += 1;
        Ok(())
    }

    /// Copy of the board with `side` played at `position`.
    pub fn with_move(&self, position: usize, side: Side) -> Result<Board, GameError> {
        let mut next = *self;
        next.place(position, side.mark())?;
        Ok(next)
    }

    pub fn line_sums(&self) -> [i8; 8] {
        LINES.map(|line| line.iter().map(|&pos| self.cells[pos].value()).sum())
    }

    /// Maximum and minimum of the 8 line sums. A max of 3 means X holds a full
    /// line, a min of -3 means O does.
    pub fn line_extrema(&self) -> (i8, i8) {
        let sums = self.line_sums();
        let max = sums.iter().copied().max().unwrap_or(0);
        let min = sums.iter().copied().min().unwrap_or(0);
        (max, min)
    }

    pub fn outcome(&self) -> Result<GameOutcome, GameError> {
        let (max, min) = self.line_extrema();
        match (max == 3, min == -3) {
            (true, true) => Err(GameError::UnreachableState),
            (true, false) => Ok(GameOutcome::XWins),
            (false, true) => Ok(GameOutcome::OWins),
            (false, false) if self.is_full() => Ok(GameOutcome::Draw),
            (false, false) => Ok(GameOutcome::Ongoing),
        }
    }

    pub fn sample_random_empty(&self, rng: &mut SessionRng) -> Result<usize, GameError> {
        if self.is_full() {
            return Err(GameError::BoardFull);
        }
        let empty = self.empty_positions();
        Ok(empty[rng.random_range(0..empty.len())])
    }

    pub fn first_empty(&self) -> Result<usize, GameError> {
        (0..CELL_COUNT)
            .find(|&pos| self.is_empty_at(pos))
            .ok_or(GameError::BoardFull)
    }
}

/// Every position reachable from the empty board by alternating legal play,
/// stopping at terminal positions.
#[cfg(test)]
pub(crate) fn reachable_boards() -> Vec<Board> {
    use std::collections::HashSet;

    fn visit(board: Board, seen: &mut HashSet<Board>, out: &mut Vec<Board>) {
        if !seen.insert(board) {
            return;
        }
        out.push(board);
        if board.outcome().expect("legal play never reaches a double win").is_terminal() {
            return;
        }
        let side = board.side_to_move();
        for pos in board.empty_positions() {
            let next = board.with_move(pos, side).expect("empty cell");
            visit(next, seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    visit(Board::new(), &mut seen, &mut out);
    out
}

#[cfg(test)]
pub(crate) fn board_from_str(layout: &str) -> Board {
    let marks: Vec<Mark> = layout
        .chars()
        .filter_map(|c| match c {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            '.' => Some(Mark::Empty),
            _ => None,
        })
        .collect();
    let cells: [Mark; CELL_COUNT] = marks.try_into().expect("layout must have 9 cells");
    Board::from_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_increments_move_count() {
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();
        board.place(0, Mark::O).unwrap();
        assert_eq!(board.move_count(), 2);
        assert_eq!(board.cell(4), Some(Mark::X));
        assert_eq!(board.side_to_move(), Side::X);
    }

    #[test]
    fn test_place_rejects_occupied_and_out_of_range() {
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();
        assert_eq!(board.place(4, Mark::O), Err(GameError::IllegalMove { position: 4 }));
        assert_eq!(board.place(9, Mark::O), Err(GameError::IllegalMove { position: 9 }));
        assert_eq!(board.place(0, Mark::Empty), Err(GameError::IllegalMove { position: 0 }));
        assert_eq!(board.move_count(), 1);
    }

    #[test]
    fn test_line_extrema() {
        let board = board_from_str(
            "X X .
             O O .
             . . .",
        );
        assert_eq!(board.line_extrema(), (2, -2));
        assert_eq!(board.outcome(), Ok(GameOutcome::Ongoing));
    }

    #[test]
    fn test_mixed_line_never_reaches_three() {
        let board = board_from_str(
            "X X O
             O O X
             X O X",
        );
        let (max, min) = board.line_extrema();
        assert!(max < 3 && min > -3);
        assert_eq!(board.outcome(), Ok(GameOutcome::Draw));
    }

    #[test]
    fn test_outcome_detects_every_line_for_both_sides() {
        for line in LINES {
            for (mark, expected) in [(Mark::X, GameOutcome::XWins), (Mark::O, GameOutcome::OWins)] {
                let mut cells = [Mark::Empty; CELL_COUNT];
                for pos in line {
                    cells[pos] = mark;
                }
                assert_eq!(Board::from_cells(cells).outcome(), Ok(expected));
            }
        }
    }

    #[test]
    fn test_outcome_on_reachable_boards() {
        for board in reachable_boards() {
            let has_line = |mark: Mark| {
                LINES
                    .iter()
                    .any(|line| line.iter().all(|&pos| board.cells()[pos] == mark))
            };
            let expected = if has_line(Mark::X) {
                GameOutcome::XWins
            } else if has_line(Mark::O) {
                GameOutcome::OWins
            } else if board.is_full() {
                GameOutcome::Draw
            } else {
                GameOutcome::Ongoing
            };
            assert_eq!(board.outcome(), Ok(expected), "{:?}", board);
        }
    }

    #[test]
    fn test_outcome_is_never_a_forfeit() {
        let full = board_from_str(
            "X O X
             X O O
             O X X",
        );
        for board in reachable_boards().into_iter().chain([full]) {
            let outcome = board.outcome().unwrap();
            assert!(!matches!(outcome, GameOutcome::Forfeit(_)), "{:?}", board);
        }
    }

    #[test]
    fn test_double_win_is_unreachable_under_legal_play() {
        let boards = reachable_boards();
        assert_eq!(boards.len(), 5478);
        assert!(boards.iter().all(|board| board.outcome().is_ok()));
    }

    #[test]
    fn test_double_win_reports_unreachable_state() {
        let board = board_from_str(
            "X X X
             O O O
             . . .",
        );
        assert_eq!(board.outcome(), Err(GameError::UnreachableState));
    }

    #[test]
    fn test_move_count_matches_cells() {
        for board in reachable_boards() {
            let filled = board.cells().iter().filter(|&&cell| cell != Mark::Empty).count();
            assert_eq!(board.move_count(), filled);
        }
    }

    #[test]
    fn test_sample_random_empty_full_board() {
        let board = board_from_str(
            "X O X
             X O O
             O X X",
        );
        let mut rng = SessionRng::new(1);
        assert_eq!(board.sample_random_empty(&mut rng), Err(GameError::BoardFull));
        assert_eq!(board.first_empty(), Err(GameError::BoardFull));
    }

    #[test]
    fn test_sample_random_empty_picks_only_empty_cells() {
        let board = board_from_str(
            "X O X
             . O .
             O X X",
        );
        let mut rng = SessionRng::new(3);
        let mut seen = [false; CELL_COUNT];
        for _ in 0..200 {
            let pos = board.sample_random_empty(&mut rng).unwrap();
            assert!(pos == 3 || pos == 5);
            seen[pos] = true;
        }
        assert!(seen[3] && seen[5]);
        assert_eq!(board.first_empty(), Ok(3));
    }
}
