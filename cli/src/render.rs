use tictactoe_engine::{Board, GameRecord, Mark, StateId, decode, state_ids};

/// Three text lines per board row; empty cells show their position number.
pub fn draw(board: &Board) -> String {
    let mut s = String::new();
    for row in 0..3 {
        for line in 0..3 {
            for col in 0..3 {
                let position = row * 3 + col;
                let cell = board.cell(position).unwrap_or(Mark::Empty);
                let glyph = match (cell, line) {
                    (Mark::X, 0) => "\\ /".to_string(),
                    (Mark::X, 1) => " X ".to_string(),
                    (Mark::X, _) => "/ \\".to_string(),
                    (Mark::O, 1) => "O O".to_string(),
                    (Mark::O, _) => "OOO".to_string(),
                    (Mark::Empty, 1) => format!(" {} ", position),
                    (Mark::Empty, _) => "   ".to_string(),
                };
                s.push_str(&glyph);
                s.push_str("   ");
            }
            s.push('\n');
        }
        s.push('\n');
    }
    s
}

pub fn describe(board: &Board) -> String {
    let (x_state, o_state) = state_ids(board);
    format!(
        "\n---( {} )--------------------------\n\n{}x state = {}, o state = {}",
        board.move_count(),
        draw(board),
        x_state,
        o_state
    )
}

pub fn replay(record: &GameRecord) -> String {
    let mut s = String::from("=== REPLAY =================================\n");
    s.push_str(&format!("{:?}\n", record.states));
    for (i, &state) in record.states.iter().enumerate() {
        s.push_str(&format!(
            "===( {} [ state={} ] )=====================\n\n",
            i + 1,
            state
        ));
        s.push_str(&draw_state(state));
    }
    s.push('\n');
    s
}

fn draw_state(state: StateId) -> String {
    match decode(state as u32) {
        Ok(board) => draw(&board),
        Err(e) => format!("<{}>\n", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{GameOutcome, Side, encode};

    fn sample_board() -> Board {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(4, Mark::O).unwrap();
        board
    }

    #[test]
    fn test_draw_empty_board_shows_positions() {
        let text = draw(&Board::new());
        for position in 0..9 {
            assert!(text.contains(&format!(" {} ", position)));
        }
        assert_eq!(text.lines().count(), 12);
    }

    #[test]
    fn test_draw_marks() {
        let text = draw(&sample_board());
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("\\ /"));
        assert!(lines[1].starts_with(" X "));
        assert!(lines[2].starts_with("/ \\"));
        assert!(lines[5].contains("O O"));
        assert!(!text.contains(" 0 "));
        assert!(!text.contains(" 4 "));
    }

    #[test]
    fn test_describe_includes_both_state_ids() {
        let board = sample_board();
        let text = describe(&board);
        assert!(text.contains("---( 2 )"));
        assert!(text.contains(&format!("x state = {}", encode(&board, Side::X))));
        assert!(text.contains(&format!("o state = {}", encode(&board, Side::O))));
    }

    #[test]
    fn test_replay_draws_every_state() {
        let mut board = Board::new();
        let mut states = Vec::new();
        for (position, mark) in [(0, Mark::X), (4, Mark::O)] {
            board.place(position, mark).unwrap();
            states.push(encode(&board, Side::X));
        }
        let record = GameRecord {
            outcome: GameOutcome::Ongoing,
            moves: vec![0, 4],
            states,
            final_board: board,
        };
        let text = replay(&record);
        assert!(text.starts_with("=== REPLAY"));
        assert!(text.contains("===( 1 [ state="));
        assert!(text.contains("===( 2 [ state="));
        assert!(text.contains(&draw(&board)));
    }
}
