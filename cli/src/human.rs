use std::io::{Stdin, Stdout, Write};

use tictactoe_engine::{Player, PlayerView, REWARD_ONGOING, log_warn};

use crate::render::describe;

/// Where a human player's moves come from, one line at a time.
pub trait LineSource {
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize>;
}

/// Locks stdin only for the duration of each read, so both seats can share it.
impl LineSource for Stdin {
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

/// Reads cell numbers from `input`, one per line, re-prompting on anything
/// that is not a number. End of input passes, which forfeits the game.
pub struct HumanPlayer<R: LineSource, W: Write> {
    input: R,
    output: W,
}

impl HumanPlayer<Stdin, Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin(), std::io::stdout())
    }
}

impl<R: LineSource, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) {
        if let Err(e) = write!(self.output, "{}", text).and_then(|_| self.output.flush()) {
            log_warn!("Failed to write prompt: {}", e);
        }
    }
}

impl<R: LineSource, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        "HumanPlayer"
    }

    fn choose_move(&mut self, view: &PlayerView<'_>) -> Option<usize> {
        self.prompt(&format!("{}\n", describe(view.board)));
        loop {
            self.prompt(&format!("Your move as {} (0-8): ", view.side));
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => match line.trim().parse::<usize>() {
                    Ok(position) => return Some(position),
                    Err(_) => self.prompt("Please enter a cell number.\n"),
                },
                Err(e) => {
                    log_warn!("Failed to read move: {}", e);
                    return None;
                }
            }
        }
    }

    fn update(&mut self, _view: &PlayerView<'_>, reward: i32) {
        if reward != REWARD_ONGOING {
            self.prompt(&format!("Human player received a reward {}\n", reward));
        }
    }

    fn reset(&mut self) {}
}
