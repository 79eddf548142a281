//! Human player reading coordinates from the console

use std::io::{BufRead, Write};

use hexapawn_core::{Decision, GameState, Move, MoveSelector, Player, SelectError};

use crate::console::Console;

const FROM_PROMPT: &str = "Enter the position of the pawn you want to move (e.g., B2): ";
const TO_PROMPT: &str = "Enter the target position (e.g., B3): ";

/// Move selector backed by two line prompts
pub struct HumanPlayer<'a, R, W> {
    console: &'a mut Console<R, W>,
}

impl<'a, R: BufRead, W: Write> HumanPlayer<'a, R, W> {
    pub fn new(console: &'a mut Console<R, W>) -> Self {
        Self { console }
    }

    fn read_coordinate(&mut self, prompt: &str) -> Result<String, SelectError> {
        self.console.prompt(prompt)?.ok_or(SelectError::EndOfInput)
    }
}

impl<R: BufRead, W: Write> MoveSelector for HumanPlayer<'_, R, W> {
    fn name(&self) -> &str {
        "human"
    }

    /// Both lines are read before either is parsed, so a typo never shifts
    /// the following answers by one prompt.
    fn select_move(&mut self, game: &GameState, _player: Player) -> Result<Decision, SelectError> {
        let from = self.read_coordinate(FROM_PROMPT)?;
        let to = self.read_coordinate(TO_PROMPT)?;
        let mv = Move::from_pair(&from, &to, game.dimension())?;
        Ok(Decision::Play(mv))
    }
}
