//! Algebraic coordinates: column letter + 1-based row number ("B2")

use std::fmt;

use crate::board::{Square, COLUMN_LABELS};
use crate::error::NotationError;
use crate::game::Move;

/// Separator between the two squares of a move ("B1->B2")
pub const MOVE_ARROW: &str = "->";

impl Square {
    /// Parse a coordinate such as "b2" on a board of `dimension`
    pub fn parse(text: &str, dimension: usize) -> Result<Square, NotationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(NotationError::Empty);
        }

        let chars: Vec<char> = text.chars().collect();
        let &[column, row] = chars.as_slice() else {
            return Err(NotationError::WrongLength(text.to_string()));
        };

        let col = COLUMN_LABELS
            .iter()
            .take(dimension)
            .position(|&label| label == column.to_ascii_uppercase())
            .ok_or(NotationError::BadColumn { column, dimension })?;

        let row_number = row
            .to_digit(10)
            .map(|d| d as usize)
            .filter(|d| (1..=dimension).contains(d))
            .ok_or(NotationError::BadRow { row, dimension })?;

        Ok(Square::new((row_number - 1) as u8, col as u8))
    }

    /// Column letter of this square
    pub fn column_label(&self) -> char {
        COLUMN_LABELS
            .get(usize::from(self.col))
            .copied()
            .unwrap_or('?')
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_label(), self.row + 1)
    }
}

impl Move {
    /// Build a move from the two coordinate prompts
    pub fn from_pair(from: &str, to: &str, dimension: usize) -> Result<Move, NotationError> {
        Ok(Move::new(
            Square::parse(from, dimension)?,
            Square::parse(to, dimension)?,
        ))
    }

    /// Parse "B1->B2"
    pub fn parse(text: &str, dimension: usize) -> Result<Move, NotationError> {
        let (from, to) = text
            .split_once(MOVE_ARROW)
            .ok_or_else(|| NotationError::BadMove(text.trim().to_string()))?;
        Move::from_pair(from, to, dimension)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.from, MOVE_ARROW, self.to)
    }
}
