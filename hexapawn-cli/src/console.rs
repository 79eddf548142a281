//! Console rendering and line input
//!
//! All terminal I/O for a session goes through `Console`, which is generic
//! over its reader and writer so sessions can be driven from memory in tests.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crossterm::style::{Color, Stylize};

use hexapawn_core::{Board, Move, Player};
use hexapawn_core::board::COLUMN_LABELS;

/// Colour of rejected-move messages
const ERROR_COLOR: Color = Color::Red;

/// Colour of win announcements
const ANNOUNCE_COLOR: Color = Color::Yellow;

pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self { input, output, color }
    }

    /// Print `text` without a newline and read one line.
    ///
    /// Returns `None` at end of input; the trailing newline is stripped.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Column header, then one line per row
    pub fn render_board(&mut self, board: &Board) -> io::Result<()> {
        writeln!(self.output, "{}", header_line(board.dimension()))?;
        for (index, row) in board.rows().enumerate() {
            let cells: String = row.iter().map(|cell| format!(" {} ", cell.symbol())).collect();
            writeln!(self.output, "{} {}", index + 1, cells.trim_end())?;
        }
        Ok(())
    }

    pub fn announce_turn(&mut self, player: Player) -> io::Result<()> {
        writeln!(
            self.output,
            "Player {} '{}'s Turn",
            player.number(),
            player.symbol()
        )
    }

    pub fn list_moves(&mut self, moves: &[Move]) -> io::Result<()> {
        writeln!(self.output, "Possible Moves")?;
        for mv in moves {
            writeln!(self.output, "{}", mv)?;
        }
        Ok(())
    }

    pub fn invalid_move(&mut self) -> io::Result<()> {
        self.colored_line(ERROR_COLOR, "Invalid move! Try again.")
    }

    pub fn announce_winner(&mut self, player: Player) -> io::Result<()> {
        self.colored_line(ANNOUNCE_COLOR, &format!("Player {} wins!", player.number()))
    }

    fn colored_line(&mut self, color: Color, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.output, "{}", text.with(color))
        } else {
            writeln!(self.output, "{}", text)
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// "   A  B  C" for a 3×3 board
fn header_line(dimension: usize) -> String {
    let labels: String = COLUMN_LABELS
        .iter()
        .take(dimension)
        .map(|label| format!(" {} ", label))
        .collect();
    format!("  {}", labels.trim_end())
}
