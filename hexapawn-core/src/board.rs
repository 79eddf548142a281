//! Square board geometry and cell storage

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, PositionError};
use crate::game::Player;

/// Default board dimension
pub const DEFAULT_DIMENSION: usize = 4;

/// Smallest supported board
pub const MIN_DIMENSION: usize = 3;

/// Largest supported board (one column letter and one row digit per square)
pub const MAX_DIMENSION: usize = 6;

/// Column letters, indexed by column
pub const COLUMN_LABELS: [char; MAX_DIMENSION] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// Separator between rows in position strings
const ROW_SEPARATOR: char = '/';

// ============================================================================
// SQUARES AND CELLS
// ============================================================================

/// Zero-based board coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check if this square is on a board of `dimension`
    pub fn is_within(&self, dimension: usize) -> bool {
        usize::from(self.row) < dimension && usize::from(self.col) < dimension
    }
}

/// Contents of one board cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Pawn(Player),
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Pawn(player) => player.symbol(),
        }
    }

    /// Parse a position symbol (case-insensitive; '.' is accepted for empty)
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol.to_ascii_uppercase() {
            '_' | '.' => Some(Cell::Empty),
            'P' => Some(Cell::Pawn(Player::One)),
            'C' => Some(Cell::Pawn(Player::Two)),
            _ => None,
        }
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Pawn(player) => Some(player),
        }
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// N×N grid of cells, row-major
///
/// Row 0 is Player One's home row, row N-1 is Player Two's.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    dimension: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board in the starting formation
    pub fn new(dimension: usize) -> Result<Self, ConfigError> {
        check_dimension(dimension)?;
        let mut board = Self {
            dimension,
            cells: vec![Cell::Empty; dimension * dimension],
        };
        board.reset();
        Ok(board)
    }

    /// Parse a position like "PPP/___/CCC" (row 0 first)
    pub fn from_position(position: &str) -> Result<Self, PositionError> {
        let rows: Vec<&str> = position.trim().split(ROW_SEPARATOR).collect();
        let dimension = rows.len();
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
            return Err(PositionError::BadDimension {
                rows: dimension,
                min: MIN_DIMENSION,
                max: MAX_DIMENSION,
            });
        }

        let mut cells = Vec::with_capacity(dimension * dimension);
        for (index, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != dimension {
                return Err(PositionError::RaggedRow {
                    row: index + 1,
                    len,
                    expected: dimension,
                });
            }
            for symbol in row.chars() {
                cells.push(Cell::from_symbol(symbol).ok_or(PositionError::UnknownSymbol(symbol))?);
            }
        }

        Ok(Self { dimension, cells })
    }

    /// Restore the starting formation
    pub fn reset(&mut self) {
        let last = self.dimension - 1;
        for row in 0..self.dimension {
            let cell = match row {
                0 => Cell::Pawn(Player::One),
                r if r == last => Cell::Pawn(Player::Two),
                _ => Cell::Empty,
            };
            for col in 0..self.dimension {
                self.cells[row * self.dimension + col] = cell;
            }
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Get cell at square, `None` when off the board
    pub fn get(&self, square: Square) -> Option<Cell> {
        if square.is_within(self.dimension) {
            Some(self.cells[self.index(square)])
        } else {
            None
        }
    }

    /// Cells of one row, left to right; `None` when off the board
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.dimension {
            return None;
        }
        let start = row * self.dimension;
        self.cells.get(start..start + self.dimension)
    }

    /// Check if signed coordinates fall on the board
    pub fn contains(&self, row: i16, col: i16) -> bool {
        let size = self.dimension as i16;
        (0..size).contains(&row) && (0..size).contains(&col)
    }

    /// Square reached from `square` by a signed step, if it stays on the board
    pub fn offset(&self, square: Square, d_row: i8, d_col: i8) -> Option<Square> {
        let row = i16::from(square.row) + i16::from(d_row);
        let col = i16::from(square.col) + i16::from(d_col);
        if self.contains(row, col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Iterate rows from row 0
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.dimension)
    }

    /// Iterate all squares in row-major order
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        let dimension = self.dimension as u8;
        (0..dimension).flat_map(move |row| (0..dimension).map(move |col| Square::new(row, col)))
    }

    /// Squares holding a pawn of `player`, row-major
    pub fn pawns(&self, player: Player) -> impl Iterator<Item = Square> + '_ {
        self.squares()
            .filter(move |&sq| self.cells[self.index(sq)] == Cell::Pawn(player))
    }

    pub fn pawn_count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Pawn(player))
            .count()
    }

    /// Position string, row 0 first (inverse of `from_position`)
    pub fn to_position(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Overwrite a cell. Callers guarantee the square is on the board.
    pub(crate) fn set(&mut self, square: Square, cell: Cell) {
        let index = self.index(square);
        self.cells[index] = cell;
    }

    fn index(&self, square: Square) -> usize {
        usize::from(square.row) * self.dimension + usize::from(square.col)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_position())
    }
}

/// Validate a board dimension
pub fn check_dimension(dimension: usize) -> Result<(), ConfigError> {
    if (MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimension {
            dimension,
            min: MIN_DIMENSION,
            max: MAX_DIMENSION,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_formation() {
        for dimension in MIN_DIMENSION..=MAX_DIMENSION {
            let board = Board::new(dimension).unwrap();
            assert_eq!(board.pawn_count(Player::One), dimension);
            assert_eq!(board.pawn_count(Player::Two), dimension);
            assert!(board.row(0).unwrap().iter().all(|&c| c == Cell::Pawn(Player::One)));
            assert!(board.row(dimension - 1).unwrap().iter().all(|&c| c == Cell::Pawn(Player::Two)));
            for row in 1..dimension - 1 {
                assert!(board.row(row).unwrap().iter().all(|&c| c == Cell::Empty));
            }
        }
    }

    #[test]
    fn test_dimension_bounds() {
        assert!(Board::new(2).is_err());
        assert!(Board::new(7).is_err());
        assert_eq!(Board::new(DEFAULT_DIMENSION).unwrap().dimension(), 4);
    }

    #[test]
    fn test_position_parsing() {
        let board = Board::from_position("PPP/_p_/ccc").unwrap();
        assert_eq!(board.dimension(), 3);
        assert_eq!(board.get(Square::new(1, 1)), Some(Cell::Pawn(Player::One)));
        assert_eq!(board.get(Square::new(2, 0)), Some(Cell::Pawn(Player::Two)));
        assert_eq!(board.to_position(), "PPP/_P_/CCC");

        assert_eq!(
            Board::from_position("PP/__"),
            Err(PositionError::BadDimension { rows: 2, min: 3, max: 6 })
        );
        assert_eq!(
            Board::from_position("PPP/__/CCC"),
            Err(PositionError::RaggedRow { row: 2, len: 2, expected: 3 })
        );
        assert_eq!(
            Board::from_position("PPP/_x_/CCC"),
            Err(PositionError::UnknownSymbol('x'))
        );
    }

    #[test]
    fn test_offset_stays_on_board() {
        let board = Board::new(3).unwrap();
        let corner = Square::new(0, 0);
        assert_eq!(board.offset(corner, 1, 1), Some(Square::new(1, 1)));
        assert_eq!(board.offset(corner, 1, -1), None);
        assert_eq!(board.offset(corner, -1, 0), None);
        assert_eq!(board.offset(Square::new(2, 2), 1, 0), None);
    }

    #[test]
    fn test_contains_signed_coordinates() {
        let board = Board::new(4).unwrap();
        assert!(board.contains(0, 0));
        assert!(board.contains(3, 3));
        assert!(!board.contains(-1, 2));
        assert!(!board.contains(2, -1));
        assert!(!board.contains(4, 0));
        assert!(!board.contains(0, 4));
    }

    #[test]
    fn test_get_off_board() {
        let board = Board::new(3).unwrap();
        assert_eq!(board.get(Square::new(3, 0)), None);
        assert_eq!(board.get(Square::new(0, 3)), None);
    }

    #[test]
    fn test_row_off_board() {
        let board = Board::new(3).unwrap();
        assert_eq!(board.row(2).map(<[Cell]>::len), Some(3));
        assert_eq!(board.row(3), None);
        assert_eq!(board.row(usize::MAX), None);
    }

    #[test]
    fn test_reset_restores_formation() {
        let mut board = Board::from_position("___/_P_/C_C").unwrap();
        board.reset();
        assert_eq!(board.to_position(), "PPP/___/CCC");
    }
}
