//! Rules engine: legality, move generation, application and win detection

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Square};
use crate::error::{ConfigError, MoveError, PositionError};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Column offsets tried for each pawn: forward-left, straight, forward-right
const FORWARD_COLUMN_OFFSETS: [i8; 3] = [-1, 0, 1];

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player identity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first, starts on row 0, advances toward increasing rows
    One,
    /// Starts on the last row, advances toward decreasing rows
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Pawn symbol on the board
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'P',
            Player::Two => 'C',
        }
    }

    /// 1-based player number for display
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Row step of a forward move
    pub fn forward(self) -> i8 {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }

    /// Row a pawn of this player must reach to win
    pub fn goal_row(self, dimension: usize) -> usize {
        match self {
            Player::One => dimension - 1,
            Player::Two => 0,
        }
    }
}

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    PlayerOneWins,
    PlayerTwoWins,
}

impl GameResult {
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Ongoing => None,
            GameResult::PlayerOneWins => Some(Player::One),
            GameResult::PlayerTwoWins => Some(Player::Two),
        }
    }

    pub fn is_over(self) -> bool {
        self != GameResult::Ongoing
    }

    fn won_by(player: Player) -> Self {
        match player {
            Player::One => GameResult::PlayerOneWins,
            Player::Two => GameResult::PlayerTwoWins,
        }
    }
}

/// A single pawn step from one square to another
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Board plus side to move.
///
/// The board is only reachable through read accessors; `apply_move` is the
/// single mutating operation, so every change to the board is a legal move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// New game on an N×N board, Player One to move
    pub fn new(dimension: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            board: Board::new(dimension)?,
            current_player: Player::One,
        })
    }

    /// Game from an arbitrary position string such as "P__/C__/___"
    pub fn from_position(position: &str, to_move: Player) -> Result<Self, PositionError> {
        Ok(Self {
            board: Board::from_position(position)?,
            current_player: to_move,
        })
    }

    /// Restore the starting formation with Player One to move
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = Player::One;
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dimension(&self) -> usize {
        self.board.dimension()
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    // ========================================================================
    // LEGALITY
    // ========================================================================

    /// Check whether `player` may play `mv` on the current board
    pub fn is_legal(&self, player: Player, mv: Move) -> bool {
        let (Some(source), Some(target)) = (self.board.get(mv.from), self.board.get(mv.to)) else {
            return false;
        };
        if source != Cell::Pawn(player) {
            return false;
        }

        let d_row = i16::from(mv.to.row) - i16::from(mv.from.row);
        let d_col = i16::from(mv.to.col) - i16::from(mv.from.col);
        if d_row != i16::from(player.forward()) {
            return false;
        }

        match d_col {
            0 => target == Cell::Empty,
            -1 | 1 => target == Cell::Pawn(player.opponent()),
            _ => false,
        }
    }

    // ========================================================================
    // MOVE GENERATION
    // ========================================================================

    /// Legal moves for `player`, scanning the three forward squares of each pawn
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        let mut moves = Vec::new();

        for from in self.board.pawns(player) {
            for d_col in FORWARD_COLUMN_OFFSETS {
                let Some(to) = self.board.offset(from, player.forward(), d_col) else {
                    continue;
                };
                let mv = Move::new(from, to);
                if self.is_legal(player, mv) {
                    moves.push(mv);
                }
            }
        }

        moves
    }

    /// Legal moves for `player`, testing every (from, to) pair on the board.
    ///
    /// Always agrees with `legal_moves`; kept as an independent check of the
    /// offset scan.
    pub fn legal_moves_exhaustive(&self, player: Player) -> Vec<Move> {
        self.board
            .squares()
            .flat_map(|from| self.board.squares().map(move |to| Move::new(from, to)))
            .filter(|&mv| self.is_legal(player, mv))
            .collect()
    }

    fn has_legal_move(&self, player: Player) -> bool {
        !self.legal_moves(player).is_empty()
    }

    // ========================================================================
    // MOVE APPLICATION
    // ========================================================================

    /// Apply a move for the side to move and return the resulting status.
    ///
    /// Rejected moves leave the board and the side to move untouched.
    pub fn apply_move(&mut self, mv: Move) -> Result<GameResult, MoveError> {
        if self.result().is_over() {
            return Err(MoveError::GameOver);
        }
        let player = self.current_player;
        if !self.is_legal(player, mv) {
            return Err(MoveError::Illegal(mv));
        }

        // A capture simply overwrites the opposing pawn
        self.board.set(mv.to, Cell::Pawn(player));
        self.board.set(mv.from, Cell::Empty);
        self.current_player = player.opponent();

        let result = self.result();
        tracing::debug!(
            "Player {} played {}, result {:?}",
            player.number(),
            mv,
            result
        );
        Ok(result)
    }

    // ========================================================================
    // GAME STATUS
    // ========================================================================

    /// Derive the game status from the board and the side to move.
    ///
    /// Player One's conditions are checked first.
    pub fn result(&self) -> GameResult {
        for player in [Player::One, Player::Two] {
            if self.has_won(player) {
                return GameResult::won_by(player);
            }
        }
        GameResult::Ongoing
    }

    pub fn is_over(&self) -> bool {
        self.result().is_over()
    }

    pub fn winner(&self) -> Option<Player> {
        self.result().winner()
    }

    fn has_won(&self, player: Player) -> bool {
        let opponent = player.opponent();
        let goal_row = player.goal_row(self.dimension());

        self.board
            .row(goal_row)
            .is_some_and(|row| row.contains(&Cell::Pawn(player)))
            || self.board.pawn_count(opponent) == 0
            || (self.current_player == opponent && !self.has_legal_move(opponent))
    }
}
