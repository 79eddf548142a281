//! Move selection: the seam between the rules engine and whoever picks moves

use crate::error::SelectError;
use crate::game::{GameState, Move, Player};

/// Outcome of asking a selector for a move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Play this move (still subject to the rules engine's legality check)
    Play(Move),
    /// The selector has no opinion; the caller falls back to another source
    Defer,
}

/// Anything that can choose a move for a player in a given position
pub trait MoveSelector {
    /// Display name
    fn name(&self) -> &str;

    /// Choose a move for `player` in `game`
    fn select_move(&mut self, game: &GameState, player: Player) -> Result<Decision, SelectError>;
}

// ============================================================================
// MATCHBOX AI
// ============================================================================

/// Matchbox learning opponent.
///
/// The lookup-table learner is not implemented; every request defers.
#[derive(Clone, Debug, Default)]
pub struct MatchboxAi {
    deferrals: u64,
}

impl MatchboxAi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests answered with `Decision::Defer`
    pub fn deferrals(&self) -> u64 {
        self.deferrals
    }
}

impl MoveSelector for MatchboxAi {
    fn name(&self) -> &str {
        "matchbox"
    }

    fn select_move(&mut self, game: &GameState, player: Player) -> Result<Decision, SelectError> {
        self.deferrals += 1;
        tracing::debug!(
            "Matchbox AI has no table for player {} in {}, deferring",
            player.number(),
            game.board()
        );
        Ok(Decision::Defer)
    }
}
