//! Hexapawn Core - rules engine
//!
//! This crate provides the core game logic for Hexapawn:
//! - N×N board with the two-row pawn formation
//! - Pawn move legality, move generation and application
//! - Win detection (promotion, elimination, blockade)
//! - Algebraic coordinate notation
//! - Move-selection trait with the matchbox AI extension point

pub mod board;
pub mod game;
pub mod notation;
pub mod ai;
pub mod config;
pub mod error;

// Re-exports for convenient access
pub use board::{Board, Cell, Square, DEFAULT_DIMENSION, MIN_DIMENSION, MAX_DIMENSION};
pub use game::{GameState, Move, Player, GameResult};
pub use ai::{Decision, MatchboxAi, MoveSelector};
pub use config::GameConfig;
pub use error::{ConfigError, MoveError, NotationError, PositionError, SelectError};
