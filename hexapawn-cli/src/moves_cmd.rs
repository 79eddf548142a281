//! Moves command - list the legal moves of a position
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: analyze_position(), report()
//! - Level 3: (delegated to hexapawn-core)
//! - Level 4: player number conversion

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use hexapawn_core::{GameResult, GameState, Player};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MovesArgs {
    /// Position, row 1 first, rows separated by '/' (e.g. "PPP/___/CCC")
    pub position: String,

    /// Player to list moves for (1 or 2); also the side to move
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=2))]
    pub player: u8,

    /// Test every square pair instead of each pawn's three forward squares
    #[arg(long)]
    pub exhaustive: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Legal moves and status of one position
#[derive(Clone, Debug, Serialize)]
struct PositionReport {
    position: String,
    player: u8,
    moves: Vec<String>,
    result: GameResult,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

pub fn run(args: MovesArgs) -> Result<()> {
    let report = analyze_position(&args)?;
    print_report(&report, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn analyze_position(args: &MovesArgs) -> Result<PositionReport> {
    let player = player_from_number(args.player);
    let game = GameState::from_position(&args.position, player)
        .with_context(|| format!("Invalid position: {}", args.position))?;

    let moves = if args.exhaustive {
        game.legal_moves_exhaustive(player)
    } else {
        game.legal_moves(player)
    };
    tracing::debug!("{} legal moves for player {}", moves.len(), args.player);

    Ok(PositionReport {
        position: game.board().to_position(),
        player: args.player,
        moves: moves.iter().map(ToString::to_string).collect(),
        result: game.result(),
    })
}

fn print_report(report: &PositionReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("Position: {} (player {} to move)", report.position, report.player);
    if report.moves.is_empty() {
        println!("No legal moves");
    } else {
        println!("Possible Moves");
        for mv in &report.moves {
            println!("{}", mv);
        }
    }
    match report.result {
        GameResult::Ongoing => {}
        GameResult::PlayerOneWins => println!("Player 1 wins!"),
        GameResult::PlayerTwoWins => println!("Player 2 wins!"),
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn player_from_number(number: u8) -> Player {
    if number == 2 {
        Player::Two
    } else {
        Player::One
    }
}
