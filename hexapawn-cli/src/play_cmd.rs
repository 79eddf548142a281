//! Play command - a match of console rounds between two players
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_config(), play_session(), report_summary()
//! - Level 3: play_round(), take_turn()
//! - Level 4: choose_move() - selector dispatch

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexapawn_core::{
    Decision, GameConfig, GameResult, GameState, MatchboxAi, MoveSelector, Player, SelectError,
};

use crate::console::Console;
use crate::human::HumanPlayer;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// JSON config file (command-line flags override it)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Board dimension (3-6)
    #[arg(long)]
    pub dimension: Option<usize>,

    /// Number of rounds in the match
    #[arg(long)]
    pub rounds: Option<usize>,

    /// Let the matchbox AI answer for Player 2
    #[arg(long)]
    pub ai: bool,

    /// Do not list legal moves before each turn
    #[arg(long)]
    pub hide_moves: bool,

    /// Start the next round without waiting for Enter
    #[arg(long)]
    pub no_pause: bool,
}

/// Tally of a finished or abandoned match
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds_played: usize,
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    /// False when input ran out before the last round finished
    pub completed: bool,
}

impl SessionSummary {
    fn record(&mut self, winner: Player) {
        self.rounds_played += 1;
        match winner {
            Player::One => self.player_one_wins += 1,
            Player::Two => self.player_two_wins += 1,
        }
    }
}

enum RoundOutcome {
    Won(Player),
    Abandoned,
}

enum TurnOutcome {
    Applied(GameResult),
    Rejected,
    EndOfInput,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// This function reads like a table of contents:
/// 1. Resolve configuration
/// 2. Play the rounds on stdin/stdout
/// 3. Report the score
pub fn run(args: PlayArgs, color: bool) -> Result<()> {
    let config = build_config(&args)?;

    tracing::info!(
        "Starting match: {} rounds on a {}x{} board (ai={})",
        config.rounds,
        config.dimension,
        config.dimension,
        config.ai_opponent
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), color);

    let summary = play_session(&config, &mut console)?;
    report_summary(&summary, &mut console)?;

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Merge the optional config file with command-line overrides
fn build_config(args: &PlayArgs) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(dimension) = args.dimension {
        config.dimension = dimension;
    }
    if let Some(rounds) = args.rounds {
        config.rounds = rounds;
    }
    config.ai_opponent |= args.ai;
    config.show_valid_moves &= !args.hide_moves;
    config.pause_between_rounds &= !args.no_pause;

    config.validate().context("Invalid game configuration")?;
    Ok(config)
}

/// Play every round of the match, stopping early at end of input
pub fn play_session<R: BufRead, W: Write>(
    config: &GameConfig,
    console: &mut Console<R, W>,
) -> Result<SessionSummary> {
    let mut game = GameState::new(config.dimension)?;
    let mut ai: Option<Box<dyn MoveSelector>> = if config.ai_opponent {
        Some(Box::new(MatchboxAi::new()))
    } else {
        None
    };
    let mut summary = SessionSummary::default();

    console.line("Welcome to Hexapawn!")?;

    for round in 1..=config.rounds {
        tracing::info!("Round {} of {}", round, config.rounds);

        match play_round(&mut game, config, console, &mut ai)? {
            RoundOutcome::Won(winner) => {
                tracing::info!("Round {} won by player {}", round, winner.number());
                summary.record(winner);
            }
            RoundOutcome::Abandoned => {
                console.line("End of input detected. Quitting.")?;
                return Ok(summary);
            }
        }

        game.reset();

        if round < config.rounds
            && config.pause_between_rounds
            && console.prompt("Press Enter to play the next round...")?.is_none()
        {
            console.line("")?;
            return Ok(summary);
        }
    }

    summary.completed = true;
    Ok(summary)
}

fn report_summary<R: BufRead, W: Write>(
    summary: &SessionSummary,
    console: &mut Console<R, W>,
) -> Result<()> {
    tracing::info!(
        "Match over: {} rounds, {}-{}",
        summary.rounds_played,
        summary.player_one_wins,
        summary.player_two_wins
    );

    if !summary.completed {
        console.line("Match ended early.")?;
    }
    console.line(format!(
        "Final score after {} round(s): Player 1 {} - Player 2 {}",
        summary.rounds_played, summary.player_one_wins, summary.player_two_wins
    ))?;
    Ok(())
}

// ============================================================================
// LEVEL 3 - ROUND AND TURN
// ============================================================================

/// Play one round to its end; the board is left in its final position
fn play_round<R: BufRead, W: Write>(
    game: &mut GameState,
    config: &GameConfig,
    console: &mut Console<R, W>,
    ai: &mut Option<Box<dyn MoveSelector>>,
) -> Result<RoundOutcome> {
    while !game.is_over() {
        console.render_board(game.board())?;

        match take_turn(game, config, console, ai)? {
            TurnOutcome::Applied(result) => {
                if let Some(winner) = result.winner() {
                    console.announce_winner(winner)?;
                }
            }
            TurnOutcome::Rejected => console.invalid_move()?,
            TurnOutcome::EndOfInput => return Ok(RoundOutcome::Abandoned),
        }
    }

    // Show the final position
    console.render_board(game.board())?;

    let winner = game.winner().context("finished round has no winner")?;
    Ok(RoundOutcome::Won(winner))
}

/// Ask for one move and apply it if legal
fn take_turn<R: BufRead, W: Write>(
    game: &mut GameState,
    config: &GameConfig,
    console: &mut Console<R, W>,
    ai: &mut Option<Box<dyn MoveSelector>>,
) -> Result<TurnOutcome> {
    let player = game.current_player();
    console.announce_turn(player)?;
    if config.show_valid_moves {
        console.list_moves(&game.legal_moves(player))?;
    }

    let mv = match choose_move(game, player, console, ai) {
        Ok(Decision::Play(mv)) => mv,
        Ok(Decision::Defer) => return Ok(TurnOutcome::Rejected),
        Err(SelectError::Input(err)) => {
            tracing::warn!("Rejected input from player {}: {}", player.number(), err);
            return Ok(TurnOutcome::Rejected);
        }
        Err(SelectError::EndOfInput) => return Ok(TurnOutcome::EndOfInput),
        Err(SelectError::Io(err)) => return Err(err).context("Failed to read move"),
    };

    match game.apply_move(mv) {
        Ok(result) => Ok(TurnOutcome::Applied(result)),
        Err(err) => {
            tracing::warn!("Rejected move from player {}: {}", player.number(), err);
            Ok(TurnOutcome::Rejected)
        }
    }
}

// ============================================================================
// LEVEL 4 - SELECTOR DISPATCH
// ============================================================================

/// Player 2 asks the AI first when one is configured; a deferral falls back
/// to the console.
fn choose_move<R: BufRead, W: Write>(
    game: &GameState,
    player: Player,
    console: &mut Console<R, W>,
    ai: &mut Option<Box<dyn MoveSelector>>,
) -> Result<Decision, SelectError> {
    if player == Player::Two {
        if let Some(ai) = ai.as_mut() {
            if let Decision::Play(mv) = ai.select_move(game, player)? {
                return Ok(Decision::Play(mv));
            }
            tracing::debug!("{} deferred, asking the console", ai.name());
        }
    }

    HumanPlayer::new(console).select_move(game, player)
}
