//! Hexapawn CLI - Command-line interface
//!
//! Commands:
//! - play: Play a match of console rounds
//! - moves: List the legal moves of a position

mod console;
mod human;
mod moves_cmd;
mod play_cmd;

use clap::{Parser, Subcommand};
use crossterm::tty::IsTty;
use tracing_subscriber::EnvFilter;

use moves_cmd::MovesArgs;
use play_cmd::PlayArgs;

#[derive(Parser)]
#[command(name = "hexapawn")]
#[command(about = "Hexapawn pawn-capture game for two players")]
struct Cli {
    /// Disable colored status messages
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a match of console rounds
    Play(PlayArgs),
    /// List the legal moves of a position
    Moves(MovesArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => {
            let color = use_color(cli.no_color, std::io::stdout().is_tty());
            play_cmd::run(args, color)
        }
        Commands::Moves(args) => moves_cmd::run(args),
    }
}

/// Color only when allowed and stdout is a terminal
fn use_color(no_color: bool, is_tty: bool) -> bool {
    !no_color && is_tty
}
