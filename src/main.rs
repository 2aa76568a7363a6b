//! 5x5 Reversi self-play CLI
//!
//! Loads a board, lets the engine play both colors to the end and writes the
//! winner (`B`, `W`, or `D` for a draw) to the output file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use reversi::config::DEFAULT_DEPTH;
use reversi::{io, Color, Game, GameConfig, Turn};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "reversi", about = "5x5 Reversi played by minimax against itself", version)]
struct Args {
    /// Board file: 25 cells of B, W or E, row-major, may span lines
    #[arg(short, long, default_value = "input.txt")]
    input: PathBuf,

    /// File receiving the single outcome character
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Plies searched per turn
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Color making the first move
    #[arg(long, value_enum, default_value_t = First::B)]
    first: First,

    /// Do not print the board after each turn
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum First {
    B,
    W,
}

impl From<First> for Color {
    fn from(first: First) -> Self {
        match first {
            First::B => Color::Black,
            First::W => Color::White,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let board = io::read_board(&args.input)
        .with_context(|| format!("cannot load board from {}", args.input.display()))?;
    let config = GameConfig {
        depth: args.depth,
        first_to_move: args.first.into(),
    };
    let mut game = Game::new(board, config).context("invalid game configuration")?;

    if !args.quiet {
        print!("{board}");
    }

    let report = loop {
        match game.step() {
            Turn::Moved { color, board, .. } => {
                if !args.quiet {
                    println!("\nplayer {} played:", color.to_char());
                    print!("{board}");
                }
            }
            Turn::Passed { color } => {
                if !args.quiet {
                    println!("\nplayer {} has no move", color.to_char());
                }
            }
            Turn::Finished(report) => break report,
        }
    };

    info!(outcome = %report.outcome, plies = report.plies, "game over");
    println!("\nresult: {}", report.outcome);

    io::write_outcome(&args.output, report.outcome)
        .with_context(|| format!("cannot write outcome to {}", args.output.display()))?;
    Ok(())
}
