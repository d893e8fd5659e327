use anyhow::{bail, Result};
use clap::Parser;

use minimax_connect_four::ai::{Agent, MinimaxAgent, RandomAgent};
use minimax_connect_four::arena::{play_game, ArenaStats};
use minimax_connect_four::config::{OpponentKind, MAX_DEPTH};
use minimax_connect_four::game::Piece;

/// Pit two computer opponents against each other.
#[derive(Parser)]
#[command(name = "arena", about = "Play computer-versus-computer Connect Four matches")]
struct Cli {
    /// Opponent playing Blue
    #[arg(long, value_enum, default_value = "minimax")]
    blue: OpponentKind,

    /// Search depth for Blue when it is a minimax opponent
    #[arg(long, default_value_t = 2)]
    blue_depth: u32,

    /// Opponent playing Red
    #[arg(long, value_enum, default_value = "random")]
    red: OpponentKind,

    /// Search depth for Red when it is a minimax opponent
    #[arg(long, default_value_t = 2)]
    red_depth: u32,

    /// Number of games; the first move alternates between sides
    #[arg(long, default_value_t = 20)]
    games: usize,

    /// Base seed for random opponents
    #[arg(long)]
    seed: Option<u64>,
}

fn build(kind: OpponentKind, piece: Piece, depth: u32, seed: Option<u64>) -> Result<Box<dyn Agent>> {
    Ok(match kind {
        OpponentKind::Minimax => {
            if depth == 0 || depth > MAX_DEPTH {
                bail!("{} depth must be in 1..={}", piece.name(), MAX_DEPTH);
            }
            Box::new(MinimaxAgent::new(piece, depth))
        }
        OpponentKind::Random => match seed {
            Some(seed) => Box::new(RandomAgent::seeded(seed)),
            None => Box::new(RandomAgent::new()),
        },
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.games == 0 {
        bail!("--games must be > 0");
    }

    let blue_seed = cli.seed;
    let red_seed = cli.seed.map(|s| s.wrapping_add(1));
    let mut blue = build(cli.blue, Piece::Blue, cli.blue_depth, blue_seed)?;
    let mut red = build(cli.red, Piece::Red, cli.red_depth, red_seed)?;

    println!(
        "{} (Blue) vs {} (Red), {} games",
        blue.name(),
        red.name(),
        cli.games
    );
    println!("-------------------------------------------");

    let mut stats = ArenaStats::new();
    for game in 0..cli.games {
        let first = if game % 2 == 0 { Piece::Blue } else { Piece::Red };
        let result = play_game(blue.as_mut(), red.as_mut(), first);
        println!(
            "Game {}/{} | first: {} | {:?} in {} moves",
            game + 1,
            cli.games,
            first.name(),
            result.outcome,
            result.moves
        );
        stats.record(result);
    }

    println!("-------------------------------------------");
    println!(
        "Blue: {} wins ({:.1}%) | Red: {} wins ({:.1}%) | Draws: {} | avg_len: {:.1}",
        stats.wins(Piece::Blue),
        stats.win_rate(Piece::Blue) * 100.0,
        stats.wins(Piece::Red),
        stats.win_rate(Piece::Red) * 100.0,
        stats.draws(),
        stats.average_game_length()
    );
    Ok(())
}
