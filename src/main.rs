use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use minimax_connect_four::config::{AppConfig, OpponentKind};
use minimax_connect_four::game::Session;
use minimax_connect_four::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Connect Four against the computer.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax opponent")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the search depth (difficulty)
    #[arg(long)]
    depth: Option<u32>,

    /// Override the player name
    #[arg(long)]
    name: Option<String>,

    /// Let the computer make the first move
    #[arg(long)]
    computer_first: bool,

    /// Override the opponent kind
    #[arg(long, value_enum)]
    opponent: Option<OpponentKind>,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        config.engine.depth = depth;
    }
    if let Some(name) = cli.name {
        config.player.name = name;
    }
    if cli.computer_first {
        config.player.moves_first = false;
    }
    if let Some(opponent) = cli.opponent {
        config.engine.opponent = opponent;
    }
    if cli.seed.is_some() {
        config.engine.seed = cli.seed;
    }
    config.validate().context("invalid settings")?;

    let difficulty = match config.engine.opponent {
        OpponentKind::Minimax => format!("Minimax depth {}", config.engine.depth),
        OpponentKind::Random => "Random".to_string(),
    };
    let computer = config.engine.build_agent(Session::COMPUTER);
    let mut app = App::new(config.session(), computer, difficulty);

    run(&mut app).context("terminal UI failed")
}

fn run(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
