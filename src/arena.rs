//! Agent-versus-agent games and running tallies.

use crate::ai::Agent;
use crate::game::{Board, GameOutcome, Piece};

/// Result of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: GameOutcome,
    pub moves: usize,
}

/// Play one game to completion. `blue` plays Blue, `red` plays Red.
pub fn play_game(blue: &mut dyn Agent, red: &mut dyn Agent, first: Piece) -> GameResult {
    let mut board = Board::new();
    let mut to_move = first;
    let mut moves = 0;

    while !board.is_terminal() {
        let column = match to_move {
            Piece::Blue => blue.select_column(&board),
            Piece::Red => red.select_column(&board),
        };
        board.drop_piece(column, to_move).unwrap_or_else(|e| {
            panic!(
                "illegal move {} by {} ({e}, legal: {:?})",
                column,
                to_move.name(),
                board.valid_columns()
            )
        });
        to_move = to_move.other();
        moves += 1;
    }

    GameResult {
        outcome: board.outcome(),
        moves,
    }
}

/// Win/draw counts over a series of games.
#[derive(Debug, Clone, Default)]
pub struct ArenaStats {
    blue_wins: usize,
    red_wins: usize,
    draws: usize,
    total_moves: usize,
}

impl ArenaStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result.outcome {
            GameOutcome::Winner(Piece::Blue) => self.blue_wins += 1,
            GameOutcome::Winner(Piece::Red) => self.red_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::Ongoing => return,
        }
        self.total_moves += result.moves;
    }

    pub fn games(&self) -> usize {
        self.blue_wins + self.red_wins + self.draws
    }

    pub fn wins(&self, piece: Piece) -> usize {
        match piece {
            Piece::Blue => self.blue_wins,
            Piece::Red => self.red_wins,
        }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Fraction of recorded games won by `piece`.
    pub fn win_rate(&self, piece: Piece) -> f32 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        self.wins(piece) as f32 / games as f32
    }

    pub fn average_game_length(&self) -> f32 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        self.total_moves as f32 / games as f32
    }
}
