use crate::game::{Board, Cell, Piece, WINDOW_LEN};

/// Search score. Heuristic values stay far inside the win/loss sentinels.
pub type Score = i64;

/// Trait for evaluating a non-terminal board from one piece's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, piece: Piece) -> Score;
}

/// Default heuristic: sums an independent score over every 4-cell window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl WindowHeuristic {
    /// Score one window. Only the opponent's open three is penalized.
    pub fn score_window(window: &[Cell; WINDOW_LEN], piece: Piece) -> Score {
        let own_cell = piece.to_cell();
        let opp_cell = piece.other().to_cell();

        let mut own = 0;
        let mut opp = 0;
        let mut empty = 0;
        for &cell in window {
            match cell {
                c if c == own_cell => own += 1,
                c if c == opp_cell => opp += 1,
                _ => empty += 1,
            }
        }

        let mut score = if own == 4 {
            100
        } else if own == 3 && empty == 1 {
            5
        } else if own == 2 && empty == 2 {
            2
        } else {
            0
        };

        if opp == 3 && empty == 1 {
            score -= 4;
        }

        score
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, piece: Piece) -> Score {
        board
            .windows()
            .map(|window| Self::score_window(&window, piece))
            .sum()
    }
}

/// Evaluate `board` for `piece` with [`WindowHeuristic`].
pub fn evaluate_board(board: &Board, piece: Piece) -> Score {
    WindowHeuristic.evaluate(board, piece)
}
