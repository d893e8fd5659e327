use crate::game::{Board, Piece};

use super::agent::Agent;
use super::heuristic::{Heuristic, Score, WindowHeuristic};

/// Score of a position the maximizing side has won.
pub const WIN_SCORE: Score = 100_000_000_000_000;
/// Score of a position the minimizing side has won.
pub const LOSS_SCORE: Score = -10_000_000_000_000;
pub const DRAW_SCORE: Score = 0;

/// Initial alpha and beta for a full-window search.
pub const NEG_INFINITY: Score = Score::MIN;
pub const POS_INFINITY: Score = Score::MAX;

/// Result of a search rooted at one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen column; `None` at terminal and depth-limited leaves.
    pub column: Option<usize>,
    pub score: Score,
    /// Positions visited, the root included.
    pub nodes: u64,
}

impl SearchResult {
    fn leaf(score: Score) -> Self {
        SearchResult {
            column: None,
            score,
            nodes: 1,
        }
    }
}

/// Depth-limited minimax with alpha-beta pruning, maximizing for `computer`.
///
/// Columns are tried in ascending order and only a strictly better score
/// replaces the current choice, so ties resolve to the lowest column.
pub struct Minimax {
    computer: Piece,
    heuristic: Box<dyn Heuristic>,
}

impl Minimax {
    pub fn new(computer: Piece) -> Self {
        Minimax {
            computer,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(computer: Piece, heuristic: Box<dyn Heuristic>) -> Self {
        Minimax {
            computer,
            heuristic,
        }
    }

    pub fn computer(&self) -> Piece {
        self.computer
    }

    /// Full-window search from the computer's side; returns the chosen column.
    pub fn best_move(&self, board: &Board, depth: u32) -> Option<usize> {
        let result = self.choose_move(board, depth, NEG_INFINITY, POS_INFINITY, true);
        log::debug!(
            "{} searched depth {}: column {:?}, score {}, {} nodes",
            self.computer.name(),
            depth,
            result.column,
            result.score,
            result.nodes
        );
        result.column
    }

    /// Search `board` to `depth` plies. `maximizing` is true when the
    /// computer is to move.
    pub fn choose_move(
        &self,
        board: &Board,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> SearchResult {
        if board.is_terminal() {
            return SearchResult::leaf(self.terminal_score(board));
        }

        if depth == 0 {
            return SearchResult::leaf(self.heuristic.evaluate(board, self.computer));
        }

        let mover = if maximizing {
            self.computer
        } else {
            self.computer.other()
        };
        let mut best: Option<(usize, Score)> = None;
        let mut nodes = 1;

        for col in board.valid_columns() {
            let mut child = *board;
            let row = child.drop_row(col);
            child.apply_move(row, col, mover);

            let reply = self.choose_move(&child, depth - 1, alpha, beta, !maximizing);
            nodes += reply.nodes;
            let value = reply.score;

            if maximizing {
                if best.map_or(true, |(_, score)| value > score) {
                    best = Some((col, value));
                }
                alpha = alpha.max(value);
            } else {
                if best.map_or(true, |(_, score)| value < score) {
                    best = Some((col, value));
                }
                beta = beta.min(value);
            }

            if alpha >= beta {
                break;
            }
        }

        // Non-terminal boards always have a valid column
        let (column, score) = best.expect("non-terminal board has a valid column");
        SearchResult {
            column: Some(column),
            score,
            nodes,
        }
    }

    fn terminal_score(&self, board: &Board) -> Score {
        if board.has_four_in_a_row(self.computer) {
            WIN_SCORE
        } else if board.has_four_in_a_row(self.computer.other()) {
            LOSS_SCORE
        } else {
            DRAW_SCORE
        }
    }
}

/// Computer opponent backed by [`Minimax`] at a fixed depth.
pub struct MinimaxAgent {
    depth: u32,
    minimax: Minimax,
}

impl MinimaxAgent {
    pub fn new(piece: Piece, depth: u32) -> Self {
        assert!(depth >= 1, "MinimaxAgent needs a depth of at least 1");
        MinimaxAgent {
            depth,
            minimax: Minimax::new(piece),
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Agent for MinimaxAgent {
    fn select_column(&mut self, board: &Board) -> usize {
        assert!(!board.is_terminal(), "No legal columns available");
        self.minimax
            .best_move(board, self.depth)
            .expect("search below a non-terminal root yields a column")
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
