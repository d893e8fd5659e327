//! Computer opponents: the window heuristic, minimax search with alpha-beta
//! pruning, and a uniform random baseline.

mod agent;
pub mod heuristic;
pub mod minimax;
mod random;

pub use agent::Agent;
pub use heuristic::{evaluate_board, Heuristic, Score, WindowHeuristic};
pub use minimax::{
    Minimax, MinimaxAgent, SearchResult, DRAW_SCORE, LOSS_SCORE, NEG_INFINITY, POS_INFINITY,
    WIN_SCORE,
};
pub use random::RandomAgent;
