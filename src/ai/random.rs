use crate::game::Board;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that selects uniformly at random from valid columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible choices from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, board: &Board) -> usize {
        let columns = board.valid_columns();
        assert!(!columns.is_empty(), "No legal columns available");
        let idx = self.rng.random_range(0..columns.len());
        columns[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Piece, ROWS};

    #[test]
    fn test_random_agent_selects_legal_column() {
        let mut agent = RandomAgent::new();
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(2, Piece::Red).unwrap();
        }
        let legal = board.valid_columns();

        for _ in 0..100 {
            let column = agent.select_column(&board);
            assert!(legal.contains(&column), "Column {} is not legal", column);
        }
    }

    #[test]
    fn test_seeded_agents_agree() {
        let board = Board::new();
        let mut a = RandomAgent::seeded(9);
        let mut b = RandomAgent::seeded(9);
        for _ in 0..20 {
            assert_eq!(a.select_column(&board), b.select_column(&board));
        }
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
