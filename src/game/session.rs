use super::{Board, GameOutcome, Piece};
use crate::error::MoveError;

/// Name shown for the computer side.
pub const COMPUTER_NAME: &str = "Computer";

/// Per-game settings supplied by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub player_name: String,
    pub human_moves_first: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            player_name: "Player".to_string(),
            human_moves_first: true,
        }
    }
}

/// A human-versus-computer game in progress.
///
/// The outcome is never cached; it is read off the board each time.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    to_move: Piece,
}

impl Session {
    /// The human always plays Blue and the computer Red.
    pub const HUMAN: Piece = Piece::Blue;
    pub const COMPUTER: Piece = Piece::Red;

    pub fn new(config: SessionConfig) -> Self {
        let to_move = Self::first_mover(&config);
        Session {
            config,
            board: Board::new(),
            to_move,
        }
    }

    fn first_mover(config: &SessionConfig) -> Piece {
        if config.human_moves_first {
            Self::HUMAN
        } else {
            Self::COMPUTER
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Piece {
        self.to_move
    }

    pub fn player_name(&self) -> &str {
        &self.config.player_name
    }

    pub fn is_human_turn(&self) -> bool {
        self.to_move == Self::HUMAN
    }

    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    /// Play `col` for the side to move and return the resulting outcome.
    pub fn play(&mut self, col: usize) -> Result<GameOutcome, MoveError> {
        if self.board.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board.drop_piece(col, self.to_move)?;
        self.to_move = self.to_move.other();

        let outcome = self.board.outcome();
        if outcome != GameOutcome::Ongoing {
            log::info!("game over: {:?} after {} pieces", outcome, self.board.piece_count());
        }
        Ok(outcome)
    }

    /// Start over with an empty board.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.to_move = Self::first_mover(&self.config);
    }

    /// The player's name for the human piece, "Computer" otherwise.
    pub fn display_name(&self, piece: Piece) -> &str {
        if piece == Self::HUMAN {
            &self.config.player_name
        } else {
            COMPUTER_NAME
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    fn session() -> Session {
        Session::new(SessionConfig {
            player_name: "Ada".to_string(),
            human_moves_first: true,
        })
    }

    #[test]
    fn test_initial_session() {
        let session = session();
        assert_eq!(session.to_move(), Piece::Blue);
        assert!(session.is_human_turn());
        assert_eq!(session.outcome(), GameOutcome::Ongoing);
        assert_eq!(session.board().valid_columns().len(), 7);
    }

    #[test]
    fn test_computer_first() {
        let session = Session::new(SessionConfig {
            player_name: "Ada".to_string(),
            human_moves_first: false,
        });
        assert_eq!(session.to_move(), Piece::Red);
        assert!(!session.is_human_turn());
    }

    #[test]
    fn test_play_alternates() {
        let mut session = session();
        assert_eq!(session.play(3), Ok(GameOutcome::Ongoing));
        assert_eq!(session.to_move(), Piece::Red);
        assert_eq!(session.board().get(0, 3), Cell::Filled(Piece::Blue));

        session.play(3).unwrap();
        assert_eq!(session.board().get(1, 3), Cell::Filled(Piece::Red));
        assert_eq!(session.to_move(), Piece::Blue);
    }

    #[test]
    fn test_illegal_moves_keep_turn() {
        let mut session = session();
        assert_eq!(session.play(9), Err(MoveError::InvalidColumn(9)));
        assert_eq!(session.to_move(), Piece::Blue);

        for _ in 0..6 {
            session.play(0).unwrap();
        }
        assert_eq!(session.play(0), Err(MoveError::ColumnFull(0)));
        assert_eq!(session.to_move(), Piece::Blue);
    }

    #[test]
    fn test_win_and_game_over() {
        let mut session = session();
        // Blue builds the bottom row, Red stacks on top
        for col in 0..3 {
            session.play(col).unwrap();
            session.play(col).unwrap();
        }
        assert_eq!(session.play(3), Ok(GameOutcome::Winner(Piece::Blue)));
        assert_eq!(session.play(4), Err(MoveError::GameOver));
        assert_eq!(session.display_name(Piece::Blue), "Ada");
        assert_eq!(session.display_name(Piece::Red), "Computer");
    }

    #[test]
    fn test_restart() {
        let mut session = session();
        session.play(2).unwrap();
        session.restart();
        assert_eq!(*session.board(), Board::new());
        assert_eq!(session.to_move(), Piece::Blue);
        assert_eq!(session.player_name(), "Ada");
    }
}
