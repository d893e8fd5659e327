//! Core Connect Four game logic: board representation, pieces, and the
//! human-versus-computer session driven by the front end.

mod board;
mod player;
mod session;

pub use board::{window_coords, Board, Cell, GameOutcome, Window, COLS, ROWS, WINDOW_LEN};
pub use player::Piece;
pub use session::{Session, SessionConfig, COMPUTER_NAME};
