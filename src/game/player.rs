use super::board::Cell;

/// One of the two tokens that can occupy a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Piece {
    Blue,
    Red,
}

impl Piece {
    /// Get the opposing piece
    pub fn other(self) -> Piece {
        match self {
            Piece::Blue => Piece::Red,
            Piece::Red => Piece::Blue,
        }
    }

    /// Convert piece to an occupied cell
    pub fn to_cell(self) -> Cell {
        Cell::Filled(self)
    }

    /// Get piece name for display
    pub fn name(self) -> &'static str {
        match self {
            Piece::Blue => "Blue",
            Piece::Red => "Red",
        }
    }
}
