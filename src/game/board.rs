use super::player::Piece;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of cells in a scoring window or a winning run.
pub const WINDOW_LEN: usize = 4;

/// Cell coordinates `(row, col)` of one window.
pub type Window = [(usize, usize); WINDOW_LEN];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Filled(Piece),
}

/// Outcome of a position. Derived from the cells on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Winner(Piece),
    Draw,
}

/// A 6x7 Connect Four grid. Row 0 is the bottom row.
///
/// `Board` is `Copy`: the search explores private copies and never touches the
/// caller's instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom, row 5 is the top
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// True iff `col` is on the board and its top cell is empty
    pub fn is_valid_column(&self, col: usize) -> bool {
        col < COLS && self.cells[ROWS - 1][col] == Cell::Empty
    }

    /// Lowest empty row of `col`.
    ///
    /// Panics if the column is out of range or full; check
    /// [`is_valid_column`](Self::is_valid_column) first.
    pub fn drop_row(&self, col: usize) -> usize {
        assert!(
            self.is_valid_column(col),
            "drop_row: column {col} cannot accept a piece"
        );

        for row in 0..ROWS {
            if self.cells[row][col] == Cell::Empty {
                return row;
            }
        }

        unreachable!("Column should have an empty cell if is_valid_column returned true");
    }

    /// Place `piece` at `(row, col)`.
    ///
    /// `row` must come from [`drop_row`](Self::drop_row); a placement that
    /// would overwrite a piece or leave a gap below it panics.
    pub fn apply_move(&mut self, row: usize, col: usize, piece: Piece) {
        assert!(
            row < ROWS && col < COLS,
            "apply_move: ({row}, {col}) is off the board"
        );
        assert!(
            self.cells[row][col] == Cell::Empty,
            "apply_move: ({row}, {col}) is already occupied"
        );
        assert!(
            row == 0 || self.cells[row - 1][col] != Cell::Empty,
            "apply_move: ({row}, {col}) would float above an empty cell"
        );
        self.cells[row][col] = piece.to_cell();
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, piece: Piece) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        if !self.is_valid_column(col) {
            return Err(MoveError::ColumnFull(col));
        }

        let row = self.drop_row(col);
        self.apply_move(row, col, piece);
        Ok(row)
    }

    /// Columns currently accepting a piece, ascending
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_valid_column(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_valid_column(col))
    }

    /// Number of occupied cells
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Contents of every length-4 window, in [`window_coords`] order.
    pub fn windows(&self) -> impl Iterator<Item = [Cell; WINDOW_LEN]> + '_ {
        window_coords().map(move |window| window.map(|(row, col)| self.cells[row][col]))
    }

    /// True if `piece` fills four consecutive cells in any direction
    pub fn has_four_in_a_row(&self, piece: Piece) -> bool {
        let target = piece.to_cell();
        self.windows()
            .any(|window| window.iter().all(|&cell| cell == target))
    }

    /// True if either side has won or no column accepts a piece
    pub fn is_terminal(&self) -> bool {
        self.outcome() != GameOutcome::Ongoing
    }

    /// Classify the position
    pub fn outcome(&self) -> GameOutcome {
        if self.has_four_in_a_row(Piece::Blue) {
            GameOutcome::Winner(Piece::Blue)
        } else if self.has_four_in_a_row(Piece::Red) {
            GameOutcome::Winner(Piece::Red)
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::Ongoing
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Every length-4 window on the board: horizontal, vertical, rising diagonal
/// (`/`), then falling diagonal (`\`).
pub fn window_coords() -> impl Iterator<Item = Window> {
    let horizontal =
        (0..ROWS).flat_map(|row| (0..=COLS - WINDOW_LEN).map(move |col| line(row, col, 0, 1)));
    let vertical =
        (0..COLS).flat_map(|col| (0..=ROWS - WINDOW_LEN).map(move |row| line(row, col, 1, 0)));
    let rising = (0..=ROWS - WINDOW_LEN)
        .flat_map(|row| (0..=COLS - WINDOW_LEN).map(move |col| line(row, col, 1, 1)));
    let falling = (WINDOW_LEN - 1..ROWS)
        .flat_map(|row| (0..=COLS - WINDOW_LEN).map(move |col| line(row, col, -1, 1)));

    horizontal.chain(vertical).chain(rising).chain(falling)
}

fn line(row: usize, col: usize, d_row: isize, d_col: isize) -> Window {
    std::array::from_fn(|i| {
        let i = i as isize;
        (
            (row as isize + d_row * i) as usize,
            (col as isize + d_col * i) as usize,
        )
    })
}
