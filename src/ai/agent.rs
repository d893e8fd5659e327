use crate::game::Board;

/// Anything that can pick a column for the side it plays.
pub trait Agent {
    /// Select a column for a non-terminal `board`.
    fn select_column(&mut self, board: &Board) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
