//! Errors reported by the engine

/// Error for [`Grid::new`](crate::Grid::new)
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input string is not exactly 81 characters long
    #[error("input should have length 81, found {0}")]
    InvalidLength(usize),
    /// Character outside `0`-`9` (puzzle) or `1`-`9` (solution)
    #[error("cell {cell} contains invalid character {ch:?}")]
    InvalidDigit {
        /// Cell number from 0..=80, row-major
        cell: u8,
        /// The offending character
        ch: char,
    },
}

/// A technique tried to remove the last candidate of an unsolved cell.
///
/// This signals either a contradictory puzzle or a defect in a technique.
/// It is checked on every elimination and reported instead of corrupting
/// grid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("all candidates eliminated from cell {cell} without a solution")]
pub struct Overconstrained {
    /// Cell number from 0..=80, row-major
    pub cell: u8,
}
