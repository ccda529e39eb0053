//! Deductive sudoku solving.
//!
//! Solves 9×9 sudokus the way a human would: by eliminating candidates with
//! named techniques of increasing power, never by guessing. Puzzles beyond
//! the reach of the implemented techniques stall instead of erroring, and
//! every deduced digit can be checked against a known solution.
//!
//! ```
//! use sudoku_deduce::{Grid, SolveOutcome};
//!
//! let puzzle =
//!     "004300209005009001070060043006002087190007400050083000600000105003508690042910300";
//! let solution =
//!     "864371259325849761971265843436192587198657432257483916689734125713528694542916378";
//!
//! let mut grid = Grid::new(puzzle, solution)?;
//! assert_eq!(grid.general_solve()?, SolveOutcome::Solved);
//! assert!(grid.is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![warn(missing_docs)]

mod bitset;
mod board;
mod errors;
mod grid;
mod helper;
mod solver;
mod strategies;

pub use crate::bitset::{Iter, Set, SetElement};
pub use crate::board::{Cell, CellId, CellState, Digit, House, HouseIndex, HouseType};
pub use crate::errors::{Overconstrained, ParseError};
pub use crate::grid::Grid;
pub use crate::solver::SolveOutcome;
pub use crate::strategies::Technique;
