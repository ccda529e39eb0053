//! Types for cells, digits and houses on a sudoku board
mod cell;
mod cell_state;
mod digit;
pub(crate) mod houses;
mod positions;

pub use self::{
    cell::Cell,
    cell_state::CellState,
    digit::Digit,
    houses::HouseIndex,
    positions::{CellId, House, HouseType},
};
