//! Bi-value graveyard.
//!
//! A grid in which every unsolved cell holds exactly two candidates would
//! admit two symmetric solutions, so a uniquely solvable puzzle never
//! reaches that state. When exactly one cell still holds three candidates
//! and all others two, the deadlock can be broken: the extra candidate is
//! the one occurring three times in one of the cell's houses, and it must
//! be that cell's solution.

use crate::board::CellId;
use crate::errors::Overconstrained;
use crate::Grid;

pub(crate) fn apply(grid: &mut Grid) -> Result<(), Overconstrained> {
    let total = grid.candidates_in_grid();
    // odd total with an average of two candidates per unsolved cell means
    // a single tri-value exception among bi-value cells
    if total % 2 == 0 || total / 2 != grid.unsolved_cells() {
        return Ok(());
    }
    for id in CellId::all() {
        let candidates = grid.cell(id).candidates();
        if candidates.len() != 3 {
            continue;
        }
        for &house in &grid.houses().houses_of(id) {
            for digit in candidates {
                let occurrences = grid
                    .houses()
                    .members(house)
                    .into_iter()
                    .filter(|&other| grid.cell(other).candidates().contains(digit))
                    .count();
                if occurrences == 3 {
                    grid.set_solution(id, digit);
                    grid.propagate_grid()?;
                    return Ok(());
                }
            }
        }
        return Ok(());
    }
    Ok(())
}
