//! Hidden singles: a candidate that appears in no other cell of one of its
//! houses must be that cell's solution, no matter how many candidates the
//! cell itself still holds.

use crate::bitset::Set;
use crate::board::CellId;
use crate::errors::Overconstrained;
use crate::Grid;

pub(crate) fn apply(grid: &mut Grid) -> Result<(), Overconstrained> {
    for id in CellId::all() {
        let candidates = grid.cell(id).candidates();
        if candidates.is_empty() {
            continue;
        }
        for &house in &grid.houses().houses_of(id) {
            let mut elsewhere = Set::NONE;
            for other in grid.houses().members(house).without(id) {
                elsewhere |= grid.cell(other).candidates();
            }
            let unique = candidates.without(elsewhere);
            if unique.len() == 1 {
                let digit = unique.one_possibility();
                grid.set_solution(id, digit);
                for peer in grid.houses().peers(id) {
                    grid.eliminate(peer, digit)?;
                }
                break;
            }
        }
    }
    Ok(())
}
