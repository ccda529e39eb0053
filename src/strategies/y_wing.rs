//! Y-Wing: a bi-value pivot {x,y} with two pincers {x,z} and {y,z}, each
//! visible from the pivot. Whichever digit the pivot takes forces a z into
//! one of the pincers, so no cell seeing both pincers can hold z.

use crate::board::CellId;
use crate::errors::Overconstrained;
use crate::Grid;

pub(crate) fn apply(grid: &mut Grid) -> Result<(), Overconstrained> {
    for pivot in CellId::all() {
        let pivot_digits = grid.cell(pivot).candidates();
        if pivot_digits.len() != 2 {
            continue;
        }
        let pincers: Vec<CellId> = grid
            .houses()
            .peers(pivot)
            .into_iter()
            .filter(|&id| {
                let candidates = grid.cell(id).candidates();
                candidates.len() == 2 && (candidates & pivot_digits).len() == 1
            })
            .collect();
        for (offset, &first) in pincers.iter().enumerate() {
            for &second in &pincers[offset + 1..] {
                // refetch, earlier eliminations may have shrunk a pincer
                let first_digits = grid.cell(first).candidates();
                let second_digits = grid.cell(second).candidates();
                if first_digits.len() != 2 || second_digits.len() != 2 {
                    continue;
                }
                let shared = first_digits & second_digits;
                if shared.len() != 1
                    || (first_digits | second_digits | pivot_digits).len() != 3
                    || pivot_digits.contains(shared)
                {
                    continue;
                }
                let digit = shared.one_possibility();
                for id in grid.houses().peers(first) & grid.houses().peers(second) {
                    grid.eliminate(id, digit)?;
                }
            }
        }
    }
    Ok(())
}
