//! Naked pairs and triples.
//!
//! If the candidates of n cells in a house together span only n digits,
//! those digits are locked into the group and can be removed from every
//! other cell of the house. Matching is on the union of the group's
//! candidates, so {1,2} + {2,3} + {1,3} forms a triple just like three
//! full {1,2,3} cells.

use crate::bitset::Set;
use crate::board::{CellId, Digit, House};
use crate::errors::Overconstrained;
use crate::Grid;

pub(crate) fn apply(grid: &mut Grid) -> Result<(), Overconstrained> {
    for size in 2..=3 {
        for house in House::all() {
            eliminate_subsets(grid, house, size)?;
        }
    }
    Ok(())
}

fn eliminate_subsets(grid: &mut Grid, house: House, size: u8) -> Result<(), Overconstrained> {
    let members = grid.houses().members(house);
    let unsolved: Vec<CellId> = members
        .into_iter()
        .filter(|&id| !grid.cell(id).candidates().is_empty())
        .collect();

    let mut subsets = vec![];
    walk_combinations(grid, &unsolved, 0, Set::NONE, Set::NONE, size, &mut subsets);

    for (cells, digits) in subsets {
        for id in members.without(cells) {
            for digit in digits {
                grid.eliminate(id, digit)?;
            }
        }
    }
    Ok(())
}

// depth-first over index combinations, pruned once the candidate union
// exceeds the subset size
fn walk_combinations(
    grid: &Grid,
    unsolved: &[CellId],
    start: usize,
    cells: Set<CellId>,
    digits: Set<Digit>,
    size: u8,
    subsets: &mut Vec<(Set<CellId>, Set<Digit>)>,
) {
    if cells.len() == size {
        if digits.len() == size {
            subsets.push((cells, digits));
        }
        return;
    }
    for (offset, &id) in unsolved[start..].iter().enumerate() {
        let union = digits | grid.cell(id).candidates();
        if union.len() > size {
            continue;
        }
        walk_combinations(
            grid,
            unsolved,
            start + offset + 1,
            cells | id,
            union,
            size,
            subsets,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: &str =
        "000000000000000000000000000000000000000000000000000000000000000000000000000000000";
    const SOLUTION: &str =
        "123456789456789123789123456214365897365897214897214365531642978642978531978531642";

    fn digits(digits: &[u8]) -> Set<Digit> {
        digits
            .iter()
            .fold(Set::NONE, |set, &digit| set | Digit::new(digit))
    }

    #[test]
    fn naked_pair_clears_rest_of_row() {
        let mut grid = Grid::new(EMPTY, SOLUTION).unwrap();
        grid.cell_mut(CellId::new(0)).set_candidates(digits(&[4, 7]));
        grid.cell_mut(CellId::new(5)).set_candidates(digits(&[4, 7]));

        apply(&mut grid).unwrap();

        for idx in 1..9 {
            if idx == 5 {
                continue;
            }
            let candidates = grid.cell(CellId::new(idx)).candidates();
            assert!(!candidates.contains(Digit::new(4)), "cell {}", idx);
            assert!(!candidates.contains(Digit::new(7)), "cell {}", idx);
        }
        // the pair itself is untouched
        assert_eq!(grid.cell(CellId::new(0)).candidates(), digits(&[4, 7]));
        assert_eq!(grid.cell(CellId::new(5)).candidates(), digits(&[4, 7]));
    }

    #[test]
    fn triple_matches_on_candidate_union() {
        let mut grid = Grid::new(EMPTY, SOLUTION).unwrap();
        // no pair among these, but together they span exactly {1,2,3}
        grid.cell_mut(CellId::new(9)).set_candidates(digits(&[1, 2]));
        grid.cell_mut(CellId::new(12)).set_candidates(digits(&[2, 3]));
        grid.cell_mut(CellId::new(16)).set_candidates(digits(&[1, 3]));

        apply(&mut grid).unwrap();

        for idx in [10, 11, 13, 14, 15, 17].iter() {
            let candidates = grid.cell(CellId::new(*idx)).candidates();
            assert!(!candidates.contains(Digit::new(1)), "cell {}", idx);
            assert!(!candidates.contains(Digit::new(2)), "cell {}", idx);
            assert!(!candidates.contains(Digit::new(3)), "cell {}", idx);
        }
    }
}
