//! Block/line intersections, both directions.
//!
//! A block overlaps each of the three rows and three columns crossing it in
//! exactly three cells. When a digit's candidates within one house are
//! confined to such an overlap, the other house must place the digit there
//! too, and loses the digit everywhere outside the overlap. Confinement in
//! the block eliminates along the line ("pointing"); confinement in the
//! line eliminates in the block ("claiming").

use crate::bitset::Set;
use crate::board::House;
use crate::errors::Overconstrained;
use crate::Grid;

pub(crate) fn apply(grid: &mut Grid) -> Result<(), Overconstrained> {
    for block_pos in 0..9 {
        let block = House::block(block_pos);
        let band = block_pos / 3;
        let stack = block_pos % 3;
        for offset in 0..3 {
            for &line in &[House::row(band * 3 + offset), House::col(stack * 3 + offset)] {
                eliminate_confined(grid, block, line)?;
                eliminate_confined(grid, line, block)?;
            }
        }
    }
    Ok(())
}

// digits confined to base ∩ cover are removed from the rest of cover
fn eliminate_confined(grid: &mut Grid, base: House, cover: House) -> Result<(), Overconstrained> {
    let base_members = grid.houses().members(base);
    let cover_members = grid.houses().members(cover);
    let overlap = base_members & cover_members;
    let base_rest = base_members.without(overlap);

    let mut overlap_digits = Set::NONE;
    for id in overlap {
        overlap_digits |= grid.cell(id).candidates();
    }

    let mut confined = Set::NONE;
    for digit in overlap_digits {
        let in_overlap = overlap
            .into_iter()
            .filter(|&id| grid.cell(id).candidates().contains(digit))
            .count();
        let outside = base_rest
            .into_iter()
            .any(|id| grid.cell(id).candidates().contains(digit));
        if in_overlap >= 2 && !outside {
            confined |= digit;
        }
    }

    for digit in confined {
        for id in cover_members.without(overlap) {
            grid.eliminate(id, digit)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellId, Digit};

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
    fn block_confinement_clears_the_line() {
        let mut grid = Grid::new(EMPTY, SOLUTION).unwrap();
        // digit 5 in the top-left block appears only in row 1 (cells 0, 2)
        for &idx in &[9, 10, 11, 18, 19, 20] {
            grid.cell_mut(CellId::new(idx))
                .set_candidates(digits(&[1, 2, 3, 4]));
        }

        apply(&mut grid).unwrap();

        // rest of row 1 loses the 5, the block keeps it
        for idx in 3..9 {
            assert!(
                !grid.cell(CellId::new(idx)).candidates().contains(Digit::new(5)),
                "cell {}",
                idx
            );
        }
        assert!(grid.cell(CellId::new(0)).candidates().contains(Digit::new(5)));
        assert!(grid.cell(CellId::new(2)).candidates().contains(Digit::new(5)));
    }

    #[test]
    fn line_confinement_clears_the_block() {
        let mut grid = Grid::new(EMPTY, SOLUTION).unwrap();
        // digit 8 in row 1 appears only inside the top-left block
        for idx in 3..9 {
            grid.cell_mut(CellId::new(idx))
                .set_candidates(digits(&[1, 2, 3, 4]));
        }

        apply(&mut grid).unwrap();

        // block cells outside row 1 lose the 8
        for &idx in &[9, 10, 11, 18, 19, 20] {
            assert!(
                !grid.cell(CellId::new(idx)).candidates().contains(Digit::new(8)),
                "cell {}",
                idx
            );
        }
        assert!(grid.cell(CellId::new(0)).candidates().contains(Digit::new(8)));
    }
}
