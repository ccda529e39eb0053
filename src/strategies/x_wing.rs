//! X-Wing: a digit restricted to exactly two positions in each of two
//! parallel houses, with the positions aligned, forms a rectangle. The
//! digit must land on one diagonal of it, so the two crossing houses lose
//! the digit everywhere outside the corners.

use crate::bitset::Set;
use crate::board::{Cell, CellId, Digit, House};
use crate::errors::Overconstrained;
use crate::Grid;

pub(crate) fn apply(grid: &mut Grid) -> Result<(), Overconstrained> {
    for digit in Digit::all() {
        // rows as base houses, then columns
        eliminate_rectangles(grid, digit, House::row, House::col, |cell| cell.col() - 1)?;
        eliminate_rectangles(grid, digit, House::col, House::row, |cell| cell.row() - 1)?;
    }
    Ok(())
}

fn eliminate_rectangles(
    grid: &mut Grid,
    digit: Digit,
    base: fn(u8) -> House,
    cross: fn(u8) -> House,
    cross_pos: fn(&Cell) -> u8,
) -> Result<(), Overconstrained> {
    for first in 0..8 {
        for second in first + 1..9 {
            let corners_first = positions(grid, base(first), digit);
            if corners_first.len() != 2 {
                continue;
            }
            let corners_second = positions(grid, base(second), digit);
            if corners_second.len() != 2 {
                continue;
            }
            // ascending set iteration makes the position pairs comparable
            let at = |corners: Set<CellId>| -> Vec<u8> {
                corners
                    .into_iter()
                    .map(|id| cross_pos(grid.cell(id)))
                    .collect()
            };
            let aligned = at(corners_first);
            if aligned != at(corners_second) {
                continue;
            }
            let corners = corners_first | corners_second;
            for &pos in &aligned {
                for id in grid.houses().members(cross(pos)).without(corners) {
                    grid.eliminate(id, digit)?;
                }
            }
        }
    }
    Ok(())
}

fn positions(grid: &Grid, house: House, digit: Digit) -> Set<CellId> {
    grid.houses()
        .members(house)
        .into_iter()
        .filter(|&id| grid.cell(id).candidates().contains(digit))
        .fold(Set::NONE, |set, id| set | id)
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
    fn aligned_rectangle_clears_the_columns() {
        let mut grid = Grid::new(EMPTY, SOLUTION).unwrap();
        // digit 5 appears exactly twice in rows 2 and 5, in columns 3 and 7
        for row in &[1u8, 4] {
            for col in 0..9u8 {
                let id = CellId::new(row * 9 + col);
                let with_five = col == 2 || col == 6;
                let mut candidates = digits(&[1, 2, 3, 4]);
                if with_five {
                    candidates |= Digit::new(5);
                }
                grid.cell_mut(id).set_candidates(candidates);
            }
        }

        apply(&mut grid).unwrap();

        for row in 0..9u8 {
            for &col in &[2u8, 6] {
                let id = CellId::new(row * 9 + col);
                let has_five = grid.cell(id).candidates().contains(Digit::new(5));
                let is_corner = row == 1 || row == 4;
                assert_eq!(has_five, is_corner, "r{}c{}", row + 1, col + 1);
            }
        }
    }

    #[test]
    fn misaligned_positions_are_left_alone() {
        let mut grid = Grid::new(EMPTY, SOLUTION).unwrap();
        // two positions each, but columns 3/7 vs 3/8
        for (row, cols) in &[(1u8, [2u8, 6]), (4, [2, 7])] {
            for col in 0..9u8 {
                let id = CellId::new(row * 9 + col);
                let mut candidates = digits(&[1, 2, 3, 4]);
                if cols.contains(&col) {
                    candidates |= Digit::new(5);
                }
                grid.cell_mut(id).set_candidates(candidates);
            }
        }
        let before = grid.candidates_in_grid();
        apply(&mut grid).unwrap();
        assert_eq!(grid.candidates_in_grid(), before);
    }
}
