use crate::bitset::Set;
use crate::board::Digit;

/// A single puzzle position.
///
/// A cell is either solved, in which case it holds a digit and no
/// candidates, or unsolved, in which case it holds a nonempty candidate set
/// and no digit. Givens are solved at construction and never re-opened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    row: u8,
    col: u8,
    block: u8,
    given: Option<Digit>,
    solution: Option<Digit>,
    candidates: Set<Digit>,
}

// maps a 1-based coordinate to its containing triple, also 1-based
// (rows fall into horizontal bands, columns into vertical stacks)
fn triple(coord: u8) -> u8 {
    (coord - 1) / 3 + 1
}

impl Cell {
    /// Constructs an unsolved cell from its linear index, deriving the
    /// row, column and block coordinates (all 1-based).
    pub(crate) fn new(index: u8) -> Self {
        debug_assert!(index < 81);
        let row = index / 9 + 1;
        let col = index % 9 + 1;
        Cell {
            row,
            col,
            block: 3 * triple(row) + triple(col) - 3,
            given: None,
            solution: None,
            candidates: Set::ALL,
        }
    }

    /// Row coordinate, `1..=9`, top to bottom.
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Column coordinate, `1..=9`, left to right.
    pub fn col(&self) -> u8 {
        self.col
    }

    /// Block coordinate, `1..=9`, left to right, top to bottom.
    pub fn block(&self) -> u8 {
        self.block
    }

    /// The clue this cell was constructed with, if any.
    pub fn given(&self) -> Option<Digit> {
        self.given
    }

    /// The solved digit, if any.
    pub fn solution(&self) -> Option<Digit> {
        self.solution
    }

    /// The remaining candidates. Empty iff the cell is solved.
    pub fn candidates(&self) -> Set<Digit> {
        self.candidates
    }

    /// Fixes a clue. `0` means no clue and is a no-op.
    pub(crate) fn set_given(&mut self, value: u8) {
        if let Some(digit) = Digit::new_checked(value) {
            self.given = Some(digit);
            self.set_solution(digit);
        }
    }

    /// Fixes the solution and clears the candidates unconditionally.
    pub(crate) fn set_solution(&mut self, digit: Digit) {
        self.solution = Some(digit);
        self.candidates = Set::NONE;
    }

    /// Removes `digit` from the candidate set. Returns whether it was present.
    pub(crate) fn remove_candidate(&mut self, digit: Digit) -> bool {
        let present = self.candidates.contains(digit);
        self.candidates.remove(digit);
        present
    }

    #[cfg(test)]
    pub(crate) fn set_candidates(&mut self, candidates: Set<Digit>) {
        self.solution = None;
        self.candidates = candidates;
    }
}
