//! The grid: cell arena, house index and candidate propagation.

use crate::bitset::Set;
use crate::board::houses::{build_houses, HouseIndex};
use crate::board::{Cell, CellId, CellState, Digit};
use crate::errors::{Overconstrained, ParseError};
use crate::helper::CellArray;
use std::fmt;

/// Change listeners receive the cell that changed together with its new
/// state, synchronously after every candidate removal or solution.
type ChangeListener = Box<dyn FnMut(CellId, CellState)>;

/// A 9×9 sudoku under deduction.
///
/// Owns all 81 [`Cell`]s, the house index derived from their coordinates
/// and the reference solution used for verification. Constructed from an
/// 81-character clue string, mutated in place by technique application.
pub struct Grid {
    cells: CellArray<Cell>,
    houses: HouseIndex,
    reference: [Digit; 81],
    listeners: Vec<ChangeListener>,
    pub(crate) passes: u32,
}

impl Grid {
    /// Constructs a grid from an 81-character puzzle string (`0` for
    /// unknown cells) and an 81-character solution string (digits `1`-`9`),
    /// both row-major. The solution is used for verification only.
    pub fn new(puzzle: &str, solution: &str) -> Result<Grid, ParseError> {
        let clues = parse_line(puzzle, true)?;
        let solved = parse_line(solution, false)?;

        let mut cells = [Cell::new(0); 81];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = Cell::new(i as u8);
            cell.set_given(clues[i]);
        }
        let cells = CellArray(cells);

        let mut reference = [Digit::new(1); 81];
        for (digit, &value) in reference.iter_mut().zip(solved.iter()) {
            *digit = Digit::new(value);
        }

        Ok(Grid {
            houses: build_houses(&cells),
            cells,
            reference,
            listeners: vec![],
            passes: 0,
        })
    }

    /// Registers a listener invoked synchronously after each candidate set
    /// change or solution, with the cell index and its new state.
    pub fn on_change(&mut self, listener: impl FnMut(CellId, CellState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, id: CellId) {
        let state = match self.cells[id].solution() {
            Some(digit) => CellState::Digit(digit),
            None => CellState::Candidates(self.cells[id].candidates()),
        };
        for listener in &mut self.listeners {
            listener(id, state);
        }
    }

    /// The cell at `id`.
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id]
    }

    /// The house index of this grid.
    pub fn houses(&self) -> &HouseIndex {
        &self.houses
    }

    /// Fixes a solution and clears the cell's candidates.
    pub(crate) fn set_solution(&mut self, id: CellId, digit: Digit) {
        self.cells[id].set_solution(digit);
        self.notify(id);
    }

    /// Removes a candidate. A no-op if the candidate is absent.
    ///
    /// Errors if the removal would leave an unsolved cell with no
    /// candidates at all.
    pub(crate) fn eliminate(&mut self, id: CellId, digit: Digit) -> Result<(), Overconstrained> {
        let cell = &mut self.cells[id];
        if !cell.candidates().contains(digit) {
            return Ok(());
        }
        if cell.candidates().len() == 1 {
            return Err(Overconstrained { cell: id.get() });
        }
        cell.remove_candidate(digit);
        self.notify(id);
        Ok(())
    }

    /// Removes the solved values of all house neighbors from the
    /// candidates of `id` — the basic constraint rule of sudoku.
    pub fn propagate_cell(&mut self, id: CellId) -> Result<(), Overconstrained> {
        if self.cells[id].solution().is_some() {
            return Ok(());
        }
        let mut solved = Set::NONE;
        for &house in &self.houses.houses_of(id) {
            for other in self.houses.members(house).without(id) {
                if let Some(digit) = self.cells[other].solution() {
                    solved |= digit;
                }
            }
        }
        for digit in solved & self.cells[id].candidates() {
            self.eliminate(id, digit)?;
        }
        Ok(())
    }

    /// Applies [`propagate_cell`](Grid::propagate_cell) to all 81 cells.
    pub fn propagate_grid(&mut self) -> Result<(), Overconstrained> {
        for id in CellId::all() {
            self.propagate_cell(id)?;
        }
        Ok(())
    }

    /// Promotes every cell with exactly one remaining candidate to a
    /// solution.
    pub fn promote_singles(&mut self) {
        for id in CellId::all() {
            let candidates = self.cells[id].candidates();
            if candidates.len() == 1 {
                self.set_solution(id, candidates.one_possibility());
            }
        }
    }

    /// One round of the baseline technique: propagate, then promote
    /// singles.
    pub fn single_candidate_pass(&mut self) -> Result<(), Overconstrained> {
        self.propagate_grid()?;
        self.promote_singles();
        Ok(())
    }

    /// Total number of candidates over all cells. Monotonically
    /// non-increasing under technique application; `0` iff every cell is
    /// solved.
    pub fn candidates_in_grid(&self) -> u32 {
        self.cells
            .iter()
            .map(|cell| u32::from(cell.candidates().len()))
            .sum()
    }

    /// Number of cells without a solution.
    pub fn unsolved_cells(&self) -> u32 {
        self.cells
            .iter()
            .filter(|cell| cell.solution().is_none())
            .count() as u32
    }

    /// Checks all 81 solutions against the reference solution.
    pub fn is_solved(&self) -> bool {
        CellId::all().all(|id| self.cells[id].solution() == Some(self.reference[id.as_index()]))
    }

    /// Current solved/unsolved state for rendering.
    pub fn snapshot(&self) -> [Option<u8>; 81] {
        let mut state = [None; 81];
        for (slot, cell) in state.iter_mut().zip(self.cells.iter()) {
            *slot = cell.solution().map(Digit::get);
        }
        state
    }

    /// The current state as an 81-character line, `0` for unsolved cells.
    pub fn solution_line(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell.solution() {
                Some(digit) => (b'0' + digit.get()) as char,
                None => '0',
            })
            .collect()
    }

    /// Number of technique passes the driver has run so far.
    pub fn passes(&self) -> u32 {
        self.passes
    }

    #[cfg(test)]
    pub(crate) fn cell_mut(&mut self, id: CellId) -> &mut Cell {
        &mut self.cells[id]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for id in CellId::all() {
            let cell = &self.cells[id];
            match (cell.row(), cell.col()) {
                (_, 4) | (_, 7) => write!(f, " ")?, // separate blocks in columns
                (4, 1) | (7, 1) => write!(f, "\n\n")?, // separate blocks in rows
                (_, 1) if cell.row() != 1 => writeln!(f)?,
                _ => {}
            }
            match cell.solution() {
                Some(digit) => write!(f, "{}", digit.get())?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

fn parse_line(input: &str, allow_unknown: bool) -> Result<[u8; 81], ParseError> {
    let len = input.chars().count();
    if len != 81 {
        return Err(ParseError::InvalidLength(len));
    }
    let mut values = [0; 81];
    for (cell, ch) in input.chars().enumerate() {
        match ch.to_digit(10) {
            Some(0) if allow_unknown => values[cell] = 0,
            Some(digit) if digit != 0 => values[cell] = digit as u8,
            _ => {
                return Err(ParseError::InvalidDigit {
                    cell: cell as u8,
                    ch,
                })
            }
        }
    }
    Ok(values)
}
