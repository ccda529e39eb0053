//! The solve driver: repetition, ordering and escalation of techniques.
//!
//! Termination is structural. Unsolved cells always keep at least one
//! candidate and techniques only ever remove candidates, so the total
//! candidate count is monotonically non-increasing and bounded by zero.
//! Every loop below runs only while that count strictly decreases.

use crate::errors::Overconstrained;
use crate::strategies::Technique;
use crate::Grid;

/// Terminal state of a solve attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveOutcome {
    /// Every cell has a solution.
    Solved,
    /// The given techniques can make no further progress.
    Stalled,
}

impl Grid {
    /// Applies one technique repeatedly until a pass removes nothing.
    pub fn apply_until_stable(&mut self, technique: Technique) -> Result<(), Overconstrained> {
        loop {
            let before = self.candidates_in_grid();
            technique.apply(self)?;
            self.passes += 1;
            let after = self.candidates_in_grid();
            log::trace!(
                "{:?} pass {}: {} -> {} candidates",
                technique,
                self.passes,
                before,
                after
            );
            if after == before {
                return Ok(());
            }
        }
    }

    /// Runs an ordered set of techniques to its combined fixed point.
    ///
    /// Whenever a technique other than the first makes progress, the run
    /// restarts from the first, so cheap deductions are always exhausted
    /// before a more powerful technique is consulted again.
    pub fn solve_with(&mut self, techniques: &[Technique]) -> Result<SolveOutcome, Overconstrained> {
        'restart: loop {
            for (rank, &technique) in techniques.iter().enumerate() {
                let before = self.candidates_in_grid();
                self.apply_until_stable(technique)?;
                if rank > 0 && self.candidates_in_grid() < before {
                    continue 'restart;
                }
            }
            break;
        }
        Ok(self.outcome())
    }

    /// Solves with escalation.
    ///
    /// Starts with the weakest technique alone and appends the next one
    /// from [`Technique::ESCALATION`] each time the current set stalls.
    /// Returns [`SolveOutcome::Stalled`] once the full set stalls.
    pub fn general_solve(&mut self) -> Result<SolveOutcome, Overconstrained> {
        let order = Technique::ESCALATION;
        for len in 1..=order.len() {
            if self.solve_with(&order[..len])? == SolveOutcome::Solved {
                log::debug!("solved after {} technique passes", self.passes());
                return Ok(SolveOutcome::Solved);
            }
            if len < order.len() {
                log::debug!("stalled, escalating to {:?}", order[len]);
            }
        }
        Ok(SolveOutcome::Stalled)
    }

    fn outcome(&self) -> SolveOutcome {
        // unsolved cells keep at least one candidate, so a zero count
        // means 81 solutions
        if self.candidates_in_grid() == 0 {
            SolveOutcome::Solved
        } else {
            SolveOutcome::Stalled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "004300209005009001070060043006002087190007400050083000600000105003508690042910300";
    const SOLUTION: &str =
        "864371259325849761971265843436192587198657432257483916689734125713528694542916378";

    #[test]
    fn single_candidates_reduce_the_grid() {
        let mut grid = Grid::new(PUZZLE, SOLUTION).unwrap();
        let before = grid.candidates_in_grid();
        grid.apply_until_stable(Technique::SingleCandidate).unwrap();
        assert!(grid.candidates_in_grid() < before);
        assert!(grid.passes() > 0);
    }

    #[test]
    fn outcome_reflects_candidate_count() {
        let mut grid = Grid::new(PUZZLE, SOLUTION).unwrap();
        assert_eq!(grid.solve_with(&[]).unwrap(), SolveOutcome::Stalled);
        assert_eq!(grid.general_solve().unwrap(), SolveOutcome::Solved);
        assert_eq!(grid.candidates_in_grid(), 0);
    }
}
