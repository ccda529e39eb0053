//! The deduction techniques, one module per technique.
//!
//! Every technique shares the same contract: inspect the grid, perform zero
//! or more candidate removals or solutions, and leave a stable grid
//! unchanged when applied again. None of them guess; a puzzle outside their
//! combined reach stalls.

use crate::errors::Overconstrained;
use crate::Grid;

mod bi_value_graveyard;
mod hidden_single;
mod naked_subsets;
mod pointing_pairs;
mod x_wing;
mod y_wing;

/// A deduction technique, applied by the solve driver.
///
/// Ordered by deductive power. [`ESCALATION`](Technique::ESCALATION) lists
/// all of them, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum Technique {
    /// Eliminate solved neighbors, promote cells with one candidate left.
    SingleCandidate,
    /// Promote candidates unique within one of their houses.
    HiddenSingle,
    /// Naked pairs and triples: candidates confined to a matching group of
    /// cells are removed from the rest of the house.
    NakedSubsets,
    /// Block/line intersections: a digit confined to the overlap of two
    /// houses is removed from the rest of the other house.
    PointingPairs,
    /// Bi-value graveyard: when all unsolved cells but one hold exactly two
    /// candidates, the exception can be solved directly.
    BiValueGraveyard,
    /// Rectangle of exactly two aligned positions of a digit in two
    /// parallel houses.
    XWing,
    /// Bi-value pivot with two pincers; the candidate shared by the pincers
    /// is removed from cells seeing both.
    YWing,
}

impl Technique {
    /// All techniques in escalation order, weakest first.
    pub const ESCALATION: &'static [Technique] = &[
        Technique::SingleCandidate,
        Technique::HiddenSingle,
        Technique::NakedSubsets,
        Technique::PointingPairs,
        Technique::BiValueGraveyard,
        Technique::XWing,
        Technique::YWing,
    ];

    /// Runs one pass of this technique over the whole grid.
    pub(crate) fn apply(self, grid: &mut Grid) -> Result<(), Overconstrained> {
        match self {
            Technique::SingleCandidate => grid.single_candidate_pass(),
            Technique::HiddenSingle => hidden_single::apply(grid),
            Technique::NakedSubsets => naked_subsets::apply(grid),
            Technique::PointingPairs => pointing_pairs::apply(grid),
            Technique::BiValueGraveyard => bi_value_graveyard::apply(grid),
            Technique::XWing => x_wing::apply(grid),
            Technique::YWing => y_wing::apply(grid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn escalation_covers_all_techniques_once() {
        let all: Vec<Technique> = Technique::iter().collect();
        assert_eq!(Technique::ESCALATION, &all[..]);
    }

    #[test]
    fn techniques_are_idempotent_on_a_stable_grid() {
        let puzzle =
            "004300209005009001070060043006002087190007400050083000600000105003508690042910300";
        let solution =
            "864371259325849761971265843436192587198657432257483916689734125713528694542916378";
        for technique in Technique::iter() {
            let mut grid = Grid::new(puzzle, solution).unwrap();
            grid.apply_until_stable(technique).unwrap();
            let stable = grid.candidates_in_grid();
            technique.apply(&mut grid).unwrap();
            assert_eq!(
                grid.candidates_in_grid(),
                stable,
                "{:?} progressed on its own fixed point",
                technique
            );
        }
    }
}
