//! The house index: which cells share a constraint with which.
//!
//! Membership is structural, derived from cell coordinates alone. It is
//! computed once per grid construction and never invalidated by candidate
//! mutation.

use crate::bitset::Set;
use crate::board::{Cell, CellId, House};
use crate::helper::{CellArray, HouseArray};

/// Per-house member sets and per-cell house/peer lookups for one grid.
#[derive(Copy, Clone, Debug)]
pub struct HouseIndex {
    members: HouseArray<Set<CellId>>,
    houses_of: CellArray<[House; 3]>,
    peers: CellArray<Set<CellId>>,
}

/// Groups all 81 cells by matching row, column and block coordinate.
pub(crate) fn build_houses(cells: &CellArray<Cell>) -> HouseIndex {
    let mut members = HouseArray([Set::NONE; 27]);
    let mut houses_of = CellArray([[House::row(0); 3]; 81]);

    for (id, cell) in CellId::all().zip(cells.iter()) {
        let houses = [
            House::row(cell.row() - 1),
            House::col(cell.col() - 1),
            House::block(cell.block() - 1),
        ];
        for &house in &houses {
            members[house] |= id;
        }
        houses_of[id] = houses;
    }

    let mut peers = CellArray([Set::NONE; 81]);
    for id in CellId::all() {
        let seen = houses_of[id]
            .iter()
            .fold(Set::NONE, |set, &house| set | members[house]);
        peers[id] = seen.without(id);
    }

    HouseIndex {
        members,
        houses_of,
        peers,
    }
}

impl HouseIndex {
    /// All 9 cells of `house`.
    pub fn members(&self, house: House) -> Set<CellId> {
        self.members[house]
    }

    /// The row, column and block house of `cell`, in that order.
    pub fn houses_of(&self, cell: CellId) -> [House; 3] {
        self.houses_of[cell]
    }

    /// The 20 cells sharing at least one house with `cell`, excluding `cell`.
    pub fn peers(&self, cell: CellId) -> Set<CellId> {
        self.peers[cell]
    }
}
