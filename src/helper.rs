// Internal containers that can only be indexed by the right position structs

use crate::board::{CellId, House};
use std::ops::{Deref, DerefMut, Index, IndexMut};

/// Container with one slot for each of the 81 cells.
#[derive(Copy, Clone, Debug)]
pub(crate) struct CellArray<T>(pub [T; 81]);

impl<T> Deref for CellArray<T> {
    type Target = [T; 81];
    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for CellArray<T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> Index<CellId> for CellArray<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, idx: CellId) -> &Self::Output {
        &self.0[idx.as_index()]
    }
}

impl<T> IndexMut<CellId> for CellArray<T> {
    #[inline(always)]
    fn index_mut(&mut self, idx: CellId) -> &mut Self::Output {
        &mut self.0[idx.as_index()]
    }
}

/// Container with one slot for each row, column and block.
#[derive(Copy, Clone, Debug)]
pub(crate) struct HouseArray<T>(pub [T; 27]);

impl<T> Index<House> for HouseArray<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, idx: House) -> &Self::Output {
        &self.0[idx.as_index()]
    }
}

impl<T> IndexMut<House> for HouseArray<T> {
    #[inline(always)]
    fn index_mut(&mut self, idx: House) -> &mut Self::Output {
        &mut self.0[idx.as_index()]
    }
}
