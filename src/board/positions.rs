//! Typed indices for cells and houses.
//!
//! `CellId` and `House` are plain indices into the grid's cell arena and
//! house index. All relations between cells go through these indices rather
//! than through references, so the 81 cells can live in one owned array.

/// Linear cell index, `0..=80`, row-major.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct CellId(u8);

impl CellId {
    /// Constructs a new `CellId`.
    ///
    /// # Panic
    /// Panics in debug mode, if the index is not in the range of `0..=80`.
    pub fn new(idx: u8) -> Self {
        debug_assert!(idx < 81);
        CellId(idx)
    }

    pub(crate) fn from_index(idx: u8) -> Self {
        Self::new(idx)
    }

    /// Returns the linear index contained within.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the linear index as `usize`.
    pub fn as_index(self) -> usize {
        self.0 as usize
    }

    /// Returns an iterator over all 81 cell indices.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Self::new)
    }
}

/// House index, `0..=26`: rows first, then columns, then blocks.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct House(u8);

const COL_OFFSET: u8 = 9;
const BLOCK_OFFSET: u8 = 18;

impl House {
    pub(crate) fn new(idx: u8) -> Self {
        debug_assert!(idx < 27);
        House(idx)
    }

    /// House of the `row`th row, `row` from `0..=8`.
    pub fn row(row: u8) -> Self {
        Self::new(row)
    }

    /// House of the `col`th column, `col` from `0..=8`.
    pub fn col(col: u8) -> Self {
        Self::new(col + COL_OFFSET)
    }

    /// House of the `block`th block, `block` from `0..=8`,
    /// numbered left to right, top to bottom.
    pub fn block(block: u8) -> Self {
        Self::new(block + BLOCK_OFFSET)
    }

    /// Returns the house index as `usize`.
    pub fn as_index(self) -> usize {
        self.0 as usize
    }

    /// Returns an iterator over all 27 houses.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..27).map(Self::new)
    }

    /// Splits the house index into its kind and 0-based position.
    pub fn categorize(self) -> HouseType {
        match self.0 {
            0..=8 => HouseType::Row(self.0),
            9..=17 => HouseType::Col(self.0 - COL_OFFSET),
            _ => HouseType::Block(self.0 - BLOCK_OFFSET),
        }
    }
}

/// The kind of a [`House`] together with its 0-based position.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[allow(missing_docs)]
pub enum HouseType {
    Row(u8),
    Col(u8),
    Block(u8),
}
