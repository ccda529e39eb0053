//! Typed, fixed-size bitsets
//!
//! The techniques spend most of their time intersecting and unioning sets of
//! [`Digit`s](crate::Digit) and [`CellId`s](crate::CellId). These are stored
//! as bitmasks, wrapped so that a digit mask can never be confused for a
//! cell mask. Iteration always yields elements in ascending order, which
//! keeps candidate handling deterministic.

use crate::board::{CellId, Digit};
use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// Typed, fixed-size bitset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Set<T: SetElement>(pub(crate) T::Storage);

/// Iterator over the elements contained in a [`Set`], in ascending order
#[derive(Debug, Clone, Copy)]
pub struct Iter<T: SetElement>(T::Storage);

impl<T: SetElement> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.0)
    }
}

impl<T: SetElement> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.0 == T::NONE {
            return None;
        }
        let element = T::from_index(T::lowest_index(self.0));
        self.0 &= !element.as_set().0;
        Some(element)
    }
}

macro_rules! impl_binary_bitops {
    ( $( $trait:ident, $fn_name:ident );* $(;)* ) => {
        $(
            impl<T: SetElement> $trait for Set<T> {
                type Output = Self;

                #[inline(always)]
                fn $fn_name(self, other: Self) -> Self {
                    Set($trait::$fn_name(self.0, other.0))
                }
            }

            impl<T: SetElement> $trait<T> for Set<T> {
                type Output = Self;

                #[inline(always)]
                fn $fn_name(self, other: T) -> Self {
                    $trait::$fn_name(self, other.as_set())
                }
            }
        )*
    };
}

macro_rules! impl_bitops_assign {
    ( $( $trait:ident, $fn_name:ident );* $(;)* ) => {
        $(
            impl<T: SetElement> $trait for Set<T> {
                #[inline(always)]
                fn $fn_name(&mut self, other: Self) {
                    $trait::$fn_name(&mut self.0, other.0)
                }
            }

            impl<T: SetElement> $trait<T> for Set<T> {
                #[inline(always)]
                fn $fn_name(&mut self, other: T) {
                    $trait::$fn_name(self, other.as_set())
                }
            }
        )*
    };
}

impl_binary_bitops!(
    BitAnd, bitand;
    BitOr, bitor;
    BitXor, bitxor;
);

impl_bitops_assign!(
    BitAndAssign, bitand_assign;
    BitOrAssign, bitor_assign;
    BitXorAssign, bitxor_assign;
);

impl<T: SetElement> From<T> for Set<T> {
    fn from(element: T) -> Self {
        element.as_set()
    }
}

impl<T: SetElement> Set<T> {
    /// Set containing all possible elements
    pub const ALL: Set<T> = Set(<T as SetElement>::ALL);

    /// Empty set
    pub const NONE: Set<T> = Set(<T as SetElement>::NONE);

    /// Returns the elements of this set that aren't present in `other`.
    pub fn without(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        Set(self.0 & !other.0)
    }

    /// Deletes all elements from this set that are present in `other`.
    pub fn remove(&mut self, other: impl Into<Self>) {
        let other = other.into();
        self.0 &= !other.0;
    }

    /// Checks if `self` contains all elements of `other`.
    pub fn contains(self, other: impl Into<Self>) -> bool {
        let other = other.into();
        self.0 & other.0 == other.0
    }

    /// Returns the number of elements in this set.
    pub fn len(self) -> u8 {
        T::count(self.0) as u8
    }

    /// Checks whether this set contains any element.
    pub fn is_empty(self) -> bool {
        self.0 == T::NONE
    }

    /// Returns one of the elements in this set.
    ///
    /// # Panic
    /// Panics, if the set is empty
    pub(crate) fn one_possibility(self) -> T {
        debug_assert!(!self.is_empty());
        T::from_index(T::lowest_index(self.0))
    }
}

/// Trait for types that can be stored in a [`Set`]
#[allow(missing_docs)]
pub trait SetElement: Sized + Copy {
    const ALL: Self::Storage;
    const NONE: Self::Storage;

    type Storage: BitAnd<Output = Self::Storage>
        + BitAndAssign
        + BitOr<Output = Self::Storage>
        + BitOrAssign
        + BitXor<Output = Self::Storage>
        + BitXorAssign
        + Not<Output = Self::Storage>
        + PartialEq
        + Eq
        + PartialOrd
        + Ord
        + Hash
        + fmt::Binary
        + Copy;

    fn count(storage: Self::Storage) -> u32;
    fn lowest_index(storage: Self::Storage) -> u8;
    fn from_index(idx: u8) -> Self;
    fn as_set(self) -> Set<Self>;
}

macro_rules! impl_setelement {
    ( $( $type:ty => $storage_ty:ty, $all:expr ),* $(,)* ) => {
        $(
            impl SetElement for $type {
                const ALL: $storage_ty = $all;
                const NONE: $storage_ty = 0;

                type Storage = $storage_ty;

                fn count(storage: Self::Storage) -> u32 {
                    storage.count_ones()
                }

                fn lowest_index(storage: Self::Storage) -> u8 {
                    storage.trailing_zeros() as u8
                }

                fn from_index(idx: u8) -> Self {
                    <$type>::from_index(idx)
                }

                fn as_set(self) -> Set<Self> {
                    Set(1 << self.as_index() as u8)
                }
            }

            impl $type {
                /// Returns a `Set<Self>` with the bit corresponding to this element set.
                pub fn as_set(self) -> Set<Self> {
                    SetElement::as_set(self)
                }
            }
        )*
    };
}

impl_setelement!(
    // 9 digits
    Digit => u16, 0o777,
    // 81 cells
    CellId => u128, 0o777_777_777___777_777_777___777_777_777,
);

impl<T: SetElement> fmt::Binary for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:b}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(digits: &[u8]) -> Set<Digit> {
        digits
            .iter()
            .fold(Set::NONE, |set, &digit| set | Digit::new(digit))
    }

    #[test]
    fn iteration_is_ascending() {
        let set = digits(&[7, 2, 9, 1]);
        let collected: Vec<u8> = set.into_iter().map(Digit::get).collect();
        assert_eq!(collected, [1, 2, 7, 9]);
    }

    #[test]
    fn without_and_contains() {
        let set = digits(&[1, 2, 3]);
        assert!(set.contains(Digit::new(2)));
        assert!(set.contains(digits(&[1, 3])));
        assert!(!set.without(Digit::new(2)).contains(Digit::new(2)));
        assert_eq!(Set::<Digit>::ALL.len(), 9);
        assert_eq!(Set::<CellId>::ALL.len(), 81);
    }
}
