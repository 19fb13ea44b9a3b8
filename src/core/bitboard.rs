//! A fixed-capacity bit set over board cells.
//!
//! The type is `no_std` friendly and avoids heap allocations. Membership of
//! up to `N` cells is packed into an unsigned integer `T`; the game uses the
//! [`CellSet`] alias for the 100-cell board.

use core::ops::{BitOr, BitOrAssign};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::core::cell::Cell;
use crate::core::config::CELL_COUNT;

/// Set of board cells, one bit per cell.
pub type CellSet = BitBoard<u128, CELL_COUNT>;

/// A set of up to `N` cells stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const FITS: () = assert!(N <= mem::size_of::<T>() * 8, "N exceeds storage width");

    /// Create a new empty set.
    #[inline]
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let _ = Self::FITS;
        BitBoard { bits: T::zero() }
    }

    /// Returns the number of cells in the set.
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cells are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        let idx = cell.index();
        idx < N && ((self.bits >> idx) & T::one()) != T::zero()
    }

    /// Adds `cell`; returns `false` if it was already present.
    pub fn insert(&mut self, cell: Cell) -> bool {
        let idx = cell.index();
        debug_assert!(idx < N);
        let bit = T::one() << idx;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        fresh
    }

    /// Iterate over the member cells in index order.
    pub fn iter(&self) -> Cells<'_, T, N> {
        Cells { set: self, idx: 0 }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> FromIterator<Cell> for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = Self::new();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

/// Iterator over the cells of a [`BitBoard`].
#[derive(Clone, Copy)]
pub struct Cells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    set: &'a BitBoard<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for Cells<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        while self.idx < N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.set.bits >> idx) & T::one()) != T::zero() {
                return Cell::new(idx).ok();
            }
        }
        None
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Cell;
    type IntoIter = Cells<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard { bits: self.bits | rhs.bits }
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Cell::index)).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn insert_reports_duplicates() {
        let mut set = CellSet::new();
        let cell = Cell::new(99).unwrap();
        assert!(set.insert(cell));
        assert!(!set.insert(cell));
        assert_eq!(set.count(), 1);
        assert!(set.contains(cell));
    }

    #[test]
    fn union_merges_members() {
        let a: CellSet = [1, 2].into_iter().filter_map(|i| Cell::new(i).ok()).collect();
        let mut b: CellSet = [2, 3].into_iter().filter_map(|i| Cell::new(i).ok()).collect();
        assert_eq!((a | b).count(), 3);
        b |= a;
        assert_eq!(b, a | b);
    }

    #[test]
    fn iterates_in_index_order() {
        let set: CellSet = [70, 3, 41].into_iter().filter_map(|i| Cell::new(i).ok()).collect();
        let cells: Vec<usize> = set.iter().map(Cell::index).collect();
        assert_eq!(cells, [3, 41, 70]);
    }
}
