//! Bitboard implementation for the 5x5 grid

use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use super::{Pos, TOTAL_CELLS};

/// Mask of the 25 valid cell bits
const CELL_MASK: u32 = (1u32 << TOTAL_CELLS) - 1;

/// One bit per cell, row-major (bit 0 = (0, 0), bit 24 = (4, 4))
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u32,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u32 << pos.to_index();
    }

    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.bits &= !(1u32 << pos.to_index());
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Count set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate over set bit positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard { bits: self.bits | rhs.bits }
    }
}

impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard { bits: self.bits & rhs.bits }
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    /// Complement restricted to the 25 board cells
    fn not(self) -> Bitboard {
        Bitboard { bits: !self.bits & CELL_MASK }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u32,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        Some(Pos::from_index(idx))
    }
}
