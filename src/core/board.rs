//! Bitboard representation of the 3x3 grid.
//!
//! ## Encoding
//!
//! Cells are indexed 0..9 in row-major order (0 = top-left, 8 = bottom-right).
//! A cell with index `i` occupies bit `8 - i` of a 9-bit word, so cell 0 is
//! the most significant of the 9 bits. The convention is arbitrary but every
//! mask in the crate follows it.
//!
//! ## Types
//!
//! - [`CellMask`]: exactly one bit set, names a single cell.
//! - [`CellSet`]: any subset of the 9 bits. Lines, diffs, threat unions and
//!   per-player mark sets are all `CellSet`s.
//! - [`Board`]: one mark set per player, disjoint by construction.
//!
//! Iteration over a `CellSet` always runs from the most significant bit down
//! (cell 0 upward). Several tie-breaks in move selection depend on this scan
//! order, so it must not change.

use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr, BitOrAssign};

use super::player::Player;

/// A single board cell, encoded as a one-bit 9-bit mask.
///
/// Deserialization goes through [`CellMask::try_from`], so a zero, multi-bit
/// or out-of-range word is rejected rather than admitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16")]
pub struct CellMask(u16);

impl CellMask {
    /// Mask for the cell at `index` (0..9, row-major).
    ///
    /// `index` must be in range; use [`CellMask::from_index`] for unchecked
    /// external input.
    #[must_use]
    pub const fn at(index: u8) -> Self {
        debug_assert!(index < 9);
        CellMask(1 << (8 - index))
    }

    /// Mask for the cell at `index`, or `None` if `index` is out of range.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        (index < 9).then(|| Self::at(index))
    }

    /// Row-major index of this cell (0..9).
    #[must_use]
    pub const fn index(self) -> u8 {
        8 - self.0.trailing_zeros() as u8
    }

    /// Raw 9-bit value.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }
}

/// A set of board cells, encoded in the low 9 bits of a `u16`.
///
/// Deserialization routes through [`CellSet::from_bits`], discarding any
/// bits above the ninth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16")]
pub struct CellSet(u16);

impl CellSet {
    /// The empty set.
    pub const EMPTY: CellSet = CellSet(0);

    /// All nine cells.
    pub const FULL: CellSet = CellSet(0x1FF);

    /// Build a set from raw bits. Bits above the ninth are discarded.
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        CellSet(bits & Self::FULL.0)
    }

    /// Raw 9-bit value.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Number of cells in the set.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether `cell` is a member.
    #[must_use]
    pub const fn contains(self, cell: CellMask) -> bool {
        self.0 & cell.0 != 0
    }

    /// Whether every cell of `other` is a member.
    #[must_use]
    pub const fn contains_all(self, other: CellSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether the two sets share no cell.
    #[must_use]
    pub const fn is_disjoint(self, other: CellSet) -> bool {
        self.0 & other.0 == 0
    }

    /// Set difference.
    #[must_use]
    pub const fn without(self, other: CellSet) -> CellSet {
        CellSet(self.0 & !other.0)
    }

    /// The cells not in this set.
    #[must_use]
    pub const fn complement(self) -> CellSet {
        CellSet(!self.0 & Self::FULL.0)
    }

    /// Add a cell.
    pub fn insert(&mut self, cell: CellMask) {
        self.0 |= cell.0;
    }

    /// The sole member, if the set holds exactly one cell.
    #[must_use]
    pub fn single(self) -> Option<CellMask> {
        (self.count() == 1).then_some(CellMask(self.0))
    }

    /// Iterate members from the most significant bit down (cell 0 upward).
    pub fn iter(self) -> impl Iterator<Item = CellMask> {
        (0..9u8).filter_map(move |i| {
            let cell = CellMask::at(i);
            self.contains(cell).then_some(cell)
        })
    }
}

impl TryFrom<u16> for CellMask {
    type Error = String;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        if bits.count_ones() == 1 && bits <= CellSet::FULL.0 {
            Ok(CellMask(bits))
        } else {
            Err(format!("not a single-cell mask: {bits:#x}"))
        }
    }
}

impl From<u16> for CellSet {
    fn from(bits: u16) -> Self {
        CellSet::from_bits(bits)
    }
}

impl From<CellMask> for CellSet {
    fn from(cell: CellMask) -> Self {
        CellSet(cell.0)
    }
}

impl FromIterator<CellMask> for CellSet {
    fn from_iter<I: IntoIterator<Item = CellMask>>(iter: I) -> Self {
        let mut set = CellSet::EMPTY;
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl BitOr for CellSet {
    type Output = CellSet;

    fn bitor(self, rhs: CellSet) -> CellSet {
        CellSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for CellSet {
    fn bitor_assign(&mut self, rhs: CellSet) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for CellSet {
    type Output = CellSet;

    fn bitand(self, rhs: CellSet) -> CellSet {
        CellSet(self.0 & rhs.0)
    }
}

/// The 3x3 board: one mark set per player.
///
/// The two sets are disjoint by construction, and deserialization rejects
/// overlapping sets so external data cannot break the invariant.
/// [`Board::place`] asserts the target cell is free; checking occupancy
/// beforehand is the caller's job, and no turn-order validation happens at
/// this level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    marks: [CellSet; 2],
}

/// Unvalidated wire shape of [`Board`], field-compatible with its
/// serialization.
#[derive(Deserialize)]
struct RawBoard {
    marks: [CellSet; 2],
}

impl TryFrom<RawBoard> for Board {
    type Error = String;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let [x, o] = raw.marks;
        if x.is_disjoint(o) {
            Ok(Board { marks: [x, o] })
        } else {
            Err(format!(
                "mark sets overlap: {:#x} & {:#x}",
                x.bits(),
                o.bits()
            ))
        }
    }
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board directly from two disjoint mark sets.
    #[must_use]
    pub fn from_marks(x: CellSet, o: CellSet) -> Self {
        debug_assert!(x.is_disjoint(o), "mark sets must be disjoint");
        Board { marks: [x, o] }
    }

    /// Set `player`'s mark on a free cell. Marks are never cleared.
    pub fn place(&mut self, player: Player, cell: CellMask) {
        debug_assert!(self.is_free(cell), "cell {} already occupied", cell.index());
        self.marks[player.index()].insert(cell);
    }

    /// The given player's marks.
    #[must_use]
    pub fn marks_of(&self, player: Player) -> CellSet {
        self.marks[player.index()]
    }

    /// Union of both players' marks.
    #[must_use]
    pub fn occupied(&self) -> CellSet {
        self.marks[0] | self.marks[1]
    }

    /// Whether `cell` carries no mark.
    #[must_use]
    pub fn is_free(&self, cell: CellMask) -> bool {
        !self.occupied().contains(cell)
    }

    /// Whether all nine cells are occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied() == CellSet::FULL
    }

    /// Which player, if any, holds `cell`.
    #[must_use]
    pub fn mark_at(&self, cell: CellMask) -> Option<Player> {
        Player::BOTH
            .into_iter()
            .find(|&p| self.marks_of(p).contains(cell))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let cell = CellMask::at(row * 3 + col);
                let glyph = match self.mark_at(cell) {
                    Some(Player::X) => 'X',
                    Some(Player::O) => 'O',
                    None => '.',
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
