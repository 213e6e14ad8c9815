//! Threat analysis: which lines a player can still complete, and how close
//! each one is.
//!
//! For a line `L` and a player's marks `M`, the *diff* `L & !M` holds the
//! cells of `L` the player does not own yet. A diff's popcount is the number
//! of moves still needed; popcount 0 means the line is already complete. A
//! line is *live* for a player only while the opponent holds none of its
//! cells; a dead line can never be completed and is excluded here.

use smallvec::SmallVec;

use crate::core::CellSet;
use crate::geometry;

/// A line still completable by a player, with the cells left to fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiveLine {
    /// The full line mask.
    pub line: CellSet,
    /// Cells of the line the player does not hold yet.
    pub diff: CellSet,
}

impl LiveLine {
    /// Moves still needed to complete this line.
    #[must_use]
    pub fn needed(&self) -> u32 {
        self.diff.count()
    }
}

/// All lines live for the player holding `own`, sorted by ascending number
/// of cells still needed.
///
/// The sort is stable, so lines at equal urgency keep catalog order. Lines
/// the opponent has touched are dropped.
#[must_use]
pub fn living_lines(own: CellSet, opponent: CellSet) -> SmallVec<[LiveLine; 8]> {
    let mut lines: SmallVec<[LiveLine; 8]> = geometry::LINES
        .iter()
        .filter(|&&line| line.is_disjoint(opponent))
        .map(|&line| LiveLine {
            line,
            diff: line.without(own),
        })
        .collect();

    lines.sort_by_key(LiveLine::needed);
    lines
}

/// Union of the diffs needing strictly fewer than `limit` cells.
///
/// This is the "winning move set" at urgency level `limit`: every cell that
/// appears in some line closer than `limit` moves from completion.
#[must_use]
pub fn union_below(lines: &[LiveLine], limit: u32) -> CellSet {
    lines
        .iter()
        .filter(|l| l.needed() < limit)
        .fold(CellSet::EMPTY, |acc, l| acc | l.diff)
}
