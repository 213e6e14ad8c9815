//! Static geometry of the 3x3 grid.
//!
//! Everything here is derived from the fixed board layout and never changes
//! at runtime: the 8 winning lines, the corner and edge move catalogs, and
//! the lookup from a pair of adjacent edges to the corner between them.
//!
//! Catalog order matters. The opening rules break ties by catalog rank, and
//! "opposite" is defined as the mirrored catalog position (`rank 3 - i`).

use crate::core::{CellMask, CellSet};

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [CellSet; 8] = [
    CellSet::from_bits(0b111_000_000),
    CellSet::from_bits(0b000_111_000),
    CellSet::from_bits(0b000_000_111),
    CellSet::from_bits(0b100_100_100),
    CellSet::from_bits(0b010_010_010),
    CellSet::from_bits(0b001_001_001),
    CellSet::from_bits(0b100_010_001),
    CellSet::from_bits(0b001_010_100),
];

/// Corner cells: top-left, top-right, bottom-left, bottom-right.
pub const CORNERS: [CellMask; 4] = [
    CellMask::at(0),
    CellMask::at(2),
    CellMask::at(6),
    CellMask::at(8),
];

/// Edge (side-center) cells: top, left, right, bottom.
pub const EDGES: [CellMask; 4] = [
    CellMask::at(1),
    CellMask::at(3),
    CellMask::at(5),
    CellMask::at(7),
];

/// The center cell.
pub const CENTER: CellMask = CellMask::at(4);

/// All four corners as a set.
pub const ALL_CORNERS: CellSet = CellSet::from_bits(0b101_000_101);

/// All four edges as a set.
pub const ALL_EDGES: CellSet = CellSet::from_bits(0b010_101_010);

/// Pairs of adjacent edges and the corner that sits between them.
const EDGE_PAIR_CORNERS: [(CellSet, CellMask); 4] = [
    (CellSet::from_bits(0b010_100_000), CORNERS[0]), // top + left
    (CellSet::from_bits(0b010_001_000), CORNERS[1]), // top + right
    (CellSet::from_bits(0b000_100_010), CORNERS[2]), // bottom + left
    (CellSet::from_bits(0b000_001_010), CORNERS[3]), // bottom + right
];

/// Catalog rank of an edge cell.
#[must_use]
pub fn edge_rank(edge: CellMask) -> Option<usize> {
    EDGES.iter().position(|&e| e == edge)
}

/// Catalog rank of a corner cell.
#[must_use]
pub fn corner_rank(corner: CellMask) -> Option<usize> {
    CORNERS.iter().position(|&c| c == corner)
}

/// The edge diametrically opposite `edge`.
#[must_use]
pub fn opposite_edge(edge: CellMask) -> Option<CellMask> {
    edge_rank(edge).map(|i| EDGES[3 - i])
}

/// The corner diagonally opposite `corner`.
#[must_use]
pub fn opposite_corner(corner: CellMask) -> Option<CellMask> {
    corner_rank(corner).map(|i| CORNERS[3 - i])
}

/// The corner bounded by a pair of adjacent edges, if `edges` is such a pair.
///
/// Opposite edge pairs (top + bottom, left + right) bound no corner and map
/// to `None`.
#[must_use]
pub fn corner_between(edges: CellSet) -> Option<CellMask> {
    EDGE_PAIR_CORNERS
        .iter()
        .find(|&&(pair, _)| pair == edges)
        .map(|&(_, corner)| corner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_cover_the_board() {
        let mut union = CellSet::EMPTY;
        for line in LINES {
            assert_eq!(line.count(), 3);
            union |= line;
        }
        assert_eq!(union, CellSet::FULL);
    }

    #[test]
    fn test_lines_are_distinct() {
        for (i, a) in LINES.iter().enumerate() {
            for b in &LINES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_catalogs_partition_the_board() {
        let corners: CellSet = CORNERS.into_iter().collect();
        let edges: CellSet = EDGES.into_iter().collect();

        assert_eq!(corners, ALL_CORNERS);
        assert_eq!(edges, ALL_EDGES);
        assert!(corners.is_disjoint(edges));
        assert_eq!((corners | edges | CENTER.into()), CellSet::FULL);
    }

    #[test]
    fn test_opposite_edge() {
        assert_eq!(opposite_edge(EDGES[0]), Some(EDGES[3]));
        assert_eq!(opposite_edge(EDGES[1]), Some(EDGES[2]));
        // top (index 1) is diametrically opposite bottom (index 7)
        assert_eq!(opposite_edge(CellMask::at(1)), Some(CellMask::at(7)));
        assert_eq!(opposite_edge(CENTER), None);
    }

    #[test]
    fn test_opposite_corner() {
        assert_eq!(opposite_corner(CORNERS[0]), Some(CORNERS[3]));
        // top-left (0) is diagonally opposite bottom-right (8)
        assert_eq!(opposite_corner(CellMask::at(0)), Some(CellMask::at(8)));
        assert_eq!(opposite_corner(CellMask::at(1)), None);
    }

    #[test]
    fn test_corner_between_adjacent_edges() {
        let pair = |a: CellMask, b: CellMask| CellSet::from(a) | b.into();

        assert_eq!(corner_between(pair(EDGES[0], EDGES[1])), Some(CellMask::at(0)));
        assert_eq!(corner_between(pair(EDGES[0], EDGES[2])), Some(CellMask::at(2)));
        assert_eq!(corner_between(pair(EDGES[3], EDGES[1])), Some(CellMask::at(6)));
        assert_eq!(corner_between(pair(EDGES[3], EDGES[2])), Some(CellMask::at(8)));

        // opposite pairs bound no corner
        assert_eq!(corner_between(pair(EDGES[0], EDGES[3])), None);
        assert_eq!(corner_between(pair(EDGES[1], EDGES[2])), None);
    }
}
