//! Opening-trap responses.
//!
//! Each rule is a pure pattern match on the opponent's exact mark count and
//! catalog membership, answering a known early fork setup with a fixed
//! geometric reply. The general scorer is not sharp enough to avoid these
//! forks on its own, which is why the rules run first.
//!
//! Rules are tried in order; a rule whose reply cell is occupied yields
//! `None` and the next rule (or the fallback scorer) takes over.

use tracing::trace;

use crate::core::{Board, CellMask, Player};
use crate::geometry;

/// A single opening rule: `Some(cell)` if the pattern matches and the reply
/// cell is free.
pub(super) type OpeningRule = fn(&Board, Player) -> Option<CellMask>;

/// All opening rules, in evaluation order.
pub(super) const OPENING_RULES: &[(&str, OpeningRule)] = &[
    ("claim_center", claim_center),
    ("counter_lone_edge", counter_lone_edge),
    ("counter_edge_pair", counter_edge_pair),
    ("counter_edge_corner", counter_edge_corner),
    ("counter_corner_pair", counter_corner_pair),
];

/// On an empty board, take the center.
fn claim_center(board: &Board, _mover: Player) -> Option<CellMask> {
    board.occupied().is_empty().then_some(geometry::CENTER)
}

/// Opponent holds exactly one edge cell: answer with the edge diametrically
/// opposite it.
fn counter_lone_edge(board: &Board, mover: Player) -> Option<CellMask> {
    let opp = board.marks_of(mover.opponent());
    if opp.count() != 1 || !geometry::ALL_EDGES.contains_all(opp) {
        return None;
    }

    let reply = geometry::opposite_edge(opp.single()?)?;
    free_or_skip(board, reply)
}

/// Opponent holds two edges bounding a corner: take that corner, or its
/// diagonal opposite when the corner is already gone. Opposite edge pairs
/// bound no corner and fall through.
fn counter_edge_pair(board: &Board, mover: Player) -> Option<CellMask> {
    let opp = board.marks_of(mover.opponent());
    if opp.count() != 2 || !geometry::ALL_EDGES.contains_all(opp) {
        return None;
    }

    let corner = geometry::corner_between(opp)?;
    if board.is_free(corner) {
        return Some(corner);
    }
    free_or_skip(board, geometry::opposite_corner(corner)?)
}

/// Opponent holds one edge and one corner. When the edge's catalog rank does
/// not exceed the corner's, answer at the corner opposite the held one.
fn counter_edge_corner(board: &Board, mover: Player) -> Option<CellMask> {
    let opp = board.marks_of(mover.opponent());
    if opp.count() != 2 {
        return None;
    }

    let edge = (opp & geometry::ALL_EDGES).single()?;
    let corner = (opp & geometry::ALL_CORNERS).single()?;
    let edge_rank = geometry::edge_rank(edge)?;
    let corner_rank = geometry::corner_rank(corner)?;
    if edge_rank > corner_rank {
        return None;
    }

    free_or_skip(board, geometry::CORNERS[3 - corner_rank])
}

/// Opponent holds two corners: take the first free corner in catalog order.
fn counter_corner_pair(board: &Board, mover: Player) -> Option<CellMask> {
    let opp = board.marks_of(mover.opponent());
    if opp.count() != 2 || !geometry::ALL_CORNERS.contains_all(opp) {
        return None;
    }

    geometry::CORNERS.into_iter().find(|&c| board.is_free(c))
}

fn free_or_skip(board: &Board, cell: CellMask) -> Option<CellMask> {
    if board.is_free(cell) {
        Some(cell)
    } else {
        trace!(cell = cell.index(), "opening reply occupied, falling through");
        None
    }
}
