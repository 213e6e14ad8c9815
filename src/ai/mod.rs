//! Heuristic move selection.
//!
//! This is not a game-tree search. Moves come from a layered heuristic,
//! evaluated in strict priority order with the first match winning:
//!
//! 1. the opening rules in [`openings`] (center claim and trap responses);
//! 2. a general fallback that partitions the free cells by threat membership
//!    under a shrinking urgency limit, then scores the surviving candidates.
//!
//! The fallback's running-best comparison, including the asymmetric
//! override that re-opens replacement once the running best own-urgency
//! reaches 1, is observable behavior: recorded games replay against it, so
//! the comparison must not be "improved". Determinism is the requirement
//! here, not optimal play.

mod openings;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::analysis::{self, LiveLine};
use crate::core::{Board, CellMask, CellSet, Player};

/// Pick a move for `to_move` on `board`.
///
/// Returns a free cell whenever one exists; `None` only on a full board.
#[must_use]
pub fn select_move(board: &Board, to_move: Player) -> Option<CellMask> {
    for &(name, rule) in openings::OPENING_RULES {
        if let Some(cell) = rule(board, to_move) {
            debug!(player = %to_move, cell = cell.index(), rule = name, "opening rule matched");
            return Some(cell);
        }
    }

    let cell = fallback_move(board, to_move);
    if let Some(cell) = cell {
        debug!(player = %to_move, cell = cell.index(), "fallback scorer selected");
    }
    cell
}

/// The general scorer: urgency-limited partition of the free cells, then a
/// running-best scan over the preferred candidates.
fn fallback_move(board: &Board, to_move: Player) -> Option<CellMask> {
    let own = board.marks_of(to_move);
    let opp = board.marks_of(to_move.opponent());
    let free = board.occupied().complement();

    // Remaining moves per side. The mover gets the ceiling of the split; a
    // line needing more cells than its owner will get to place is
    // unreachable and dropped.
    let empty = free.count();
    let own_left = empty.div_ceil(2);
    let opp_left = empty / 2;

    let own_lines = reachable_lines(own, opp, own_left);
    let opp_lines = reachable_lines(opp, own, opp_left);

    let mut limit = 3u32;
    loop {
        let block_set = analysis::union_below(&own_lines, limit);
        let threat_set = analysis::union_below(&opp_lines, limit);

        let mut safe: SmallVec<[CellMask; 9]> = SmallVec::new();
        let mut risky: SmallVec<[CellMask; 9]> = SmallVec::new();
        let mut last_resort: SmallVec<[CellMask; 9]> = SmallVec::new();

        for cell in free.iter() {
            if !threat_set.contains(cell) {
                safe.push(cell);
            } else if !block_set.contains(cell) {
                risky.push(cell);
            } else {
                last_resort.push(cell);
            }
        }

        if safe.is_empty() && risky.is_empty() {
            if limit == 0 {
                // Give up and play anything, in scan order.
                return last_resort.first().copied();
            }
            limit -= 1;
            trace!(limit, "no candidates, relaxing urgency limit");
            continue;
        }

        let candidates = safe.into_iter().chain(risky);
        return pick_best(candidates, &own_lines, &opp_lines);
    }
}

/// Live lines filtered to diffs at most 2 cells from completion and within
/// the owner's remaining-move budget.
fn reachable_lines(own: CellSet, opp: CellSet, moves_left: u32) -> SmallVec<[LiveLine; 8]> {
    analysis::living_lines(own, opp)
        .into_iter()
        .filter(|l| l.needed() < 3 && l.needed() <= moves_left)
        .collect()
}

/// The running-best comparison over the candidate cells.
///
/// A candidate replaces the running best when its own-urgency and
/// opponent-urgency are both no lower than the best so far and either the
/// opponent-urgency strictly improved or the opponent-spread is tied or
/// better. Once the running best own-urgency is exactly 1, every later
/// candidate replaces it unconditionally, which is what lets a later
/// completing cell supersede an earlier one.
fn pick_best(
    candidates: impl Iterator<Item = CellMask>,
    own_lines: &[LiveLine],
    opp_lines: &[LiveLine],
) -> Option<CellMask> {
    let mut best: Option<CellMask> = None;
    let mut best_own: i32 = i32::MIN;
    let mut best_opp: i32 = i32::MIN;
    let mut min_spread: u32 = u32::MAX;

    for cell in candidates {
        let own_urgency = urgency_at(own_lines, cell);
        let opp_urgency = urgency_at(opp_lines, cell);
        let spread = opp_lines
            .iter()
            .filter(|l| l.diff.contains(cell) && l.needed() as i32 == opp_urgency)
            .count() as u32;

        let overriding = best_own == 1;
        if (own_urgency >= best_own || overriding)
            && (opp_urgency >= best_opp || overriding)
            && (opp_urgency > best_opp || spread <= min_spread || overriding)
        {
            best_own = own_urgency;
            best_opp = opp_urgency;
            min_spread = spread;
            best = Some(cell);
        }
    }

    best
}

/// Minimum cells-to-completion over the diffs containing `cell`, or 3 when
/// no line through the cell is close.
fn urgency_at(lines: &[LiveLine], cell: CellMask) -> i32 {
    lines
        .iter()
        .filter(|l| l.diff.contains(cell))
        .map(|l| l.needed() as i32)
        .min()
        .unwrap_or(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellSet;
    use crate::rules;

    fn board(x: &[u8], o: &[u8]) -> Board {
        let collect = |ix: &[u8]| ix.iter().map(|&i| CellMask::at(i)).collect::<CellSet>();
        Board::from_marks(collect(x), collect(o))
    }

    #[test]
    fn test_empty_board_opens_at_the_center() {
        assert_eq!(select_move(&Board::new(), Player::X), Some(CellMask::at(4)));
        assert_eq!(select_move(&Board::new(), Player::O), Some(CellMask::at(4)));
    }

    #[test]
    fn test_opening_rule_takes_priority_over_the_scorer() {
        // O holds only the left edge, so the lone-edge trap answers at the
        // right edge before any scoring happens.
        let b = board(&[], &[3]);
        assert_eq!(select_move(&b, Player::X), Some(CellMask::at(5)));
    }

    #[test]
    fn test_fallback_avoids_contested_cells() {
        // X on the top-left corner, O on the center. Every free cell except
        // the bottom-right corner sits in some near-complete line; cell 8 is
        // the only safe candidate and the scorer keeps it.
        let b = board(&[0], &[4]);
        assert_eq!(select_move(&b, Player::X), Some(CellMask::at(8)));
    }

    #[test]
    fn test_sole_free_cell_completes_own_line() {
        // X X .        The last free cell (2) finishes X's top row.
        // O O X
        // X O O
        let b = board(&[0, 1, 5, 6], &[3, 4, 7, 8]);
        let choice = select_move(&b, Player::X).unwrap();
        assert_eq!(choice, CellMask::at(2));

        let mut after = b;
        after.place(Player::X, choice);
        assert!(rules::is_win(after.marks_of(Player::X)));
    }

    #[test]
    fn test_override_picks_among_simultaneous_winning_cells() {
        // X X .        X completes a line at 2, 7 or 8; the override lets
        // O X O        each later completing cell supersede the previous
        // O . .        one, so the scan ends on cell 8.
        let b = board(&[0, 1, 4], &[3, 5, 6]);
        let choice = select_move(&b, Player::X).unwrap();
        assert_eq!(choice, CellMask::at(8));

        let mut after = b;
        after.place(Player::X, choice);
        assert!(rules::is_win(after.marks_of(Player::X)));
    }

    #[test]
    fn test_blocks_the_last_open_threat() {
        // . O X        O completes the left column at 0; X holds no live
        // O X X        line, and the only free cell is the block.
        // O X O
        let b = board(&[2, 4, 5, 7], &[1, 3, 6, 8]);
        assert_eq!(select_move(&b, Player::X), Some(CellMask::at(0)));
    }

    #[test]
    fn test_selector_always_returns_a_free_cell() {
        // Walk a full game with the selector on both sides; every choice
        // must be free, and the board must fill or end.
        let mut b = Board::new();
        let mut mover = Player::X;
        for _ in 0..9 {
            let Some(cell) = select_move(&b, mover) else {
                panic!("selector returned no move with free cells remaining");
            };
            assert!(b.is_free(cell));
            b.place(mover, cell);
            if rules::resolve(&b, mover).is_terminal() {
                break;
            }
            mover = mover.opponent();
        }
        assert!(b.is_full() || rules::resolve(&b, mover).is_terminal());
    }

    #[test]
    fn test_full_board_yields_no_move() {
        let b = board(&[0, 2, 3, 7, 8], &[1, 4, 5, 6]);
        assert_eq!(select_move(&b, Player::X), None);
    }

    #[test]
    fn test_selection_is_deterministic() {
        let b = board(&[0, 4], &[2, 6]);
        let first = select_move(&b, Player::X);
        for _ in 0..10 {
            assert_eq!(select_move(&b, Player::X), first);
        }
    }
}
