//! Terminal-state detection and phase resolution.

use crate::analysis;
use crate::core::{Board, CellSet, GamePhase, Player};
use crate::geometry;

/// Whether `marks` fully contains any winning line.
#[must_use]
pub fn is_win(marks: CellSet) -> bool {
    geometry::LINES.iter().any(|&line| marks.contains_all(line))
}

/// Whether the game can no longer be won by either side.
///
/// True when the board is full, or earlier, once neither player has any live
/// line left. The live-line check uses the unfiltered analysis so a dead
/// position is recognized before the last cells are filled.
#[must_use]
pub fn is_draw(board: &Board) -> bool {
    if board.is_full() {
        return true;
    }

    let x = board.marks_of(Player::X);
    let o = board.marks_of(Player::O);
    analysis::living_lines(x, o).is_empty() && analysis::living_lines(o, x).is_empty()
}

/// Compute the phase after `mover` has placed a mark.
///
/// Priority order: X's win beats O's win beats draw beats handing the turn
/// to the other player. Under alternating play both players can never win
/// at once, but the ordering keeps resolution deterministic regardless.
#[must_use]
pub fn resolve(board: &Board, mover: Player) -> GamePhase {
    if is_win(board.marks_of(Player::X)) {
        GamePhase::Won(Player::X)
    } else if is_win(board.marks_of(Player::O)) {
        GamePhase::Won(Player::O)
    } else if is_draw(board) {
        GamePhase::Draw
    } else {
        GamePhase::Turn(mover.opponent())
    }
}
