//! Session: the state machine driving one playthrough.
//!
//! A session owns a board, the current phase, and the assignment of seats to
//! the computer opponent. It is mutated only through the accept-move
//! operations and thrown away when a new game starts; nothing is persisted.
//!
//! ## Illegal input policy
//!
//! A move on an occupied cell, an out-of-range cell index, or any move after
//! the game has ended is silently ignored and the unchanged view is
//! returned. Interactive callers keep feeding input until something valid
//! arrives; this is a policy, not an error.
//!
//! ## Computer replies
//!
//! After every applied move, while the game continues and the next seat is
//! computer-controlled, the session immediately selects and applies the
//! reply. The loop consumes one free cell per step, so it runs at most nine
//! times. Any presentation delay between replies belongs to the caller and
//! has no effect on the chosen moves.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ai;
use crate::core::{Board, CellMask, CellSet, GamePhase, Player};
use crate::rules;

/// Construction-time session errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// A raw seat number other than 0 (X) or 1 (O) was declared
    /// computer-controlled.
    #[display("unknown player seat: {_0}")]
    InvalidPlayerSeat(#[error(not(source))] u8),
}

/// Snapshot of a session for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// X's marks.
    pub x: CellSet,
    /// O's marks.
    pub o: CellSet,
    /// Current phase.
    pub phase: GamePhase,
}

/// One playthrough: board, phase, and computer seat assignment.
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    phase: GamePhase,
    computer: [bool; 2],
}

impl Session {
    /// Start a new game with the given seats played by the computer.
    ///
    /// An empty slice means two human seats; both seats may also be
    /// computer-controlled.
    #[must_use]
    pub fn new(controlled: &[Player]) -> Self {
        let mut computer = [false; 2];
        for &player in controlled {
            computer[player.index()] = true;
        }
        Session {
            board: Board::new(),
            phase: GamePhase::default(),
            computer,
        }
    }

    /// Start a new game from raw seat numbers (0 = X, 1 = O).
    ///
    /// Any other seat number is rejected.
    pub fn with_seats(seats: &[u8]) -> Result<Self, SessionError> {
        let mut controlled = Vec::with_capacity(seats.len());
        for &seat in seats {
            let player = match seat {
                0 => Player::X,
                1 => Player::O,
                other => return Err(SessionError::InvalidPlayerSeat(other)),
            };
            controlled.push(player);
        }
        Ok(Session::new(&controlled))
    }

    /// Whether the given seat is computer-controlled.
    #[must_use]
    pub fn is_computer(&self, player: Player) -> bool {
        self.computer[player.index()]
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            x: self.board.marks_of(Player::X),
            o: self.board.marks_of(Player::O),
            phase: self.phase,
        }
    }

    /// Accept a cell by row-major index (0..9).
    ///
    /// Out-of-range indices are treated like any other illegal move.
    pub fn accept_cell(&mut self, index: u8) -> SessionView {
        match CellMask::from_index(index) {
            Some(cell) => self.accept_move(cell),
            None => self.view(),
        }
    }

    /// Accept a move for the player whose turn it is.
    ///
    /// Applies the mark, resolves the new phase, and plays any computer
    /// replies before returning. Illegal input leaves the session unchanged.
    pub fn accept_move(&mut self, cell: CellMask) -> SessionView {
        let mut next = cell;
        loop {
            let GamePhase::Turn(mover) = self.phase else {
                break;
            };
            if !self.board.is_free(next) {
                break;
            }

            self.board.place(mover, next);
            self.phase = rules::resolve(&self.board, mover);
            debug!(player = %mover, cell = next.index(), phase = %self.phase, "mark placed");

            let GamePhase::Turn(reply_by) = self.phase else {
                break;
            };
            if !self.is_computer(reply_by) {
                break;
            }
            match ai::select_move(&self.board, reply_by) {
                Some(choice) => next = choice,
                None => break,
            }
        }
        self.view()
    }

    /// Let the computer act if it owns the current turn.
    ///
    /// Needed to kick off games where the computer moves first; a no-op
    /// otherwise.
    pub fn advance(&mut self) -> SessionView {
        if let GamePhase::Turn(mover) = self.phase {
            if self.is_computer(mover) {
                if let Some(cell) = ai::select_move(&self.board, mover) {
                    return self.accept_move(cell);
                }
            }
        }
        self.view()
    }
}

impl Default for Session {
    /// Two human seats.
    fn default() -> Self {
        Session::new(&[])
    }
}
