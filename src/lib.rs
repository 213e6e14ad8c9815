//! # noughts
//!
//! A bitboard tic-tac-toe engine with a heuristic computer opponent.
//!
//! The crate is the game *core* only: state encoding, terminal detection,
//! and move selection. Rendering, input handling and reply pacing belong to
//! a UI collaborator that feeds cell indices into a [`Session`] and renders
//! the [`SessionView`] it gets back.
//!
//! ## Design
//!
//! - **Bitboards**: each player's marks are a 9-bit set; lines, threats and
//!   move candidates are all bit masks over the same encoding.
//! - **Layered heuristic**: the computer opponent plays an opening book of
//!   exact geometric pattern matches, then a general threat-based scorer.
//!   Selection is deterministic and replayable move for move; it is not a
//!   minimax search and does not claim optimal play.
//! - **Single ownership**: a session is mutated only through `&mut self`
//!   accept-move calls. Nothing blocks, suspends or races; reply timing is
//!   a presentation concern with no effect on the chosen moves.
//!
//! ## Modules
//!
//! - `core`: players, cell masks, the board, the game phase
//! - `geometry`: static line and move catalogs for the 3x3 grid
//! - `analysis`: live-line threat analysis
//! - `rules`: win and draw detection, phase resolution
//! - `ai`: heuristic move selection
//! - `session`: the state machine driving one playthrough
//!
//! ## Example
//!
//! ```
//! use noughts::{GamePhase, Player, Session};
//!
//! // Human plays X, the computer answers as O.
//! let mut session = Session::new(&[Player::O]);
//! let view = session.accept_cell(4);
//!
//! assert_eq!(view.phase, GamePhase::Turn(Player::X));
//! assert_eq!(view.o.count(), 1);
//! ```

pub mod ai;
pub mod analysis;
pub mod core;
pub mod geometry;
pub mod rules;
pub mod session;

pub use crate::core::{Board, CellMask, CellSet, GamePhase, Player};

pub use crate::analysis::LiveLine;

pub use crate::ai::select_move;

pub use crate::session::{Session, SessionError, SessionView};
