//! Core types: players, cell masks, the board, and the game phase.

pub mod board;
pub mod phase;
pub mod player;

pub use board::{Board, CellMask, CellSet};
pub use phase::GamePhase;
pub use player::Player;
