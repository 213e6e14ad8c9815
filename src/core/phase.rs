//! Game phase: whose turn it is, or how the game ended.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// The phase of a playthrough.
///
/// The initial phase is `Turn(X)`. `Won` and `Draw` are absorbing: once
/// reached, no further move is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// The named player moves next.
    Turn(Player),
    /// The named player completed a line.
    Won(Player),
    /// No line can be completed by either side.
    Draw,
}

impl GamePhase {
    /// Whether the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Turn(_))
    }

    /// The player to move, if the game is still running.
    #[must_use]
    pub const fn to_move(self) -> Option<Player> {
        match self {
            GamePhase::Turn(player) => Some(player),
            _ => None,
        }
    }
}

impl Default for GamePhase {
    fn default() -> Self {
        GamePhase::Turn(Player::X)
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamePhase::Turn(player) => write!(f, "{player} player's turn"),
            GamePhase::Won(player) => write!(f, "{player} is a winner"),
            GamePhase::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        assert_eq!(GamePhase::default(), GamePhase::Turn(Player::X));
    }

    #[test]
    fn test_terminal() {
        assert!(!GamePhase::Turn(Player::O).is_terminal());
        assert!(GamePhase::Won(Player::X).is_terminal());
        assert!(GamePhase::Draw.is_terminal());
    }

    #[test]
    fn test_to_move() {
        assert_eq!(GamePhase::Turn(Player::O).to_move(), Some(Player::O));
        assert_eq!(GamePhase::Won(Player::O).to_move(), None);
        assert_eq!(GamePhase::Draw.to_move(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(GamePhase::Turn(Player::X).to_string(), "X player's turn");
        assert_eq!(GamePhase::Won(Player::O).to_string(), "O is a winner");
        assert_eq!(GamePhase::Draw.to_string(), "Draw");
    }
}
