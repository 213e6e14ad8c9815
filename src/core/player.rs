//! Player identification.
//!
//! Exactly two seats exist: `X` moves first, `O` second. A closed enum makes
//! an out-of-range player unrepresentable in the typed API; raw seat numbers
//! from an outer layer are validated in `session`.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First mover.
    X,
    /// Second mover.
    O,
}

impl Player {
    /// Both players, in move order.
    pub const BOTH: [Player; 2] = [Player::X, Player::O];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Raw seat index (0 for X, 1 for O).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involutive() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
        for p in Player::BOTH {
            assert_eq!(p.opponent().opponent(), p);
        }
    }

    #[test]
    fn test_index() {
        assert_eq!(Player::X.index(), 0);
        assert_eq!(Player::O.index(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::X), "X");
        assert_eq!(format!("{}", Player::O), "O");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Player::O).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Player::O);
    }
}
