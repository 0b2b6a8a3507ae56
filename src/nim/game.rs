//! Nim game state and rules
//!
//! Misère convention: the player who removes the last object loses. The
//! winner is recorded as the player *to move* after the emptying move.

use serde::{Deserialize, Serialize};

/// Standard starting piles
pub const DEFAULT_PILES: [u32; 4] = [1, 3, 5, 7];

/// One of the two self-play roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NimPlayer {
    First,
    Second,
}

impl NimPlayer {
    pub fn opponent(self) -> NimPlayer {
        match self {
            NimPlayer::First => NimPlayer::Second,
            NimPlayer::Second => NimPlayer::First,
        }
    }
}

/// A move: take `count` objects from pile `pile`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NimMove {
    pub pile: usize,
    pub count: u32,
}

/// Complete Nim game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NimState {
    pub piles: Vec<u32>,
    pub to_move: NimPlayer,
    pub winner: Option<NimPlayer>,
}

impl NimState {
    /// Create a game with the standard [1, 3, 5, 7] piles
    pub fn new() -> Self {
        Self::with_piles(DEFAULT_PILES.to_vec())
    }

    /// Create a game with custom starting piles
    pub fn with_piles(piles: Vec<u32>) -> Self {
        NimState {
            piles,
            to_move: NimPlayer::First,
            winner: None,
        }
    }

    /// Enumerate all legal moves for a pile configuration.
    ///
    /// Order is pile index ascending, then count ascending. The Q-learning
    /// greedy scan relies on this order for its first-seen tie-break.
    pub fn available_moves(piles: &[u32]) -> Vec<NimMove> {
        let mut moves = Vec::new();
        for (pile, &size) in piles.iter().enumerate() {
            for count in 1..=size {
                moves.push(NimMove { pile, count });
            }
        }
        moves
    }

    /// Check whether all piles are empty
    pub fn is_terminal(&self) -> bool {
        self.piles.iter().all(|&p| p == 0)
    }

    /// Apply a move in place, switching the player and detecting the end
    /// of the game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already over, the pile index is out
    /// of range, or the count is not within `1..=piles[pile]`. Illegal
    /// moves are a caller contract violation; the learner never generates
    /// them.
    pub fn apply(&mut self, mv: NimMove) -> Result<(), crate::Error> {
        if self.winner.is_some() {
            return Err(crate::Error::GameOver);
        }
        if mv.pile >= self.piles.len() {
            return Err(crate::Error::InvalidPile {
                pile: mv.pile,
                pile_count: self.piles.len(),
            });
        }
        if mv.count < 1 || mv.count > self.piles[mv.pile] {
            return Err(crate::Error::InvalidTake {
                pile: mv.pile,
                count: mv.count,
                available: self.piles[mv.pile],
            });
        }

        self.piles[mv.pile] -= mv.count;
        self.to_move = self.to_move.opponent();

        // The mover who empties the piles loses; the player now to move wins.
        if self.is_terminal() {
            self.winner = Some(self.to_move);
        }
        Ok(())
    }
}

impl Default for NimState {
    fn default() -> Self {
        Self::new()
    }
}
