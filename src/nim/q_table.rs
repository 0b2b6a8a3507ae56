//! Q-table for temporal difference learning over Nim states

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::game::{NimMove, NimState};

/// Q-table mapping (state, move) signatures to Q-value estimates
///
/// The key is the pile-size vector serialized canonically, joined with the
/// (pile, count) pair: `"1,3,5,7|0,1"`. Unseen pairs read as exactly 0.0.
/// The table grows without eviction; Nim's state space is small enough
/// that this is fine for the lifetime of an agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QTable {
    q_values: HashMap<String, f64>,
}

impl QTable {
    /// Create an empty Q-table
    pub fn new() -> Self {
        Self {
            q_values: HashMap::new(),
        }
    }

    /// Canonical (state, move) signature
    fn key(piles: &[u32], mv: NimMove) -> String {
        let state: Vec<String> = piles.iter().map(|p| p.to_string()).collect();
        format!("{}|{},{}", state.join(","), mv.pile, mv.count)
    }

    /// Get the Q-value for a state-move pair (0.0 when unseen)
    pub fn get(&self, piles: &[u32], mv: NimMove) -> f64 {
        *self.q_values.get(&Self::key(piles, mv)).unwrap_or(&0.0)
    }

    /// Set the Q-value for a state-move pair
    pub fn set(&mut self, piles: &[u32], mv: NimMove, value: f64) {
        self.q_values.insert(Self::key(piles, mv), value);
    }

    /// Maximum Q-value over the legal moves of a state, or 0.0 when the
    /// state is terminal (no legal moves).
    pub fn max_q(&self, piles: &[u32]) -> f64 {
        let moves = NimState::available_moves(piles);
        if moves.is_empty() {
            return 0.0;
        }
        moves
            .iter()
            .map(|&mv| self.get(piles, mv))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Select the legal move with the highest Q-value.
    ///
    /// The scan uses a strict comparison so the first-seen move wins ties,
    /// in the enumeration order of [`NimState::available_moves`].
    pub fn greedy_move(&self, piles: &[u32]) -> Option<NimMove> {
        let mut best = None;
        let mut best_q = f64::NEG_INFINITY;
        for mv in NimState::available_moves(piles) {
            let q = self.get(piles, mv);
            if q > best_q {
                best_q = q;
                best = Some(mv);
            }
        }
        best
    }

    /// Get total number of Q-values stored
    pub fn size(&self) -> usize {
        self.q_values.len()
    }

    /// Reset all Q-values
    pub fn reset(&mut self) {
        self.q_values.clear();
    }
}
