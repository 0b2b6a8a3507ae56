//! Self-play Q-learning agent for misère Nim
//!
//! The terminal credit assignment is deliberately asymmetric: the mover
//! who empties the piles receives -1 on the just-taken (state, move) pair,
//! and the opponent's previously recorded pair receives +1. This is the
//! whole learning signal ("emptying the piles loses") back-propagated one
//! ply, not a conventional single-step reward scheme.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use super::{
    game::{NimMove, NimPlayer, NimState},
    q_table::QTable,
};
use crate::error::Result;

/// Serializable snapshot of an agent (RNG state reduced to its seed)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NimAgentState {
    pub q_table: QTable,
    pub alpha: f64,
    pub epsilon: f64,
    pub rng_seed: Option<u64>,
}

impl NimAgentState {
    /// Write the snapshot to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or serialized.
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<()> {
        let file = std::fs::File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Read a snapshot back from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|source| crate::Error::Io {
            operation: format!("open {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_reader(file)?)
    }
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Tabular Q-learning agent
///
/// Holds an owned Q-table plus the learning rate α and exploration rate ε.
/// Multiple independent agents (e.g. a "novice" trained for 100 episodes
/// and an "expert" trained for 10,000) can coexist without interference.
#[derive(Debug, Clone)]
pub struct NimAgent {
    q_table: QTable,
    alpha: f64,
    epsilon: f64,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl NimAgent {
    /// Create a new agent.
    ///
    /// # Arguments
    ///
    /// * `alpha` - learning rate α (0.0 to 1.0)
    /// * `epsilon` - exploration rate ε (0.0 to 1.0)
    pub fn new(alpha: f64, epsilon: f64) -> Self {
        Self {
            q_table: QTable::new(),
            alpha,
            epsilon,
            rng: build_rng(None),
            rng_seed: None,
        }
    }

    /// Seed the RNG for reproducible training runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    /// Access the learned Q-table
    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Choose a move for the given piles.
    ///
    /// With `explore` set, a uniform random draw below ε returns a uniformly
    /// random legal move; otherwise the greedy move (highest Q, first-seen
    /// tie-break). Returns `None` when the state is terminal.
    pub fn choose_move(&mut self, piles: &[u32], explore: bool) -> Option<NimMove> {
        let moves = NimState::available_moves(piles);
        if moves.is_empty() {
            return None;
        }

        if explore && self.rng.random::<f64>() < self.epsilon {
            moves.choose(&mut self.rng).copied()
        } else {
            self.q_table.greedy_move(piles)
        }
    }

    /// Single TD update toward `reward + max_future_q(new_state)`
    fn update(&mut self, old_piles: &[u32], mv: NimMove, new_piles: &[u32], reward: f64) {
        let old_q = self.q_table.get(old_piles, mv);
        let best_future = self.q_table.max_q(new_piles);
        let new_q = old_q + self.alpha * ((reward + best_future) - old_q);
        self.q_table.set(old_piles, mv, new_q);
    }

    /// Train by self-play from the standard [1, 3, 5, 7] piles
    pub fn train(&mut self, episodes: usize) -> Result<()> {
        self.train_from(&NimState::new().piles, episodes)
    }

    /// Train by self-play from custom starting piles.
    ///
    /// Every transition is recorded per player; when an episode terminates,
    /// the mover's final pair gets reward -1 and the opponent's previous
    /// pair gets +1. Intermediate pairs get 0 when their player comes back
    /// around to move.
    pub fn train_from(&mut self, piles: &[u32], episodes: usize) -> Result<()> {
        for _ in 0..episodes {
            self.play_episode(piles)?;
        }
        Ok(())
    }

    fn play_episode(&mut self, start: &[u32]) -> Result<()> {
        let mut game = NimState::with_piles(start.to_vec());
        // Last recorded (state, move) per player
        let mut last: [Option<(Vec<u32>, NimMove)>; 2] = [None, None];

        loop {
            let state = game.piles.clone();
            let mv = self
                .choose_move(&game.piles, true)
                .ok_or(crate::Error::NoValidMoves)?;

            last[player_index(game.to_move)] = Some((state.clone(), mv));

            game.apply(mv)?;
            let new_state = game.piles.clone();

            if game.winner.is_some() {
                // The mover just emptied the piles and loses
                self.update(&state, mv, &new_state, -1.0);
                // game.to_move is now the winner; credit their prior move
                if let Some((prev_state, prev_mv)) = last[player_index(game.to_move)].take() {
                    self.update(&prev_state, prev_mv, &new_state, 1.0);
                }
                return Ok(());
            }

            if let Some((prev_state, prev_mv)) = last[player_index(game.to_move)].clone() {
                self.update(&prev_state, prev_mv, &new_state, 0.0);
            }
        }
    }

    /// Snapshot the agent for serialization
    pub fn export_state(&self) -> NimAgentState {
        NimAgentState {
            q_table: self.q_table.clone(),
            alpha: self.alpha,
            epsilon: self.epsilon,
            rng_seed: self.rng_seed,
        }
    }

    /// Rebuild an agent from a snapshot
    pub fn from_state(state: NimAgentState) -> Self {
        Self {
            q_table: state.q_table,
            alpha: state.alpha,
            epsilon: state.epsilon,
            rng: build_rng(state.rng_seed),
            rng_seed: state.rng_seed,
        }
    }

    /// Reset the agent to an untrained state
    pub fn reset(&mut self) {
        self.q_table.reset();
        if let Some(seed) = self.rng_seed {
            self.rng = StdRng::seed_from_u64(seed);
        } else {
            self.rng = build_rng(None);
        }
    }
}

fn player_index(player: NimPlayer) -> usize {
    match player {
        NimPlayer::First => 0,
        NimPlayer::Second => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_move_terminal_state() {
        let mut agent = NimAgent::new(0.5, 0.1).with_seed(7);
        assert_eq!(agent.choose_move(&[0, 0], false), None);
    }

    #[test]
    fn test_choose_move_greedy_is_deterministic() {
        let mut agent = NimAgent::new(0.5, 1.0).with_seed(7);
        // epsilon=1.0 but explore=false must still be greedy
        let mv = agent.choose_move(&[1, 2], false).unwrap();
        assert_eq!(mv, NimMove { pile: 0, count: 1 });
    }

    #[test]
    fn test_single_pile_episode_updates() {
        // With one pile of 1 there is exactly one move: First takes it and
        // loses. There is no opponent prior move, so only the -1 update runs.
        let mut agent = NimAgent::new(0.5, 0.0).with_seed(3);
        agent.train_from(&[1], 1).unwrap();

        let q = agent.q_table().get(&[1], NimMove { pile: 0, count: 1 });
        // Q = 0 + 0.5 * ((-1 + 0) - 0) = -0.5
        assert!((q + 0.5).abs() < 1e-9);
        assert_eq!(agent.q_table().size(), 1);
    }

    #[test]
    fn test_two_object_episode_credits_winner() {
        // Piles [2]: First must take 1 or 2. If First takes 2 it loses
        // immediately; if it takes 1, Second is forced to take the last
        // object and First's move gets the +1 credit.
        let mut agent = NimAgent::new(0.5, 0.0).with_seed(11);
        agent.train_from(&[2], 50).unwrap();

        let take_one = agent.q_table().get(&[2], NimMove { pile: 0, count: 1 });
        let take_two = agent.q_table().get(&[2], NimMove { pile: 0, count: 2 });
        assert!(
            take_one > take_two,
            "leaving one object must be preferred: {take_one} vs {take_two}"
        );
    }

    #[test]
    fn test_seeded_training_is_reproducible() {
        let mut a = NimAgent::new(0.5, 0.1).with_seed(42);
        let mut b = NimAgent::new(0.5, 0.1).with_seed(42);
        a.train(200).unwrap();
        b.train(200).unwrap();
        assert_eq!(a.q_table().size(), b.q_table().size());
        let mv_a = a.choose_move(&[1, 3, 5, 7], false);
        let mv_b = b.choose_move(&[1, 3, 5, 7], false);
        assert_eq!(mv_a, mv_b);
    }

    #[test]
    fn test_state_roundtrip() {
        let mut agent = NimAgent::new(0.5, 0.1).with_seed(5);
        agent.train(100).unwrap();
        let restored = NimAgent::from_state(agent.export_state());
        assert_eq!(restored.q_table().size(), agent.q_table().size());
    }
}
