//! Random AI player.

use super::{Player, PlayerError};
use crate::{BoardView, Position, Side};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use tracing::debug;

/// AI that plays a uniformly random empty square.
#[derive(Debug, Clone)]
pub struct RandomAi {
    name: String,
    rng: StdRng,
}

impl RandomAi {
    /// Creates a random AI seeded from the operating system.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a random AI with a fixed seed.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomAi {
    fn decide_move(&mut self, view: BoardView<'_>, side: Side) -> Result<Position, PlayerError> {
        let pos = view
            .empty_positions()
            .choose(&mut self.rng)
            .ok_or_else(|| PlayerError::new("No valid moves available"))?;
        debug!(ai = %self.name, %side, position = ?pos, "Random AI chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
