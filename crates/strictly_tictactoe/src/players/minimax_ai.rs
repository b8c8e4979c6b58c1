//! Minimax AI player.

use super::{Player, PlayerError};
use crate::minimax::choose_move;
use crate::{BoardView, Position, Side};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

/// AI that searches the game tree, with adjustable strength.
///
/// `think_chance` is the probability of running the full search on a
/// turn. When the search is skipped the AI still takes an immediate win
/// and still blocks an immediate loss, but otherwise plays at random.
/// At `1.0` (the default strength) it never loses.
#[derive(Debug, Clone)]
pub struct MinimaxAi {
    name: String,
    think_chance: f64,
    rng: StdRng,
}

impl MinimaxAi {
    /// Full-strength think chance.
    pub const FULL_STRENGTH: f64 = 1.0;

    /// Creates a minimax AI seeded from the operating system.
    ///
    /// `think_chance` is clamped into `[0, 1]`; NaN counts as `0`.
    pub fn new(name: impl Into<String>, think_chance: f64) -> Self {
        Self::with_rng(name, think_chance, StdRng::from_os_rng())
    }

    /// Creates a minimax AI with a fixed seed, for reproducible play.
    pub fn seeded(name: impl Into<String>, think_chance: f64, seed: u64) -> Self {
        Self::with_rng(name, think_chance, StdRng::seed_from_u64(seed))
    }

    fn with_rng(name: impl Into<String>, think_chance: f64, rng: StdRng) -> Self {
        let think_chance = if think_chance.is_nan() {
            0.0
        } else {
            think_chance.clamp(0.0, 1.0)
        };
        Self {
            name: name.into(),
            think_chance,
            rng,
        }
    }

    /// Returns the configured think chance.
    pub fn think_chance(&self) -> f64 {
        self.think_chance
    }
}

impl Player for MinimaxAi {
    #[instrument(skip(self, view), fields(ai = %self.name, think_chance = self.think_chance))]
    fn decide_move(&mut self, view: BoardView<'_>, side: Side) -> Result<Position, PlayerError> {
        let board = view.snapshot();
        let pos = choose_move(&board, side, self.think_chance, &mut self.rng)
            .ok_or_else(|| PlayerError::new("No valid moves available"))?;
        debug!(position = ?pos, "Minimax AI chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn test_think_chance_is_clamped() {
        assert_eq!(MinimaxAi::seeded("ai", 3.0, 1).think_chance(), MinimaxAi::FULL_STRENGTH);
        assert_eq!(MinimaxAi::seeded("ai", -1.0, 1).think_chance(), 0.0);
        assert_eq!(MinimaxAi::seeded("ai", f64::NAN, 1).think_chance(), 0.0);
        assert_eq!(MinimaxAi::seeded("ai", 0.4, 1).think_chance(), 0.4);
    }

    #[test]
    fn test_decide_move_picks_empty_square() {
        let mut board = Board::new();
        board.set(Position::Center, Side::X).unwrap();
        let mut ai = MinimaxAi::seeded("ai", MinimaxAi::FULL_STRENGTH, 9);

        let pos = ai.decide_move(BoardView::new(&board), Side::O).unwrap();

        assert!(board.is_empty(pos));
        assert_eq!(ai.name(), "ai");
    }
}
