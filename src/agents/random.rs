use rand::{rngs::SmallRng, seq::IteratorRandom, SeedableRng};

use crate::env::Move;
use crate::game::Board;

/// Plays a uniformly random legal move.
#[derive(Debug, Clone, Default)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn step(&self, board: &Board) -> Option<Move> {
        let mut rng = SmallRng::from_entropy();
        board.legal_moves().choose(&mut rng)
    }
}
