mod alphabeta;
pub use alphabeta::*;
mod greedy;
pub use greedy::*;
mod heuristic;
pub use heuristic::*;
mod minimax;
pub use minimax::*;

use std::fmt::Debug;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::{Board, Mark};

/// Terminal scores of the heuristic search.
/// They dominate every value a heuristic may return.
pub const WIN: i64 = 100_000_000_000_000;
pub const DRAW: i64 = 0;
pub const LOSS: i64 = -WIN;

/// A heuristic that evaluates the board at the leafs of a tree search
/// from the perspective of `me`.
pub trait Heuristic: Debug + Send + Sync {
    fn eval(&self, board: &Board, me: Mark) -> i64;
}

/// How to choose among equally scored moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// The first candidate in move order.
    #[default]
    First,
    /// A uniformly random candidate.
    Random,
}

impl TieBreak {
    pub fn pick<T: Copy, R: Rng + ?Sized>(self, candidates: &[T], rng: &mut R) -> Option<T> {
        match self {
            TieBreak::First => candidates.first().copied(),
            TieBreak::Random => candidates.choose(rng).copied(),
        }
    }
}
