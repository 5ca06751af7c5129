use crate::env::Move;
use crate::game::{Board, Mark};
use crate::search::{greedy, WindowHeuristic};

/// Picks the move with the best immediate heuristic value, without search.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GreedyAgent {
    pub heuristic: WindowHeuristic,
}

impl GreedyAgent {
    pub fn step(&self, board: &Board, me: Mark) -> Option<Move> {
        greedy(&mut board.clone(), me, &self.heuristic)
    }
}
