use std::time::{Duration, Instant};

use log::{info, warn};

use crate::env::Move;
use crate::error::ConfigError;
use crate::game::{Board, Mark};
use crate::search::{iterative_deepening, AlphaBeta, WindowHeuristic};

/// Depth limited alpha-beta tree search with the window heuristic.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TreeAgent {
    /// Search depth in plies. With a timeout this is the maximum depth of
    /// the iterative deepening.
    pub depth: usize,
    pub pruning: bool,
    /// Time budget in ms.
    pub timeout: Option<u64>,
    pub heuristic: WindowHeuristic,
}

impl Default for TreeAgent {
    fn default() -> Self {
        Self {
            depth: 4,
            pruning: true,
            timeout: None,
            heuristic: WindowHeuristic::default(),
        }
    }
}

impl TreeAgent {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::Depth);
        }
        self.heuristic.validate()
    }

    pub fn step(&self, board: &Board, me: Mark) -> Option<Move> {
        let start = Instant::now();
        let mut board = board.clone();

        let (mv, score) = match self.timeout {
            Some(ms) => iterative_deepening(
                &mut board,
                me,
                self.depth,
                &self.heuristic,
                self.pruning,
                Duration::from_millis(ms),
            ),
            None => AlphaBeta::new(me, &self.heuristic)
                .pruning(self.pruning)
                .search(&mut board, self.depth, i64::MIN, i64::MAX, true),
        };
        info!(
            "tree {me} {mv:?} score={score} {:?}ms",
            start.elapsed().as_millis()
        );

        mv.or_else(|| {
            warn!("tree search found no move");
            board.legal_moves().next()
        })
    }
}
