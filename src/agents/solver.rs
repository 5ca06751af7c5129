use std::time::Instant;

use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::env::Move;
use crate::error::ConfigError;
use crate::game::{Board, Mark, Rules};
use crate::search::{best_moves, TieBreak};

/// Largest board the exhaustive search finishes on.
pub const SOLVER_MAX_CELLS: usize = 9;

/// Plays perfectly by searching the complete game tree.
/// Only feasible for small boards like tic-tac-toe.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SolverAgent {
    pub tie_break: TieBreak,
}

impl SolverAgent {
    pub fn validate(&self, rules: &Rules) -> Result<(), ConfigError> {
        if rules.cells() > SOLVER_MAX_CELLS {
            return Err(ConfigError::SolverBoard {
                cells: rules.cells(),
                max: SOLVER_MAX_CELLS,
            });
        }
        Ok(())
    }

    pub fn step(&self, board: &Board, me: Mark) -> Option<Move> {
        let start = Instant::now();
        let mut board = board.clone();
        let (moves, score) = best_moves(&mut board, me)?;

        let mut rng = SmallRng::from_entropy();
        let mv = self.tie_break.pick(&moves, &mut rng);
        info!(
            "solver {me} {mv:?} score={score} of {} {:?}ms",
            moves.len(),
            start.elapsed().as_millis()
        );
        mv
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::env::Pos;

    #[test]
    fn random_tie_break_stays_optimal() {
        let board = Board::parse(". . .\n. X .\n. . .", 3, false).unwrap();
        let agent = SolverAgent {
            tie_break: TieBreak::Random,
        };
        let corners = [
            Move::Cell(Pos::new(0, 0)),
            Move::Cell(Pos::new(0, 2)),
            Move::Cell(Pos::new(2, 0)),
            Move::Cell(Pos::new(2, 2)),
        ];
        for _ in 0..8 {
            let mv = agent.step(&board, Mark::O).unwrap();
            assert!(corners.contains(&mv), "{mv:?}");
        }

        let agent = SolverAgent::default();
        assert_eq!(agent.step(&board, Mark::O), Some(corners[0]));
    }
}
