use std::fmt;
use std::str::FromStr;

mod greedy;
pub use greedy::*;
mod random;
pub use random::*;
mod solver;
pub use solver::*;
mod tree;
pub use tree::*;

use crate::env::Move;
use crate::error::ConfigError;
use crate::game::{Board, Mark, Rules};

/// Configurable player.
///
/// Parsed from JSON, e.g. `{"Tree":{"depth":5}}` or `"Random"`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Agent {
    Solver(SolverAgent),
    Tree(TreeAgent),
    Greedy(GreedyAgent),
    Random,
}

impl Default for Agent {
    fn default() -> Self {
        Self::Tree(TreeAgent::default())
    }
}

impl Agent {
    /// Exact play for boards small enough to be solved, tree search otherwise.
    pub fn for_rules(rules: &Rules) -> Agent {
        if rules.cells() <= SOLVER_MAX_CELLS {
            Agent::Solver(SolverAgent::default())
        } else {
            Agent::Tree(TreeAgent::default())
        }
    }

    /// Checks the configuration and if it can play on a board of `rules`.
    pub fn validate(&self, rules: &Rules) -> Result<(), ConfigError> {
        match self {
            Agent::Solver(agent) => agent.validate(rules),
            Agent::Tree(agent) => agent.validate(),
            Agent::Greedy(agent) => agent.heuristic.validate(),
            Agent::Random => Ok(()),
        }
    }

    /// Chooses the next move of `me`.
    /// Returns `None` only if there is no legal move.
    pub fn step(&self, board: &Board, me: Mark) -> Option<Move> {
        match self {
            Agent::Solver(agent) => agent.step(board, me),
            Agent::Tree(agent) => agent.step(board, me),
            Agent::Greedy(agent) => agent.step(board, me),
            Agent::Random => RandomAgent.step(board),
        }
    }
}

impl FromStr for Agent {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(s) => write!(f, "{s}"),
            Err(_) => write!(f, "{self:?}"),
        }
    }
}
