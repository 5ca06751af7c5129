//! Self-play between two agents.

use std::fmt;
use std::ops::AddAssign;

use log::{info, warn};
use rand::Rng;

use crate::agents::Agent;
use crate::game::{Board, Mark, Outcome, Rules};

/// Game results from the perspective of one agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome, me: Mark) {
        match outcome {
            Outcome::Winner(mark) if mark == me => self.wins += 1,
            Outcome::Winner(_) => self.losses += 1,
            Outcome::Draw | Outcome::None => self.draws += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.wins + self.losses + self.draws
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Tally) {
        self.wins += rhs.wins;
        self.losses += rhs.losses;
        self.draws += rhs.draws;
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} wins, {} losses, {} draws",
            self.wins, self.losses, self.draws
        )
    }
}

/// Plays a game to the end. `agents[0]` plays `X` and moves first.
///
/// An agent that plays an illegal move forfeits.
pub fn play_game(rules: Rules, agents: [&Agent; 2], verbose: bool) -> Outcome {
    let mut board = Board::new(rules);

    loop {
        let outcome = board.outcome();
        if outcome != Outcome::None {
            if verbose {
                info!("{outcome:?}\n{board}");
            }
            return outcome;
        }

        let mark = board.to_move();
        let agent = agents[mark as usize];
        let Some(mv) = agent.step(&board, mark) else {
            return Outcome::Draw;
        };
        if let Err(err) = board.place(mv, mark) {
            warn!("{mark} forfeits: {err}");
            return Outcome::Winner(mark.other());
        }
        if verbose {
            info!("{mark} plays {mv}\n{board}");
        }
    }
}

/// Plays `games` games of `agent` against `opponent`.
/// Who moves first is decided randomly for every game.
pub fn simulate<R: Rng + ?Sized>(
    rules: Rules,
    agent: &Agent,
    opponent: &Agent,
    games: usize,
    verbose: bool,
    rng: &mut R,
) -> Tally {
    let mut tally = Tally::default();
    for i in 0..games {
        let (agents, me) = if rng.gen_bool(0.5) {
            ([agent, opponent], Mark::X)
        } else {
            ([opponent, agent], Mark::O)
        };
        let outcome = play_game(rules, agents, verbose);
        tally.record(outcome, me);
        info!("game {i} as {me}: {outcome:?}, {tally}");
    }
    tally
}
