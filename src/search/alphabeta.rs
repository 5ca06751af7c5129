use std::time::{Duration, Instant};

use log::debug;

use super::{Heuristic, DRAW, LOSS, WIN};
use crate::env::Move;
use crate::game::{Board, Mark};

/// Depth limited minimax with alpha-beta pruning.
///
/// @see https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning
/// - `me` is the maximizing player
/// - Wins are terminal regardless of the remaining depth
/// - Leafs are evaluated by the heuristic from `me`'s perspective
#[derive(Debug)]
pub struct AlphaBeta<'a, H: Heuristic + ?Sized> {
    me: Mark,
    heuristic: &'a H,
    pruning: bool,
    deadline: Option<Instant>,
    nodes: usize,
    expired: bool,
}

impl<'a, H: Heuristic + ?Sized> AlphaBeta<'a, H> {
    pub fn new(me: Mark, heuristic: &'a H) -> Self {
        Self {
            me,
            heuristic,
            pruning: true,
            deadline: None,
            nodes: 0,
            expired: false,
        }
    }

    /// Disabling pruning turns this into plain minimax with the same result.
    pub fn pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// After the deadline only the first move of every node is explored.
    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Number of visited nodes.
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// If the deadline cut the search short.
    pub fn expired(&self) -> bool {
        self.expired
    }

    fn out_of_time(&mut self) -> bool {
        if !self.expired {
            if let Some(deadline) = self.deadline {
                self.expired = Instant::now() >= deadline;
            }
        }
        self.expired
    }

    /// Returns the best move (if the node was expanded) and its value.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> (Option<Move>, i64) {
        self.nodes += 1;

        match board.winner() {
            Some(winner) if winner == self.me => return (None, WIN),
            Some(_) => return (None, LOSS),
            None => {}
        }
        if board.is_full() {
            return (None, DRAW);
        }
        if depth == 0 {
            return (None, self.heuristic.eval(board, self.me));
        }

        let mark = if maximizing { self.me } else { self.me.other() };
        let moves = board.legal_moves().collect::<Vec<_>>();

        let mut value = (
            moves.first().copied(),
            if maximizing { i64::MIN } else { i64::MAX },
        );
        for (i, &mv) in moves.iter().enumerate() {
            if i > 0 && self.out_of_time() {
                break;
            }
            let Ok(mut placed) = board.play(mv, mark) else {
                continue;
            };
            let (_, score) = self.search(&mut placed, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                if score > value.1 {
                    value = (Some(mv), score);
                }
                alpha = alpha.max(value.1);
            } else {
                if score < value.1 {
                    value = (Some(mv), score);
                }
                beta = beta.min(value.1);
            }
            if self.pruning && alpha >= beta {
                break;
            }
        }
        value
    }
}

/// Alpha-beta search from the root for `me`.
pub fn alphabeta<H: Heuristic + ?Sized>(
    board: &mut Board,
    depth: usize,
    me: Mark,
    heuristic: &H,
) -> (Option<Move>, i64) {
    let mut search = AlphaBeta::new(me, heuristic);
    let result = search.search(board, depth, i64::MIN, i64::MAX, true);
    debug!(
        "alphabeta {me} depth={depth} nodes={} {result:?}",
        search.nodes()
    );
    result
}

/// Searches with increasing depth until `max_depth`, a decided game or the
/// time budget is reached.
///
/// Iterations cut short by the deadline are discarded, except for the first
/// one which always provides a move.
pub fn iterative_deepening<H: Heuristic + ?Sized>(
    board: &mut Board,
    me: Mark,
    max_depth: usize,
    heuristic: &H,
    pruning: bool,
    budget: Duration,
) -> (Option<Move>, i64) {
    let deadline = Instant::now() + budget;
    let mut result = (board.legal_moves().next(), DRAW);

    for depth in 1..=max_depth {
        let start = Instant::now();
        let mut search = AlphaBeta::new(me, heuristic)
            .pruning(pruning)
            .deadline(deadline);
        let next = search.search(board, depth, i64::MIN, i64::MAX, true);
        debug!(
            "depth={depth} nodes={} {:?}ms {next:?}{}",
            search.nodes(),
            start.elapsed().as_millis(),
            if search.expired() { " expired" } else { "" }
        );

        if search.expired() && depth > 1 {
            break;
        }
        result = next;
        if search.expired() || next.1 >= WIN || next.1 <= LOSS {
            break;
        }
    }
    result
}

#[cfg(test)]
mod test {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::game::{Outcome, Rules};
    use crate::logging;
    use crate::search::WindowHeuristic;

    fn connect(txt: &str) -> Board {
        Board::parse(txt, 4, true).unwrap()
    }

    fn three_in_a_row() -> Board {
        connect(
            r#"
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . X X . . . . .
            X O O O . . . X"#,
        )
    }

    #[test]
    fn completes_four() {
        logging();
        let h = WindowHeuristic::default();
        for depth in 1..=4 {
            let mut board = three_in_a_row();
            let (mv, score) = alphabeta(&mut board, depth, Mark::O, &h);
            assert_eq!(mv, Some(Move::Column(4)), "depth {depth}");
            assert_eq!(score, WIN);
            assert_eq!(board, three_in_a_row());
        }
    }

    #[test]
    fn blocks_four() {
        let h = WindowHeuristic::default();
        let mut board = three_in_a_row();
        // X has to prevent O from completing the row
        let (mv, score) = alphabeta(&mut board, 2, Mark::X, &h);
        assert_eq!(mv, Some(Move::Column(4)));
        assert!(score > LOSS);
    }

    #[test]
    fn pruning_keeps_result() {
        let h = WindowHeuristic::default();
        let mut rng = SmallRng::seed_from_u64(42);
        for rules in [Rules::connect_four(), Rules::new(5, 4, 3, true)] {
            for _ in 0..6 {
                let board = Board::random_opening(rules, 12, &mut rng);
                if board.outcome() != Outcome::None {
                    continue;
                }
                let me = board.to_move();
                for depth in 1..=4 {
                    let mut pruned = AlphaBeta::new(me, &h);
                    let a = pruned.search(&mut board.clone(), depth, i64::MIN, i64::MAX, true);
                    let mut full = AlphaBeta::new(me, &h).pruning(false);
                    let b = full.search(&mut board.clone(), depth, i64::MIN, i64::MAX, true);

                    assert_eq!(a, b, "depth {depth} {board:?}");
                    assert!(pruned.nodes() <= full.nodes());
                }
            }
        }
    }

    #[test]
    fn terminal_boards() {
        let h = WindowHeuristic::default();

        let mut full = Board::parse("X O X\nO X O", 3, true).unwrap();
        assert_eq!(full.winner(), None);
        assert_eq!(alphabeta(&mut full, 4, Mark::X, &h), (None, DRAW));

        let mut lost = connect(
            r#"
            . . . .
            X . . .
            X O . .
            X O . .
            X O . ."#,
        );
        assert_eq!(alphabeta(&mut lost, 3, Mark::O, &h), (None, LOSS));
        assert_eq!(alphabeta(&mut lost, 3, Mark::X, &h), (None, WIN));
    }

    #[test]
    fn iterative_keeps_pruning_setting() {
        let h = WindowHeuristic::default();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..4 {
            let board = Board::random_opening(Rules::new(5, 4, 3, true), 6, &mut rng);
            if board.outcome() != Outcome::None {
                continue;
            }
            let me = board.to_move();
            let budget = Duration::from_secs(60);
            let pruned = iterative_deepening(&mut board.clone(), me, 3, &h, true, budget);
            let full = iterative_deepening(&mut board.clone(), me, 3, &h, false, budget);
            assert_eq!(pruned, full, "{board:?}");
        }
    }

    #[test]
    fn deadline_still_moves() {
        let h = WindowHeuristic::default();
        let mut board = Board::new(Rules::connect_four());

        let mut search = AlphaBeta::new(Mark::X, &h).deadline(Instant::now());
        let (mv, _) = search.search(&mut board, 6, i64::MIN, i64::MAX, true);
        assert_eq!(mv, Some(Move::Column(0)));
        assert!(search.expired());
        assert!(search.nodes() <= 7);
        assert!(board.is_empty());
    }

    #[test]
    fn iterative() {
        let h = WindowHeuristic::default();

        for pruning in [true, false] {
            let mut board = three_in_a_row();
            let (mv, score) = iterative_deepening(
                &mut board,
                Mark::O,
                6,
                &h,
                pruning,
                Duration::from_secs(60),
            );
            assert_eq!(mv, Some(Move::Column(4)));
            assert_eq!(score, WIN);
        }

        let mut board = Board::new(Rules::connect_four());
        let (mv, _) = iterative_deepening(&mut board, Mark::X, 8, &h, true, Duration::ZERO);
        assert!(mv.is_some());
        assert!(board.is_empty());
    }
}
