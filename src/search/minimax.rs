//! Exhaustive minimax for small boards.
//!
//! Scores are adjusted by the search depth so that faster wins score higher
//! and faster losses score lower than slower ones.

use log::debug;

use crate::env::Move;
use crate::game::{Board, Mark};

/// Magnitude of a win at the root.
/// Larger than any search depth on this board.
pub fn win_base(board: &Board) -> i32 {
    board.rules().cells() as i32 + 1
}

/// Exact minimax value of `board` for `me`.
///
/// `maximizing` tells if `me` is to move.
pub fn minimax(board: &mut Board, depth: i32, maximizing: bool, me: Mark) -> i32 {
    let win_base = win_base(board);
    match board.winner() {
        Some(winner) if winner == me => return win_base - depth,
        Some(_) => return depth - win_base,
        None => {}
    }
    if board.is_full() {
        return 0;
    }

    let mark = if maximizing { me } else { me.other() };
    let moves = board.legal_moves().collect::<Vec<_>>();

    let mut value = if maximizing { i32::MIN } else { i32::MAX };
    for mv in moves {
        let Ok(mut placed) = board.play(mv, mark) else {
            continue;
        };
        let score = minimax(&mut placed, depth + 1, !maximizing, me);
        value = if maximizing {
            value.max(score)
        } else {
            value.min(score)
        };
    }
    value
}

/// Scores every legal move of `me`.
fn score_moves(board: &mut Board, me: Mark) -> Vec<(Move, i32)> {
    let moves = board.legal_moves().collect::<Vec<_>>();
    moves
        .into_iter()
        .filter_map(|mv| {
            let mut placed = board.play(mv, me).ok()?;
            Some((mv, minimax(&mut placed, 0, false, me)))
        })
        .collect()
}

/// Optimal move for `me` and its score.
///
/// The first move with the strictly greatest score wins ties.
/// Returns `None` if there is no legal move.
pub fn best_move(board: &mut Board, me: Mark) -> Option<(Move, i32)> {
    let mut best: Option<(Move, i32)> = None;
    for (mv, score) in score_moves(board, me) {
        if best.map_or(true, |(_, value)| score > value) {
            best = Some((mv, score));
        }
    }
    debug!("minimax {me} {best:?}");
    best
}

/// All moves sharing the optimal score, in move order.
pub fn best_moves(board: &mut Board, me: Mark) -> Option<(Vec<Move>, i32)> {
    let scores = score_moves(board, me);
    let best = scores.iter().map(|&(_, score)| score).max()?;
    let moves = scores
        .into_iter()
        .filter(|&(_, score)| score == best)
        .map(|(mv, _)| mv)
        .collect();
    Some((moves, best))
}
