use super::Heuristic;
use crate::env::Move;
use crate::game::{Board, Mark};

/// Depth one selector: the move whose resulting position the heuristic
/// likes best. The first best move wins ties.
pub fn greedy<H: Heuristic + ?Sized>(board: &mut Board, me: Mark, heuristic: &H) -> Option<Move> {
    let moves = board.legal_moves().collect::<Vec<_>>();

    let mut best: Option<(Move, i64)> = None;
    for mv in moves {
        let Ok(placed) = board.play(mv, me) else {
            continue;
        };
        let score = heuristic.eval(&placed, me);
        if best.map_or(true, |(_, value)| score > value) {
            best = Some((mv, score));
        }
    }
    best.map(|(mv, _)| mv)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game::Rules;
    use crate::search::WindowHeuristic;

    #[test]
    fn takes_the_center() {
        let h = WindowHeuristic::default();
        let mut board = Board::new(Rules::connect_four());
        assert_eq!(greedy(&mut board, Mark::X, &h), Some(Move::Column(4)));
        assert!(board.is_empty());
    }

    #[test]
    fn completes_the_row() {
        let h = WindowHeuristic::default();
        let mut board = Board::parse(
            r#"
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            X X X . O O ."#,
            4,
            true,
        )
        .unwrap();
        assert_eq!(greedy(&mut board, Mark::X, &h), Some(Move::Column(3)));
    }

    #[test]
    fn full_board() {
        let h = WindowHeuristic::default();
        let mut board = Board::parse("X O X\nO X O", 3, true).unwrap();
        assert_eq!(greedy(&mut board, Mark::X, &h), None);
    }
}
