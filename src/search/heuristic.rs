use serde::{Deserialize, Serialize};

use super::Heuristic;
use crate::env::Pos;
use crate::error::ConfigError;
use crate::game::{Board, Cell, Mark};

/// Static evaluator that scores center control and every window of the
/// win length by how close it is to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowHeuristic {
    /// Per own piece in the center column.
    pub center: i64,
    /// Completely filled window.
    pub four: i64,
    /// One piece missing, the rest empty.
    pub three: i64,
    /// Two pieces missing, the rest empty.
    pub two: i64,
    /// Opponent window missing one piece.
    pub threat: i64,
}

impl Default for WindowHeuristic {
    fn default() -> Self {
        Self {
            center: 3,
            four: 100,
            three: 5,
            two: 2,
            threat: -4,
        }
    }
}

impl WindowHeuristic {
    /// The window weights have to be ordered `four > three > two > 0 > threat`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.four > self.three && self.three > self.two && self.two > 0 && self.threat < 0 {
            Ok(())
        } else {
            Err(ConfigError::Weights {
                four: self.four,
                three: self.three,
                two: self.two,
                threat: self.threat,
            })
        }
    }

    fn window(&self, own: usize, opp: usize, empty: usize, len: usize) -> i64 {
        let mut score = 0;
        if own == len {
            score += self.four;
        } else if own + 1 == len && empty == 1 {
            score += self.three;
        } else if own + 2 == len && empty == 2 {
            score += self.two;
        }
        if opp + 1 == len && empty == 1 {
            score += self.threat;
        }
        score
    }
}

impl Heuristic for WindowHeuristic {
    fn eval(&self, board: &Board, me: Mark) -> i64 {
        let own_cell = Cell::from(me);
        let opp_cell = Cell::from(me.other());
        let len = board.rules().win_len;

        let center = board.rules().center_col();
        let mut score = (0..board.height())
            .filter(|&row| board[Pos::new(row, center)] == own_cell)
            .count() as i64
            * self.center;

        for line in board.windows() {
            let (mut own, mut opp, mut empty) = (0, 0, 0);
            for cell in board.line(line) {
                match cell {
                    c if c == own_cell => own += 1,
                    c if c == opp_cell => opp += 1,
                    _ => empty += 1,
                }
            }
            score += self.window(own, opp, empty, len);
        }
        score
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn connect(txt: &str) -> Board {
        Board::parse(txt, 4, true).unwrap()
    }

    #[test]
    fn weights_order() {
        assert!(WindowHeuristic::default().validate().is_ok());

        let h = WindowHeuristic {
            three: 1,
            ..Default::default()
        };
        assert_eq!(
            h.validate(),
            Err(ConfigError::Weights {
                four: 100,
                three: 1,
                two: 2,
                threat: -4
            })
        );
        let h = WindowHeuristic {
            threat: 0,
            ..Default::default()
        };
        assert!(h.validate().is_err());
    }

    #[test]
    fn window_cases() {
        let h = WindowHeuristic::default();
        assert_eq!(h.window(4, 0, 0, 4), 100);
        assert_eq!(h.window(3, 0, 1, 4), 5);
        assert_eq!(h.window(2, 0, 2, 4), 2);
        assert_eq!(h.window(0, 3, 1, 4), -4);
        assert_eq!(h.window(3, 1, 0, 4), 0);
        assert_eq!(h.window(1, 1, 2, 4), 0);
    }

    #[test]
    fn empty_board_is_neutral() {
        let h = WindowHeuristic::default();
        let board = Board::new(crate::game::Rules::connect_four());
        assert_eq!(h.eval(&board, Mark::X), 0);
        assert_eq!(h.eval(&board, Mark::O), 0);
    }

    #[test]
    fn center_and_windows() {
        let h = WindowHeuristic::default();
        // 5x4 board, center column 2
        let board = connect(
            r#"
            . . . . .
            . . . . .
            . . . . .
            . . X . ."#,
        );
        // center 3, no window with two pieces
        assert_eq!(h.eval(&board, Mark::X), 3);
        assert_eq!(h.eval(&board, Mark::O), 0);

        let board = connect(
            r#"
            . . . . .
            . . . . .
            . . . . .
            . X X X ."#,
        );
        // center 3, two windows of three with a gap
        assert_eq!(h.eval(&board, Mark::X), 3 + 5 + 5);
        // both windows are threats for O
        assert_eq!(h.eval(&board, Mark::O), -4 - 4);
    }

    #[test]
    fn more_pieces_in_line_score_higher() {
        let h = WindowHeuristic::default();
        let two = connect(
            r#"
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            X X . . . O O"#,
        );
        let three = connect(
            r#"
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            X X X . . O O"#,
        );
        assert!(h.eval(&three, Mark::X) > h.eval(&two, Mark::X));
    }
}
