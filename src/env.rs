use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseMoveError;

/// Cell coordinates. Row 0 is the top of the board.
#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Pos {
        Pos { row, col }
    }

    /// Steps `n` times into the direction `(dr, dc)`.
    /// Returns `None` if this leaves the non-negative quadrant.
    pub fn offset(self, (dr, dc): (isize, isize), n: usize) -> Option<Pos> {
        let row = self.row as isize + dr * n as isize;
        let col = self.col as isize + dc * n as isize;
        if row < 0 || col < 0 {
            None
        } else {
            Some(Pos::new(row as usize, col as usize))
        }
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Pos::new(row, col)
    }
}

/// Where a piece is put.
///
/// Free placement boards take a cell, gravity boards take a column and the
/// piece falls onto the lowest empty cell.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Cell(Pos),
    Column(usize),
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Cell(p) => write!(f, "{} {}", p.row, p.col),
            Move::Column(c) => write!(f, "{}", c),
        }
    }
}

/// Parses user input: `"row col"` or `"col"`.
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(|t| {
                t.parse::<usize>()
                    .map_err(|_| ParseMoveError::NotANumber(t.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match values[..] {
            [col] => Ok(Move::Column(col)),
            [row, col] => Ok(Move::Cell(Pos::new(row, col))),
            _ => Err(ParseMoveError::Arity(values.len())),
        }
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn parse_moves() {
        use super::*;

        assert_eq!("4".parse(), Ok(Move::Column(4)));
        assert_eq!(" 1 2 ".parse(), Ok(Move::Cell(Pos::new(1, 2))));
        assert_eq!("0,2".parse(), Ok(Move::Cell(Pos::new(0, 2))));
        assert_eq!("".parse::<Move>(), Err(ParseMoveError::Arity(0)));
        assert_eq!("1 2 3".parse::<Move>(), Err(ParseMoveError::Arity(3)));
        assert_eq!(
            "x".parse::<Move>(),
            Err(ParseMoveError::NotANumber("x".into()))
        );
        assert_eq!(
            "-1".parse::<Move>(),
            Err(ParseMoveError::NotANumber("-1".into()))
        );
    }

    #[test]
    fn pos_offset() {
        use super::*;

        let p = Pos::new(3, 1);
        assert_eq!(p.offset((1, 1), 2), Some(Pos::new(5, 3)));
        assert_eq!(p.offset((-1, 1), 3), Some(Pos::new(0, 4)));
        assert_eq!(p.offset((0, -1), 2), None);
    }
}
