use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// Upper bound for `width * height`.
pub const MAX_CELLS: usize = 1 << 16;

/// Board geometry and how pieces are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub width: usize,
    pub height: usize,
    /// Number of equal marks in a line needed to win.
    pub win_len: usize,
    /// Pieces fall to the lowest empty cell of a column.
    pub gravity: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self::connect_four()
    }
}

/// Preset rule sets selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[value(name = "tictactoe")]
    TicTacToe,
    #[value(name = "connect4")]
    ConnectFour,
}

impl Variant {
    pub fn rules(self) -> Rules {
        match self {
            Variant::TicTacToe => Rules::tictactoe(),
            Variant::ConnectFour => Rules::connect_four(),
        }
    }
}

impl Rules {
    pub fn new(width: usize, height: usize, win_len: usize, gravity: bool) -> Rules {
        Rules {
            width,
            height,
            win_len,
            gravity,
        }
    }

    /// Classic 3x3 tic-tac-toe.
    pub fn tictactoe() -> Rules {
        Rules::new(3, 3, 3, false)
    }

    /// Connect four on an 8x8 board.
    pub fn connect_four() -> Rules {
        Rules::new(8, 8, 4, true)
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        if self.width == 0 || self.height == 0 {
            return Err(RulesError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        if !matches!(self.width.checked_mul(self.height), Some(n) if n <= MAX_CELLS) {
            return Err(RulesError::TooLarge {
                width: self.width,
                height: self.height,
                max: MAX_CELLS,
            });
        }
        if self.win_len == 0 || self.win_len > self.width.max(self.height) {
            return Err(RulesError::WinLength {
                win_len: self.win_len,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn cells(&self) -> usize {
        self.width * self.height
    }

    pub fn center_col(&self) -> usize {
        self.width / 2
    }
}

impl FromStr for Rules {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn rules_validate() {
        use super::*;

        assert!(Rules::tictactoe().validate().is_ok());
        assert!(Rules::connect_four().validate().is_ok());
        assert!(Rules::new(7, 6, 4, true).validate().is_ok());
        assert_eq!(
            Rules::new(0, 6, 4, true).validate(),
            Err(RulesError::EmptyBoard {
                width: 0,
                height: 6
            })
        );
        assert!(Rules::new(3, 3, 4, false).validate().is_err());
        assert!(Rules::new(3, 3, 0, false).validate().is_err());

        assert_eq!(
            Rules::new(1 << 20, 1 << 20, 4, true).validate(),
            Err(RulesError::TooLarge {
                width: 1 << 20,
                height: 1 << 20,
                max: MAX_CELLS
            })
        );
        assert!(Rules::new(usize::MAX, 2, 4, true).validate().is_err());
        assert!(Rules::new(MAX_CELLS + 1, 1, 4, true).validate().is_err());
        assert!(Rules::new(256, 256, 4, true).validate().is_ok());
    }

    #[test]
    fn rules_config() {
        use super::*;

        let rules: Rules = r#"{"width":7,"height":6}"#.parse().unwrap();
        assert_eq!(rules, Rules::new(7, 6, 4, true));
        assert_eq!(rules.center_col(), 3);
        assert_eq!(Rules::tictactoe().cells(), 9);
        assert_eq!(Variant::TicTacToe.rules(), Rules::tictactoe());
        assert_eq!(Variant::ConnectFour.rules(), Rules::default());
    }
}
