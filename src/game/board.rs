use std::fmt::{self, Debug, Display};
use std::ops::{Deref, DerefMut, Index};

use rand::seq::IteratorRandom;
use rand::Rng;

use super::{Cell, Line, Mark, Rules, Windows};
use crate::env::{Move, Pos};
use crate::error::MoveError;

/// The outcome of a game.
/// If the game did not end the outcome is `None`.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Outcome {
    None,
    Draw,
    Winner(Mark),
}

/// Fixed size grid of cells.
///
/// The shape is defined by the rules and never changes after creation.
/// Search algorithms mutate the board in place with [`Board::play`], which
/// reverts the move when the returned guard is dropped.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rules: Rules,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board. The rules are expected to be valid.
    pub fn new(rules: Rules) -> Board {
        debug_assert!(rules.validate().is_ok(), "invalid rules {rules:?}");
        Board {
            rules,
            cells: vec![Cell::Empty; rules.cells()],
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn width(&self) -> usize {
        self.rules.width
    }

    pub fn height(&self) -> usize {
        self.rules.height
    }

    pub fn has(&self, p: Pos) -> bool {
        p.row < self.rules.height && p.col < self.rules.width
    }

    /// Row a piece dropped into `col` would land on.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.rules.width {
            return None;
        }
        (0..self.rules.height)
            .rev()
            .find(|&row| self[Pos::new(row, col)].is_empty())
    }

    /// Topmost occupied row of `col`.
    fn column_top(&self, col: usize) -> Option<usize> {
        if col >= self.rules.width {
            return None;
        }
        (0..self.rules.height).find(|&row| !self[Pos::new(row, col)].is_empty())
    }

    /// Returns the cell `mv` would fill or why it cannot be played.
    pub fn resolve(&self, mv: Move) -> Result<Pos, MoveError> {
        match (self.rules.gravity, mv) {
            (false, Move::Cell(p)) => {
                if !self.has(p) {
                    Err(MoveError::OutOfRange(p))
                } else if !self[p].is_empty() {
                    Err(MoveError::Occupied(p))
                } else {
                    Ok(p)
                }
            }
            (true, Move::Column(col)) => {
                if col >= self.rules.width {
                    return Err(MoveError::InvalidColumn(col));
                }
                self.landing_row(col)
                    .map(|row| Pos::new(row, col))
                    .ok_or(MoveError::ColumnFull(col))
            }
            _ => Err(MoveError::WrongKind(mv)),
        }
    }

    /// Puts `mark` onto the board and returns the filled cell.
    /// Rejected moves leave the board untouched.
    pub fn place(&mut self, mv: Move, mark: Mark) -> Result<Pos, MoveError> {
        let p = self.resolve(mv)?;
        self.set(p, mark.into());
        Ok(p)
    }

    /// Reverts the last `place` of `mv`.
    ///
    /// The caller guarantees that `mv` was the last move placed into this
    /// cell or column. This is not validated.
    pub fn undo(&mut self, mv: Move) {
        let p = match mv {
            Move::Cell(p) => Some(p).filter(|&p| self.has(p)),
            Move::Column(col) => self.column_top(col).map(|row| Pos::new(row, col)),
        };
        if let Some(p) = p {
            self.set(p, Cell::Empty);
        }
    }

    /// Places `mark` and returns a guard that undoes the move when dropped.
    pub fn play(&mut self, mv: Move, mark: Mark) -> Result<Placed<'_>, MoveError> {
        let pos = self.place(mv, mark)?;
        Ok(Placed { board: self, pos })
    }

    fn set(&mut self, p: Pos, cell: Cell) {
        let width = self.rules.width;
        self.cells[p.row * width + p.col] = cell;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Currently placeable moves.
    /// Empty cells in row-major order, or non-full columns from left to right.
    pub fn legal_moves(&self) -> LegalMoves<'_> {
        LegalMoves {
            board: self,
            next: 0,
        }
    }

    /// All lines of exactly the win length.
    pub fn windows(&self) -> Windows {
        Windows::new(self.rules.width, self.rules.height, self.rules.win_len)
    }

    pub fn line(&self, line: Line) -> impl Iterator<Item = Cell> + '_ {
        line.positions().map(move |p| self[p])
    }

    /// Mark of the first completely filled window in scan order.
    pub fn winner(&self) -> Option<Mark> {
        self.windows().find_map(|line| {
            let first = self[line.start];
            let mark = first.mark()?;
            self.line(line).all(|c| c == first).then_some(mark)
        })
    }

    pub fn outcome(&self) -> Outcome {
        if let Some(mark) = self.winner() {
            Outcome::Winner(mark)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::None
        }
    }

    pub fn count(&self, mark: Mark) -> usize {
        let cell = Cell::from(mark);
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Number of pieces on the board.
    pub fn ply(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// The player to move, inferred from the piece counts.
    pub fn to_move(&self) -> Mark {
        if self.count(Mark::X) <= self.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Plays up to `max_moves` random moves, starting with `X`.
    /// Stops early if the game ends.
    pub fn random_opening<R: Rng>(rules: Rules, max_moves: usize, rng: &mut R) -> Board {
        let mut board = Board::new(rules);
        let moves = rng.gen_range(0..=max_moves);
        let mut mark = Mark::X;
        for _ in 0..moves {
            if board.outcome() != Outcome::None {
                break;
            }
            let Some(mv) = board.legal_moves().choose(rng) else {
                break;
            };
            if board.place(mv, mark).is_ok() {
                mark = mark.other();
            }
        }
        board
    }

    /// Parses a board from a text diagram, top row first.
    ///
    /// ```txt
    /// . O .
    /// . X .
    /// X . .
    /// ```
    ///
    /// Gravity boards with floating pieces are rejected.
    pub fn parse(txt: &str, win_len: usize, gravity: bool) -> Option<Board> {
        let rows = txt
            .lines()
            .map(|l| {
                l.split_whitespace()
                    .flat_map(|t| t.chars())
                    .map(Cell::parse)
                    .collect::<Option<Vec<_>>>()
            })
            .filter(|r| !matches!(r, Some(r) if r.is_empty()))
            .collect::<Option<Vec<_>>>()?;

        let height = rows.len();
        let width = rows.first()?.len();
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }

        let rules = Rules::new(width, height, win_len, gravity);
        rules.validate().ok()?;

        let board = Board {
            rules,
            cells: rows.into_iter().flatten().collect(),
        };

        if gravity {
            for col in 0..width {
                if let Some(top) = board.column_top(col) {
                    if (top..height).any(|row| board[Pos::new(row, col)].is_empty()) {
                        return None;
                    }
                }
            }
        }
        Some(board)
    }
}

/// Panics if `p` is outside of the board, see [`Board::has`].
impl Index<Pos> for Board {
    type Output = Cell;

    fn index(&self, p: Pos) -> &Self::Output {
        assert!(self.has(p), "{p:?} is outside of the board");
        &self.cells[p.row * self.rules.width + p.col]
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in 0..self.height() {
            write!(f, "  ")?;
            for col in 0..self.width() {
                write!(f, "{:?} ", self[Pos::new(row, col)])?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height() {
            if !self.rules.gravity {
                write!(f, "{row} ")?;
            }
            write!(f, "|")?;
            for col in 0..self.width() {
                write!(f, " {:?} |", self[Pos::new(row, col)])?;
            }
            writeln!(f)?;
        }
        write!(f, "{}", if self.rules.gravity { "  " } else { "    " })?;
        for col in 0..self.width() {
            write!(f, "{col:<4}")?;
        }
        writeln!(f)
    }
}

/// A move that is reverted when this guard goes out of scope.
pub struct Placed<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Placed<'_> {
    /// The cell the move filled.
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Placed<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placed<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placed<'_> {
    fn drop(&mut self) {
        self.board.set(self.pos, Cell::Empty);
    }
}

/// Iterator over all legal moves of a board.
pub struct LegalMoves<'a> {
    board: &'a Board,
    next: usize,
}

impl Iterator for LegalMoves<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        let board = self.board;
        if board.rules.gravity {
            while self.next < board.width() {
                let col = self.next;
                self.next += 1;
                if board[Pos::new(0, col)].is_empty() {
                    return Some(Move::Column(col));
                }
            }
        } else {
            while self.next < board.cells.len() {
                let i = self.next;
                self.next += 1;
                if board.cells[i].is_empty() {
                    return Some(Move::Cell(Pos::new(i / board.width(), i % board.width())));
                }
            }
        }
        None
    }
}
