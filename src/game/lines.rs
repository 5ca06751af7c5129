use crate::env::Pos;

/// Scan directions in the order the winner check visits them:
/// rows, columns, down-right and up-right diagonals.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// A straight run of `len` cells starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: Pos,
    pub dir: (isize, isize),
    pub len: usize,
}

impl Line {
    pub fn positions(self) -> impl Iterator<Item = Pos> {
        (0..self.len).filter_map(move |i| self.start.offset(self.dir, i))
    }
}

/// Iterator over every line of exactly `len` cells that fits on a
/// `width`x`height` board.
pub struct Windows {
    width: usize,
    height: usize,
    len: usize,
    dir: usize,
    next: usize,
}

impl Windows {
    pub fn new(width: usize, height: usize, len: usize) -> Windows {
        Windows {
            width,
            height,
            len,
            dir: 0,
            next: 0,
        }
    }

    fn fits(&self, start: Pos, dir: (isize, isize)) -> bool {
        match start.offset(dir, self.len - 1) {
            Some(end) => end.row < self.height && end.col < self.width,
            None => false,
        }
    }
}

impl Iterator for Windows {
    type Item = Line;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 || self.width == 0 {
            return None;
        }
        while self.dir < DIRECTIONS.len() {
            if self.next >= self.width * self.height {
                self.dir += 1;
                self.next = 0;
                continue;
            }
            let start = Pos::new(self.next / self.width, self.next % self.width);
            self.next += 1;

            let dir = DIRECTIONS[self.dir];
            if self.fits(start, dir) {
                return Some(Line {
                    start,
                    dir,
                    len: self.len,
                });
            }
        }
        None
    }
}
