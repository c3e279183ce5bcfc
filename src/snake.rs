use std::mem;

use crate::{Coords, TermInt};
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'w' => Some(Up),
            's' => Some(Down),
            'a' => Some(Left),
            'd' => Some(Right),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// Turning straight back is refused, the snake would bite its own neck.
    pub fn turn(self, requested: Direction) -> Direction {
        if requested == self.opposite() {
            self
        } else {
            requested
        }
    }

    fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

/// Applies a key press to the current heading. Unknown keys change nothing.
pub fn set_direction(current: Option<Direction>, key: char) -> Option<Direction> {
    match (current, Direction::from_key(key)) {
        (_, None) => current,
        (None, requested) => requested,
        (Some(dir), Some(requested)) => Some(dir.turn(requested)),
    }
}

/// Segments in head-to-tail order.
pub struct Snake {
    body: Vec<Coords>,
}

impl Snake {
    pub fn new(pos: Coords) -> Self {
        Snake { body: vec![pos] }
    }

    #[cfg(test)]
    pub(crate) fn from_body(body: Vec<Coords>) -> Self {
        assert!(!body.is_empty());
        Snake { body }
    }

    pub fn body(&self) -> &[Coords] {
        &self.body
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Moves the head one cell and drags every segment into the spot its
    /// predecessor just left. An unset direction leaves the head in place.
    ///
    /// Leaving the interior wraps to the other side. Going up or left lands on
    /// the last row/column (the border itself), matching how the board has
    /// always behaved.
    pub fn advance(&mut self, direction: Option<Direction>, rows: TermInt, cols: TermInt) {
        let (dx, dy) = direction.map_or((0, 0), Direction::delta);
        let old_head = self.body[0];

        let mut prev = old_head;
        for segment in self.body[1..].iter_mut() {
            prev = mem::replace(segment, prev);
        }

        let (rows, cols) = (rows as i32, cols as i32);
        let mut x = old_head.0 as i32 + dx;
        let mut y = old_head.1 as i32 + dy;

        if y >= rows - 1 {
            y = 1;
        }
        if x >= cols - 1 {
            x = 1;
        }
        if y < 1 {
            y = rows - 1;
        }
        if x < 1 {
            x = cols - 1;
        }

        self.body[0] = (x as TermInt, y as TermInt);
    }

    pub fn self_collision(&self) -> bool {
        self.body[1..].contains(&self.head())
    }

    /// Duplicates the tail; the copy separates on the next move.
    pub fn grow(&mut self) {
        if let Some(&tail) = self.body.last() {
            self.body.push(tail);
        }
    }
}
