use crate::{Coord, GridInt};
use Direction::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn delta(self) -> (GridInt, GridInt) {
        match self {
            Up => (0, -1),
            Right => (1, 0),
            Down => (0, 1),
            Left => (-1, 0),
        }
    }
}

/// The snake body, head first. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Coord>,
}

impl Snake {
    pub fn new(head: Coord) -> Self {
        Snake { body: vec![head] }
    }

    /// Builds a snake from explicit segments, head first.
    pub fn from_segments(body: Vec<Coord>) -> Self {
        Snake { body }
    }

    pub fn head(&self) -> Coord {
        self.body[0]
    }

    pub fn body(&self) -> &[Coord] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// The cell the head would move into.
    pub fn next_head(&self, direction: Direction) -> Coord {
        let (dx, dy) = direction.delta();
        let (x, y) = self.head();
        (x + dx, y + dy)
    }

    pub fn occupies(&self, pos: Coord) -> bool {
        self.body.contains(&pos)
    }

    pub fn push_head(&mut self, pos: Coord) {
        self.body.insert(0, pos);
    }

    pub fn drop_tail(&mut self) {
        self.body.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snake_is_a_lone_head() {
        let snake = Snake::new((0, 0));
        assert_eq!(snake.body(), [(0, 0)]);
        assert_eq!(snake.head(), (0, 0));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn next_head_moves_one_unit() {
        let snake = Snake::new((5, 5));
        assert_eq!(snake.next_head(Up), (5, 4));
        assert_eq!(snake.next_head(Right), (6, 5));
        assert_eq!(snake.next_head(Down), (5, 6));
        assert_eq!(snake.next_head(Left), (4, 5));
    }

    #[test]
    fn occupies_covers_every_segment() {
        let snake = Snake::from_segments(vec![(5, 5), (4, 5), (3, 5)]);
        assert!(snake.occupies((5, 5)));
        assert!(snake.occupies((4, 5)));
        assert!(snake.occupies((3, 5)));
        assert!(!snake.occupies((6, 5)));
    }

    #[test]
    fn push_and_drop_shift_the_body() {
        let mut snake = Snake::from_segments(vec![(5, 5), (4, 5)]);
        snake.push_head((6, 5));
        assert_eq!(snake.body(), [(6, 5), (5, 5), (4, 5)]);

        snake.drop_tail();
        assert_eq!(snake.body(), [(6, 5), (5, 5)]);
    }
}
