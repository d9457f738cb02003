use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::score::{HighScoreStore, ScoreTracker};
use crate::snake::{Direction, Snake};
use crate::{food, grid, Coord, GridInt};

/// Where every game begins.
const START: Coord = (0, 0);

/// What a single tick did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Grew,
    GameOver,
}

/// Read-only view of the board, handed to the renderer once per tick.
pub struct Snapshot<'a> {
    pub bounds: (GridInt, GridInt),
    pub snake: &'a [Coord],
    pub food: Coord,
    pub score: u32,
    pub high_score: u32,
    pub running: bool,
}

pub struct Engine {
    pub snake: Snake,
    pub food: Coord,
    pub direction: Direction,
    running: bool,
    scores: ScoreTracker,
    rng: StdRng,
}

impl Engine {
    pub fn new(store: Box<dyn HighScoreStore>) -> Self {
        Engine::with_rng(store, StdRng::from_entropy())
    }

    /// Deterministic engine for tests and reproducible runs.
    pub fn with_seed(store: Box<dyn HighScoreStore>, seed: u64) -> Self {
        Engine::with_rng(store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(store: Box<dyn HighScoreStore>, mut rng: StdRng) -> Self {
        let food = food::spawn(&mut rng);
        Engine {
            snake: Snake::new(START),
            food,
            direction: Direction::Right,
            running: false,
            scores: ScoreTracker::new(store),
            rng,
        }
    }

    /// Starts a fresh game. Restarting after a game over goes through here
    /// too; only the high score carries over.
    pub fn start(&mut self) {
        self.snake = Snake::new(START);
        self.direction = Direction::Right;
        self.scores.reset();
        self.food = food::spawn(&mut self.rng);
        self.running = true;
    }

    /// Registers the latest steering input. Each call overwrites the
    /// previous one, so the last key before a tick wins. Reversals are not
    /// filtered here; steering into the neck is caught by the collision
    /// check on the next tick.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn score(&self) -> u32 {
        self.scores.score()
    }

    pub fn high_score(&self) -> u32 {
        self.scores.high()
    }

    /// Advances the game by one step. Returns `None` while the game is not
    /// running; after a game over the board freezes in place until the next
    /// `start`.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if !self.running {
            return None;
        }

        let new_head = self.snake.next_head(self.direction);

        // The whole pre-move body counts, tail included: stepping onto the
        // tail cell is fatal even though the tail would vacate it.
        if !grid::in_bounds(new_head) || self.snake.occupies(new_head) {
            self.running = false;
            return Some(TickOutcome::GameOver);
        }

        self.snake.push_head(new_head);

        if new_head == self.food {
            self.scores.increment();
            self.food = food::spawn(&mut self.rng);
            Some(TickOutcome::Grew)
        } else {
            self.snake.drop_tail();
            Some(TickOutcome::Moved)
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            bounds: (grid::WIDTH, grid::HEIGHT),
            snake: self.snake.body(),
            food: self.food,
            score: self.scores.score(),
            high_score: self.scores.high(),
            running: self.running,
        }
    }
}
