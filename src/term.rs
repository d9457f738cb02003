use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use crate::engine::Snapshot;
use crate::GridInt;

const BODY_CHAR: char = '█';
const FOOD_CHAR: char = 'O';

// Every line is padded to this width so shorter text overwrites longer
// leftovers from the previous frame
const LINE_WIDTH: usize = 52;

pub struct Screen {
    out: Stdout,
    active: bool,
}

impl Screen {
    pub fn new() -> Self {
        Screen { out: stdout(), active: false }
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.out, EnterAlternateScreen, Hide, Clear(ClearType::All))
            .context("failed to set up the alternate screen")?;
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.active = true;
        Ok(())
    }

    pub fn restore(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let _ = terminal::disable_raw_mode();
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
    }

    /// Redraws the whole frame from a state snapshot: score lines on top,
    /// the bordered board, and a one-line footer message below it.
    pub fn draw(&mut self, snapshot: &Snapshot, avatar: char, footer: &str) -> Result<()> {
        let (width, height) = snapshot.bounds;
        let horizontal = format!("+{}+", "-".repeat(width as usize));

        self.line(0, &format!("High Score: {}", snapshot.high_score))?;
        self.line(1, &format!("Score: {}", snapshot.score))?;
        self.line(2, &horizontal)?;
        for y in 0..height {
            self.line(3 + y as u16, &grid_row(snapshot, avatar, y))?;
        }
        self.line(3 + height as u16, &horizontal)?;
        self.line(4 + height as u16, footer)?;

        self.out.flush().context("failed to flush the screen")?;
        Ok(())
    }

    /// Drains every key event currently queued up, without blocking.
    pub fn drain_keys(&mut self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).context("failed to poll for input")? {
            if let Event::Key(ev) = read().context("failed to read input")? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    /// Blocks until the next key press.
    pub fn next_key(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read().context("failed to read input")? {
                return Ok(ev);
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn line(&mut self, row: u16, text: &str) -> Result<()> {
        queue!(
            self.out,
            MoveTo(0, row),
            Print(format!("{:<width$}", text, width = LINE_WIDTH))
        )
        .context("failed to queue a screen line")?;
        Ok(())
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        // Leave the terminal usable even on a panic
        self.restore();
    }
}

/// One row of the playing field. The head wins over everything, and the
/// body wins over food on cells where the two coincide.
fn grid_row(snapshot: &Snapshot, avatar: char, y: GridInt) -> String {
    let mut row = String::with_capacity(snapshot.bounds.0 as usize + 2);

    row.push('|');
    for x in 0..snapshot.bounds.0 {
        let cell = (x, y);
        let ch = if snapshot.snake[0] == cell {
            avatar
        } else if snapshot.snake.contains(&cell) {
            BODY_CHAR
        } else if snapshot.food == cell {
            FOOD_CHAR
        } else {
            ' '
        };
        row.push(ch);
    }
    row.push('|');

    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_row_places_head_body_and_food() {
        let snake = [(2, 0), (1, 0), (0, 0)];
        let snapshot = Snapshot {
            bounds: (5, 1),
            snake: &snake,
            food: (4, 0),
            score: 0,
            high_score: 0,
            running: true,
        };

        assert_eq!(grid_row(&snapshot, '@', 0), "|██@ O|");
    }

    #[test]
    fn body_hides_food_on_a_shared_cell() {
        let snake = [(2, 0), (1, 0), (0, 0)];
        let snapshot = Snapshot {
            bounds: (5, 1),
            snake: &snake,
            food: (1, 0),
            score: 0,
            high_score: 0,
            running: true,
        };

        assert_eq!(grid_row(&snapshot, '@', 0), "|██@  |");
    }
}
