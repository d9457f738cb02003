use std::thread::sleep;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use log::info;

use crate::engine::{Engine, TickOutcome};
use crate::input;
use crate::score::HighScoreStore;
use crate::term::Screen;

const TICK_INTERVAL: Duration = Duration::from_millis(100);
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Head glyphs the player can cycle through with 'c'. Cosmetic only.
const AVATARS: [char; 4] = ['@', 'Q', '&', '%'];

const INTRO_FOOTER: &str = "Press any key to begin";
const PLAY_FOOTER: &str = "Arrows/WASD steer, 'c' swaps avatar, Ctrl+C quits";
const LOST_FOOTER: &str = "You lost! Press any key to restart.";

enum RoundEnd {
    Lost,
    Quit,
}

/// Fixed-period tick source. It only lives inside a round, so leaving the
/// round drops it and no tick can fire after teardown.
struct TickClock {
    period: Duration,
    last: Instant,
}

impl TickClock {
    fn new(period: Duration) -> Self {
        TickClock { period, last: Instant::now() }
    }

    fn due(&mut self) -> bool {
        if self.last.elapsed() >= self.period {
            self.last = Instant::now();
            true
        } else {
            false
        }
    }
}

pub struct Game {
    engine: Engine,
    screen: Screen,
    avatar: usize,
}

impl Game {
    pub fn new(store: Box<dyn HighScoreStore>) -> Self {
        Game {
            engine: Engine::new(store),
            screen: Screen::new(),
            avatar: 0,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        self.screen.setup()?;
        let result = self.run_rounds();
        self.screen.restore();
        result
    }

    pub fn high_score(&self) -> u32 {
        self.engine.high_score()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn run_rounds(&mut self) -> Result<()> {
        self.draw(INTRO_FOOTER)?;
        if self.wait_key()?.is_none() {
            return Ok(());
        }

        loop {
            self.engine.start();
            match self.play_round()? {
                RoundEnd::Quit => return Ok(()),
                // Any key other than Ctrl+C starts the next game
                RoundEnd::Lost => {
                    if self.wait_key()?.is_none() {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn play_round(&mut self) -> Result<RoundEnd> {
        let mut clock = TickClock::new(TICK_INTERVAL);
        self.draw(PLAY_FOOTER)?;

        loop {
            sleep(POLL_INTERVAL);

            for ev in self.screen.drain_keys()? {
                if input::is_ctrl_c(&ev) {
                    return Ok(RoundEnd::Quit);
                }
                if ev.code == KeyCode::Char('c') {
                    self.avatar = (self.avatar + 1) % AVATARS.len();
                } else if let Some(direction) = input::map_key(ev.code) {
                    // Presses within one tick overwrite each other; the
                    // last one wins
                    self.engine.set_direction(direction);
                }
            }

            if clock.due() {
                match self.engine.tick() {
                    Some(TickOutcome::GameOver) => {
                        info!("game over at score {}", self.engine.score());
                        self.draw(LOST_FOOTER)?;
                        return Ok(RoundEnd::Lost);
                    }
                    Some(_) => self.draw(PLAY_FOOTER)?,
                    None => {}
                }
            }
        }
    }

    fn draw(&mut self, footer: &str) -> Result<()> {
        let snapshot = self.engine.snapshot();
        self.screen.draw(&snapshot, AVATARS[self.avatar], footer)
    }

    /// Blocks for one key; `None` means the player hit Ctrl+C.
    fn wait_key(&mut self) -> Result<Option<KeyEvent>> {
        let ev = self.screen.next_key()?;
        if input::is_ctrl_c(&ev) {
            Ok(None)
        } else {
            Ok(Some(ev))
        }
    }
}
