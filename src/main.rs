use anyhow::Result;

use gridsnake::game::Game;
use gridsnake::score::{FileStore, HIGH_SCORE_FILE};

fn main() -> Result<()> {
    pretty_env_logger::init();

    let store = FileStore::new(HIGH_SCORE_FILE);
    let mut game = Game::new(Box::new(store));
    game.run()?;

    println!("Thanks for playing! High score: {}", game.high_score());
    Ok(())
}
