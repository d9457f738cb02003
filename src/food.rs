use rand::Rng;

use crate::{grid, Coord};

/// Draws a food cell with x and y independently uniform over the board.
/// The cell is not checked against the snake, so food can land on the body.
pub fn spawn<R: Rng>(rng: &mut R) -> Coord {
    (rng.gen_range(0..grid::WIDTH), rng.gen_range(0..grid::HEIGHT))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn spawns_inside_the_board() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            assert!(grid::in_bounds(spawn(&mut rng)));
        }
    }

    #[test]
    fn seeded_spawns_are_reproducible() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(spawn(&mut a), spawn(&mut b));
        }
    }
}
