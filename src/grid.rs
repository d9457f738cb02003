use crate::{Coord, GridInt};

pub const WIDTH: GridInt = 20;
pub const HEIGHT: GridInt = 20;

pub fn in_bounds(pos: Coord) -> bool {
    pos.0 >= 0 && pos.0 < WIDTH && pos.1 >= 0 && pos.1 < HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_in_bounds() {
        assert!(in_bounds((0, 0)));
        assert!(in_bounds((WIDTH - 1, 0)));
        assert!(in_bounds((0, HEIGHT - 1)));
        assert!(in_bounds((WIDTH - 1, HEIGHT - 1)));
    }

    #[test]
    fn cells_past_any_edge_are_out() {
        assert!(!in_bounds((-1, 5)));
        assert!(!in_bounds((WIDTH, 5)));
        assert!(!in_bounds((5, -1)));
        assert!(!in_bounds((5, HEIGHT)));
    }
}
