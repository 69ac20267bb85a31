//! Canonical checkers-rule constants.
//!
//! Board dimensions, draw thresholds and the standard starting layout used to
//! initialize a new game.

use crate::game_state::checkers_types::Position;

pub const BOARD_SIZE: usize = 8;

/// Completed turns after which the game is adjudicated on piece count.
pub const MAX_TURNS: u32 = 200;

/// Consecutive simple moves without a capture that end the game in a draw.
pub const NO_CAPTURE_DRAW_LIMIT: u32 = 100;

/// Material weights used by the static evaluators.
pub const MAN_VALUE: i32 = 3;
pub const KING_VALUE: i32 = 5;

/// Bonus (or penalty) applied when one side has no pieces left.
pub const ANNIHILATION_BONUS: i32 = 200;

/// Standard layout in [`crate::utils::layout_parser`] notation, row 0 first.
pub const STARTING_LAYOUT: &str = "\
.w.w.w.w
w.w.w.w.
.w.w.w.w
........
........
b.b.b.b.
.b.b.b.b
b.b.b.b.";

/// White starting squares in creation order.
pub fn white_start_squares() -> Vec<Position> {
    start_squares(&[0, 1, 2])
}

/// Black starting squares in creation order (back row first).
pub fn black_start_squares() -> Vec<Position> {
    start_squares(&[7, 6, 5])
}

fn start_squares(rows: &[u8]) -> Vec<Position> {
    rows.iter()
        .flat_map(|&row| {
            (0..BOARD_SIZE as u8)
                .filter(move |col| (row + col) % 2 == 1)
                .map(move |col| Position::new(row, col))
        })
        .collect()
}
