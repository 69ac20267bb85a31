//! Textual board layouts.
//!
//! A layout is eight whitespace-separated rows of eight characters, row 0
//! first: `.` empty, `w`/`W` white man/king, `b`/`B` black man/king. Pieces
//! are created in row-major reading order.

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::{Color, Position};
use crate::game_state::game_state::GameState;

pub fn parse_layout(layout: &str, side_to_move: Color) -> CheckersResult<GameState> {
    let rows: Vec<&str> = layout.split_whitespace().collect();
    if rows.len() != BOARD_SIZE {
        return Err(CheckersError::InvalidLayout(format!(
            "expected {BOARD_SIZE} rows, found {}",
            rows.len()
        )));
    }

    let mut state = GameState::new_empty(side_to_move);
    for (row, text) in rows.iter().enumerate() {
        let cells: Vec<char> = text.chars().collect();
        if cells.len() != BOARD_SIZE {
            return Err(CheckersError::InvalidLayout(format!(
                "row {row} has {} cells",
                cells.len()
            )));
        }

        for (col, ch) in cells.into_iter().enumerate() {
            let pos = Position::new(row as u8, col as u8);
            match ch {
                '.' => {}
                'w' => {
                    state.place_piece(Color::White, pos, false);
                }
                'W' => {
                    state.place_piece(Color::White, pos, true);
                }
                'b' => {
                    state.place_piece(Color::Black, pos, false);
                }
                'B' => {
                    state.place_piece(Color::Black, pos, true);
                }
                other => {
                    return Err(CheckersError::InvalidLayout(format!(
                        "unexpected '{other}' at {pos}"
                    )))
                }
            }
        }
    }

    Ok(state)
}
