//! Plain-text board renderer. The match runner logs each final position
//! with it at `debug`, which `match_series --verbose` shows.

use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::{Color, PieceRecord, Position};
use crate::game_state::game_state::GameState;

/// Render the board with row indices down the left and column indices on top.
///
/// Row 0 is printed first. Men are `w`/`b`, kings `W`/`B`, playable empty
/// squares `·` and light squares a blank.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");

    for row in 0..BOARD_SIZE as u8 {
        out.push(char::from(b'0' + row));
        out.push(' ');

        for col in 0..BOARD_SIZE as u8 {
            let ch = match game_state.piece_at(Position::new(row, col)) {
                Some(piece) => piece_char(piece),
                None if (row + col) % 2 == 1 => '·',
                None => ' ',
            };
            out.push(ch);

            if usize::from(col) < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "{} to move, turn {}",
        game_state.side_to_move, game_state.turn
    ));
    if let Some(pos) = game_state.pinned_position() {
        out.push_str(&format!(", continuing from {pos}"));
    }

    out
}

fn piece_char(piece: &PieceRecord) -> char {
    match (piece.color, piece.king) {
        (Color::White, false) => 'w',
        (Color::White, true) => 'W',
        (Color::Black, false) => 'b',
        (Color::Black, true) => 'B',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_start_position() {
        let rendered = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  0 1 2 3 4 5 6 7");
        assert_eq!(lines[1], "0   w   w   w   w");
        assert_eq!(lines[4], "3 ·   ·   ·   ·  ");
        assert_eq!(lines[8], "7 b   b   b   b  ");
        assert!(lines[9].starts_with("Black to move"));
    }

    #[test]
    fn kings_are_upper_case() {
        let game = GameState::from_layout(
            ".W......
             ........
             ........
             ........
             ........
             ........
             ........
             ......B.",
            Color::White,
        )
        .expect("layout should parse");
        let rendered = render_game_state(&game);
        assert!(rendered.contains("0   W"));
        assert!(rendered.contains("7 ·   ·   ·   B  "));
    }
}
