//! Legal move enumeration.
//!
//! Walks every live piece in creation order and every direction in
//! `Direction::ALL` order, keeping the pairs the oracle accepts. The order is
//! deterministic so searches and tests are reproducible.

use crate::game_state::checkers_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::move_oracle::{check_move, is_legal};

/// A legal move together with the position it leads to.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub mv: Move,
    pub kind: MoveKind,
    pub game_after_move: GameState,
}

/// Every legal move for `side`, restricted to the pinned piece when one is set.
pub fn possible_moves(game_state: &GameState, side: Color) -> Vec<Move> {
    let pinned = if side == game_state.side_to_move {
        game_state.pinned_piece
    } else {
        None
    };

    let mut moves = Vec::new();
    for (index, piece) in game_state.pieces(side).iter().enumerate() {
        if pinned.is_some_and(|p| p != index) {
            continue;
        }
        let Some(from) = piece.position else {
            continue;
        };
        for &direction in piece.directions() {
            let mv = Move::new(side, from, direction);
            if is_legal(game_state, mv) {
                moves.push(mv);
            }
        }
    }
    moves
}

/// Legal moves for the side to move, each applied to a history-free copy.
pub fn generate_successors(game_state: &GameState) -> Vec<GeneratedMove> {
    possible_moves(game_state, game_state.side_to_move)
        .into_iter()
        .filter_map(|mv| {
            let kind = check_move(game_state, mv)?;
            let mut next = game_state.copy(false);
            make_move(&mut next, mv).then_some(GeneratedMove {
                mv,
                kind,
                game_after_move: next,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::move_oracle::check_move;

    #[test]
    fn black_has_seven_opening_moves() {
        let game = GameState::new_game();
        let moves = possible_moves(&game, Color::Black);
        assert_eq!(moves.len(), 7);

        let expected = [
            (Position::new(5, 0), Direction::UpRight),
            (Position::new(5, 2), Direction::UpRight),
            (Position::new(5, 2), Direction::UpLeft),
            (Position::new(5, 4), Direction::UpRight),
            (Position::new(5, 4), Direction::UpLeft),
            (Position::new(5, 6), Direction::UpRight),
            (Position::new(5, 6), Direction::UpLeft),
        ];
        let got: Vec<_> = moves.iter().map(|m| (m.from, m.direction)).collect();
        assert_eq!(got, expected);
        assert!(moves
            .iter()
            .all(|&m| check_move(&game, m) == Some(MoveKind::Move)));
    }

    #[test]
    fn white_also_has_seven_opening_moves() {
        let game = GameState::new_game();
        assert_eq!(possible_moves(&game, Color::White).len(), 7);
    }

    #[test]
    fn enumeration_agrees_with_the_oracle_through_a_game() {
        let mut game = GameState::new_game();
        for ply in 0..80 {
            if game.check_end_game().is_some() {
                break;
            }
            let side = game.side_to_move;
            let moves = possible_moves(&game, side);
            for &mv in &moves {
                assert!(check_move(&game, mv).is_some(), "{mv} listed but illegal");
            }

            // Every rejected (piece, direction) pair must also be rejected by the oracle.
            for piece in game.live_pieces(side) {
                let from = piece.position.expect("live piece has a square");
                for direction in Direction::ALL {
                    let mv = Move::new(side, from, direction);
                    if !moves.contains(&mv) {
                        assert!(check_move(&game, mv).is_none(), "{mv} legal but not listed");
                    }
                }
            }

            let pick = moves[ply % moves.len()];
            assert!(game.make_move(pick));
        }
    }

    #[test]
    fn mandatory_capture_hides_simple_moves() {
        let game = GameState::from_layout(
            "........
             ........
             ........
             ..w.....
             ...b....
             ....b...
             .....b..
             ........",
            Color::Black,
        )
        .expect("layout should parse");

        let moves = possible_moves(&game, Color::Black);
        assert_eq!(moves.len(), 1);
        assert!(moves
            .iter()
            .all(|&m| check_move(&game, m) == Some(MoveKind::Jump)));
    }

    #[test]
    fn successors_are_history_free_copies() {
        let mut game = GameState::new_game();
        let first = possible_moves(&game, Color::Black)[0];
        assert!(game.make_move(first));

        let successors = generate_successors(&game);
        assert_eq!(successors.len(), 7);
        for generated in &successors {
            assert_eq!(generated.kind, MoveKind::Move);
            assert_eq!(generated.game_after_move.history.len(), 1);
            assert_eq!(generated.game_after_move.side_to_move, Color::Black);
        }
        assert_eq!(game.history.len(), 1);
    }
}
