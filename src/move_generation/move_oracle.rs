//! Move legality oracle.
//!
//! Pure functions deciding whether a `(piece, direction)` pair is a simple
//! move, a capturing jump, or illegal. Both move enumeration and move
//! application consult these so the two can never disagree.

use crate::game_state::checkers_types::*;
use crate::game_state::game_state::GameState;

/// Classify `mv` against `game_state`, `None` when illegal.
pub fn check_move(game_state: &GameState, mv: Move) -> Option<MoveKind> {
    let index = game_state.piece_index_at(mv.color, mv.from)?;

    if let Some(pinned) = game_state.pinned_piece {
        if mv.color == game_state.side_to_move && pinned != index {
            return None;
        }
    }

    let piece = &game_state.pieces(mv.color)[index];
    match check_piece_direction(game_state, piece, mv.direction)? {
        MoveKind::Jump => Some(MoveKind::Jump),
        MoveKind::Move if check_jump_required(game_state, mv.color) => None,
        MoveKind::Move => Some(MoveKind::Move),
    }
}

#[inline]
pub fn is_legal(game_state: &GameState, mv: Move) -> bool {
    check_move(game_state, mv).is_some()
}

/// Geometric check for one piece and direction, ignoring the mandatory-capture
/// and pin rules.
fn check_piece_direction(
    game_state: &GameState,
    piece: &PieceRecord,
    direction: Direction,
) -> Option<MoveKind> {
    let from = piece.position?;
    if !piece.can_move_towards(direction) {
        return None;
    }

    let adjacent = from.offset(direction, 1)?;
    match game_state.board.cell(adjacent).color() {
        None => Some(MoveKind::Move),
        Some(color) if color == piece.color => None,
        Some(_) => {
            let landing = from.offset(direction, 2)?;
            game_state
                .board
                .is_empty(landing)
                .then_some(MoveKind::Jump)
        }
    }
}

/// True when the piece at `index` of `color` has a capture available.
pub fn check_piece_can_take(game_state: &GameState, color: Color, index: usize) -> bool {
    let Some(piece) = game_state.pieces(color).get(index) else {
        return false;
    };
    piece_can_take(game_state, piece)
}

fn piece_can_take(game_state: &GameState, piece: &PieceRecord) -> bool {
    piece.directions().iter().any(|&direction| {
        check_piece_direction(game_state, piece, direction) == Some(MoveKind::Jump)
    })
}

/// True when any live piece of `color` can take.
pub fn check_jump_required(game_state: &GameState, color: Color) -> bool {
    game_state
        .live_pieces(color)
        .any(|piece| piece_can_take(game_state, piece))
}
