use crate::game_state::checkers_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_oracle::{check_move, check_piece_can_take};

/// Apply `mv` in place. Returns `false` and leaves the state untouched when
/// the move is illegal or not by the side to move.
pub fn make_move(game_state: &mut GameState, mv: Move) -> bool {
    make_move_with_undo(game_state, mv).is_some()
}

/// Apply `mv` in place and return the record needed to take it back.
pub fn make_move_with_undo(game_state: &mut GameState, mv: Move) -> Option<UndoState> {
    if mv.color != game_state.side_to_move {
        return None;
    }
    let kind = check_move(game_state, mv)?;
    let moved_index = game_state.piece_index_at(mv.color, mv.from)?;

    let enemy = mv.color.opposite();
    let (to, captured) = match kind {
        MoveKind::Move => (mv.from.offset(mv.direction, 1)?, None),
        MoveKind::Jump => {
            let mid = mv.from.offset(mv.direction, 1)?;
            let captured_index = game_state.piece_index_at(enemy, mid)?;
            (mv.from.offset(mv.direction, 2)?, Some((captured_index, mid)))
        }
    };

    let mut undo = UndoState {
        mv,
        kind,
        moved_index,
        captured,
        promoted: false,
        snapshot_written: false,
        prev_side_to_move: game_state.side_to_move,
        prev_turns_since_capture: game_state.turns_since_capture,
        prev_pinned_piece: game_state.pinned_piece,
        prev_turn: game_state.turn,
    };

    game_state.board.set_cell(mv.from, CellState::Empty);
    if let Some((captured_index, mid)) = captured {
        game_state.board.set_cell(mid, CellState::Empty);
        game_state.pieces[enemy.index()][captured_index].position = None;
    }

    let piece = &mut game_state.pieces[mv.color.index()][moved_index];
    piece.position = Some(to);
    if !piece.king && to.is_back_row() {
        piece.king = true;
        undo.promoted = true;
    }
    game_state.board.set_cell(to, CellState::from_color(mv.color));

    match kind {
        MoveKind::Move => {
            game_state.turns_since_capture = game_state.turns_since_capture.saturating_add(1);
            end_turn(game_state);
        }
        MoveKind::Jump => {
            game_state.turns_since_capture = 0;
            if check_piece_can_take(game_state, mv.color, moved_index) {
                game_state.pinned_piece = Some(moved_index);
            } else {
                end_turn(game_state);
            }
        }
    }

    undo.snapshot_written = game_state.push_snapshot();
    Some(undo)
}

fn end_turn(game_state: &mut GameState) {
    game_state.pinned_piece = None;
    game_state.turn = game_state.turn.saturating_add(1);
    game_state.side_to_move = game_state.side_to_move.opposite();
}

/// Exact inverse of [`make_move_with_undo`]. Undo records must be replayed in
/// reverse order of application.
pub fn unmake_move(game_state: &mut GameState, undo: UndoState) {
    let color = undo.mv.color;
    let piece = &mut game_state.pieces[color.index()][undo.moved_index];
    if let Some(to) = piece.position {
        game_state.board.set_cell(to, CellState::Empty);
    }
    piece.position = Some(undo.mv.from);
    if undo.promoted {
        piece.king = false;
    }
    game_state
        .board
        .set_cell(undo.mv.from, CellState::from_color(color));

    if let Some((captured_index, mid)) = undo.captured {
        let enemy = color.opposite();
        game_state.pieces[enemy.index()][captured_index].position = Some(mid);
        game_state.board.set_cell(mid, CellState::from_color(enemy));
    }

    if undo.snapshot_written {
        game_state.history.pop();
    }

    game_state.side_to_move = undo.prev_side_to_move;
    game_state.turns_since_capture = undo.prev_turns_since_capture;
    game_state.pinned_piece = undo.prev_pinned_piece;
    game_state.turn = undo.prev_turn;
}
