use crate::game_state::checkers_types::*;

/// Single undo record for `make_move_with_undo` / `unmake_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub kind: MoveKind,
    pub moved_index: usize,
    /// Index and square of the opponent piece removed by a jump.
    pub captured: Option<(usize, Position)>,
    pub promoted: bool,
    pub snapshot_written: bool,

    pub prev_side_to_move: Color,
    pub prev_turns_since_capture: u32,
    pub prev_pinned_piece: Option<usize>,
    pub prev_turn: u32,
}
