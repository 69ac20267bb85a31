//! Checkers game state machine.
//!
//! `GameState` owns the board, both piece lists, turn bookkeeping, the pinned
//! piece of an unfinished multi-jump and the snapshot history. Legality and
//! move application live in `move_generation`; the thin wrappers here keep the
//! common call sites short.

use crate::checkers_errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::{
    black_start_squares, white_start_squares, MAX_TURNS, NO_CAPTURE_DRAW_LIMIT,
};
use crate::game_state::checkers_types::*;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_generator::possible_moves;
use crate::move_generation::move_oracle::check_move;
use crate::utils::layout_parser::parse_layout;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    /// `[white, black]`, creation order.
    pub pieces: [Vec<PieceRecord>; 2],
    pub side_to_move: Color,
    pub turns_since_capture: u32,
    /// Index into the side to move's piece list.
    pub pinned_piece: Option<usize>,
    pub turn: u32,
    pub history: Vec<String>,
}

impl GameState {
    /// Board with no pieces.
    pub fn new_empty(side_to_move: Color) -> Self {
        Self {
            board: Board::default(),
            pieces: [Vec::new(), Vec::new()],
            side_to_move,
            turns_since_capture: 0,
            pinned_piece: None,
            turn: 0,
            history: Vec::new(),
        }
    }

    /// Standard starting position, Black to move.
    pub fn new_game() -> Self {
        let mut state = Self::new_empty(Color::Black);
        for pos in white_start_squares() {
            state.place_piece(Color::White, pos, false);
        }
        for pos in black_start_squares() {
            state.place_piece(Color::Black, pos, false);
        }
        state
    }

    #[inline]
    pub fn from_layout(layout: &str, side_to_move: Color) -> CheckersResult<Self> {
        parse_layout(layout, side_to_move)
    }

    /// Add a live piece and return its index in its color's list.
    ///
    /// Callers are responsible for not placing two pieces on one square.
    pub fn place_piece(&mut self, color: Color, pos: Position, king: bool) -> usize {
        let list = &mut self.pieces[color.index()];
        list.push(PieceRecord {
            color,
            position: Some(pos),
            king,
        });
        self.board.set_cell(pos, CellState::from_color(color));
        list.len() - 1
    }

    #[inline]
    pub fn pieces(&self, color: Color) -> &[PieceRecord] {
        &self.pieces[color.index()]
    }

    pub fn live_pieces(&self, color: Color) -> impl Iterator<Item = &PieceRecord> + '_ {
        self.pieces(color).iter().filter(|p| !p.is_captured())
    }

    pub fn live_count(&self, color: Color) -> usize {
        self.live_pieces(color).count()
    }

    /// Index of the live piece of `color` standing on `pos`.
    pub fn piece_index_at(&self, color: Color, pos: Position) -> Option<usize> {
        self.pieces(color)
            .iter()
            .position(|p| p.position == Some(pos))
    }

    pub fn piece_at(&self, pos: Position) -> Option<&PieceRecord> {
        let color = self.board.cell(pos).color()?;
        self.piece_index_at(color, pos)
            .map(|i| &self.pieces(color)[i])
    }

    /// Square of the piece that must continue a multi-jump, if any.
    pub fn pinned_position(&self) -> Option<Position> {
        self.pinned_piece
            .and_then(|i| self.pieces(self.side_to_move).get(i))
            .and_then(|p| p.position)
    }

    #[inline]
    pub fn encode_board(&self) -> String {
        self.board.encode()
    }

    #[inline]
    pub fn encode_relative(&self, perspective: Color) -> String {
        self.board.encode_relative(perspective)
    }

    /// Append the current board unless it repeats the last snapshot.
    /// Returns whether a snapshot was written.
    pub(crate) fn push_snapshot(&mut self) -> bool {
        let snapshot = self.encode_board();
        if self.history.last() == Some(&snapshot) {
            return false;
        }
        self.history.push(snapshot);
        true
    }

    /// Independent copy; the history is carried over only when asked for.
    pub fn copy(&self, include_history: bool) -> Self {
        Self {
            board: self.board,
            pieces: self.pieces.clone(),
            side_to_move: self.side_to_move,
            turns_since_capture: self.turns_since_capture,
            pinned_piece: self.pinned_piece,
            turn: self.turn,
            history: if include_history {
                self.history.clone()
            } else {
                Vec::new()
            },
        }
    }

    #[inline]
    pub fn possible_moves(&self, side: Color) -> Vec<Move> {
        possible_moves(self, side)
    }

    #[inline]
    pub fn check_move(&self, mv: Move) -> Option<MoveKind> {
        check_move(self, mv)
    }

    #[inline]
    pub fn make_move(&mut self, mv: Move) -> bool {
        make_move(self, mv)
    }

    /// `None` while the game continues.
    pub fn check_end_game(&self) -> Option<GameResult> {
        if self.turn > MAX_TURNS {
            let white = self.live_count(Color::White);
            let black = self.live_count(Color::Black);
            return Some(match white.cmp(&black) {
                std::cmp::Ordering::Greater => GameResult::WhiteWin,
                std::cmp::Ordering::Less => GameResult::BlackWin,
                std::cmp::Ordering::Equal => GameResult::Draw,
            });
        }

        if self.turns_since_capture >= NO_CAPTURE_DRAW_LIMIT {
            return Some(GameResult::Draw);
        }

        if possible_moves(self, self.side_to_move).is_empty() {
            return Some(self.side_to_move.opposite().wins());
        }

        None
    }
}
