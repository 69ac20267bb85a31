//! Fixed 8×8 grid of cell states.

use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::{CellState, Color, Position};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    #[inline]
    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.row as usize][pos.col as usize]
    }

    #[inline]
    pub fn set_cell(&mut self, pos: Position, state: CellState) {
        self.cells[pos.row as usize][pos.col as usize] = state;
    }

    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos) == CellState::Empty
    }

    /// Row-major iteration over every cell.
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &state)| (Position::new(row as u8, col as u8), state))
        })
    }

    /// Absolute encoding: `'B'` black, `'W'` white, `' '` empty.
    pub fn encode(&self) -> String {
        self.iter()
            .map(|(_, state)| match state {
                CellState::Empty => ' ',
                CellState::White => 'W',
                CellState::Black => 'B',
            })
            .collect()
    }

    /// Encoding relative to `perspective`: `'M'` mine, `'E'` enemy, `' '` empty.
    pub fn encode_relative(&self, perspective: Color) -> String {
        self.iter()
            .map(|(_, state)| match state.color() {
                None => ' ',
                Some(color) if color == perspective => 'M',
                Some(_) => 'E',
            })
            .collect()
    }
}
