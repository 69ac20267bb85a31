//! Core value types shared by the board model, move generation and agents.
//!
//! Moves are plain value data (color, origin square, direction). Nothing in
//! this module holds a reference into a live game, so moves computed against a
//! copied state can be replayed against the authoritative one.

use std::fmt;

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side of a piece, and side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Result value declaring this side the winner.
    #[inline]
    pub const fn wins(self) -> GameResult {
        match self {
            Color::White => GameResult::WhiteWin,
            Color::Black => GameResult::BlackWin,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Empty,
    White,
    Black,
}

impl CellState {
    #[inline]
    pub const fn from_color(color: Color) -> Self {
        match color {
            Color::White => CellState::White,
            Color::Black => CellState::Black,
        }
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            CellState::Empty => None,
            CellState::White => Some(Color::White),
            CellState::Black => Some(Color::Black),
        }
    }
}

/// Diagonal step. "Down" is increasing row, "right" is increasing column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
}

impl Direction {
    /// Enumeration order used by move generation.
    pub const ALL: [Direction; 4] = [
        Direction::UpRight,
        Direction::UpLeft,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// `(d_row, d_col)` for one step.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::UpRight => (-1, 1),
            Direction::UpLeft => (-1, -1),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
        }
    }
}

/// Board coordinate, `row` and `col` both in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Square `steps` cells away along `direction`, or `None` off the board.
    #[inline]
    pub fn offset(self, direction: Direction, steps: i8) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = self.row as i8 + dr * steps;
        let col = self.col as i8 + dc * steps;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Position::new(row as u8, col as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn is_back_row(self) -> bool {
        self.row == 0 || self.row == 7
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

const MAN_DIRECTIONS_WHITE: [Direction; 2] = [Direction::DownRight, Direction::DownLeft];
const MAN_DIRECTIONS_BLACK: [Direction; 2] = [Direction::UpRight, Direction::UpLeft];

/// A single checker. `position == None` marks a captured piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceRecord {
    pub color: Color,
    pub position: Option<Position>,
    pub king: bool,
}

impl PieceRecord {
    pub const fn new(color: Color, position: Position) -> Self {
        Self {
            color,
            position: Some(position),
            king: false,
        }
    }

    #[inline]
    pub const fn is_captured(&self) -> bool {
        self.position.is_none()
    }

    /// Directions this piece may travel in, derived from color and king status.
    #[inline]
    pub fn directions(&self) -> &'static [Direction] {
        if self.king {
            &Direction::ALL
        } else {
            match self.color {
                Color::White => &MAN_DIRECTIONS_WHITE,
                Color::Black => &MAN_DIRECTIONS_BLACK,
            }
        }
    }

    #[inline]
    pub fn can_move_towards(&self, direction: Direction) -> bool {
        self.directions().contains(&direction)
    }
}

/// A candidate move: the piece of `color` standing on `from` steps along `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub color: Color,
    pub from: Position,
    pub direction: Direction,
}

impl Move {
    pub const fn new(color: Color, from: Position, direction: Direction) -> Self {
        Self {
            color,
            from,
            direction,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.color, self.from, self.direction)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Move,
    Jump,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    WhiteWin,
    BlackWin,
    Draw,
}

impl GameResult {
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWin => Some(Color::White),
            GameResult::BlackWin => Some(Color::Black),
            GameResult::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn men_only_move_forward_and_kings_move_everywhere() {
        let mut white = PieceRecord::new(Color::White, Position::new(2, 1));
        assert_eq!(white.directions(), &[Direction::DownRight, Direction::DownLeft]);
        assert!(!white.can_move_towards(Direction::UpLeft));

        let black = PieceRecord::new(Color::Black, Position::new(5, 0));
        assert_eq!(black.directions(), &[Direction::UpRight, Direction::UpLeft]);

        white.king = true;
        assert_eq!(white.directions().len(), 4);
    }

    #[test]
    fn offset_stays_on_board() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.offset(Direction::UpLeft, 1), None);
        assert_eq!(corner.offset(Direction::DownRight, 2), Some(Position::new(2, 2)));
        assert_eq!(Position::new(6, 6).offset(Direction::DownRight, 2), None);
    }
}
