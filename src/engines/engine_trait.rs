//! Agent abstraction layer used by the match runner.
//!
//! Defines the constraints handed to an agent on each turn and the payload it
//! returns, so different decision strategies can be swapped at runtime behind
//! a single trait object.

use crate::checkers_errors::CheckersResult;
use crate::game_state::checkers_types::{Move, Position};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_oracle::check_jump_required;

/// Turn constraints derived by the engine, so agents never need to inspect
/// history to learn about a pending capture or continuation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveConstraints {
    pub must_jump: bool,
    pub pinned_piece: Option<Position>,
}

impl MoveConstraints {
    pub fn from_state(game_state: &GameState) -> Self {
        let pinned_piece = game_state.pinned_position();
        Self {
            must_jump: pinned_piece.is_some()
                || check_jump_required(game_state, game_state.side_to_move),
            pinned_piece,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AgentOutput {
    pub chosen_move: Move,
    pub info_lines: Vec<String>,
}

impl AgentOutput {
    pub fn new(chosen_move: Move) -> Self {
        Self {
            chosen_move,
            info_lines: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentOutcome {
    Win,
    Draw,
    Loss,
}

pub trait Agent: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Choose a move for `game_state.side_to_move`.
    ///
    /// Callers must only ask when the side to move has a legal move.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        constraints: &MoveConstraints,
    ) -> CheckersResult<AgentOutput>;

    fn on_result(&mut self, _outcome: AgentOutcome) {}
}
