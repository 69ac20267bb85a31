//! Errors used throughout the checkers engine.
//!
//! Illegal moves are not errors: the oracle and `make_move` report them as
//! `None` / `false` so callers can simply ask again. A side with no legal
//! moves reaching an agent is a caller bug and panics instead. Everything
//! left over that a caller can reasonably handle is a `CheckersError`.

use thiserror::Error;

use crate::game_state::checkers_types::Color;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckersError {
    /// A textual board layout failed to parse.
    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    /// An agent kept proposing moves the rules engine rejected.
    #[error("{color} agent proposed {attempts} illegal moves in a row")]
    TooManyIllegalMoves { color: Color, attempts: u32 },

    /// Another agent panicked while holding the shared learning table.
    #[error("learning table lock was poisoned")]
    LearningTablePoisoned,

    /// Layer dimensions of a dense network do not line up.
    #[error("dense network shape mismatch: {0}")]
    NetworkShape(String),

    /// Unknown agent name requested from a factory.
    #[error("unknown agent '{0}'")]
    InvalidAgent(String),
}

pub type CheckersResult<T> = Result<T, CheckersError>;
