//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.

use crate::game_state::checkers_rules::{ANNIHILATION_BONUS, KING_VALUE, MAN_VALUE};
use crate::game_state::{checkers_types::*, game_state::GameState};

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of `perspective`; higher is better for it.
    fn score(&self, game_state: &GameState, perspective: Color) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: &PieceRecord) -> i32 {
        if piece.is_captured() {
            0
        } else if piece.king {
            KING_VALUE
        } else {
            MAN_VALUE
        }
    }

    #[inline]
    pub fn material(game_state: &GameState, color: Color) -> i32 {
        game_state.pieces(color).iter().map(Self::piece_value).sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState, perspective: Color) -> i32 {
        Self::material(game_state, perspective)
            - Self::material(game_state, perspective.opposite())
    }
}

/// Material plus a large swing when one side has been wiped out.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnihilationScorer;

impl BoardScorer for AnnihilationScorer {
    fn score(&self, game_state: &GameState, perspective: Color) -> i32 {
        let mut score = MaterialScorer.score(game_state, perspective);
        if game_state.live_count(perspective.opposite()) == 0 {
            score += ANNIHILATION_BONUS;
        }
        if game_state.live_count(perspective) == 0 {
            score -= ANNIHILATION_BONUS;
        }
        score
    }
}
