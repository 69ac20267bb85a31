//! Random-move agent.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing, and low-strength gameplay.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::checkers_errors::CheckersResult;
use crate::engines::engine_trait::{Agent, AgentOutput, MoveConstraints};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::possible_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        constraints: &MoveConstraints,
    ) -> CheckersResult<AgentOutput> {
        let legal_moves = possible_moves(game_state, game_state.side_to_move);
        let picked = *legal_moves.choose(&mut self.rng).unwrap_or_else(|| {
            panic!(
                "random agent asked to move for {} with no legal moves",
                game_state.side_to_move
            )
        });

        let mut out = AgentOutput::new(picked);
        out.info_lines.push(format!(
            "random legal_moves {} must_jump {}",
            legal_moves.len(),
            constraints.must_jump
        ));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::Color;

    #[test]
    fn picks_a_legal_move() {
        let game = GameState::new_game();
        let mut engine = RandomEngine::with_seed(3);
        let constraints = MoveConstraints::from_state(&game);
        for _ in 0..20 {
            let out = engine
                .choose_move(&game, &constraints)
                .expect("random agent should move");
            assert!(game.check_move(out.chosen_move).is_some());
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let game = GameState::new_game();
        let constraints = MoveConstraints::from_state(&game);
        let mut a = RandomEngine::with_seed(11);
        let mut b = RandomEngine::with_seed(11);
        for _ in 0..10 {
            let ma = a.choose_move(&game, &constraints).expect("move").chosen_move;
            let mb = b.choose_move(&game, &constraints).expect("move").chosen_move;
            assert_eq!(ma, mb);
        }
    }

    #[test]
    #[should_panic(expected = "no legal moves")]
    fn moving_without_legal_moves_is_fatal() {
        let game = GameState::from_layout(
            ".b......
             ........
             ........
             ........
             ........
             ........
             ........
             ......w.",
            Color::Black,
        )
        .expect("layout should parse");
        let mut engine = RandomEngine::with_seed(0);
        let _ = engine.choose_move(&game, &MoveConstraints::default());
    }
}
