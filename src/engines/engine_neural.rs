//! One-ply agent driven by an opaque position scorer.
//!
//! Each legal successor is encoded from the mover's perspective and handed to
//! the scorer; the highest score wins, first seen on ties.

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::engines::engine_trait::{Agent, AgentOutput, MoveConstraints};
use crate::game_state::checkers_types::Move;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_successors;
use crate::search::dense_network::{board_features, DenseNetwork, MoveScorer, FEATURE_COUNT};

pub struct NeuralEngine<M: MoveScorer = DenseNetwork> {
    scorer: M,
}

impl NeuralEngine<DenseNetwork> {
    pub fn from_network(network: DenseNetwork) -> CheckersResult<Self> {
        if network.input_len() != FEATURE_COUNT {
            return Err(CheckersError::NetworkShape(format!(
                "network expects {} inputs, boards encode {FEATURE_COUNT}",
                network.input_len()
            )));
        }
        Ok(Self::with_scorer(network))
    }
}

impl<M: MoveScorer> NeuralEngine<M> {
    pub fn with_scorer(scorer: M) -> Self {
        Self { scorer }
    }
}

impl<M: MoveScorer> Agent for NeuralEngine<M> {
    fn name(&self) -> &str {
        "NeuralScorer"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        constraints: &MoveConstraints,
    ) -> CheckersResult<AgentOutput> {
        let me = game_state.side_to_move;
        let mut best: Option<(Move, f32)> = None;
        let mut evaluated = 0usize;

        for generated in generate_successors(game_state) {
            let score = self
                .scorer
                .score(&board_features(&generated.game_after_move, me));
            evaluated += 1;
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((generated.mv, score));
            }
        }

        let Some((chosen, score)) = best else {
            panic!("neural agent asked to move for {me} with no legal moves");
        };

        let mut out = AgentOutput::new(chosen);
        out.info_lines.push(format!(
            "neural candidates {evaluated} score {score:.3} must_jump {}",
            constraints.must_jump
        ));
        Ok(out)
    }
}
