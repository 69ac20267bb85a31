//! Fixed-depth alpha-beta agent.
//!
//! Wraps `search::alpha_beta` with a configurable scorer and a seedable
//! tie-break RNG.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::checkers_errors::CheckersResult;
use crate::engines::engine_trait::{Agent, AgentOutput, MoveConstraints};
use crate::game_state::game_state::GameState;
use crate::search::alpha_beta::{search_best_move, SearchConfig};
use crate::search::board_scoring::{AnnihilationScorer, BoardScorer, MaterialScorer};

pub struct AlphaBetaEngine<S: BoardScorer = MaterialScorer> {
    scorer: S,
    config: SearchConfig,
    rng: StdRng,
}

impl AlphaBetaEngine<MaterialScorer> {
    pub fn new(depth: u8) -> Self {
        Self::with_scorer(
            MaterialScorer,
            SearchConfig {
                depth,
                ..SearchConfig::default()
            },
        )
    }
}

impl AlphaBetaEngine<AnnihilationScorer> {
    pub fn new_annihilation(depth: u8) -> Self {
        Self::with_scorer(
            AnnihilationScorer,
            SearchConfig {
                depth,
                ..SearchConfig::default()
            },
        )
    }
}

impl<S: BoardScorer> AlphaBetaEngine<S> {
    pub fn with_scorer(scorer: S, config: SearchConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Self {
            scorer,
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl<S: BoardScorer> Agent for AlphaBetaEngine<S> {
    fn name(&self) -> &str {
        "AlphaBeta"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        constraints: &MoveConstraints,
    ) -> CheckersResult<AgentOutput> {
        let result = search_best_move(game_state, &self.scorer, self.config, &mut self.rng);

        let mut out = AgentOutput::new(result.best_move);
        out.info_lines.push(format!(
            "alphabeta depth {} value {} nodes {} candidates {}",
            self.config.depth,
            result.best_value,
            result.nodes,
            result.candidates.len()
        ));
        if let Some(pinned) = constraints.pinned_piece {
            out.info_lines
                .push(format!("alphabeta continuing jump from {pinned}"));
        }
        Ok(out)
    }
}
