//! Crate root module declarations for the Plum Checkers engine project.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! search, agents, learning tables and utility helpers) so binaries, tests
//! and external tooling can import stable module paths.

pub mod checkers_errors;

pub mod game_state {
    pub mod board;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod move_oracle;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod dense_network;
}

pub mod tables {
    pub mod learning_table;
}

pub mod engines {
    pub mod engine_alpha_beta;
    pub mod engine_neural;
    pub mod engine_random;
    pub mod engine_state_learner;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod layout_parser;
    pub mod render_game_state;
}
