//! Outcome statistics keyed by relative board encoding.
//!
//! One table is shared by every learning agent in a run. It is created by the
//! caller and handed to each agent, and it is only written when a game ends.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::engines::engine_trait::AgentOutcome;

pub const WIN_WEIGHT: f64 = 3.0;
pub const DRAW_WEIGHT: f64 = 1.0;
pub const LOSS_WEIGHT: f64 = 200.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateStats {
    pub seen: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
}

impl StateStats {
    /// `(3·won + drawn − 200·lost) / seen`, zero for unseen states.
    pub fn score(&self) -> f64 {
        if self.seen == 0 {
            return 0.0;
        }
        (WIN_WEIGHT * f64::from(self.won) + DRAW_WEIGHT * f64::from(self.drawn)
            - LOSS_WEIGHT * f64::from(self.lost))
            / f64::from(self.seen)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LearningTable {
    entries: HashMap<String, StateStats>,
}

pub type SharedLearningTable = Arc<Mutex<LearningTable>>;

impl LearningTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_shared() -> SharedLearningTable {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn stats(&self, key: &str) -> Option<StateStats> {
        self.entries.get(key).copied()
    }

    pub fn score(&self, key: &str) -> f64 {
        self.entries.get(key).map_or(0.0, StateStats::score)
    }

    /// Count one more sighting of `key` ending in `outcome`.
    pub fn record(&mut self, key: &str, outcome: AgentOutcome) {
        let stats = self.entries.entry(key.to_owned()).or_default();
        stats.seen += 1;
        match outcome {
            AgentOutcome::Win => stats.won += 1,
            AgentOutcome::Draw => stats.drawn += 1,
            AgentOutcome::Loss => stats.lost += 1,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }
}

/// Lock a shared table, mapping poisoning to a crate error.
pub fn lock_table(
    table: &SharedLearningTable,
) -> CheckersResult<std::sync::MutexGuard<'_, LearningTable>> {
    table.lock().map_err(|_| CheckersError::LearningTablePoisoned)
}
