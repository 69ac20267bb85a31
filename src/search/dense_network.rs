//! Inference-only fully-connected network used as an opaque position scorer.
//!
//! Training happens elsewhere; this module only evaluates a network from
//! explicit weights. Hidden layers use ReLU, the output layer is linear.

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::{Color, Position};
use crate::game_state::game_state::GameState;

/// Number of playable (dark) squares, one input per square.
pub const FEATURE_COUNT: usize = BOARD_SIZE * BOARD_SIZE / 2;

pub trait MoveScorer: Send + Sync {
    /// Higher is better for the side the features were encoded for.
    fn score(&self, features: &[f32]) -> f32;
}

/// Encode the playable squares from `perspective`: own man 1, own king 2,
/// enemy man −1, enemy king −2, empty 0.
pub fn board_features(game_state: &GameState, perspective: Color) -> Vec<f32> {
    let mut features = Vec::with_capacity(FEATURE_COUNT);
    for row in 0..BOARD_SIZE as u8 {
        for col in 0..BOARD_SIZE as u8 {
            if (row + col) % 2 == 0 {
                continue;
            }
            let value = match game_state.piece_at(Position::new(row, col)) {
                None => 0.0,
                Some(piece) => {
                    let magnitude = if piece.king { 2.0 } else { 1.0 };
                    if piece.color == perspective {
                        magnitude
                    } else {
                        -magnitude
                    }
                }
            };
            features.push(value);
        }
    }
    features
}

#[derive(Debug, Clone, PartialEq)]
pub struct DenseLayer {
    /// Row-major `outputs × inputs`.
    weights: Vec<f32>,
    biases: Vec<f32>,
    inputs: usize,
}

impl DenseLayer {
    pub fn new(inputs: usize, weights: Vec<f32>, biases: Vec<f32>) -> CheckersResult<Self> {
        if inputs == 0 || weights.len() != inputs * biases.len() {
            return Err(CheckersError::NetworkShape(format!(
                "{} weights for {} inputs and {} outputs",
                weights.len(),
                inputs,
                biases.len()
            )));
        }
        Ok(Self {
            weights,
            biases,
            inputs,
        })
    }

    #[inline]
    pub fn outputs(&self) -> usize {
        self.biases.len()
    }

    fn forward(&self, input: &[f32], relu: bool) -> Vec<f32> {
        self.weights
            .chunks_exact(self.inputs)
            .zip(&self.biases)
            .map(|(row, bias)| {
                let sum = row.iter().zip(input).map(|(w, x)| w * x).sum::<f32>() + bias;
                if relu {
                    sum.max(0.0)
                } else {
                    sum
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DenseNetwork {
    layers: Vec<DenseLayer>,
}

impl DenseNetwork {
    /// Chain `layers`; each layer's inputs must equal the previous outputs and
    /// the last layer must produce a single value.
    pub fn new(layers: Vec<DenseLayer>) -> CheckersResult<Self> {
        let Some(last) = layers.last() else {
            return Err(CheckersError::NetworkShape("no layers".to_owned()));
        };
        if last.outputs() != 1 {
            return Err(CheckersError::NetworkShape(format!(
                "final layer has {} outputs",
                last.outputs()
            )));
        }
        for pair in layers.windows(2) {
            if pair[0].outputs() != pair[1].inputs {
                return Err(CheckersError::NetworkShape(format!(
                    "layer with {} outputs feeds layer with {} inputs",
                    pair[0].outputs(),
                    pair[1].inputs
                )));
            }
        }
        Ok(Self { layers })
    }

    /// Single linear layer summing the features, i.e. material with men 1 and kings 2.
    pub fn material_baseline() -> CheckersResult<Self> {
        let layer = DenseLayer::new(
            FEATURE_COUNT,
            vec![1.0; FEATURE_COUNT],
            vec![0.0],
        )?;
        Self::new(vec![layer])
    }

    #[inline]
    pub fn input_len(&self) -> usize {
        self.layers[0].inputs
    }
}

impl MoveScorer for DenseNetwork {
    fn score(&self, features: &[f32]) -> f32 {
        let last = self.layers.len() - 1;
        let mut activation = features.to_vec();
        for (i, layer) in self.layers.iter().enumerate() {
            activation = layer.forward(&activation, i != last);
        }
        activation[0]
    }
}
