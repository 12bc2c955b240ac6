//! Neural network implementation for agent brains.
//!
//! Every agent carries a fixed-topology two-layer perceptron: the sensory
//! input vector is multiplied through `w1` into a six-unit hidden layer and
//! through `w2` into a two-unit output (turn, thrust), with tanh activation
//! after each layer and no bias terms. Evolution operates on brains by deep
//! cloning and by adding scaled Gaussian noise to every weight.

use ndarray::{Array1, Array2};
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

/// Number of hidden units in every brain.
pub const HIDDEN_SIZE: usize = 6;
/// Number of outputs: steering (turn) and acceleration (thrust).
pub const OUTPUT_SIZE: usize = 2;
/// Input count for prey brains: bearing signal, food distance, energy.
pub const PREY_INPUTS: usize = 3;
/// Input count for predator brains: bearing signal, prey distance,
/// rival-predator distance, energy.
pub const PREDATOR_INPUTS: usize = 4;

/// Neural network brain that steers a single agent.
///
/// Weight matrices are the only state; cloning a brain deep-copies both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brain {
    /// Input-to-hidden weights (`input_size` x `HIDDEN_SIZE`).
    pub w1: Array2<f32>,
    /// Hidden-to-output weights (`HIDDEN_SIZE` x `OUTPUT_SIZE`).
    pub w2: Array2<f32>,
}

impl Brain {
    /// Creates a brain with standard-normal random weights.
    pub fn new_random<R: Rng>(input_size: usize, rng: &mut R) -> Self {
        Self {
            w1: Array2::from_shape_fn((input_size, HIDDEN_SIZE), |_| rng.sample(StandardNormal)),
            w2: Array2::from_shape_fn((HIDDEN_SIZE, OUTPUT_SIZE), |_| rng.sample(StandardNormal)),
        }
    }

    /// Creates a brain from explicit weight matrices.
    ///
    /// # Panics
    ///
    /// Panics if the matrix shapes do not chain into `HIDDEN_SIZE` and
    /// `OUTPUT_SIZE`. Weights are always produced internally with fixed
    /// shapes; this constructor exists so tests can pin brain outputs.
    pub fn from_weights(w1: Array2<f32>, w2: Array2<f32>) -> Self {
        assert_eq!(w1.ncols(), HIDDEN_SIZE);
        assert_eq!(w2.nrows(), HIDDEN_SIZE);
        assert_eq!(w2.ncols(), OUTPUT_SIZE);
        Self { w1, w2 }
    }

    /// Runs a forward pass: `tanh(tanh(input . w1) . w2)`.
    ///
    /// Pure function; both outputs are bounded to [-1, 1].
    #[inline]
    pub fn think(&self, inputs: &Array1<f32>) -> Array1<f32> {
        let mut hidden = inputs.dot(&self.w1);
        hidden.mapv_inplace(f32::tanh);

        let mut output = hidden.dot(&self.w2);
        output.mapv_inplace(f32::tanh);
        output
    }

    /// Mutates every weight in place by adding standard-normal noise
    /// scaled by `rate`.
    pub fn mutate<R: Rng>(&mut self, rate: f32, rng: &mut R) {
        for w in self.w1.iter_mut() {
            let noise: f32 = rng.sample(StandardNormal);
            *w += noise * rate;
        }
        for w in self.w2.iter_mut() {
            let noise: f32 = rng.sample(StandardNormal);
            *w += noise * rate;
        }
    }

    /// Number of sensory inputs this brain expects.
    pub fn input_size(&self) -> usize {
        self.w1.nrows()
    }
}
