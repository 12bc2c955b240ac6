//! Food items that prey consume for energy.
//!
//! Food is passive: it has a position and nothing else. A prey within
//! capture range removes the item from the world's collection; the whole
//! collection is respawned at each generation boundary.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::locatable::Locatable;
use super::params::Params;

/// A food item that prey can consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    /// Position in 2D space.
    pub pos: Array1<f32>,
}

impl Food {
    /// Creates a new food item at a random position inside the arena.
    pub fn new_random<R: Rng>(params: &Params, rng: &mut R) -> Self {
        Self {
            pos: Array1::from_vec(vec![
                rng.random_range(0.0..params.box_width),
                rng.random_range(0.0..params.box_height),
            ]),
        }
    }
}

impl Locatable for Food {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }
}
